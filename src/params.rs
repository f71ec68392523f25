//! Model parameters, drive current, and timing configuration
//!
//! Everything the engine consumes is declared here and validated once at call
//! entry. The stepping loop itself never branches on input shape: a `Drive`
//! is resolved into a per-sample current vector before integration starts.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Resting membrane potential (mV) used to seed the equilibration phase
pub const V_REST: f32 = -65.0;

/// Spike threshold (mV) — the potential at which the discrete reset rule fires
pub const V_PEAK: f32 = 30.0;

/// The four Izhikevich model constants
///
/// ```text
/// dv/dt = 0.04v² + 5v + 140 - u + I
/// du/dt = a(bv - u)
/// if v >= 30: v = c, u = u + d
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeuronParams {
    /// Time scale of the recovery variable; larger a = faster recovery
    pub a: f32,
    /// Sensitivity of u to the membrane potential v
    pub b: f32,
    /// Post-spike reset value of v (mV)
    pub c: f32,
    /// Post-spike increment of u
    pub d: f32,
}

impl NeuronParams {
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Recovery value paired with the resting potential (u₀ = b · v_rest)
    pub fn resting_recovery(&self) -> f32 {
        self.b * V_REST
    }
}

impl Default for NeuronParams {
    /// Regular spiking (a=0.02, b=0.2, c=-65, d=8)
    fn default() -> Self {
        Self::new(0.02, 0.2, -65.0, 8.0)
    }
}

/// Input current applied during the stimulus phase
///
/// Either one scalar held for the whole phase, or one value per stimulus
/// sample. The equilibration phase always runs with zero current.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Drive {
    /// Uniform current across the stimulus phase
    Constant(f32),
    /// Per-sample current, length must equal the stimulus sample count
    Sequence(Vec<f32>),
}

impl Drive {
    /// Resolve into a per-sample current vector of length `n_stim`.
    ///
    /// A `Sequence` whose length differs from `n_stim` is a configuration
    /// error: the caller aligned it to a different `t_stim / dt` than the one
    /// being run.
    pub fn resolve(&self, n_stim: usize) -> Result<Vec<f32>> {
        match self {
            Self::Constant(i) => Ok(vec![*i; n_stim]),
            Self::Sequence(seq) => {
                if seq.len() != n_stim {
                    return Err(SimulationError::invalid(format!(
                        "drive sequence has {} samples, stimulus phase has {}",
                        seq.len(),
                        n_stim
                    )));
                }
                Ok(seq.clone())
            }
        }
    }

    /// Representative scalar for the nullcline sweep.
    ///
    /// The v-nullcline is only defined for a scalar current; a sequence
    /// contributes its mean as the representative level.
    pub fn nullcline_level(&self) -> f32 {
        match self {
            Self::Constant(i) => *i,
            Self::Sequence(seq) => {
                if seq.is_empty() {
                    0.0
                } else {
                    seq.iter().sum::<f32>() / seq.len() as f32
                }
            }
        }
    }
}

impl From<f32> for Drive {
    fn from(i: f32) -> Self {
        Self::Constant(i)
    }
}

/// Timing configuration, all in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Stimulus duration; the drive current is applied from t = 0 for this long
    pub t_stim: f32,
    /// Integration step size
    pub dt: f32,
    /// Equilibration duration run before the stimulus, with zero current
    pub t_pre: f32,
}

impl Timing {
    pub fn new(t_stim: f32, dt: f32, t_pre: f32) -> Self {
        Self { t_stim, dt, t_pre }
    }

    /// Reject timing that cannot produce a well-defined run
    pub fn validate(&self) -> Result<()> {
        if !(self.dt > 0.0) {
            return Err(SimulationError::invalid(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !(self.t_stim > 0.0) {
            return Err(SimulationError::invalid(format!(
                "stimulus duration must be positive, got {}",
                self.t_stim
            )));
        }
        if !(self.t_pre >= 0.0) {
            return Err(SimulationError::invalid(format!(
                "equilibration duration must be non-negative, got {}",
                self.t_pre
            )));
        }
        Ok(())
    }

    /// Number of equilibration samples (⌊t_pre / dt⌋)
    pub fn n_pre(&self) -> usize {
        (self.t_pre / self.dt) as usize
    }

    /// Number of stimulus samples (⌊t_stim / dt⌋)
    pub fn n_stim(&self) -> usize {
        (self.t_stim / self.dt) as usize
    }
}

impl Default for Timing {
    /// 500 ms stimulus at dt = 0.25 after a 50 ms equilibration
    fn default() -> Self {
        Self::new(500.0, 0.25, 50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_rejects_zero_dt() {
        let timing = Timing::new(500.0, 0.0, 50.0);
        assert!(matches!(
            timing.validate(),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_timing_rejects_negative_pre_run() {
        let timing = Timing::new(500.0, 0.25, -1.0);
        assert!(timing.validate().is_err());
    }

    #[test]
    fn test_timing_rejects_nan_dt() {
        let timing = Timing::new(500.0, f32::NAN, 50.0);
        assert!(timing.validate().is_err(), "NaN dt must not validate");
    }

    #[test]
    fn test_sample_counts() {
        let timing = Timing::default();
        assert_eq!(timing.n_pre(), 200);
        assert_eq!(timing.n_stim(), 2000);
    }

    #[test]
    fn test_drive_resolve_constant() {
        let drive = Drive::Constant(10.0);
        let resolved = drive.resolve(4).unwrap();
        assert_eq!(resolved, vec![10.0; 4]);
    }

    #[test]
    fn test_drive_resolve_sequence_length_mismatch() {
        let drive = Drive::Sequence(vec![1.0, 2.0, 3.0]);
        assert!(drive.resolve(4).is_err());
        assert!(drive.resolve(3).is_ok());
    }

    #[test]
    fn test_drive_nullcline_level() {
        assert_eq!(Drive::Constant(10.0).nullcline_level(), 10.0);
        let seq = Drive::Sequence(vec![0.0, 10.0, 20.0]);
        assert!((seq.nullcline_level() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_params_serialization_roundtrip() {
        let params = NeuronParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let restored: NeuronParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, restored);
    }
}
