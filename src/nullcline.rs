//! Phase-plane nullcline curves
//!
//! A nullcline is the locus of (v, u) points where one state variable's
//! derivative is zero. Both curves are algebraic, derived from the model
//! equations with no integration:
//!
//! ```text
//! dv/dt = 0  →  u = 0.04v² + 5v + 140 + I   (v-nullcline, a parabola)
//! du/dt = 0  →  u = bv                      (u-nullcline, a line)
//! ```
//!
//! The sweep domain comes from the simulated potential range padded by a
//! fixed margin, so the curves always span the data they describe. The
//! v-nullcline needs a scalar current level; a time-varying drive has no
//! single v-nullcline, so callers supply a representative scalar.

use serde::{Deserialize, Serialize};

/// Points per nullcline sweep
pub const SWEEP_RESOLUTION: usize = 300;

/// Padding (mV) added on both sides of the simulated potential range
pub const SWEEP_MARGIN: f32 = 10.0;

/// The two nullcline curves over a shared potential sweep
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nullclines {
    /// Swept potential values (mV), uniform over the padded range
    pub v: Vec<f32>,
    /// Recovery values where dv/dt = 0, aligned to `v`
    pub v_nullcline: Vec<f32>,
    /// Recovery values where du/dt = 0, aligned to `v`
    pub u_nullcline: Vec<f32>,
}

impl Nullclines {
    /// Sweep `[v_min - margin, v_max + margin]` and evaluate both curves.
    ///
    /// `b` is the recovery sensitivity, `i` the representative drive level.
    pub fn compute(b: f32, i: f32, v_min: f32, v_max: f32) -> Self {
        let lo = v_min - SWEEP_MARGIN;
        let hi = v_max + SWEEP_MARGIN;
        let step = (hi - lo) / (SWEEP_RESOLUTION - 1) as f32;

        let v: Vec<f32> = (0..SWEEP_RESOLUTION).map(|k| lo + k as f32 * step).collect();
        let v_nullcline = v
            .iter()
            .map(|&x| 0.04 * x * x + 5.0 * x + 140.0 + i)
            .collect();
        let u_nullcline = v.iter().map(|&x| b * x).collect();

        Self {
            v,
            v_nullcline,
            u_nullcline,
        }
    }

    /// Number of sweep points (always `SWEEP_RESOLUTION`)
    pub fn len(&self) -> usize {
        self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }
}
