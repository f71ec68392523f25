//! Two-phase Izhikevich integration engine
//!
//! A `simulate` call is a pure function of its inputs: it owns its buffers,
//! touches no shared state, and repeated calls with identical inputs produce
//! bit-identical outputs. The protocol has two phases sharing one stepping
//! rule:
//!
//! 1. **Equilibration** — from the nominal rest state (v=-65, u=b·v), run
//!    with zero current so the model relaxes onto its true fixed point (or
//!    pre-stimulus limit cycle) before the drive is applied. Without this the
//!    plotted stimulus window opens on a startup transient.
//! 2. **Stimulus** — seeded from equilibration's final state, run with the
//!    drive current for the main duration.
//!
//! ## Stepping rule
//!
//! The v equation is stiffer than the u equation near spike onset (the v²
//! term grows quickly), so v advances in two half-steps, re-evaluating its
//! derivative at the midpoint; u tolerates a single Euler step against the
//! fully updated v:
//!
//! ```text
//! dv = 0.04v² + 5v + 140 - u + I;  v += 0.5·dv·dt
//! dv = 0.04v² + 5v + 140 - u + I;  v += 0.5·dv·dt
//! u += a(bv - u)·dt
//! if v >= 30: v = c, u += d
//! ```
//!
//! The reset check runs once per step after the continuous update and
//! overwrites both variables instantaneously. That discrete transition is
//! what turns smooth trajectories into spike trains.
//!
//! Extreme parameter values can push v to overflow or NaN before the
//! threshold check; the engine propagates such values as-is rather than
//! trapping them, matching the reference numerics.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::nullcline::Nullclines;
use crate::params::{Drive, NeuronParams, Timing, V_PEAK, V_REST};

/// Instantaneous neuron state (membrane potential, recovery variable)
#[derive(Clone, Copy, Debug, PartialEq)]
struct State {
    v: f32,
    u: f32,
}

impl State {
    /// Nominal rest state used to seed equilibration
    fn resting(params: &NeuronParams) -> Self {
        Self {
            v: V_REST,
            u: params.resting_recovery(),
        }
    }

    /// Advance by one full dt with drive current `i`, applying the spike
    /// reset. Returns `true` if the reset fired this step.
    fn step(&mut self, params: &NeuronParams, i: f32, dt: f32) -> bool {
        let mut dv = 0.04 * self.v * self.v + 5.0 * self.v + 140.0 - self.u + i;
        self.v += 0.5 * dv * dt;
        dv = 0.04 * self.v * self.v + 5.0 * self.v + 140.0 - self.u + i;
        self.v += 0.5 * dv * dt;
        self.u += params.a * (params.b * self.v - self.u) * dt;

        if self.v >= V_PEAK {
            self.v = params.c;
            self.u += params.d;
            return true;
        }
        false
    }
}

/// Index-aligned time series of one simulation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Sample times (ms); negative during equilibration, zero at stimulus onset
    pub t: Vec<f32>,
    /// Membrane potential (mV)
    pub v: Vec<f32>,
    /// Recovery variable
    pub u: Vec<f32>,
}

impl Trace {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Complete output of one `simulate` call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Combined equilibration + stimulus time series
    pub trace: Trace,
    /// Phase-plane curves over the simulated potential range
    pub nullclines: Nullclines,
    /// Times (ms) at which the spike reset fired
    pub spike_times: Vec<f32>,
}

impl Simulation {
    /// Number of spikes across both phases
    pub fn spike_count(&self) -> usize {
        self.spike_times.len()
    }
}

/// One integration phase: `n` recorded samples, where sample 0 is the seed
/// state and each of the remaining n-1 steps uses `drive[k]` to advance from
/// sample k to k+1. Spike step indices are appended to `spike_steps`.
fn run_phase(
    seed: State,
    params: &NeuronParams,
    drive: &[f32],
    n: usize,
    dt: f32,
    spike_steps: &mut Vec<usize>,
) -> (Vec<f32>, Vec<f32>, State) {
    let mut v_out = Vec::with_capacity(n);
    let mut u_out = Vec::with_capacity(n);
    let mut state = seed;

    if n == 0 {
        return (v_out, u_out, state);
    }

    v_out.push(state.v);
    u_out.push(state.u);
    for k in 0..n - 1 {
        if state.step(params, drive[k], dt) {
            spike_steps.push(k + 1);
        }
        v_out.push(state.v);
        u_out.push(state.u);
    }
    (v_out, u_out, state)
}

/// Run the two-phase protocol and derive the nullcline curves.
///
/// Output lengths: `⌊t_pre/dt⌋ + ⌊t_stim/dt⌋` samples in the trace, 300
/// points per nullcline. The first stimulus sample equals the final
/// equilibration state exactly, and no recorded potential exceeds the spike
/// threshold.
pub fn simulate(params: &NeuronParams, drive: &Drive, timing: &Timing) -> Result<Simulation> {
    timing.validate()?;
    let n_pre = timing.n_pre();
    let n_stim = timing.n_stim();
    let dt = timing.dt;

    let i_stim = drive.resolve(n_stim)?;
    let i_pre = vec![0.0; n_pre];

    let mut pre_spike_steps = Vec::new();
    let (v_pre, u_pre, settled) = run_phase(
        State::resting(params),
        params,
        &i_pre,
        n_pre,
        dt,
        &mut pre_spike_steps,
    );

    let mut stim_spike_steps = Vec::new();
    let (v_stim, u_stim, _) = run_phase(settled, params, &i_stim, n_stim, dt, &mut stim_spike_steps);

    // Time vector: [-t_pre .. -dt] then [0 .. t_stim - dt], contiguous at dt
    let n_total = n_pre + n_stim;
    let t: Vec<f32> = (0..n_total)
        .map(|k| (k as f32 - n_pre as f32) * dt)
        .collect();

    let mut v = v_pre;
    v.extend_from_slice(&v_stim);
    let mut u = u_pre;
    u.extend_from_slice(&u_stim);

    let spike_times: Vec<f32> = pre_spike_steps
        .iter()
        .map(|&k| (k as f32 - n_pre as f32) * dt)
        .chain(stim_spike_steps.iter().map(|&k| k as f32 * dt))
        .collect();

    // Sweep domain covers the full combined trace; the seed state stands in
    // when the trace is empty (t_pre and t_stim both below one dt).
    let (v_min, v_max) = v
        .iter()
        .fold((V_REST, V_REST), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    let nullclines = Nullclines::compute(params.b, drive.nullcline_level(), v_min, v_max);

    Ok(Simulation {
        trace: Trace { t, v, u },
        nullclines,
        spike_times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    fn regular_spiking() -> (NeuronParams, Drive, Timing) {
        (
            NeuronParams::new(0.02, 0.2, -65.0, 8.0),
            Drive::Constant(10.0),
            Timing::new(500.0, 0.25, 50.0),
        )
    }

    #[test]
    fn test_zero_dt_rejected() {
        let (params, drive, _) = regular_spiking();
        let timing = Timing::new(500.0, 0.0, 50.0);
        assert!(matches!(
            simulate(&params, &drive, &timing),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_drive_length_mismatch_rejected() {
        let (params, _, timing) = regular_spiking();
        let drive = Drive::Sequence(vec![10.0; 17]); // n_stim is 2000
        assert!(matches!(
            simulate(&params, &drive, &timing),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_length_invariants() {
        let (params, drive, timing) = regular_spiking();
        let sim = simulate(&params, &drive, &timing).unwrap();
        let expected = timing.n_pre() + timing.n_stim();
        assert_eq!(sim.trace.t.len(), expected);
        assert_eq!(sim.trace.v.len(), expected);
        assert_eq!(sim.trace.u.len(), expected);
    }

    #[test]
    fn test_time_contiguity() {
        let (params, drive, timing) = regular_spiking();
        let sim = simulate(&params, &drive, &timing).unwrap();
        let t = &sim.trace.t;
        for w in t.windows(2) {
            assert!(
                (w[1] - w[0] - timing.dt).abs() < 1e-5,
                "gap between {} and {}",
                w[0],
                w[1]
            );
        }
        assert_eq!(t[0], -timing.t_pre);
        assert_eq!(t[timing.n_pre()], 0.0, "stimulus must begin at t = 0");
    }

    #[test]
    fn test_phase_continuity() {
        let (params, drive, timing) = regular_spiking();
        let sim = simulate(&params, &drive, &timing).unwrap();
        let boundary = timing.n_pre();
        // First stimulus sample is the final equilibration state, exactly
        assert_eq!(sim.trace.v[boundary - 1], sim.trace.v[boundary]);
        assert_eq!(sim.trace.u[boundary - 1], sim.trace.u[boundary]);
    }

    #[test]
    fn test_threshold_invariant() {
        let (params, drive, timing) = regular_spiking();
        let sim = simulate(&params, &drive, &timing).unwrap();
        for (&t, &v) in sim.trace.t.iter().zip(&sim.trace.v) {
            assert!(v < V_PEAK, "v = {v} at t = {t} exceeds the spike threshold");
        }
    }

    #[test]
    fn test_spike_resets_to_c() {
        let (params, drive, timing) = regular_spiking();
        let sim = simulate(&params, &drive, &timing).unwrap();
        assert!(
            sim.spike_count() >= 2,
            "regular spiking at I=10 over 500 ms must spike repeatedly, got {}",
            sim.spike_count()
        );
        let n_pre = timing.n_pre();
        for &t_spike in &sim.spike_times {
            let k = n_pre + (t_spike / timing.dt) as usize;
            assert_eq!(sim.trace.v[k], params.c, "reset sample must be exactly c");
        }
    }

    #[test]
    fn test_zero_current_settles() {
        let (params, _, timing) = regular_spiking();
        let sim = simulate(&params, &Drive::Constant(0.0), &timing).unwrap();
        assert_eq!(sim.spike_count(), 0, "no drive, no spikes");
        // Unexcited, the model sits at its fixed point near v = -70
        let v_last = *sim.trace.v.last().unwrap();
        assert!(
            (v_last - (-70.0)).abs() < 1.0,
            "expected rest near -70 mV, got {v_last}"
        );
    }

    #[test]
    fn test_determinism() {
        let (params, drive, timing) = regular_spiking();
        let first = simulate(&params, &drive, &timing).unwrap();
        let second = simulate(&params, &drive, &timing).unwrap();
        assert_eq!(first, second, "identical inputs must produce identical output");
    }

    #[test]
    fn test_sequence_drive_matches_constant() {
        let (params, _, timing) = regular_spiking();
        let constant = simulate(&params, &Drive::Constant(10.0), &timing).unwrap();
        let sequence = simulate(
            &params,
            &Drive::Sequence(vec![10.0; timing.n_stim()]),
            &timing,
        )
        .unwrap();
        assert_eq!(constant.trace, sequence.trace);
    }

    #[test]
    fn test_zero_equilibration() {
        let (params, drive, _) = regular_spiking();
        let timing = Timing::new(500.0, 0.25, 0.0);
        let sim = simulate(&params, &drive, &timing).unwrap();
        assert_eq!(sim.trace.t.len(), timing.n_stim());
        assert_eq!(sim.trace.t[0], 0.0);
        assert_eq!(sim.trace.v[0], V_REST, "no equilibration, stimulus seeds at rest");
    }

    #[test]
    fn test_stimulus_onset_follows_equilibrated_state() {
        // After 50 ms unexcited the state has relaxed off the nominal rest
        // value, so the stimulus must not open at exactly -65
        let (params, drive, timing) = regular_spiking();
        let sim = simulate(&params, &drive, &timing).unwrap();
        let v_onset = sim.trace.v[timing.n_pre()];
        assert!(
            (v_onset - V_REST).abs() > 0.1,
            "equilibration should move the state off the nominal rest potential"
        );
    }
}
