//! # Spikeplane - Izhikevich Neuron Simulation
//!
//! Single-neuron simulation engine for the two-variable Izhikevich spiking
//! model, plus the phase-plane nullcline curves used to interpret its
//! dynamics. A host application (plotting UI, notebook, batch runner) owns
//! parameter state and re-invokes the engine on every change; the engine
//! itself is a pure function with no state between calls.
//!
//! ## Model
//!
//! ```text
//! dv/dt = 0.04v² + 5v + 140 - u + I
//! du/dt = a(bv - u)
//! if v >= 30: v = c, u = u + d
//! ```
//!
//! ## Protocol
//!
//! Every run has two phases: an unexcited **equilibration** interval (negative
//! times, zero current) that relaxes the model onto its true resting state,
//! followed by the **stimulus** interval (t = 0 onward) with the drive
//! current applied. The stimulus phase is seeded from equilibration's final
//! state exactly, so the returned trace is contiguous across the boundary.
//!
//! ## Example
//!
//! ```ignore
//! use spikeplane::{simulate, NeuronProfile, Timing};
//!
//! let profile = NeuronProfile::RegularSpiking;
//! let sim = simulate(&profile.params(), &profile.drive(), &Timing::default())?;
//!
//! assert!(sim.spike_count() > 0);
//! for (t, v) in sim.trace.t.iter().zip(&sim.trace.v) {
//!     println!("{t},{v}");
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Pure engine**: no shared state, deterministic output, all buffers
//!   owned per call; safe to run one simulation per UI event on any thread
//! - **Validate once**: configuration errors surface at call entry, never
//!   mid-integration
//! - **Fixed step**: no adaptive control; v advances in two half-steps for
//!   stability near spike onset, u in a single Euler step

// Error type and crate-wide Result alias
pub mod error;
pub use error::{Result, SimulationError};

// Model constants, drive current, timing configuration
pub mod params;
pub use params::{Drive, NeuronParams, Timing, V_PEAK, V_REST};

// Named firing-pattern presets
pub mod profiles;
pub use profiles::NeuronProfile;

// Two-phase integration engine
pub mod engine;
pub use engine::{simulate, Simulation, Trace};

// Phase-plane nullcline curves
pub mod nullcline;
pub use nullcline::{Nullclines, SWEEP_MARGIN, SWEEP_RESOLUTION};
