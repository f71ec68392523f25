//! spikeplane-trace — runs one simulation and writes the trace as CSV.
//!
//! The trace (time, potential, recovery) goes to stdout; a spike summary and
//! the nullcline sweep bounds go to stderr so the CSV stays pipeable.
//!
//! # Usage
//!
//! ```bash
//! # Regular Spiking preset, default timing (500 ms at dt=0.25, 50 ms pre-run):
//! cargo run --bin spikeplane-trace
//!
//! # Another preset, custom stimulus duration and step:
//! cargo run --bin spikeplane-trace -- Chattering 300 0.1
//! ```

use anyhow::{bail, Context, Result};

use spikeplane::{simulate, NeuronProfile, Timing};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let profile = match args.first() {
        Some(name) => match NeuronProfile::from_name(name) {
            Some(p) => p,
            None => {
                eprintln!("unknown profile '{name}', available presets:");
                for p in NeuronProfile::ALL {
                    eprintln!("  {:?} - {}", p, p.description());
                }
                bail!("unknown profile '{name}'");
            }
        },
        None => NeuronProfile::RegularSpiking,
    };

    let mut timing = Timing::default();
    if let Some(raw) = args.get(1) {
        timing.t_stim = raw
            .parse()
            .with_context(|| format!("bad stimulus duration '{raw}'"))?;
    }
    if let Some(raw) = args.get(2) {
        timing.dt = raw.parse().with_context(|| format!("bad step size '{raw}'"))?;
    }

    let sim = simulate(&profile.params(), &profile.drive(), &timing)
        .with_context(|| format!("simulating {profile:?}"))?;

    println!("t_ms,v_mv,u");
    for ((t, v), u) in sim.trace.t.iter().zip(&sim.trace.v).zip(&sim.trace.u) {
        println!("{t},{v},{u}");
    }

    eprintln!(
        "{:?}: {} samples, {} spikes over {} ms",
        profile,
        sim.trace.len(),
        sim.spike_count(),
        timing.t_stim
    );
    if let (Some(first), Some(last)) = (sim.nullclines.v.first(), sim.nullclines.v.last()) {
        eprintln!("nullcline sweep: {first:.1} to {last:.1} mV");
    }

    Ok(())
}
