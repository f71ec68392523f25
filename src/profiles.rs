//! Named firing-pattern presets
//!
//! Profiles are SERIALIZABLE IDENTIFIERS, not raw parameter sets. A host UI
//! ships preset names in its config and asks for `(params, drive)` here; raw
//! (a, b, c, d) values stay in one place.
//!
//! Parameter values follow the catalog published with the 2003 model paper.

use serde::{Deserialize, Serialize};

use crate::params::{Drive, NeuronParams};

/// Izhikevich firing-pattern presets
///
/// Each profile maps to specific (a, b, c, d) parameters plus a conventional
/// drive current that exhibits the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeuronProfile {
    /// Regular spiking (a=0.02, b=0.2, c=-65, d=8)
    /// Most common cortical excitatory neuron pattern
    #[default]
    RegularSpiking,

    /// Fast spiking (a=0.1, b=0.2, c=-65, d=2)
    /// Cortical inhibitory interneurons
    FastSpiking,

    /// Intrinsically bursting (a=0.02, b=0.2, c=-55, d=4)
    /// Layer 5 pyramidal neurons
    IntrinsicallyBursting,

    /// Chattering (a=0.02, b=0.2, c=-50, d=2)
    /// Layer 4 spiny stellate neurons
    Chattering,

    /// Low-threshold spiking (a=0.02, b=0.25, c=-65, d=2)
    /// Some GABAergic interneurons
    LowThresholdSpiking,

    /// Thalamo-cortical relay (a=0.02, b=0.25, c=-65, d=0.05)
    /// Fires at low drive; tonic or rebound-burst mode
    ThalamoCortical,

    /// Resonator (a=0.1, b=0.25, c=-65, d=2)
    /// Subthreshold oscillations
    Resonator,
}

impl NeuronProfile {
    /// All presets, in catalog order
    pub const ALL: [NeuronProfile; 7] = [
        Self::RegularSpiking,
        Self::FastSpiking,
        Self::IntrinsicallyBursting,
        Self::Chattering,
        Self::LowThresholdSpiking,
        Self::ThalamoCortical,
        Self::Resonator,
    ];

    /// Get the model parameters for this profile
    pub fn params(&self) -> NeuronParams {
        match self {
            Self::RegularSpiking => NeuronParams::new(0.02, 0.2, -65.0, 8.0),
            Self::FastSpiking => NeuronParams::new(0.1, 0.2, -65.0, 2.0),
            Self::IntrinsicallyBursting => NeuronParams::new(0.02, 0.2, -55.0, 4.0),
            Self::Chattering => NeuronParams::new(0.02, 0.2, -50.0, 2.0),
            Self::LowThresholdSpiking => NeuronParams::new(0.02, 0.25, -65.0, 2.0),
            Self::ThalamoCortical => NeuronParams::new(0.02, 0.25, -65.0, 0.05),
            Self::Resonator => NeuronParams::new(0.1, 0.25, -65.0, 2.0),
        }
    }

    /// Conventional drive current exhibiting the pattern
    pub fn drive(&self) -> Drive {
        match self {
            Self::ThalamoCortical => Drive::Constant(1.0),
            _ => Drive::Constant(10.0),
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::RegularSpiking => "Regular spiking - most common excitatory pattern",
            Self::FastSpiking => "Fast spiking - inhibitory interneurons",
            Self::IntrinsicallyBursting => "Intrinsically bursting - layer 5 pyramidal",
            Self::Chattering => "Chattering - spiny stellate neurons",
            Self::LowThresholdSpiking => "Low threshold - some GABAergic interneurons",
            Self::ThalamoCortical => "Thalamo-cortical relay - fires at low drive",
            Self::Resonator => "Resonator - subthreshold oscillations",
        }
    }

    /// Look up a profile by its catalog name (case-insensitive, separators ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "regularspiking" => Some(Self::RegularSpiking),
            "fastspiking" => Some(Self::FastSpiking),
            "intrinsicallybursting" => Some(Self::IntrinsicallyBursting),
            "chattering" => Some(Self::Chattering),
            "lowthresholdspiking" => Some(Self::LowThresholdSpiking),
            "thalamocortical" => Some(Self::ThalamoCortical),
            "resonator" => Some(Self::Resonator),
            _ => None,
        }
    }
}
