//! Transport modes and optimization preference levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A freight transport mode.
///
/// The set is closed: every per-mode reference table in the planner is
/// keyed by this enum, so adding a mode is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Rail,
    Air,
    Sea,
}

impl TransportMode {
    /// All modes, in a fixed order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Road,
        TransportMode::Rail,
        TransportMode::Air,
        TransportMode::Sea,
    ];

    /// Lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
            TransportMode::Air => "air",
            TransportMode::Sea => "sea",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal preference level for one optimization criterion.
///
/// Levels map to fixed weights; the scoring layer normalizes the three
/// criterion weights so they sum to 0.9, leaving 0.1 for reliability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceLevel {
    VeryLow,
    Low,
    Neutral,
    High,
    VeryHigh,
}

impl PreferenceLevel {
    /// Raw weight of this level.
    pub fn weight(&self) -> f64 {
        match self {
            PreferenceLevel::VeryLow => 10.0,
            PreferenceLevel::Low => 30.0,
            PreferenceLevel::Neutral => 50.0,
            PreferenceLevel::High => 70.0,
            PreferenceLevel::VeryHigh => 90.0,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceLevel::VeryLow => "Very Low",
            PreferenceLevel::Low => "Low",
            PreferenceLevel::Neutral => "Neutral",
            PreferenceLevel::High => "High",
            PreferenceLevel::VeryHigh => "Very High",
        }
    }
}

impl Default for PreferenceLevel {
    fn default() -> Self {
        PreferenceLevel::Neutral
    }
}
