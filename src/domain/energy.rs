//! Energy scale and its presentation table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported energy level, 1 (exhausted) to 5 (peak)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum EnergyLevel {
    Exhausted = 1,
    Low = 2,
    #[default]
    Moderate = 3,
    High = 4,
    Peak = 5,
}

/// Display data for an energy level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyInfo {
    pub level: EnergyLevel,
    pub label: &'static str,
    pub description: &'static str,
}

const ENERGY_TABLE: [EnergyInfo; 5] = [
    EnergyInfo {
        level: EnergyLevel::Exhausted,
        label: "Exhausted",
        description: "Barely keeping eyes open",
    },
    EnergyInfo {
        level: EnergyLevel::Low,
        label: "Low",
        description: "Feeling sluggish and tired",
    },
    EnergyInfo {
        level: EnergyLevel::Moderate,
        label: "Moderate",
        description: "Stable but not vibrant",
    },
    EnergyInfo {
        level: EnergyLevel::High,
        label: "High",
        description: "Productive and alert",
    },
    EnergyInfo {
        level: EnergyLevel::Peak,
        label: "Peak",
        description: "Limitless energy and focus",
    },
];

impl EnergyLevel {
    pub fn all() -> impl Iterator<Item = EnergyLevel> {
        ENERGY_TABLE.iter().map(|info| info.level)
    }

    pub fn info(self) -> &'static EnergyInfo {
        &ENERGY_TABLE[self.value() as usize - 1]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EnergyLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ENERGY_TABLE
            .iter()
            .find(|info| info.level.value() == value)
            .map(|info| info.level)
            .ok_or_else(|| format!("Invalid energy level: {}. Expected a value from 1 to 5", value))
    }
}

impl From<EnergyLevel> for u8 {
    fn from(level: EnergyLevel) -> Self {
        level.value()
    }
}

impl FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return EnergyLevel::try_from(n);
        }
        ENERGY_TABLE
            .iter()
            .find(|info| info.label.eq_ignore_ascii_case(trimmed))
            .map(|info| info.level)
            .ok_or_else(|| {
                format!(
                    "Invalid energy level: '{}'. Valid levels are 1-5 or: exhausted, low, moderate, high, peak",
                    s
                )
            })
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
