//! Mood scale and its presentation table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the user feels, on a five point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Mood {
    Awful = 1,
    Bad = 2,
    Okay = 3,
    Good = 4,
    Great = 5,
}

/// Display data for a mood value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodInfo {
    pub mood: Mood,
    pub label: &'static str,
}

const MOOD_TABLE: [MoodInfo; 5] = [
    MoodInfo { mood: Mood::Awful, label: "Awful" },
    MoodInfo { mood: Mood::Bad, label: "Bad" },
    MoodInfo { mood: Mood::Okay, label: "Okay" },
    MoodInfo { mood: Mood::Good, label: "Good" },
    MoodInfo { mood: Mood::Great, label: "Great" },
];

impl Mood {
    /// All moods from worst to best
    pub fn all() -> impl Iterator<Item = Mood> {
        MOOD_TABLE.iter().map(|info| info.mood)
    }

    pub fn info(self) -> &'static MoodInfo {
        &MOOD_TABLE[self.value() as usize - 1]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MOOD_TABLE
            .iter()
            .find(|info| info.mood.value() == value)
            .map(|info| info.mood)
            .ok_or_else(|| format!("Invalid mood: {}. Expected a value from 1 to 5", value))
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.value()
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Accepts either the numeric value or the label (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Mood::try_from(n);
        }
        MOOD_TABLE
            .iter()
            .find(|info| info.label.eq_ignore_ascii_case(trimmed))
            .map(|info| info.mood)
            .ok_or_else(|| {
                format!(
                    "Invalid mood: '{}'. Valid moods are 1-5 or: awful, bad, okay, good, great",
                    s
                )
            })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
