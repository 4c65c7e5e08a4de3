//! Half-hour quantized durations for sleep and sleep goals

use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_SLEEP_HALF_HOURS: u8 = 24;
const MIN_GOAL_HALF_HOURS: u8 = 8;

/// Round to the nearest half hour and clamp to `[min, max]` half hours.
///
/// NaN maps to the lower bound; infinities map to the nearest bound.
fn quantize(hours: f64, min: u8, max: u8) -> u8 {
    if hours.is_nan() {
        return min;
    }
    let halves = (hours * 2.0).round();
    halves.clamp(f64::from(min), f64::from(max)) as u8
}

/// Hours slept, always within `[0, 12]` at 0.5 granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct SleepHours(u8);

impl SleepHours {
    pub const MAX: f64 = 12.0;

    pub fn new(hours: f64) -> Self {
        SleepHours(quantize(hours, 0, MAX_SLEEP_HALF_HOURS))
    }

    pub fn hours(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Default for SleepHours {
    fn default() -> Self {
        SleepHours(14)
    }
}

impl From<f64> for SleepHours {
    fn from(hours: f64) -> Self {
        SleepHours::new(hours)
    }
}

impl From<SleepHours> for f64 {
    fn from(sleep: SleepHours) -> Self {
        sleep.hours()
    }
}

impl fmt::Display for SleepHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

/// Nightly sleep target, within `[4, 12]` at 0.5 granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct SleepGoal(u8);

impl SleepGoal {
    pub fn new(hours: f64) -> Self {
        SleepGoal(quantize(hours, MIN_GOAL_HALF_HOURS, MAX_SLEEP_HALF_HOURS))
    }

    pub fn hours(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Default for SleepGoal {
    fn default() -> Self {
        SleepGoal(16)
    }
}

impl From<f64> for SleepGoal {
    fn from(hours: f64) -> Self {
        SleepGoal::new(hours)
    }
}

impl From<SleepGoal> for f64 {
    fn from(goal: SleepGoal) -> Self {
        goal.hours()
    }
}

impl fmt::Display for SleepGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}
