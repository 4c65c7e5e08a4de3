//! Trend series and mood correlations over stored logs

use crate::domain::{EnergyLevel, Intervention, Mood, SleepHours, StoredRecord};
use chrono::NaiveDate;
use std::fmt;

/// |r| at or above this counts as a real effect
pub const IMPACT_THRESHOLD: f64 = 0.3;

/// One log as plotted on the trend charts
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub label: String,
    pub mood: Mood,
    pub energy: EnergyLevel,
    pub sleep: SleepHours,
}

impl From<&StoredRecord> for TrendPoint {
    fn from(record: &StoredRecord) -> Self {
        TrendPoint {
            date: record.date,
            label: record.date.format("%a").to_string(),
            mood: record.mood,
            energy: record.energy_level,
            sleep: record.sleep_hours,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn from_coefficient(r: f64) -> Self {
        if r >= IMPACT_THRESHOLD {
            Impact::Positive
        } else if r <= -IMPACT_THRESHOLD {
            Impact::Negative
        } else {
            Impact::Neutral
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
        };
        f.write_str(text)
    }
}

/// How strongly a factor moves with mood
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub factor: String,
    pub coefficient: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub mood: f64,
    pub energy: f64,
    pub sleep: f64,
}

/// Everything the trends view shows, computed from logs in ascending order
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub points: Vec<TrendPoint>,
    pub averages: Option<Averages>,
    pub correlations: Vec<Correlation>,
}

impl TrendReport {
    pub fn from_records(records: &[StoredRecord]) -> Self {
        let points: Vec<TrendPoint> = records.iter().map(TrendPoint::from).collect();
        let averages = averages(&points);
        let correlations = correlations(records);
        TrendReport {
            points,
            averages,
            correlations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points ordered by ascending sleep; ties keep chronological order.
    pub fn mood_by_sleep(&self) -> Vec<&TrendPoint> {
        let mut sorted: Vec<&TrendPoint> = self.points.iter().collect();
        sorted.sort_by_key(|p| p.sleep);
        sorted
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn averages(points: &[TrendPoint]) -> Option<Averages> {
    if points.is_empty() {
        return None;
    }
    let moods: Vec<f64> = points.iter().map(|p| f64::from(p.mood.value())).collect();
    let energy: Vec<f64> = points.iter().map(|p| f64::from(p.energy.value())).collect();
    let sleep: Vec<f64> = points.iter().map(|p| p.sleep.hours()).collect();
    Some(Averages {
        mood: mean(&moods),
        energy: mean(&energy),
        sleep: mean(&sleep),
    })
}

/// Pearson correlation coefficient.
///
/// `None` for mismatched lengths, fewer than two samples, or a constant series.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

fn correlations(records: &[StoredRecord]) -> Vec<Correlation> {
    let moods: Vec<f64> = records.iter().map(|r| f64::from(r.mood.value())).collect();

    let mut factors: Vec<(String, Vec<f64>)> = vec![
        (
            "Sleep Duration".to_string(),
            records.iter().map(|r| r.sleep_hours.hours()).collect(),
        ),
        (
            "Energy".to_string(),
            records
                .iter()
                .map(|r| f64::from(r.energy_level.value()))
                .collect(),
        ),
    ];

    for item in Intervention::CATALOG {
        if !records.iter().any(|r| r.interventions.contains(&item)) {
            continue;
        }
        let presence = records
            .iter()
            .map(|r| if r.interventions.contains(&item) { 1.0 } else { 0.0 })
            .collect();
        factors.push((item.name().to_string(), presence));
    }

    factors
        .into_iter()
        .filter_map(|(factor, values)| {
            pearson(&values, &moods).map(|r| Correlation {
                factor,
                coefficient: r,
                impact: Impact::from_coefficient(r),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn record(day: u32, mood: Mood, sleep: f64, interventions: &[Intervention]) -> StoredRecord {
        StoredRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            mood,
            energy_level: EnergyLevel::Moderate,
            sleep_hours: SleepHours::new(sleep),
            interventions: interventions.to_vec(),
            notes: None,
            created_at: Utc.with_ymd_and_hms(2026, 2, day, 21, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_pearson_perfect_lines() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < 1e-9);
        assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_degenerate() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0]), None);
    }

    #[test]
    fn test_impact_thresholds() {
        assert_eq!(Impact::from_coefficient(0.3), Impact::Positive);
        assert_eq!(Impact::from_coefficient(-0.45), Impact::Negative);
        assert_eq!(Impact::from_coefficient(0.1), Impact::Neutral);
    }

    #[test]
    fn test_report_points_and_labels() {
        let records = vec![
            record(23, Mood::Bad, 5.0, &[]),
            record(24, Mood::Great, 8.5, &[Intervention::Exercise]),
        ];
        let report = TrendReport::from_records(&records);
        assert_eq!(report.points.len(), 2);
        assert_eq!(report.points[0].label, "Mon");
        assert_eq!(report.points[1].label, "Tue");

        let averages = report.averages.unwrap();
        assert_eq!(averages.mood, 3.5);
        assert_eq!(averages.sleep, 6.75);
    }

    #[test]
    fn test_correlations_with_sleep_and_interventions() {
        let records = vec![
            record(20, Mood::Bad, 5.0, &[]),
            record(21, Mood::Okay, 6.5, &[Intervention::Exercise]),
            record(22, Mood::Good, 7.5, &[Intervention::Exercise]),
            record(23, Mood::Great, 9.0, &[Intervention::Exercise]),
        ];
        let report = TrendReport::from_records(&records);

        let sleep = report
            .correlations
            .iter()
            .find(|c| c.factor == "Sleep Duration")
            .unwrap();
        assert_eq!(sleep.impact, Impact::Positive);

        let exercise = report
            .correlations
            .iter()
            .find(|c| c.factor == "Exercise")
            .unwrap();
        assert_eq!(exercise.impact, Impact::Positive);

        // Constant energy has no variance and is left out
        assert!(report.correlations.iter().all(|c| c.factor != "Energy"));
        // Never-used interventions are not reported
        assert!(report.correlations.iter().all(|c| c.factor != "Reading"));
    }

    #[test]
    fn test_mood_by_sleep_sorted() {
        let records = vec![
            record(20, Mood::Good, 8.0, &[]),
            record(21, Mood::Bad, 5.5, &[]),
            record(22, Mood::Okay, 7.0, &[]),
        ];
        let report = TrendReport::from_records(&records);
        let sleeps: Vec<f64> = report.mood_by_sleep().iter().map(|p| p.sleep.hours()).collect();
        assert_eq!(sleeps, vec![5.5, 7.0, 8.0]);
    }

    #[test]
    fn test_empty_report() {
        let report = TrendReport::from_records(&[]);
        assert!(report.is_empty());
        assert!(report.averages.is_none());
        assert!(report.correlations.is_empty());
    }
}
