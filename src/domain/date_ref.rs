//! Date reference parsing and resolution

use crate::error::{LuminaError, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// A human date reference that resolves against a base date.
///
/// Only past and present days are expressible; logs describe days already lived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// `N days ago`
    DaysAgo(u32),
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || LuminaError::InvalidDateReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return rest
                .trim()
                .parse::<Weekday>()
                .map(DateReference::LastWeekday)
                .map_err(|_| invalid());
        }

        if let Some(count) = normalized
            .strip_suffix(" days ago")
            .or_else(|| normalized.strip_suffix(" day ago"))
            .or_else(|| normalized.strip_suffix('d'))
        {
            if let Ok(n) = count.trim().parse::<u32>() {
                return Ok(DateReference::DaysAgo(n));
            }
        }

        if let Ok(weekday) = normalized.parse::<Weekday>() {
            return Ok(DateReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
            .map(DateReference::SpecificDate)
            .map_err(|_| invalid())
    }

    /// Resolve this reference to a calendar date.
    ///
    /// Fails with `InvalidDateReference` when the day falls outside the
    /// representable calendar.
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate> {
        let back = match self {
            DateReference::Today => 0,
            DateReference::Yesterday => 1,
            DateReference::DaysAgo(n) => u64::from(*n),
            DateReference::Weekday(day) => days_since(today, *day),
            DateReference::LastWeekday(day) => match days_since(today, *day) {
                0 => 7,
                n => n,
            },
            DateReference::SpecificDate(date) => return Ok(*date),
        };

        today.checked_sub_days(Days::new(back)).ok_or_else(|| {
            LuminaError::InvalidDateReference(format!("{} days before {}", back, today))
        })
    }
}

/// Days between the most recent `target` (today included) and `today`
fn days_since(today: NaiveDate, target: Weekday) -> u64 {
    let current = today.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    u64::from((current + 7 - wanted) % 7)
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    DateReference::parse(input)?
        .resolve(today)
        .map_err(|_| LuminaError::InvalidDateReference(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-02-24 is a Tuesday
    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 24).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(resolve_date("today", base()).unwrap(), day(24));
        assert_eq!(resolve_date("Yesterday", base()).unwrap(), day(23));
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(DateReference::parse("3 days ago").unwrap(), DateReference::DaysAgo(3));
        assert_eq!(DateReference::parse("1 day ago").unwrap(), DateReference::DaysAgo(1));
        assert_eq!(DateReference::parse("10d").unwrap(), DateReference::DaysAgo(10));
        assert_eq!(resolve_date("3 days ago", base()).unwrap(), day(21));
    }

    #[test]
    fn test_weekday_most_recent() {
        assert_eq!(resolve_date("tuesday", base()).unwrap(), day(24));
        assert_eq!(resolve_date("monday", base()).unwrap(), day(23));
        assert_eq!(resolve_date("wed", base()).unwrap(), day(18));
    }

    #[test]
    fn test_last_weekday_is_strictly_before() {
        assert_eq!(resolve_date("last tuesday", base()).unwrap(), day(17));
        assert_eq!(resolve_date("last sunday", base()).unwrap(), day(22));
    }

    #[test]
    fn test_specific_dates() {
        assert_eq!(resolve_date("2026-02-20", base()).unwrap(), day(20));
        assert_eq!(resolve_date("20-02-2026", base()).unwrap(), day(20));
    }

    #[test]
    fn test_days_ago_beyond_calendar_is_rejected() {
        let reference = DateReference::parse("1000000000 days ago").unwrap();
        assert!(matches!(
            reference.resolve(base()),
            Err(LuminaError::InvalidDateReference(_))
        ));
        match resolve_date("4000000000d", base()) {
            Err(LuminaError::InvalidDateReference(s)) => assert_eq!(s, "4000000000d"),
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(
            DateReference::DaysAgo(365).resolve(base()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()
        );
    }

    #[test]
    fn test_invalid_references() {
        for input in ["someday", "last blursday", "2026-13-01", "tomorrow", ""] {
            match DateReference::parse(input) {
                Err(LuminaError::InvalidDateReference(s)) => assert_eq!(s, input),
                other => panic!("expected error for {:?}, got {:?}", input, other),
            }
        }
    }
}
