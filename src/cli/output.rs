//! Output formatting utilities

use crate::application::{HomeSummary, TrendsView};
use crate::domain::{Identity, Impact, Intervention, Mood, Profile, SleepHours, StoredRecord};

const BAR_FULL: char = '█';
const BAR_EMPTY: char = '·';

fn bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat(BAR_FULL).take(filled));
    out.extend(std::iter::repeat(BAR_EMPTY).take(width - filled));
    out
}

fn mood_bar(mood: Mood) -> String {
    bar(usize::from(mood.value()), 5)
}

fn sleep_bar(sleep: SleepHours) -> String {
    bar(sleep.hours().round() as usize, SleepHours::MAX as usize)
}

fn intervention_list(items: &[Intervention]) -> String {
    items
        .iter()
        .map(|item| item.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line recap used by history and the log command
pub fn format_record_line(record: &StoredRecord) -> String {
    let mut line = format!(
        "{}  Mood: {:<5}  Energy: {:<9}  Sleep: {}",
        record.date.format("%d-%m-%Y"),
        record.mood.label(),
        record.energy_level.label(),
        record.sleep_hours
    );
    if !record.interventions.is_empty() {
        line.push_str(&format!("  [{}]", intervention_list(&record.interventions)));
    }
    line
}

/// Format a list of logs for display
pub fn format_history(records: &[StoredRecord]) -> String {
    if records.is_empty() {
        return "No logs found".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format_record_line(record));
        output.push('\n');
        if let Some(notes) = &record.notes {
            output.push_str(&format!("            \"{}\"\n", notes));
        }
    }
    output
}

/// Confirmation printed after a log is saved
pub fn format_saved(record: &StoredRecord) -> String {
    format!("Log saved\n{}", format_record_line(record))
}

pub fn format_trends(view: &TrendsView) -> String {
    let report = &view.report;
    if report.is_empty() {
        return "Not enough data yet. Keep logging to see your insights!".to_string();
    }

    let mut output = format!("Mood & Sleep, last {} days\n\n", view.days);
    for point in &report.points {
        output.push_str(&format!(
            "{} {}  {} {:<5}  {} {}\n",
            point.label,
            point.date.format("%d-%m"),
            mood_bar(point.mood),
            point.mood.label(),
            sleep_bar(point.sleep),
            point.sleep
        ));
    }

    output.push_str("\nMood by Sleep Duration\n");
    for point in report.mood_by_sleep() {
        output.push_str(&format!(
            "{:>5}  {} {}\n",
            point.sleep.to_string(),
            mood_bar(point.mood),
            point.mood.label()
        ));
    }

    if let Some(averages) = &report.averages {
        output.push_str("\nAverages\n");
        output.push_str(&format!("  Mood:   {:.1} / 5\n", averages.mood));
        output.push_str(&format!("  Energy: {:.1} / 5\n", averages.energy));
        output.push_str(&format!(
            "  Sleep:  {:.1}h (goal {}h)\n",
            averages.sleep,
            view.sleep_goal.hours()
        ));

        let gap = averages.sleep - view.sleep_goal.hours();
        if gap < 0.0 {
            output.push_str(&format!("  {:.1}h below your sleep goal\n", -gap));
        } else {
            output.push_str("  Meeting your sleep goal\n");
        }
    }

    if !report.correlations.is_empty() {
        output.push_str("\nWhat moves your mood\n");
        for correlation in &report.correlations {
            let marker = match correlation.impact {
                Impact::Positive => '+',
                Impact::Negative => '-',
                Impact::Neutral => '~',
            };
            output.push_str(&format!(
                "  {} {:<16} r = {:>5.2}  {}\n",
                marker, correlation.factor, correlation.coefficient, correlation.impact
            ));
        }
    }

    output
}

pub fn format_home(summary: &HomeSummary) -> String {
    let mut output = format!(
        "Hello, {}\n{}\n\n",
        summary.name,
        summary.today.format("%A, %b %-d")
    );

    match &summary.today_log {
        Some(record) => output.push_str(&format!(
            "Today  Sleep: {}  Energy: {}\n",
            record.sleep_hours,
            record.energy_level.label()
        )),
        None => output.push_str("No log for today yet. Run `lumina log` to add one.\n"),
    }

    output.push_str("\nRecent logs\n");
    if summary.recent.is_empty() {
        output.push_str("  No logs found\n");
    }
    for record in &summary.recent {
        output.push_str(&format!(
            "  {}  Mood: {} • Sleep: {}\n",
            record.date.format("%b %-d"),
            record.mood.label(),
            record.sleep_hours
        ));
    }

    output
}

pub fn format_identity(identity: &Identity) -> String {
    let kind = if identity.anonymous {
        "demo session"
    } else {
        "email account"
    };
    format!("{} ({})\nid: {}", identity.describe(), kind, identity.id)
}

pub fn format_profile(profile: &Profile) -> String {
    format!(
        "full_name = {}\nsleep_goal = {}\nnotifications = {}",
        profile.full_name,
        profile.sleep_goal.hours(),
        if profile.notifications_enabled {
            "on"
        } else {
            "off"
        }
    )
}
