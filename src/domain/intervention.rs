//! Intervention catalog and selection set

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Things a user did today to support their health
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intervention {
    Medication,
    Exercise,
    Therapy,
    Meditation,
    Hydration,
    #[serde(rename = "Healthy Meal")]
    HealthyMeal,
    Socializing,
    Reading,
}

impl Intervention {
    /// Full catalog, in display order
    pub const CATALOG: [Intervention; 8] = [
        Intervention::Medication,
        Intervention::Exercise,
        Intervention::Therapy,
        Intervention::Meditation,
        Intervention::Hydration,
        Intervention::HealthyMeal,
        Intervention::Socializing,
        Intervention::Reading,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Intervention::Medication => "Medication",
            Intervention::Exercise => "Exercise",
            Intervention::Therapy => "Therapy",
            Intervention::Meditation => "Meditation",
            Intervention::Hydration => "Hydration",
            Intervention::HealthyMeal => "Healthy Meal",
            Intervention::Socializing => "Socializing",
            Intervention::Reading => "Reading",
        }
    }
}

impl FromStr for Intervention {
    type Err = String;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |text: &str| -> String {
            text.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = normalize(s);

        Intervention::CATALOG
            .iter()
            .copied()
            .find(|item| normalize(item.name()) == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Intervention::CATALOG.iter().map(|i| i.name()).collect();
                format!(
                    "Unknown intervention: '{}'. Valid interventions are: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

impl fmt::Display for Intervention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected interventions; iteration follows catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterventionSet(BTreeSet<Intervention>);

impl InterventionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item if absent, remove it if present.
    /// Returns whether the item is selected afterwards.
    pub fn toggle(&mut self, item: Intervention) -> bool {
        if self.0.remove(&item) {
            false
        } else {
            self.0.insert(item);
            true
        }
    }

    pub fn contains(&self, item: Intervention) -> bool {
        self.0.contains(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Intervention> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Intervention> {
        self.iter().collect()
    }
}

impl FromIterator<Intervention> for InterventionSet {
    fn from_iter<I: IntoIterator<Item = Intervention>>(iter: I) -> Self {
        InterventionSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_names() {
        assert_eq!(
            "Healthy Meal".parse::<Intervention>().unwrap(),
            Intervention::HealthyMeal
        );
        assert_eq!(
            "healthy-meal".parse::<Intervention>().unwrap(),
            Intervention::HealthyMeal
        );
        assert_eq!("READING".parse::<Intervention>().unwrap(), Intervention::Reading);
    }

    #[test]
    fn test_parse_unknown_lists_catalog() {
        let err = "Caffeine".parse::<Intervention>().unwrap_err();
        assert!(err.contains("Caffeine"));
        assert!(err.contains("Socializing"));
    }

    #[test]
    fn test_toggle_parity() {
        let sequence = [
            Intervention::Exercise,
            Intervention::Reading,
            Intervention::Exercise,
            Intervention::Therapy,
            Intervention::Exercise,
            Intervention::Therapy,
        ];
        let mut set = InterventionSet::new();
        for item in sequence {
            set.toggle(item);
        }

        for item in Intervention::CATALOG {
            let count = sequence.iter().filter(|i| **i == item).count();
            assert_eq!(set.contains(item), count % 2 == 1, "{}", item);
        }
    }

    #[test]
    fn test_toggle_reports_membership() {
        let mut set = InterventionSet::new();
        assert!(set.toggle(Intervention::Hydration));
        assert!(!set.toggle(Intervention::Hydration));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_follows_catalog_order() {
        let mut set = InterventionSet::new();
        set.toggle(Intervention::Reading);
        set.toggle(Intervention::Medication);
        set.toggle(Intervention::HealthyMeal);
        assert_eq!(
            set.to_vec(),
            vec![
                Intervention::Medication,
                Intervention::HealthyMeal,
                Intervention::Reading
            ]
        );
    }
}
