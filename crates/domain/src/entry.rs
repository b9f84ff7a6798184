use std::fmt;

use chrono::{DateTime, Utc};
use derive_more::{AsRef, Deref, Display};

use crate::{Exercise, ExerciseID, id};

/// One logged performance instance of an exercise.
///
/// `reps_text` is free text because rep targets are often ranges like
/// `8-12`. An entry is immutable except through a whole-record replacement
/// by ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryID,
    pub exercise_id: ExerciseID,
    pub date: DateTime<Utc>,
    pub sets: u32,
    pub reps_text: String,
    pub weight: f64,
    pub unit: Unit,
    pub comment: Option<String>,
}

#[derive(AsRef, Deref, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct EntryID(String);

impl EntryID {
    #[must_use]
    pub fn new() -> Self {
        Self(id::random())
    }
}

impl From<&str> for EntryID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Kg,
    Lbs,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Unit::Kg => "kg",
                Unit::Lbs => "lbs",
            }
        )
    }
}

/// The most recent entry for an exercise, by parsed timestamp. Among
/// entries with an equal timestamp the first in original order wins.
#[must_use]
pub fn latest_entry<'a>(entries: &'a [Entry], exercise_id: &ExerciseID) -> Option<&'a Entry> {
    entries
        .iter()
        .filter(|e| e.exercise_id == *exercise_id)
        .fold(None, |latest: Option<&Entry>, e| match latest {
            Some(l) if e.date <= l.date => Some(l),
            _ => Some(e),
        })
}

/// All entries for an exercise, most recent first. The sort is stable, so
/// entries with an equal timestamp keep their original order.
#[must_use]
pub fn history<'a>(entries: &'a [Entry], exercise_id: &ExerciseID) -> Vec<&'a Entry> {
    let mut result = entries
        .iter()
        .filter(|e| e.exercise_id == *exercise_id)
        .collect::<Vec<_>>();
    result.sort_by(|a, b| b.date.cmp(&a.date));
    result
}

/// Prefilled form values for logging a new entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySeed {
    pub sets: u32,
    pub reps_text: String,
    pub weight: f64,
    pub unit: Unit,
}

impl EntrySeed {
    /// Seeds a new entry from the latest logged entry of the exercise. With
    /// no prior entry, sets and reps are derived from the default scheme
    /// instead.
    #[must_use]
    pub fn for_exercise(exercise: &Exercise, entries: &[Entry]) -> Self {
        if let Some(latest) = latest_entry(entries, &exercise.id) {
            return Self {
                sets: latest.sets,
                reps_text: latest.reps_text.clone(),
                weight: latest.weight,
                unit: latest.unit,
            };
        }
        if let Some(scheme) = exercise.scheme() {
            return Self {
                sets: scheme.sets,
                reps_text: scheme.reps_text(),
                ..Self::default()
            };
        }
        Self::default()
    }
}

impl Default for EntrySeed {
    fn default() -> Self {
        Self {
            sets: 3,
            reps_text: "10".to_string(),
            weight: 0.0,
            unit: Unit::Kg,
        }
    }
}

/// Progressive-overload hint shown when logging an anchor exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressHint {
    AddWeight,
    AddReps,
}

impl ProgressHint {
    /// Compares the latest achieved reps against the rep range of the
    /// default scheme. Only anchor exercises with a logged entry and a
    /// parseable scheme produce a hint; reps within the range produce none.
    #[must_use]
    pub fn for_exercise(exercise: &Exercise, entries: &[Entry]) -> Option<Self> {
        if !exercise.is_anchor {
            return None;
        }
        let latest = latest_entry(entries, &exercise.id)?;
        let scheme = exercise.scheme()?;
        let achieved_reps = leading_number(&latest.reps_text)?;

        if achieved_reps >= scheme.max_reps {
            Some(Self::AddWeight)
        } else if achieved_reps < scheme.min_reps {
            Some(Self::AddReps)
        } else {
            None
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::AddWeight => "Consider adding weight",
            Self::AddReps => "Focus on adding reps",
        }
    }
}

fn leading_number(text: &str) -> Option<u32> {
    let digits = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Name, WorkoutDayID};

    use super::*;

    fn entry(id: &str, exercise_id: &str, date: &str, reps_text: &str) -> Entry {
        Entry {
            id: id.into(),
            exercise_id: exercise_id.into(),
            date: date.parse().unwrap(),
            sets: 3,
            reps_text: reps_text.to_string(),
            weight: 60.0,
            unit: Unit::Kg,
            comment: None,
        }
    }

    fn exercise(is_anchor: bool, default_scheme: &str) -> Exercise {
        Exercise {
            id: "bench".into(),
            workout_day_id: WorkoutDayID::from("push"),
            name: Name::new("Bench Press").unwrap(),
            muscle_tags: vec![],
            is_anchor,
            default_scheme: default_scheme.to_string(),
            notes: None,
            sort_order: 1,
        }
    }

    #[test]
    fn test_latest_entry() {
        let entries = [
            entry("a", "bench", "2024-01-01T10:00:00Z", "8"),
            entry("b", "squat", "2024-03-01T10:00:00Z", "5"),
            entry("c", "bench", "2024-02-01T10:00:00Z", "9"),
        ];

        assert_eq!(
            latest_entry(&entries, &"bench".into()).map(|e| e.id.as_ref()),
            Some("c")
        );
    }

    #[test]
    fn test_latest_entry_none_without_matching_entries() {
        let entries = [entry("a", "bench", "2024-01-01T10:00:00Z", "8")];

        assert_eq!(latest_entry(&entries, &"squat".into()), None);
        assert_eq!(latest_entry(&[], &"bench".into()), None);
    }

    #[test]
    fn test_latest_entry_tie_keeps_first() {
        let entries = [
            entry("a", "bench", "2024-01-01T10:00:00Z", "8"),
            entry("b", "bench", "2024-01-01T10:00:00Z", "9"),
        ];

        assert_eq!(
            latest_entry(&entries, &"bench".into()).map(|e| e.id.as_ref()),
            Some("a")
        );
    }

    #[test]
    fn test_history() {
        let entries = [
            entry("a", "bench", "2024-01-01T10:00:00Z", "8"),
            entry("b", "squat", "2024-03-01T10:00:00Z", "5"),
            entry("c", "bench", "2024-02-01T10:00:00Z", "9"),
        ];

        assert_eq!(
            history(&entries, &"bench".into())
                .iter()
                .map(|e| e.id.as_ref())
                .collect::<Vec<&str>>(),
            vec!["c", "a"]
        );
    }

    #[test]
    fn test_history_is_idempotent() {
        let entries = [
            entry("a", "bench", "2024-01-01T10:00:00Z", "8"),
            entry("c", "bench", "2024-02-01T10:00:00Z", "9"),
        ];
        let once = history(&entries, &"bench".into())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = history(&once, &"bench".into())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_entry_seed_from_latest_entry() {
        let entries = [
            entry("a", "bench", "2024-01-01T10:00:00Z", "8"),
            entry("c", "bench", "2024-02-01T10:00:00Z", "9-10"),
        ];

        assert_eq!(
            EntrySeed::for_exercise(&exercise(true, "3x8-12"), &entries),
            EntrySeed {
                sets: 3,
                reps_text: "9-10".to_string(),
                weight: 60.0,
                unit: Unit::Kg,
            }
        );
    }

    #[test]
    fn test_entry_seed_from_default_scheme() {
        assert_eq!(
            EntrySeed::for_exercise(&exercise(true, "3x8-12"), &[]),
            EntrySeed {
                sets: 3,
                reps_text: "8-12".to_string(),
                weight: 0.0,
                unit: Unit::Kg,
            }
        );
    }

    #[test]
    fn test_entry_seed_fallback() {
        assert_eq!(
            EntrySeed::for_exercise(&exercise(true, "to failure"), &[]),
            EntrySeed {
                sets: 3,
                reps_text: "10".to_string(),
                weight: 0.0,
                unit: Unit::Kg,
            }
        );
    }

    #[rstest]
    #[case::at_max("12", Some(ProgressHint::AddWeight))]
    #[case::above_max("14", Some(ProgressHint::AddWeight))]
    #[case::below_min("6", Some(ProgressHint::AddReps))]
    #[case::within_range("10", None)]
    #[case::range_counts_lower_bound("12-14", Some(ProgressHint::AddWeight))]
    #[case::no_leading_number("failure", None)]
    fn test_progress_hint(#[case] reps_text: &str, #[case] expected: Option<ProgressHint>) {
        let entries = [entry("a", "bench", "2024-01-01T10:00:00Z", reps_text)];

        assert_eq!(
            ProgressHint::for_exercise(&exercise(true, "3x8-12"), &entries),
            expected
        );
    }

    #[test]
    fn test_progress_hint_only_for_anchor_exercises() {
        let entries = [entry("a", "bench", "2024-01-01T10:00:00Z", "12")];

        assert_eq!(
            ProgressHint::for_exercise(&exercise(false, "3x8-12"), &entries),
            None
        );
    }

    #[test]
    fn test_progress_hint_requires_entry_and_scheme() {
        let entries = [entry("a", "bench", "2024-01-01T10:00:00Z", "12")];

        assert_eq!(ProgressHint::for_exercise(&exercise(true, "3x8-12"), &[]), None);
        assert_eq!(
            ProgressHint::for_exercise(&exercise(true, "AMRAP"), &entries),
            None
        );
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Kg.to_string(), "kg");
        assert_eq!(Unit::Lbs.to_string(), "lbs");
    }
}
