use derive_more::{AsRef, Deref, Display};

use crate::{Name, id};

/// A named training day, e.g. "Push Day".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub id: WorkoutDayID,
    pub name: Name,
    pub sort_order: u32,
}

#[derive(AsRef, Deref, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct WorkoutDayID(String);

impl WorkoutDayID {
    #[must_use]
    pub fn new() -> Self {
        Self(id::random())
    }
}

impl From<&str> for WorkoutDayID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutDayID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Workout days in display order. Days with equal `sort_order` keep their
/// insertion order.
#[must_use]
pub fn sorted_by_order(workout_days: &[WorkoutDay]) -> Vec<&WorkoutDay> {
    let mut result = workout_days.iter().collect::<Vec<_>>();
    result.sort_by_key(|d| d.sort_order);
    result
}
