use derive_more::{AsRef, Deref, Display};

use crate::{Name, RepScheme, WorkoutDayID, id};

/// Muscle tags offered by the exercise editor.
pub const MUSCLE_TAGS: [&str; 8] = [
    "Chest",
    "Triceps",
    "Biceps",
    "Shoulders",
    "Back",
    "Lats",
    "Legs",
    "Warmup",
];

/// An exercise belonging to exactly one workout day.
///
/// The referenced workout day is not checked by the data layer; callers
/// must keep `workout_day_id` pointing at an existing day. Anchor exercises
/// are the key movements whose progress is tracked most closely; the flag
/// only affects grouping and hints, never stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub workout_day_id: WorkoutDayID,
    pub name: Name,
    pub muscle_tags: Vec<String>,
    pub is_anchor: bool,
    pub default_scheme: String,
    pub notes: Option<String>,
    pub sort_order: u32,
}

impl Exercise {
    /// The parsed default scheme, or `None` if `default_scheme` contains no
    /// scheme.
    #[must_use]
    pub fn scheme(&self) -> Option<RepScheme> {
        RepScheme::find(&self.default_scheme)
    }
}

#[derive(AsRef, Deref, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn new() -> Self {
        Self(id::random())
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Exercises of one workout day in display order. Exercises with equal
/// `sort_order` keep their insertion order.
#[must_use]
pub fn of_workout_day<'a>(
    exercises: &'a [Exercise],
    workout_day_id: &WorkoutDayID,
) -> Vec<&'a Exercise> {
    let mut result = exercises
        .iter()
        .filter(|e| e.workout_day_id == *workout_day_id)
        .collect::<Vec<_>>();
    result.sort_by_key(|e| e.sort_order);
    result
}

/// The anchor exercises among `exercises`, preserving order.
#[must_use]
pub fn anchors<'a>(exercises: &[&'a Exercise]) -> Vec<&'a Exercise> {
    exercises.iter().filter(|e| e.is_anchor).copied().collect()
}

/// The non-anchor (accessory) exercises among `exercises`, preserving order.
#[must_use]
pub fn accessories<'a>(exercises: &[&'a Exercise]) -> Vec<&'a Exercise> {
    exercises.iter().filter(|e| !e.is_anchor).copied().collect()
}
