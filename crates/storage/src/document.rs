//! Serde documents pinning the persisted JSON shape.
//!
//! The stored value must keep the exact field names and types written by
//! earlier versions of the application so that previously stored user data
//! keeps loading: camel-case keys, ISO-8601 timestamp strings, `"kg"`/
//! `"lbs"` units, and optional fields omitted when absent.

use anchor_domain as domain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppDataDocument {
    pub workout_days: Vec<WorkoutDayDocument>,
    pub exercises: Vec<ExerciseDocument>,
    pub entries: Vec<EntryDocument>,
    pub has_loaded_preset: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayDocument {
    pub id: String,
    pub name: String,
    pub sort_order: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDocument {
    pub id: String,
    pub workout_day_id: String,
    pub name: String,
    pub muscle_tags: Vec<String>,
    pub is_anchor: bool,
    pub default_scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sort_order: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryDocument {
    pub id: String,
    pub exercise_id: String,
    pub date: DateTime<Utc>,
    pub sets: u32,
    pub reps_text: String,
    pub weight: f64,
    pub unit: UnitDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitDocument {
    Kg,
    Lbs,
}

impl From<&domain::AppData> for AppDataDocument {
    fn from(value: &domain::AppData) -> Self {
        Self {
            workout_days: value.workout_days.iter().map(Into::into).collect(),
            exercises: value.exercises.iter().map(Into::into).collect(),
            entries: value.entries.iter().map(Into::into).collect(),
            has_loaded_preset: value.has_loaded_preset,
        }
    }
}

impl TryFrom<AppDataDocument> for domain::AppData {
    type Error = domain::NameError;

    fn try_from(value: AppDataDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            workout_days: value
                .workout_days
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            exercises: value
                .exercises
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            entries: value.entries.into_iter().map(Into::into).collect(),
            has_loaded_preset: value.has_loaded_preset,
        })
    }
}

impl From<&domain::WorkoutDay> for WorkoutDayDocument {
    fn from(value: &domain::WorkoutDay) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            sort_order: value.sort_order,
        }
    }
}

impl TryFrom<WorkoutDayDocument> for domain::WorkoutDay {
    type Error = domain::NameError;

    fn try_from(value: WorkoutDayDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            sort_order: value.sort_order,
        })
    }
}

impl From<&domain::Exercise> for ExerciseDocument {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            workout_day_id: value.workout_day_id.to_string(),
            name: value.name.to_string(),
            muscle_tags: value.muscle_tags.clone(),
            is_anchor: value.is_anchor,
            default_scheme: value.default_scheme.clone(),
            notes: value.notes.clone(),
            sort_order: value.sort_order,
        }
    }
}

impl TryFrom<ExerciseDocument> for domain::Exercise {
    type Error = domain::NameError;

    fn try_from(value: ExerciseDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            workout_day_id: value.workout_day_id.into(),
            name: domain::Name::new(&value.name)?,
            muscle_tags: value.muscle_tags,
            is_anchor: value.is_anchor,
            default_scheme: value.default_scheme,
            notes: value.notes,
            sort_order: value.sort_order,
        })
    }
}

impl From<&domain::Entry> for EntryDocument {
    fn from(value: &domain::Entry) -> Self {
        Self {
            id: value.id.to_string(),
            exercise_id: value.exercise_id.to_string(),
            date: value.date,
            sets: value.sets,
            reps_text: value.reps_text.clone(),
            weight: value.weight,
            unit: value.unit.into(),
            comment: value.comment.clone(),
        }
    }
}

impl From<EntryDocument> for domain::Entry {
    fn from(value: EntryDocument) -> Self {
        Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            date: value.date,
            sets: value.sets,
            reps_text: value.reps_text,
            weight: value.weight,
            unit: value.unit.into(),
            comment: value.comment,
        }
    }
}

impl From<domain::Unit> for UnitDocument {
    fn from(value: domain::Unit) -> Self {
        match value {
            domain::Unit::Kg => UnitDocument::Kg,
            domain::Unit::Lbs => UnitDocument::Lbs,
        }
    }
}

impl From<UnitDocument> for domain::Unit {
    fn from(value: UnitDocument) -> Self {
        match value {
            UnitDocument::Kg => domain::Unit::Kg,
            UnitDocument::Lbs => domain::Unit::Lbs,
        }
    }
}
