#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod data;
mod entry;
mod error;
mod exercise;
mod id;
mod name;
mod preset;
mod scheme;
mod service;
mod workout_day;

pub use data::AppData;
pub use entry::{Entry, EntryID, EntrySeed, ProgressHint, Unit, history, latest_entry};
pub use error::StorageError;
pub use exercise::{Exercise, ExerciseID, MUSCLE_TAGS, anchors, accessories, of_workout_day};
pub use name::{Name, NameError};
pub use preset::preset_plan;
pub use scheme::{RepScheme, RepSchemeError};
pub use service::{DataRepository, Service};
pub use workout_day::{WorkoutDay, WorkoutDayID, sorted_by_order};
