use log::error;

use crate::{AppData, Entry, EntryID, Exercise, Name, StorageError, preset_plan};

/// Persistent store for the [`AppData`] aggregate.
///
/// A missing aggregate reads as `AppData::default()`; only undecodable or
/// inaccessible storage is an error.
pub trait DataRepository {
    fn read_app_data(&self) -> Result<AppData, StorageError>;
    fn write_app_data(&self, data: &AppData) -> Result<(), StorageError>;
}

/// Data access layer on top of a repository.
///
/// Storage failures never reach the caller: reads fall back to the default
/// aggregate and writes are fire-and-forget, each logged. The in-memory
/// aggregate stays authoritative for the session even when a write fails.
/// Every mutation persists the resulting aggregate immediately.
pub struct Service<R> {
    repository: R,
}

impl<R: DataRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn load(&self) -> AppData {
        match self.repository.read_app_data() {
            Ok(data) => data,
            Err(err) => {
                error!("failed to load app data: {err}");
                AppData::default()
            }
        }
    }

    pub fn save(&self, data: &AppData) {
        if let Err(err) = self.repository.write_app_data(data) {
            error!("failed to save app data: {err}");
        }
    }

    /// Replaces the aggregate with the preset plan and persists it. Called
    /// once, on first launch.
    #[must_use]
    pub fn load_preset(&self) -> AppData {
        let data = preset_plan();
        self.save(&data);
        data
    }

    #[must_use]
    pub fn add_entry(&self, data: AppData, entry: Entry) -> AppData {
        let data = data.add_entry(entry);
        self.save(&data);
        data
    }

    #[must_use]
    pub fn update_entry(&self, data: AppData, entry: Entry) -> AppData {
        let data = data.update_entry(entry);
        self.save(&data);
        data
    }

    #[must_use]
    pub fn delete_entry(&self, data: AppData, entry_id: &EntryID) -> AppData {
        let data = data.delete_entry(entry_id);
        self.save(&data);
        data
    }

    #[must_use]
    pub fn add_workout_day(&self, data: AppData, name: Name) -> AppData {
        let data = data.add_workout_day(name);
        self.save(&data);
        data
    }

    #[must_use]
    pub fn add_exercise(&self, data: AppData, exercise: Exercise) -> AppData {
        let data = data.add_exercise(exercise);
        self.save(&data);
        data
    }

    #[must_use]
    pub fn update_exercise(&self, data: AppData, exercise: Exercise) -> AppData {
        let data = data.update_exercise(exercise);
        self.save(&data);
        data
    }
}
