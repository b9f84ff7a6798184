#![warn(clippy::pedantic)]

use std::mem;

use anchor_domain::{
    AppData, DataRepository, Entry, EntryID, EntrySeed, Exercise, ExerciseID, Name, ProgressHint,
    Service, WorkoutDay, WorkoutDayID,
};

pub mod log;

/// Application state container.
///
/// The aggregate is read from storage once at startup and held in memory;
/// every user action goes through a mutating method, which persists the new
/// aggregate before replacing the held value. UI handlers receive this
/// container explicitly instead of reaching for an ambient singleton.
pub struct App<R> {
    service: Service<R>,
    data: AppData,
}

impl<R: DataRepository> App<R> {
    /// Loads the stored aggregate. On first launch (preset never loaded, or
    /// no workout days present) the preset plan is loaded and persisted
    /// instead.
    pub fn init(repository: R) -> Self {
        let service = Service::new(repository);
        let mut data = service.load();
        if !data.has_loaded_preset || data.workout_days.is_empty() {
            data = service.load_preset();
        }
        Self { service, data }
    }

    #[must_use]
    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Workout days in display order.
    #[must_use]
    pub fn workout_days(&self) -> Vec<&WorkoutDay> {
        anchor_domain::sorted_by_order(&self.data.workout_days)
    }

    /// Exercises of one workout day in display order.
    #[must_use]
    pub fn exercises_of_day(&self, workout_day_id: &WorkoutDayID) -> Vec<&Exercise> {
        anchor_domain::of_workout_day(&self.data.exercises, workout_day_id)
    }

    #[must_use]
    pub fn latest_entry(&self, exercise_id: &ExerciseID) -> Option<&Entry> {
        anchor_domain::latest_entry(&self.data.entries, exercise_id)
    }

    #[must_use]
    pub fn history(&self, exercise_id: &ExerciseID) -> Vec<&Entry> {
        anchor_domain::history(&self.data.entries, exercise_id)
    }

    #[must_use]
    pub fn entry_seed(&self, exercise: &Exercise) -> EntrySeed {
        EntrySeed::for_exercise(exercise, &self.data.entries)
    }

    #[must_use]
    pub fn progress_hint(&self, exercise: &Exercise) -> Option<ProgressHint> {
        ProgressHint::for_exercise(exercise, &self.data.entries)
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.data = self.service.add_entry(mem::take(&mut self.data), entry);
    }

    pub fn update_entry(&mut self, entry: Entry) {
        self.data = self.service.update_entry(mem::take(&mut self.data), entry);
    }

    pub fn delete_entry(&mut self, entry_id: &EntryID) {
        self.data = self.service.delete_entry(mem::take(&mut self.data), entry_id);
    }

    pub fn add_workout_day(&mut self, name: Name) {
        self.data = self.service.add_workout_day(mem::take(&mut self.data), name);
    }

    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.data = self.service.add_exercise(mem::take(&mut self.data), exercise);
    }

    pub fn update_exercise(&mut self, exercise: Exercise) {
        self.data = self.service.update_exercise(mem::take(&mut self.data), exercise);
    }
}
