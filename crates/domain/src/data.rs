use crate::{Entry, EntryID, Exercise, Name, WorkoutDay, WorkoutDayID};

/// The single persisted aggregate.
///
/// One instance exists per user. Mutation helpers consume the aggregate and
/// return a new value with exactly one change applied; persistence happens
/// in [`Service`](crate::Service), not here.
///
/// `exercises[].workout_day_id` and `entries[].exercise_id` should reference
/// existing records; the data layer does not enforce this.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppData {
    pub workout_days: Vec<WorkoutDay>,
    pub exercises: Vec<Exercise>,
    pub entries: Vec<Entry>,
    pub has_loaded_preset: bool,
}

impl AppData {
    #[must_use]
    pub fn add_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replaces the entry with the same ID. No-op if no entry matches.
    #[must_use]
    pub fn update_entry(mut self, entry: Entry) -> Self {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        }
        self
    }

    /// Removes the entry with the given ID. No-op if no entry matches.
    #[must_use]
    pub fn delete_entry(mut self, entry_id: &EntryID) -> Self {
        self.entries.retain(|e| e.id != *entry_id);
        self
    }

    /// Creates a workout day with a fresh ID, ordered after all existing
    /// days.
    #[must_use]
    pub fn add_workout_day(mut self, name: Name) -> Self {
        let sort_order = self
            .workout_days
            .iter()
            .map(|d| d.sort_order)
            .max()
            .unwrap_or(0)
            + 1;
        self.workout_days.push(WorkoutDay {
            id: WorkoutDayID::new(),
            name,
            sort_order,
        });
        self
    }

    #[must_use]
    pub fn add_exercise(mut self, exercise: Exercise) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Replaces the exercise with the same ID. No-op if no exercise matches.
    #[must_use]
    pub fn update_exercise(mut self, exercise: Exercise) -> Self {
        if let Some(existing) = self.exercises.iter_mut().find(|e| e.id == exercise.id) {
            *existing = exercise;
        }
        self
    }
}
