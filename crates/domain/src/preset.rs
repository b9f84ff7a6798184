use std::sync::LazyLock;

use crate::{AppData, Exercise, Name, WorkoutDay};

struct PresetDay {
    id: &'static str,
    name: &'static str,
    exercises: &'static [PresetExercise],
}

struct PresetExercise {
    id: &'static str,
    name: &'static str,
    muscle_tags: &'static [&'static str],
    is_anchor: bool,
    default_scheme: &'static str,
}

static PRESET: [PresetDay; 3] = [
    PresetDay {
        id: "day-push",
        name: "Push Day",
        exercises: &[
            PresetExercise {
                id: "ex-bench-press",
                name: "Bench Press",
                muscle_tags: &["Chest", "Triceps"],
                is_anchor: true,
                default_scheme: "3x5-8",
            },
            PresetExercise {
                id: "ex-overhead-press",
                name: "Overhead Press",
                muscle_tags: &["Shoulders", "Triceps"],
                is_anchor: true,
                default_scheme: "3x6-10",
            },
            PresetExercise {
                id: "ex-incline-dumbbell-press",
                name: "Incline Dumbbell Press",
                muscle_tags: &["Chest", "Shoulders"],
                is_anchor: false,
                default_scheme: "3x8-12",
            },
            PresetExercise {
                id: "ex-triceps-pushdown",
                name: "Triceps Pushdown",
                muscle_tags: &["Triceps"],
                is_anchor: false,
                default_scheme: "3x10-15",
            },
        ],
    },
    PresetDay {
        id: "day-pull",
        name: "Pull Day",
        exercises: &[
            PresetExercise {
                id: "ex-deadlift",
                name: "Deadlift",
                muscle_tags: &["Back", "Legs"],
                is_anchor: true,
                default_scheme: "3x3-5",
            },
            PresetExercise {
                id: "ex-barbell-row",
                name: "Barbell Row",
                muscle_tags: &["Back", "Lats"],
                is_anchor: true,
                default_scheme: "3x6-10",
            },
            PresetExercise {
                id: "ex-lat-pulldown",
                name: "Lat Pulldown",
                muscle_tags: &["Lats"],
                is_anchor: false,
                default_scheme: "3x8-12",
            },
            PresetExercise {
                id: "ex-biceps-curl",
                name: "Biceps Curl",
                muscle_tags: &["Biceps"],
                is_anchor: false,
                default_scheme: "3x10-15",
            },
        ],
    },
    PresetDay {
        id: "day-legs",
        name: "Leg Day",
        exercises: &[
            PresetExercise {
                id: "ex-squat",
                name: "Squat",
                muscle_tags: &["Legs"],
                is_anchor: true,
                default_scheme: "3x5-8",
            },
            PresetExercise {
                id: "ex-romanian-deadlift",
                name: "Romanian Deadlift",
                muscle_tags: &["Legs", "Back"],
                is_anchor: false,
                default_scheme: "3x8-12",
            },
            PresetExercise {
                id: "ex-leg-press",
                name: "Leg Press",
                muscle_tags: &["Legs"],
                is_anchor: false,
                default_scheme: "3x8-12",
            },
            PresetExercise {
                id: "ex-calf-raise",
                name: "Calf Raise",
                muscle_tags: &["Legs"],
                is_anchor: false,
                default_scheme: "3x10-15",
            },
        ],
    },
];

static PLAN: LazyLock<AppData> = LazyLock::new(|| {
    let mut workout_days = vec![];
    let mut exercises = vec![];

    for (day_index, day) in PRESET.iter().enumerate() {
        workout_days.push(WorkoutDay {
            id: day.id.into(),
            name: Name::new(day.name).unwrap(),
            sort_order: u32::try_from(day_index).unwrap() + 1,
        });
        for (exercise_index, exercise) in day.exercises.iter().enumerate() {
            exercises.push(Exercise {
                id: exercise.id.into(),
                workout_day_id: day.id.into(),
                name: Name::new(exercise.name).unwrap(),
                muscle_tags: exercise
                    .muscle_tags
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                is_anchor: exercise.is_anchor,
                default_scheme: exercise.default_scheme.to_string(),
                notes: None,
                sort_order: u32::try_from(exercise_index).unwrap() + 1,
            });
        }
    }

    AppData {
        workout_days,
        exercises,
        entries: vec![],
        has_loaded_preset: true,
    }
});

/// The fixed seed plan used on first launch: three training days with
/// anchor and accessory exercises and no entries.
#[must_use]
pub fn preset_plan() -> AppData {
    PLAN.clone()
}
