use anchor_domain as domain;

pub fn app_data() -> domain::AppData {
    domain::AppData {
        workout_days: vec![workout_day()],
        exercises: vec![exercise()],
        entries: vec![entry()],
        has_loaded_preset: true,
    }
}

pub fn workout_day() -> domain::WorkoutDay {
    domain::WorkoutDay {
        id: "day-push".into(),
        name: domain::Name::new("Push Day").unwrap(),
        sort_order: 1,
    }
}

pub fn exercise() -> domain::Exercise {
    domain::Exercise {
        id: "ex-bench-press".into(),
        workout_day_id: "day-push".into(),
        name: domain::Name::new("Bench Press").unwrap(),
        muscle_tags: vec!["Chest".to_string(), "Triceps".to_string()],
        is_anchor: true,
        default_scheme: "3x5-8".to_string(),
        notes: Some("Pause on chest".to_string()),
        sort_order: 1,
    }
}

pub fn entry() -> domain::Entry {
    domain::Entry {
        id: "1706779800000-a1b2c3d4e".into(),
        exercise_id: "ex-bench-press".into(),
        date: "2024-02-01T10:30:00Z".parse().unwrap(),
        sets: 3,
        reps_text: "5-8".to_string(),
        weight: 80.0,
        unit: domain::Unit::Kg,
        comment: None,
    }
}
