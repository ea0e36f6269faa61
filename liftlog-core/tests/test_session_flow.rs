use liftlog::catalog::Catalog;
use liftlog::session::{ScreenKind, WorkoutSessionMachine};

fn machine() -> WorkoutSessionMachine {
    WorkoutSessionMachine::new(Catalog::builtin())
}

#[test]
fn selecting_a_group_copies_its_exercises() {
    let mut m = machine();
    m.select_muscle_group("chest");

    assert_eq!(m.screen(), ScreenKind::ExerciseList);
    let workout = m.workout().expect("a plan after selection");
    let catalog_group = m.catalog().group("chest").unwrap();

    assert_eq!(workout.group_name, "CHEST");
    assert_eq!(workout.exercises.len(), catalog_group.exercises.len());
    for (session_ex, catalog_ex) in workout.exercises.iter().zip(&catalog_group.exercises) {
        assert_eq!(session_ex.exercise, *catalog_ex);
        assert_eq!(session_ex.current_sets, catalog_ex.default_sets);
    }
    assert!(workout.completed.is_empty());
    assert_eq!(workout.stats.total_sets, 0);
    assert_eq!(workout.stats.total_weight, 0.0);
    assert!(workout.stats.started_at.is_none());
}

#[test]
fn unknown_group_id_is_ignored() {
    let mut m = machine();
    m.select_muscle_group("forearms");
    assert_eq!(m.screen(), ScreenKind::Selection);
    assert!(m.workout().is_none());
}

#[test]
fn todays_recommendation_selects_the_recommended_group() {
    let mut m = machine();
    let recommended = m.catalog().recommended.clone();
    m.start_todays_recommendation();
    assert_eq!(m.screen(), ScreenKind::ExerciseList);
    assert_eq!(m.workout().unwrap().group_id, recommended);
}

#[test]
fn starting_an_exercise_seeds_inputs_and_stamps_start() {
    let mut m = machine();
    m.select_muscle_group("chest");
    m.start_exercise(0);

    assert_eq!(m.screen(), ScreenKind::ActiveWorkout);
    let active = m.active_set().unwrap();
    assert_eq!(active.exercise_id, "bench-press");
    assert_eq!(active.set_number, 1);
    assert_eq!(active.weight_input, "60");
    assert!(active.reps_input.is_empty());
    let started_at = m.stats().unwrap().started_at;
    assert!(started_at.is_some());

    // Going back and starting again must not restamp the session start.
    m.back_to_list();
    m.start_exercise(1);
    assert_eq!(m.stats().unwrap().started_at, started_at);
}

#[test]
fn bodyweight_exercise_seeds_zero_weight() {
    let mut m = machine();
    m.select_muscle_group("chest");
    m.start_exercise(3); // Push-ups
    assert_eq!(m.active_set().unwrap().weight_input, "0");
}

#[test]
fn out_of_range_start_is_ignored() {
    let mut m = machine();
    m.select_muscle_group("chest");
    m.start_exercise(99);
    assert_eq!(m.screen(), ScreenKind::ExerciseList);
}

#[test]
fn chest_session_logs_four_bench_sets_and_advances() {
    let mut m = machine();
    m.select_muscle_group("chest");
    m.start_exercise(0); // Bench Press, 4 sets

    for _ in 0..4 {
        m.set_inputs("62.5", "8");
        assert!(m.log_set());
    }

    let stats = m.stats().unwrap();
    assert_eq!(stats.total_sets, 4);
    assert_eq!(stats.total_weight, 62.5 * 8.0 * 4.0);
    assert_eq!(stats.total_weight, 2000.0);

    let active = m.active_set().unwrap();
    assert_eq!(active.exercise_id, "incline-press");
    assert_eq!(active.set_number, 1);
    assert_eq!(active.weight_input, "45");
}

#[test]
fn exactly_n_sets_move_to_the_next_exercise() {
    let mut m = machine();
    m.select_muscle_group("back");
    m.start_exercise(0); // Pull-ups, 3 sets

    for expected_set in 1..=3u32 {
        assert_eq!(m.active_set().unwrap().set_number, expected_set);
        assert_eq!(m.active_set().unwrap().exercise_id, "pull-ups");
        m.set_inputs("0", "10");
        assert!(m.log_set());
    }
    assert_eq!(m.active_set().unwrap().exercise_id, "barbell-rows");
}

#[test]
fn final_set_of_final_exercise_stays_put() {
    let mut m = machine();
    m.select_muscle_group("chest");
    m.start_exercise(3); // Push-ups, last exercise, 3 sets

    for _ in 0..3 {
        m.set_inputs("0", "15");
        assert!(m.log_set());
    }
    let active = m.active_set().unwrap();
    assert_eq!(active.exercise_id, "push-ups");
    assert_eq!(active.set_number, 3);
    assert_eq!(m.screen(), ScreenKind::ActiveWorkout);
}

#[test]
fn relogging_a_completed_set_is_a_no_op() {
    let mut m = machine();
    m.select_muscle_group("chest");
    m.start_exercise(3); // Push-ups: finishing it leaves set 3 current
    for _ in 0..3 {
        m.set_inputs("0", "15");
        assert!(m.log_set());
    }
    let total_sets = m.stats().unwrap().total_sets;
    let total_weight = m.stats().unwrap().total_weight;

    m.set_inputs("0", "15");
    assert!(!m.log_set(), "second log of the same set must be rejected");
    assert_eq!(m.stats().unwrap().total_sets, total_sets);
    assert_eq!(m.stats().unwrap().total_weight, total_weight);
}

#[test]
fn back_navigation_keeps_the_session() {
    let mut m = machine();
    m.select_muscle_group("legs");
    m.start_exercise(0);
    m.set_inputs("80", "5");
    assert!(m.log_set());

    m.back_to_list();
    assert_eq!(m.screen(), ScreenKind::ExerciseList);
    let workout = m.workout().unwrap();
    assert_eq!(workout.stats.total_sets, 1);
    assert_eq!(workout.completed_count("squats"), 1);
    assert!(m.rest_timer().is_none(), "timer state dies with the screen");
}

#[test]
fn end_workout_resets_from_every_screen() {
    // From the exercise list.
    let mut m = machine();
    m.select_muscle_group("arms");
    m.end_workout();
    assert_eq!(m.screen(), ScreenKind::Selection);
    assert!(m.workout().is_none());

    // From an active workout with logged sets and a running timer.
    m.select_muscle_group("chest");
    m.start_exercise(0);
    m.set_inputs("62.5", "8");
    assert!(m.log_set());
    m.end_workout();
    assert_eq!(m.screen(), ScreenKind::Selection);
    assert!(m.workout().is_none());
    assert!(m.active_set().is_none());
    assert!(m.rest_timer().is_none());
    assert!(m.pr_flash().is_none());

    // From the detail editor.
    m.select_muscle_group("back");
    m.edit_exercise_details(0);
    m.end_workout();
    assert_eq!(m.screen(), ScreenKind::Selection);
    assert!(m.draft().is_none());

    // A new selection starts completely fresh.
    m.select_muscle_group("chest");
    let workout = m.workout().unwrap();
    assert_eq!(workout.stats.total_sets, 0);
    assert!(workout.completed.is_empty());
    assert!(workout.stats.started_at.is_none());
}
