use chrono::Duration;
use liftlog::catalog::Catalog;
use liftlog::session::{REST_DEFAULT_SECS, WorkoutSessionMachine};

fn active_machine() -> WorkoutSessionMachine {
    let mut m = WorkoutSessionMachine::new(Catalog::builtin());
    m.select_muscle_group("chest");
    m.start_exercise(0); // Bench Press, last-known weight 60 kg
    m
}

#[test]
fn logging_a_set_starts_the_rest_countdown() {
    let mut m = active_machine();
    assert!(!m.rest_timer().unwrap().active);

    m.set_inputs("60", "8");
    assert!(m.log_set());
    let rest = m.rest_timer().unwrap();
    assert!(rest.active);
    assert_eq!(rest.remaining_secs, REST_DEFAULT_SECS);
}

#[test]
fn sixty_ticks_expire_and_rearm_the_timer() {
    let mut m = active_machine();
    m.set_inputs("60", "8");
    assert!(m.log_set());

    for _ in 0..REST_DEFAULT_SECS {
        m.tick_second();
    }
    let rest = m.rest_timer().unwrap();
    assert!(!rest.active);
    assert_eq!(rest.remaining_secs, REST_DEFAULT_SECS);
}

#[test]
fn ticks_do_nothing_while_inactive() {
    let mut m = active_machine();
    m.tick_second();
    m.tick_second();
    let rest = m.rest_timer().unwrap();
    assert!(!rest.active);
    assert_eq!(rest.remaining_secs, REST_DEFAULT_SECS);
}

#[test]
fn skip_deactivates_immediately() {
    let mut m = active_machine();
    m.set_inputs("60", "8");
    assert!(m.log_set());
    m.tick_second();
    assert!(m.rest_timer().unwrap().active);

    m.skip_rest();
    assert!(!m.rest_timer().unwrap().active);
}

#[test]
fn adjust_clamps_at_zero_and_never_goes_negative() {
    let mut m = active_machine();
    m.set_inputs("60", "8");
    assert!(m.log_set());

    m.adjust_rest_timer(-1000);
    assert_eq!(m.rest_timer().unwrap().remaining_secs, 0);

    m.adjust_rest_timer(15);
    assert_eq!(m.rest_timer().unwrap().remaining_secs, 15);
}

#[test]
fn timer_intents_outside_the_active_screen_are_ignored() {
    let mut m = WorkoutSessionMachine::new(Catalog::builtin());
    m.skip_rest();
    m.adjust_rest_timer(30);
    m.tick_second();
    assert!(m.rest_timer().is_none());
}

#[test]
fn heavier_set_raises_a_record_flash_that_decays() {
    let mut m = active_machine();
    m.set_inputs("62.5", "8"); // beats the 60 kg record
    assert!(m.log_set());

    let flash = m.pr_flash().expect("a record flash");
    assert_eq!(flash.exercise_name, "Bench Press");
    assert_eq!(flash.weight, 62.5);

    m.tick_second();
    m.tick_second();
    assert!(m.pr_flash().is_some());
    m.tick_second();
    assert!(m.pr_flash().is_none(), "flash clears after three ticks");
}

#[test]
fn matching_or_lighter_weight_raises_no_flash() {
    let mut m = active_machine();
    m.set_inputs("60", "8"); // exactly the record, not beyond it
    assert!(m.log_set());
    assert!(m.pr_flash().is_none());

    m.set_inputs("55", "10");
    assert!(m.log_set());
    assert!(m.pr_flash().is_none());
}

#[test]
fn bodyweight_exercise_never_flashes() {
    let mut m = WorkoutSessionMachine::new(Catalog::builtin());
    m.select_muscle_group("chest");
    m.start_exercise(3); // Push-ups
    m.set_inputs("20", "10"); // weighted push-ups, still no record to beat
    assert!(m.log_set());
    assert!(m.pr_flash().is_none());
}

#[test]
fn each_record_beating_set_raises_its_own_flash() {
    let mut m = active_machine();
    m.set_inputs("62.5", "8");
    assert!(m.log_set());
    m.tick_second();
    m.tick_second();

    m.set_inputs("65", "6"); // set 2, beats the record again
    assert!(m.log_set());
    let flash = m.pr_flash().unwrap();
    assert_eq!(flash.weight, 65.0);
    assert_eq!(flash.ticks_left, liftlog::session::PR_FLASH_TICKS);
}

#[test]
fn elapsed_minutes_follow_the_session_start() {
    let mut m = active_machine();
    assert_eq!(m.stats().unwrap().elapsed_minutes, 0);

    let started_at = m.stats().unwrap().started_at.unwrap();
    m.refresh_elapsed(started_at + Duration::seconds(30));
    assert_eq!(m.stats().unwrap().elapsed_minutes, 0);

    m.refresh_elapsed(started_at + Duration::minutes(17));
    assert_eq!(m.stats().unwrap().elapsed_minutes, 17);
}
