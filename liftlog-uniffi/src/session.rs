use chrono::Utc;
use std::sync::{Arc, Mutex};

use liftlog::catalog::{Catalog, Weight};
use liftlog::session::WorkoutSessionMachine;

use crate::errors::LiftlogError;
use crate::objects::{
    ActiveSetView, DraftView, ExerciseRow, GroupRow, RecordFlashView, RestTimerView, Screen,
    StatsView,
};

/// The session machine behind a lock, shared with the host UI. All exported
/// methods run a whole operation under the lock on the caller's thread; the
/// machine itself is single-threaded by design.
#[derive(uniffi::Object)]
pub struct SessionHandle {
    machine: Mutex<WorkoutSessionMachine>,
}

impl SessionHandle {
    fn with<R>(
        &self,
        f: impl FnOnce(&mut WorkoutSessionMachine) -> R,
    ) -> Result<R, LiftlogError> {
        let mut machine = self
            .machine
            .lock()
            .map_err(|_| LiftlogError::from("session lock poisoned"))?;
        Ok(f(&mut machine))
    }
}

#[uniffi::export]
impl SessionHandle {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(SessionHandle {
            machine: Mutex::new(WorkoutSessionMachine::new(Catalog::builtin())),
        })
    }

    pub fn screen(&self) -> Result<Screen, LiftlogError> {
        self.with(|m| m.screen().into())
    }

    pub fn muscle_groups(&self) -> Result<Vec<GroupRow>, LiftlogError> {
        self.with(|m| m.catalog().groups.iter().map(GroupRow::from).collect())
    }

    pub fn exercises(&self) -> Result<Vec<ExerciseRow>, LiftlogError> {
        self.with(|m| {
            m.workout()
                .map(|w| {
                    w.exercises
                        .iter()
                        .map(|e| ExerciseRow::from_plan(w, e))
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    pub fn active_set(&self) -> Result<Option<ActiveSetView>, LiftlogError> {
        self.with(|m| {
            let workout = m.workout()?;
            m.active_set().map(|a| ActiveSetView::from_plan(workout, a))
        })
    }

    pub fn rest_timer(&self) -> Result<Option<RestTimerView>, LiftlogError> {
        self.with(|m| m.rest_timer().map(RestTimerView::from))
    }

    pub fn record_flash(&self) -> Result<Option<RecordFlashView>, LiftlogError> {
        self.with(|m| m.pr_flash().map(RecordFlashView::from))
    }

    pub fn stats(&self) -> Result<Option<StatsView>, LiftlogError> {
        self.with(|m| m.stats().map(StatsView::from))
    }

    pub fn draft(&self) -> Result<Option<DraftView>, LiftlogError> {
        self.with(|m| m.draft().map(DraftView::from))
    }

    pub fn current_exercise_position(&self) -> Result<Option<u64>, LiftlogError> {
        self.with(|m| m.current_exercise_position().map(|p| p as u64))
    }

    pub fn select_muscle_group(&self, group_id: &str) -> Result<(), LiftlogError> {
        self.with(|m| m.select_muscle_group(group_id))
    }

    pub fn start_todays_recommendation(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.start_todays_recommendation())
    }

    pub fn start_exercise(&self, index: u64) -> Result<(), LiftlogError> {
        self.with(|m| m.start_exercise(index as usize))
    }

    pub fn set_inputs(&self, weight: &str, reps: &str) -> Result<(), LiftlogError> {
        self.with(|m| m.set_inputs(weight, reps))
    }

    pub fn log_set(&self) -> Result<bool, LiftlogError> {
        self.with(|m| m.log_set())
    }

    pub fn adjust_set_count(&self, exercise_id: &str, delta: i32) -> Result<(), LiftlogError> {
        self.with(|m| m.adjust_set_count(exercise_id, delta))
    }

    pub fn adjust_rest_timer(&self, delta_secs: i64) -> Result<(), LiftlogError> {
        self.with(|m| m.adjust_rest_timer(delta_secs))
    }

    pub fn skip_rest(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.skip_rest())
    }

    /// Host-scheduled 1 Hz tick for the rest countdown and flash decay.
    pub fn tick_second(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.tick_second())
    }

    /// Host-scheduled coarse refresh of the elapsed-minutes stat.
    pub fn refresh_elapsed(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.refresh_elapsed(Utc::now()))
    }

    pub fn reorder_exercises(&self, from: u64, to: u64) -> Result<(), LiftlogError> {
        self.with(|m| m.reorder_exercises(from as usize, to as usize))
    }

    pub fn add_custom_exercise(
        &self,
        name: &str,
        instructions: &str,
        default_sets: u32,
        starting_weight_kg: Option<f64>,
    ) -> Result<(), LiftlogError> {
        self.with(|m| {
            m.add_custom_exercise(
                name,
                instructions,
                default_sets,
                starting_weight_kg.map(Weight::kg),
            )
        })
    }

    pub fn edit_exercise_details(&self, index: u64) -> Result<(), LiftlogError> {
        self.with(|m| m.edit_exercise_details(index as usize))
    }

    pub fn draft_set_name(&self, name: &str) -> Result<(), LiftlogError> {
        self.with(|m| m.draft_set_name(name))
    }

    pub fn draft_set_instructions(&self, instructions: &str) -> Result<(), LiftlogError> {
        self.with(|m| m.draft_set_instructions(instructions))
    }

    pub fn draft_add_set(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.draft_add_set())
    }

    pub fn draft_remove_set(&self, number: u32) -> Result<(), LiftlogError> {
        self.with(|m| m.draft_remove_set(number))
    }

    pub fn draft_update_set(&self, number: u32, weight: f64, reps: u32) -> Result<(), LiftlogError> {
        self.with(|m| m.draft_update_set(number, weight, reps))
    }

    pub fn save_exercise_details(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.save_exercise_details())
    }

    pub fn back_to_list(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.back_to_list())
    }

    pub fn end_workout(&self) -> Result<(), LiftlogError> {
        self.with(|m| m.end_workout())
    }
}
