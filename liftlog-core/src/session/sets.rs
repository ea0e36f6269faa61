//! Set logging and per-exercise set-count adjustment.

use log::debug;

use crate::session::WorkoutSessionMachine;
use crate::session::state::{PrFlash, SessionState, PR_FLASH_TICKS};

/// Strict numeric parse for a weight field. Rejects empty, non-numeric,
/// negative, and non-finite input instead of zeroing it.
fn parse_weight(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

fn parse_reps(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

impl WorkoutSessionMachine {
    /// Overwrites the weight and reps input fields from the UI.
    pub fn set_inputs(&mut self, weight: &str, reps: &str) {
        if let SessionState::ActiveWorkout { active, .. } = self.state_mut() {
            active.weight_input = weight.to_string();
            active.reps_input = reps.to_string();
        }
    }

    /// Logs the current set from the input fields. Returns whether the set
    /// was recorded.
    ///
    /// Invalid input and re-logging an already completed set are rejected
    /// no-ops; the caller's affordance should be disabled in those cases,
    /// but the machine enforces it regardless. A successful log records the
    /// completion, accumulates stats, raises a personal-record flash when
    /// the weight strictly beats the exercise's last-known weight, restarts
    /// the rest timer, and advances to the next set or exercise. The final
    /// set of the final exercise stays put; ending the workout is always an
    /// explicit intent.
    pub fn log_set(&mut self) -> bool {
        let SessionState::ActiveWorkout {
            workout,
            active,
            rest,
            pr_flash,
        } = self.state_mut()
        else {
            debug!("ignoring log_set outside the active workout");
            return false;
        };

        let (Some(weight), Some(reps)) = (
            parse_weight(&active.weight_input),
            parse_reps(&active.reps_input),
        ) else {
            debug!(
                "rejecting set with invalid input: weight={:?} reps={:?}",
                active.weight_input, active.reps_input
            );
            return false;
        };

        let key = (active.exercise_id.clone(), active.set_number);
        if workout.completed.contains(&key) {
            debug!(
                "set {} of {} already logged, ignoring",
                active.set_number, active.exercise_id
            );
            return false;
        }

        let Some(session_exercise) = workout.exercise(&active.exercise_id) else {
            debug!("active exercise {} vanished from the plan", active.exercise_id);
            return false;
        };
        let exercise = session_exercise.exercise.clone();
        let current_sets = session_exercise.current_sets;

        workout.completed.insert(key);
        workout.stats.total_sets += 1;
        workout.stats.total_weight += weight * reps as f64;

        // A set beats the record only by strictly exceeding the last-known
        // weight; bodyweight-only exercises have no record to beat.
        if let Some(last) = exercise.last_weight {
            if weight > last.amount {
                *pr_flash = Some(PrFlash {
                    exercise_name: exercise.name.clone(),
                    weight,
                    ticks_left: PR_FLASH_TICKS,
                });
            }
        }

        rest.start();

        if active.set_number < current_sets {
            active.set_number += 1;
            let seed = workout
                .exercise(&active.exercise_id)
                .map(|e| e.seed_weight(active.set_number))
                .unwrap_or(0.0);
            active.weight_input = format!("{seed}");
            active.reps_input.clear();
        } else if let Some(position) = workout.position_of(&active.exercise_id) {
            if let Some(next) = workout.exercises.get(position + 1) {
                active.exercise_id = next.exercise.id.clone();
                active.set_number = 1;
                active.weight_input = format!("{}", next.seed_weight(1));
                active.reps_input.clear();
            }
            // No exercise left: stay on the final set of the final one.
        }

        true
    }

    /// Adds `delta` to an exercise's session set target, clamped at a
    /// minimum of one. Completed sets above a reduced target are retained;
    /// stats never un-accumulate. When the active exercise shrinks below
    /// the set in progress, the set in progress moves down with it.
    pub fn adjust_set_count(&mut self, exercise_id: &str, delta: i32) {
        let Some(workout) = self.state_mut().workout_mut() else {
            debug!("ignoring adjust_set_count with no session in progress");
            return;
        };
        let Some(session_exercise) = workout.exercise_mut(exercise_id) else {
            debug!("ignoring adjust_set_count for unknown exercise {exercise_id}");
            return;
        };
        let next = session_exercise.current_sets as i64 + delta as i64;
        session_exercise.current_sets = next.max(1) as u32;
        let clamped = session_exercise.current_sets;

        if let SessionState::ActiveWorkout { active, .. } = self.state_mut() {
            if active.exercise_id == exercise_id && active.set_number > clamped {
                active.set_number = clamped;
            }
        }
    }
}
