//! Session-sequence editing: reordering, custom exercises, and the
//! exercise-detail draft. All of it is session-scoped; the catalog is
//! never written back.

use log::debug;
use uuid::Uuid;

use crate::catalog::{Exercise, Weight};
use crate::session::WorkoutSessionMachine;
use crate::session::state::{ExerciseDraft, SessionExercise, SessionState, SetEntry};

impl WorkoutSessionMachine {
    /// Moves an exercise within the session sequence. Display order only:
    /// an in-progress exercise is addressed by id, so moving things around
    /// it never changes which exercise is current.
    pub fn reorder_exercises(&mut self, from: usize, to: usize) {
        let Some(workout) = self.state_mut().workout_mut() else {
            debug!("ignoring reorder with no session in progress");
            return;
        };
        if from >= workout.exercises.len() || to >= workout.exercises.len() {
            debug!("ignoring reorder with out-of-range indices {from} -> {to}");
            return;
        }
        let exercise = workout.exercises.remove(from);
        workout.exercises.insert(to, exercise);
    }

    /// Appends a user-defined exercise to this session's sequence. A blank
    /// name (after trimming) is ignored. The catalog is unaffected and the
    /// exercise is gone once the workout ends.
    pub fn add_custom_exercise(
        &mut self,
        name: &str,
        instructions: &str,
        default_sets: u32,
        starting_weight: Option<Weight>,
    ) {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring custom exercise with blank name");
            return;
        }
        let Some(workout) = self.state_mut().workout_mut() else {
            debug!("ignoring custom exercise with no session in progress");
            return;
        };
        let exercise = Exercise {
            id: format!("custom-{}", Uuid::new_v4()),
            name: name.to_string(),
            instructions: instructions.trim().to_string(),
            default_sets: default_sets.max(1),
            last_weight: starting_weight,
        };
        workout.exercises.push(SessionExercise {
            current_sets: exercise.default_sets,
            exercise,
            set_plan: None,
        });
    }

    /// Opens the detail editor for the exercise at `index`, prefilled with
    /// its current name, instructions, and one row per planned set.
    pub fn edit_exercise_details(&mut self, index: usize) {
        let state = std::mem::take(self.state_mut());
        *self.state_mut() = match state {
            SessionState::ExerciseList { workout } => match workout.exercises.get(index) {
                Some(session_exercise) => {
                    let draft = ExerciseDraft {
                        exercise_id: session_exercise.exercise.id.clone(),
                        name: session_exercise.exercise.name.clone(),
                        instructions: session_exercise.exercise.instructions.clone(),
                        sets: (1..=session_exercise.current_sets)
                            .map(|number| SetEntry {
                                number,
                                weight: session_exercise.seed_weight(number),
                                reps: 0,
                            })
                            .collect(),
                    };
                    SessionState::ExerciseDetail { workout, draft }
                }
                None => {
                    debug!("ignoring detail edit of out-of-range index {index}");
                    SessionState::ExerciseList { workout }
                }
            },
            other => {
                debug!("ignoring edit_exercise_details outside the exercise list");
                other
            }
        };
    }

    pub fn draft_set_name(&mut self, name: &str) {
        if let SessionState::ExerciseDetail { draft, .. } = self.state_mut() {
            draft.name = name.to_string();
        }
    }

    pub fn draft_set_instructions(&mut self, instructions: &str) {
        if let SessionState::ExerciseDetail { draft, .. } = self.state_mut() {
            draft.instructions = instructions.to_string();
        }
    }

    pub fn draft_add_set(&mut self) {
        if let SessionState::ExerciseDetail { draft, .. } = self.state_mut() {
            draft.add_set();
        }
    }

    pub fn draft_remove_set(&mut self, number: u32) {
        if let SessionState::ExerciseDetail { draft, .. } = self.state_mut() {
            draft.remove_set(number);
        }
    }

    pub fn draft_update_set(&mut self, number: u32, weight: f64, reps: u32) {
        if let SessionState::ExerciseDetail { draft, .. } = self.state_mut() {
            draft.update_set(number, weight, reps);
        }
    }

    /// Applies the draft back onto the session copy in place and returns to
    /// the exercise list. A blanked-out name keeps the previous one; the
    /// set target becomes the number of draft rows.
    pub fn save_exercise_details(&mut self) {
        let state = std::mem::take(self.state_mut());
        *self.state_mut() = match state {
            SessionState::ExerciseDetail { mut workout, draft } => {
                if let Some(session_exercise) = workout.exercise_mut(&draft.exercise_id) {
                    let name = draft.name.trim();
                    if !name.is_empty() {
                        session_exercise.exercise.name = name.to_string();
                    }
                    session_exercise.exercise.instructions = draft.instructions.clone();
                    session_exercise.current_sets = draft.sets.len().max(1) as u32;
                    session_exercise.set_plan = Some(draft.sets);
                } else {
                    debug!("draft exercise {} vanished from the plan", draft.exercise_id);
                }
                SessionState::ExerciseList { workout }
            }
            other => {
                debug!("ignoring save_exercise_details outside the detail screen");
                other
            }
        };
    }
}
