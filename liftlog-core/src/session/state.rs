use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::Exercise;

/// Rest countdown default, in seconds.
pub const REST_DEFAULT_SECS: u32 = 60;
/// How many 1 Hz ticks a personal-record flash stays visible.
pub const PR_FLASH_TICKS: u32 = 3;

/// An exercise as copied into the session. Edits here never touch the
/// catalog entry it was copied from.
#[derive(Debug, Clone, Serialize)]
pub struct SessionExercise {
    pub exercise: Exercise,
    /// Target number of sets for this session, always >= 1.
    pub current_sets: u32,
    /// Per-set weight/reps rows, present once the exercise has been edited
    /// on the detail screen.
    pub set_plan: Option<Vec<SetEntry>>,
}

impl SessionExercise {
    pub fn from_catalog(exercise: &Exercise) -> Self {
        SessionExercise {
            current_sets: exercise.default_sets.max(1),
            exercise: exercise.clone(),
            set_plan: None,
        }
    }

    /// Weight magnitude used to seed the input field for `set_number`.
    /// Bodyweight-only exercises seed zero.
    pub fn seed_weight(&self, set_number: u32) -> f64 {
        if let Some(plan) = &self.set_plan {
            if let Some(entry) = plan.get(set_number.saturating_sub(1) as usize) {
                return entry.weight;
            }
        }
        self.exercise.last_weight.map(|w| w.amount).unwrap_or(0.0)
    }
}

/// One configured weight/reps row in the exercise-detail editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetEntry {
    /// 1-based, contiguous within an exercise.
    pub number: u32,
    pub weight: f64,
    pub reps: u32,
}

/// Running totals for the session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    pub total_sets: u32,
    /// Accumulated weight x reps over all logged sets.
    pub total_weight: f64,
    /// Whole minutes since the first exercise was started.
    pub elapsed_minutes: i64,
    /// Stamped when the first exercise of the session begins.
    pub started_at: Option<DateTime<Utc>>,
}

/// Everything a session carries once a muscle group has been selected.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlan {
    pub group_id: String,
    pub group_name: String,
    pub exercises: Vec<SessionExercise>,
    /// Keys of sets that have been logged: (exercise id, set number).
    pub completed: HashSet<(String, u32)>,
    pub stats: SessionStats,
}

impl WorkoutPlan {
    pub fn exercise(&self, exercise_id: &str) -> Option<&SessionExercise> {
        self.exercises.iter().find(|e| e.exercise.id == exercise_id)
    }

    pub fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut SessionExercise> {
        self.exercises
            .iter_mut()
            .find(|e| e.exercise.id == exercise_id)
    }

    pub fn position_of(&self, exercise_id: &str) -> Option<usize> {
        self.exercises
            .iter()
            .position(|e| e.exercise.id == exercise_id)
    }

    pub fn is_completed(&self, exercise_id: &str, set_number: u32) -> bool {
        self.completed
            .contains(&(exercise_id.to_string(), set_number))
    }

    /// Logged sets for one exercise, regardless of the current set target.
    pub fn completed_count(&self, exercise_id: &str) -> u32 {
        self.completed
            .iter()
            .filter(|(id, _)| id == exercise_id)
            .count() as u32
    }
}

/// The set currently being performed on the active-workout screen. The
/// exercise is addressed by stable id so reordering the session sequence
/// cannot silently retarget it.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveSet {
    pub exercise_id: String,
    /// 1-based, within `[1, current_sets]` of the active exercise.
    pub set_number: u32,
    pub weight_input: String,
    pub reps_input: String,
}

/// Advisory rest countdown, restarted after every logged set.
#[derive(Debug, Clone, Serialize)]
pub struct RestTimer {
    pub remaining_secs: u32,
    pub active: bool,
}

impl Default for RestTimer {
    fn default() -> Self {
        RestTimer {
            remaining_secs: REST_DEFAULT_SECS,
            active: false,
        }
    }
}

impl RestTimer {
    pub fn start(&mut self) {
        self.remaining_secs = REST_DEFAULT_SECS;
        self.active = true;
    }

    pub fn skip(&mut self) {
        self.active = false;
        self.remaining_secs = REST_DEFAULT_SECS;
    }

    /// Clamps at zero; never pauses or resumes the countdown.
    pub fn adjust(&mut self, delta_secs: i64) {
        let next = self.remaining_secs as i64 + delta_secs;
        self.remaining_secs = next.max(0) as u32;
    }

    /// One 1 Hz tick. On expiry the timer deactivates and resets to the
    /// default, ready for the next set.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.skip();
        }
    }
}

/// Transient notification raised when a logged set beats the exercise's
/// last-known weight. Auto-clears after [`PR_FLASH_TICKS`] ticks.
#[derive(Debug, Clone, Serialize)]
pub struct PrFlash {
    pub exercise_name: String,
    pub weight: f64,
    pub ticks_left: u32,
}

/// Scratch copy edited on the exercise-detail screen.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseDraft {
    pub exercise_id: String,
    pub name: String,
    pub instructions: String,
    /// Contiguous, 1-based rows; never empty.
    pub sets: Vec<SetEntry>,
}

impl ExerciseDraft {
    pub fn add_set(&mut self) {
        let template = self.sets.last().cloned().unwrap_or(SetEntry {
            number: 0,
            weight: 0.0,
            reps: 0,
        });
        self.sets.push(SetEntry {
            number: self.sets.len() as u32 + 1,
            ..template
        });
    }

    /// Removes the row with `number` and renumbers the rest. The last
    /// remaining row cannot be removed.
    pub fn remove_set(&mut self, number: u32) {
        if self.sets.len() <= 1 {
            return;
        }
        self.sets.retain(|s| s.number != number);
        for (idx, entry) in self.sets.iter_mut().enumerate() {
            entry.number = idx as u32 + 1;
        }
    }

    pub fn update_set(&mut self, number: u32, weight: f64, reps: u32) {
        if let Some(entry) = self.sets.iter_mut().find(|s| s.number == number) {
            entry.weight = weight;
            entry.reps = reps;
        }
    }
}

/// Which screen is showing; a plain tag for render dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScreenKind {
    Selection,
    ExerciseList,
    ExerciseDetail,
    ActiveWorkout,
}

/// The whole session, one variant per screen. Fields only exist on the
/// screens where they mean something: the rest timer and PR flash cannot
/// outlive the active-workout screen, and the selection screen carries
/// nothing at all.
#[derive(Debug, Clone, Default, Serialize)]
pub enum SessionState {
    #[default]
    Selection,
    ExerciseList {
        workout: WorkoutPlan,
    },
    ExerciseDetail {
        workout: WorkoutPlan,
        draft: ExerciseDraft,
    },
    ActiveWorkout {
        workout: WorkoutPlan,
        active: ActiveSet,
        rest: RestTimer,
        pr_flash: Option<PrFlash>,
    },
}

impl SessionState {
    pub fn kind(&self) -> ScreenKind {
        match self {
            SessionState::Selection => ScreenKind::Selection,
            SessionState::ExerciseList { .. } => ScreenKind::ExerciseList,
            SessionState::ExerciseDetail { .. } => ScreenKind::ExerciseDetail,
            SessionState::ActiveWorkout { .. } => ScreenKind::ActiveWorkout,
        }
    }

    pub fn workout(&self) -> Option<&WorkoutPlan> {
        match self {
            SessionState::Selection => None,
            SessionState::ExerciseList { workout }
            | SessionState::ExerciseDetail { workout, .. }
            | SessionState::ActiveWorkout { workout, .. } => Some(workout),
        }
    }

    pub fn workout_mut(&mut self) -> Option<&mut WorkoutPlan> {
        match self {
            SessionState::Selection => None,
            SessionState::ExerciseList { workout }
            | SessionState::ExerciseDetail { workout, .. }
            | SessionState::ActiveWorkout { workout, .. } => Some(workout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_timer_expiry_resets_to_default() {
        let mut timer = RestTimer::default();
        timer.start();
        for _ in 0..REST_DEFAULT_SECS {
            timer.tick();
        }
        assert!(!timer.active);
        assert_eq!(timer.remaining_secs, REST_DEFAULT_SECS);
    }

    #[test]
    fn rest_timer_adjust_clamps_at_zero() {
        let mut timer = RestTimer::default();
        timer.start();
        timer.adjust(-1000);
        assert_eq!(timer.remaining_secs, 0);
        timer.adjust(15);
        assert_eq!(timer.remaining_secs, 15);
    }

    #[test]
    fn draft_remove_renumbers_and_keeps_last_row() {
        let mut draft = ExerciseDraft {
            exercise_id: "bench-press".to_string(),
            name: "Bench Press".to_string(),
            instructions: String::new(),
            sets: vec![
                SetEntry { number: 1, weight: 60.0, reps: 8 },
                SetEntry { number: 2, weight: 60.0, reps: 8 },
                SetEntry { number: 3, weight: 55.0, reps: 10 },
            ],
        };
        draft.remove_set(2);
        assert_eq!(
            draft.sets.iter().map(|s| s.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(draft.sets[1].weight, 55.0);

        draft.remove_set(1);
        draft.remove_set(1);
        assert_eq!(draft.sets.len(), 1, "last row must survive");
    }
}
