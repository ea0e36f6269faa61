//! Machine shell: construction, screen navigation, read accessors.

use chrono::Utc;
use log::debug;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::session::state::{
    ActiveSet, ExerciseDraft, PrFlash, RestTimer, ScreenKind, SessionExercise, SessionState,
    SessionStats, WorkoutPlan,
};

/// Owns the entire workout-taking flow: the active screen, the session's
/// exercise sequence, set progression, the rest timer, and running stats.
///
/// Out-of-range or wrong-screen intents are silent no-ops (logged at
/// debug); bounds are clamped rather than rejected. There is no failure
/// state to recover from.
pub struct WorkoutSessionMachine {
    catalog: Catalog,
    state: SessionState,
}

impl WorkoutSessionMachine {
    pub fn new(catalog: Catalog) -> Self {
        WorkoutSessionMachine {
            catalog,
            state: SessionState::Selection,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn screen(&self) -> ScreenKind {
        self.state.kind()
    }

    pub fn workout(&self) -> Option<&WorkoutPlan> {
        self.state.workout()
    }

    pub fn stats(&self) -> Option<&SessionStats> {
        self.state.workout().map(|w| &w.stats)
    }

    pub fn active_set(&self) -> Option<&ActiveSet> {
        match &self.state {
            SessionState::ActiveWorkout { active, .. } => Some(active),
            _ => None,
        }
    }

    pub fn rest_timer(&self) -> Option<&RestTimer> {
        match &self.state {
            SessionState::ActiveWorkout { rest, .. } => Some(rest),
            _ => None,
        }
    }

    pub fn pr_flash(&self) -> Option<&PrFlash> {
        match &self.state {
            SessionState::ActiveWorkout { pr_flash, .. } => pr_flash.as_ref(),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ExerciseDraft> {
        match &self.state {
            SessionState::ExerciseDetail { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Display position of the in-progress exercise. The machine tracks it
    /// by id; this resolves the id against the current ordering.
    pub fn current_exercise_position(&self) -> Option<usize> {
        match &self.state {
            SessionState::ActiveWorkout { workout, active, .. } => {
                workout.position_of(&active.exercise_id)
            }
            _ => None,
        }
    }

    /// Copies the group's exercises into a fresh session plan and moves to
    /// the exercise list. Unknown group ids are ignored.
    pub fn select_muscle_group(&mut self, group_id: &str) {
        let Some(group) = self.catalog.group(group_id) else {
            debug!("ignoring selection of unknown muscle group {group_id}");
            return;
        };
        let workout = WorkoutPlan {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            exercises: group
                .exercises
                .iter()
                .map(SessionExercise::from_catalog)
                .collect(),
            completed: HashSet::new(),
            stats: SessionStats::default(),
        };
        self.state = SessionState::ExerciseList { workout };
    }

    /// Shortcut for selecting the catalog's recommended group.
    pub fn start_todays_recommendation(&mut self) {
        let group_id = self.catalog.recommended.clone();
        self.select_muscle_group(&group_id);
    }

    /// Begins the exercise at `index` in the session sequence and moves to
    /// the active-workout screen. The first call of a session stamps the
    /// start time; later calls leave it untouched.
    pub fn start_exercise(&mut self, index: usize) {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            SessionState::ExerciseList { mut workout } => match workout.exercises.get(index) {
                Some(session_exercise) => {
                    let active = ActiveSet {
                        exercise_id: session_exercise.exercise.id.clone(),
                        set_number: 1,
                        weight_input: format!("{}", session_exercise.seed_weight(1)),
                        reps_input: String::new(),
                    };
                    if workout.stats.started_at.is_none() {
                        workout.stats.started_at = Some(Utc::now());
                    }
                    SessionState::ActiveWorkout {
                        workout,
                        active,
                        rest: RestTimer::default(),
                        pr_flash: None,
                    }
                }
                None => {
                    debug!("ignoring start of out-of-range exercise index {index}");
                    SessionState::ExerciseList { workout }
                }
            },
            other => {
                debug!("ignoring start_exercise outside the exercise list");
                other
            }
        };
    }

    /// Back-navigation from the active-workout or detail screen. Leaving
    /// the active screen drops the rest timer with it.
    pub fn back_to_list(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            SessionState::ActiveWorkout { workout, .. }
            | SessionState::ExerciseDetail { workout, .. } => {
                SessionState::ExerciseList { workout }
            }
            other => other,
        };
    }

    /// Discards the session from any screen. The next group selection
    /// starts completely fresh.
    pub fn end_workout(&mut self) {
        self.state = SessionState::Selection;
    }
}
