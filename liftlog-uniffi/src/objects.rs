//! Snapshot records handed across the FFI for rendering. Each is a plain
//! copy of machine state at call time; none of them can mutate the session.

use liftlog::catalog::MuscleGroup;
use liftlog::session::{
    ActiveSet, ExerciseDraft, PrFlash, RestTimer, ScreenKind, SessionExercise, SessionStats,
    SetEntry, WorkoutPlan,
};

#[derive(uniffi::Enum)]
pub enum Screen {
    Selection,
    ExerciseList,
    ExerciseDetail,
    ActiveWorkout,
}

impl From<ScreenKind> for Screen {
    fn from(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Selection => Screen::Selection,
            ScreenKind::ExerciseList => Screen::ExerciseList,
            ScreenKind::ExerciseDetail => Screen::ExerciseDetail,
            ScreenKind::ActiveWorkout => Screen::ActiveWorkout,
        }
    }
}

#[derive(uniffi::Record)]
pub struct GroupRow {
    pub id: String,
    pub name: String,
    pub exercise_count: u32,
    pub last_workout: String,
    pub next_suggestion: String,
}

impl From<&MuscleGroup> for GroupRow {
    fn from(group: &MuscleGroup) -> Self {
        GroupRow {
            id: group.id.clone(),
            name: group.name.clone(),
            exercise_count: group.exercises.len() as u32,
            last_workout: group.last_workout.clone(),
            next_suggestion: group.next_suggestion.clone(),
        }
    }
}

#[derive(uniffi::Record)]
pub struct ExerciseRow {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub current_sets: u32,
    pub completed_sets: u32,
    /// Last-known working weight rendered for display, e.g. "60.0 kg";
    /// absent for bodyweight-only exercises.
    pub last_weight: Option<String>,
}

impl ExerciseRow {
    pub fn from_plan(workout: &WorkoutPlan, session_exercise: &SessionExercise) -> Self {
        ExerciseRow {
            id: session_exercise.exercise.id.clone(),
            name: session_exercise.exercise.name.clone(),
            instructions: session_exercise.exercise.instructions.clone(),
            current_sets: session_exercise.current_sets,
            completed_sets: workout.completed_count(&session_exercise.exercise.id),
            last_weight: session_exercise.exercise.last_weight.map(|w| w.to_string()),
        }
    }
}

#[derive(uniffi::Record)]
pub struct ActiveSetView {
    pub exercise_id: String,
    pub exercise_name: String,
    pub set_number: u32,
    pub total_sets: u32,
    pub weight_input: String,
    pub reps_input: String,
}

impl ActiveSetView {
    pub fn from_plan(workout: &WorkoutPlan, active: &ActiveSet) -> Self {
        let session_exercise = workout.exercise(&active.exercise_id);
        ActiveSetView {
            exercise_id: active.exercise_id.clone(),
            exercise_name: session_exercise
                .map(|e| e.exercise.name.clone())
                .unwrap_or_default(),
            set_number: active.set_number,
            total_sets: session_exercise.map(|e| e.current_sets).unwrap_or(0),
            weight_input: active.weight_input.clone(),
            reps_input: active.reps_input.clone(),
        }
    }
}

#[derive(uniffi::Record)]
pub struct RestTimerView {
    pub remaining_secs: u32,
    pub active: bool,
}

impl From<&RestTimer> for RestTimerView {
    fn from(rest: &RestTimer) -> Self {
        RestTimerView {
            remaining_secs: rest.remaining_secs,
            active: rest.active,
        }
    }
}

#[derive(uniffi::Record)]
pub struct RecordFlashView {
    pub exercise_name: String,
    pub weight: f64,
}

impl From<&PrFlash> for RecordFlashView {
    fn from(flash: &PrFlash) -> Self {
        RecordFlashView {
            exercise_name: flash.exercise_name.clone(),
            weight: flash.weight,
        }
    }
}

#[derive(uniffi::Record)]
pub struct StatsView {
    pub total_sets: u32,
    pub total_weight: f64,
    pub elapsed_minutes: i64,
}

impl From<&SessionStats> for StatsView {
    fn from(stats: &SessionStats) -> Self {
        StatsView {
            total_sets: stats.total_sets,
            total_weight: stats.total_weight,
            elapsed_minutes: stats.elapsed_minutes,
        }
    }
}

#[derive(uniffi::Record)]
pub struct SetRowView {
    pub number: u32,
    pub weight: f64,
    pub reps: u32,
}

impl From<&SetEntry> for SetRowView {
    fn from(entry: &SetEntry) -> Self {
        SetRowView {
            number: entry.number,
            weight: entry.weight,
            reps: entry.reps,
        }
    }
}

#[derive(uniffi::Record)]
pub struct DraftView {
    pub exercise_id: String,
    pub name: String,
    pub instructions: String,
    pub sets: Vec<SetRowView>,
}

impl From<&ExerciseDraft> for DraftView {
    fn from(draft: &ExerciseDraft) -> Self {
        DraftView {
            exercise_id: draft.exercise_id.clone(),
            name: draft.name.clone(),
            instructions: draft.instructions.clone(),
            sets: draft.sets.iter().map(SetRowView::from).collect(),
        }
    }
}
