//! The live workout session: screen state, set logging, and timers.
//!
//! All mutation goes through [`WorkoutSessionMachine`]; the presentation
//! layer renders its read-only views and forwards user intents plus the
//! two 1 Hz ticks ([`WorkoutSessionMachine::tick_second`] and
//! [`WorkoutSessionMachine::refresh_elapsed`]).

mod editor;
mod machine;
mod sets;
mod state;
mod timer;

pub use machine::WorkoutSessionMachine;
pub use state::{
    ActiveSet, ExerciseDraft, PR_FLASH_TICKS, PrFlash, REST_DEFAULT_SECS, RestTimer, ScreenKind,
    SessionExercise, SessionState, SessionStats, SetEntry, WorkoutPlan,
};
