pub mod catalog;
pub mod session;

pub use catalog::{Catalog, Exercise, MuscleGroup, Weight, WeightUnit};
pub use session::{ScreenKind, SessionState, WorkoutSessionMachine};
