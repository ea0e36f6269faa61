//! Foreign bindings for the session machine.
//!
//! Mobile hosts hold a [`SessionHandle`], forward user gestures to its
//! exported methods, and render the snapshot records it returns.

uniffi::setup_scaffolding!();

mod errors;
mod logging;
mod objects;
mod session;

pub use errors::LiftlogError;
pub use session::SessionHandle;
