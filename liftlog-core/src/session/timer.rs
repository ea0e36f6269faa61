//! The two periodic sub-processes: rest countdown and elapsed minutes.
//!
//! The machine does no scheduling of its own. The presentation layer calls
//! [`WorkoutSessionMachine::tick_second`] once per second and
//! [`WorkoutSessionMachine::refresh_elapsed`] at whatever coarse interval
//! suits it, and stops calling both when it leaves the screen; a discarded
//! session can never be mutated by an orphaned tick because the timer state
//! does not exist outside the active-workout screen.

use chrono::{DateTime, Utc};
use log::debug;

use crate::session::WorkoutSessionMachine;
use crate::session::state::SessionState;

impl WorkoutSessionMachine {
    /// 1 Hz tick: counts an active rest timer down (deactivating and
    /// resetting it on expiry) and decays the personal-record flash. Never
    /// advances the exercise or set; that stays a user intent.
    pub fn tick_second(&mut self) {
        if let SessionState::ActiveWorkout { rest, pr_flash, .. } = self.state_mut() {
            rest.tick();
            if let Some(flash) = pr_flash {
                flash.ticks_left = flash.ticks_left.saturating_sub(1);
                if flash.ticks_left == 0 {
                    *pr_flash = None;
                }
            }
        }
    }

    /// Adds `delta_secs` to the remaining rest time, clamped at zero. Does
    /// not start or stop the countdown.
    pub fn adjust_rest_timer(&mut self, delta_secs: i64) {
        match self.state_mut() {
            SessionState::ActiveWorkout { rest, .. } => rest.adjust(delta_secs),
            _ => debug!("ignoring adjust_rest_timer outside the active workout"),
        }
    }

    /// Stops the rest countdown immediately, whatever is left on it.
    pub fn skip_rest(&mut self) {
        match self.state_mut() {
            SessionState::ActiveWorkout { rest, .. } => rest.skip(),
            _ => debug!("ignoring skip_rest outside the active workout"),
        }
    }

    /// Recomputes whole minutes elapsed since the session's first exercise
    /// began. A no-op until that stamp exists.
    pub fn refresh_elapsed(&mut self, now: DateTime<Utc>) {
        if let SessionState::ActiveWorkout { workout, .. } = self.state_mut() {
            if let Some(started_at) = workout.stats.started_at {
                workout.stats.elapsed_minutes = (now - started_at).num_minutes().max(0);
            }
        }
    }
}
