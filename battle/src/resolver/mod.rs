//! The battle state machine
//!
//! [`BattleState`] holds everything about one encounter; the turn logic
//! lives in its `apply`/`resolve_pending` methods. All mutation funnels
//! through those two entry points so every transition is observable in
//! the log and replayable under an injected RNG.

mod state;
mod turns;

pub use state::{BattleError, BattleState};
pub use turns::{DAMAGE_MAX, DAMAGE_MIN};
