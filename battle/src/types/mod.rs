//! Domain types for battle resolution

mod action;
mod creature;
mod ids;
mod status;

pub use action::PlayerAction;
pub use creature::{PlayerCreature, WildCreature};
pub use ids::{BattleId, CallerId, CreatureId, SpeciesId};
pub use status::{BattleStatus, Turn};
