//! Turn-based battle resolution for wild creature encounters.
//!
//! This crate is the synchronous core of the encounter system: it owns no
//! I/O, reaches no database, and spins no tasks. One [`BattleState`] is one
//! encounter, driven from `Active` to a terminal status purely by player
//! actions and the auto-resolved answers of the wild side.
//!
//! # Overview
//!
//! `bramble-battle` sits below the async session layer:
//!
//! ```text
//! bramble-session (roster + catalog collaborators, outcome sync)
//!        │
//!        ▼
//! bramble-battle (state machine + domain types) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`BattleState`] - the full state of one encounter; entry point for
//!   all transitions via [`BattleState::apply`]
//! - [`PlayerAction`] - attack / capture / flee
//! - [`BattleStatus`] / [`Turn`] - lifecycle and turn ownership
//! - [`WildCreature`] / [`PlayerCreature`] - the two combatants
//! - [`BattleLog`] - append-only narration, the record of what happened
//! - [`BattleRng`] - injectable randomness so battles replay in tests
//!
//! # Example Usage
//!
//! ```
//! use bramble_battle::{
//!     BattleState, BattleStatus, PlayerAction, PlayerCreature, SequenceRoll,
//!     SpeciesId, CreatureId, WildCreature,
//! };
//!
//! let player = PlayerCreature {
//!     id: CreatureId::new("c-1"),
//!     species_id: SpeciesId(7),
//!     nickname: "Sprig".to_string(),
//!     current_hp: 40,
//!     max_hp: 40,
//! };
//! let wild = WildCreature::spawn(SpeciesId(3), "Thornback", 35);
//!
//! let mut state = BattleState::new(player, wild);
//! let mut rng = SequenceRoll::new([0.99]); // max roll: 30 damage
//!
//! state.apply(PlayerAction::Attack, &mut rng).unwrap();
//! assert_eq!(state.wild().current_hp, 5);
//! assert_eq!(state.status(), BattleStatus::Active);
//! ```

pub mod capture;
pub mod log;
pub mod resolver;
pub mod rng;
pub mod types;

// Re-export main types at crate root for convenience
pub use capture::{capture_chance, roll_capture};
pub use log::{BattleLog, LogCategory, LogEntry};
pub use resolver::{BattleError, BattleState, DAMAGE_MAX, DAMAGE_MIN};
pub use rng::{BattleRng, SequenceRoll, StdRoll};
pub use types::{
    BattleId, BattleStatus, CallerId, CreatureId, PlayerAction, PlayerCreature, SpeciesId, Turn,
    WildCreature,
};
