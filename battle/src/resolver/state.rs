//! BattleState - the state of one encounter

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::log::{BattleLog, LogCategory};
use crate::types::{BattleId, BattleStatus, PlayerCreature, Turn, WildCreature};

static NEXT_BATTLE_ID: AtomicU64 = AtomicU64::new(1);

/// Rejection of an action that the state machine cannot accept.
///
/// Always synchronous, always mutation-free: a rejected action leaves the
/// state and the log exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("invalid action: {0}")]
    InvalidAction(&'static str),
}

/// The full state of one encounter between the caller's active creature
/// and a wild creature.
///
/// Created once per encounter, owned exclusively by one session, and
/// mutated only through [`BattleState::apply`] and
/// [`BattleState::resolve_pending`]. Once `status` leaves
/// [`BattleStatus::Active`] the state is frozen: the current turn stops
/// alternating and every further action is rejected.
#[derive(Debug, Clone)]
pub struct BattleState {
    id: BattleId,
    pub(crate) wild: WildCreature,
    pub(crate) player: PlayerCreature,
    pub(crate) current_turn: Turn,
    pub(crate) status: BattleStatus,
    pub(crate) turn_count: u32,
    pub(crate) log: BattleLog,
}

impl BattleState {
    /// Start an encounter between the caller's creature and a wild one.
    ///
    /// The side with strictly higher current HP acts first; an exact tie
    /// goes to the player. The log opens with the appearance of the wild
    /// creature.
    pub fn new(player: PlayerCreature, wild: WildCreature) -> Self {
        let first_turn = if wild.current_hp > player.current_hp {
            Turn::Wild
        } else {
            Turn::Player
        };

        let mut log = BattleLog::new();
        log.append(
            LogCategory::Info,
            format!("A wild {} appeared!", wild.species_name),
        );

        Self {
            id: BattleId(NEXT_BATTLE_ID.fetch_add(1, Ordering::Relaxed)),
            wild,
            player,
            current_turn: first_turn,
            status: BattleStatus::Active,
            turn_count: 0,
            log,
        }
    }

    pub fn id(&self) -> BattleId {
        self.id
    }

    pub fn wild(&self) -> &WildCreature {
        &self.wild
    }

    pub fn player(&self) -> &PlayerCreature {
        &self.player
    }

    /// Which side owns the current turn (frozen once terminal)
    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    /// Whether the encounter has ended
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Side-turns resolved so far (each player action and each wild
    /// auto-attack counts as one)
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Append an informational note to the log.
    ///
    /// This is the only mutation allowed after a terminal status; the
    /// outcome synchronizer uses it to surface persistence problems
    /// without touching battle state.
    pub fn annotate(&mut self, message: impl Into<String>) {
        self.log.append(LogCategory::Info, message);
    }
}
