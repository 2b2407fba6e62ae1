//! Async encounter sessions for the wild-battle engine.
//!
//! A [`BattleSession`] owns exactly one [`BattleState`] for its whole
//! lifetime: it initializes the encounter from the caller's roster record
//! and the species catalog, feeds player actions through the synchronous
//! battle core, and, on the first terminal transition, synchronizes the
//! outcome back to the roster exactly once.
//!
//! The session is the single writer of its state (`&mut self` on
//! [`BattleSession::submit`]), so actions are strictly sequential and a
//! duplicate submission after the battle ends is rejected by the core's
//! guard instead of interleaving.

pub mod roster;

mod sync;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use bramble_battle::{
    BattleLog, BattleRng, BattleState, CallerId, PlayerCreature, SpeciesId, WildCreature,
};

pub use bramble_battle::{BattleError, BattleStatus, PlayerAction, StdRoll, Turn};
pub use roster::{CatalogError, CreatureRecord, CreatureRoster, RosterError, Species, SpeciesCatalog};

/// Failure to initialize an encounter.
///
/// These are the only hard failures the engine surfaces to the caller;
/// everything after a successful start degrades gracefully.
#[derive(Error, Debug)]
pub enum EncounterError {
    /// The caller has no creature with HP left to battle
    #[error("no usable creature: heal or obtain a creature before battling")]
    NoUsableCreature,

    #[error("unknown species: {0}")]
    SpeciesNotFound(SpeciesId),

    #[error("roster unavailable")]
    Roster(#[source] RosterError),

    #[error("species catalog unavailable")]
    Catalog(#[source] CatalogError),
}

/// One encounter between a caller's active creature and a wild creature.
///
/// Ephemeral: lives only until the caller leaves the battle. Dropping an
/// active session abandons the encounter; nothing is persisted unless a
/// terminal status was reached first.
pub struct BattleSession {
    caller: CallerId,
    roster: Arc<dyn CreatureRoster>,
    rng: Box<dyn BattleRng + Send>,
    state: BattleState,
    synchronized: bool,
}

// The RNG and roster handles are opaque; show the battle itself.
impl fmt::Debug for BattleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleSession")
            .field("caller", &self.caller)
            .field("state", &self.state)
            .field("synchronized", &self.synchronized)
            .finish_non_exhaustive()
    }
}

impl BattleSession {
    /// Start an encounter against one wild specimen of `species_id`.
    ///
    /// Fails with [`EncounterError::NoUsableCreature`] if the caller's
    /// active creature is missing or fainted, and with
    /// [`EncounterError::SpeciesNotFound`] for an unknown species. On
    /// success the returned session is either awaiting a player action or,
    /// if the wild side's opening attack was lethal, already terminal and
    /// synchronized.
    pub async fn start(
        roster: Arc<dyn CreatureRoster>,
        catalog: &dyn SpeciesCatalog,
        caller: CallerId,
        species_id: SpeciesId,
        mut rng: Box<dyn BattleRng + Send>,
    ) -> Result<Self, EncounterError> {
        let record = roster
            .active_creature(&caller)
            .await
            .map_err(|e| match e {
                RosterError::NoUsableCreature => EncounterError::NoUsableCreature,
                other => EncounterError::Roster(other),
            })?;
        if record.current_hp == 0 {
            return Err(EncounterError::NoUsableCreature);
        }

        let species = catalog.species(species_id).await.map_err(|e| match e {
            CatalogError::NotFound(id) => EncounterError::SpeciesNotFound(id),
            other => EncounterError::Catalog(other),
        })?;

        let player = PlayerCreature {
            id: record.id,
            species_id: record.species_id,
            nickname: record.nickname,
            current_hp: record.current_hp,
            max_hp: record.max_hp,
        };
        let wild = WildCreature::spawn(species.id, species.name, species.base_hp);

        let mut state = BattleState::new(player, wild);
        // The wild side may hold the opening turn; resolve it so the caller
        // only ever sees a state that is terminal or awaiting input.
        state.resolve_pending(rng.as_mut());

        let mut session = Self {
            caller,
            roster,
            rng,
            state,
            synchronized: false,
        };
        session.synchronize_if_over().await;
        Ok(session)
    }

    /// Submit one player action and resolve everything it triggers,
    /// including the wild side's answer and, on a terminal transition,
    /// the outcome synchronization.
    pub async fn submit(&mut self, action: PlayerAction) -> Result<&BattleState, BattleError> {
        self.state.apply(action, self.rng.as_mut())?;
        self.synchronize_if_over().await;
        Ok(&self.state)
    }

    /// The battle state as of the last resolved action
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// The battle narration log
    pub fn log(&self) -> &BattleLog {
        self.state.log()
    }

    pub fn caller(&self) -> &CallerId {
        &self.caller
    }

    async fn synchronize_if_over(&mut self) {
        if self.state.is_over() && !self.synchronized {
            // Latch before the writes so the outcome can never sync twice,
            // whatever the roster does.
            self.synchronized = true;
            sync::synchronize(self.roster.as_ref(), &self.caller, &mut self.state).await;
        }
    }
}
