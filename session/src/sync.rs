//! Outcome synchronization - writing the encounter result to the roster
//!
//! Runs after the battle status is already final. Persistence is strictly
//! fire-and-forget with respect to the state machine: a failed write never
//! rolls back the status or blocks the caller from leaving the encounter,
//! it only leaves a warning in the server log and an info entry in the
//! battle narration.

use bramble_battle::{BattleState, BattleStatus, CallerId};

use crate::roster::CreatureRoster;

/// Persist the outcome of a finished encounter.
///
/// The caller (the session) guarantees this runs exactly once per
/// encounter, on the first transition away from `Active`.
pub(crate) async fn synchronize(
    roster: &dyn CreatureRoster,
    caller: &CallerId,
    state: &mut BattleState,
) {
    debug_assert!(state.is_over(), "synchronize called on an active battle");

    // Final player HP persists for every terminal status, a loss included
    // (the roster then holds 0 and the caller must heal before battling).
    let player_id = state.player().id.clone();
    if let Err(e) = roster.update_hp(&player_id, state.player().current_hp).await {
        tracing::warn!(error = %e, creature = %player_id, "failed to persist creature HP");
        state.annotate("Your creature's condition could not be saved.");
    }

    if state.status() == BattleStatus::Captured {
        let wild = state.wild().clone();
        match roster
            .register_capture(
                caller,
                wild.species_id,
                // Nickname defaults to the species name until renamed
                &wild.species_name,
                wild.current_hp,
                wild.max_hp,
            )
            .await
        {
            Ok(_) => {
                state.annotate(format!("{} was added to your roster.", wild.species_name));
            }
            Err(e) => {
                tracing::warn!(error = %e, species = %wild.species_id, "failed to register captured creature");
                state.annotate(format!(
                    "The captured {} could not be registered.",
                    wild.species_name
                ));
            }
        }
    }
}
