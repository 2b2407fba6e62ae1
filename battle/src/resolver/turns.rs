//! Turn resolution - applying player actions and auto-resolving wild turns

use crate::capture::roll_capture;
use crate::log::LogCategory;
use crate::rng::BattleRng;
use crate::types::{BattleStatus, PlayerAction, Turn};

use super::state::{BattleError, BattleState};

/// Smallest damage an attack can deal
pub const DAMAGE_MIN: u32 = 20;

/// Largest damage an attack can deal
pub const DAMAGE_MAX: u32 = 30;

/// Uniform damage roll in `DAMAGE_MIN..=DAMAGE_MAX`
fn damage_roll(rng: &mut dyn BattleRng) -> u32 {
    let span = DAMAGE_MAX - DAMAGE_MIN + 1;
    DAMAGE_MIN + (rng.next() * f64::from(span)) as u32
}

impl BattleState {
    /// Apply one player action, then auto-resolve any wild turns it opens.
    ///
    /// Guard: rejected without mutation when the battle has ended, or when
    /// the wild side holds the turn and the action is not a flee. Fleeing
    /// is the one action accepted regardless of whose turn it is, since it
    /// only abandons the encounter.
    pub fn apply(
        &mut self,
        action: PlayerAction,
        rng: &mut dyn BattleRng,
    ) -> Result<(), BattleError> {
        if self.status.is_terminal() {
            return Err(BattleError::InvalidAction("the battle has already ended"));
        }
        if action != PlayerAction::Flee && self.current_turn != Turn::Player {
            return Err(BattleError::InvalidAction("it is not the player's turn"));
        }

        match action {
            PlayerAction::Attack => self.player_attack(rng),
            PlayerAction::Capture => self.player_capture(rng),
            PlayerAction::Flee => self.player_flee(),
        }

        self.resolve_pending(rng);
        Ok(())
    }

    /// Resolve wild turns until the turn returns to the player or the
    /// battle ends.
    ///
    /// The wild side never waits for external input, so its attacks run in
    /// an explicit loop driven by `current_turn`. The session also calls
    /// this right after initialization when the wild side won the opening
    /// turn.
    pub fn resolve_pending(&mut self, rng: &mut dyn BattleRng) {
        while self.status.is_active() && self.current_turn == Turn::Wild {
            self.wild_attack(rng);
        }
    }

    fn player_attack(&mut self, rng: &mut dyn BattleRng) {
        let damage = damage_roll(rng);
        self.log.append(
            LogCategory::Attack,
            format!(
                "{} attacks the wild {}!",
                self.player.nickname, self.wild.species_name
            ),
        );

        self.wild.current_hp = self.wild.current_hp.saturating_sub(damage);
        self.log.append(
            LogCategory::Damage,
            format!(
                "The wild {} takes {} damage.",
                self.wild.species_name, damage
            ),
        );
        self.turn_count += 1;

        if self.wild.is_fainted() {
            self.status = BattleStatus::Won;
            self.log.append(
                LogCategory::Victory,
                format!(
                    "The wild {} fainted! You won the battle!",
                    self.wild.species_name
                ),
            );
        } else {
            self.current_turn = Turn::Wild;
        }
    }

    fn player_capture(&mut self, rng: &mut dyn BattleRng) {
        self.log.append(
            LogCategory::Capture,
            format!("You hurl a snare at the wild {}!", self.wild.species_name),
        );
        self.turn_count += 1;

        if roll_capture(&self.wild, rng) {
            self.status = BattleStatus::Captured;
            self.log.append(
                LogCategory::Capture,
                format!("Gotcha! The wild {} was caught!", self.wild.species_name),
            );
        } else {
            // Failed attempt still consumed the turn; the wild side answers
            self.log.append(
                LogCategory::Capture,
                format!("The wild {} broke free!", self.wild.species_name),
            );
            self.current_turn = Turn::Wild;
        }
    }

    fn player_flee(&mut self) {
        self.status = BattleStatus::Fled;
        self.log.append(
            LogCategory::Info,
            format!("You fled from the wild {}.", self.wild.species_name),
        );
    }

    fn wild_attack(&mut self, rng: &mut dyn BattleRng) {
        let damage = damage_roll(rng);
        self.log.append(
            LogCategory::Attack,
            format!(
                "The wild {} attacks {}!",
                self.wild.species_name, self.player.nickname
            ),
        );

        self.player.current_hp = self.player.current_hp.saturating_sub(damage);
        self.log.append(
            LogCategory::Damage,
            format!("{} takes {} damage.", self.player.nickname, damage),
        );
        self.turn_count += 1;

        if self.player.is_fainted() {
            self.status = BattleStatus::Lost;
            self.log.append(
                LogCategory::Defeat,
                format!("{} fainted! You lost the battle.", self.player.nickname),
            );
        } else {
            self.current_turn = Turn::Player;
        }
    }
}
