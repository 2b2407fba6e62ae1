//! Creature state during battle

use super::ids::{CreatureId, SpeciesId};

/// The wild creature being fought.
///
/// Exists only for the lifetime of the encounter; on capture its HP values
/// become the initial HP of the newly registered owned creature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildCreature {
    pub species_id: SpeciesId,
    pub species_name: String,

    /// Current HP, always within `0..=max_hp`
    pub current_hp: u32,
    pub max_hp: u32,
}

impl WildCreature {
    /// Spawn a wild creature at full health
    pub fn spawn(species_id: SpeciesId, species_name: impl Into<String>, base_hp: u32) -> Self {
        Self {
            species_id,
            species_name: species_name.into(),
            current_hp: base_hp,
            max_hp: base_hp,
        }
    }

    /// Fraction of HP remaining, in `[0, 1]`
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) / f64::from(self.max_hp)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}

/// Battle-local snapshot of the caller's active creature.
///
/// A copy, not the source of truth: the roster record is only written back
/// by the outcome synchronizer once the encounter reaches a terminal
/// status, never per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCreature {
    /// Owned-creature identity in the roster
    pub id: CreatureId,
    pub species_id: SpeciesId,
    pub nickname: String,

    /// Current HP, always within `0..=max_hp`
    pub current_hp: u32,
    pub max_hp: u32,
}

impl PlayerCreature {
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}
