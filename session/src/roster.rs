//! Collaborator contracts: the creature roster and the species catalog
//!
//! Both stores are external to the battle engine; this module only pins
//! down the calls the engine makes against them. Implement these traits
//! over whatever backs the durable data (a database in production, a
//! scripted double in tests, a HashMap in the example).

use async_trait::async_trait;
use thiserror::Error;

use bramble_battle::{CallerId, CreatureId, SpeciesId};

/// A caller-owned creature as stored in the roster.
///
/// The roster stays the source of truth for HP between encounters; the
/// battle core only works on a snapshot of this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub species_id: SpeciesId,
    pub nickname: String,
    pub current_hp: u32,
    pub max_hp: u32,
}

/// A species as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub base_hp: u32,
}

#[derive(Error, Debug)]
pub enum RosterError {
    /// The caller owns no creature able to battle (all fainted or none)
    #[error("caller has no usable creature")]
    NoUsableCreature,

    #[error("creature not found: {0}")]
    NotFound(CreatureId),

    #[error("roster backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("species not found: {0}")]
    NotFound(SpeciesId),

    #[error("catalog backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Durable store of a caller's owned creatures
#[async_trait]
pub trait CreatureRoster: Send + Sync {
    /// The caller's active creature, if one can still battle
    async fn active_creature(&self, caller: &CallerId) -> Result<CreatureRecord, RosterError>;

    /// Persist a creature's current HP
    async fn update_hp(&self, creature: &CreatureId, hp: u32) -> Result<(), RosterError>;

    /// Register a newly captured creature for the caller
    async fn register_capture(
        &self,
        caller: &CallerId,
        species_id: SpeciesId,
        nickname: &str,
        hp: u32,
        max_hp: u32,
    ) -> Result<CreatureRecord, RosterError>;
}

/// Read-only catalog of creature species
#[async_trait]
pub trait SpeciesCatalog: Send + Sync {
    async fn species(&self, id: SpeciesId) -> Result<Species, CatalogError>;
}
