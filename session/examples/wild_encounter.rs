//! Wild Encounter Example
//!
//! Runs one full encounter against an in-memory roster: attack until the
//! wild creature is weakened, then throw snares until it is caught or the
//! battle ends some other way. Prints the battle log afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use bramble_battle::{CallerId, CreatureId, SpeciesId, StdRoll};
use bramble_session::{
    BattleSession, CatalogError, CreatureRecord, CreatureRoster, PlayerAction, RosterError,
    Species, SpeciesCatalog,
};

/// Roster backed by a plain HashMap, good enough for a demo
struct InMemoryRoster {
    creatures: Mutex<HashMap<String, CreatureRecord>>,
}

impl InMemoryRoster {
    fn with_starter() -> Self {
        let starter = CreatureRecord {
            id: CreatureId::new("c-1"),
            species_id: SpeciesId(7),
            nickname: "Sprig".to_string(),
            current_hp: 60,
            max_hp: 60,
        };
        Self {
            creatures: Mutex::new(HashMap::from([("c-1".to_string(), starter)])),
        }
    }
}

#[async_trait]
impl CreatureRoster for InMemoryRoster {
    async fn active_creature(&self, _caller: &CallerId) -> Result<CreatureRecord, RosterError> {
        self.creatures
            .lock()
            .await
            .values()
            .find(|c| c.current_hp > 0)
            .cloned()
            .ok_or(RosterError::NoUsableCreature)
    }

    async fn update_hp(&self, creature: &CreatureId, hp: u32) -> Result<(), RosterError> {
        let mut creatures = self.creatures.lock().await;
        let record = creatures
            .get_mut(&creature.0)
            .ok_or_else(|| RosterError::NotFound(creature.clone()))?;
        record.current_hp = hp;
        Ok(())
    }

    async fn register_capture(
        &self,
        _caller: &CallerId,
        species_id: SpeciesId,
        nickname: &str,
        hp: u32,
        max_hp: u32,
    ) -> Result<CreatureRecord, RosterError> {
        let mut creatures = self.creatures.lock().await;
        let id = format!("c-{}", creatures.len() + 1);
        let record = CreatureRecord {
            id: CreatureId::new(id.clone()),
            species_id,
            nickname: nickname.to_string(),
            current_hp: hp,
            max_hp,
        };
        creatures.insert(id, record.clone());
        Ok(record)
    }
}

struct DemoCatalog;

#[async_trait]
impl SpeciesCatalog for DemoCatalog {
    async fn species(&self, id: SpeciesId) -> Result<Species, CatalogError> {
        match id.0 {
            3 => Ok(Species {
                id,
                name: "Thornback".to_string(),
                base_hp: 80,
            }),
            _ => Err(CatalogError::NotFound(id)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let roster = Arc::new(InMemoryRoster::with_starter());

    let mut session = BattleSession::start(
        roster.clone(),
        &DemoCatalog,
        CallerId::new("trainer-1"),
        SpeciesId(3),
        Box::new(StdRoll::new()),
    )
    .await?;

    // Weaken first, then snare
    while !session.state().is_over() {
        let action = if session.state().wild().hp_fraction() <= 0.30 {
            PlayerAction::Capture
        } else {
            PlayerAction::Attack
        };
        session.submit(action).await?;
    }

    for entry in session.log().entries() {
        println!("[{:>7}] {}", entry.category.as_str(), entry.message);
    }
    println!("\nOutcome: {}", session.state().status());

    let saved = roster.active_creature(session.caller()).await;
    if let Ok(record) = saved {
        println!(
            "Roster: {} at {}/{} HP",
            record.nickname, record.current_hp, record.max_hp
        );
    }

    Ok(())
}
