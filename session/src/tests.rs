#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use bramble_battle::{CallerId, CreatureId, SequenceRoll, SpeciesId};

    use crate::roster::{
        CatalogError, CreatureRecord, CreatureRoster, RosterError, Species, SpeciesCatalog,
    };
    use crate::{BattleSession, BattleStatus, EncounterError, PlayerAction};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum RosterCall {
        UpdateHp(CreatureId, u32),
        RegisterCapture {
            species_id: SpeciesId,
            nickname: String,
            hp: u32,
            max_hp: u32,
        },
    }

    /// Roster double recording every write it receives
    struct ScriptedRoster {
        active: Option<CreatureRecord>,
        fail_writes: bool,
        calls: Mutex<Vec<RosterCall>>,
    }

    impl ScriptedRoster {
        fn with_creature(hp: u32, max_hp: u32) -> Self {
            Self {
                active: Some(CreatureRecord {
                    id: CreatureId::new("c-1"),
                    species_id: SpeciesId(7),
                    nickname: "Sprig".to_string(),
                    current_hp: hp,
                    max_hp,
                }),
                fail_writes: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                active: None,
                fail_writes: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_writes(mut self) -> Self {
            self.fail_writes = true;
            self
        }

        fn calls(&self) -> Vec<RosterCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CreatureRoster for ScriptedRoster {
        async fn active_creature(&self, _caller: &CallerId) -> Result<CreatureRecord, RosterError> {
            self.active.clone().ok_or(RosterError::NoUsableCreature)
        }

        async fn update_hp(&self, creature: &CreatureId, hp: u32) -> Result<(), RosterError> {
            if self.fail_writes {
                return Err(RosterError::Backend(anyhow::anyhow!("storage offline")));
            }
            self.calls
                .lock()
                .unwrap()
                .push(RosterCall::UpdateHp(creature.clone(), hp));
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
            if self.fail_writes {
                return Err(RosterError::Backend(anyhow::anyhow!("storage offline")));
            }
            self.calls.lock().unwrap().push(RosterCall::RegisterCapture {
                species_id,
                nickname: nickname.to_string(),
                hp,
                max_hp,
            });
            Ok(CreatureRecord {
                id: CreatureId::new("c-new"),
                species_id,
                nickname: nickname.to_string(),
                current_hp: hp,
                max_hp,
            })
        }
    }

    struct FixedCatalog;

    #[async_trait]
    impl SpeciesCatalog for FixedCatalog {
        async fn species(&self, id: SpeciesId) -> Result<Species, CatalogError> {
            match id.0 {
                3 => Ok(Species {
                    id,
                    name: "Thornback".to_string(),
                    base_hp: 100,
                }),
                4 => Ok(Species {
                    id,
                    name: "Mossling".to_string(),
                    base_hp: 35,
                }),
                5 => Ok(Species {
                    id,
                    name: "Emberfin".to_string(),
                    base_hp: 25,
                }),
                _ => Err(CatalogError::NotFound(id)),
            }
        }
    }

    async fn start(
        roster: Arc<ScriptedRoster>,
        species: u32,
        rolls: Vec<f64>,
    ) -> Result<BattleSession, EncounterError> {
        BattleSession::start(
            roster,
            &FixedCatalog,
            CallerId::new("trainer-1"),
            SpeciesId(species),
            Box::new(SequenceRoll::new(rolls)),
        )
        .await
    }

    #[tokio::test]
    async fn test_start_without_creature_fails() {
        let roster = Arc::new(ScriptedRoster::empty());
        let err = start(roster, 3, vec![0.5]).await.unwrap_err();
        assert!(matches!(err, EncounterError::NoUsableCreature));
    }

    #[tokio::test]
    async fn test_start_with_fainted_creature_fails() {
        let roster = Arc::new(ScriptedRoster::with_creature(0, 40));
        let err = start(roster, 3, vec![0.5]).await.unwrap_err();
        assert!(matches!(err, EncounterError::NoUsableCreature));
    }

    #[tokio::test]
    async fn test_start_with_unknown_species_fails() {
        let roster = Arc::new(ScriptedRoster::with_creature(40, 40));
        let err = start(roster, 999, vec![0.5]).await.unwrap_err();
        assert!(matches!(err, EncounterError::SpeciesNotFound(SpeciesId(999))));
    }

    #[tokio::test]
    async fn test_won_battle_persists_hp_and_never_registers() {
        let roster = Arc::new(ScriptedRoster::with_creature(35, 35));
        // Emberfin at 25 HP; max roll deals 30 and wins outright
        let mut session = start(roster.clone(), 5, vec![0.99]).await.unwrap();

        let state = session.submit(PlayerAction::Attack).await.unwrap();
        assert_eq!(state.status(), BattleStatus::Won);
        assert_eq!(state.wild().current_hp, 0);

        assert_eq!(
            roster.calls(),
            vec![RosterCall::UpdateHp(CreatureId::new("c-1"), 35)]
        );
    }

    #[tokio::test]
    async fn test_sync_fires_exactly_once() {
        let roster = Arc::new(ScriptedRoster::with_creature(35, 35));
        let mut session = start(roster.clone(), 5, vec![0.99]).await.unwrap();

        session.submit(PlayerAction::Attack).await.unwrap();
        assert_eq!(roster.calls().len(), 1);

        // Re-submissions after the terminal transition are rejected and
        // never re-trigger persistence.
        for action in [PlayerAction::Attack, PlayerAction::Capture, PlayerAction::Flee] {
            assert!(session.submit(action).await.is_err());
        }
        assert_eq!(roster.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_capture_registers_wild_hp_at_capture() {
        let roster = Arc::new(ScriptedRoster::with_creature(200, 200));
        // Thornback at 100: three max-roll attacks (wild answers minimum
        // each time) bring it to 10/100, then a 0.2 roll beats the 0.35
        // weakened capture chance.
        let rolls = vec![0.99, 0.0, 0.99, 0.0, 0.99, 0.0, 0.2];
        let mut session = start(roster.clone(), 3, rolls).await.unwrap();

        for _ in 0..3 {
            session.submit(PlayerAction::Attack).await.unwrap();
        }
        assert_eq!(session.state().wild().current_hp, 10);

        let state = session.submit(PlayerAction::Capture).await.unwrap();
        assert_eq!(state.status(), BattleStatus::Captured);

        let calls = roster.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], RosterCall::UpdateHp(CreatureId::new("c-1"), 140));
        assert_eq!(
            calls[1],
            RosterCall::RegisterCapture {
                species_id: SpeciesId(3),
                nickname: "Thornback".to_string(),
                hp: 10,
                max_hp: 100,
            }
        );
    }

    #[tokio::test]
    async fn test_flee_persists_current_hp() {
        let roster = Arc::new(ScriptedRoster::with_creature(40, 40));
        let mut session = start(roster.clone(), 4, vec![0.5]).await.unwrap();

        let state = session.submit(PlayerAction::Flee).await.unwrap();
        assert_eq!(state.status(), BattleStatus::Fled);

        assert_eq!(
            roster.calls(),
            vec![RosterCall::UpdateHp(CreatureId::new("c-1"), 40)]
        );
    }

    #[tokio::test]
    async fn test_lethal_opening_wild_turn_synchronizes_at_start() {
        let roster = Arc::new(ScriptedRoster::with_creature(20, 40));
        // Mossling at 35 outspeeds a 20 HP creature and rolls minimum: 20
        // damage faints the player before any action is submitted.
        let session = start(roster.clone(), 4, vec![0.0]).await.unwrap();

        assert_eq!(session.state().status(), BattleStatus::Lost);
        assert_eq!(session.state().player().current_hp, 0);
        assert_eq!(
            roster.calls(),
            vec![RosterCall::UpdateHp(CreatureId::new("c-1"), 0)]
        );
    }

    #[tokio::test]
    async fn test_capture_registration_failure_degrades_gracefully() {
        let roster = Arc::new(ScriptedRoster::with_creature(200, 200).failing_writes());
        let rolls = vec![0.99, 0.0, 0.99, 0.0, 0.99, 0.0, 0.2];
        let mut session = start(roster.clone(), 3, rolls).await.unwrap();

        for _ in 0..3 {
            session.submit(PlayerAction::Attack).await.unwrap();
        }

        // The capture itself stands even though the roster rejects the
        // new record; the loss is surfaced only in the narration.
        let state = session.submit(PlayerAction::Capture).await.unwrap();
        assert_eq!(state.status(), BattleStatus::Captured);

        let last = state.log().last().unwrap();
        assert!(last.message.contains("could not be registered"));
    }

    #[tokio::test]
    async fn test_session_debug_shows_battle_state() {
        let roster = Arc::new(ScriptedRoster::with_creature(40, 40));
        let session = start(roster, 4, vec![0.5]).await.unwrap();

        let rendered = format!("{session:?}");
        assert!(rendered.contains("BattleSession"));
        assert!(rendered.contains("trainer-1"));
    }

    #[tokio::test]
    async fn test_persistence_failure_degrades_gracefully() {
        let roster = Arc::new(ScriptedRoster::with_creature(40, 40).failing_writes());
        let mut session = start(roster.clone(), 4, vec![0.5]).await.unwrap();

        // The submit itself must succeed even though the write fails.
        let state = session.submit(PlayerAction::Flee).await.unwrap();
        assert_eq!(state.status(), BattleStatus::Fled);

        let last = state.log().last().unwrap();
        assert!(last.message.contains("could not be saved"));
    }
}
