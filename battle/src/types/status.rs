//! Battle status and turn ownership

/// Lifecycle status of one encounter.
///
/// `Active` is the only state that accepts actions. Every other status is
/// terminal: once reached, the battle state is frozen apart from log
/// annotations added by the outcome synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStatus {
    /// Battle in progress, awaiting the next action
    Active,
    /// The wild creature fainted
    Won,
    /// The player's creature fainted
    Lost,
    /// The player ran from the encounter
    Fled,
    /// The wild creature was captured
    Captured,
}

impl BattleStatus {
    /// Whether this status still accepts actions
    pub fn is_active(&self) -> bool {
        matches!(self, BattleStatus::Active)
    }

    /// Whether this status ends the encounter
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            BattleStatus::Active => "active",
            BattleStatus::Won => "won",
            BattleStatus::Lost => "lost",
            BattleStatus::Fled => "fled",
            BattleStatus::Captured => "captured",
        }
    }
}

impl std::fmt::Display for BattleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side owns the current turn.
///
/// Alternates only while the battle is `Active`; frozen at its last value
/// once a terminal status is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Player,
    Wild,
}

impl Turn {
    /// The side acting after this one
    pub fn other(&self) -> Turn {
        match self {
            Turn::Player => Turn::Wild,
            Turn::Wild => Turn::Player,
        }
    }
}
