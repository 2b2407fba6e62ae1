//! Player actions

/// An action submitted on the player's turn.
///
/// The wild side never submits actions; its attacks are resolved
/// automatically by the turn resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Attack the wild creature
    Attack,
    /// Attempt to capture the wild creature (consumes the turn on failure)
    Capture,
    /// Leave the encounter (always succeeds)
    Flee,
}
