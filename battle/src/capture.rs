//! Capture probability evaluation
//!
//! Capture odds depend only on how hurt the wild creature is: a weakened
//! target (at or below 30% HP) is much easier to snare. The evaluator is
//! pure; the roll itself comes from the injected [`BattleRng`].

use crate::rng::BattleRng;
use crate::types::WildCreature;

/// HP fraction at or below which the wild creature counts as weakened
pub const WEAKENED_THRESHOLD: f64 = 0.30;

/// Capture chance against a weakened wild creature
pub const WEAKENED_CAPTURE_CHANCE: f64 = 0.35;

/// Capture chance against a healthy wild creature
pub const BASE_CAPTURE_CHANCE: f64 = 0.10;

/// Capture probability for a wild creature at `current_hp` out of `max_hp`.
///
/// A fraction of exactly 0 is unreachable in practice: HP hitting 0 ends
/// the battle as a win before any capture can be submitted.
pub fn capture_chance(current_hp: u32, max_hp: u32) -> f64 {
    let fraction = if max_hp == 0 {
        0.0
    } else {
        f64::from(current_hp) / f64::from(max_hp)
    };

    if fraction <= WEAKENED_THRESHOLD {
        WEAKENED_CAPTURE_CHANCE
    } else {
        BASE_CAPTURE_CHANCE
    }
}

/// Roll one capture attempt against the wild creature
pub fn roll_capture(wild: &WildCreature, rng: &mut dyn BattleRng) -> bool {
    rng.next() < capture_chance(wild.current_hp, wild.max_hp)
}
