//! Health Module
//!
//! Tracks the player's hit points and keeps them inside `[0, max_hp]` after
//! every change.
use std::cmp;

use log::debug;
use serde::{Deserialize, Serialize};

/// Upper bound for the player's health, and its starting value.
pub const MAX_HEALTH: u32 = 100;

/// Represents the state of a living entity's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl Default for HealthState {
    fn default() -> Self {
        HealthState::new_at_max(MAX_HEALTH)
    }
}
impl HealthState {
    /// Create a `HealthState` with specified maximum health, starting full.
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Create a `HealthState` at an arbitrary level. Values above `max_hp` are clamped.
    pub fn with_current(max_hp: u32, current_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: cmp::min(current_hp, max_hp),
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) -> HealthChange {
        let before = self.current_hp;
        let clamp = (amount > before).then_some(HealthClamp::Floor);
        self.current_hp = before.saturating_sub(amount);
        debug!("health {before} -> {} (-{amount})", self.current_hp);
        HealthChange {
            before,
            after: self.current_hp,
            clamp,
        }
    }

    /// Heal. Saturates at max health.
    pub fn heal(&mut self, amount: u32) -> HealthChange {
        let before = self.current_hp;
        let raw = before.saturating_add(amount);
        let clamp = (raw > self.max_hp).then_some(HealthClamp::Ceiling);
        self.current_hp = cmp::min(self.max_hp, raw);
        debug!("health {before} -> {} (+{amount})", self.current_hp);
        HealthChange {
            before,
            after: self.current_hp,
            clamp,
        }
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Which bound a health change ran into, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthClamp {
    Floor,
    Ceiling,
}

/// Result of a single health adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChange {
    pub before: u32,
    pub after: u32,
    pub clamp: Option<HealthClamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_saturates_at_max_hp() {
        let mut state = HealthState::new_at_max(100);
        state.damage(50);
        let change = state.heal(30);
        assert_eq!(state.current_hp(), 80);
        assert_eq!(change.clamp, None);

        let change = state.heal(30);
        assert_eq!(state.current_hp(), 100);
        assert_eq!(change.clamp, Some(HealthClamp::Ceiling));
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut state = HealthState::with_current(100, 10);
        let change = state.damage(15);
        assert_eq!(change.after, 0);
        assert_eq!(change.clamp, Some(HealthClamp::Floor));
        assert_eq!(state.life_state(), LifeState::Dead);
    }

    #[test]
    fn exact_lethal_damage_is_not_a_clamp() {
        let mut state = HealthState::with_current(100, 20);
        let change = state.damage(20);
        assert_eq!(change.after, 0);
        assert_eq!(change.clamp, None);
    }

    #[test]
    fn every_delta_stays_in_range() {
        for start in [0, 1, 50, 99, 100] {
            for delta in [0, 1, 10, 30, 99, 100, 101, 500] {
                let mut hurt = HealthState::with_current(MAX_HEALTH, start);
                hurt.damage(delta);
                assert!(hurt.current_hp() <= MAX_HEALTH);

                let mut healed = HealthState::with_current(MAX_HEALTH, start);
                healed.heal(delta);
                assert!(healed.current_hp() <= MAX_HEALTH);
            }
        }
    }

    #[test]
    fn starting_values_clamped_to_max() {
        assert_eq!(HealthState::with_current(100, 250).current_hp(), 100);
    }
}
