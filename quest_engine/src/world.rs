//! Data structures representing the game world.
//!
//! This module defines [`QuestWorld`], the single session aggregate every core
//! operation receives, and the fixed set of [`Location`]s.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::Player;
use crate::health::LifeState;

/// Places the player can stand. The graph connecting them lives in [`crate::travel`].
#[derive(Copy, Debug, Default, Clone, Serialize, Deserialize, Variantly, PartialEq, Eq, Hash)]
pub enum Location {
    #[default]
    Village,
    Blacksmith,
    Market,
    Forest,
    Mountains,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::Village,
        Location::Blacksmith,
        Location::Market,
        Location::Forest,
        Location::Mountains,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Location::Village => "village",
            Location::Blacksmith => "blacksmith",
            Location::Market => "market",
            Location::Forest => "forest",
            Location::Mountains => "mountains",
        }
    }

    /// Scene text shown above the menu.
    pub fn description(self) -> &'static str {
        match self {
            Location::Village => {
                "You're in a bustling village. The blacksmith and market are nearby. The mountains loom to the north."
            },
            Location::Blacksmith => "The heat from the forge fills the air. Weapons and armor line the walls.",
            Location::Market => {
                "Merchants sell their wares from colorful stalls. A potion seller catches your eye."
            },
            Location::Forest => "The forest is dark and foreboding. You hear strange noises all around you.",
            Location::Mountains => {
                "Jagged peaks pierce the sky. Sulfur hangs in the air... the dragon's lair is near."
            },
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ways a session can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Defeat,
    Victory,
    Quit,
}

/// Complete state of the running game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestWorld {
    pub player: Player,
    pub turn_count: usize,
    pub monsters_slain: usize,
    pub dragon_slain: bool,
    pub quit: bool,
}

impl QuestWorld {
    /// Start a fresh session for the named player.
    pub fn new(player_name: &str) -> QuestWorld {
        let world = Self {
            player: Player::new(player_name),
            ..Self::default()
        };
        info!(
            "new session for '{}' (hp {}, gold {}, at {})",
            world.player.name,
            world.player.health.current_hp(),
            world.player.gold,
            world.player.location
        );
        world
    }

    /// Terminal state, if the game has reached one.
    ///
    /// Defeat takes precedence over victory and quitting.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.player.health.life_state() == LifeState::Dead {
            Some(GameOutcome::Defeat)
        } else if self.dragon_slain {
            Some(GameOutcome::Victory)
        } else if self.quit {
            Some(GameOutcome::Quit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_world_is_in_progress() {
        let world = QuestWorld::new("Tester");
        assert_eq!(world.outcome(), None);
        assert_eq!(world.player.location, Location::Village);
    }

    #[test]
    fn defeat_outranks_victory() {
        let mut world = QuestWorld::new("Tester");
        world.dragon_slain = true;
        assert_eq!(world.outcome(), Some(GameOutcome::Victory));
        world.player.health.damage(500);
        assert_eq!(world.outcome(), Some(GameOutcome::Defeat));
    }

    #[test]
    fn quit_is_terminal() {
        let mut world = QuestWorld::new("Tester");
        world.quit = true;
        assert_eq!(world.outcome(), Some(GameOutcome::Quit));
    }
}
