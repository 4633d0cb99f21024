//! Player -- health, gold, position and belongings of the adventurer.
use crate::command::ItemSelection;
use crate::error::{GameError, SelectionProblem};
use crate::health::{HealthChange, HealthState, MAX_HEALTH};
use crate::inventory::Inventory;
use crate::world::Location;

use log::info;
use quest_data::ItemCategory;
use serde::{Deserialize, Serialize};

/// Gold in the purse when a new game begins.
pub const STARTING_GOLD: u32 = 20;

/// Name used when the player doesn't give one.
pub const DEFAULT_NAME: &str = "Adventurer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub location: Location,
    pub health: HealthState,
    pub gold: u32,
    pub inventory: Inventory,
}

impl Default for Player {
    fn default() -> Player {
        Self {
            name: DEFAULT_NAME.into(),
            location: Location::Village,
            health: HealthState::new_at_max(MAX_HEALTH),
            gold: STARTING_GOLD,
            inventory: Inventory::new(),
        }
    }
}

impl Player {
    /// A new player at the village with full health and starting gold.
    pub fn new(name: &str) -> Player {
        let name = name.trim();
        Self {
            name: if name.is_empty() { DEFAULT_NAME.into() } else { name.into() },
            ..Self::default()
        }
    }

    pub fn damage(&mut self, amount: u32) -> HealthChange {
        self.health.damage(amount)
    }

    pub fn heal(&mut self, amount: u32) -> HealthChange {
        self.health.heal(amount)
    }

    /// Add gold to the purse, returning the new total.
    pub fn earn_gold(&mut self, amount: u32) -> u32 {
        self.gold = self.gold.saturating_add(amount);
        info!("{} earned {amount} gold (now {})", self.name, self.gold);
        self.gold
    }

    /// Deduct gold if the purse covers it. Leaves the purse untouched otherwise.
    pub fn spend_gold(&mut self, amount: u32) -> Option<u32> {
        let remaining = self.gold.checked_sub(amount)?;
        self.gold = remaining;
        Some(remaining)
    }
}

/// What happened when the player used an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUse {
    /// A potion was drunk and removed from the inventory.
    Drank { name: String, change: HealthChange },
    /// Gear was "readied". Equipment is always picked by best effect, so this changes nothing.
    Readied { name: String, category: ItemCategory },
}

impl Player {
    /// Use the item at a 1-based inventory slot.
    ///
    /// An empty inventory is reported as such whatever the selection.
    ///
    /// # Errors
    /// - `InvalidItemSelection` if the inventory is empty, the selection was canceled, or the slot is out of range
    pub fn use_item(&mut self, selection: ItemSelection) -> Result<ItemUse, GameError> {
        if self.inventory.is_empty() {
            return Err(GameError::InvalidItemSelection(SelectionProblem::EmptyInventory));
        }
        let slot = match selection {
            ItemSelection::Cancel => return Err(GameError::InvalidItemSelection(SelectionProblem::Canceled)),
            ItemSelection::Slot(slot) => slot,
        };
        let len = self.inventory.len();
        let out_of_range = GameError::InvalidItemSelection(SelectionProblem::OutOfRange { slot, len });
        let index = slot.checked_sub(1).ok_or_else(|| out_of_range.clone())?;
        let item = self.inventory.get(index).ok_or(out_of_range)?;

        if item.is_potion() {
            let Some(potion) = self.inventory.take(index) else {
                return Err(GameError::InvalidItemSelection(SelectionProblem::OutOfRange { slot, len }));
            };
            let change = self.heal(potion.effect);
            info!("{} drank {} (hp {} -> {})", self.name, potion.name, change.before, change.after);
            Ok(ItemUse::Drank {
                name: potion.name,
                change,
            })
        } else {
            info!("{} readied {}", self.name, item.name);
            Ok(ItemUse::Readied {
                name: item.name.clone(),
                category: item.category,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthClamp;
    use crate::inventory::InventoryItem;
    use quest_data::{HEALTH_POTION, SWORD};

    #[test]
    fn new_player_starts_in_village_with_defaults() {
        let player = Player::new("Aria");
        assert_eq!(player.name, "Aria");
        assert_eq!(player.health.current_hp(), 100);
        assert_eq!(player.gold, 20);
        assert_eq!(player.location, Location::Village);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn blank_name_falls_back_to_default() {
        assert_eq!(Player::new("   ").name, DEFAULT_NAME);
    }

    #[test]
    fn drinking_a_potion_heals_and_consumes_it() {
        let mut player = Player::new("Aria");
        player.inventory.add(InventoryItem::from(&SWORD));
        player.inventory.add(InventoryItem::from(&HEALTH_POTION));
        player.damage(50);

        let used = player.use_item(ItemSelection::Slot(2)).unwrap();
        assert!(matches!(used, ItemUse::Drank { ref name, .. } if name == "Health Potion"));
        assert_eq!(player.health.current_hp(), 80);
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn potion_at_full_health_caps_at_max() {
        let mut player = Player::new("Aria");
        player.inventory.add(InventoryItem::from(&HEALTH_POTION));
        player.damage(10);
        let Ok(ItemUse::Drank { change, .. }) = player.use_item(ItemSelection::Slot(1)) else {
            panic!("expected a potion to be drunk");
        };
        assert_eq!(change.after, 100);
        assert_eq!(change.clamp, Some(HealthClamp::Ceiling));
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn readying_gear_keeps_it() {
        let mut player = Player::new("Aria");
        player.inventory.add(InventoryItem::from(&SWORD));
        let used = player.use_item(ItemSelection::Slot(1)).unwrap();
        assert_eq!(
            used,
            ItemUse::Readied {
                name: "Sword".into(),
                category: ItemCategory::Weapon
            }
        );
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn bad_selections_leave_state_alone() {
        let mut player = Player::new("Aria");
        assert_eq!(
            player.use_item(ItemSelection::Slot(1)),
            Err(GameError::InvalidItemSelection(SelectionProblem::EmptyInventory))
        );

        player.inventory.add(InventoryItem::from(&HEALTH_POTION));
        player.damage(40);
        for selection in [ItemSelection::Slot(0), ItemSelection::Slot(2), ItemSelection::Cancel] {
            assert!(player.use_item(selection).is_err());
        }
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.health.current_hp(), 60);
    }

    #[test]
    fn spend_gold_never_goes_negative() {
        let mut player = Player::new("Aria");
        assert_eq!(player.spend_gold(25), None);
        assert_eq!(player.gold, 20);
        assert_eq!(player.spend_gold(20), Some(0));
    }
}
