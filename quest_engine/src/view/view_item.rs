//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before the next prompt. Core game logic only ever
//! reports what happened through these; it never prints.

use quest_data::ItemCategory;
use variantly::Variantly;

use crate::combat::{MonsterKind, RetreatReason};
use crate::health::HealthChange;
use crate::loader::help::HelpData;
use crate::view::Section;
use crate::world::{GameOutcome, Location};
use crate::Player;

/// Point-in-time copy of everything the status screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub name: String,
    pub health: u32,
    pub gold: u32,
    pub location: Location,
    pub inventory: Vec<(String, String)>,
    pub weapon: Option<(String, u32)>,
    pub armor: Option<(String, u32)>,
}

impl StatusSnapshot {
    pub fn of(player: &Player) -> StatusSnapshot {
        let gear = |category| {
            player
                .inventory
                .best_item(category)
                .map(|item| (item.name.clone(), item.effect))
        };
        StatusSnapshot {
            name: player.name.clone(),
            health: player.health.current_hp(),
            gold: player.gold,
            location: player.location,
            inventory: player
                .inventory
                .iter()
                .map(|item| (item.name.clone(), item.description.clone()))
                .collect(),
            weapon: gear(ItemCategory::Weapon),
            armor: gear(ItemCategory::Armor),
        }
    }
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ArmorReadied(Option<(String, u32)>),
    DragonSlain,
    EncounterStarted(MonsterKind),
    EngineMessage(String),
    Error(String),
    ForcedRetreat {
        reason: RetreatReason,
        penalty: u32,
    },
    GameOver(GameOutcome),
    HealthChanged(HealthChange),
    Help(HelpData),
    /// Numbered inventory shown before asking which item to use.
    ItemChoices(Vec<String>),
    ItemReadied {
        name: String,
        category: ItemCategory,
    },
    LocationScene(Location),
    Menu(Vec<String>),
    MonsterDefeated {
        bounty: u32,
    },
    MonsterStrike {
        raw: u32,
        blocked: u32,
        taken: u32,
    },
    PlayerCollapsed,
    PlayerStrike {
        damage: u32,
        monster_hp: u32,
    },
    /// A potion was drunk; its health change is shown with the item result.
    PotionDrunk {
        name: String,
        change: HealthChange,
    },
    Purchased {
        item: String,
        cost: u32,
        gold_left: u32,
    },
    /// Closing stats plus the player's full final status.
    QuitSummary {
        turns: usize,
        monsters_slain: usize,
        status: StatusSnapshot,
    },
    Status(StatusSnapshot),
    TransitionMessage(String),
    WeaponReadied {
        name: String,
        effect: u32,
    },
}

impl ViewItem {
    /// Which part of the turn's output this item belongs to.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::TransitionMessage(_) => Section::Transition,
            ViewItem::LocationScene(_) | ViewItem::Menu(_) => Section::Environment,
            ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemChoices(_)
            | ViewItem::ItemReadied { .. }
            | ViewItem::PotionDrunk { .. }
            | ViewItem::Purchased { .. }
            | ViewItem::Status(_) => Section::DirectResult,
            ViewItem::EncounterStarted(_)
            | ViewItem::ForcedRetreat { .. }
            | ViewItem::WeaponReadied { .. }
            | ViewItem::ArmorReadied(_)
            | ViewItem::PlayerStrike { .. }
            | ViewItem::MonsterStrike { .. }
            | ViewItem::HealthChanged(_)
            | ViewItem::PlayerCollapsed
            | ViewItem::MonsterDefeated { .. }
            | ViewItem::DragonSlain => Section::WorldResponse,
            ViewItem::EngineMessage(_)
            | ViewItem::GameOver(_)
            | ViewItem::Help(_)
            | ViewItem::QuitSummary { .. } => Section::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryItem;
    use quest_data::{HEALTH_POTION, IRON_SHIELD, SWORD, WOODEN_SHIELD};

    #[test]
    fn snapshot_reports_auto_equipped_gear() {
        let mut player = Player::new("Aria");
        player.inventory.add(InventoryItem::from(&WOODEN_SHIELD));
        player.inventory.add(InventoryItem::from(&SWORD));
        player.inventory.add(InventoryItem::from(&IRON_SHIELD));
        player.inventory.add(InventoryItem::from(&HEALTH_POTION));

        let snapshot = StatusSnapshot::of(&player);
        assert_eq!(snapshot.inventory.len(), 4);
        assert_eq!(snapshot.weapon, Some(("Sword".to_string(), 10)));
        assert_eq!(snapshot.armor, Some(("Iron Shield".to_string(), 10)));
    }

    #[test]
    fn combat_events_follow_direct_results() {
        let mut player = Player::new("Aria");
        player.damage(50);
        let drunk = ViewItem::PotionDrunk {
            name: "Health Potion".into(),
            change: player.heal(30),
        };
        // the potion's healing stays with the item result, not under the encounter events
        assert_eq!(drunk.section(), Section::DirectResult);
        assert_eq!(ViewItem::HealthChanged(player.damage(10)).section(), Section::WorldResponse);
        assert_eq!(ViewItem::PlayerCollapsed.section(), Section::WorldResponse);
        assert_eq!(ViewItem::Menu(Vec::new()).section(), Section::Environment);
    }
}
