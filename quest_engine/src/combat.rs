//! Combat Module
//!
//! Resolves one encounter between the player and a monster, start to finish,
//! in a single call. Equipment is chosen automatically from the inventory and
//! the fight is fully deterministic.

use std::cmp;
use std::fmt;

use log::info;
use quest_data::ItemCategory;
use serde::{Deserialize, Serialize};

use crate::health::LifeState;
use crate::{QuestWorld, View, ViewItem};

/// Defense shared by every monster; subtracted from each player hit.
pub const MONSTER_DEFENSE: u32 = 5;
/// Damage taken when forced to retreat from a fight.
pub const RETREAT_PENALTY: u32 = 20;
/// Gold awarded for defeating an ordinary monster.
pub const VICTORY_BOUNTY: u32 = 10;
/// Every exchange deals at least this much.
pub const MIN_DAMAGE: u32 = 1;

/// The two monster archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// The forest's ordinary beast.
    Beast,
    /// The boss waiting in the mountains.
    Dragon,
}

impl MonsterKind {
    pub fn max_health(self) -> u32 {
        match self {
            MonsterKind::Beast => 20,
            MonsterKind::Dragon => 50,
        }
    }

    pub fn base_damage(self) -> u32 {
        match self {
            MonsterKind::Beast => 10,
            MonsterKind::Dragon => 20,
        }
    }

    pub fn is_boss(self) -> bool {
        matches!(self, MonsterKind::Dragon)
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonsterKind::Beast => f.write_str("beast"),
            MonsterKind::Dragon => f.write_str("dragon"),
        }
    }
}

/// A monster for the length of one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monster {
    pub kind: MonsterKind,
    pub health: u32,
    pub base_damage: u32,
    pub defense: u32,
}

impl Monster {
    pub fn spawn(kind: MonsterKind) -> Monster {
        Monster {
            kind,
            health: kind.max_health(),
            base_damage: kind.base_damage(),
            defense: MONSTER_DEFENSE,
        }
    }
}

/// Why the player backed out of a fight without trading blows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatReason {
    /// The dragon senses the player lacks the Steel Sword and armor.
    Underequipped,
    /// No weapon in the inventory at all.
    Unarmed,
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Retreated(RetreatReason),
    Defeated,
    Victory,
    BossVictory,
}

impl EncounterOutcome {
    pub fn is_boss_victory(self) -> bool {
        matches!(self, EncounterOutcome::BossVictory)
    }
}

/// Damage dealt by a hit of `attack` against `defense`, never below [`MIN_DAMAGE`].
pub fn hit_damage(attack: u32, defense: u32) -> u32 {
    cmp::max(MIN_DAMAGE, attack.saturating_sub(defense))
}

/// Fight `kind` to completion.
///
/// Mutates the player's health (and gold on an ordinary win), never the
/// inventory. A dragon victory sets `world.dragon_slain`, which ends the game.
/// The loop always terminates: each side loses at least [`MIN_DAMAGE`] per round.
pub fn resolve_encounter(world: &mut QuestWorld, view: &mut View, kind: MonsterKind) -> EncounterOutcome {
    let player = &mut world.player;
    // snapshot once; nothing can change the inventory mid-fight
    let weapon = player.inventory.best_item(ItemCategory::Weapon).cloned();
    let armor = player.inventory.best_item(ItemCategory::Armor).cloned();
    let ready_for_dragon = player.inventory.has_good_equipment();

    view.push(ViewItem::EncounterStarted(kind));
    info!(
        "{} encounters a {kind} (weapon: {:?}, armor: {:?})",
        player.name,
        weapon.as_ref().map(|w| w.name.as_str()),
        armor.as_ref().map(|a| a.name.as_str())
    );

    if kind.is_boss() && !ready_for_dragon {
        return retreat(world, view, RetreatReason::Underequipped);
    }
    let Some(weapon) = weapon else {
        return retreat(world, view, RetreatReason::Unarmed);
    };

    view.push(ViewItem::WeaponReadied {
        name: weapon.name.clone(),
        effect: weapon.effect,
    });
    view.push(ViewItem::ArmorReadied(
        armor.as_ref().map(|a| (a.name.clone(), a.effect)),
    ));

    let mut monster = Monster::spawn(kind);
    let protection = armor.as_ref().map_or(0, |a| a.effect);
    let mut rounds = 0;

    while monster.health > 0 && player.health.life_state() == LifeState::Alive {
        rounds += 1;
        let dealt = hit_damage(weapon.effect, monster.defense);
        monster.health = monster.health.saturating_sub(dealt);
        view.push(ViewItem::PlayerStrike {
            damage: dealt,
            monster_hp: monster.health,
        });

        if monster.health == 0 {
            break;
        }

        let taken = hit_damage(monster.base_damage, protection);
        view.push(ViewItem::MonsterStrike {
            raw: monster.base_damage,
            blocked: protection,
            taken,
        });
        let change = player.damage(taken);
        view.push(ViewItem::HealthChanged(change));
    }

    let outcome = if player.health.life_state() == LifeState::Dead {
        view.push(ViewItem::PlayerCollapsed);
        EncounterOutcome::Defeated
    } else if kind.is_boss() {
        world.dragon_slain = true;
        world.monsters_slain += 1;
        view.push(ViewItem::DragonSlain);
        EncounterOutcome::BossVictory
    } else {
        player.earn_gold(VICTORY_BOUNTY);
        world.monsters_slain += 1;
        view.push(ViewItem::MonsterDefeated { bounty: VICTORY_BOUNTY });
        EncounterOutcome::Victory
    };
    info!(
        "{kind} encounter ended after {rounds} round(s): {outcome:?} (hp {}, gold {})",
        world.player.health.current_hp(),
        world.player.gold
    );
    outcome
}

fn retreat(world: &mut QuestWorld, view: &mut View, reason: RetreatReason) -> EncounterOutcome {
    view.push(ViewItem::ForcedRetreat {
        reason,
        penalty: RETREAT_PENALTY,
    });
    let change = world.player.damage(RETREAT_PENALTY);
    view.push(ViewItem::HealthChanged(change));
    info!("{} retreated ({reason:?}), hp now {}", world.player.name, change.after);
    EncounterOutcome::Retreated(reason)
}
