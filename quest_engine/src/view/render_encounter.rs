//! module Render Encounter
//!
//! Renderers for combat narration and health changes, shown in the order the
//! events happened.

use colored::Colorize as _;

use crate::{
    ViewItem,
    combat::{MonsterKind, RetreatReason},
    health::{HealthChange, HealthClamp},
    style::GameStyle as _,
    view::ViewEntry,
    view::icons::{ICON_CELEBRATE, ICON_DEATH, ICON_FIRE, ICON_HARMED, ICON_HEALED, ICON_TROPHY},
};

/// Clamp notice, if any, then the new health total.
pub(super) fn health_change(change: &HealthChange) {
    match change.clamp {
        Some(HealthClamp::Ceiling) => println!("You're at full health!"),
        Some(HealthClamp::Floor) => println!("{}", "You're gravely wounded!".damage_style()),
        None => {},
    }
    let icon = if change.after >= change.before {
        ICON_HEALED.heal_style()
    } else {
        ICON_HARMED.damage_style()
    };
    println!("{icon:<4}Health is now: {}", change.after);
}

pub(super) fn world_responses(entries: &[&ViewEntry]) {
    for entry in entries {
        match &entry.view_item {
            ViewItem::EncounterStarted(MonsterKind::Dragon) => {
                println!("{ICON_FIRE} The {} emerges from the shadows!", "DRAGON".monster_style());
            },
            ViewItem::EncounterStarted(MonsterKind::Beast) => {
                println!("A {} lunges at you!", "snarling beast".monster_style());
            },
            ViewItem::ForcedRetreat { reason, penalty } => {
                let line = match reason {
                    RetreatReason::Underequipped => "The dragon senses your weakness. You are forced to retreat!",
                    RetreatReason::Unarmed => "Without a weapon, you must retreat!",
                };
                println!("{} (-{} hp)", line.denied_style(), penalty.to_string().damage_style());
            },
            ViewItem::WeaponReadied { name, effect } => {
                println!("You attack with your {} (+{effect} dmg).", name.item_style());
            },
            ViewItem::ArmorReadied(Some((name, effect))) => {
                println!("You brace behind your {} (+{effect} protection).", name.item_style());
            },
            ViewItem::ArmorReadied(None) => println!("{}", "You have no armor!".italic()),
            ViewItem::PlayerStrike { damage, monster_hp } => {
                println!(
                    "You strike for {} damage. (Monster HP: {monster_hp})",
                    damage.to_string().bold()
                );
            },
            ViewItem::MonsterStrike { raw, blocked, taken } => {
                println!(
                    "{:<4}The enemy hits for {raw}. Your armor reduces it by {blocked} → you take {}.",
                    ICON_HARMED.bright_yellow(),
                    taken.to_string().damage_style()
                );
            },
            ViewItem::HealthChanged(change) => health_change(change),
            ViewItem::PlayerCollapsed => {
                println!("\n{:<4}{}", ICON_DEATH.bright_red(), "You collapse from your wounds...".damage_style());
            },
            ViewItem::MonsterDefeated { bounty } => {
                println!(
                    "{:<4}Victory! You found {} gold!",
                    ICON_CELEBRATE,
                    bounty.to_string().gold_style()
                );
            },
            ViewItem::DragonSlain => {
                println!(
                    "\n{ICON_TROPHY} {}",
                    "You have slain the DRAGON! The realm is saved!".bright_yellow().bold()
                );
            },
            _ => {},
        }
    }
    println!();
}
