//! module Render Player
//!
//! Renderers for the location scene and for player-facing results such as
//! status, item use and purchases.

use colored::Colorize as _;
use quest_data::ItemCategory;
use textwrap::fill;

use super::render_encounter;
use crate::{
    ViewItem,
    style::{GameStyle as _, normal_block},
    view::{StatusSnapshot, ViewEntry},
    view::icons::{ICON_GOLD, ICON_HEART, ICON_PACK, ICON_PIN, ICON_SHIELD, ICON_SUCCESS, ICON_WEAPON},
};

/// Location title, description and numbered menu.
pub(super) fn environment(entries: &[&ViewEntry]) {
    for entry in entries {
        match &entry.view_item {
            ViewItem::LocationScene(location) => {
                println!("\n=== {} ===", location.name().to_uppercase().location_titlebar_style());
                println!("{}", fill(location.description(), normal_block()).description_style());
            },
            ViewItem::Menu(lines) => {
                println!("\nWhat would you like to do?");
                for (idx, line) in lines.iter().enumerate() {
                    println!("{}: {line}", (idx + 1).to_string().menu_number_style());
                }
            },
            _ => {},
        }
    }
}

/// Full status block for `ViewItem::Status`.
pub(super) fn status(entries: &[&ViewEntry]) {
    for entry in entries {
        if let ViewItem::Status(snapshot) = &entry.view_item {
            status_block(snapshot);
        }
    }
}

pub(crate) fn status_block(snapshot: &StatusSnapshot) {
    println!("=== {}'s Status ===", snapshot.name.subheading_style());
    println!("{ICON_HEART} Health: {}", snapshot.health);
    println!("{ICON_GOLD} Gold: {}", snapshot.gold.to_string().gold_style());
    println!("{ICON_PIN} Location: {}", snapshot.location.name().location_style());
    println!("{ICON_PACK} Inventory: ");
    if snapshot.inventory.is_empty() {
        println!("   {}", "Nothing in inventory".italic().dimmed());
    } else {
        for (idx, (name, description)) in snapshot.inventory.iter().enumerate() {
            println!("   {}. {} - {description}", idx + 1, name.item_style());
        }
    }
    let weapon = snapshot
        .weapon
        .as_ref()
        .map_or_else(|| "None".to_string(), |(name, effect)| format!("{name} (+{effect} dmg)"));
    let armor = snapshot
        .armor
        .as_ref()
        .map_or_else(|| "None".to_string(), |(name, effect)| format!("{name} (+{effect} prot)"));
    println!("{ICON_WEAPON} Equipped (auto): {weapon}");
    println!("{ICON_SHIELD} Armor (auto): {armor}");
    println!();
}

/// Numbered list shown before the "use which item?" prompt.
pub(super) fn item_choices(entries: &[&ViewEntry]) {
    for entry in entries {
        if let ViewItem::ItemChoices(names) = &entry.view_item {
            println!("=== {} ===", "Inventory".subheading_style());
            for (idx, name) in names.iter().enumerate() {
                println!("{}. {}", idx + 1, name.item_style());
            }
        }
    }
}

pub(super) fn item_effects(entries: &[&ViewEntry]) {
    for entry in entries {
        match &entry.view_item {
            ViewItem::PotionDrunk { name, change } => {
                println!("You drink the {}.", name.item_style());
                render_encounter::health_change(change);
            },
            ViewItem::ItemReadied { name, category } => match category {
                ItemCategory::Armor => println!(
                    "You secure your {}. {}",
                    name.item_style(),
                    "(Auto-equip uses best stats)".dimmed()
                ),
                _ => println!(
                    "You ready your {} for battle. {}",
                    name.item_style(),
                    "(Auto-equip uses best stats)".dimmed()
                ),
            },
            _ => {},
        }
    }
}

pub(super) fn purchases(entries: &[&ViewEntry]) {
    for entry in entries {
        if let ViewItem::Purchased { item, cost, gold_left } = &entry.view_item {
            println!("Purchase: {} for {cost} gold.", item.item_style());
            println!("{:<4}You bought a {}!", ICON_SUCCESS.green(), item.item_style());
            println!("Gold remaining: {}", gold_left.to_string().gold_style());
        }
    }
}
