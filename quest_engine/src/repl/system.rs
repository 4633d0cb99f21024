//! `repl::system` module
//!
//! Contains repl loop handlers for help and quitting.

use anyhow::{Context, Result};
use log::info;
use quest_data::{CATALOG, ItemCategory};

use crate::loader::{HelpSection, bundled_help};
use crate::{QuestWorld, View, ViewItem};

/// Quit the game. The REPL ends once the turn's game-over check sees the flag.
pub fn quit_handler(world: &mut QuestWorld) {
    info!(
        "{} quit at the {} with {} gold",
        world.player.name, world.player.location, world.player.gold
    );
    info!("ending inventory:");
    world.player.inventory.iter().for_each(|item| info!("- {}", item.name));
    world.quit = true;
}

/// Show available commands, plus what the shops currently sell.
///
/// # Errors
/// - if the bundled help data fails to parse
pub fn help_handler(view: &mut View) -> Result<()> {
    let mut help = bundled_help().context("while showing help")?;
    help.insert_section_before("Other", shopping_section());
    view.push(ViewItem::Help(help));
    Ok(())
}

fn shopping_section() -> HelpSection {
    let names = |category: ItemCategory| {
        CATALOG
            .iter()
            .filter(|t| t.category == category)
            .map(|t| format!("{} ({} gold)", t.name, t.cost))
            .collect::<Vec<_>>()
            .join(", ")
    };
    HelpSection {
        title: "Shopping".into(),
        lines: vec![
            format!("Market sells {}", names(ItemCategory::Potion)),
            format!("Blacksmith sells weapons: {}", names(ItemCategory::Weapon)),
            format!("Blacksmith sells shields: {}", names(ItemCategory::Armor)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopping_help_lists_live_prices() {
        let section = shopping_section();
        assert_eq!(section.lines[0], "Market sells Health Potion (5 gold)");
        assert!(section.lines[1].contains("Steel Sword (25 gold)"));
        assert!(section.lines[2].contains("Iron Shield (16 gold)"));
    }

    #[test]
    fn help_handler_pushes_help() {
        let mut view = View::new();
        help_handler(&mut view).unwrap();
        let Some(ViewItem::Help(help)) = view.pending().next() else {
            panic!("expected help to be queued");
        };
        assert!(help.sections.iter().any(|s| s.title == "Shopping"));
    }
}
