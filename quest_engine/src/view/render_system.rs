//! module Render System
//!
//! Renderers for help, game-over notices and the closing summary.

use colored::Colorize as _;
use textwrap::fill;

use super::render_player;
use crate::{
    ViewItem,
    style::{GameStyle as _, normal_block},
    view::ViewEntry,
    view::icons::{ICON_DEATH, ICON_ENGINE, ICON_TROPHY},
    world::GameOutcome,
};

pub(super) fn system(entries: &[&ViewEntry]) {
    for entry in entries {
        match &entry.view_item {
            ViewItem::Help(help) => {
                println!("=== {} ===", "AVAILABLE COMMANDS".subheading_style());
                println!("{}", fill(help.basic_text.as_str(), normal_block()).italic());
                for section in &help.sections {
                    println!("\n{}:", section.title.subheading_style());
                    for line in &section.lines {
                        println!("- {line}");
                    }
                }
                println!();
            },
            ViewItem::EngineMessage(msg) => {
                println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
            },
            ViewItem::GameOver(outcome) => match outcome {
                GameOutcome::Defeat => println!(
                    "{:<4}{}",
                    ICON_DEATH.bright_red(),
                    "Game Over! Your health reached 0!".damage_style()
                ),
                GameOutcome::Victory => println!(
                    "{ICON_TROPHY} {}",
                    "Your quest is complete. Songs will be sung of this day.".bright_yellow()
                ),
                GameOutcome::Quit => println!("Thanks for playing!"),
            },
            ViewItem::QuitSummary {
                turns,
                monsters_slain,
                status,
            } => {
                println!("\n=== {} ===", "Final Stats".subheading_style());
                println!("Turns taken: {turns}");
                println!("Monsters slain: {monsters_slain}\n");
                render_player::status_block(status);
            },
            _ => {},
        }
    }
    println!();
}
