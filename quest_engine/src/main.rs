#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** The Dragon's Quest **
//! A small turn-based adventure: gear up, clear the forest, slay the dragon.

use quest_engine::repl::{InputEvent, InputManager};
use quest_engine::style::GameStyle;
use quest_engine::{QuestWorld, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: The Dragon's Quest v{}", quest_engine::QUEST_VERSION);
    quest_engine::loader::check_bundled_catalog();

    println!("=================================");
    println!("{:^33}", "The Dragon's Quest".bright_yellow().bold());
    println!("=================================");
    println!("\n{}", "Your quest: Defeat the dragon in the mountains!".description_style());

    let mut input = InputManager::new();
    let prompt = "\nWhat is your name, brave adventurer? ".prompt_style().to_string();
    let name = match input.read_line(&prompt).context("while reading player name")? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => String::new(),
    };
    drop(input);

    let mut world = QuestWorld::new(&name);
    println!("\nWelcome, {}!", world.player.name.bold().bright_blue());
    println!("You start with {} gold.", world.player.gold.to_string().gold_style());

    info!("Starting the game!");
    run_repl(&mut world)
}
