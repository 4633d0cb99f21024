//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! turn validated menu choices into [`Command`]s and apply them to the
//! [`QuestWorld`], collecting everything that happened in a [`View`].

mod input;
pub mod inventory;
pub mod movement;
pub mod shop;
pub mod system;

pub use input::{ChoiceError, InputEvent, InputManager, parse_choice, parse_item_selection};
pub use inventory::*;
pub use movement::*;
pub use shop::*;
pub use system::*;

use crate::command::{Command, ItemSelection, MenuAction, menu};
use crate::error::GameError;
use crate::style::GameStyle;
use crate::world::QuestWorld;
use crate::view::StatusSnapshot;
use crate::{View, ViewItem};

use anyhow::Result;
use colored::Colorize;
use log::{info, warn};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Apply one command to the world, then check whether the game is over.
///
/// Recoverable game errors are shown to the player and never returned.
///
/// # Errors
/// - if bundled help data can't be loaded
pub fn apply_command(world: &mut QuestWorld, view: &mut View, command: Command) -> Result<ReplControl> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    world.turn_count += 1;
    info!("================> BEGIN TURN {} <================", world.turn_count);
    info!("command: {command:?} at {}", world.player.location);

    match command {
        MoveTo(to) => move_to_handler(world, view, to),
        CheckStatus => status_handler(world, view),
        UseItem(selection) => use_item_handler(world, view, selection),
        Purchase(id) => buy_handler(world, view, id),
        Help => help_handler(view)?,
        Quit => quit_handler(world),
    }

    Ok(check_game_over(world, view))
}

/// Push the end-of-game notices if the world has reached a terminal state.
pub fn check_game_over(world: &QuestWorld, view: &mut View) -> ReplControl {
    let Some(outcome) = world.outcome() else {
        return ReplControl::Continue;
    };
    info!(
        "game over ({outcome:?}) after {} turns: hp {}, gold {}, {} monster(s) slain",
        world.turn_count,
        world.player.health.current_hp(),
        world.player.gold,
        world.monsters_slain
    );
    view.push(ViewItem::GameOver(outcome));
    view.push(ViewItem::QuitSummary {
        turns: world.turn_count,
        monsters_slain: world.monsters_slain,
        status: StatusSnapshot::of(&world.player),
    });
    ReplControl::Quit
}

/// Show a refused action to the player. State is already unchanged.
pub(crate) fn report_failure(view: &mut View, err: &GameError) {
    info!("action refused: {err}");
    view.push(ViewItem::ActionFailure(err.player_message()));
}

/// Run the main read–eval–print loop until the game ends or the player quits.
///
/// # Errors
/// - on unrecoverable input errors. Handler failures are shown and play continues.
pub fn run_repl(world: &mut QuestWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    loop {
        let here = world.player.location;
        let actions = menu(here);
        view.push(ViewItem::LocationScene(here));
        view.push(ViewItem::Menu(actions.iter().map(|a| a.label()).collect()));
        view.flush();

        let Some(choice) = read_menu_choice(&mut input_manager, &mut view, actions.len())? else {
            // end of input behaves like choosing to quit
            apply_command(world, &mut view, Command::Quit)?;
            view.flush();
            break;
        };

        let Some(action) = actions.get(choice - 1).copied() else {
            warn!("menu choice {choice} passed validation but has no action");
            continue;
        };
        let command = match action {
            MenuAction::Move(to) => Command::MoveTo(to),
            MenuAction::CheckStatus => Command::CheckStatus,
            MenuAction::UseItem => Command::UseItem(read_item_selection(world, &mut input_manager, &mut view)?),
            MenuAction::Purchase(id) => Command::Purchase(id),
            MenuAction::Help => Command::Help,
            MenuAction::Quit => Command::Quit,
        };

        match apply_command(world, &mut view, command) {
            Ok(ReplControl::Continue) => {},
            Ok(ReplControl::Quit) => {
                view.flush();
                break;
            },
            Err(err) => {
                warn!("command {command:?} failed: {err:#}");
                view.push(ViewItem::Error(format!("{err:#}")));
            },
        }
    }
    Ok(())
}

/// Prompt until the player enters a valid menu number. `None` on end of input.
fn read_menu_choice(input_manager: &mut InputManager, view: &mut View, max: usize) -> Result<Option<usize>> {
    let prompt = "\nEnter choice (number): ".prompt_style().to_string();
    loop {
        let line = match input_manager.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Ok(None),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };
        match parse_choice(&line, max) {
            Ok(choice) => return Ok(Some(choice)),
            Err(err) => {
                println!("\n{} {}", "Error:".error_style(), err);
                println!("{}", "Please try again!".italic());
            },
        }
    }
}

/// Ask which item to use. Skips the prompt when there is nothing to use.
fn read_item_selection(
    world: &QuestWorld,
    input_manager: &mut InputManager,
    view: &mut View,
) -> Result<ItemSelection> {
    if world.player.inventory.is_empty() {
        return Ok(ItemSelection::Cancel);
    }
    view.push(ViewItem::ItemChoices(
        world.player.inventory.iter().map(|item| item.name.clone()).collect(),
    ));
    view.flush();

    let prompt = "Use which item? (number or 'cancel'): ".prompt_style().to_string();
    Ok(match input_manager.read_line(&prompt)? {
        InputEvent::Line(line) => parse_item_selection(&line),
        InputEvent::Eof | InputEvent::Interrupted => ItemSelection::Cancel,
    })
}
