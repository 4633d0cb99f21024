//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use log::info;

use crate::repl::report_failure;
use crate::travel::travel;
use crate::world::Location;
use crate::{QuestWorld, View};

/// Move the player to a neighboring location, fighting whatever waits there.
pub fn move_to_handler(world: &mut QuestWorld, view: &mut View, to: Location) {
    match travel(world, view, to) {
        Ok(report) => {
            if let Some(outcome) = report.encounter {
                info!(
                    "{} now at {} after encounter ({outcome:?})",
                    world.player.name, report.arrived
                );
            }
        },
        Err(err) => report_failure(view, &err),
    }
}
