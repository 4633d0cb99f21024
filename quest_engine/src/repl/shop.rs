//! `repl::shop` module
//!
//! Contains the repl loop handler for buying from the blacksmith and market

use quest_data::TemplateId;

use crate::repl::report_failure;
use crate::shop::buy_here;
use crate::{QuestWorld, View};

/// Buy an item from the shop at the player's location.
pub fn buy_handler(world: &mut QuestWorld, view: &mut View, id: TemplateId) {
    if let Err(err) = buy_here(world, view, id) {
        report_failure(view, &err);
    }
}
