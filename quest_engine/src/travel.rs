//! Travel Module
//!
//! The location graph and its transition rules. Plain moves just change the
//! player's location. Entering the forest starts a beast encounter, and the
//! mountain path is gated on dragon-ready gear and starts the boss fight.

use log::info;

use crate::combat::{EncounterOutcome, MonsterKind, resolve_encounter};
use crate::error::{GameError, TransitionBlock};
use crate::world::Location;
use crate::{QuestWorld, View, ViewItem};

/// What a legal edge of the location graph does when taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Walk,
    /// Move, then fight a monster where you land.
    Ambush(MonsterKind),
    /// Like `Ambush`, but only open to a dragon-ready player.
    GatedAmbush(MonsterKind),
}

/// Result of a successful travel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelReport {
    pub arrived: Location,
    pub encounter: Option<EncounterOutcome>,
}

/// The edge from `from` to `to`, if the graph has one.
pub fn transition(from: Location, to: Location) -> Option<Transition> {
    use Location::{Blacksmith, Forest, Market, Mountains, Village};
    match (from, to) {
        (Village, Blacksmith | Market) => Some(Transition::Walk),
        (Village, Forest) => Some(Transition::Ambush(MonsterKind::Beast)),
        (Village, Mountains) => Some(Transition::GatedAmbush(MonsterKind::Dragon)),
        (Blacksmith | Market | Forest | Mountains, Village) => Some(Transition::Walk),
        _ => None,
    }
}

/// Every location reachable from `from`, in menu order.
pub fn destinations(from: Location) -> Vec<Location> {
    Location::ALL
        .into_iter()
        .filter(|to| transition(from, *to).is_some())
        .collect()
}

fn arrival_message(from: Location, to: Location) -> &'static str {
    match (from, to) {
        (_, Location::Blacksmith) => "You enter the blacksmith's shop.",
        (_, Location::Market) => "You enter the market.",
        (_, Location::Forest) => "You venture into the forest...",
        (_, Location::Mountains) => "You ascend into the mountains...",
        (Location::Forest, Location::Village) => "You hurry back to the safety of the village.",
        (Location::Mountains, Location::Village) => "You descend from the mountains to the village.",
        (_, Location::Village) => "You return to the village center.",
    }
}

/// Move the player toward `to`, running any encounter the move triggers.
///
/// # Errors
/// - `IllegalTransition` with `NoRoute` if no edge leads from the current location to `to`
/// - `IllegalTransition` with `Underequipped` if the mountain gate refuses the player
///
/// On error nothing in the world changes.
pub fn travel(world: &mut QuestWorld, view: &mut View, to: Location) -> Result<TravelReport, GameError> {
    let from = world.player.location;
    let Some(edge) = transition(from, to) else {
        info!("{} tried to travel {from} -> {to}: no route", world.player.name);
        return Err(GameError::IllegalTransition {
            from,
            to,
            block: TransitionBlock::NoRoute,
        });
    };

    if matches!(edge, Transition::GatedAmbush(_)) && !world.player.inventory.has_good_equipment() {
        info!("{} turned back from the {to}: not dragon-ready", world.player.name);
        return Err(GameError::IllegalTransition {
            from,
            to,
            block: TransitionBlock::Underequipped,
        });
    }

    world.player.location = to;
    view.push(ViewItem::TransitionMessage(arrival_message(from, to).to_string()));
    info!("{} moved {from} -> {to}", world.player.name);

    let encounter = match edge {
        Transition::Walk => None,
        Transition::Ambush(kind) => Some(resolve_encounter(world, view, kind)),
        Transition::GatedAmbush(kind) => {
            let outcome = resolve_encounter(world, view, kind);
            if !outcome.is_boss_victory() {
                // a failed assault sends the player home to regroup
                world.player.location = Location::Village;
                info!("{} sent back to the village after {outcome:?}", world.player.name);
            }
            Some(outcome)
        },
    };

    Ok(TravelReport {
        arrived: world.player.location,
        encounter,
    })
}
