//! Recoverable errors raised by core game operations.
//!
//! None of these are fatal. Each one leaves the world untouched and is shown
//! to the player as a failed action before the next prompt.

use thiserror::Error;

use crate::world::Location;

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionBlock {
    /// No path leads from the current location to the target.
    NoRoute,
    /// The path exists but is gated on dragon-ready equipment.
    Underequipped,
}

/// Why an item selection could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionProblem {
    Canceled,
    EmptyInventory,
    /// `slot` is the 1-based number the player chose.
    OutOfRange { slot: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not enough gold for {item}: costs {cost}, have {gold}")]
    InsufficientFunds { item: String, cost: u32, gold: u32 },
    #[error("illegal move from {from} to {to} ({block:?})")]
    IllegalTransition {
        from: Location,
        to: Location,
        block: TransitionBlock,
    },
    #[error("invalid item selection ({0:?})")]
    InvalidItemSelection(SelectionProblem),
    #[error("{item} is not sold at the {location}")]
    NotForSale { item: String, location: Location },
}

impl GameError {
    /// Text shown to the player when this error interrupts an action.
    pub fn player_message(&self) -> String {
        match self {
            GameError::InsufficientFunds { .. } => "You don't have enough gold!".to_string(),
            GameError::IllegalTransition {
                block: TransitionBlock::Underequipped,
                ..
            } => "The path is too dangerous. You need a Steel Sword and some armor before facing the dragon."
                .to_string(),
            GameError::IllegalTransition { to, .. } => format!("You can't get to the {to} from here."),
            GameError::InvalidItemSelection(SelectionProblem::EmptyInventory) => "You have no items!".to_string(),
            GameError::InvalidItemSelection(SelectionProblem::Canceled) => "You put your pack away.".to_string(),
            GameError::InvalidItemSelection(SelectionProblem::OutOfRange { .. }) => {
                "Invalid item number!".to_string()
            },
            GameError::NotForSale { item, location } => format!("Nobody at the {location} sells a {item}."),
        }
    }
}
