#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const QUEST_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod error;
pub mod health;
pub mod inventory;
pub mod loader;
pub mod player;
pub mod repl;
pub mod shop;
pub mod style;
pub mod travel;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::Command;
pub use error::GameError;
pub use player::Player;
pub use repl::{apply_command, run_repl};
pub use view::{View, ViewItem};
pub use world::{GameOutcome, Location, QuestWorld};
