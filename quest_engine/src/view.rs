//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

pub mod icons;
mod render_encounter;
mod render_player;
mod render_system;
pub mod view_item;

pub use view_item::{StatusSnapshot, ViewItem};

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::style::{GameStyle, normal_block};
use icons::{ICON_ERROR, ICON_FAILURE};

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Pending items in the order they were pushed.
    pub fn pending(&self) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().map(|entry| &entry.view_item)
    }

    /// Drop everything queued for this frame without displaying it.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let has = |section: Section| self.items.iter().any(|entry| entry.section == section);
        let (transition, direct, world, system, environment) = (
            has(Section::Transition),
            has(Section::DirectResult),
            has(Section::WorldResponse),
            has(Section::System),
            has(Section::Environment),
        );

        if transition {
            self.transitions();
        }
        if direct {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        if world {
            println!("{:.>width$}\n", "events".section_style(), width = self.width);
            render_encounter::world_responses(&self.section_entries(Section::WorldResponse));
        }
        if system {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            render_system::system(&self.section_entries(Section::System));
        }
        // scene and menu go last, right above the prompt
        if environment {
            render_player::environment(&self.section_entries(Section::Environment));
        }

        // clear the buffer for the next turn
        self.items.clear();
    }

    /// Entries of one section, in push order.
    fn section_entries(&self, section: Section) -> Vec<&ViewEntry> {
        let mut entries: Vec<&ViewEntry> = self.items.iter().filter(|entry| entry.section == section).collect();
        entries.sort_by_key(|entry| entry.sequence);
        entries
    }

    fn transitions(&self) {
        for entry in self.section_entries(Section::Transition) {
            if let ViewItem::TransitionMessage(msg) = &entry.view_item {
                println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
            }
        }
        println!();
    }

    fn direct_results(&self) {
        let entries = self.section_entries(Section::DirectResult);
        render_player::status(&entries);
        render_player::item_choices(&entries);
        render_player::item_effects(&entries);
        render_player::purchases(&entries);
        Self::action_failure(&entries);
        Self::errors(&entries);
    }

    fn action_failure(entries: &[&ViewEntry]) {
        for entry in entries {
            if let ViewItem::ActionFailure(msg) = &entry.view_item {
                println!(
                    "{}",
                    fill(format!("{:<4}{}", ICON_FAILURE, msg.denied_style()).as_str(), normal_block())
                );
            }
        }
    }

    fn errors(entries: &[&ViewEntry]) {
        for entry in entries {
            if let ViewItem::Error(msg) = &entry.view_item {
                println!("{:<4}{}", ICON_ERROR.red(), msg.error_style());
            }
        }
    }
}

/// Broad grouping of `ViewItem`s, in the order they may appear in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Movement narration between locations.
    Transition,
    /// Location description and the numbered menu.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Encounters and their consequences.
    WorldResponse,
    /// Meta/game-system feedback (help, game over, etc.).
    System,
}

/// A `ViewItem` along with its section and the order in which it was pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_section_and_sequence() {
        let mut view = View::new();
        view.push(ViewItem::TransitionMessage("You enter the market.".into()));
        view.push(ViewItem::PlayerCollapsed);
        assert_eq!(view.items[0].section, Section::Transition);
        assert_eq!(view.items[1].section, Section::WorldResponse);
        assert_eq!(view.items[1].sequence, 1);
        assert_eq!(view.pending().count(), 2);
    }

    #[test]
    fn flush_empties_the_frame() {
        let mut view = View::new();
        view.push(ViewItem::ActionFailure("nope".into()));
        view.flush();
        assert!(view.items.is_empty());
    }
}
