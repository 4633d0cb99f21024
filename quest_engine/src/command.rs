//! Command module
//!
//! Describes the actions a player can take and the numbered menu that maps a
//! choice at each location onto one of them.
use quest_data::TemplateId;
use variantly::Variantly;

use crate::shop::stock;
use crate::travel::destinations;
use crate::world::Location;

/// Which inventory item to use, as chosen at the item prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSelection {
    /// 1-based position, as displayed.
    Slot(usize),
    Cancel,
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Command {
    MoveTo(Location),
    CheckStatus,
    UseItem(ItemSelection),
    Purchase(TemplateId),
    Help,
    Quit,
}

/// One numbered menu line. `UseItem` is a separate step because the shell
/// still has to ask which item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Move(Location),
    CheckStatus,
    UseItem,
    Purchase(TemplateId),
    Help,
    Quit,
}

impl MenuAction {
    /// Label shown next to the menu number.
    pub fn label(self) -> String {
        match self {
            MenuAction::Purchase(id) => {
                let template = id.template();
                format!("Buy {} ({} gold)", template.name, template.cost)
            },
            MenuAction::Move(Location::Blacksmith) => "Go to blacksmith".into(),
            MenuAction::Move(Location::Market) => "Go to market".into(),
            MenuAction::Move(Location::Forest) => "Enter forest".into(),
            MenuAction::Move(Location::Mountains) => "Travel to the mountains (Dragon)".into(),
            MenuAction::Move(Location::Village) => "Return to village".into(),
            MenuAction::CheckStatus => "Check status".into(),
            MenuAction::UseItem => "Use item".into(),
            MenuAction::Help => "Help".into(),
            MenuAction::Quit => "Quit game".into(),
        }
    }
}

/// The numbered menu for a location: wares first, then moves, then the
/// options every location shares.
pub fn menu(location: Location) -> Vec<MenuAction> {
    let mut actions: Vec<MenuAction> = stock(location).iter().copied().map(MenuAction::Purchase).collect();
    actions.extend(destinations(location).into_iter().map(MenuAction::Move));
    actions.extend([
        MenuAction::CheckStatus,
        MenuAction::UseItem,
        MenuAction::Help,
        MenuAction::Quit,
    ]);
    actions
}

/// Menu action for a 1-based choice, if it is in range.
pub fn menu_choice(location: Location, choice: usize) -> Option<MenuAction> {
    choice.checked_sub(1).and_then(|idx| menu(location).get(idx).copied())
}
