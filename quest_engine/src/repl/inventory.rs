//! `repl::inventory` module
//!
//! Contains repl loop handlers for looking at and using the player's belongings

use crate::command::ItemSelection;
use crate::player::ItemUse;
use crate::repl::report_failure;
use crate::view::StatusSnapshot;
use crate::{QuestWorld, View, ViewItem};

/// Show health, gold, location, inventory and the auto-equipped gear.
pub fn status_handler(world: &QuestWorld, view: &mut View) {
    view.push(ViewItem::Status(StatusSnapshot::of(&world.player)));
}

/// Drink a potion or "ready" a piece of gear.
pub fn use_item_handler(world: &mut QuestWorld, view: &mut View, selection: ItemSelection) {
    match world.player.use_item(selection) {
        Ok(ItemUse::Drank { name, change }) => {
            view.push(ViewItem::PotionDrunk { name, change });
        },
        Ok(ItemUse::Readied { name, category }) => {
            view.push(ViewItem::ItemReadied { name, category });
        },
        Err(err) => report_failure(view, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryItem;
    use crate::view::Section;
    use quest_data::HEALTH_POTION;

    #[test]
    fn potion_result_is_one_direct_result() {
        let mut world = QuestWorld::new("Tester");
        world.player.inventory.add(InventoryItem::from(&HEALTH_POTION));
        world.player.damage(50);
        let mut view = View::new();

        use_item_handler(&mut world, &mut view, ItemSelection::Slot(1));
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].section, Section::DirectResult);
        let Some(ViewItem::PotionDrunk { change, .. }) = view.pending().next() else {
            panic!("expected the potion to be reported");
        };
        assert_eq!((change.before, change.after), (50, 80));
    }
}
