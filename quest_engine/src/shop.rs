//! Shop Module
//!
//! Gold-for-item exchange. The blacksmith sells weapons and armor, the market
//! sells potions, and nobody haggles.

use log::info;
use quest_data::{ItemTemplate, TemplateId};

use crate::error::GameError;
use crate::inventory::InventoryItem;
use crate::world::Location;
use crate::{Player, QuestWorld, View, ViewItem};

const BLACKSMITH_STOCK: [TemplateId; 4] = [
    TemplateId::Sword,
    TemplateId::SteelSword,
    TemplateId::WoodenShield,
    TemplateId::IronShield,
];
const MARKET_STOCK: [TemplateId; 1] = [TemplateId::HealthPotion];

/// Templates offered at a location, in menu order.
pub fn stock(location: Location) -> &'static [TemplateId] {
    match location {
        Location::Blacksmith => &BLACKSMITH_STOCK,
        Location::Market => &MARKET_STOCK,
        Location::Village | Location::Forest | Location::Mountains => &[],
    }
}

/// Buy one copy of `template`, returning the gold left afterwards.
///
/// # Errors
/// - `InsufficientFunds` if the player's gold doesn't cover the cost; gold and inventory are left as they were
pub fn purchase(player: &mut Player, template: &ItemTemplate) -> Result<u32, GameError> {
    let Some(gold_left) = player.spend_gold(template.cost) else {
        info!(
            "{} can't afford {} ({} gold, has {})",
            player.name, template.name, template.cost, player.gold
        );
        return Err(GameError::InsufficientFunds {
            item: template.name.to_string(),
            cost: template.cost,
            gold: player.gold,
        });
    };
    player.inventory.add(InventoryItem::from(template));
    info!(
        "{} bought {} for {} gold ({gold_left} left)",
        player.name, template.name, template.cost
    );
    Ok(gold_left)
}

/// Buy `id` at the player's current location, reporting the result to the view.
///
/// # Errors
/// - `NotForSale` if the current location doesn't stock `id`
/// - `InsufficientFunds` from [`purchase`]
pub fn buy_here(world: &mut QuestWorld, view: &mut View, id: TemplateId) -> Result<(), GameError> {
    let location = world.player.location;
    let template = id.template();
    if !stock(location).contains(&id) {
        return Err(GameError::NotForSale {
            item: template.name.to_string(),
            location,
        });
    }
    let gold_left = purchase(&mut world.player, template)?;
    view.push(ViewItem::Purchased {
        item: template.name.to_string(),
        cost: template.cost,
        gold_left,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_data::{HEALTH_POTION, STEEL_SWORD, SWORD};

    #[test]
    fn purchase_deducts_and_appends() {
        let mut player = Player::new("Aria");
        assert_eq!(purchase(&mut player, &SWORD), Ok(10));
        assert_eq!(player.inventory.get(0).map(|i| i.name.as_str()), Some("Sword"));
        assert_eq!(player.gold, 10);
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn insufficient_funds_changes_nothing() {
        let mut player = Player::new("Aria");
        let err = purchase(&mut player, &STEEL_SWORD).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                item: "Steel Sword".into(),
                cost: 25,
                gold: 20
            }
        );
        assert_eq!(player.gold, 20);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn exact_gold_is_enough() {
        let mut player = Player::new("Aria");
        player.gold = 5;
        purchase(&mut player, &HEALTH_POTION).unwrap();
        assert_eq!(player.gold, 0);
    }

    #[test]
    fn shops_only_sell_their_own_stock() {
        let mut world = QuestWorld::new("Aria");
        world.player.location = Location::Market;
        let mut view = View::new();
        let err = buy_here(&mut world, &mut view, TemplateId::Sword).unwrap_err();
        assert!(matches!(err, GameError::NotForSale { .. }));
        assert_eq!(world.player.gold, 20);

        buy_here(&mut world, &mut view, TemplateId::HealthPotion).unwrap();
        assert_eq!(world.player.gold, 15);
        assert!(view.pending().any(|item| item.is_purchased()));
    }

    #[test]
    fn stock_lists() {
        assert_eq!(stock(Location::Blacksmith).len(), 4);
        assert_eq!(stock(Location::Market), &[TemplateId::HealthPotion]);
        assert!(stock(Location::Forest).is_empty());
    }
}
