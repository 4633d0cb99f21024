//! Inventory and equipment selection.
//!
//! The player never equips gear by hand. Combat asks the inventory for the best
//! weapon and armor at the start of every encounter, and the mountain path asks
//! whether the player is ready to face the dragon.

use quest_data::{ItemCategory, ItemTemplate, STEEL_SWORD};
use serde::{Deserialize, Serialize};

/// An owned copy of an [`ItemTemplate`], created when the player buys it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub category: ItemCategory,
    pub cost: u32,
    pub effect: u32,
    pub description: String,
}

impl From<&ItemTemplate> for InventoryItem {
    fn from(template: &ItemTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            category: template.category,
            cost: template.cost,
            effect: template.effect,
            description: template.description.to_string(),
        }
    }
}

impl InventoryItem {
    pub fn is_potion(&self) -> bool {
        self.category == ItemCategory::Potion
    }
}

/// Items the player owns, in the order they were acquired.
///
/// Order matters only for display and for breaking ties in [`Inventory::best_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Remove and return the item at a zero-based position.
    pub fn take(&mut self, index: usize) -> Option<InventoryItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&InventoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    /// All owned items of a category, in acquisition order.
    pub fn items_of_category(&self, category: ItemCategory) -> Vec<&InventoryItem> {
        self.items.iter().filter(|item| item.category == category).collect()
    }

    /// The item of `category` with the highest effect.
    ///
    /// Only a strictly greater effect replaces the current pick, so ties go to
    /// the earliest acquisition.
    pub fn best_item(&self, category: ItemCategory) -> Option<&InventoryItem> {
        self.items_of_category(category)
            .into_iter()
            .reduce(|best, cur| if cur.effect > best.effect { cur } else { best })
    }

    pub fn has_category(&self, category: ItemCategory) -> bool {
        self.items.iter().any(|item| item.category == category)
    }

    /// Dragon readiness: a weapon named exactly "Steel Sword" plus any armor.
    ///
    /// This is a name check, not an effect check. A stronger weapon under a
    /// different name does not open the mountain path.
    pub fn has_good_equipment(&self) -> bool {
        let has_steel = self
            .items
            .iter()
            .any(|item| item.name == STEEL_SWORD.name && item.category == ItemCategory::Weapon);
        has_steel && self.best_item(ItemCategory::Armor).is_some()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = std::slice::Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_data::{HEALTH_POTION, IRON_SHIELD, SWORD, WOODEN_SHIELD};

    fn weapon(name: &str, effect: u32) -> InventoryItem {
        InventoryItem {
            name: name.into(),
            effect,
            ..InventoryItem::from(&SWORD)
        }
    }

    #[test]
    fn best_item_picks_highest_effect() {
        let mut inv = Inventory::new();
        for (name, effect) in [("Dagger", 5), ("Axe", 10), ("Club", 7)] {
            inv.add(weapon(name, effect));
        }
        let best = inv.best_item(ItemCategory::Weapon).unwrap();
        assert_eq!(best.name, "Axe");
        assert_eq!(best.effect, 10);
    }

    #[test]
    fn best_item_on_empty_inventory_is_none() {
        let inv = Inventory::new();
        assert!(inv.best_item(ItemCategory::Weapon).is_none());
        assert!(inv.best_item(ItemCategory::Armor).is_none());
    }

    #[test]
    fn ties_go_to_earliest_acquisition() {
        let mut inv = Inventory::new();
        inv.add(weapon("First", 10));
        inv.add(weapon("Second", 10));
        assert_eq!(inv.best_item(ItemCategory::Weapon).unwrap().name, "First");
    }

    #[test]
    fn category_filter_keeps_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(InventoryItem::from(&IRON_SHIELD));
        inv.add(InventoryItem::from(&HEALTH_POTION));
        inv.add(InventoryItem::from(&WOODEN_SHIELD));
        let armor: Vec<_> = inv
            .items_of_category(ItemCategory::Armor)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(armor, vec!["Iron Shield", "Wooden Shield"]);
        assert!(inv.has_category(ItemCategory::Potion));
        assert!(!inv.has_category(ItemCategory::Weapon));
    }

    #[test]
    fn good_equipment_requires_the_steel_sword_by_name() {
        let mut inv = Inventory::new();
        inv.add(weapon("Sword", 10));
        inv.add(weapon("Runeblade", 99));
        inv.add(InventoryItem::from(&IRON_SHIELD));
        assert!(!inv.has_good_equipment());

        inv.add(weapon("Steel Sword", 1));
        assert!(inv.has_good_equipment());
    }

    #[test]
    fn good_equipment_requires_armor() {
        let mut inv = Inventory::new();
        inv.add(weapon("Steel Sword", 20));
        assert!(!inv.has_good_equipment());
        inv.add(InventoryItem::from(&WOODEN_SHIELD));
        assert!(inv.has_good_equipment());
    }

    #[test]
    fn take_removes_only_valid_positions() {
        let mut inv = Inventory::new();
        inv.add(InventoryItem::from(&HEALTH_POTION));
        assert!(inv.take(1).is_none());
        assert_eq!(inv.take(0).map(|i| i.name), Some("Health Potion".to_string()));
        assert!(inv.is_empty());
    }
}
