use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad kind of an item, which decides what its `effect` means.
///
/// - `Potion`: health restored when drunk
/// - `Weapon`: damage dealt per hit
/// - `Armor`: damage blocked per incoming hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Potion,
    Weapon,
    Armor,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemCategory::Potion => "potion",
            ItemCategory::Weapon => "weapon",
            ItemCategory::Armor => "armor",
        };
        f.write_str(label)
    }
}

/// Stable handle for each entry in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateId {
    HealthPotion,
    Sword,
    SteelSword,
    WoodenShield,
    IronShield,
}

impl TemplateId {
    /// Look up the immutable template behind this id.
    pub fn template(self) -> &'static ItemTemplate {
        match self {
            TemplateId::HealthPotion => &HEALTH_POTION,
            TemplateId::Sword => &SWORD,
            TemplateId::SteelSword => &STEEL_SWORD,
            TemplateId::WoodenShield => &WOODEN_SHIELD,
            TemplateId::IronShield => &IRON_SHIELD,
        }
    }
}

/// Immutable item definition. Purchases copy these into the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTemplate {
    pub id: TemplateId,
    pub name: &'static str,
    pub category: ItemCategory,
    /// Price in gold.
    pub cost: u32,
    pub effect: u32,
    pub description: &'static str,
}

pub const HEALTH_POTION: ItemTemplate = ItemTemplate {
    id: TemplateId::HealthPotion,
    name: "Health Potion",
    category: ItemCategory::Potion,
    cost: 5,
    effect: 30,
    description: "Restores 30 health points",
};

pub const SWORD: ItemTemplate = ItemTemplate {
    id: TemplateId::Sword,
    name: "Sword",
    category: ItemCategory::Weapon,
    cost: 10,
    effect: 10,
    description: "A sturdy blade for combat",
};

pub const STEEL_SWORD: ItemTemplate = ItemTemplate {
    id: TemplateId::SteelSword,
    name: "Steel Sword",
    category: ItemCategory::Weapon,
    cost: 25,
    effect: 20,
    description: "A razor-sharp blade that deals heavy damage",
};

pub const WOODEN_SHIELD: ItemTemplate = ItemTemplate {
    id: TemplateId::WoodenShield,
    name: "Wooden Shield",
    category: ItemCategory::Armor,
    cost: 8,
    effect: 5,
    description: "Reduces damage taken in combat",
};

pub const IRON_SHIELD: ItemTemplate = ItemTemplate {
    id: TemplateId::IronShield,
    name: "Iron Shield",
    category: ItemCategory::Armor,
    cost: 16,
    effect: 10,
    description: "A sturdy shield that blocks more damage",
};

/// Every template, in the order the shops list them.
pub const CATALOG: [&ItemTemplate; 5] = [&HEALTH_POTION, &SWORD, &STEEL_SWORD, &WOODEN_SHIELD, &IRON_SHIELD];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve_to_matching_templates() {
        for template in CATALOG {
            assert_eq!(template.id.template(), template);
        }
    }

    #[test]
    fn steel_sword_outclasses_sword() {
        assert!(STEEL_SWORD.effect > SWORD.effect);
        assert!(IRON_SHIELD.effect > WOODEN_SHIELD.effect);
    }

    #[test]
    fn category_display_is_lowercase() {
        assert_eq!(ItemCategory::Armor.to_string(), "armor");
    }
}
