//! Loading of the game's bundled data files.

pub mod help;

pub use help::{HelpData, HelpSection, bundled_help};

use log::{info, warn};
use quest_data::{CATALOG, ItemTemplate, validate_catalog};

/// Validate item templates, logging a warning for each problem found.
///
/// Returns the number of problems. The game still runs with a flawed catalog.
pub fn check_catalog(templates: &[&ItemTemplate]) -> usize {
    let errors = validate_catalog(templates);
    for err in &errors {
        warn!("item catalog: {err}");
    }
    if errors.is_empty() {
        info!("item catalog ok ({} templates)", templates.len());
    }
    errors.len()
}

/// Check the bundled catalog at startup.
pub fn check_bundled_catalog() -> usize {
    check_catalog(&CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_data::{ItemCategory, SWORD, TemplateId};

    #[test]
    fn bundled_catalog_has_no_problems() {
        assert_eq!(check_bundled_catalog(), 0);
    }

    #[test]
    fn flawed_catalog_problems_are_counted() {
        let dud = ItemTemplate {
            id: TemplateId::Sword,
            name: "Bent Sword",
            category: ItemCategory::Weapon,
            cost: 0,
            effect: 0,
            description: "Not much of a sword",
        };
        // same id as the Sword, and no effect; a zero cost is fine
        assert_eq!(check_catalog(&[&SWORD, &dud]), 2);
    }
}
