use std::collections::HashSet;
use std::fmt;

use crate::ItemTemplate;

/// Problems found in a set of item templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateName { name: String },
    DuplicateId { name: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateName { name } => {
                write!(f, "duplicate item name '{name}'")
            },
            ValidationError::DuplicateId { name } => {
                write!(f, "duplicate template id on '{name}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check the invariants every catalog must hold: unique names and ids, and a
/// positive effect on every template.
///
/// ```
/// use quest_data::{CATALOG, SWORD, validate_catalog};
///
/// assert!(validate_catalog(&CATALOG).is_empty());
/// assert_eq!(validate_catalog(&[&SWORD, &SWORD]).len(), 2);
/// ```
pub fn validate_catalog(templates: &[&ItemTemplate]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut ids = HashSet::new();

    for template in templates {
        if !names.insert(template.name) {
            errors.push(ValidationError::DuplicateName {
                name: template.name.to_string(),
            });
        }
        if !ids.insert(template.id) {
            errors.push(ValidationError::DuplicateId {
                name: template.name.to_string(),
            });
        }
        if template.effect == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("{} has no effect", template.name),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CATALOG, HEALTH_POTION};

    #[test]
    fn shipped_catalog_is_valid() {
        assert!(validate_catalog(&CATALOG).is_empty());
    }

    #[test]
    fn zero_effect_is_rejected() {
        let dud = ItemTemplate {
            effect: 0,
            ..HEALTH_POTION
        };
        let errors = validate_catalog(&[&dud]);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidValue {
                context: "Health Potion has no effect".into()
            }]
        );
    }
}
