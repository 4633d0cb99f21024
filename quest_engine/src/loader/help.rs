//! module `loader::help`

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

const BUNDLED_HELP: &str = include_str!("../../data/help.toml");

/// One titled group of help lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpSection {
    pub title: String,
    pub lines: Vec<String>,
}

/// Complete help data: an opening paragraph and the titled sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpData {
    pub basic_text: String,
    pub sections: Vec<HelpSection>,
}

impl HelpData {
    /// Insert a section before the one titled `before`, or at the end if there is none.
    pub fn insert_section_before(&mut self, before: &str, section: HelpSection) {
        let idx = self
            .sections
            .iter()
            .position(|s| s.title == before)
            .unwrap_or(self.sections.len());
        self.sections.insert(idx, section);
    }
}

/// Parse help data from TOML text.
/// # Errors
/// - on TOML parsing error
pub fn parse_help_data(toml_src: &str) -> Result<HelpData> {
    let mut data: HelpData = toml::from_str(toml_src).context("parsing help data")?;
    data.basic_text = data.basic_text.trim().to_string();
    info!("{} help sections loaded", data.sections.len());
    Ok(data)
}

/// Help data compiled into the binary.
/// # Errors
/// - if the bundled TOML is malformed
pub fn bundled_help() -> Result<HelpData> {
    parse_help_data(BUNDLED_HELP).context("while loading bundled help")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_help_parses() {
        let help = bundled_help().expect("bundled help should parse");
        assert!(help.basic_text.contains("number"));

        let titles: Vec<&str> = help.sections.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Movement"));
        assert!(titles.contains(&"Tips"));
        for section in &help.sections {
            assert!(!section.lines.is_empty(), "section '{}' has no lines", section.title);
        }
    }

    #[test]
    fn insert_section_before_named_title() {
        let mut help = bundled_help().unwrap();
        help.insert_section_before(
            "Other",
            HelpSection {
                title: "Shopping".into(),
                lines: vec!["buy things".into()],
            },
        );
        let pos = |t: &str| help.sections.iter().position(|s| s.title == t).unwrap();
        assert_eq!(pos("Shopping") + 1, pos("Other"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_help_data("sections = 3").is_err());
    }
}
