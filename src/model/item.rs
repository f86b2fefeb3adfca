//! Displayable carousel items and the built-in technology catalogue.

use serde::Deserialize;

/// Label shown for items whose name is missing or blank.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

/// One displayable unit in the carousel: a name plus an icon reference.
///
/// Items are owned by the caller and never mutated by the carousel; the core
/// only slices them into pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Item {
    #[serde(default)]
    name: String,
    #[serde(default)]
    icon: String,
}

impl Item {
    /// Create an item from a name and an icon reference.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Raw name as supplied (may be empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Icon reference (asset key, file name, or glyph).
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Name to render, falling back to [`UNKNOWN_ITEM_NAME`] when blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNKNOWN_ITEM_NAME
        } else {
            &self.name
        }
    }
}

/// The default technology stack shown when no item file is configured.
pub fn default_technologies() -> Vec<Item> {
    [
        ("HTML5", "html"),
        ("CSS3", "css"),
        ("JavaScript", "javascript"),
        ("TypeScript", "typescript"),
        ("React.js", "reactjs"),
        ("Redux Toolkit", "redux"),
        ("Tailwind CSS", "tailwind"),
        ("Node.js", "nodejs"),
        ("MongoDB", "mongodb"),
        ("Three.js", "threejs"),
        ("Docker", "docker"),
        ("Git", "git"),
        ("Figma", "figma"),
    ]
    .into_iter()
    .map(|(name, icon)| Item::new(name, icon))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogue_has_thirteen_technologies() {
        let items = default_technologies();
        assert_eq!(items.len(), 13);
        assert_eq!(items[0].name(), "HTML5");
        assert_eq!(items[12].name(), "Figma");
    }

    #[test]
    fn display_name_falls_back_to_unknown_for_blank_names() {
        assert_eq!(Item::new("", "x").display_name(), "Unknown");
        assert_eq!(Item::new("   ", "x").display_name(), "Unknown");
        assert_eq!(Item::new("Rust", "x").display_name(), "Rust");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let item: Item = serde_json::from_str(r#"{"icon":"ferris"}"#).expect("valid item json");
        assert_eq!(item.name(), "");
        assert_eq!(item.icon(), "ferris");
        assert_eq!(item.display_name(), UNKNOWN_ITEM_NAME);
    }
}
