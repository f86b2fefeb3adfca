//! File-based item lists.
//!
//! Two formats, picked by extension:
//!
//! ```json
//! [{ "name": "Rust", "icon": "rust" }, { "name": "Tokio", "icon": "tokio" }]
//! ```
//!
//! ```toml
//! [[items]]
//! name = "Rust"
//! icon = "rust"
//! ```

use crate::model::{Item, ItemsError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlItems {
    #[serde(default)]
    items: Vec<Item>,
}

/// Read and parse an item file.
///
/// # Errors
///
/// - `ItemsError::FileNotFound` if `path` does not exist
/// - `ItemsError::Read` for I/O failures
/// - `ItemsError::Parse` for malformed contents
/// - `ItemsError::UnsupportedFormat` for extensions other than `.json`/`.toml`
pub fn load_items_file(path: &Path) -> Result<Vec<Item>, ItemsError> {
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
        _ => return Err(ItemsError::UnsupportedFormat(path.to_path_buf())),
    };

    if !path.exists() {
        return Err(ItemsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ItemsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_items(&contents, format).map_err(|reason| ItemsError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn parse_items(contents: &str, format: Format) -> Result<Vec<Item>, String> {
    match format {
        Format::Json => serde_json::from_str::<Vec<Item>>(contents).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str::<TomlItems>(contents)
            .map(|parsed| parsed.items)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write temp item file");
        path
    }

    #[test]
    fn loads_json_array() {
        let path = temp_file(
            "techdeck_items_test.json",
            r#"[{"name":"Rust","icon":"rust"},{"name":"Tokio","icon":"tokio"}]"#,
        );
        let items = load_items_file(&path).expect("valid json items");
        let _ = fs::remove_file(&path);

        assert_eq!(
            items,
            vec![Item::new("Rust", "rust"), Item::new("Tokio", "tokio")]
        );
    }

    #[test]
    fn loads_toml_item_tables() {
        let path = temp_file(
            "techdeck_items_test.toml",
            "[[items]]\nname = \"Rust\"\nicon = \"rust\"\n\n[[items]]\nname = \"Serde\"\nicon = \"serde\"\n",
        );
        let items = load_items_file(&path).expect("valid toml items");
        let _ = fs::remove_file(&path);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name(), "Serde");
    }

    #[test]
    fn empty_toml_is_empty_list() {
        let path = temp_file("techdeck_items_empty.toml", "");
        let items = load_items_file(&path).expect("empty toml is valid");
        let _ = fs::remove_file(&path);
        assert!(items.is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_items_file(Path::new("/nonexistent/techdeck/items.json"));
        assert!(matches!(result, Err(ItemsError::FileNotFound { .. })));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let path = temp_file("techdeck_items_bad.json", r#"{"name": "not an array"}"#);
        let result = load_items_file(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ItemsError::Parse { .. })));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = load_items_file(Path::new("items.yaml"));
        assert!(matches!(result, Err(ItemsError::UnsupportedFormat(_))));
    }
}
