//! Built-in catalog embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::catalog::schema::Catalog;
use crate::error::{GpupickError, Result};

/// Embedded data directory.
static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Load the built-in GPU diagnostics catalog.
pub fn load_catalog() -> Result<Catalog> {
    let file = DATA_DIR
        .get_file("catalog.json")
        .ok_or_else(|| GpupickError::CatalogNotFound {
            path: "data/catalog.json".into(),
        })?;

    let content = file
        .contents_utf8()
        .ok_or_else(|| GpupickError::CatalogParseError {
            path: "data/catalog.json".into(),
            message: "Invalid UTF-8".to_string(),
        })?;

    serde_json::from_str(content).map_err(|e| GpupickError::CatalogParseError {
        path: "data/catalog.json".into(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = load_catalog().unwrap();
        assert_eq!(catalog.categories.len(), 6);
        assert!(catalog.category("Power and Thermal").is_some());
    }

    #[test]
    fn builtin_catalog_has_five_checks_per_category() {
        let catalog = load_catalog().unwrap();
        for category in &catalog.categories {
            assert_eq!(category.checks.len(), 5, "category {}", category.name);
        }
    }
}
