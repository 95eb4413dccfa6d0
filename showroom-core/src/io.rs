use crate::models::CatalogData;
use crate::schema_validation::{catalog_schema, validate_against_schema};
use crate::validation::validate_catalog;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON file
/// The raw JSON is checked against the catalog schema first, then
/// deserialized, then domain-validated (dangling references,
/// duplicate slugs)
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogData, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    validate_against_schema(&catalog_schema(), &raw)
        .map_err(|errors| format!("Schema validation failed:\n{}", errors.join("\n")))?;

    let data: CatalogData = serde_json::from_value(raw)?;

    validate_catalog(&data)
        .map_err(|errors| format!("Catalog validation failed:\n{}", errors.join("\n")))?;

    Ok(data)
}
