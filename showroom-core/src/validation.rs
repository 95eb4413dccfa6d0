use crate::models::{CatalogData, FacetValue};
use std::collections::HashSet;

/// Validate the loaded catalog
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_catalog(data: &CatalogData) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_facet_values("brand", &data.brands, &mut errors);
    validate_facet_values("category", &data.categories, &mut errors);

    let brand_slugs: HashSet<&str> = data.brands.iter().map(|v| v.slug.as_str()).collect();
    let category_slugs: HashSet<&str> = data.categories.iter().map(|v| v.slug.as_str()).collect();

    let mut product_ids = HashSet::new();
    for (idx, product) in data.products.iter().enumerate() {
        let product_ref = format!("Product #{} ('{}')", idx + 1, product.id);

        if product.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", product_ref));
        }

        if !product_ids.insert(&product.id) {
            errors.push(format!("{}: duplicate product id", product_ref));
        }

        if product.brand_slug.trim().is_empty() {
            errors.push(format!("{}: brand slug cannot be empty", product_ref));
        } else if !brand_slugs.contains(product.brand_slug.as_str()) {
            errors.push(format!(
                "{}: references unknown brand '{}'",
                product_ref, product.brand_slug
            ));
        }

        if product.category_slug.trim().is_empty() {
            errors.push(format!("{}: category slug cannot be empty", product_ref));
        } else if !category_slugs.contains(product.category_slug.as_str()) {
            errors.push(format!(
                "{}: references unknown category '{}'",
                product_ref, product.category_slug
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_facet_values(group_name: &str, values: &[FacetValue], errors: &mut Vec<String>) {
    if values.is_empty() {
        errors.push(format!("At least one {} must be defined", group_name));
    }

    let mut seen = HashSet::new();
    for value in values {
        if value.slug.trim().is_empty() {
            errors.push(format!("{} list contains an empty slug", group_name));
        }
        if value.label.trim().is_empty() {
            errors.push(format!(
                "{} '{}' must have a non-empty label",
                group_name, value.slug
            ));
        }
        if !seen.insert(&value.slug) {
            errors.push(format!("{} list has duplicate slug: '{}'", group_name, value.slug));
        }
    }
}
