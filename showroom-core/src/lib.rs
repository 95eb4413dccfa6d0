// Public modules
pub mod counting;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod pagination;
pub mod query;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use counting::{count_facets, FacetCount, FacetCounts};
pub use filtering::{apply_filters, matches_filter};
pub use grouping::group_categories_by_nav;
pub use io::load_catalog;
pub use models::{CatalogData, CatalogItem, FacetGroup, FacetValue, FilterState};
pub use pagination::{paginate, PageSlice, PageWindow, DEFAULT_PAGE_SIZE};
pub use query::{parse_query, serialize_filters};
pub use schema_validation::{catalog_schema, validate_against_schema};
pub use sorting::{normalize_for_sorting, sort_products_by_name, strip_leading_articles};
pub use validation::validate_catalog;
