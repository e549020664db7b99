// Public modules
pub mod display;
pub mod error;
pub mod facet_filter;
pub mod facets;
pub mod filtering;
pub mod io;
pub mod list_view;
pub mod models;
pub mod pagination;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use display::{age_on, conclusion_message, institution_image, print_tags, slugify};
pub use error::{FolioError, Result};
pub use facet_filter::FacetFilter;
pub use facets::FacetIndex;
pub use filtering::{apply_filters, has_filters, matches_filters};
pub use io::{load_portfolio, parse_portfolio, save_portfolio};
pub use list_view::{ClearedFilters, FacetToggle, FacetedListView};
pub use models::{Book, Course, Faceted, ItemKind, PortfolioData, Profile};
pub use pagination::{Pagination, DEFAULT_ITEMS_PER_PAGE};
pub use schema::portfolio_schema;
pub use schema_validation::validate_against_schema;
pub use sorting::{normalize_for_sorting, sort_items, strip_leading_articles, SortBy, SortKey, SortOrder};
pub use validation::{validate_items, validate_portfolio};
