//! Catalog snapshot search: one bulk read of the whole catalog, then
//! in-memory substring matching across products and facets.

pub mod engine;
pub mod filter;
pub mod session;
pub mod source;

pub use engine::{SearchOutcome, normalize_query, search};
pub use filter::{FilterPanel, FilterSelection, PriceBucket, apply_selection};
pub use session::SearchSession;
pub use source::{CatalogSnapshot, CatalogSource, DbCatalog, FixedCatalog};
