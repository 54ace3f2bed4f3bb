//! In-memory university catalog: CSV ingestion, normalization, and filtering.
//!
//! Load once with [`load_catalog`], then call [`filter`] (and friends) as
//! often as the filter specification changes.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod university;

pub use catalog::{load_catalog, Catalog, CatalogStats};
pub use config::{Settings, SourceSettings};
pub use error::{CatalogError, SpecError};
pub use filter::{
    active_dimension_count, distinct_states, filter, filter_bounds, DeadlineWindow, FilterSpec,
    Metric,
};
pub use university::{derive_id, University};
