//! Domain library for the Občine municipality catalogue.
//!
//! This crate provides everything the viewer needs that is not
//! presentation:
//! - The municipality record model parsed from the scraped dataset
//! - Slovenian-alphabet collation used to fix the display order at load time
//! - The conjunctive search/province filter pipeline
//! - A channel-based debounce primitive for rapidly-changing input
//! - The dataset loading state machine and fetch path

pub mod collate;
pub mod debounce;
pub mod filter;
pub mod loader;
pub mod record;
pub mod regions;

pub use debounce::debounce_channel;
pub use filter::filter_municipalities;
pub use loader::{fetch_dataset, parse_dataset, CatalogError, DatasetState};
pub use record::Municipality;
pub use regions::{RegionSelection, REGIONS};
