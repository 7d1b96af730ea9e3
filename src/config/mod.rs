//! Reference catalog loading and access.
//!
//! This module loads the reference catalog (airlines, airports, fare brands
//! and status tiers) from YAML files, validates it, and holds it as
//! process-wide read-only state.
//!
//! # Example
//!
//! ```no_run
//! use ac_calc::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/catalog").unwrap();
//! println!("Loaded catalog: {}", catalog.metadata().name);
//! ```

mod catalog;
mod global;
mod loader;
mod types;

pub use catalog::Catalog;
pub use global::{install, installed, load_and_install};
pub use loader::CatalogLoader;
pub use types::{
    AirlineSource, AirportSource, CatalogMetadata, EarningRateSource, RecordedDistanceSource,
};
