//! # Geocode Ranking
//!
//! Orders geocoding results the way a person expects to read them:
//! - Administrative importance first (country before neighbourhood)
//! - Population or popularity within a layer
//! - Proximity to an optional focus point
//! - Relevance score for venues and everything unclassified
//!
//! Ranking is driven by a fixed, priority-ordered band table. Each pair of
//! results is resolved by the first band either of them belongs to.
//!
//! ## Example Usage
//!
//! ```rust
//! use geocode_ranking::{PlaceResult, RequestContext, ResultSorter};
//!
//! let sorter = ResultSorter::default();
//! let ctx = RequestContext::with_focus(40.74, -73.99);
//!
//! let results = vec![
//!     PlaceResult::new("neighbourhood").with_popularity(2_000).with_center(40.75, -73.98),
//!     PlaceResult::new("region"),
//!     PlaceResult::new("locality").with_population(8_000_000),
//! ];
//!
//! let sorted = sorter.sorted(results, &ctx);
//! assert_eq!(sorted[0].layer.as_str(), "locality");
//! assert_eq!(sorted[1].layer.as_str(), "region");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod geo;
pub mod ranking;
pub mod sorter;

// Re-export primary types
pub use config::SortOptions;
pub use crate::core::{CenterPoint, FocusPoint, LatLon, Layer, PlaceResult, RequestContext};
pub use error::{RankingError, Result};
pub use geo::{GeoDistance, Haversine};
pub use ranking::{build_comparator, ResultComparator, TiePolicy};
pub use sorter::ResultSorter;

// Python bindings
#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
pub use python::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
