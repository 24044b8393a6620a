//! binfleet core
//!
//! Domain models and map-view logic for a waste-collection fleet dashboard.

pub mod traits;
pub mod models;
pub mod selection;
pub mod polyline;
pub mod ors;
pub mod map;
pub mod dashboard;
