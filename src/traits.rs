//! Core domain traits for the fleet dashboard.
//!
//! These are intentionally minimal. Concrete frontends implement them for
//! their own data sources and routing backends.

use std::hash::Hash;

use crate::models::{Coordinates, Driver, Dustbin};
use crate::polyline::Polyline;

/// Unique identifier for dashboard entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Anything with a stable identifier and a map position.
pub trait Locatable {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Resolved map position, if the entity has one.
    ///
    /// Entities with unset or out-of-range coordinates return `None` and
    /// must not be offered for route selection.
    fn coordinates(&self) -> Option<Coordinates>;
}

/// Provides a driving route between two points.
///
/// Implementations return an empty polyline when no route can be produced
/// (network failure, no candidate routes). This is a recoverable condition:
/// the map degrades to markers without a path.
pub trait RouteProvider {
    fn route_between(&self, from: Coordinates, to: Coordinates) -> Polyline;
}

/// Supplies the full driver and dustbin record sets.
///
/// Backed by an external document store; fetch failures surface as empty
/// lists, never as errors.
pub trait EntitySource {
    fn drivers(&self) -> Vec<Driver>;
    fn dustbins(&self) -> Vec<Dustbin>;
}
