//! Map view state: the selection tracker plus the active route.
//!
//! Route fetches complete asynchronously from the view's perspective, so
//! each pair transition issues a numbered [`RouteRequest`] and a completion
//! is applied only while it is still the latest ("last request wins"). A
//! late response for an older pair is discarded.

use tracing::debug;

use crate::models::Coordinates;
use crate::polyline::Polyline;
use crate::selection::Selection;
use crate::traits::{Id, Locatable, RouteProvider};

/// Ticket for an in-flight route fetch between a selected pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    seq: u64,
    pub from: Coordinates,
    pub to: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The entity has no resolved map position; selection is left untouched.
    UnresolvedCoordinates,
}

/// Selection and route state owned by the map view.
#[derive(Debug, Clone)]
pub struct MapState<I: Id> {
    selection: Selection<I>,
    positions: Vec<(I, Coordinates)>,
    route: Polyline,
    latest_seq: u64,
}

impl<I: Id> Default for MapState<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Id> MapState<I> {
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
            positions: Vec::with_capacity(2),
            route: Polyline::empty(),
            latest_seq: 0,
        }
    }

    /// Applies a selection event.
    ///
    /// Entities without resolved coordinates are rejected before any state
    /// changes. When the event forms a pair, a [`RouteRequest`] is returned
    /// for the caller to resolve; any other transition clears the route.
    pub fn select<E>(&mut self, entity: &E) -> Result<Option<RouteRequest>, SelectError>
    where
        E: Locatable<Id = I>,
    {
        let coordinates = entity
            .coordinates()
            .ok_or(SelectError::UnresolvedCoordinates)?;

        self.selection.toggle(entity.id().clone());

        let selection = &self.selection;
        self.positions.retain(|(id, _)| selection.contains(id));
        if self.selection.contains(entity.id()) {
            self.positions.push((entity.id().clone(), coordinates));
        }

        match self.positions.as_slice() {
            [(_, from), (_, to)] => {
                self.latest_seq += 1;
                debug!(seq = self.latest_seq, "selection pair formed");
                Ok(Some(RouteRequest {
                    seq: self.latest_seq,
                    from: *from,
                    to: *to,
                }))
            }
            _ => {
                self.route = Polyline::empty();
                Ok(None)
            }
        }
    }

    /// Installs a fetched route if its request is still the latest.
    ///
    /// Returns whether the route was applied; a stale or no-longer-paired
    /// completion is dropped without touching current state.
    pub fn apply_route(&mut self, request: &RouteRequest, route: Polyline) -> bool {
        if request.seq != self.latest_seq || self.selection.pair().is_none() {
            debug!(seq = request.seq, latest = self.latest_seq, "dropping stale route");
            return false;
        }
        self.route = route;
        true
    }

    /// Resolves a request synchronously against a provider and applies it.
    pub fn resolve_with<P>(&mut self, request: &RouteRequest, provider: &P) -> bool
    where
        P: RouteProvider,
    {
        let route = provider.route_between(request.from, request.to);
        self.apply_route(request, route)
    }

    /// Explicit center/reset action: clears selection and route.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.positions.clear();
        self.route = Polyline::empty();
    }

    pub fn selection(&self) -> &Selection<I> {
        &self.selection
    }

    /// The current route, empty when there is nothing to draw.
    pub fn route(&self) -> &Polyline {
        &self.route
    }
}
