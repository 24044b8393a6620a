//! Two-entity route selection tracker.

use crate::traits::Id;

/// Ordered set of at most two selected entity ids.
///
/// Selecting an already-selected id removes it; selecting a third id evicts
/// the oldest of the current pair, so the previously-second entity becomes
/// first and the new one second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<I: Id> {
    chosen: Vec<I>,
}

impl<I: Id> Default for Selection<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Id> Selection<I> {
    pub fn new() -> Self {
        Self { chosen: Vec::with_capacity(2) }
    }

    /// Toggle membership of `id`, evicting the oldest entry when full.
    pub fn toggle(&mut self, id: I) {
        if let Some(position) = self.chosen.iter().position(|chosen| *chosen == id) {
            self.chosen.remove(position);
            return;
        }
        if self.chosen.len() == 2 {
            self.chosen.remove(0);
        }
        self.chosen.push(id);
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    pub fn contains(&self, id: &I) -> bool {
        self.chosen.iter().any(|chosen| chosen == id)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Selected ids in selection order, oldest first.
    pub fn ids(&self) -> &[I] {
        &self.chosen
    }

    /// The selected pair, exactly when two entities are selected.
    pub fn pair(&self) -> Option<(&I, &I)> {
        match self.chosen.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }
}
