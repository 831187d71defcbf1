use crate::error::TopologyError;

use super::arc_ref::ArcRef;

/// Flat map from [`ArcRef`] to a small integer payload.
///
/// Slots are addressed with [`ArcRef::slot`], so both directions of every arc
/// have their own entry. Touched slots are remembered, which makes
/// [`IdLookupIndex::clear`] proportional to the number of entries set since
/// the last clear rather than to the arc count. One instance is meant to be
/// reused across many features by a single worker.
#[derive(Debug, Clone, Default)]
pub struct IdLookupIndex {
    slots: Vec<Option<usize>>,
    touched: Vec<usize>,
    live: usize,
}

impl IdLookupIndex {
    /// Creates an index sized for `arc_count` arcs in both directions.
    #[must_use]
    pub fn new(arc_count: usize) -> Self {
        Self {
            slots: vec![None; arc_count * 2],
            touched: Vec::new(),
            live: 0,
        }
    }

    /// Stores `value` for `arc`, overwriting any previous entry.
    pub fn set_id(&mut self, arc: ArcRef, value: usize) {
        let slot = arc.slot();
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        if self.slots[slot].replace(value).is_none() {
            self.touched.push(slot);
            self.live += 1;
        }
    }

    /// Returns the payload stored for `arc`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::MissingIndexEntry`] if `arc` has no entry.
    pub fn get_id(&self, arc: ArcRef) -> Result<usize, TopologyError> {
        self.slots
            .get(arc.slot())
            .copied()
            .flatten()
            .ok_or(TopologyError::MissingIndexEntry(arc))
    }

    /// Returns `true` if `arc` has an entry.
    #[must_use]
    pub fn has_id(&self, arc: ArcRef) -> bool {
        matches!(self.slots.get(arc.slot()), Some(Some(_)))
    }

    /// Removes the entry for `arc`, returning its payload if there was one.
    pub fn remove(&mut self, arc: ArcRef) -> Option<usize> {
        let removed = self.slots.get_mut(arc.slot()).and_then(Option::take);
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no entry is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Resets every entry set since the last clear. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.touched.drain(..) {
            self.slots[slot] = None;
        }
        self.live = 0;
    }
}
