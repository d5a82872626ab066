//! Active (AEL) and sorted (SEL) edge list threading.
//!
//! Both lists are intrusive doubly linked lists running through the
//! `*_in_ael` / `*_in_sel` links of the edges themselves, with the head kept
//! on the [`EdgeStore`]. Every splice is O(1).

use super::{EdgeId, EdgeStore};
use crate::error::{Result, TopologyError};

/// The two sweep orderings an edge can be threaded through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum List {
    Active,
    Sorted,
}

impl List {
    fn name(self) -> &'static str {
        match self {
            Self::Active => "active edge list",
            Self::Sorted => "sorted edge list",
        }
    }
}

impl EdgeStore {
    /// First edge of the active edge list.
    #[must_use]
    pub fn ael_head(&self) -> Option<EdgeId> {
        self.ael_head
    }

    /// First edge of the sorted edge list.
    #[must_use]
    pub fn sel_head(&self) -> Option<EdgeId> {
        self.sel_head
    }

    /// Iterates the active edge list from its head.
    pub fn ael_iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::successors(self.ael_head, move |&id| {
            self.edges.get(id).and_then(|e| e.next_in_ael)
        })
    }

    /// Iterates the sorted edge list from its head.
    pub fn sel_iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::successors(self.sel_head, move |&id| {
            self.edges.get(id).and_then(|e| e.next_in_sel)
        })
    }

    /// Returns `true` if the edge is currently threaded into the AEL.
    #[must_use]
    pub fn in_ael(&self, id: EdgeId) -> bool {
        self.is_linked(id, List::Active)
    }

    /// Returns `true` if the edge is currently threaded into the SEL.
    #[must_use]
    pub fn in_sel(&self, id: EdgeId) -> bool {
        self.is_linked(id, List::Sorted)
    }

    /// Inserts `id` into the AEL directly after `after`, or at the head when
    /// `after` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if either edge is unknown, if `id` is already in the
    /// AEL, or if `after` is not.
    pub fn insert_into_ael(&mut self, id: EdgeId, after: Option<EdgeId>) -> Result<()> {
        self.insert(List::Active, id, after)
    }

    /// Inserts `id` into the SEL directly after `after`, or at the head when
    /// `after` is `None`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`EdgeStore::insert_into_ael`].
    pub fn insert_into_sel(&mut self, id: EdgeId, after: Option<EdgeId>) -> Result<()> {
        self.insert(List::Sorted, id, after)
    }

    /// Unlinks `id` from the AEL. The edge stays in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is unknown or not in the AEL.
    pub fn delete_from_ael(&mut self, id: EdgeId) -> Result<()> {
        self.unlink(List::Active, id)
    }

    /// Unlinks `id` from the SEL. The edge stays in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is unknown or not in the SEL.
    pub fn delete_from_sel(&mut self, id: EdgeId) -> Result<()> {
        self.unlink(List::Sorted, id)
    }

    /// Exchanges the AEL positions of two edges, adjacent or not.
    ///
    /// # Errors
    ///
    /// Returns an error if either edge is unknown or not in the AEL.
    pub fn swap_positions_in_ael(&mut self, a: EdgeId, b: EdgeId) -> Result<()> {
        self.swap(List::Active, a, b)
    }

    /// Exchanges the SEL positions of two edges, adjacent or not.
    ///
    /// # Errors
    ///
    /// Returns an error if either edge is unknown or not in the SEL.
    pub fn swap_positions_in_sel(&mut self, a: EdgeId, b: EdgeId) -> Result<()> {
        self.swap(List::Sorted, a, b)
    }

    /// Replaces the SEL with a copy of the current AEL ordering.
    pub fn copy_ael_to_sel(&mut self) {
        let stale: Vec<EdgeId> = self.sel_iter().collect();
        for id in stale {
            self.set_links(id, List::Sorted, None, None);
        }
        let active: Vec<EdgeId> = self.ael_iter().collect();
        for &id in &active {
            let (prev, next) = self.links(id, List::Active);
            self.set_links(id, List::Sorted, prev, next);
        }
        self.sel_head = self.ael_head;
        tracing::trace!(edges = active.len(), "copied active edges to sorted list");
    }

    fn head(&self, list: List) -> Option<EdgeId> {
        match list {
            List::Active => self.ael_head,
            List::Sorted => self.sel_head,
        }
    }

    fn set_head(&mut self, list: List, head: Option<EdgeId>) {
        match list {
            List::Active => self.ael_head = head,
            List::Sorted => self.sel_head = head,
        }
    }

    /// `(prev, next)` links of `id` in `list`; `(None, None)` for unknown edges.
    fn links(&self, id: EdgeId, list: List) -> (Option<EdgeId>, Option<EdgeId>) {
        self.edges.get(id).map_or((None, None), |e| match list {
            List::Active => (e.prev_in_ael, e.next_in_ael),
            List::Sorted => (e.prev_in_sel, e.next_in_sel),
        })
    }

    fn set_links(&mut self, id: EdgeId, list: List, prev: Option<EdgeId>, next: Option<EdgeId>) {
        self.set_prev(id, list, prev);
        self.set_next(id, list, next);
    }

    fn set_prev(&mut self, id: EdgeId, list: List, prev: Option<EdgeId>) {
        if let Some(e) = self.edges.get_mut(id) {
            match list {
                List::Active => e.prev_in_ael = prev,
                List::Sorted => e.prev_in_sel = prev,
            }
        }
    }

    fn set_next(&mut self, id: EdgeId, list: List, next: Option<EdgeId>) {
        if let Some(e) = self.edges.get_mut(id) {
            match list {
                List::Active => e.next_in_ael = next,
                List::Sorted => e.next_in_sel = next,
            }
        }
    }

    fn is_linked(&self, id: EdgeId, list: List) -> bool {
        self.contains(id) && (self.links(id, list).0.is_some() || self.head(list) == Some(id))
    }

    fn require_linked(&self, id: EdgeId, list: List) -> Result<()> {
        if !self.contains(id) {
            return Err(TopologyError::EdgeNotFound.into());
        }
        if !self.is_linked(id, list) {
            return Err(TopologyError::NotInList(list.name()).into());
        }
        Ok(())
    }

    fn insert(&mut self, list: List, id: EdgeId, after: Option<EdgeId>) -> Result<()> {
        if !self.contains(id) {
            return Err(TopologyError::EdgeNotFound.into());
        }
        if self.is_linked(id, list) {
            return Err(TopologyError::AlreadyInList(list.name()).into());
        }
        match after {
            None => {
                let old_head = self.head(list);
                self.set_links(id, list, None, old_head);
                if let Some(old) = old_head {
                    self.set_prev(old, list, Some(id));
                }
                self.set_head(list, Some(id));
            }
            Some(anchor) => {
                self.require_linked(anchor, list)?;
                let (_, next) = self.links(anchor, list);
                self.set_links(id, list, Some(anchor), next);
                if let Some(next) = next {
                    self.set_prev(next, list, Some(id));
                }
                self.set_next(anchor, list, Some(id));
            }
        }
        Ok(())
    }

    fn unlink(&mut self, list: List, id: EdgeId) -> Result<()> {
        self.require_linked(id, list)?;
        let (prev, next) = self.links(id, list);
        match prev {
            Some(prev) => self.set_next(prev, list, next),
            None => self.set_head(list, next),
        }
        if let Some(next) = next {
            self.set_prev(next, list, prev);
        }
        self.set_links(id, list, None, None);
        Ok(())
    }

    fn swap(&mut self, list: List, a: EdgeId, b: EdgeId) -> Result<()> {
        self.require_linked(a, list)?;
        self.require_linked(b, list)?;
        if a == b {
            return Ok(());
        }
        let (a_prev, a_next) = self.links(a, list);
        let (b_prev, b_next) = self.links(b, list);

        if a_next == Some(b) {
            if let Some(next) = b_next {
                self.set_prev(next, list, Some(a));
            }
            if let Some(prev) = a_prev {
                self.set_next(prev, list, Some(b));
            }
            self.set_links(b, list, a_prev, Some(a));
            self.set_links(a, list, Some(b), b_next);
        } else if b_next == Some(a) {
            if let Some(next) = a_next {
                self.set_prev(next, list, Some(b));
            }
            if let Some(prev) = b_prev {
                self.set_next(prev, list, Some(a));
            }
            self.set_links(a, list, b_prev, Some(b));
            self.set_links(b, list, Some(a), a_next);
        } else {
            self.set_links(a, list, b_prev, b_next);
            if let Some(next) = b_next {
                self.set_prev(next, list, Some(a));
            }
            if let Some(prev) = b_prev {
                self.set_next(prev, list, Some(a));
            }
            self.set_links(b, list, a_prev, a_next);
            if let Some(next) = a_next {
                self.set_prev(next, list, Some(b));
            }
            if let Some(prev) = a_prev {
                self.set_next(prev, list, Some(b));
            }
        }

        if self.links(a, list).0.is_none() {
            self.set_head(list, Some(a));
        } else if self.links(b, list).0.is_none() {
            self.set_head(list, Some(b));
        }
        Ok(())
    }
}
