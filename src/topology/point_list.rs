use crate::error::{Result, TopologyError};
use crate::math::cycle::PointCycle;
use crate::math::Point;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for a node of a circular point list.
    pub struct PointId;
}

/// One vertex of a circular, doubly linked point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointNode {
    pub pt: Point,
    pub next: PointId,
    pub prev: PointId,
}

/// Arena owning the circular point lists that output rings are built from.
#[derive(Debug, Default)]
pub struct PointStore {
    nodes: SlotMap<PointId, PointNode>,
}

impl PointStore {
    /// Creates a new, empty point store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Links `points` into a new circular list and returns its first node.
    ///
    /// Returns `None` for an empty slice.
    pub fn add_ring(&mut self, points: &[Point]) -> Option<PointId> {
        let (&first, rest) = points.split_first()?;
        let start = self.nodes.insert_with_key(|id| PointNode {
            pt: first,
            next: id,
            prev: id,
        });
        let mut last = start;
        for &pt in rest {
            last = self.link_after(last, pt);
        }
        tracing::debug!(points = points.len(), "created point ring");
        Some(start)
    }

    /// Inserts `pt` directly after `id` and returns the new node.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn insert_after(&mut self, id: PointId, pt: Point) -> Result<PointId> {
        self.node(id)?;
        Ok(self.link_after(id, pt))
    }

    /// Inserts `pt` directly before `id` and returns the new node.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn insert_before(&mut self, id: PointId, pt: Point) -> Result<PointId> {
        let prev = self.node(id)?.prev;
        Ok(self.link_after(prev, pt))
    }

    /// Unlinks a node, frees its slot and returns its point.
    ///
    /// Returns the point together with the node that followed it, or `None`
    /// when the removed node was the last one of its ring.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn remove(&mut self, id: PointId) -> Result<(Point, Option<PointId>)> {
        let node = self.nodes.remove(id).ok_or(TopologyError::PointNotFound)?;
        tracing::trace!(?id, "removed ring point");
        if node.next == id {
            return Ok((node.pt, None));
        }
        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        Ok((node.pt, Some(node.next)))
    }

    /// Removes every node of the ring containing `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not in the store.
    pub fn remove_ring(&mut self, start: PointId) -> Result<usize> {
        let ids: Vec<PointId> = self.ring(start)?.ids().collect();
        for &id in &ids {
            self.nodes.remove(id);
        }
        Ok(ids.len())
    }

    /// Returns the node behind `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn node(&self, id: PointId) -> Result<&PointNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| TopologyError::PointNotFound.into())
    }

    /// Returns the point stored at `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn point(&self, id: PointId) -> Result<Point> {
        self.node(id).map(|n| n.pt)
    }

    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn next(&self, id: PointId) -> Result<PointId> {
        self.node(id).map(|n| n.next)
    }

    /// # Errors
    ///
    /// Returns an error if `id` is not in the store.
    pub fn prev(&self, id: PointId) -> Result<PointId> {
        self.node(id).map(|n| n.prev)
    }

    /// Borrows the ring containing `start`, walked from `start` onwards.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not in the store.
    pub fn ring(&self, start: PointId) -> Result<PointListRef<'_>> {
        self.node(start)?;
        Ok(PointListRef { store: self, start })
    }

    /// Copies the ring containing `start` into a vector, beginning at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not in the store.
    pub fn to_vec(&self, start: PointId) -> Result<Vec<Point>> {
        Ok(self.ring(start)?.points().collect())
    }

    /// Reverses the traversal direction of the ring containing `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not in the store.
    pub fn reverse(&mut self, start: PointId) -> Result<()> {
        let ids: Vec<PointId> = self.ring(start)?.ids().collect();
        for id in ids {
            let node = &mut self.nodes[id];
            std::mem::swap(&mut node.next, &mut node.prev);
        }
        Ok(())
    }

    fn link_after(&mut self, id: PointId, pt: Point) -> PointId {
        let next = self.nodes[id].next;
        let new = self.nodes.insert(PointNode {
            pt,
            next,
            prev: id,
        });
        self.nodes[id].next = new;
        self.nodes[next].prev = new;
        new
    }
}

/// Borrowed view of one circular point list, starting at a chosen node.
#[derive(Debug, Clone, Copy)]
pub struct PointListRef<'a> {
    store: &'a PointStore,
    start: PointId,
}

impl<'a> PointListRef<'a> {
    /// First node of the walk.
    #[must_use]
    pub fn start(&self) -> PointId {
        self.start
    }

    /// Node IDs of one lap, following `next` from the start.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + 'a {
        let store = self.store;
        let start = self.start;
        std::iter::successors(Some(start), move |&id| {
            store
                .nodes
                .get(id)
                .map(|n| n.next)
                .filter(|&next| next != start)
        })
    }
}

impl PointCycle for PointListRef<'_> {
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let store = self.store;
        self.ids().filter_map(move |id| store.nodes.get(id).map(|n| n.pt))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
        ]
    }

    #[test]
    fn ring_round_trips_points() {
        let mut store = PointStore::new();
        let start = store.add_ring(&square()).unwrap();
        assert_eq!(store.to_vec(start).unwrap(), square());
        let last = store.prev(start).unwrap();
        assert_eq!(store.point(last).unwrap(), Point::new(0, 4));
        assert_eq!(store.next(last).unwrap(), start);
    }

    #[test]
    fn empty_ring_is_none() {
        let mut store = PointStore::new();
        assert!(store.add_ring(&[]).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn single_point_links_to_itself() {
        let mut store = PointStore::new();
        let id = store.add_ring(&[Point::new(7, 7)]).unwrap();
        let node = store.node(id).unwrap();
        assert_eq!((node.next, node.prev), (id, id));
        assert_eq!(store.remove(id).unwrap(), (Point::new(7, 7), None));
        assert!(store.is_empty());
    }

    #[test]
    fn insert_and_remove_keep_links() {
        let mut store = PointStore::new();
        let start = store.add_ring(&square()).unwrap();
        let mid = store.insert_after(start, Point::new(2, 0)).unwrap();
        store.insert_before(start, Point::new(0, 2)).unwrap();
        assert_eq!(
            store.to_vec(start).unwrap(),
            vec![
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(4, 0),
                Point::new(4, 4),
                Point::new(0, 4),
                Point::new(0, 2),
            ]
        );
        let (pt, next) = store.remove(mid).unwrap();
        assert_eq!(pt, Point::new(2, 0));
        assert_eq!(store.point(next.unwrap()).unwrap(), Point::new(4, 0));
        assert!(store.point(mid).is_err());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn reverse_flips_walk() {
        let mut store = PointStore::new();
        let start = store.add_ring(&square()).unwrap();
        store.reverse(start).unwrap();
        assert_eq!(
            store.to_vec(start).unwrap(),
            vec![
                Point::new(0, 0),
                Point::new(0, 4),
                Point::new(4, 4),
                Point::new(4, 0),
            ]
        );
    }

    #[test]
    fn remove_ring_frees_all_nodes() {
        let mut store = PointStore::new();
        let a = store.add_ring(&square()).unwrap();
        let b = store.add_ring(&[Point::new(1, 1), Point::new(2, 2)]).unwrap();
        assert_eq!(store.remove_ring(a).unwrap(), 4);
        assert_eq!(store.len(), 2);
        assert!(store.ring(a).is_err());
        assert_eq!(store.ring(b).unwrap().ids().count(), 2);
    }
}
