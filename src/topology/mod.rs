pub mod active;
pub mod edge;
pub mod point_list;

pub use edge::{get_current_x, is_horizontal, Edge, EdgeId, EdgeSide, PolygonType};
pub use point_list::{PointId, PointListRef, PointNode, PointStore};

use crate::error::{Result, TopologyError};
use crate::math::Point;
use slotmap::SlotMap;

/// Arena that owns every edge of a sweep.
///
/// Edges reference each other via typed IDs (generational indices), so a
/// removed edge can never be reached through a stale link. Besides the ring
/// links the store threads edges through the active and sorted edge lists
/// (see [`active`]).
#[derive(Debug, Default)]
pub struct EdgeStore {
    edges: SlotMap<EdgeId, Edge>,
    ael_head: Option<EdgeId>,
    sel_head: Option<EdgeId>,
}

impl EdgeStore {
    /// Creates a new, empty edge store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        self.edges.insert(edge)
    }

    /// Builds one edge per consecutive point pair of a closed boundary and
    /// threads them into a circular `next`/`prev` ring in input order.
    ///
    /// The closing pair (last point to first) is included. Boundaries with
    /// fewer than two points produce no edges. Returned IDs are in input order.
    pub fn add_boundary(&mut self, points: &[Point], poly_type: PolygonType) -> Vec<EdgeId> {
        if points.len() < 2 {
            return Vec::new();
        }
        let ids: Vec<EdgeId> = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&a, &b)| self.edges.insert(Edge::new(a, b, poly_type)))
            .collect();
        let n = ids.len();
        for (i, &id) in ids.iter().enumerate() {
            let edge = &mut self.edges[id];
            edge.next = Some(ids[(i + 1) % n]);
            edge.prev = Some(ids[(i + n - 1) % n]);
        }
        tracing::debug!(edges = n, ?poly_type, "threaded boundary into edge ring");
        ids
    }

    /// Returns the read-only view of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EdgeNotFound.into())
    }

    /// Returns the driver's write handle for an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the store.
    pub fn driver(&mut self, id: EdgeId) -> Result<EdgeHandle<'_>> {
        self.edges
            .get_mut(id)
            .map(|edge| EdgeHandle { edge })
            .ok_or_else(|| TopologyError::EdgeNotFound.into())
    }

    /// Returns `true` if `id` refers to a live edge.
    #[must_use]
    pub fn contains(&self, id: EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    /// Iterates all live edges in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter()
    }

    /// Unlinks an edge from its ring and from the AEL/SEL, frees its slot and
    /// returns it.
    ///
    /// Ring neighbours are spliced together; an edge whose ring neighbours are
    /// itself leaves nothing behind. A local-minima chain that passed through
    /// the edge skips over it afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the store.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self.edge(id)?;
        let in_ael = edge.prev_in_ael.is_some() || self.ael_head == Some(id);
        let in_sel = edge.prev_in_sel.is_some() || self.sel_head == Some(id);
        if in_ael {
            self.delete_from_ael(id)?;
        }
        if in_sel {
            self.delete_from_sel(id)?;
        }

        let edge = self
            .edges
            .remove(id)
            .ok_or(TopologyError::EdgeNotFound)?;
        match (edge.prev, edge.next) {
            (Some(prev), Some(next)) if prev != id => {
                self.edges[prev].next = Some(next);
                self.edges[next].prev = Some(prev);
            }
            (Some(prev), None) if prev != id => self.edges[prev].next = None,
            (None, Some(next)) if next != id => self.edges[next].prev = None,
            _ => {}
        }
        for other in self.edges.values_mut() {
            if other.next_in_lml == Some(id) {
                other.next_in_lml = edge.next_in_lml;
            }
        }
        tracing::trace!(?id, "removed edge");
        Ok(edge)
    }

    /// Iterates a local-minima chain starting at `start` via `next_in_lml`.
    ///
    /// Stops at the first link that does not name a live edge.
    pub fn lml_iter(&self, start: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::successors(Some(start).filter(|&id| self.contains(id)), move |&id| {
            self.edges
                .get(id)
                .and_then(|e| e.next_in_lml)
                .filter(|&next| self.contains(next))
        })
    }

    /// Iterates an edge ring once, starting at `start` and following `next`.
    pub fn ring_iter(&self, start: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::successors(Some(start).filter(|&id| self.contains(id)), move |&id| {
            self.edges
                .get(id)
                .and_then(|e| e.next)
                .filter(|&next| next != start)
        })
    }
}

/// Write access to the fields the sweep driver owns.
///
/// Obtained from [`EdgeStore::driver`]. Geometry (`bot`, `top`, `dx`,
/// `poly_type`) and list links are not reachable from here; list membership
/// changes go through the store's AEL/SEL operations.
#[derive(Debug)]
pub struct EdgeHandle<'a> {
    edge: &'a mut Edge,
}

impl EdgeHandle<'_> {
    /// Read-only view of the edge behind this handle.
    #[must_use]
    pub fn view(&self) -> &Edge {
        &*self.edge
    }

    /// Moves `curr` to scan-line `y`, recomputing x from the edge's slope.
    pub fn advance_to(&mut self, y: crate::math::Coord) -> &mut Self {
        let x = get_current_x(&*self.edge, y);
        self.edge.curr = Point::new(x, y);
        self
    }

    /// Overwrites the edge's scan-line position.
    pub fn set_curr(&mut self, curr: Point) -> &mut Self {
        self.edge.curr = curr;
        self
    }

    /// Assigns (or clears) the output ring the edge contributes to.
    pub fn set_index(&mut self, index: Option<usize>) -> &mut Self {
        self.edge.index = index;
        self
    }

    /// Sets the winding direction (+1/-1) the edge contributes.
    pub fn set_winding_delta(&mut self, delta: i8) -> &mut Self {
        self.edge.winding_delta = delta;
        self
    }

    /// Sets the winding count of the edge's own polygon type.
    pub fn set_winding_count(&mut self, count: i32) -> &mut Self {
        self.edge.winding_count = count;
        self
    }

    /// Sets the winding count of the opposite polygon type.
    pub fn set_winding_count2(&mut self, count: i32) -> &mut Self {
        self.edge.winding_count2 = count;
        self
    }

    /// Sets which side of its output ring the edge is building.
    pub fn set_side(&mut self, side: EdgeSide) -> &mut Self {
        self.edge.side = side;
        self
    }

    /// Links this edge to the next edge of its local-minima chain.
    pub fn set_next_in_lml(&mut self, next: Option<EdgeId>) -> &mut Self {
        self.edge.next_in_lml = next;
        self
    }
}
