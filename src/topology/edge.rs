use std::fmt;

use crate::math::{Coord, Point, HORIZONTAL};

slotmap::new_key_type! {
    /// Unique identifier for an edge in the edge store.
    pub struct EdgeId;
}

/// Which input group an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonType {
    Subject,
    Clip,
}

/// Side of the output ring an edge is currently building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    #[default]
    Left,
    Right,
}

/// One monotonic boundary segment, normalized so that `bot` carries the
/// larger y.
///
/// This is the read-only view handed to predicates. Fields owned by the sweep
/// driver are written through [`EdgeHandle`](super::EdgeHandle); the geometry
/// is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(super) bot: Point,
    pub(super) curr: Point,
    pub(super) top: Point,
    pub(super) dx: f64,
    pub(super) index: Option<usize>,
    pub(super) next: Option<EdgeId>,
    pub(super) prev: Option<EdgeId>,
    pub(super) next_in_lml: Option<EdgeId>,
    pub(super) next_in_ael: Option<EdgeId>,
    pub(super) prev_in_ael: Option<EdgeId>,
    pub(super) next_in_sel: Option<EdgeId>,
    pub(super) prev_in_sel: Option<EdgeId>,
    pub(super) winding_count: i32,
    pub(super) winding_count2: i32,
    pub(super) winding_delta: i8,
    pub(super) poly_type: PolygonType,
    pub(super) side: EdgeSide,
}

impl Edge {
    /// Builds the edge running from `current` to `next_pt` of an input boundary.
    ///
    /// Whichever endpoint has the larger y becomes `bot` (ties keep `current`
    /// as `bot`). Zero-length segments are accepted; filtering them is the
    /// driver's job.
    #[must_use]
    pub fn new(current: Point, next_pt: Point, poly_type: PolygonType) -> Self {
        let mut bot = current;
        let mut top = current;
        if current.y >= next_pt.y {
            top = next_pt;
        } else {
            bot = next_pt;
        }
        #[allow(clippy::cast_precision_loss)]
        let dy = (top.y - bot.y) as f64;
        #[allow(clippy::cast_precision_loss)]
        let dx = if dy.abs() < f64::EPSILON {
            HORIZONTAL
        } else {
            (top.x - bot.x) as f64 / dy
        };
        Self {
            bot,
            curr: current,
            top,
            dx,
            index: None,
            next: None,
            prev: None,
            next_in_lml: None,
            next_in_ael: None,
            prev_in_ael: None,
            next_in_sel: None,
            prev_in_sel: None,
            winding_count: 0,
            winding_count2: 0,
            winding_delta: 0,
            poly_type,
            side: EdgeSide::Left,
        }
    }

    /// Endpoint with the larger y.
    #[must_use]
    pub fn bot(&self) -> Point {
        self.bot
    }

    /// Endpoint with the smaller y.
    #[must_use]
    pub fn top(&self) -> Point {
        self.top
    }

    /// Position at the current scanbeam; `curr().x` is the x used to order the AEL.
    #[must_use]
    pub fn curr(&self) -> Point {
        self.curr
    }

    /// Δx/Δy from `bot` to `top`, or [`HORIZONTAL`].
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Output ring index, `None` while unassigned.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn winding_delta(&self) -> i8 {
        self.winding_delta
    }

    #[must_use]
    pub fn winding_count(&self) -> i32 {
        self.winding_count
    }

    /// Winding count of the opposite polygon type.
    #[must_use]
    pub fn winding_count2(&self) -> i32 {
        self.winding_count2
    }

    #[must_use]
    pub fn poly_type(&self) -> PolygonType {
        self.poly_type
    }

    #[must_use]
    pub fn side(&self) -> EdgeSide {
        self.side
    }

    /// Next edge in input boundary order.
    #[must_use]
    pub fn next(&self) -> Option<EdgeId> {
        self.next
    }

    /// Previous edge in input boundary order.
    #[must_use]
    pub fn prev(&self) -> Option<EdgeId> {
        self.prev
    }

    #[must_use]
    pub fn next_in_lml(&self) -> Option<EdgeId> {
        self.next_in_lml
    }

    #[must_use]
    pub fn next_in_ael(&self) -> Option<EdgeId> {
        self.next_in_ael
    }

    #[must_use]
    pub fn prev_in_ael(&self) -> Option<EdgeId> {
        self.prev_in_ael
    }

    #[must_use]
    pub fn next_in_sel(&self) -> Option<EdgeId> {
        self.next_in_sel
    }

    #[must_use]
    pub fn prev_in_sel(&self) -> Option<EdgeId> {
        self.prev_in_sel
    }

    /// Returns `true` if the edge is horizontal.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        is_horizontal(self)
    }

    /// The edge's x at scan-line `y`. See [`get_current_x`].
    #[must_use]
    pub fn current_x(&self, y: Coord) -> Coord {
        get_current_x(self, y)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edge:")?;
        writeln!(f, " bot x: {} y: {}", self.bot.x, self.bot.y)?;
        writeln!(f, " top x: {} y: {}", self.top.x, self.top.y)?;
        write!(f, " curr x: {} y: {}", self.curr.x, self.curr.y)
    }
}

/// Returns `true` if `edge` carries the horizontal slope sentinel.
#[inline]
#[must_use]
pub fn is_horizontal(edge: &Edge) -> bool {
    edge.dx <= HORIZONTAL
}

/// The x coordinate of `edge` at scan-line `current_y`.
///
/// Returns `top.x` exactly at the top; elsewhere interpolates from `bot` and
/// rounds half away from zero. Only meaningful for `current_y` within the
/// edge's y-range, and never for a horizontal edge below its own y.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn get_current_x(edge: &Edge, current_y: Coord) -> Coord {
    if current_y == edge.top.y {
        edge.top.x
    } else {
        edge.bot.x + (edge.dx * (current_y - edge.bot.y) as f64).round() as Coord
    }
}
