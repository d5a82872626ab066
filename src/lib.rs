//! Edge entity and exact integer predicates for a Vatti-style polygon
//! clipping sweep.
//!
//! Coordinates are `i64` and must stay within [`math::MAX_COORD`]; every
//! predicate is exact under that contract.

pub mod error;
pub mod fill;
pub mod math;
pub mod topology;

pub use error::{Result, ScanclipError};
pub use fill::{is_even_odd_alt_fill_type, is_even_odd_fill_type, FillRules, FillType};
pub use math::area::{area, doubled_area, orientation, point_is_vertex};
pub use math::cycle::PointCycle;
pub use math::point_in_polygon::{point_in_polygon, poly2_contains_poly1, PointInPolygonResult};
pub use math::segments::{
    get_overlap_segment, horizontal_segments_overlap, pt2_is_between_pt1_and_pt3,
};
pub use math::slopes::{edge_slopes_equal, segment_slopes_equal, slopes_equal};
pub use math::{Coord, Point, HORIZONTAL, MAX_COORD};
pub use topology::{
    get_current_x, is_horizontal, Edge, EdgeHandle, EdgeId, EdgeSide, EdgeStore, PointId,
    PointListRef, PointStore, PolygonType,
};
