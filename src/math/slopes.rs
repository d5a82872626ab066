//! Exact slope and collinearity tests.
//!
//! Each test compares two cross products computed in `i128`, which cannot
//! overflow while coordinates stay within [`MAX_COORD`](super::MAX_COORD).

use super::{diff, Point};
use crate::topology::Edge;

/// Returns `true` if two edges have the same slope.
#[must_use]
pub fn edge_slopes_equal(e1: &Edge, e2: &Edge) -> bool {
    let (b1, t1) = (e1.bot(), e1.top());
    let (b2, t2) = (e2.bot(), e2.top());
    diff(t1.y, b1.y) * diff(t2.x, b2.x) == diff(t1.x, b1.x) * diff(t2.y, b2.y)
}

/// Returns `true` if `pt1`, `pt2` and `pt3` are collinear.
#[must_use]
pub fn slopes_equal(pt1: &Point, pt2: &Point, pt3: &Point) -> bool {
    diff(pt1.y, pt2.y) * diff(pt2.x, pt3.x) == diff(pt1.x, pt2.x) * diff(pt2.y, pt3.y)
}

/// Returns `true` if segment `pt1`-`pt2` is parallel to segment `pt3`-`pt4`.
#[must_use]
pub fn segment_slopes_equal(pt1: &Point, pt2: &Point, pt3: &Point, pt4: &Point) -> bool {
    diff(pt1.y, pt2.y) * diff(pt3.x, pt4.x) == diff(pt1.x, pt2.x) * diff(pt3.y, pt4.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::MAX_COORD;
    use crate::topology::PolygonType;

    #[test]
    fn three_point_collinearity() {
        let (a, b) = (Point::new(0, 0), Point::new(1, 1));
        assert!(slopes_equal(&a, &b, &Point::new(2, 2)));
        assert!(!slopes_equal(&a, &b, &Point::new(2, 3)));
        assert!(slopes_equal(&a, &b, &Point::new(-7, -7)));
    }

    #[test]
    fn repeated_points_are_collinear() {
        let a = Point::new(3, 9);
        assert!(slopes_equal(&a, &a, &Point::new(-4, 12)));
    }

    #[test]
    fn parallel_segments() {
        assert!(segment_slopes_equal(
            &Point::new(0, 0),
            &Point::new(2, 1),
            &Point::new(10, 10),
            &Point::new(14, 12),
        ));
        assert!(!segment_slopes_equal(
            &Point::new(0, 0),
            &Point::new(2, 1),
            &Point::new(10, 10),
            &Point::new(14, 13),
        ));
    }

    #[test]
    fn edges_compare_regardless_of_input_direction() {
        let e1 = Edge::new(Point::new(0, 0), Point::new(3, 6), PolygonType::Subject);
        let e2 = Edge::new(Point::new(11, 12), Point::new(10, 10), PolygonType::Clip);
        let e3 = Edge::new(Point::new(0, 0), Point::new(3, 7), PolygonType::Clip);
        assert!(edge_slopes_equal(&e1, &e2));
        assert!(!edge_slopes_equal(&e1, &e3));
    }

    #[test]
    fn horizontal_edges_share_slope() {
        let e1 = Edge::new(Point::new(0, 5), Point::new(9, 5), PolygonType::Subject);
        let e2 = Edge::new(Point::new(3, -2), Point::new(-1, -2), PolygonType::Subject);
        assert!(edge_slopes_equal(&e1, &e2));
    }

    #[test]
    fn extreme_coordinates_stay_exact() {
        // Nearly parallel at the edge of the range: a float comparison of these
        // slopes would round both to the same value.
        let a = Point::new(-MAX_COORD, -MAX_COORD);
        let b = Point::new(MAX_COORD, MAX_COORD - 1);
        let c = Point::new(MAX_COORD, MAX_COORD);
        assert!(!slopes_equal(&a, &b, &c));
        assert!(slopes_equal(&a, &Point::new(0, 0), &c));
    }
}
