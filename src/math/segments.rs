//! Overlap and betweenness helpers used when merging collinear or
//! horizontal edge runs.

use super::{Coord, Point};

/// Computes the overlap of two collinear segments `pt1a`-`pt1b` and
/// `pt2a`-`pt2b`.
///
/// The comparison runs along x when the first segment is wider than it is
/// tall, otherwise along y. Returns the overlap endpoints when the overlap has
/// positive length along that axis, `None` when the segments only touch or are
/// apart. Collinearity is assumed, not checked.
#[must_use]
pub fn get_overlap_segment(
    mut pt1a: Point,
    mut pt1b: Point,
    mut pt2a: Point,
    mut pt2b: Point,
) -> Option<(Point, Point)> {
    if (pt1a.x - pt1b.x).abs() > (pt1a.y - pt1b.y).abs() {
        if pt1a.x > pt1b.x {
            std::mem::swap(&mut pt1a, &mut pt1b);
        }
        if pt2a.x > pt2b.x {
            std::mem::swap(&mut pt2a, &mut pt2b);
        }
        let start = if pt1a.x > pt2a.x { pt1a } else { pt2a };
        let end = if pt1b.x < pt2b.x { pt1b } else { pt2b };
        (start.x < end.x).then_some((start, end))
    } else {
        // descending in y
        if pt1a.y < pt1b.y {
            std::mem::swap(&mut pt1a, &mut pt1b);
        }
        if pt2a.y < pt2b.y {
            std::mem::swap(&mut pt2a, &mut pt2b);
        }
        let start = if pt1a.y < pt2a.y { pt1a } else { pt2a };
        let end = if pt1b.y > pt2b.y { pt1b } else { pt2b };
        (start.y > end.y).then_some((start, end))
    }
}

/// Returns `true` if the open intervals `[seg1a, seg1b]` and `[seg2a, seg2b]`
/// overlap by more than a point. Endpoint order within each pair is irrelevant.
#[must_use]
pub fn horizontal_segments_overlap(
    mut seg1a: Coord,
    mut seg1b: Coord,
    mut seg2a: Coord,
    mut seg2b: Coord,
) -> bool {
    if seg1a > seg1b {
        std::mem::swap(&mut seg1a, &mut seg1b);
    }
    if seg2a > seg2b {
        std::mem::swap(&mut seg2a, &mut seg2b);
    }
    seg1a < seg2b && seg2a < seg1b
}

/// Returns `true` if `pt2` lies strictly between `pt1` and `pt3`.
///
/// Tested along x unless `pt1` and `pt3` share an x, then along y. Any two
/// coincident points give `false`.
#[must_use]
pub fn pt2_is_between_pt1_and_pt3(pt1: &Point, pt2: &Point, pt3: &Point) -> bool {
    if pt1 == pt3 || pt1 == pt2 || pt3 == pt2 {
        false
    } else if pt1.x != pt3.x {
        (pt2.x > pt1.x) == (pt2.x < pt3.x)
    } else {
        (pt2.y > pt1.y) == (pt2.y < pt3.y)
    }
}
