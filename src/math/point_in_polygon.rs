use super::cycle::PointCycle;
use super::{diff, Point};

/// Classification of a point against a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointInPolygonResult {
    /// The point lies exactly on a vertex or edge of the ring.
    OnBoundary,
    Inside,
    Outside,
}

impl PointInPolygonResult {
    fn toggled(self) -> Self {
        match self {
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
            Self::OnBoundary => Self::OnBoundary,
        }
    }
}

/// Classifies `pt` against a closed ring by exact ray casting.
///
/// A ray is cast towards +x and crossings are counted per segment; any segment
/// the point lies on short-circuits to [`PointInPolygonResult::OnBoundary`].
/// Rings with fewer than 3 points classify everything as outside.
#[must_use]
pub fn point_in_polygon<C: PointCycle + ?Sized>(pt: &Point, ring: &C) -> PointInPolygonResult {
    if ring.shorter_than(3) {
        return PointInPolygonResult::Outside;
    }
    let mut result = PointInPolygonResult::Outside;
    for (prev, curr) in ring.segments() {
        if curr.y == pt.y
            && (curr.x == pt.x || (prev.y == pt.y && ((curr.x > pt.x) == (prev.x < pt.x))))
        {
            return PointInPolygonResult::OnBoundary;
        }
        if (prev.y < pt.y) == (curr.y < pt.y) {
            continue;
        }
        if prev.x >= pt.x && curr.x > pt.x {
            result = result.toggled();
            continue;
        }
        if prev.x < pt.x && curr.x <= pt.x {
            continue;
        }
        let d = diff(prev.x, pt.x) * diff(curr.y, pt.y) - diff(curr.x, pt.x) * diff(prev.y, pt.y);
        // Only a zero cross product puts `pt` on the segment. A negative one
        // means `pt` lies on a definite side and must reach the parity toggle.
        if d == 0 {
            return PointInPolygonResult::OnBoundary;
        }
        if (d > 0) == (curr.y > prev.y) {
            result = result.toggled();
        }
    }
    result
}

/// Returns `true` if ring `poly2` contains ring `poly1`.
///
/// Points of `poly1` are tested against `poly2` in order until one is not on
/// `poly2`'s boundary; that point decides. If every point of `poly1` lies on
/// `poly2`'s boundary the rings coincide and `true` is returned.
#[must_use]
pub fn poly2_contains_poly1<C1, C2>(poly1: &C1, poly2: &C2) -> bool
where
    C1: PointCycle + ?Sized,
    C2: PointCycle + ?Sized,
{
    let decisive = poly1
        .points()
        .map(|pt| point_in_polygon(&pt, poly2))
        .find(|&res| res != PointInPolygonResult::OnBoundary);
    match decisive {
        Some(res) => res == PointInPolygonResult::Inside,
        None => true,
    }
}
