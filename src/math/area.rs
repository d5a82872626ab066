use super::cycle::PointCycle;
use super::{diff, Point};

/// Twice the signed area of a closed ring, computed exactly.
///
/// Positive for counter-clockwise rings in a y-up frame. Returns `Some(0)` for
/// fewer than 3 points. Each shoelace term fits in an `i128` for in-range
/// coordinates, but a long or self-overlapping ring can push the sum past it;
/// that case yields `None`.
#[must_use]
pub fn doubled_area<C: PointCycle + ?Sized>(ring: &C) -> Option<i128> {
    if ring.shorter_than(3) {
        return Some(0);
    }
    ring.segments().try_fold(0_i128, |acc, (prev, curr)| {
        acc.checked_add((i128::from(prev.x) + i128::from(curr.x)) * diff(curr.y, prev.y))
    })
}

/// Shoelace sum in `f64`, used once the exact sum no longer fits.
#[allow(clippy::cast_precision_loss)]
fn doubled_area_approx<C: PointCycle + ?Sized>(ring: &C) -> f64 {
    ring.segments()
        .map(|(prev, curr)| {
            (prev.x as f64 + curr.x as f64) * (curr.y as f64 - prev.y as f64)
        })
        .sum()
}

/// Signed area of a closed ring via the shoelace formula.
///
/// Works on point slices and on arena point lists alike. Positive for
/// counter-clockwise rings in a y-up frame; `0.0` for fewer than 3 points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn area<C: PointCycle + ?Sized>(ring: &C) -> f64 {
    match doubled_area(ring) {
        Some(exact) => exact as f64 * 0.5,
        None => {
            tracing::debug!("doubled area exceeds i128, summing in f64");
            doubled_area_approx(ring) * 0.5
        }
    }
}

/// Orientation of a ring: `true` when its signed area is non-negative.
///
/// Downstream this decides outer ring (`true`) versus hole (`false`).
#[must_use]
pub fn orientation<C: PointCycle + ?Sized>(ring: &C) -> bool {
    match doubled_area(ring) {
        Some(exact) => exact >= 0,
        None => doubled_area_approx(ring) >= 0.0,
    }
}

/// Returns `true` if `pt` equals one of the ring's vertices.
#[must_use]
pub fn point_is_vertex<C: PointCycle + ?Sized>(pt: &Point, ring: &C) -> bool {
    ring.points().any(|p| p == *pt)
}
