//! Integer coordinate model and the exact predicates built on it.
//!
//! All predicates in this module tree assume every coordinate lies within
//! `[-MAX_COORD, MAX_COORD]`. Under that bound a coordinate difference fits in
//! 64 bits and the product of two differences fits in an `i128` with room for
//! one subtraction, so every cross product below is evaluated exactly.

pub mod area;
pub mod cycle;
pub mod point_in_polygon;
pub mod segments;
pub mod slopes;

use crate::error::{GeometryError, Result};

/// Coordinate type for all boundary points.
pub type Coord = i64;

/// 2D integer point type.
pub type Point = nalgebra::Point2<Coord>;

/// Largest coordinate magnitude the exact predicates support (`2^62 - 1`).
pub const MAX_COORD: Coord = 0x3FFF_FFFF_FFFF_FFFF;

/// Slope sentinel marking a horizontal edge.
///
/// Smaller than any finite `dx` a pair of in-range points can produce, so the
/// horizontal test is an ordering comparison rather than float equality.
pub const HORIZONTAL: f64 = -1.0e40;

/// Checks a point against the supported coordinate range.
///
/// # Errors
///
/// Returns `GeometryError::CoordinateOutOfRange` naming the first offending
/// coordinate.
pub fn range_test(pt: &Point) -> Result<()> {
    for value in [pt.x, pt.y] {
        if !(-MAX_COORD..=MAX_COORD).contains(&value) {
            tracing::warn!(value, "coordinate outside supported range");
            return Err(GeometryError::CoordinateOutOfRange {
                value,
                max: MAX_COORD,
            }
            .into());
        }
    }
    Ok(())
}

/// Checks every point of a ring against the supported coordinate range.
///
/// # Errors
///
/// Returns the error of the first point that fails [`range_test`].
pub fn range_test_all(points: &[Point]) -> Result<()> {
    points.iter().try_for_each(range_test)
}

/// Exact difference `a - b`, widened so it cannot overflow.
#[inline]
pub(crate) fn diff(a: Coord, b: Coord) -> i128 {
    i128::from(a) - i128::from(b)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ScanclipError;

    #[test]
    fn range_test_accepts_bounds() {
        assert!(range_test(&Point::new(MAX_COORD, -MAX_COORD)).is_ok());
        assert!(range_test(&Point::new(0, 0)).is_ok());
    }

    #[test]
    fn range_test_rejects_overflow() {
        let err = range_test(&Point::new(0, MAX_COORD + 1)).unwrap_err();
        match err {
            ScanclipError::Geometry(GeometryError::CoordinateOutOfRange { value, .. }) => {
                assert_eq!(value, MAX_COORD + 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(range_test(&Point::new(Coord::MIN, 0)).is_err());
    }

    #[test]
    fn range_test_all_reports_first_failure() {
        let pts = [Point::new(1, 1), Point::new(Coord::MAX, 0), Point::new(0, Coord::MIN)];
        let err = range_test_all(&pts).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("coordinate {} exceeds the supported range [-{MAX_COORD}, {MAX_COORD}]", Coord::MAX)
        );
        assert!(range_test_all(&pts[..1]).is_ok());
    }

    #[test]
    fn diff_does_not_overflow_at_bounds() {
        assert_eq!(diff(MAX_COORD, -MAX_COORD), 2 * i128::from(MAX_COORD));
    }
}
