use super::Point;

/// A closed, restartable sequence of points.
///
/// `points` yields one full lap starting at the cycle's first point; the
/// closing segment back to the start is implied. Slices and arena point lists
/// both implement this, so every ring predicate is written once.
pub trait PointCycle {
    /// Iterates one lap of the cycle.
    fn points(&self) -> impl Iterator<Item = Point> + '_;

    /// Iterates the segments `(prev, curr)` of the cycle, wrap-around included.
    fn segments(&self) -> Segments<impl Iterator<Item = Point> + '_> {
        let first = self.points().next();
        Segments {
            prev: first,
            rest: self.points().skip(1).chain(first),
        }
    }

    /// Returns `true` if the cycle has fewer than `n` points.
    fn shorter_than(&self, n: usize) -> bool {
        self.points().take(n).count() < n
    }
}

impl PointCycle for [Point] {
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }
}

impl PointCycle for Vec<Point> {
    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().copied()
    }
}

/// Iterator over consecutive point pairs of a [`PointCycle`].
#[derive(Debug, Clone)]
pub struct Segments<I> {
    prev: Option<Point>,
    rest: I,
}

impl<I: Iterator<Item = Point>> Iterator for Segments<I> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.rest.next()?;
        let prev = self.prev.replace(curr)?;
        Some((prev, curr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_wrap_around() {
        let ring = vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        let segs: Vec<_> = ring.segments().collect();
        assert_eq!(
            segs,
            vec![
                (Point::new(0, 0), Point::new(1, 0)),
                (Point::new(1, 0), Point::new(1, 1)),
                (Point::new(1, 1), Point::new(0, 0)),
            ]
        );
    }

    #[test]
    fn single_point_closes_on_itself() {
        let ring = [Point::new(3, 4)];
        let segs: Vec<_> = ring[..].segments().collect();
        assert_eq!(segs, vec![(Point::new(3, 4), Point::new(3, 4))]);
    }

    #[test]
    fn empty_cycle_has_no_segments() {
        let ring: Vec<Point> = Vec::new();
        assert_eq!(ring.segments().count(), 0);
        assert!(ring.shorter_than(3));
    }

    #[test]
    fn shorter_than_counts_lazily() {
        let ring = vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        assert!(!ring.shorter_than(3));
        assert!(ring.shorter_than(4));
    }
}
