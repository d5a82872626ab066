use crate::topology::{Edge, PolygonType};

/// Rule deciding which winding numbers count as filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FillType {
    #[default]
    EvenOdd,
    NonZero,
    Positive,
    Negative,
}

/// Fill rules of the two input groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FillRules {
    pub subject: FillType,
    pub clip: FillType,
}

impl FillRules {
    /// Pairs the subject group's fill rule with the clip group's.
    #[must_use]
    pub fn new(subject: FillType, clip: FillType) -> Self {
        Self { subject, clip }
    }

    /// Fill rule of the group `poly_type` belongs to.
    #[must_use]
    pub fn own(&self, poly_type: PolygonType) -> FillType {
        match poly_type {
            PolygonType::Subject => self.subject,
            PolygonType::Clip => self.clip,
        }
    }

    /// Fill rule of the opposite group.
    #[must_use]
    pub fn other(&self, poly_type: PolygonType) -> FillType {
        match poly_type {
            PolygonType::Subject => self.clip,
            PolygonType::Clip => self.subject,
        }
    }
}

/// Returns `true` if the edge's own group is filled even-odd.
#[must_use]
pub fn is_even_odd_fill_type(edge: &Edge, subject_fill: FillType, clip_fill: FillType) -> bool {
    FillRules::new(subject_fill, clip_fill).own(edge.poly_type()) == FillType::EvenOdd
}

/// Returns `true` if the group opposite to the edge's is filled even-odd.
#[must_use]
pub fn is_even_odd_alt_fill_type(
    edge: &Edge,
    subject_fill: FillType,
    clip_fill: FillType,
) -> bool {
    FillRules::new(subject_fill, clip_fill).other(edge.poly_type()) == FillType::EvenOdd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    fn edge(poly_type: PolygonType) -> Edge {
        Edge::new(Point::new(0, 0), Point::new(1, 1), poly_type)
    }

    #[test]
    fn subject_edge_uses_subject_rule() {
        let e = edge(PolygonType::Subject);
        assert!(is_even_odd_fill_type(&e, FillType::EvenOdd, FillType::NonZero));
        assert!(!is_even_odd_fill_type(&e, FillType::NonZero, FillType::EvenOdd));
        assert!(is_even_odd_alt_fill_type(&e, FillType::NonZero, FillType::EvenOdd));
        assert!(!is_even_odd_alt_fill_type(&e, FillType::EvenOdd, FillType::Positive));
    }

    #[test]
    fn clip_edge_uses_clip_rule() {
        let e = edge(PolygonType::Clip);
        assert!(is_even_odd_fill_type(&e, FillType::Negative, FillType::EvenOdd));
        assert!(!is_even_odd_fill_type(&e, FillType::EvenOdd, FillType::NonZero));
        assert!(is_even_odd_alt_fill_type(&e, FillType::EvenOdd, FillType::NonZero));
    }

    #[test]
    fn rules_lookup() {
        let rules = FillRules::new(FillType::Positive, FillType::Negative);
        assert_eq!(rules.own(PolygonType::Clip), FillType::Negative);
        assert_eq!(rules.other(PolygonType::Clip), FillType::Positive);
        assert_eq!(FillRules::default().own(PolygonType::Subject), FillType::EvenOdd);
    }
}
