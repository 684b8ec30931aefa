//! Shape normalization for "same shape" comparisons.
//!
//! A polygon's key is its vertex set translated so the lexicographically
//! smallest vertex sits at the origin, then sorted. Two polygons share a key
//! iff one is a translate of the other (vertex listing order is ignored).
//! Rotations and reflections produce different keys.

use super::types::Polygon;

/// Translation-invariant, order-invariant key of a polygon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeKey(Vec<(i64, i64)>);

impl ShapeKey {
    pub fn of(poly: &Polygon) -> ShapeKey {
        let pts = poly.points();
        let Some(&origin) = pts.iter().min() else {
            return ShapeKey(Vec::new());
        };
        let mut rel: Vec<(i64, i64)> = pts.iter().map(|p| p.offset_from(origin)).collect();
        rel.sort_unstable();
        ShapeKey(rel)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.0.len()
    }

    /// Offsets from the smallest vertex, sorted; the first entry is `(0, 0)`.
    #[inline]
    pub fn offsets(&self) -> &[(i64, i64)] {
        &self.0
    }

    /// Whether `poly` normalizes to this key (vertex counts are compared first).
    pub fn matches(&self, poly: &Polygon) -> bool {
        poly.vertex_count() == self.vertex_count() && ShapeKey::of(poly) == *self
    }
}

impl Polygon {
    /// Same vertex count and same normalized vertex set.
    #[inline]
    pub fn same_shape(&self, other: &Polygon) -> bool {
        ShapeKey::of(self).matches(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Polygon {
        s.parse().unwrap()
    }

    #[test]
    fn translates_match_regardless_of_listing_order() {
        let a = p("4 (0;0) (0;2) (2;2) (2;0)");
        let b = p("4 (12;7) (10;5) (10;7) (12;5)");
        assert!(a.same_shape(&b));
        assert_eq!(ShapeKey::of(&a).offsets()[0], (0, 0));
    }

    #[test]
    fn rotation_is_not_same_shape() {
        let a = p("3 (0;0) (4;0) (0;3)");
        let rotated = p("3 (0;0) (0;4) (-3;0)");
        assert_eq!(a.area(), rotated.area());
        assert!(!a.same_shape(&rotated));
    }

    #[test]
    fn vertex_count_must_agree() {
        let tri = p("3 (0;0) (1;0) (0;1)");
        let quad = p("4 (0;0) (1;0) (1;1) (0;1)");
        assert!(!tri.same_shape(&quad));
    }

    #[test]
    fn extreme_translation_does_not_overflow() {
        let a = p("3 (-2147483648;-2147483648) (2147483647;0) (0;2147483647)");
        let key = ShapeKey::of(&a);
        assert_eq!(key.offsets()[0], (0, 0));
        assert_eq!(key.offsets()[2], (4294967295, 2147483648));
    }
}
