//! Area and extremum selection.
//!
//! - Area is the shoelace formula over the closed vertex loop, summed exactly
//!   in `i128` and halved only when converted to `f64`. Comparisons go
//!   through `Polygon::twice_area`, never through the `f64` value.
//! - Extremum selection is a linear scan that replaces the best-so-far only on
//!   a strict improvement, so ties resolve to the earliest polygon.

use super::types::{Point, Polygon};

/// Exact `2 * signed area` of the closed loop `points[0] → … → points[n-1] → points[0]`.
///
/// Positive for counterclockwise order. Returns 0 for fewer than three points.
pub fn twice_signed_area(points: &[Point]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
        })
        .sum()
}

/// Unsigned area of a vertex loop (0 for degenerate input).
#[inline]
pub fn area_of(points: &[Point]) -> f64 {
    twice_signed_area(points).unsigned_abs() as f64 / 2.0
}

impl Polygon {
    #[inline]
    pub fn twice_signed_area(&self) -> i128 {
        twice_signed_area(self.points())
    }

    /// Exact `2 * area`; the ordering key for area comparisons.
    #[inline]
    pub fn twice_area(&self) -> u128 {
        self.twice_signed_area().unsigned_abs()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        area_of(self.points())
    }

    #[inline]
    pub fn has_even_vertices(&self) -> bool {
        self.vertex_count() % 2 == 0
    }
}

/// Which end of the order to select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// First polygon whose `key` is the largest (or smallest) in collection order.
///
/// Returns `None` for an empty slice.
pub fn first_extremum<K, F>(polys: &[Polygon], which: Extremum, key: F) -> Option<&Polygon>
where
    K: PartialOrd,
    F: Fn(&Polygon) -> K,
{
    let mut iter = polys.iter();
    let first = iter.next()?;
    let mut best = (first, key(first));
    for p in iter {
        let k = key(p);
        let better = match which {
            Extremum::Max => k > best.1,
            Extremum::Min => k < best.1,
        };
        if better {
            best = (p, k);
        }
    }
    Some(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(pts: &[(i32, i32)]) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn right_triangle_area() {
        let t = poly(&[(0, 0), (4, 0), (0, 3)]);
        assert_eq!(t.twice_signed_area(), 12);
        assert_eq!(t.area(), 6.0);
        assert_eq!(format!("{:.1}", t.area()), "6.0");
    }

    #[test]
    fn clockwise_order_gives_negative_signed_area() {
        let sq = poly(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        assert_eq!(sq.twice_signed_area(), -8);
        assert_eq!(sq.area(), 4.0);
    }

    #[test]
    fn degenerate_loops_have_zero_area() {
        assert_eq!(area_of(&[]), 0.0);
        assert_eq!(area_of(&[Point::new(1, 1), Point::new(2, 3)]), 0.0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let m = i32::MAX;
        let n = i32::MIN;
        let big = poly(&[(n, n), (m, n), (m, m), (n, m)]);
        let side = i128::from(m) - i128::from(n);
        assert_eq!(big.twice_signed_area(), 2 * side * side);
    }

    #[test]
    fn ties_resolve_to_first() {
        let a = poly(&[(0, 0), (1, 0), (0, 1)]);
        let b = poly(&[(5, 5), (6, 5), (5, 6)]);
        let c = poly(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        let polys = vec![a.clone(), b.clone(), c.clone()];
        let min = first_extremum(&polys, Extremum::Min, Polygon::area).unwrap();
        assert!(std::ptr::eq(min, &polys[0]));
        let max = first_extremum(&polys, Extremum::Max, Polygon::vertex_count).unwrap();
        assert_eq!(max, &c);
        let same = vec![b.clone(), a.clone()];
        let max = first_extremum(&same, Extremum::Max, Polygon::area).unwrap();
        assert!(std::ptr::eq(max, &same[0]));
        assert!(first_extremum(&[], Extremum::Max, Polygon::area).is_none());
    }

    #[test]
    fn exact_key_separates_areas_equal_in_f64() {
        let m = i32::MAX;
        let notched = poly(&[(0, 0), (m, 0), (m, m), (1, m), (0, m - 1)]);
        let square = poly(&[(0, 0), (m, 0), (m, m), (0, m)]);
        assert_eq!(notched.area(), square.area());
        assert_eq!(notched.twice_area() + 1, square.twice_area());
        let polys = vec![notched, square];
        let max = first_extremum(&polys, Extremum::Max, Polygon::twice_area).unwrap();
        assert!(std::ptr::eq(max, &polys[1]));
        let min = first_extremum(&polys, Extremum::Min, Polygon::twice_area).unwrap();
        assert!(std::ptr::eq(min, &polys[0]));
        let twins = vec![polys[1].clone(), polys[1].clone()];
        let max = first_extremum(&twins, Extremum::Max, Polygon::twice_area).unwrap();
        assert!(std::ptr::eq(max, &twins[0]));
    }
}
