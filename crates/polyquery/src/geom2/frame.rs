//! Axis-aligned bounding box ("frame") of a point cloud.

use super::types::{Point, Polygon};

/// Closed axis-aligned rectangle `[min_x, max_x] × [min_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Frame {
    /// Frame of all points; `None` for an empty cloud.
    pub fn of_points<'a, I>(points: I) -> Option<Frame>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let p = iter.next()?;
        let init = Frame {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        };
        Some(iter.fold(init, |f, p| Frame {
            min_x: f.min_x.min(p.x),
            max_x: f.max_x.max(p.x),
            min_y: f.min_y.min(p.y),
            max_y: f.max_y.max(p.y),
        }))
    }

    /// Frame of every vertex of every polygon.
    #[inline]
    pub fn of_polygons(polys: &[Polygon]) -> Option<Frame> {
        Self::of_points(polys.iter().flat_map(|p| p.points()))
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// True iff every vertex lies in the frame (boundary included).
    #[inline]
    pub fn contains(&self, poly: &Polygon) -> bool {
        poly.points().iter().all(|&p| self.contains_point(p))
    }
}
