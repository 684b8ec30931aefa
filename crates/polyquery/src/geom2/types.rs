//! Integer lattice points and vertex-ordered polygons.
//!
//! - `Point`: exact integer coordinates; `Ord` is lexicographic (x, then y).
//! - `Polygon`: at least three pairwise-distinct vertices in boundary order.
//!   Equality is structural and order-sensitive (no rotation/reflection).

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorCode};
use crate::parse::{self, Cursor};

/// Smallest vertex count a polygon may have.
pub const MIN_VERTICES: usize = 3;

/// Lattice point `(x;y)`.
///
/// Field order matters: the derived `Ord` compares `x` first, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates relative to `origin`, widened so the difference cannot overflow.
    #[inline]
    pub fn offset_from(self, origin: Point) -> (i64, i64) {
        (
            i64::from(self.x) - i64::from(origin.x),
            i64::from(self.y) - i64::from(origin.y),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::new(s);
        let p = parse::read_point(&mut cur)?;
        parse::expect_end(&mut cur)?;
        Ok(p)
    }
}

/// Simple polygon given by its vertices in boundary order.
///
/// Invariants (checked by every constructor):
/// - `points.len() >= MIN_VERTICES`.
/// - No two vertices are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Validate and wrap a vertex sequence; the given order is kept.
    pub fn new(points: Vec<Point>) -> Result<Self, ParseError> {
        if points.len() < MIN_VERTICES {
            return Err(ParseError::new(
                ParseErrorCode::TooFewVertices,
                0,
                format!("{} vertices, need at least {MIN_VERTICES}", points.len()),
            ));
        }
        if let Some(p) = first_duplicate(&points) {
            return Err(ParseError::new(
                ParseErrorCode::DuplicateVertex,
                0,
                format!("vertex {p} repeats"),
            ));
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

/// Smallest vertex that occurs more than once (checked on a sorted copy).
fn first_duplicate(points: &[Point]) -> Option<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points.len())?;
        for p in &self.points {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

impl FromStr for Polygon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::new(s);
        parse::read_polygon_literal(&mut cur)
    }
}
