//! Text format for points and polygons.
//!
//! Grammar
//! - Point: `'(' <i32> ';' <i32> ')'`, whitespace allowed between tokens.
//! - Polygon: `<N> <point>{N}` with `N >= 3` and pairwise-distinct points.
//!
//! Two reading modes
//! - Bulk load (`load_polygons`): best-effort; malformed units are skipped up
//!   to the next line terminator and never reported to the caller beyond a
//!   count.
//! - Literal (`read_polygon_literal`): strict; nothing but whitespace may
//!   follow the polygon.

mod cursor;
mod grammar;

pub use cursor::Cursor;
pub use grammar::{
    expect_end, load_polygons, read_point, read_polygon, read_polygon_literal, Loaded,
};
