//! 2D lattice polygons and the measurements queries are built on.
//!
//! Purpose
//! - Hold validated polygons (`Polygon`, `Point`) with exact integer vertices.
//! - Provide the pure functions every query reduces to: shoelace area,
//!   first-on-ties extremum selection, bounding frames, and shape keys.
//!
//! Scope
//! - No geometry beyond shoelace area and axis-aligned frames. Polygons are
//!   never mutated after construction.
//!
//! Code cross-refs: `parse::{read_polygon, load_polygons}`, `query::Command`.

mod frame;
mod measure;
mod shape;
mod types;

pub use frame::Frame;
pub use measure::{area_of, first_extremum, twice_signed_area, Extremum};
pub use shape::ShapeKey;
pub use types::{Point, Polygon, MIN_VERTICES};
