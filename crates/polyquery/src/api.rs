//! Curated re-exports for the CLI and integration tests.
//!
//! Breaking changes are allowed; this only groups the names callers reach for.

// Data model and measurements
pub use crate::geom2::{
    area_of, first_extremum, twice_signed_area, Extremum, Frame, Point, Polygon, ShapeKey,
    MIN_VERTICES,
};
// Text format
pub use crate::parse::{load_polygons, read_polygon, read_polygon_literal, Cursor, Loaded};
// Commands
pub use crate::query::{
    Answer, AreaParam, Command, Measure, Session, SessionCfg, Tally, VertexFilter,
};
// Random fixtures
pub use crate::gen::{
    draw_collection, draw_lattice_polygon, write_polygon_file, LatticeCfg, ReplayToken,
    VertexCount,
};
// Errors
pub use crate::error::{ParseError, ParseErrorCode, QueryError, QueryErrorCode};
