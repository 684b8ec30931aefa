//! Polygon collection loading and query commands.
//!
//! Layers (leaf first)
//! - `geom2`: validated lattice polygons and pure measurements (area, frames,
//!   shape keys, extremum selection).
//! - `parse`: text cursor, point/polygon grammar, best-effort bulk loader.
//! - `query`: command kinds, execution, and the line-oriented `Session`.
//! - `gen`: reproducible random polygons for fixtures and benchmarks.
//!
//! The collection is loaded once and only read afterwards; nothing in this
//! crate mutates a polygon after construction.

pub mod api;
pub mod error;
pub mod gen;
pub mod geom2;
pub mod parse;
pub mod query;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ParseError, QueryError, QueryErrorCode};
    pub use crate::geom2::{Frame, Point, Polygon, ShapeKey};
    pub use crate::parse::{load_polygons, Loaded};
    pub use crate::query::{Command, Session, SessionCfg};
}
