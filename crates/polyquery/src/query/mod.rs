//! Query commands over a loaded polygon collection.
//!
//! Commands (one output line each)
//! - `AREA EVEN|ODD|<N>|MEAN`: area sum by vertex-count predicate, or mean area.
//! - `MAX|MIN AREA|VERTEXES`: extreme area or vertex count (first on ties).
//! - `COUNT EVEN|ODD|<N>`: polygons matching the predicate.
//! - `LESSAREA <poly>`: polygons with strictly smaller area.
//! - `INFRAME <poly>`: `<TRUE>`/`<FALSE>`, containment in the collection frame.
//! - `SAME <poly>`: polygons with the same shape key (translates).
//!
//! `<N>` must be at least 3. MEAN, MAX, MIN and INFRAME fail on an empty
//! collection; sums and counts yield zero.

mod exec;
mod session;
mod types;

pub use session::{Session, SessionCfg, Tally};
pub use types::{Answer, AreaParam, Command, Measure, VertexFilter};
