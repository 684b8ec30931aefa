//! Command kinds and their parameters.

use std::fmt;

use super::session::SessionCfg;
use crate::error::{QueryError, QueryErrorCode};
use crate::geom2::{Polygon, MIN_VERTICES};
use crate::parse::{read_polygon_literal, Cursor};

/// Vertex-count predicate shared by AREA and COUNT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexFilter {
    Even,
    Odd,
    Exact(usize),
}

impl VertexFilter {
    #[inline]
    pub fn matches(&self, poly: &Polygon) -> bool {
        match *self {
            VertexFilter::Even => poly.has_even_vertices(),
            VertexFilter::Odd => !poly.has_even_vertices(),
            VertexFilter::Exact(n) => poly.vertex_count() == n,
        }
    }

    /// `EVEN`, `ODD`, or an unsigned count of at least 3.
    pub fn from_token(tok: &str) -> Result<Self, QueryError> {
        match tok {
            "EVEN" => Ok(VertexFilter::Even),
            "ODD" => Ok(VertexFilter::Odd),
            _ => {
                let n: usize = tok
                    .parse()
                    .map_err(|_| QueryError::parameter(format!("bad vertex filter '{tok}'")))?;
                if n < MIN_VERTICES {
                    return Err(QueryError::parameter(format!(
                        "vertex filter {n} is below {MIN_VERTICES}"
                    )));
                }
                Ok(VertexFilter::Exact(n))
            }
        }
    }
}

/// AREA parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaParam {
    Sum(VertexFilter),
    Mean,
}

/// What MAX/MIN rank polygons by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measure {
    Area,
    Vertexes,
}

impl Measure {
    pub fn from_token(tok: &str) -> Result<Self, QueryError> {
        match tok {
            "AREA" => Ok(Measure::Area),
            "VERTEXES" => Ok(Measure::Vertexes),
            _ => Err(QueryError::parameter(format!("unknown measure '{tok}'"))),
        }
    }
}

/// One parsed command, ready to run against a collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Area(AreaParam),
    Max(Measure),
    Min(Measure),
    Count(VertexFilter),
    LessArea(Polygon),
    InFrame(Polygon),
    Same(Polygon),
}

fn param<'a>(args: &mut Cursor<'a>, keyword: &str) -> Result<&'a str, QueryError> {
    args.word()
        .ok_or_else(|| QueryError::parameter(format!("{keyword} needs a parameter")))
}

impl Command {
    /// Parse the arguments of `keyword` (case-sensitive) from `args`.
    ///
    /// Scalar parameters take one word and ignore the rest of `args`; polygon
    /// literals must consume `args` completely.
    pub fn parse(keyword: &str, args: &mut Cursor<'_>) -> Result<Command, QueryError> {
        match keyword {
            "AREA" => {
                let tok = param(args, keyword)?;
                let p = if tok == "MEAN" {
                    AreaParam::Mean
                } else {
                    AreaParam::Sum(VertexFilter::from_token(tok)?)
                };
                Ok(Command::Area(p))
            }
            "MAX" => Ok(Command::Max(Measure::from_token(param(args, keyword)?)?)),
            "MIN" => Ok(Command::Min(Measure::from_token(param(args, keyword)?)?)),
            "COUNT" => Ok(Command::Count(VertexFilter::from_token(param(
                args, keyword,
            )?)?)),
            "LESSAREA" => Ok(Command::LessArea(read_polygon_literal(args)?)),
            "INFRAME" => Ok(Command::InFrame(read_polygon_literal(args)?)),
            "SAME" => Ok(Command::Same(read_polygon_literal(args)?)),
            _ => Err(QueryError::new(
                QueryErrorCode::UnknownCommand,
                format!("unknown command '{keyword}'"),
            )),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Area(_) => "AREA",
            Command::Max(_) => "MAX",
            Command::Min(_) => "MIN",
            Command::Count(_) => "COUNT",
            Command::LessArea(_) => "LESSAREA",
            Command::InFrame(_) => "INFRAME",
            Command::Same(_) => "SAME",
        }
    }
}

/// Result value of a command; rendering is separate so precision is configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Answer {
    Area(f64),
    Count(usize),
    Bool(bool),
}

impl Answer {
    /// Render with `precision` fractional digits for areas.
    pub fn render(&self, precision: usize) -> String {
        match *self {
            Answer::Area(a) => format!("{a:.precision$}"),
            Answer::Count(n) => n.to_string(),
            Answer::Bool(true) => "<TRUE>".to_string(),
            Answer::Bool(false) => "<FALSE>".to_string(),
        }
    }
}

/// Default rendering: `SessionCfg::default().precision` digits for areas.
/// Sessions render through `Answer::render` with their own precision.
impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SessionCfg::default().precision))
    }
}
