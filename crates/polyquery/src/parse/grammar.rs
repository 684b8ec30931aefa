use tracing::{debug, info};

use super::cursor::Cursor;
use crate::error::{ParseError, ParseErrorCode};
use crate::geom2::{Point, Polygon, MIN_VERTICES};

/// Upper bound on the up-front vertex allocation; larger counts grow on demand.
const PREALLOC_VERTICES: usize = 1024;

fn expect_char(cur: &mut Cursor<'_>, want: char) -> Result<(), ParseError> {
    let at = cur.offset();
    match cur.next_char() {
        Some(c) if c == want => Ok(()),
        Some(c) => Err(ParseError::new(
            ParseErrorCode::BadPoint,
            at,
            format!("expected '{want}', found '{c}'"),
        )),
        None => Err(ParseError::new(
            ParseErrorCode::BadPoint,
            at,
            format!("expected '{want}', found end of input"),
        )),
    }
}

fn coordinate(cur: &mut Cursor<'_>) -> Result<i32, ParseError> {
    let at = cur.offset();
    cur.read_i32().ok_or_else(|| {
        ParseError::new(ParseErrorCode::BadPoint, at, "expected an i32 coordinate")
    })
}

/// Read `(x;y)`.
pub fn read_point(cur: &mut Cursor<'_>) -> Result<Point, ParseError> {
    expect_char(cur, '(')?;
    let x = coordinate(cur)?;
    expect_char(cur, ';')?;
    let y = coordinate(cur)?;
    expect_char(cur, ')')?;
    Ok(Point::new(x, y))
}

/// Read `N (x1;y1) … (xN;yN)`.
///
/// Checks in order: count present, count >= 3, all N points well-formed, no
/// duplicate vertex. On failure nothing is returned; the cursor stays where the
/// failure was detected so the caller decides how to resynchronise.
pub fn read_polygon(cur: &mut Cursor<'_>) -> Result<Polygon, ParseError> {
    cur.skip_ws();
    let start = cur.offset();
    let n = cur.read_usize().ok_or_else(|| {
        ParseError::new(
            ParseErrorCode::MissingVertexCount,
            start,
            "expected a vertex count",
        )
    })?;
    if n < MIN_VERTICES {
        return Err(ParseError::new(
            ParseErrorCode::TooFewVertices,
            start,
            format!("vertex count {n} is below {MIN_VERTICES}"),
        ));
    }
    let mut points = Vec::with_capacity(n.min(PREALLOC_VERTICES));
    for _ in 0..n {
        points.push(read_point(cur)?);
    }
    Polygon::new(points).map_err(|e| ParseError { offset: start, ..e })
}

/// Fail unless only whitespace remains before the cursor's limit.
pub fn expect_end(cur: &mut Cursor<'_>) -> Result<(), ParseError> {
    cur.skip_ws();
    if cur.is_at_end() {
        return Ok(());
    }
    let at = cur.offset();
    let tail: String = cur.rest().chars().take(16).collect();
    Err(ParseError::new(
        ParseErrorCode::TrailingInput,
        at,
        format!("unexpected trailing input '{tail}'"),
    ))
}

/// A polygon followed by nothing but whitespace (command arguments, `FromStr`).
pub fn read_polygon_literal(cur: &mut Cursor<'_>) -> Result<Polygon, ParseError> {
    let poly = read_polygon(cur)?;
    expect_end(cur)?;
    Ok(poly)
}

/// Result of a best-effort bulk load.
#[derive(Clone, Debug, Default)]
pub struct Loaded {
    pub polygons: Vec<Polygon>,
    /// Number of malformed units dropped.
    pub skipped: usize,
}

/// Read every polygon from `text`, dropping malformed ones.
///
/// The input is one token stream: a polygon may span line breaks. When a unit
/// fails, the cursor advances through the next line terminator after the
/// failure point and reading resumes there. Loading never fails as a whole.
pub fn load_polygons(text: &str) -> Loaded {
    let mut cur = Cursor::new(text);
    let mut out = Loaded::default();
    loop {
        cur.skip_ws();
        if cur.is_at_end() {
            break;
        }
        match read_polygon(&mut cur) {
            Ok(poly) => out.polygons.push(poly),
            Err(e) => {
                debug!(offset = e.offset, code = ?e.code, reason = %e.message, "skip_malformed");
                out.skipped += 1;
                cur.skip_line();
            }
        }
    }
    info!(
        polygons = out.polygons.len(),
        skipped = out.skipped,
        "load_polygons"
    );
    out
}
