//! Error types for parsing and command execution.
//!
//! Two layers, each a code enum plus a human message:
//! - `ParseError`: a malformed point/polygon unit (carries the byte offset
//!   where the failure was detected).
//! - `QueryError`: a command that cannot produce an answer. The dispatcher
//!   renders every `QueryError` the same way, so the code only matters for
//!   logs and tests.

/// What went wrong while reading a point or polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorCode {
    MissingVertexCount,
    TooFewVertices,
    BadPoint,
    DuplicateVertex,
    TrailingInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub code: ParseErrorCode,
    /// Byte offset into the input where the failure was detected.
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(code: ParseErrorCode, offset: usize, message: impl Into<String>) -> Self {
        Self {
            code,
            offset,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at {}: {}", self.code, self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Failure classes of a query command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryErrorCode {
    /// Polygon literal in the command line did not parse.
    Malformed,
    /// Aggregate that needs at least one polygon (MEAN, MAX, MIN, INFRAME).
    EmptyCollection,
    /// Unknown sub-parameter or a vertex filter below 3.
    InvalidParameter,
    /// Extra tokens after a polygon literal.
    TrailingInput,
    UnknownCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub code: QueryErrorCode,
    pub message: String,
}

impl QueryError {
    #[must_use]
    pub fn new(code: QueryErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn empty(what: &str) -> Self {
        Self::new(
            QueryErrorCode::EmptyCollection,
            format!("no polygons for {what}"),
        )
    }

    #[must_use]
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::new(QueryErrorCode::InvalidParameter, message)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for QueryError {}

impl From<ParseError> for QueryError {
    fn from(value: ParseError) -> Self {
        let code = match value.code {
            ParseErrorCode::TrailingInput => QueryErrorCode::TrailingInput,
            _ => QueryErrorCode::Malformed,
        };
        Self::new(code, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_maps_to_query_code() {
        let trailing = ParseError::new(ParseErrorCode::TrailingInput, 7, "extra");
        assert_eq!(
            QueryError::from(trailing).code,
            QueryErrorCode::TrailingInput
        );
        let dup = ParseError::new(ParseErrorCode::DuplicateVertex, 3, "dup");
        let q = QueryError::from(dup);
        assert_eq!(q.code, QueryErrorCode::Malformed);
        assert!(q.message.contains("DuplicateVertex at 3"));
    }
}
