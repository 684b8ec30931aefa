//! Line-oriented command dispatcher.
//!
//! Each input line holds at most one command: a keyword, then its arguments.
//! Whatever the outcome, the rest of the line is dropped before the next
//! keyword is read, which is the only recovery step after a failure.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::types::Command;
use crate::error::QueryError;
use crate::geom2::Polygon;
use crate::parse::{load_polygons, Cursor};

/// Output configuration.
#[derive(Clone, Copy, Debug)]
pub struct SessionCfg {
    /// Fractional digits printed for areas.
    pub precision: usize,
    /// Line printed for any rejected command.
    pub invalid_token: &'static str,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            precision: 1,
            invalid_token: "<INVALID COMMAND>",
        }
    }
}

/// Outcome counters of one `Session::run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub answered: usize,
    pub rejected: usize,
}

/// Owns the loaded collection and answers commands against it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    polygons: Vec<Polygon>,
    cfg: SessionCfg,
}

impl Session {
    pub fn new(polygons: Vec<Polygon>, cfg: SessionCfg) -> Self {
        Self { polygons, cfg }
    }

    /// Best-effort load of `text` (see `parse::load_polygons`).
    pub fn from_text(text: &str, cfg: SessionCfg) -> Self {
        Self::new(load_polygons(text).polygons, cfg)
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Execute the command on `line`. `None` if the line holds no keyword.
    pub fn execute_line(&self, line: &str) -> Option<Result<String, QueryError>> {
        let mut cur = Cursor::new(line);
        let keyword = cur.word()?;
        let mut args = cur.take_line();
        let res = Command::parse(keyword, &mut args)
            .and_then(|cmd| cmd.execute(&self.polygons))
            .map(|answer| answer.render(self.cfg.precision));
        match &res {
            Ok(text) => debug!(keyword, answer = %text, "command"),
            Err(e) => debug!(keyword, code = ?e.code, reason = %e.message, "command_rejected"),
        }
        Some(res)
    }

    /// Answer every command read from `input`, one output line each.
    ///
    /// Output is flushed after every line so interactive callers see answers
    /// before the next command is read. Only I/O errors end the loop early.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<Tally> {
        let mut tally = Tally::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match self.execute_line(&line) {
                None => continue,
                Some(Ok(text)) => {
                    tally.answered += 1;
                    writeln!(out, "{text}")?;
                }
                Some(Err(_)) => {
                    tally.rejected += 1;
                    writeln!(out, "{}", self.cfg.invalid_token)?;
                }
            }
            out.flush()?;
        }
        Ok(tally)
    }
}
