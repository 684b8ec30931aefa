use anyhow::{Context, Result};
use polyquery::api::{first_extremum, load_polygons, Extremum, Frame, Loaded, Polygon};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Axis-aligned bounds as written to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl From<Frame> for Bounds {
    fn from(f: Frame) -> Self {
        Self {
            min_x: f.min_x,
            max_x: f.max_x,
            min_y: f.min_y,
            max_y: f.max_y,
        }
    }
}

/// Summary of a loaded polygon file.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub polygons: usize,
    pub skipped: usize,
    pub even: usize,
    pub odd: usize,
    pub total_area: f64,
    pub mean_area: Option<f64>,
    pub min_vertices: Option<usize>,
    pub max_vertices: Option<usize>,
    pub frame: Option<Bounds>,
}

impl Summary {
    pub fn of(loaded: &Loaded) -> Self {
        let polys = &loaded.polygons;
        let even = polys.iter().filter(|p| p.has_even_vertices()).count();
        let total_area: f64 = polys.iter().map(Polygon::area).sum();
        let vertices = |which| {
            first_extremum(polys, which, Polygon::vertex_count).map(Polygon::vertex_count)
        };
        Self {
            polygons: polys.len(),
            skipped: loaded.skipped,
            even,
            odd: polys.len() - even,
            total_area,
            mean_area: (!polys.is_empty()).then(|| total_area / polys.len() as f64),
            min_vertices: vertices(Extremum::Min),
            max_vertices: vertices(Extremum::Max),
            frame: Frame::of_polygons(polys).map(Bounds::from),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "polygons: {} (skipped {})", self.polygons, self.skipped)?;
        writeln!(f, "even/odd: {}/{}", self.even, self.odd)?;
        write!(f, "area: total {:.1}", self.total_area)?;
        if let Some(mean) = self.mean_area {
            write!(f, ", mean {mean:.1}")?;
        }
        writeln!(f)?;
        if let (Some(lo), Some(hi)) = (self.min_vertices, self.max_vertices) {
            writeln!(f, "vertices: {lo}..={hi}")?;
        }
        if let Some(b) = self.frame {
            writeln!(
                f,
                "frame: x {}..={}, y {}..={}",
                b.min_x, b.max_x, b.min_y, b.max_y
            )?;
        }
        Ok(())
    }
}

/// Load `path` with the best-effort loader and summarize it.
pub fn summarize_file<P: AsRef<Path>>(path: P) -> Result<Summary> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("reading polygons from {}", path.display()))?;
    Ok(Summary::of(&load_polygons(&String::from_utf8_lossy(&bytes))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn summary_counts_and_frame() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("shapes.txt");
        fs::write(
            &file,
            "3 (0;0) (4;0) (0;3)\n4 (0;0) (0;2) (2;2) (2;0)\nbroken\n",
        )
        .unwrap();
        let s = summarize_file(&file).unwrap();
        assert_eq!((s.polygons, s.skipped, s.even, s.odd), (2, 1, 1, 1));
        assert_eq!(s.total_area, 10.0);
        assert_eq!(s.mean_area, Some(5.0));
        assert_eq!((s.min_vertices, s.max_vertices), (Some(3), Some(4)));
        assert_eq!(
            s.frame,
            Some(Bounds {
                min_x: 0,
                max_x: 4,
                min_y: 0,
                max_y: 3
            })
        );
        let json: Value = serde_json::to_value(&s).unwrap();
        assert_eq!(json["frame"]["max_x"], 4);
        assert!(s.to_string().contains("even/odd: 1/1"));
    }

    #[test]
    fn empty_file_has_no_aggregates() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("empty.txt");
        fs::write(&file, "").unwrap();
        let s = summarize_file(&file).unwrap();
        assert_eq!(s.polygons, 0);
        assert!(s.mean_area.is_none() && s.frame.is_none());
        let json: Value = serde_json::to_value(&s).unwrap();
        assert!(json["mean_area"].is_null());
    }

    #[test]
    fn latin1_line_is_skipped() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("latin1.txt");
        fs::write(&file, b"caf\xe9 (0;0)\n3 (0;0) (4;0) (0;3)\n").unwrap();
        let s = summarize_file(&file).unwrap();
        assert_eq!((s.polygons, s.skipped), (1, 1));
        assert_eq!(s.total_area, 6.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let err = summarize_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
