//! Command execution over a read-only polygon collection.

use super::types::{Answer, AreaParam, Command, Measure, VertexFilter};
use crate::error::QueryError;
use crate::geom2::{first_extremum, Extremum, Frame, Polygon, ShapeKey};

fn area_sum(polys: &[Polygon], filter: VertexFilter) -> f64 {
    polys
        .iter()
        .filter(|p| filter.matches(p))
        .map(Polygon::area)
        .sum()
}

fn extremum(polys: &[Polygon], which: Extremum, measure: Measure) -> Result<Answer, QueryError> {
    let what = match which {
        Extremum::Max => "MAX",
        Extremum::Min => "MIN",
    };
    match measure {
        Measure::Area => first_extremum(polys, which, Polygon::twice_area)
            .map(|p| Answer::Area(p.area()))
            .ok_or_else(|| QueryError::empty(what)),
        Measure::Vertexes => first_extremum(polys, which, Polygon::vertex_count)
            .map(|p| Answer::Count(p.vertex_count()))
            .ok_or_else(|| QueryError::empty(what)),
    }
}

impl Command {
    /// Run against `polys`. Never mutates the collection.
    pub fn execute(&self, polys: &[Polygon]) -> Result<Answer, QueryError> {
        match self {
            Command::Area(AreaParam::Sum(filter)) => Ok(Answer::Area(area_sum(polys, *filter))),
            Command::Area(AreaParam::Mean) => {
                if polys.is_empty() {
                    return Err(QueryError::empty("MEAN"));
                }
                let total: f64 = polys.iter().map(Polygon::area).sum();
                Ok(Answer::Area(total / polys.len() as f64))
            }
            Command::Max(measure) => extremum(polys, Extremum::Max, *measure),
            Command::Min(measure) => extremum(polys, Extremum::Min, *measure),
            Command::Count(filter) => Ok(Answer::Count(
                polys.iter().filter(|p| filter.matches(p)).count(),
            )),
            Command::LessArea(reference) => {
                let bound = reference.twice_area();
                Ok(Answer::Count(
                    polys.iter().filter(|p| p.twice_area() < bound).count(),
                ))
            }
            Command::InFrame(poly) => {
                let frame = Frame::of_polygons(polys).ok_or_else(|| QueryError::empty("INFRAME"))?;
                Ok(Answer::Bool(frame.contains(poly)))
            }
            Command::Same(pattern) => {
                let key = ShapeKey::of(pattern);
                Ok(Answer::Count(polys.iter().filter(|p| key.matches(p)).count()))
            }
        }
    }
}
