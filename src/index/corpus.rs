//! Corner→points corpus line parsing.

use crate::error::{GridError, Result};
use crate::index::Point;

fn malformed(line: usize, reason: impl Into<String>) -> GridError {
    GridError::Load {
        line,
        reason: reason.into(),
    }
}

/// Parse one corpus record: `coords<TAB>point[|point...]`.
///
/// `line_number` is 1-based and only used for error reporting.
pub(crate) fn parse_line(line: &str, line_number: usize) -> Result<(Vec<i64>, Vec<Point>)> {
    let (coords_part, points_part) = line
        .split_once('\t')
        .ok_or_else(|| malformed(line_number, "missing tab between corner and points"))?;

    let coordinates = parse_coordinates(coords_part, line_number)?;
    if coordinates.is_empty() {
        return Err(malformed(line_number, "empty corner coordinate list"));
    }

    // split always yields at least one record; an empty one fails in
    // parse_point, so "one or more points" holds.
    let points = points_part
        .split('|')
        .map(|record| parse_point(record, line_number))
        .collect::<Result<Vec<Point>>>()?;

    Ok((coordinates, points))
}

fn parse_coordinates(part: &str, line_number: usize) -> Result<Vec<i64>> {
    part.split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim()
                .parse::<i64>()
                .map_err(|e| malformed(line_number, format!("bad coordinate '{s}': {e}")))
        })
        .collect()
}

fn parse_point(record: &str, line_number: usize) -> Result<Point> {
    let mut fields = record.split(',');
    let id = fields
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| malformed(line_number, "point record without an id"))?;

    let values = fields
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| malformed(line_number, format!("bad point value '{s}': {e}")))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Point::new(id, values))
}
