//! The corner↔point lookup index.

use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Write};

use crate::error::{GridError, Result};
use crate::index::corpus;
use crate::index::{Corner, Point};

/// Which of the six containers a [`Lookup`] materializes.
///
/// Each container costs memory proportional to the corpus; enable only what
/// the queries at hand need. [`LookupConfig::all`] turns everything on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookupConfig {
    pub points: bool,
    pub corners: bool,
    pub ids: bool,
    pub id_to_point: bool,
    pub corner_to_points: bool,
    pub point_to_corners: bool,
}

impl LookupConfig {
    /// Materialize every container.
    pub fn all() -> Self {
        LookupConfig {
            points: true,
            corners: true,
            ids: true,
            id_to_point: true,
            corner_to_points: true,
            point_to_corners: true,
        }
    }

    /// Materialize nothing; callers switch on the containers they need.
    pub fn none() -> Self {
        LookupConfig {
            points: false,
            corners: false,
            ids: false,
            id_to_point: false,
            corner_to_points: false,
            point_to_corners: false,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig::all()
    }
}

/// Bidirectional corner↔point associations built from one corpus load.
///
/// The index is built once and never mutated afterwards, so it is safe for
/// unlimited concurrent read-only queries. Containers that were not enabled
/// at load time stay `None`.
#[derive(Debug)]
pub struct Lookup {
    config: LookupConfig,
    points: Option<HashSet<Point>>,
    corners: Option<HashSet<Corner>>,
    ids: Option<HashSet<String>>,
    id_to_point: Option<HashMap<String, Point>>,
    corner_to_points: Option<HashMap<Corner, HashSet<Point>>>,
    point_to_corners: Option<HashMap<Point, HashSet<Corner>>>,
}

impl Lookup {
    /// Read a corner→points corpus and build every enabled container.
    ///
    /// Any malformed line aborts the whole load with its 1-based line
    /// number; no partial index is returned.
    pub fn load<R: BufRead>(reader: R, config: LookupConfig) -> Result<Self> {
        let mut lookup = Lookup {
            config,
            points: config.points.then(HashSet::new),
            corners: config.corners.then(HashSet::new),
            ids: config.ids.then(HashSet::new),
            id_to_point: config.id_to_point.then(HashMap::new),
            corner_to_points: config.corner_to_points.then(HashMap::new),
            point_to_corners: config.point_to_corners.then(HashMap::new),
        };

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| GridError::Load {
                line: line_number,
                reason: format!("read failed: {e}"),
            })?;
            if line.is_empty() {
                continue;
            }
            let (coordinates, points) = corpus::parse_line(&line, line_number)?;
            lookup.insert_record(Corner::from_coordinates(coordinates), points);
        }

        Ok(lookup)
    }

    fn insert_record(&mut self, corner: Corner, points: Vec<Point>) {
        if let Some(corners) = &mut self.corners {
            corners.insert(corner.clone());
        }
        for point in points {
            if let Some(ids) = &mut self.ids {
                ids.insert(point.id().to_string());
            }
            if let Some(id_to_point) = &mut self.id_to_point {
                id_to_point.insert(point.id().to_string(), point.clone());
            }
            if let Some(corner_to_points) = &mut self.corner_to_points {
                corner_to_points
                    .entry(corner.clone())
                    .or_default()
                    .insert(point.clone());
            }
            if let Some(point_to_corners) = &mut self.point_to_corners {
                point_to_corners
                    .entry(point.clone())
                    .or_default()
                    .insert(corner.clone());
            }
            if let Some(all_points) = &mut self.points {
                all_points.insert(point);
            }
        }
    }

    /// The container configuration this index was built with.
    pub fn config(&self) -> LookupConfig {
        self.config
    }

    /// All loaded points, if that container was enabled.
    pub fn points(&self) -> Option<&HashSet<Point>> {
        self.points.as_ref()
    }

    /// All loaded corners, if that container was enabled.
    pub fn corners(&self) -> Option<&HashSet<Corner>> {
        self.corners.as_ref()
    }

    /// All loaded point ids, if that container was enabled.
    pub fn ids(&self) -> Option<&HashSet<String>> {
        self.ids.as_ref()
    }

    /// The point registered under `id`, if the id→point map was enabled.
    pub fn point_for_id(&self, id: &str) -> Option<&Point> {
        self.id_to_point.as_ref()?.get(id)
    }

    /// The points associated with `corner`, if the corner→points map was
    /// enabled.
    pub fn points_at(&self, corner: &Corner) -> Option<&HashSet<Point>> {
        self.corner_to_points.as_ref()?.get(corner)
    }

    /// The corners associated with `point`, if the point→corners map was
    /// enabled.
    pub fn corners_of(&self, point: &Point) -> Option<&HashSet<Corner>> {
        self.point_to_corners.as_ref()?.get(point)
    }

    /// Every corner whose point set contains a point with the given id;
    /// empty for an id absent from the corpus.
    ///
    /// When the id→point and point→corners maps were materialized the
    /// reverse map answers in O(1) amortized; otherwise every corner's point
    /// set is scanned. With neither combination available the query is
    /// unsupported.
    pub fn matching_corners(&self, id: &str) -> Result<HashSet<Corner>> {
        if let (Some(id_to_point), Some(point_to_corners)) =
            (&self.id_to_point, &self.point_to_corners)
        {
            return Ok(id_to_point
                .get(id)
                .and_then(|point| point_to_corners.get(point))
                .cloned()
                .unwrap_or_default());
        }

        if let (Some(corners), Some(corner_to_points)) = (&self.corners, &self.corner_to_points) {
            let mut found = HashSet::new();
            for corner in corners {
                let has_id = corner_to_points
                    .get(corner)
                    .is_some_and(|points| points.iter().any(|p| p.id() == id));
                if has_id {
                    found.insert(corner.clone());
                }
            }
            return Ok(found);
        }

        Err(GridError::Unsupported(
            "matching_corners needs id->point and point->corners, or corners and corner->points",
        ))
    }

    /// Dump `corner<TAB>point-count` lines for every corner. Informational
    /// only, not a stable format.
    pub fn dump_corners<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(corner_to_points) = &self.corner_to_points {
            for (corner, points) in corner_to_points {
                writeln!(out, "{corner}\t{}", points.len())?;
            }
        } else if let Some(corners) = &self.corners {
            for corner in corners {
                writeln!(out, "{corner}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CORPUS: &str = "1,2,3\tp1,0.1,0.2,0.3|p2,0.4,0.5,0.6\n4,5,6\tp3,0.7,0.8,0.9";

    fn load_all(corpus: &str) -> Lookup {
        Lookup::load(Cursor::new(corpus), LookupConfig::all()).expect("load failed")
    }

    #[test]
    fn builds_all_containers() {
        let lookup = load_all(CORPUS);
        assert_eq!(lookup.points().unwrap().len(), 3);
        assert_eq!(lookup.corners().unwrap().len(), 2);
        assert_eq!(lookup.ids().unwrap().len(), 3);
        assert_eq!(lookup.point_for_id("p2").unwrap().values(), &[0.4, 0.5, 0.6]);

        let corner = Corner::from_coordinates(vec![1, 2, 3]);
        let at_corner = lookup.points_at(&corner).unwrap();
        assert_eq!(at_corner.len(), 2);
        assert!(at_corner.contains(&Point::new("p1", vec![])));
        assert!(at_corner.contains(&Point::new("p2", vec![])));
    }

    #[test]
    fn disabled_containers_stay_empty() {
        let config = LookupConfig {
            corners: true,
            corner_to_points: true,
            ..LookupConfig::none()
        };
        let lookup = Lookup::load(Cursor::new(CORPUS), config).unwrap();
        assert!(lookup.points().is_none());
        assert!(lookup.ids().is_none());
        assert!(lookup.point_for_id("p1").is_none());
        assert_eq!(lookup.corners().unwrap().len(), 2);
    }

    #[test]
    fn matching_corners_uses_the_scan_path() {
        let config = LookupConfig {
            corners: true,
            corner_to_points: true,
            ..LookupConfig::none()
        };
        let lookup = Lookup::load(Cursor::new(CORPUS), config).unwrap();
        let found = lookup.matching_corners("p3").unwrap();
        assert_eq!(found.len(), 1);
        assert!(found.contains(&Corner::from_coordinates(vec![4, 5, 6])));
    }

    #[test]
    fn matching_corners_agrees_across_paths() {
        let lookup = load_all(CORPUS);
        let scan_only = Lookup::load(
            Cursor::new(CORPUS),
            LookupConfig {
                corners: true,
                corner_to_points: true,
                ..LookupConfig::none()
            },
        )
        .unwrap();

        for id in ["p1", "p2", "p3", "missing"] {
            assert_eq!(
                lookup.matching_corners(id).unwrap(),
                scan_only.matching_corners(id).unwrap(),
                "paths disagree for {id}"
            );
        }
    }

    #[test]
    fn matching_corners_without_containers_is_unsupported() {
        let config = LookupConfig {
            points: true,
            ..LookupConfig::none()
        };
        let lookup = Lookup::load(Cursor::new(CORPUS), config).unwrap();
        assert!(matches!(
            lookup.matching_corners("p1"),
            Err(GridError::Unsupported(_))
        ));
    }

    #[test]
    fn malformed_line_aborts_the_load() {
        let corpus = "1,2,3\tp1,0.1\nnot a record\n4,5,6\tp3,0.7";
        let err = Lookup::load(Cursor::new(corpus), LookupConfig::all()).unwrap_err();
        assert!(matches!(err, GridError::Load { line: 2, .. }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lookup = load_all("1,2\tp1,0.5\n\n3,4\tp2,0.6");
        assert_eq!(lookup.corners().unwrap().len(), 2);
    }

    #[test]
    fn shared_point_across_corners_is_one_point() {
        let lookup = load_all("1,2\tp1,0.5\n3,4\tp1,0.5");
        assert_eq!(lookup.points().unwrap().len(), 1);
        assert_eq!(lookup.matching_corners("p1").unwrap().len(), 2);
    }

    #[test]
    fn dump_lists_every_corner_with_its_count() {
        let lookup = load_all(CORPUS);
        let mut buffer = Vec::new();
        lookup.dump_corners(&mut buffer).unwrap();
        let dump = String::from_utf8(buffer).unwrap();
        let mut lines: Vec<&str> = dump.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["1,2,3\t2", "4,5,6\t1"]);
    }
}
