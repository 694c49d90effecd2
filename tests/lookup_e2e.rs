//! End-to-end tests: corpus load, corner queries, and the full
//! discretize→index→query pipeline.

use std::collections::HashSet;
use std::io::Cursor;

use gridlsh::{
    hasher_for, Corner, DenseHash, GridError, GridHash, Lookup, LookupConfig, Point,
    RandomDistribution, RandomMatrix, SparseHash,
};

const CORPUS: &str = "1,2,3\tp1,0.1,0.2,0.3|p2,0.4,0.5,0.6\n4,5,6\tp3,0.7,0.8,0.9";

// =============================================================================
// Corpus loading
// =============================================================================

#[test]
fn load_builds_the_expected_index() {
    let lookup = Lookup::load(Cursor::new(CORPUS), LookupConfig::all()).unwrap();

    let ids: HashSet<&str> = lookup.ids().unwrap().iter().map(String::as_str).collect();
    assert_eq!(ids, HashSet::from(["p1", "p2", "p3"]));

    let expected: HashSet<Corner> = HashSet::from([
        Corner::from_coordinates(vec![1, 2, 3]),
        Corner::from_coordinates(vec![4, 5, 6]),
    ]);
    assert_eq!(lookup.corners().unwrap(), &expected);

    let at_first = lookup
        .points_at(&Corner::from_coordinates(vec![1, 2, 3]))
        .unwrap();
    let ids_at_first: HashSet<&str> = at_first.iter().map(Point::id).collect();
    assert_eq!(ids_at_first, HashSet::from(["p1", "p2"]));

    assert_eq!(
        lookup.point_for_id("p1").unwrap().values(),
        &[0.1, 0.2, 0.3]
    );
}

#[test]
fn matching_corners_is_exact() {
    let lookup = Lookup::load(Cursor::new(CORPUS), LookupConfig::all()).unwrap();

    let found = lookup.matching_corners("p3").unwrap();
    assert_eq!(
        found,
        HashSet::from([Corner::from_coordinates(vec![4, 5, 6])])
    );

    assert!(lookup.matching_corners("nobody").unwrap().is_empty());
}

#[test]
fn malformed_corpus_yields_no_partial_index() {
    let corpus = "1,2\tp1,0.1\n4,5\tbroken";
    match Lookup::load(Cursor::new(corpus), LookupConfig::all()) {
        Err(GridError::Load { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a load failure, got {other:?}"),
    }
}

// =============================================================================
// Seeded random source
// =============================================================================

#[test]
fn seeded_source_is_reproducible() {
    let m = RandomMatrix::new(4, 4, 42, RandomDistribution::Linear);
    let first = m.value_at(1, 2).unwrap();
    let second = m.value_at(1, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(m.row(1).unwrap().get(2).unwrap(), first);
}

#[test]
fn independent_instances_agree() {
    let a = RandomMatrix::new(3, 5, 7, RandomDistribution::Gaussian);
    let b = RandomMatrix::with_cache(3, 5, 7, RandomDistribution::Gaussian);
    for row in 0..3 {
        for column in 0..5 {
            assert_eq!(
                a.value_at(row, column).unwrap(),
                b.value_at(row, column).unwrap()
            );
        }
    }
}

// =============================================================================
// Discretize → index → query
// =============================================================================

#[test]
fn nearby_vectors_collide_and_distant_ones_do_not() {
    let hasher = hasher_for("ortho", 3, 0.5).unwrap();

    let mut near_a = vec![0i64; 3];
    let mut near_b = vec![0i64; 3];
    let mut far = vec![0i64; 3];
    hasher.hash(&[0.30, 0.30, 0.30], &mut near_a).unwrap();
    hasher.hash(&[0.32, 0.28, 0.31], &mut near_b).unwrap();
    hasher.hash(&[3.0, 3.0, 3.0], &mut far).unwrap();

    let corner_a = Corner::from_coordinates(near_a);
    let corner_b = Corner::from_coordinates(near_b);
    let corner_far = Corner::from_coordinates(far);

    assert_eq!(corner_a, corner_b);
    assert_ne!(corner_a, corner_far);
}

#[test]
fn projection_feeds_the_grid() {
    // Project two similar vectors and one dissimilar vector through the same
    // reproducible Gaussian matrix, then snap the projections to the grid.
    let projector = RandomMatrix::new(4, 8, 1234, RandomDistribution::Gaussian);
    let hasher = hasher_for("orthonormal", 4, 2.0).unwrap();

    let base: Vec<f64> = (0..8).map(|i| (i as f64) / 8.0).collect();
    let close: Vec<f64> = base.iter().map(|v| v + 1e-9).collect();
    let distant: Vec<f64> = base.iter().map(|v| v * -200.0).collect();

    let mut corners = Vec::new();
    for vector in [&base, &close, &distant] {
        let projected = projector.project(vector).unwrap();
        let mut coords = vec![0i64; 4];
        hasher.hash(&projected, &mut coords).unwrap();
        corners.push(Corner::from_coordinates(coords));
    }

    assert_eq!(corners[0], corners[1]);
    assert_ne!(corners[0], corners[2]);
}

#[test]
fn coarsened_corners_merge_in_the_same_set() {
    // Two corners that differ only in their low bits become one key once the
    // level of detail is raised.
    let mut fine_a = GridHash::from(DenseHash::new(vec![8, 12]));
    let mut fine_b = GridHash::from(SparseHash::new(&[9, 13]));
    assert_ne!(fine_a, fine_b);

    fine_a.set_lod(1).unwrap();
    fine_b.set_lod(1).unwrap();

    let mut cells = HashSet::new();
    cells.insert(Corner::new(fine_a));
    assert!(cells.contains(&Corner::new(fine_b)));
}

#[test]
fn unknown_hasher_selector_fails_up_front() {
    let err = hasher_for("penrose", 2, 1.0).unwrap_err();
    assert!(matches!(err, GridError::UnknownHasher { .. }));
}
