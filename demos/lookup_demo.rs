//! Grid-Corner LSH Demo
//!
//! Snapping vectors onto a grid makes nearby points collide: they share a
//! cell, so they share the cell's corner identity. This demo walks the full
//! pipeline: discretize, index, query, and coarsen.
//!
//! ```bash
//! cargo run --example lookup_demo
//! ```

use std::collections::HashSet;
use std::io::Cursor;

use gridlsh::{
    hasher_for, Corner, DenseHash, GridHash, Lookup, LookupConfig, RandomDistribution,
    RandomMatrix, SparseHash,
};

fn main() {
    println!("Grid-Corner Locality Sensitive Hashing");
    println!("======================================\n");

    demo_discretization();
    demo_lookup();
    demo_level_of_detail();
    demo_random_projection();
}

/// Snap continuous vectors to grid corners.
fn demo_discretization() {
    println!("1. Discretization");
    println!("   --------------");
    println!("   Nearby vectors land in the same cell; their corners are equal.\n");

    let hasher = hasher_for("ortho", 3, 0.5).unwrap();
    let vectors = [
        [0.30, 0.30, 0.30],
        [0.32, 0.28, 0.31], // near the first
        [3.00, 3.00, 3.00], // far away
    ];

    for vector in &vectors {
        let mut coords = vec![0i64; 3];
        hasher.hash(vector, &mut coords).unwrap();
        println!("   {vector:?} -> corner {}", Corner::from_coordinates(coords));
    }
    println!();
}

/// Load a corner→points corpus and query it.
fn demo_lookup() {
    println!("2. Corner↔Point Lookup");
    println!("   -------------------");

    let corpus = "1,2,3\tp1,0.1,0.2,0.3|p2,0.4,0.5,0.6\n4,5,6\tp3,0.7,0.8,0.9";
    println!("   Corpus:");
    for line in corpus.lines() {
        println!("     {}", line.replace('\t', "  ->  "));
    }

    let lookup = Lookup::load(Cursor::new(corpus), LookupConfig::all()).unwrap();
    println!("\n   {} corners, {} points", lookup.corners().unwrap().len(), lookup.points().unwrap().len());

    for id in ["p1", "p3", "p9"] {
        let corners = lookup.matching_corners(id).unwrap();
        let rendered: Vec<String> = corners.iter().map(|c| format!("({c})")).collect();
        println!("   matching_corners({id:?}) = {{{}}}", rendered.join(", "));
    }
    println!();
}

/// Coarsen comparisons by masking low-order coordinate bits.
fn demo_level_of_detail() {
    println!("3. Level of Detail");
    println!("   ---------------");
    println!("   Raising the LOD clears low bits, merging neighboring cells.\n");

    let mut a = GridHash::from(DenseHash::new(vec![8, 12]));
    let mut b = GridHash::from(SparseHash::new(&[9, 13]));

    for lod in 0..3 {
        a.set_lod(lod).unwrap();
        b.set_lod(lod).unwrap();
        println!(
            "   LOD {lod}: {a} vs {b}  ->  {}",
            if a == b { "same cell" } else { "different cells" }
        );
    }

    let mut cells = HashSet::new();
    cells.insert(a);
    println!("   At LOD 2 the sparse hash finds the dense one in a set: {}\n", cells.contains(&b));
}

/// Reproducible random projections from a seeded matrix.
fn demo_random_projection() {
    println!("4. Seeded Random Projection");
    println!("   ------------------------");
    println!("   Values are pure functions of (seed, row, col): any run, any");
    println!("   access order, same projection.\n");

    let m = RandomMatrix::new(2, 4, 42, RandomDistribution::Gaussian);
    println!("   value_at(1, 2)      = {:.6}", m.value_at(1, 2).unwrap());
    println!("   value_at(1, 2)      = {:.6} (again)", m.value_at(1, 2).unwrap());
    println!("   row(1).get(2)       = {:.6}", m.row(1).unwrap().get(2).unwrap());
    println!("   column(2).get(1)    = {:.6}", m.column(2).unwrap().get(1).unwrap());

    let projected = m.project(&[0.25, 0.5, 0.75, 1.0]).unwrap();
    println!("   project([0.25, 0.5, 0.75, 1.0]) = {projected:.3?}");
}
