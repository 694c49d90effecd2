//! gridlsh: grid-corner locality sensitive hashing.
//!
//! An approximate spatial index over high-dimensional vectors. Continuous
//! vectors are snapped onto a grid at a configurable resolution; the integer
//! coordinates of the cell a vector lands in — its **corner** — become its
//! hash identity, and a bipartite corner↔point index answers neighborhood
//! queries without exhaustive comparison.
//!
//! - `hash/`: dense and sparse cell identities with a variable level of
//!   detail and one shared equality/identity-code algorithm
//! - `hasher/`: discretization strategies (axis-aligned and simplex-lattice
//!   snapping)
//! - `index/`: the corner↔point lookup index, loaded from a simple text
//!   corpus
//! - `random/`: seeded, coordinate-addressable random matrices and vectors
//!   for reproducible projections
//!
//! # Why grids?
//!
//! LSH wants nearby points to collide. Snapping to a grid does exactly that:
//! two vectors within the same cell of side `w` agree on every discretized
//! coordinate, so their corners — and therefore their hashes — are equal.
//! Coarsening is a bit mask rather than a rehash: clearing the low `k` bits
//! of every coordinate merges `2^k` cells per axis into one, so one stored
//! index serves many granularities.
//!
//! ## When a grid beats a hyperplane family
//!
//! - Queries need *tunable* granularity after indexing (level of detail)
//! - The discretized coordinates themselves matter (diagnostics, dumps,
//!   spatial joins), not just bucket membership
//! - Data is low- to mid-dimensional or already projected; for raw
//!   high-dimensional data, project first — grid cells in hundreds of
//!   dimensions are almost all empty
//!
//! # Example
//!
//! ```rust
//! use gridlsh::{Corner, Lookup, LookupConfig};
//! use std::io::Cursor;
//!
//! let corpus = "1,2,3\tp1,0.1,0.2,0.3|p2,0.4,0.5,0.6\n4,5,6\tp3,0.7,0.8,0.9";
//! let lookup = Lookup::load(Cursor::new(corpus), LookupConfig::all()).unwrap();
//!
//! let corners = lookup.matching_corners("p3").unwrap();
//! assert!(corners.contains(&Corner::from_coordinates(vec![4, 5, 6])));
//! ```
//!
//! # References
//!
//! - Indyk & Motwani (1998). "Approximate nearest neighbors: towards removing
//!   the curse of dimensionality."
//! - Datar, Immorlica, Indyk & Mirrokni (2004). "Locality-sensitive hashing
//!   scheme based on p-stable distributions."
//! - Andoni & Indyk (2008). "Near-optimal hashing algorithms for approximate
//!   nearest neighbor in high dimensions."

pub mod error;
pub mod hash;
pub mod hasher;
pub mod index;
pub mod random;

pub use error::{GridError, Result};
pub use hash::{DenseHash, GridHash, MaskedEntries, SparseHash};
pub use hasher::{hasher_for, Hasher, OrthonormalHasher, VertexTransitiveHasher};
pub use index::{Corner, Lookup, LookupConfig, Point};
pub use random::{DenseMatrix, RandomDistribution, RandomMatrix, RandomVector};
