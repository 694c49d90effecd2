//! Corner↔point lookup index.
//!
//! A [`Corner`] is a grid-cell hash used as a spatial key; a [`Point`] is a
//! labeled original (undiscretized) coordinate vector. The [`Lookup`] index
//! is built once from a corner→points corpus and serves bidirectional
//! corner↔point queries afterwards.
//!
//! ## Corpus format
//!
//! One record per line, corner coordinates and point records separated by a
//! tab, point records separated by pipes:
//!
//! ```text
//! coord_1,coord_2,...,coord_n<TAB>id,v_1,...,v_k[|id,v_1,...,v_k|...]
//! ```
//!
//! A malformed line aborts the whole load; no partial index is returned.

mod corpus;
mod lookup;
mod point;

pub use lookup::{Lookup, LookupConfig};
pub use point::{Corner, Point};
