//! Parsing of textual index keys

mod index;

pub use index::{Index, slice_positions};
