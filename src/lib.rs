//! numlet - small dtype-tagged arrays
//!
//! A typed, ordered sequence of elements with numpy-flavoured indexing,
//! slicing, reshaping, searching and sorting, plus a uniform random sampler.
//! It is deliberately not a tensor engine: an array is one flat column of
//! elements, optionally grouped into rows by `reshape`.
//!
//! # Features
//!
//! - Four dtypes (int, float, string, bool) with lossy, total coercion
//! - Single, multi-index (`"0,2,4"`) and slice (`"1:5:2"`, `"::-1"`) selection
//! - Immutable transforms: every operation returns a new array
//! - Canonical JSON text for printing and logging
//! - Seedable sampler, no global generator
//!
//! # Example
//!
//! ```rust
//! use numlet::{DType, Element, np};
//!
//! let arr = np::array(vec![1, 2, 3, 4, 5, 6, 7], DType::Int)?;
//!
//! let even = arr.filter(|e| e.as_int().is_some_and(|v| v % 2 == 0));
//! assert_eq!(even.to_text(), "[2,4,6]");
//!
//! let window = arr.get_key("1:5:2")?.into_array().unwrap();
//! assert_eq!(window.to_text(), "[2,4]");
//!
//! let grid = arr.get_key("0:4")?.into_array().unwrap().reshape(&[2, 2])?;
//! assert_eq!(grid.to_text(), "[[1,2],[3,4]]");
//!
//! assert_eq!(arr.search(Element::Int(3)).to_text(), "[2]");
//! # Ok::<(), numlet::ArrayError>(())
//! ```

pub mod convert;
pub mod error;
pub mod iter;
pub mod np;
pub mod parser;
pub mod random;
pub mod types;

mod ops;
mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{ArrayError, Result};
pub use iter::ArrayIterator;
pub use np::{VERSION, array};
pub use parser::Index;
pub use random::RandomSampler;
pub use types::{ArrayView, Column, DType, Element, Item, Layout, TypedArray, Value};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::{ArrayType, NdarrayError};
