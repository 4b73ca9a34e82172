//! Entry points, numpy style
//!
//! ```rust
//! use numlet::{DType, np};
//!
//! let arr = np::array(vec![3, 1, 2], DType::Int)?;
//! assert_eq!(arr.sort().to_text(), "[1,2,3]");
//!
//! let mut rng = np::seeded(42);
//! let x = rng.random_int(10, None)?;
//! assert!((0..=10).contains(&x));
//! # Ok::<(), numlet::ArrayError>(())
//! ```

use crate::error::Result;
use crate::random::RandomSampler;
use crate::types::{DType, TypedArray, Value};

/// Library version, for display
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a typed array from raw input
pub fn array(raw: impl Into<Value>, dtype: DType) -> Result<TypedArray> {
    TypedArray::new(raw, dtype)
}

/// Sampler seeded from the operating system
pub fn random() -> RandomSampler {
    RandomSampler::new()
}

/// Sampler with a fixed seed
pub fn seeded(seed: u64) -> RandomSampler {
    RandomSampler::seeded(seed)
}
