//! Operations on typed arrays
//!
//! Each submodule adds an `impl TypedArray` block. All of them return new
//! arrays and leave the receiver untouched.

mod search;
mod select;
mod shape;
