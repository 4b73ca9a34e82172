//! Core types for numlet arrays

mod array;
mod dtype;
mod element;
mod value;

pub use array::{ArrayView, Item, Layout, TypedArray};
pub use dtype::DType;
pub use element::{Column, Element};
pub use value::Value;
