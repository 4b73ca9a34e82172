//! Typed array types

use super::{Column, DType, Element, Value};
use crate::convert;
use crate::error::{ArrayError, Result};
use std::ops::{Deref, Range};

/// How the elements of an array group into top-level items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every element is an item
    #[default]
    Flat,
    /// Consecutive rows of the listed lengths; the lengths sum to the element count
    Chunked(Vec<usize>),
}

/// Owned, dtype-tagged array
///
/// Every transforming operation returns a new array; nothing mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    column: Column,
    layout: Layout,
}

/// One top-level item, or the result of a selection
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// An element of a flat array
    Scalar(Element),
    /// A row of a chunked array, or a multi-index/slice result
    Array(TypedArray),
}

impl Item {
    pub fn as_scalar(&self) -> Option<&Element> {
        match self {
            Item::Scalar(e) => Some(e),
            Item::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&TypedArray> {
        match self {
            Item::Array(a) => Some(a),
            Item::Scalar(_) => None,
        }
    }

    pub fn into_array(self) -> Option<TypedArray> {
        match self {
            Item::Array(a) => Some(a),
            Item::Scalar(_) => None,
        }
    }
}

impl TypedArray {
    /// Build an array from raw input, coercing every element to `dtype`
    pub fn new(raw: impl Into<Value>, dtype: DType) -> Result<Self> {
        let (column, layout) = convert::convert(&raw.into(), dtype)?;
        Ok(Self { column, layout })
    }

    /// Flat array over an already typed column
    pub fn from_column(column: Column) -> Self {
        Self {
            column,
            layout: Layout::Flat,
        }
    }

    pub(crate) fn from_parts(column: Column, layout: Layout) -> Self {
        debug_assert!(match &layout {
            Layout::Flat => true,
            Layout::Chunked(rows) => rows.iter().sum::<usize>() == column.len(),
        });
        Self { column, layout }
    }

    pub fn dtype(&self) -> DType {
        self.column.dtype()
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_chunked(&self) -> bool {
        matches!(self.layout, Layout::Chunked(_))
    }

    /// Row lengths of a chunked array
    pub fn row_lengths(&self) -> Option<&[usize]> {
        match &self.layout {
            Layout::Flat => None,
            Layout::Chunked(rows) => Some(rows),
        }
    }

    /// Number of top-level items
    pub fn len(&self) -> usize {
        match &self.layout {
            Layout::Flat => self.column.len(),
            Layout::Chunked(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of elements, across rows
    pub fn size(&self) -> usize {
        self.column.len()
    }

    /// All elements in order, ignoring rows
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.column.iter()
    }

    /// Element range covered by each top-level item
    pub(crate) fn item_ranges(&self) -> Vec<Range<usize>> {
        match &self.layout {
            Layout::Flat => (0..self.column.len()).map(|i| i..i + 1).collect(),
            Layout::Chunked(rows) => {
                let mut start = 0;
                rows.iter()
                    .map(|&n| {
                        let range = start..start + n;
                        start += n;
                        range
                    })
                    .collect()
            }
        }
    }

    /// Item at `index`, without wrapping
    pub fn item(&self, index: usize) -> Result<Item> {
        let out_of_range = || ArrayError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len: self.len(),
        };
        match &self.layout {
            Layout::Flat => self.column.get(index).map(Item::Scalar).ok_or_else(out_of_range),
            Layout::Chunked(_) => {
                let range = self.item_ranges().into_iter().nth(index).ok_or_else(out_of_range)?;
                Ok(Item::Array(Self::from_column(self.column.slice(range))))
            }
        }
    }

    /// Independent copy of elements and dtype
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Borrowed alias of this array
    pub fn view(&self) -> ArrayView<'_> {
        ArrayView { base: self }
    }

    /// The array this one is a view of; always `None` for an owned array
    pub fn base(&self) -> Option<&TypedArray> {
        None
    }

    /// Length of the top level, as JSON text (`"[n]"`)
    pub fn shape(&self) -> String {
        format!("[{}]", self.len())
    }
}

impl From<Column> for TypedArray {
    fn from(column: Column) -> Self {
        Self::from_column(column)
    }
}

impl From<Vec<i64>> for TypedArray {
    fn from(v: Vec<i64>) -> Self {
        Self::from_column(Column::Int(v))
    }
}

impl From<Vec<f64>> for TypedArray {
    fn from(v: Vec<f64>) -> Self {
        Self::from_column(Column::Float(v))
    }
}

impl From<Vec<String>> for TypedArray {
    fn from(v: Vec<String>) -> Self {
        Self::from_column(Column::Str(v))
    }
}

impl From<Vec<&str>> for TypedArray {
    fn from(v: Vec<&str>) -> Self {
        Self::from_column(Column::Str(v.into_iter().map(String::from).collect()))
    }
}

impl From<Vec<bool>> for TypedArray {
    fn from(v: Vec<bool>) -> Self {
        Self::from_column(Column::Bool(v))
    }
}

/// Shared alias of a [`TypedArray`] (no copy)
///
/// Dereferences to the source, so every read operation is available. The
/// borrow keeps the source immutable while the view lives.
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<'a> {
    base: &'a TypedArray,
}

impl<'a> ArrayView<'a> {
    /// The array this view aliases
    pub fn base(&self) -> Option<&'a TypedArray> {
        Some(self.base)
    }

    /// Convert to an owned array
    pub fn to_owned(&self) -> TypedArray {
        self.base.clone()
    }
}

impl Deref for ArrayView<'_> {
    type Target = TypedArray;

    fn deref(&self) -> &TypedArray {
        self.base
    }
}
