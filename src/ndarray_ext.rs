//! ndarray integration for numlet arrays
//!
//! Conversions between [`TypedArray`] and ndarray's `Array1`/`Array2`.
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{Column, DType, Layout, TypedArray};
use ndarray::{Array1, Array2};

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdarrayError {
    /// DType mismatch between expected and actual
    DTypeMismatch { expected: DType, actual: DType },
    /// Rows of a chunked array differ in length
    RaggedRows { rows: Vec<usize> },
    /// Array is flat where rows were required
    ShapeMismatch { len: usize },
}

impl std::fmt::Display for NdarrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdarrayError::DTypeMismatch { expected, actual } => {
                write!(f, "DType mismatch: expected {}, got {}", expected, actual)
            }
            NdarrayError::RaggedRows { rows } => {
                write!(f, "Rows have different lengths: {:?}", rows)
            }
            NdarrayError::ShapeMismatch { len } => {
                write!(f, "Flat array of {} elements has no rows; reshape it first", len)
            }
        }
    }
}

impl std::error::Error for NdarrayError {}

/// Trait for element types that can cross into ndarray
pub trait ArrayType: Sized + Clone + 'static {
    const DTYPE: DType;

    /// Borrow the column's storage if it holds this type
    fn values(column: &Column) -> Option<&[Self]>;

    fn into_column(values: Vec<Self>) -> Column;
}

impl ArrayType for i64 {
    const DTYPE: DType = DType::Int;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Int(v) => Some(v),
            _ => None,
        }
    }

    fn into_column(values: Vec<Self>) -> Column {
        Column::Int(values)
    }
}

impl ArrayType for f64 {
    const DTYPE: DType = DType::Float;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Float(v) => Some(v),
            _ => None,
        }
    }

    fn into_column(values: Vec<Self>) -> Column {
        Column::Float(values)
    }
}

impl ArrayType for String {
    const DTYPE: DType = DType::Str;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Str(v) => Some(v),
            _ => None,
        }
    }

    fn into_column(values: Vec<Self>) -> Column {
        Column::Str(values)
    }
}

impl ArrayType for bool {
    const DTYPE: DType = DType::Bool;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Bool(v) => Some(v),
            _ => None,
        }
    }

    fn into_column(values: Vec<Self>) -> Column {
        Column::Bool(values)
    }
}

// =============================================================================
// From ndarray to numlet
// =============================================================================

impl TypedArray {
    /// Create a flat array from an ndarray vector
    pub fn from_ndarray<T: ArrayType>(arr: Array1<T>) -> Self {
        TypedArray::from_column(T::into_column(arr.to_vec()))
    }

    /// Create a chunked array with one row per matrix row
    pub fn from_ndarray2<T: ArrayType>(arr: Array2<T>) -> Self {
        let (rows, cols) = arr.dim();
        let values: Vec<T> = arr.iter().cloned().collect();
        TypedArray::from_parts(T::into_column(values), Layout::Chunked(vec![cols; rows]))
    }
}

// =============================================================================
// From numlet to ndarray
// =============================================================================

impl TypedArray {
    fn typed_values<T: ArrayType>(&self) -> Result<&[T], NdarrayError> {
        T::values(self.column()).ok_or(NdarrayError::DTypeMismatch {
            expected: T::DTYPE,
            actual: self.dtype(),
        })
    }

    /// Convert the flattened elements to an ndarray vector
    pub fn to_ndarray<T: ArrayType>(&self) -> Result<Array1<T>, NdarrayError> {
        Ok(Array1::from_vec(self.typed_values::<T>()?.to_vec()))
    }

    /// Convert a chunked array with equal row lengths to a matrix
    pub fn to_ndarray2<T: ArrayType>(&self) -> Result<Array2<T>, NdarrayError> {
        let values = self.typed_values::<T>()?;
        let rows = self
            .row_lengths()
            .ok_or(NdarrayError::ShapeMismatch { len: self.size() })?;

        let cols = rows.first().copied().unwrap_or(0);
        if rows.iter().any(|&n| n != cols) {
            return Err(NdarrayError::RaggedRows {
                rows: rows.to_vec(),
            });
        }

        Ok(Array2::from_shape_fn((rows.len(), cols), |(r, c)| {
            values[r * cols + c].clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn roundtrip_1d_f64() {
        let arr = array![1.0f64, 2.0, 3.0, 4.0];
        let expected = arr.clone();
        let typed = TypedArray::from_ndarray(arr);

        assert_eq!(typed.dtype(), DType::Float);
        assert_eq!(typed.shape(), "[4]");

        let back: Array1<f64> = typed.to_ndarray().unwrap();
        assert_eq!(expected, back);
    }

    #[test]
    fn roundtrip_2d_i64() {
        let arr = array![[1i64, 2, 3], [4, 5, 6]];
        let expected = arr.clone();
        let typed = TypedArray::from_ndarray2(arr);

        assert_eq!(typed.to_text(), "[[1,2,3],[4,5,6]]");

        let back: Array2<i64> = typed.to_ndarray2().unwrap();
        assert_eq!(expected, back);
    }

    #[test]
    fn dtype_mismatch_error() {
        let typed = TypedArray::from(vec![1i64, 2]);
        let result: Result<Array1<f64>, _> = typed.to_ndarray();
        assert!(matches!(result, Err(NdarrayError::DTypeMismatch { .. })));
    }

    #[test]
    fn ragged_rows_error() {
        let typed = TypedArray::from(vec![1i64, 2, 3, 4, 5, 6]).reshape(&[2, 3]).unwrap();
        let result: Result<Array2<i64>, _> = typed.to_ndarray2();
        assert!(matches!(result, Err(NdarrayError::RaggedRows { .. })));
    }

    #[test]
    fn flat_has_no_rows() {
        let typed = TypedArray::from(vec![true, false]);
        let result: Result<Array2<bool>, _> = typed.to_ndarray2();
        assert_eq!(result.unwrap_err(), NdarrayError::ShapeMismatch { len: 2 });
    }
}
