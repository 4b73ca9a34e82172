//! Type conversion, reshaping and splitting

use crate::convert::recast;
use crate::error::{ArrayError, Result};
use crate::types::{DType, Layout, TypedArray};
use log::debug;

impl TypedArray {
    /// Copy with every element re-coerced to `dtype`; the layout is kept
    pub fn astype(&self, dtype: DType) -> TypedArray {
        debug!("astype {} -> {} over {} elements", self.dtype(), dtype, self.size());
        TypedArray::from_parts(recast(self.column(), dtype), self.layout().clone())
    }

    /// Partition the flattened elements into consecutive rows of the listed sizes
    ///
    /// The product of `sizes` must equal the element count. Rows are cut by
    /// the sizes themselves, so when they sum to less than the count the
    /// trailing elements are dropped, and when they sum to more the last rows
    /// come up short.
    pub fn reshape(&self, sizes: &[usize]) -> Result<TypedArray> {
        let size = self.size();
        let product = sizes
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n));
        if product != Some(size) {
            return Err(ArrayError::ReshapeSizeMismatch {
                size,
                shape: sizes.to_vec(),
            });
        }

        let mut rows = Vec::with_capacity(sizes.len());
        let mut start = 0usize;
        for &n in sizes {
            let end = start.saturating_add(n).min(size);
            rows.push(end - start);
            start = end;
        }
        if start < size {
            debug!("reshape {:?} drops {} trailing elements", sizes, size - start);
        }

        Ok(TypedArray::from_parts(
            self.column().slice(0..start),
            Layout::Chunked(rows),
        ))
    }

    /// All elements as a flat array
    pub fn flatten(&self) -> TypedArray {
        TypedArray::from_column(self.column().clone())
    }

    /// Split the items into chunks of `ceil(len / parts)`
    ///
    /// Only non-empty chunks are returned, so fewer than `parts` arrays come
    /// back when the length does not fill them; an empty array yields none.
    pub fn split(&self, parts: usize) -> Result<Vec<TypedArray>> {
        if parts == 0 {
            return Err(ArrayError::InvalidSplit(parts));
        }
        let len = self.len();
        if len == 0 {
            return Ok(Vec::new());
        }
        let chunk = len.div_ceil(parts);
        debug!("split {} items into chunks of {}", len, chunk);

        let items: Vec<usize> = (0..len).collect();
        Ok(items.chunks(chunk).map(|c| self.gather(c)).collect())
    }
}
