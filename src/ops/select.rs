//! Indexing, gathering and slicing

use crate::error::{ArrayError, Result};
use crate::parser::{Index, slice_positions};
use crate::types::{Item, Layout, TypedArray};

impl TypedArray {
    /// Select by index
    ///
    /// A single position yields that item; a multi-index or slice yields a
    /// new array with the same dtype. On a chunked array the selected items
    /// are rows.
    pub fn get(&self, index: impl Into<Index>) -> Result<Item> {
        match index.into() {
            Index::Single(i) => self.item(self.checked_position(i)?),
            Index::Multi(positions) => {
                let items = positions
                    .iter()
                    .map(|&i| self.checked_position(i))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Item::Array(self.gather(&items)))
            }
            Index::Slice { start, end, step } => {
                let items = slice_positions(self.len(), start, end, step)?;
                Ok(Item::Array(self.gather(&items)))
            }
        }
    }

    /// Parse a textual key (`"0,2,4"`, `"1:5:2"`) and select by it
    pub fn get_key(&self, key: &str) -> Result<Item> {
        self.get(Index::parse(key)?)
    }

    fn checked_position(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.len())
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// New array of the given items, in order; items must be in bounds
    pub(crate) fn gather(&self, items: &[usize]) -> TypedArray {
        let ranges = self.item_ranges();
        let positions: Vec<usize> = items.iter().flat_map(|&i| ranges[i].clone()).collect();
        let column = self.column().gather(&positions);
        let layout = match self.layout() {
            Layout::Flat => Layout::Flat,
            Layout::Chunked(_) => Layout::Chunked(items.iter().map(|&i| ranges[i].len()).collect()),
        };
        TypedArray::from_parts(column, layout)
    }
}
