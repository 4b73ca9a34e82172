//! Predicates, search and sorting
//!
//! These work element by element. On a chunked array they see the flattened
//! element sequence, and `filter`/`sort` return flat arrays.

use crate::types::{Column, Element, TypedArray};

impl TypedArray {
    /// Positions of the elements matching `predicate`, ascending, as an int array
    pub fn argwhere(&self, predicate: impl Fn(&Element) -> bool) -> TypedArray {
        let positions = self
            .elements()
            .enumerate()
            .filter(|(_, e)| predicate(e))
            .map(|(i, _)| i as i64)
            .collect::<Vec<_>>();
        TypedArray::from_column(Column::Int(positions))
    }

    /// Positions of the elements exactly equal to `value` (same dtype and value)
    pub fn search(&self, value: impl Into<Element>) -> TypedArray {
        let value = value.into();
        self.argwhere(|e| *e == value)
    }

    /// Elements matching `predicate`, in their original order
    pub fn filter(&self, predicate: impl Fn(&Element) -> bool) -> TypedArray {
        let mut column = Column::empty(self.dtype());
        for element in self.elements().filter(|e| predicate(e)) {
            let pushed = column.push(element);
            debug_assert!(pushed, "element dtype differs from its column");
        }
        TypedArray::from_column(column)
    }

    /// Elements in ascending natural order of the dtype
    pub fn sort(&self) -> TypedArray {
        TypedArray::from_column(self.column().sorted())
    }
}
