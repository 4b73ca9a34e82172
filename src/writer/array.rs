//! Serde encoding of arrays

use crate::types::{Column, Layout, TypedArray};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::ops::Range;

/// Contiguous run of a column, encoded as a sequence
struct Run<'a> {
    column: &'a Column,
    range: Range<usize>,
}

impl Serialize for Run<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let range = self.range.clone();
        match self.column {
            Column::Int(v) => v[range].serialize(serializer),
            Column::Float(v) => v[range].serialize(serializer),
            Column::Str(v) => v[range].serialize(serializer),
            Column::Bool(v) => v[range].serialize(serializer),
        }
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Run {
            column: self,
            range: 0..self.len(),
        }
        .serialize(serializer)
    }
}

impl Serialize for TypedArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.layout() {
            Layout::Flat => self.column().serialize(serializer),
            Layout::Chunked(_) => {
                let mut seq = serializer.serialize_seq(Some(self.len()))?;
                for range in self.item_ranges() {
                    seq.serialize_element(&Run {
                        column: self.column(),
                        range,
                    })?;
                }
                seq.end()
            }
        }
    }
}
