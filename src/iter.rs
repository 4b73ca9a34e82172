//! Restartable cursor over the items of an array

use crate::error::{ArrayError, Result};
use crate::types::{Item, TypedArray};

/// Cursor over a snapshot of an array's items
///
/// The snapshot is taken when the iterator is created, so later changes to
/// the source do not show up. Besides the cursor API it is a regular
/// [`Iterator`] that advances the same cursor.
#[derive(Debug, Clone)]
pub struct ArrayIterator {
    snapshot: TypedArray,
    position: usize,
}

impl ArrayIterator {
    pub fn new(array: TypedArray) -> Self {
        Self {
            snapshot: array,
            position: 0,
        }
    }

    /// Move the cursor back to the first item
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// Item under the cursor
    pub fn current(&self) -> Result<Item> {
        if !self.is_valid() {
            return Err(ArrayError::IteratorExhausted {
                position: self.position,
                len: self.snapshot.len(),
            });
        }
        self.snapshot.item(self.position)
    }

    /// Cursor position
    pub fn key(&self) -> usize {
        self.position
    }

    /// Step forward; no-op once past the end
    pub fn advance(&mut self) {
        if self.position < self.snapshot.len() {
            self.position += 1;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.position < self.snapshot.len()
    }

    pub fn has_next(&self) -> bool {
        self.is_valid()
    }
}

impl Iterator for ArrayIterator {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        let item = self.current().ok()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArrayIterator {}

impl TypedArray {
    /// Fresh iterator over a snapshot of the items
    pub fn iterate(&self) -> ArrayIterator {
        ArrayIterator::new(self.clone())
    }

    /// Same as [`iterate`](Self::iterate)
    pub fn nditer(&self) -> ArrayIterator {
        self.iterate()
    }

    /// Call `callback` on every item in order
    pub fn each(&self, mut callback: impl FnMut(Item)) {
        for item in self.iterate() {
            callback(item);
        }
    }
}

impl IntoIterator for &TypedArray {
    type Item = Item;
    type IntoIter = ArrayIterator;

    fn into_iter(self) -> ArrayIterator {
        self.iterate()
    }
}
