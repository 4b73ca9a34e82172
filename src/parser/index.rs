//! Index selectors and their textual keys

use crate::error::{ArrayError, Result};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::str::FromStr;

#[derive(Parser)]
#[grammar = "parser/index.pest"]
struct KeyParser;

/// Selector accepted by [`TypedArray::get`](crate::TypedArray::get)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// One position, no wrapping
    Single(i64),
    /// Explicit positions, gathered in the order given
    Multi(Vec<i64>),
    /// Python-style `start:end:step`; missing parts take their defaults
    Slice {
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    },
}

impl Index {
    /// Parse a textual key such as `"0,2,4"`, `"1:5:2"` or `"::-1"`
    ///
    /// A key without `,` or `:` is unsupported. A key that has one but does
    /// not form a valid selector is malformed.
    pub fn parse(key: &str) -> Result<Self> {
        match KeyParser::parse(Rule::key, key) {
            Ok(mut pairs) => match pairs.next().and_then(|k| k.into_inner().next()) {
                Some(pair) => build(key, pair),
                None => Err(ArrayError::UnsupportedIndex(key.to_string())),
            },
            Err(err) if key.contains(',') || key.contains(':') => {
                Err(ArrayError::MalformedIndex {
                    key: key.to_string(),
                    reason: err.variant.message().into_owned(),
                })
            }
            Err(_) => Err(ArrayError::UnsupportedIndex(key.to_string())),
        }
    }

    /// Full slice, `":"`
    pub fn all() -> Self {
        Index::Slice {
            start: None,
            end: None,
            step: None,
        }
    }
}

fn build(key: &str, pair: Pair<'_, Rule>) -> Result<Index> {
    match pair.as_rule() {
        Rule::multi => pair
            .into_inner()
            .map(|p| integer(key, p.as_str()))
            .collect::<Result<Vec<_>>>()
            .map(Index::Multi),
        Rule::slice => {
            let mut parts = [None; 3];
            for (slot, bound) in parts.iter_mut().zip(pair.into_inner()) {
                *slot = match bound.into_inner().next() {
                    Some(p) => Some(integer(key, p.as_str())?),
                    None => None,
                };
            }
            let [start, end, step] = parts;
            Ok(Index::Slice { start, end, step })
        }
        _ => Err(ArrayError::UnsupportedIndex(key.to_string())),
    }
}

fn integer(key: &str, text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|e| ArrayError::MalformedIndex {
        key: key.to_string(),
        reason: format!("{:?}: {}", text, e),
    })
}

impl FromStr for Index {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self> {
        Index::parse(s)
    }
}

impl From<i64> for Index {
    fn from(i: i64) -> Self {
        Index::Single(i)
    }
}

impl From<i32> for Index {
    fn from(i: i32) -> Self {
        Index::Single(i as i64)
    }
}

impl From<usize> for Index {
    fn from(i: usize) -> Self {
        Index::Single(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<Vec<i64>> for Index {
    fn from(positions: Vec<i64>) -> Self {
        Index::Multi(positions)
    }
}

/// Positions selected by a slice over `len` items, in visiting order
///
/// Negative bounds count from the end; out-of-range bounds are clamped.
/// A negative step walks backwards with the defaults swapped.
pub fn slice_positions(
    len: usize,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
) -> Result<Vec<usize>> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(ArrayError::ZeroSliceStep);
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

    let clamp = |bound: i64| {
        if bound < 0 {
            (bound + len).max(lower)
        } else {
            bound.min(upper)
        }
    };
    let start = start.map_or(if step > 0 { lower } else { upper }, clamp);
    let end = end.map_or(if step > 0 { upper } else { lower }, clamp);

    let mut positions = Vec::new();
    let mut i = start;
    while (step > 0 && i < end) || (step < 0 && i > end) {
        positions.push(i as usize);
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(positions)
}
