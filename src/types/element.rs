//! Typed scalars and homogeneous element storage

use super::DType;
use std::fmt;
use std::ops::Range;

/// A single typed element
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Element {
    pub fn dtype(&self) -> DType {
        match self {
            Element::Int(_) => DType::Int,
            Element::Float(_) => DType::Float,
            Element::Str(_) => DType::Str,
            Element::Bool(_) => DType::Bool,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Element::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(i) => write!(f, "{}", i),
            Element::Float(x) => write!(f, "{}", x),
            Element::Str(s) => f.write_str(s),
            Element::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Element::Int(v)
    }
}

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        Element::Float(v)
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Element::Str(v.to_string())
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Element::Str(v)
    }
}

impl From<bool> for Element {
    fn from(v: bool) -> Self {
        Element::Bool(v)
    }
}

/// Homogeneous storage; the variant is the dtype
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Str(Vec<String>),
    Bool(Vec<bool>),
}

impl Column {
    /// Empty column of the given dtype
    pub fn empty(dtype: DType) -> Self {
        match dtype {
            DType::Int => Column::Int(Vec::new()),
            DType::Float => Column::Float(Vec::new()),
            DType::Str => Column::Str(Vec::new()),
            DType::Bool => Column::Bool(Vec::new()),
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            Column::Int(_) => DType::Int,
            Column::Float(_) => DType::Float,
            Column::Str(_) => DType::Str,
            Column::Bool(_) => DType::Bool,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Str(v) => v.len(),
            Column::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, i: usize) -> Option<Element> {
        match self {
            Column::Int(v) => v.get(i).map(|x| Element::Int(*x)),
            Column::Float(v) => v.get(i).map(|x| Element::Float(*x)),
            Column::Str(v) => v.get(i).map(|x| Element::Str(x.clone())),
            Column::Bool(v) => v.get(i).map(|x| Element::Bool(*x)),
        }
    }

    /// Append an element; returns false if its dtype does not match
    pub fn push(&mut self, element: Element) -> bool {
        match (self, element) {
            (Column::Int(v), Element::Int(x)) => v.push(x),
            (Column::Float(v), Element::Float(x)) => v.push(x),
            (Column::Str(v), Element::Str(x)) => v.push(x),
            (Column::Bool(v), Element::Bool(x)) => v.push(x),
            _ => return false,
        }
        true
    }

    /// Copy of a contiguous range
    pub fn slice(&self, range: Range<usize>) -> Column {
        match self {
            Column::Int(v) => Column::Int(v[range].to_vec()),
            Column::Float(v) => Column::Float(v[range].to_vec()),
            Column::Str(v) => Column::Str(v[range].to_vec()),
            Column::Bool(v) => Column::Bool(v[range].to_vec()),
        }
    }

    /// Elements at the given positions, in order; positions must be in bounds
    pub fn gather(&self, positions: &[usize]) -> Column {
        match self {
            Column::Int(v) => Column::Int(positions.iter().map(|&i| v[i]).collect()),
            Column::Float(v) => Column::Float(positions.iter().map(|&i| v[i]).collect()),
            Column::Str(v) => Column::Str(positions.iter().map(|&i| v[i].clone()).collect()),
            Column::Bool(v) => Column::Bool(positions.iter().map(|&i| v[i]).collect()),
        }
    }

    /// Ascending copy in the dtype's natural order
    ///
    /// Floats use the IEEE total order, so NaN sorts last.
    pub fn sorted(&self) -> Column {
        match self {
            Column::Int(v) => {
                let mut v = v.clone();
                v.sort();
                Column::Int(v)
            }
            Column::Float(v) => {
                let mut v = v.clone();
                v.sort_by(f64::total_cmp);
                Column::Float(v)
            }
            Column::Str(v) => {
                let mut v = v.clone();
                v.sort();
                Column::Str(v)
            }
            Column::Bool(v) => {
                let mut v = v.clone();
                v.sort();
                Column::Bool(v)
            }
        }
    }

    /// Iterate as owned elements
    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        assert_eq!(Element::Int(1), Element::Int(1));
        assert_ne!(Element::Int(1), Element::Float(1.0));
        assert_ne!(Element::Str("1".into()), Element::Int(1));
    }

    #[test]
    fn test_gather_and_slice() {
        let col = Column::Int(vec![10, 20, 30, 40]);
        assert_eq!(col.gather(&[3, 0, 0]), Column::Int(vec![40, 10, 10]));
        assert_eq!(col.slice(1..3), Column::Int(vec![20, 30]));
    }

    #[test]
    fn test_sorted_floats_nan_last() {
        let col = Column::Float(vec![2.0, f64::NAN, -1.0]);
        let Column::Float(sorted) = col.sorted() else {
            panic!("dtype changed");
        };
        assert_eq!(sorted[0], -1.0);
        assert_eq!(sorted[1], 2.0);
        assert!(sorted[2].is_nan());
    }

    #[test]
    fn test_sorted_bools() {
        let col = Column::Bool(vec![true, false, true]);
        assert_eq!(col.sorted(), Column::Bool(vec![false, true, true]));
    }

    #[test]
    fn test_push_rejects_other_dtype() {
        let mut col = Column::empty(DType::Str);
        assert!(col.push(Element::Str("a".into())));
        assert!(!col.push(Element::Int(1)));
        assert_eq!(col.len(), 1);
    }
}
