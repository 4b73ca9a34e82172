//! Coercion of raw values into typed columns
//!
//! Every cast here is total and lossy: a value that has no faithful
//! representation in the target dtype degrades the way a loosely typed
//! scripting language would cast it (numeric prefixes of strings, truthiness
//! for booleans, and so on). Nothing in this module validates.

use crate::error::{ArrayError, Result};
use crate::types::{Column, DType, Element, Layout, Value};
use log::trace;

/// Coerce a raw collection into a column of `dtype`
///
/// `raw` must be a list or an object; object keys are dropped and members
/// renumbered in insertion order. A non-empty collection whose members are
/// all collections becomes a chunked layout with one row per member.
pub fn convert(raw: &Value, dtype: DType) -> Result<(Column, Layout)> {
    let members = raw.members().ok_or(ArrayError::InvalidInput(raw.kind()))?;

    if !members.is_empty() && members.iter().all(|m| m.is_collection()) {
        let mut column = Column::empty(dtype);
        let mut rows = Vec::with_capacity(members.len());
        for member in members {
            let row = member.members().unwrap_or_default();
            rows.push(row.len());
            for value in row {
                let pushed = column.push(coerce(value, dtype));
                debug_assert!(pushed, "coerce produced a foreign dtype");
            }
        }
        return Ok((column, Layout::Chunked(rows)));
    }

    let mut column = Column::empty(dtype);
    for value in members {
        let pushed = column.push(coerce(value, dtype));
        debug_assert!(pushed, "coerce produced a foreign dtype");
    }
    Ok((column, Layout::Flat))
}

/// Coerce one raw value into an element of `dtype`
pub fn coerce(value: &Value, dtype: DType) -> Element {
    match dtype {
        DType::Int => Element::Int(to_int(value)),
        DType::Float => Element::Float(to_float(value)),
        DType::Str => Element::Str(to_text(value)),
        DType::Bool => Element::Bool(to_bool(value)),
    }
}

/// Re-coerce an already typed column into `dtype`
pub fn recast(column: &Column, dtype: DType) -> Column {
    if column.dtype() == dtype {
        return column.clone();
    }
    let mut out = Column::empty(dtype);
    for element in column.iter() {
        let pushed = out.push(coerce(&element_value(element), dtype));
        debug_assert!(pushed, "coerce produced a foreign dtype");
    }
    out
}

fn element_value(element: Element) -> Value {
    match element {
        Element::Int(i) => Value::Int(i),
        Element::Float(f) => Value::Float(f),
        Element::Str(s) => Value::String(s),
        Element::Bool(b) => Value::Bool(b),
    }
}

fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => *b as i64,
        Value::Int(i) => *i,
        Value::Float(f) => {
            if f.fract() != 0.0 || !f.is_finite() {
                trace!("truncating float {} to int", f);
            }
            *f as i64
        }
        Value::String(s) => match numeric_prefix(s) {
            Some(Prefix::Integer(i)) => i,
            Some(Prefix::Real(f)) => {
                trace!("truncating string {:?} to int", s);
                f as i64
            }
            None => {
                trace!("non-numeric string {:?} cast to 0", s);
                0
            }
        },
        Value::List(_) | Value::Object(_) => collection_flag(value) as i64,
    }
}

fn to_float(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => *b as i64 as f64,
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::String(s) => match numeric_prefix(s) {
            Some(Prefix::Integer(i)) => i as f64,
            Some(Prefix::Real(f)) => f,
            None => {
                trace!("non-numeric string {:?} cast to 0.0", s);
                0.0
            }
        },
        Value::List(_) | Value::Object(_) => collection_flag(value) as i64 as f64,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) => s.clone(),
        Value::List(_) | Value::Object(_) => {
            trace!("collection cast to string");
            "Array".to_string()
        }
    }
}

fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::List(_) | Value::Object(_) => collection_flag(value),
    }
}

fn collection_flag(value: &Value) -> bool {
    value.members().is_some_and(|m| !m.is_empty())
}

/// Decimal text of a float, without exponent notation
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f == f64::INFINITY {
        "INF".to_string()
    } else if f == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        f.to_string()
    }
}

enum Prefix {
    Integer(i64),
    Real(f64),
}

/// Longest leading numeric literal of `s`, after leading whitespace
fn numeric_prefix(s: &str) -> Option<Prefix> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut real = false;
    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if int_digits > 0 || frac_end > end + 1 {
            real = true;
            end = frac_end;
        }
    }
    if int_digits == 0 && !real {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            real = true;
            end = exp_end;
        }
    }

    let literal = &s[..end];
    if real {
        literal.parse::<f64>().ok().map(Prefix::Real)
    } else {
        // Saturate instead of failing on overflow
        Some(Prefix::Integer(literal.parse::<i64>().unwrap_or_else(|_| {
            if literal.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        })))
    }
}
