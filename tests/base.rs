//! Integration tests for numlet
//!
//! These tests walk through the main use cases of typed arrays.

use numlet::{ArrayError, Column, DType, Element, Index, Item, TypedArray, Value, np};
use pretty_assertions::assert_eq;

fn sample() -> TypedArray {
    np::array(vec![1, 2, 3, 4, 5, 6, 7], DType::Int).unwrap()
}

fn text(item: Item) -> String {
    item.into_array().unwrap().to_text()
}

// =============================================================================
// Construction and text
// =============================================================================

#[test]
fn text_matches_json_encoding() {
    for xs in [vec![], vec![0i64], vec![5, -3, 12, 0, 9]] {
        let arr = np::array(xs.clone(), DType::Int).unwrap();
        assert_eq!(arr.to_text(), serde_json::to_string(&xs).unwrap());
    }
}

#[test]
fn construct_from_json_object() {
    let raw = Value::from_json(r#"{"a": "1", "b": "2.5", "c": "x"}"#).unwrap();
    let arr = np::array(raw, DType::Float).unwrap();
    assert_eq!(arr.to_text(), "[1.0,2.5,0.0]");
}

#[test]
fn construct_rejects_scalars() {
    for raw in [Value::Int(1), Value::Null, Value::String("1,2".into())] {
        assert!(matches!(
            np::array(raw, DType::Int),
            Err(ArrayError::InvalidInput(_))
        ));
    }
}

#[test]
fn construct_every_dtype() {
    let raw = || Value::from_json(r#"[0, 1.5, "2", true]"#).unwrap();

    assert_eq!(np::array(raw(), DType::Int).unwrap().to_text(), "[0,1,2,1]");
    assert_eq!(
        np::array(raw(), DType::Float).unwrap().to_text(),
        "[0.0,1.5,2.0,1.0]"
    );
    assert_eq!(
        np::array(raw(), DType::Str).unwrap().to_text(),
        r#"["0","1.5","2","1"]"#
    );
    assert_eq!(
        np::array(raw(), DType::Bool).unwrap().to_text(),
        "[false,true,true,true]"
    );
}

// =============================================================================
// Indexing and slicing
// =============================================================================

#[test]
fn scenario_from_readme() {
    let arr = sample();
    assert_eq!(arr.sort().to_text(), "[1,2,3,4,5,6,7]");
    assert_eq!(
        arr.filter(|e| e.as_int().is_some_and(|v| v % 2 == 0)).to_text(),
        "[2,4,6]"
    );
    assert_eq!(text(arr.get_key("1:5").unwrap()), "[2,3,4,5]");
    assert_eq!(text(arr.get_key("1:5:2").unwrap()), "[2,4]");
}

#[test]
fn selector_variants() {
    let arr = sample();
    assert_eq!(arr.get(Index::Single(3)).unwrap(), Item::Scalar(Element::Int(4)));
    assert_eq!(text(arr.get(vec![6i64, 0]).unwrap()), "[7,1]");
    assert_eq!(
        text(arr.get(Index::Slice { start: None, end: None, step: Some(-2) }).unwrap()),
        "[7,5,3,1]"
    );
}

#[test]
fn slice_with_extreme_step() {
    let arr = sample();
    assert_eq!(text(arr.get_key("1::9223372036854775807").unwrap()), "[2]");
    assert_eq!(text(arr.get_key("1::-9223372036854775808").unwrap()), "[2]");
    assert_eq!(text(arr.get_key("::-9223372036854775807").unwrap()), "[7]");
}

#[test]
fn selections_share_dtype() {
    let arr = np::array(vec!["a", "b", "c"], DType::Str).unwrap();
    let picked = arr.get_key("0,2").unwrap().into_array().unwrap();
    assert_eq!(picked.dtype(), DType::Str);
    assert_eq!(picked.to_text(), r#"["a","c"]"#);
}

#[test]
fn index_errors() {
    let arr = sample();
    assert!(matches!(arr.get(7), Err(ArrayError::IndexOutOfRange { .. })));
    assert!(matches!(arr.get_key("x"), Err(ArrayError::UnsupportedIndex(_))));
    assert!(matches!(arr.get_key("1:x"), Err(ArrayError::MalformedIndex { .. })));
    assert!(matches!(arr.get_key("::0"), Err(ArrayError::ZeroSliceStep)));
}

#[test]
fn argwhere_positions_satisfy_predicate() {
    let arr = np::array(vec![4, 9, 2, 7, 7, 1], DType::Int).unwrap();
    let big = |e: &Element| e.as_int().is_some_and(|v| v > 3);
    let positions = arr.argwhere(big);
    assert_eq!(positions.to_text(), "[0,1,3,4]");
    for position in positions.elements() {
        let i = position.as_int().unwrap();
        assert!(big(arr.get(i).unwrap().as_scalar().unwrap()));
    }
}

#[test]
fn search_is_type_exact() {
    let arr = np::array(Value::from_json(r#"[1, "1", 1, 2]"#).unwrap(), DType::Int).unwrap();
    assert_eq!(arr.search(Element::Int(1)).to_text(), "[0,1,2]");

    let words = arr.astype(DType::Str);
    assert_eq!(words.search("1").to_text(), "[0,1,2]");
    assert!(words.search(1i64).is_empty());
}

// =============================================================================
// Copies, views and conversion
// =============================================================================

#[test]
fn copy_is_independent() {
    let arr = sample();
    let copy = arr.copy();
    let changed = copy.astype(DType::Float);
    assert_eq!(arr, copy);
    assert_eq!(changed.dtype(), DType::Float);
    assert_eq!(arr.dtype(), DType::Int);
}

#[test]
fn view_reads_through() {
    let arr = sample();
    let view = arr.view();
    assert_eq!(view.to_text(), arr.to_text());
    assert_eq!(view.dtype(), DType::Int);
    assert!(std::ptr::eq(view.base().unwrap(), &arr));
    assert!(arr.base().is_none());
}

#[test]
fn lossy_string_float_string() {
    let arr = np::array(vec!["3.70"], DType::Str).unwrap();
    let back = arr.astype(DType::Float).astype(DType::Str);
    assert_eq!(back.to_text(), r#"["3.7"]"#);
    assert_ne!(back.to_text(), arr.to_text());
}

#[test]
fn astype_bool_to_string() {
    let arr = np::array(vec![true, false], DType::Bool).unwrap();
    assert_eq!(arr.astype(DType::Str).column(), &Column::Str(vec!["1".into(), "".into()]));
}

// =============================================================================
// Reshape, split and iteration
// =============================================================================

#[test]
fn reshape_then_flatten_restores_order() {
    let arr = np::array(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], DType::Int).unwrap();
    let grid = arr.reshape(&[3, 3]).unwrap();
    assert_eq!(grid.to_text(), "[[1,2,3],[4,5,6],[7,8,9]]");
    assert_eq!(grid.shape(), "[3]");
    assert_eq!(grid.flatten().to_text(), arr.to_text());
}

#[test]
fn reshape_mismatch() {
    let err = sample().reshape(&[2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "cannot reshape array of size 7 into shape [2, 3]");
}

#[test]
fn split_chunks() {
    let parts = sample().split(3).unwrap();
    let texts: Vec<String> = parts.iter().map(|p| p.to_text()).collect();
    assert_eq!(texts, vec!["[1,2,3]", "[4,5,6]", "[7]"]);
}

#[test]
fn split_reshaped_rows() {
    let grid = np::array(vec![1, 2, 3, 4, 5, 6], DType::Int)
        .unwrap()
        .reshape(&[1, 6])
        .unwrap();
    let parts = grid.split(2).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].to_text(), "[[1]]");
    assert_eq!(parts[1].to_text(), "[[2,3,4,5,6]]");
}

#[test]
fn iterate_and_restart() {
    let arr = sample();
    let mut it = arr.iterate();
    let first: Vec<Item> = it.by_ref().collect();
    assert_eq!(first.len(), 7);
    assert!(!it.is_valid());

    it.restart();
    assert_eq!(it.key(), 0);
    assert_eq!(it.current().unwrap(), Item::Scalar(Element::Int(1)));
}

#[test]
fn for_loop_over_reference() {
    let arr = np::array(vec![2.5, 0.5], DType::Float).unwrap();
    let mut total = 0.0;
    for item in &arr {
        total += item.as_scalar().and_then(Element::as_float).unwrap();
    }
    assert_eq!(total, 3.0);
}
