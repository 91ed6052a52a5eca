use treetab::infer::parse_annotated;
use treetab::{CodecError, ColumnType, Value, flatten, infer_column_types};

fn rows(docs: &[&str]) -> Vec<treetab::FlatRow> {
    docs.iter()
        .map(|d| {
            let v: Value = serde_json::from_str(d).expect("valid test literal");
            flatten(&v).expect("flatten")
        })
        .collect()
}

#[test]
fn all_integer_column_is_int() {
    let types = infer_column_types(&rows(&[r#"{"n":1}"#, r#"{"n":2}"#, r#"{"n":3}"#]));
    assert_eq!(types["n"], ColumnType::Int);
}

#[test]
fn mixed_kinds_force_untyped() {
    let types = infer_column_types(&rows(&[r#"{"n":1}"#, r#"{"n":"two"}"#]));
    assert_eq!(types["n"], ColumnType::Untyped);
}

#[test]
fn all_boolean_column_is_bool() {
    let types = infer_column_types(&rows(&[r#"{"f":true}"#, r#"{"f":false}"#]));
    assert_eq!(types["f"], ColumnType::Bool);
}

#[test]
fn rows_missing_the_column_are_skipped() {
    let types = infer_column_types(&rows(&[r#"{"n":1}"#, r#"{"other":"x"}"#, r#"{"n":2}"#]));
    assert_eq!(types["n"], ColumnType::Int);
}

#[test]
fn nulls_neither_confirm_nor_deny() {
    let types = infer_column_types(&rows(&[r#"{"n":1}"#, r#"{"n":null}"#]));
    assert_eq!(types["n"], ColumnType::Int);
}

#[test]
fn all_null_column_is_untyped() {
    let types = infer_column_types(&rows(&[r#"{"n":null}"#, r#"{"n":null}"#]));
    assert_eq!(types["n"], ColumnType::Untyped);
}

#[test]
fn annotation_render() {
    assert_eq!(ColumnType::Int.annotate("a.b[0]"), "a.b[0](int)");
    assert_eq!(ColumnType::Bool.annotate("f"), "f(bool)");
    assert_eq!(ColumnType::Untyped.annotate("s"), "s");
}

#[test]
fn annotation_parse() -> anyhow::Result<()> {
    assert_eq!(parse_annotated("n(int)")?, ("n", ColumnType::Int));
    assert_eq!(parse_annotated("f(bool)")?, ("f", ColumnType::Bool));
    assert_eq!(parse_annotated("s(str)")?, ("s", ColumnType::Untyped));
    assert_eq!(parse_annotated("bare.path[2]")?, ("bare.path[2]", ColumnType::Untyped));
    Ok(())
}

#[test]
fn unknown_suffix_is_unsupported() {
    let err = parse_annotated("n(float)").unwrap_err();
    match err {
        CodecError::UnsupportedType { suffix } => assert_eq!(suffix, "float"),
        other => panic!("expected UnsupportedType, got {other}"),
    }
}

#[test]
fn coercions() -> anyhow::Result<()> {
    assert_eq!(ColumnType::Int.coerce("n", "-42")?, Value::Int(-42));
    assert_eq!(ColumnType::Bool.coerce("f", "TRUE")?, Value::Bool(true));
    assert_eq!(ColumnType::Bool.coerce("f", "yes")?, Value::Bool(false));
    assert_eq!(ColumnType::Untyped.coerce("s", "7")?, Value::Str("7".into()));
    Ok(())
}

#[test]
fn integer_coercion_failure_names_the_column() {
    let err = ColumnType::Int.coerce("my_num", "horse").unwrap_err();
    match err {
        CodecError::MalformedRow { column, cell } => {
            assert_eq!(column, "my_num");
            assert_eq!(cell, "horse");
        }
        other => panic!("expected MalformedRow, got {other}"),
    }
}
