use treetab::{CodecError, Value, flatten};

fn json(text: &str) -> Value {
    serde_json::from_str(text).expect("valid test literal")
}

#[test]
fn records_every_scalar_leaf() -> anyhow::Result<()> {
    let record = json(r#"{"a":{"b":[1,2]},"c":true,"d":"x"}"#);
    let row = flatten(&record)?;
    assert_eq!(
        row.iter().collect::<Vec<_>>(),
        vec![
            ("a.b[0]", &Value::Int(1)),
            ("a.b[1]", &Value::Int(2)),
            ("c", &Value::Bool(true)),
            ("d", &Value::Str("x".into())),
        ]
    );
    Ok(())
}

#[test]
fn explicit_null_is_a_leaf() -> anyhow::Result<()> {
    let row = flatten(&json(r#"{"a":null}"#))?;
    assert_eq!(row.get("a"), Some(&Value::Null));
    Ok(())
}

#[test]
fn nested_lists_use_stacked_indices() -> anyhow::Result<()> {
    let row = flatten(&json(r#"{"m":[[1],[2,3]]}"#))?;
    assert_eq!(
        row.paths().collect::<Vec<_>>(),
        vec!["m[0][0]", "m[1][0]", "m[1][1]"]
    );
    Ok(())
}

#[test]
fn list_of_maps_mixes_index_and_key_steps() -> anyhow::Result<()> {
    let row = flatten(&json(r#"{"b":[{"cat":"cat"},{"dog":"mutt"}]}"#))?;
    assert_eq!(row.paths().collect::<Vec<_>>(), vec!["b[0].cat", "b[1].dog"]);
    Ok(())
}

#[test]
fn empty_containers_contribute_nothing() -> anyhow::Result<()> {
    let row = flatten(&json(r#"{"a":[],"b":{},"c":1}"#))?;
    assert_eq!(row.paths().collect::<Vec<_>>(), vec!["c"]);
    Ok(())
}

#[test]
fn empty_record_flattens_to_empty_row() -> anyhow::Result<()> {
    let row = flatten(&Value::map())?;
    assert!(row.is_empty());
    assert_eq!(row.len(), 0);
    Ok(())
}

#[test]
fn non_map_root_is_rejected() {
    let err = flatten(&json("[1,2]")).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { .. }), "got {err}");
}
