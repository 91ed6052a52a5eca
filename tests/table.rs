use treetab::testing::{RecordBuilder, assert_round_trip};
use treetab::{CodecError, NULL_SENTINEL, Value, decode_table, encode_table};

fn records(text: &str) -> Vec<Value> {
    serde_json::from_str(text).expect("valid test literal")
}

#[test]
fn encodes_two_flat_records() -> anyhow::Result<()> {
    let batch = records(
        r#"[{"name":"host1","value":"1.1.1.1"},
            {"name":"host2","value":"2.2.2.2"}]"#,
    );
    let text = encode_table(&batch)?;
    assert_eq!(text, "name,value\nhost1,1.1.1.1\nhost2,2.2.2.2\n");
    assert_eq!(decode_table(&text)?, batch);
    Ok(())
}

#[test]
fn nested_batch_round_trips() {
    let batch = vec![
        RecordBuilder::new()
            .field("name", "obj1")
            .set("tags[0]", "prod")
            .set("tags[1]", "edge")
            .set("owner.team", "net")
            .set("owner.floor", 2)
            .build(),
        RecordBuilder::new()
            .field("name", "obj2")
            .set("tags[0]", "lab")
            .set("tags[1]", "core")
            .set("owner.team", "sec")
            .set("owner.floor", 3)
            .build(),
    ];
    assert_round_trip(&batch);
}

#[test]
fn sparse_column_batch_gains_explicit_nulls() -> anyhow::Result<()> {
    // a record missing a column is indistinguishable from one carrying an
    // explicit null, so the gap comes back as Null
    let batch = records(r#"[{"a":"x"},{"b":"y"}]"#);
    let decoded = decode_table(&encode_table(&batch)?)?;
    assert_eq!(decoded, records(r#"[{"a":"x","b":null},{"a":null,"b":"y"}]"#));
    Ok(())
}

#[test]
fn header_is_sorted_union_of_all_leaf_paths() -> anyhow::Result<()> {
    let batch = records(r#"[{"z":1,"a":{"k":2}},{"m":[5]}]"#);
    let text = encode_table(&batch)?;
    let header = text.lines().next().unwrap();
    assert_eq!(header, "a.k(int),m[0](int),z(int)");
    Ok(())
}

#[test]
fn encoding_is_independent_of_field_order() -> anyhow::Result<()> {
    let forward = records(r#"[{"a":1,"b":"x","c":true}]"#);
    let reversed = records(r#"[{"c":true,"b":"x","a":1}]"#);
    assert_eq!(encode_table(&forward)?, encode_table(&reversed)?);
    Ok(())
}

#[test]
fn missing_columns_fill_with_sentinel() -> anyhow::Result<()> {
    let batch = records(r#"[{"a":"x","b":"y"},{"a":"z"}]"#);
    let text = encode_table(&batch)?;
    assert_eq!(text, format!("a,b\nx,y\nz,{NULL_SENTINEL}\n"));
    Ok(())
}

#[test]
fn typed_columns_are_annotated_and_decode_typed() -> anyhow::Result<()> {
    let batch = records(r#"[{"n":1,"f":true,"s":"one"},{"n":2,"f":false,"s":"two"}]"#);
    let text = encode_table(&batch)?;
    assert_eq!(text.lines().next().unwrap(), "f(bool),n(int),s");
    assert_eq!(decode_table(&text)?, batch);
    Ok(())
}

#[test]
fn mixed_column_falls_back_to_text() -> anyhow::Result<()> {
    let batch = records(r#"[{"n":1},{"n":"two"}]"#);
    let text = encode_table(&batch)?;
    assert_eq!(text.lines().next().unwrap(), "n");
    // the integer travels untyped and comes back as text
    assert_eq!(decode_table(&text)?, records(r#"[{"n":"1"},{"n":"two"}]"#));
    Ok(())
}

#[test]
fn sentinel_cell_decodes_to_explicit_null() -> anyhow::Result<()> {
    let text = format!("a,b\n{NULL_SENTINEL},1\n");
    assert_eq!(decode_table(&text)?, records(r#"[{"a":null,"b":"1"}]"#));
    Ok(())
}

#[test]
fn explicit_null_and_absent_field_collapse_identically() -> anyhow::Result<()> {
    let batch = records(r#"[{"x":null,"y":1},{"y":2}]"#);
    let decoded = decode_table(&encode_table(&batch)?)?;
    assert_eq!(decoded[0].as_map().unwrap()["x"], decoded[1].as_map().unwrap()["x"]);
    assert_eq!(decoded[0].as_map().unwrap()["x"], Value::Null);
    Ok(())
}

#[test]
fn short_row_leaves_trailing_columns_unset() -> anyhow::Result<()> {
    let decoded = decode_table("a,b,c\n1,2\n")?;
    assert_eq!(decoded, records(r#"[{"a":"1","b":"2"}]"#));
    Ok(())
}

#[test]
fn extra_cells_beyond_header_are_ignored() -> anyhow::Result<()> {
    let decoded = decode_table("a,b\n1,2,3,4\n")?;
    assert_eq!(decoded, records(r#"[{"a":"1","b":"2"}]"#));
    Ok(())
}

#[test]
fn cells_are_trimmed_before_coercion() -> anyhow::Result<()> {
    let decoded = decode_table("n(int),s\n 7 ,  text  \n")?;
    assert_eq!(decoded, records(r#"[{"n":7,"s":"text"}]"#));
    Ok(())
}

#[test]
fn mixed_shape_fixture_decodes() -> anyhow::Result<()> {
    let text = "my_num(int),my_num_2.nested,val[0],val[1],vala[0].dog,valb[0][1].chicken\n\
                1,45,horse,pig,cocker spaniel,rooster\n\
                5,20,goat,rat,cockapoo,rooster\n";
    let decoded = decode_table(text)?;
    assert_eq!(
        decoded,
        records(
            r#"[{"my_num":1,"my_num_2":{"nested":"45"},"val":["horse","pig"],
                 "vala":[{"dog":"cocker spaniel"}],"valb":[[null,{"chicken":"rooster"}]]},
                {"my_num":5,"my_num_2":{"nested":"20"},"val":["goat","rat"],
                 "vala":[{"dog":"cockapoo"}],"valb":[[null,{"chicken":"rooster"}]]}]"#
        )
    );
    Ok(())
}

#[test]
fn quoted_fields_round_trip() {
    let batch = vec![
        RecordBuilder::new()
            .field("desc", "a, b and \"c\"")
            .field("note", "line1\nline2")
            .build(),
    ];
    assert_round_trip(&batch);
}

#[test]
fn bom_prefixed_input_is_accepted() -> anyhow::Result<()> {
    let decoded = decode_table("\u{feff}a\nx\n")?;
    assert_eq!(decoded, records(r#"[{"a":"x"}]"#));
    Ok(())
}

#[test]
fn empty_batch_encodes_to_empty_text_and_back() -> anyhow::Result<()> {
    assert_eq!(encode_table(&[])?, "");
    assert_eq!(decode_table("")?, Vec::<Value>::new());
    assert_eq!(decode_table("  \n  ")?, Vec::<Value>::new());
    Ok(())
}

#[test]
fn malformed_integer_cell_fails_the_call() {
    let err = decode_table("n(int)\nhorse\n").unwrap_err();
    assert!(matches!(err, CodecError::MalformedRow { .. }), "got {err}");
}

#[test]
fn unknown_header_suffix_fails_the_call() {
    let err = decode_table("n(float)\n1\n").unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedType { .. }), "got {err}");
}

#[test]
fn malformed_header_path_fails_the_call() {
    let err = decode_table("a[1]x[2]\n1\n").unwrap_err();
    assert!(matches!(err, CodecError::Parse { .. }), "got {err}");
}

#[test]
fn non_map_record_fails_encode() {
    let err = encode_table(&[Value::from(1i64)]).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { .. }), "got {err}");
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_encode_matches_sequential() -> anyhow::Result<()> {
    let batch: Vec<Value> = (0..200)
        .map(|i| {
            RecordBuilder::new()
                .field("id", i)
                .set("nested.flag", i % 2 == 0)
                .set("tags[0]", format!("t{i}"))
                .build()
        })
        .collect();
    assert_eq!(treetab::encode_table_par(&batch)?, encode_table(&batch)?);
    Ok(())
}
