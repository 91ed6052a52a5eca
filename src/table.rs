//! The tabular codec: batches of records to CSV text and back.
//!
//! Encoding flattens every record, takes the sorted union of leaf paths as
//! the column set, infers one declared type per column over the whole
//! batch, and emits one header row plus one data row per record. Decoding
//! reverses the process cell by cell through the path writer.
//!
//! Column order and type annotations are recomputed from scratch on every
//! encode call; nothing is cached between batches. Quoting and escaping on
//! both sides are the `csv` crate's standard comma-delimited dialect.

use crate::error::CodecResult;
use crate::flatten::{FlatRow, flatten};
use crate::infer::{infer_column_types, parse_annotated};
use crate::path::Path;
use crate::value::Value;
use crate::write::set_at_path;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Reserved literal representing an explicit null in tabular text.
///
/// A cell equal to this string decodes to `Null`; a column absent from a
/// record encodes to it as well, so the two are indistinguishable after a
/// round trip. Genuine field content equal to the sentinel is not
/// representable — a named limitation of the format.
pub const NULL_SENTINEL: &str = "-=NONE/NULL=-";

/// Encode a batch of records into tabular text.
///
/// Every record must be a map. The header lists the sorted union of leaf
/// paths across the whole batch, annotated with `(int)`/`(bool)` where
/// inference allows; each data row carries one cell per column, with
/// [`NULL_SENTINEL`] filling columns the record does not have. An empty
/// batch (or a batch of empty maps) encodes to the empty string.
///
/// # Errors
/// Returns [`crate::CodecError::TypeMismatch`] if a record is not a map,
/// or [`crate::CodecError::Csv`] if the writer fails.
///
/// # Example
///
/// ```
/// use treetab::{encode_table, Value};
///
/// let records: Vec<Value> = serde_json::from_str(
///     r#"[{"name":"host1","value":"1.1.1.1"},{"name":"host2","value":"2.2.2.2"}]"#,
/// )?;
/// let text = encode_table(&records)?;
/// assert_eq!(text, "name,value\nhost1,1.1.1.1\nhost2,2.2.2.2\n");
/// # anyhow::Result::<()>::Ok(())
/// ```
pub fn encode_table(records: &[Value]) -> CodecResult<String> {
    let rows = records.iter().map(flatten).collect::<CodecResult<Vec<_>>>()?;
    encode_rows(&rows)
}

/// Encode a batch of records, flattening them in parallel.
///
/// Per-record flattening is independent, so it fans out across the rayon
/// pool; the results are joined before column ordering and type inference,
/// which need every row. Output is byte-identical to [`encode_table`].
///
/// # Errors
/// See [`encode_table`].
#[cfg(feature = "parallel")]
pub fn encode_table_par(records: &[Value]) -> CodecResult<String> {
    use rayon::prelude::*;
    let rows = records
        .par_iter()
        .map(flatten)
        .collect::<CodecResult<Vec<_>>>()?;
    encode_rows(&rows)
}

/// Decode tabular text back into a batch of records.
///
/// The first row is the header: bare column paths with optional
/// `(int)`/`(bool)`/`(str)` suffixes. Each following row reconstructs one
/// record by writing every present cell through the path writer — sentinel
/// cells write an explicit `Null`. A row shorter than the header leaves
/// its trailing columns entirely unset rather than null; a row longer than
/// the header has the extra cells ignored. A leading UTF-8 BOM is
/// tolerated, and empty input decodes to an empty batch.
///
/// # Errors
/// - [`crate::CodecError::UnsupportedType`] for an unknown header suffix.
/// - [`crate::CodecError::Parse`] for a malformed column path.
/// - [`crate::CodecError::MalformedRow`] when an `(int)` cell is neither
///   the sentinel nor a base-10 integer.
/// - [`crate::CodecError::Csv`] if the reader fails.
pub fn decode_table(text: &str) -> CodecResult<Vec<Value>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut records = rdr.records();

    let Some(header) = records.next() else {
        return Ok(Vec::new());
    };
    let mut columns = Vec::new();
    for cell in header?.iter() {
        let (bare, ty) = parse_annotated(cell)?;
        columns.push((Path::parse(bare)?, ty, bare.to_string()));
    }

    let mut out = Vec::new();
    for record in records {
        let record = record?;
        let mut root = Value::map();
        for ((path, ty, bare), cell) in columns.iter().zip(record.iter()) {
            if cell == NULL_SENTINEL {
                set_at_path(&mut root, path, Value::Null)?;
            } else {
                set_at_path(&mut root, path, ty.coerce(bare, cell)?)?;
            }
        }
        out.push(root);
    }
    Ok(out)
}

fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(NULL_SENTINEL),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Int(i) => Cow::Owned(i.to_string()),
        Value::Str(s) => Cow::Borrowed(s),
        Value::List(_) | Value::Map(_) => unreachable!("flat rows hold only scalars"),
    }
}

fn encode_rows(rows: &[FlatRow]) -> CodecResult<String> {
    let columns: BTreeSet<&str> = rows.iter().flat_map(FlatRow::paths).collect();
    if columns.is_empty() {
        return Ok(String::new());
    }
    let types = infer_column_types(rows);

    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        let header: Vec<String> = columns.iter().map(|path| types[*path].annotate(path)).collect();
        wtr.write_record(&header)?;
        for row in rows {
            let cells = columns
                .iter()
                .map(|path| row.get(path).map_or(Cow::Borrowed(NULL_SENTINEL), cell_text));
            wtr.write_record(cells.map(|c| c.into_owned()))?;
        }
        wtr.flush().map_err(csv::Error::from)?;
    }
    Ok(String::from_utf8(buf).expect("csv output is valid utf-8"))
}
