use crate::error::{json_type_name, IndexError, Result};
use crate::index::InvertedIndex;
use crate::record::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

fn read_json(path: &Path) -> Result<Value> {
    let f = File::open(path).map_err(|source| IndexError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_reader(BufReader::new(f)).map_err(|source| {
        if source.is_io() {
            IndexError::Read { path: path.to_path_buf(), source: source.into() }
        } else {
            IndexError::Parse { path: path.to_path_buf(), source }
        }
    })
}

/// Load the dataset: a JSON document whose top level is an array of records.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items.into_iter().map(Record::new).collect()),
        other => Err(IndexError::Shape { path: path.to_path_buf(), expected: "array", found: json_type_name(&other) }),
    }
}

/// Render the index as 4-space indented JSON.
pub fn to_pretty_json(index: &InvertedIndex) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    index.serialize(&mut ser).map_err(IndexError::Serialize)?;
    Ok(buf)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the index to `path`, replacing any existing file.
///
/// The bytes go to a sibling `.tmp` file first and are renamed into place, so a
/// failed run never leaves a truncated index behind.
pub fn write_index(index: &InvertedIndex, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| IndexError::Write { path: path.to_path_buf(), source };
    let bytes = to_pretty_json(index)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let tmp = tmp_path(path);
    let written = File::create(&tmp).and_then(|f| {
        let mut w = BufWriter::new(f);
        w.write_all(&bytes)?;
        w.into_inner().map_err(|e| e.into_error())?.sync_all()
    });
    if let Err(source) = written.and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote index");
    Ok(())
}

/// Read back an index written by [`write_index`], keeping its token order.
pub fn load_index(path: &Path) -> Result<InvertedIndex> {
    let f = File::open(path).map_err(|source| IndexError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_reader(BufReader::new(f)).map_err(|source| IndexError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::index::build_index;
    use serde_json::json;

    #[test]
    fn tmp_path_is_a_sibling() {
        assert_eq!(tmp_path(Path::new("data/index.json")), PathBuf::from("data/index.json.tmp"));
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let (index, _) = build_index(&[Record::new(json!({"name": "Iron Man"}))]).unwrap();
        let text = String::from_utf8(to_pretty_json(&index).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"iron\": [\n        0\n    ],\n    \"man\": [\n        0\n    ]\n}");
    }

    #[test]
    fn empty_index_is_empty_object() {
        let text = to_pretty_json(&InvertedIndex::new()).unwrap();
        assert_eq!(text, b"{}");
    }

    #[test]
    fn rejects_non_array_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layers.json");
        fs::write(&path, r#"{"name": "Iron Man"}"#).unwrap();
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, IndexError::Shape { found: "object", .. }));
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}
