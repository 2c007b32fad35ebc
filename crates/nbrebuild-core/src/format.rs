//! Reader/writer for the on-disk notebook format.
//!
//! Everything here is governed by a [`FormatPolicy`]: the reader rejects any
//! file whose major `nbformat` differs from the policy's, and the writer lays
//! the JSON out the way Jupyter itself does (sorted keys, one-space indent,
//! unescaped non-ASCII, trailing newline) so rebuilt files diff cleanly.

use crate::error::{FormatError, NotebookError, Result};
use crate::types::Notebook;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;

/// The only major schema version this crate reads and writes.
pub const NBFORMAT: u32 = 4;
/// Minor version stamped on freshly built notebooks.
pub const NBFORMAT_MINOR: u32 = 5;

/// Version and layout rules shared by the reader, the writer and the
/// normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPolicy {
    pub nbformat: u32,
    pub nbformat_minor: u32,
    /// Spaces per indentation level in written files.
    pub indent: usize,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
            indent: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Parse notebook JSON text.
pub fn read_str(content: &str, policy: &FormatPolicy) -> std::result::Result<Notebook, FormatError> {
    let value: Value = serde_json::from_str(content)?;
    check_version(&value, policy)?;
    Ok(serde_json::from_value(value)?)
}

/// Read and parse the notebook at `path`.
pub fn read_path(path: &Path, policy: &FormatPolicy) -> Result<Notebook> {
    let bytes = std::fs::read(path).map_err(|source| NotebookError::on_read(path, source))?;
    std::str::from_utf8(&bytes)
        .map_err(FormatError::from)
        .and_then(|content| read_str(content, policy))
        .map_err(|source| NotebookError::format(path, source))
}

/// Load a notebook with the default policy.
pub fn load(path: impl AsRef<Path>) -> Result<Notebook> {
    read_path(path.as_ref(), &FormatPolicy::default())
}

fn check_version(value: &Value, policy: &FormatPolicy) -> std::result::Result<(), FormatError> {
    let major = value
        .get("nbformat")
        .and_then(Value::as_u64)
        .ok_or(FormatError::MissingVersion)?;
    if major != u64::from(policy.nbformat) {
        return Err(FormatError::UnsupportedVersion {
            found_major: major,
            found_minor: value
                .get("nbformat_minor")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            expected: policy.nbformat,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Serialize a notebook to its on-disk text.
pub fn write_string(
    notebook: &Notebook,
    policy: &FormatPolicy,
) -> std::result::Result<String, FormatError> {
    let value = sort_keys(serde_json::to_value(notebook)?);

    let indent = " ".repeat(policy.indent);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| FormatError::Utf8(e.utf8_error()))
}

/// Serialize `notebook` and overwrite the file at `path`.
pub fn write_path(notebook: &Notebook, path: &Path, policy: &FormatPolicy) -> Result<()> {
    let content = write_string(notebook, policy).map_err(|source| NotebookError::format(path, source))?;
    std::fs::write(path, content).map_err(|source| NotebookError::on_write(path, source))
}

/// Save a notebook with the default policy.
pub fn save(notebook: &Notebook, path: impl AsRef<Path>) -> Result<()> {
    write_path(notebook, path.as_ref(), &FormatPolicy::default())
}

/// Rebuild every object with its keys in lexicographic order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
