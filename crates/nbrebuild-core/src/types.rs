//! Core types for nbrebuild-core.
//!
//! This module defines the in-memory notebook record: the [`Notebook`] itself,
//! the tagged [`Cell`] variant and its recognised shapes ([`CodeCell`],
//! [`MarkdownCell`]), plus [`OpaqueCell`] for every other `cell_type`.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form JSON object attached to a notebook or a cell.
pub type Metadata = Map<String, Value>;

/// One execution result of a code cell. Copied verbatim, never inspected.
pub type Output = Value;

pub const CODE: &str = "code";
pub const MARKDOWN: &str = "markdown";

// ---------------------------------------------------------------------------
// Notebook
// ---------------------------------------------------------------------------

/// A notebook document: format version, metadata and ordered cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Major schema version. Only 4 is accepted by the reader.
    pub nbformat: u32,
    pub nbformat_minor: u32,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Cell ids are part of the schema from 4.5 onwards; older minors reject them.
    pub fn supports_cell_ids(&self) -> bool {
        self.nbformat_minor >= 5
    }

    /// Number of code and markdown cells, i.e. the cells that survive normalization.
    pub fn recognized_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_recognized()).count()
    }
}

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// A notebook cell, dispatched on its on-disk `cell_type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Code(CodeCell),
    Markdown(MarkdownCell),
    /// Any other tag (`raw`, or something a newer frontend invented). Kept
    /// verbatim across load and save, dropped by normalization.
    Other(OpaqueCell),
}

impl Cell {
    pub fn cell_type(&self) -> &str {
        match self {
            Cell::Code(_) => CODE,
            Cell::Markdown(_) => MARKDOWN,
            Cell::Other(cell) => &cell.cell_type,
        }
    }

    /// `true` for code and markdown cells.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Cell::Other(_))
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Cell::Code(cell) => cell.id.as_deref(),
            Cell::Markdown(cell) => cell.id.as_deref(),
            Cell::Other(cell) => cell.fields.get("id").and_then(Value::as_str),
        }
    }

    /// Source text of a recognised cell.
    pub fn source(&self) -> Option<&str> {
        match self {
            Cell::Code(cell) => Some(&cell.source),
            Cell::Markdown(cell) => Some(&cell.source),
            Cell::Other(_) => None,
        }
    }
}

/// An executable cell with its last recorded execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, with = "multiline")]
    pub source: String,
    /// `None` for a cell that has never been run.
    #[serde(default)]
    pub execution_count: Option<u32>,
    #[serde(default)]
    pub outputs: Vec<Output>,
    #[serde(default)]
    pub metadata: Metadata,
    /// Keys outside the canonical shape. Round-tripped by load/save, not by
    /// normalization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A narrative cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, with = "multiline")]
    pub source: String,
    #[serde(default)]
    pub metadata: Metadata,
    /// Keys outside the canonical shape, e.g. `attachments`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A cell whose tag is neither `code` nor `markdown`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueCell {
    pub cell_type: String,
    /// Every key of the on-disk object except `cell_type`.
    pub fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let cell_type = match fields.remove("cell_type") {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "cell_type must be a string, found {other}"
                )))
            }
            None => return Err(de::Error::missing_field("cell_type")),
        };

        if cell_type == CODE {
            serde_json::from_value(Value::Object(fields))
                .map(Cell::Code)
                .map_err(de::Error::custom)
        } else if cell_type == MARKDOWN {
            serde_json::from_value(Value::Object(fields))
                .map(Cell::Markdown)
                .map_err(de::Error::custom)
        } else {
            Ok(Cell::Other(OpaqueCell { cell_type, fields }))
        }
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(tag = "cell_type", rename_all = "lowercase")]
        enum Tagged<'a> {
            Code(&'a CodeCell),
            Markdown(&'a MarkdownCell),
        }

        match self {
            Cell::Code(cell) => Tagged::Code(cell).serialize(serializer),
            Cell::Markdown(cell) => Tagged::Markdown(cell).serialize(serializer),
            Cell::Other(cell) => {
                let mut map = serializer.serialize_map(Some(cell.fields.len() + 1))?;
                map.serialize_entry("cell_type", &cell.cell_type)?;
                for (key, value) in &cell.fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Multiline strings
// ---------------------------------------------------------------------------

/// Split text into lines that keep their `\n` terminator, the way notebook
/// files store multiline strings. An empty string yields no lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Serde adapter for notebook "multiline strings": a JSON string or an array
/// of strings to concatenate. Always written back as an array of lines.
pub(crate) mod multiline {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(source: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(super::split_lines(source))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Multiline {
            Joined(String),
            Lines(Vec<String>),
        }

        Ok(match Multiline::deserialize(deserializer)? {
            Multiline::Joined(text) => text,
            Multiline::Lines(lines) => lines.concat(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
