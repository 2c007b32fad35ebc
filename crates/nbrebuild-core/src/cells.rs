//! Constructors for notebooks and cells with canonical defaults.

use crate::format::FormatPolicy;
use crate::types::{Cell, CodeCell, MarkdownCell, Metadata, Notebook};

/// A fresh cell id: the first 8 hex characters of a v4 UUID.
pub fn random_cell_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// An empty notebook stamped with the policy's version.
pub fn new_notebook(policy: &FormatPolicy) -> Notebook {
    Notebook {
        nbformat: policy.nbformat,
        nbformat_minor: policy.nbformat_minor,
        metadata: Metadata::new(),
        cells: Vec::new(),
    }
}

/// A code cell that has never been executed: no count, no outputs, empty metadata.
pub fn new_code_cell(source: impl Into<String>) -> CodeCell {
    CodeCell {
        id: Some(random_cell_id()),
        source: source.into(),
        ..CodeCell::default()
    }
}

pub fn new_markdown_cell(source: impl Into<String>) -> MarkdownCell {
    MarkdownCell {
        id: Some(random_cell_id()),
        source: source.into(),
        ..MarkdownCell::default()
    }
}

/// Append a new code cell at the end of `notebook`.
pub fn append_code_cell(notebook: &mut Notebook, content: impl Into<String>) {
    let mut cell = new_code_cell(content);
    if !notebook.supports_cell_ids() {
        cell.id = None;
    }
    notebook.cells.push(Cell::Code(cell));
}

/// Append a new markdown cell at the end of `notebook`.
pub fn append_markdown_cell(notebook: &mut Notebook, content: impl Into<String>) {
    let mut cell = new_markdown_cell(content);
    if !notebook.supports_cell_ids() {
        cell.id = None;
    }
    notebook.cells.push(Cell::Markdown(cell));
}
