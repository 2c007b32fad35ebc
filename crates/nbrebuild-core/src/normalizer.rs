//! Normalizer — rebuilds a [`Notebook`](crate::Notebook) into canonical shape.
//!
//! The rebuilt notebook carries the source's metadata and, in order, one
//! canonical cell per code or markdown cell. Every other cell type is
//! dropped, so raw cells do not survive a rebuild.

use crate::cells::{new_notebook, random_cell_id};
use crate::format::FormatPolicy;
use crate::types::{Cell, CodeCell, MarkdownCell, Notebook};
use serde_json::Map;
use tracing::debug;

/// Normalize with the default [`FormatPolicy`].
pub fn normalize(notebook: &Notebook) -> Notebook {
    normalize_with(notebook, &FormatPolicy::default())
}

/// Build a new notebook holding only the code and markdown cells of
/// `notebook`, with every canonical field carried over.
///
/// Idempotent: a second pass over the result changes nothing. Existing cell
/// ids are kept; missing ones are generated when the policy's minor version
/// requires them.
pub fn normalize_with(notebook: &Notebook, policy: &FormatPolicy) -> Notebook {
    let mut rebuilt = new_notebook(policy);
    rebuilt.metadata = notebook.metadata.clone();
    let with_ids = rebuilt.supports_cell_ids();

    for (index, cell) in notebook.cells.iter().enumerate() {
        let cell = match cell {
            Cell::Code(code) => Cell::Code(CodeCell {
                id: cell_id(code.id.as_deref(), with_ids),
                source: code.source.clone(),
                execution_count: code.execution_count,
                outputs: code.outputs.clone(),
                metadata: code.metadata.clone(),
                extra: Map::new(),
            }),
            Cell::Markdown(markdown) => Cell::Markdown(MarkdownCell {
                id: cell_id(markdown.id.as_deref(), with_ids),
                source: markdown.source.clone(),
                metadata: markdown.metadata.clone(),
                extra: Map::new(),
            }),
            Cell::Other(other) => {
                debug!(index, cell_type = %other.cell_type, "dropping cell during rebuild");
                continue;
            }
        };
        rebuilt.cells.push(cell);
    }

    rebuilt
}

fn cell_id(existing: Option<&str>, with_ids: bool) -> Option<String> {
    with_ids.then(|| existing.map_or_else(random_cell_id, str::to_owned))
}
