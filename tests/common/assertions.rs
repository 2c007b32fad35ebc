//! Domain-specific assertion macros and helpers for nbrebuild harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* notebook invariant was violated.

use nbrebuild_core::{Cell, Notebook};

// ---------------------------------------------------------------------------
// Cell assertions
// ---------------------------------------------------------------------------

/// Assert the sequence of cell types in a notebook.
///
/// ```rust
/// assert_cell_types!(nb, ["markdown", "code", "raw"]);
/// ```
#[macro_export]
macro_rules! assert_cell_types {
    ($nb:expr, [$($tag:expr),* $(,)?]) => {{
        let nb: &nbrebuild_core::Notebook = &$nb;
        let actual: Vec<&str> = nb.cells.iter().map(|c| c.cell_type()).collect();
        let expected: Vec<&str> = vec![$($tag),*];
        pretty_assertions::assert_eq!(actual, expected, "cell types differ");
    }};
}

/// Assert the sequence of cell sources, skipping cells without a source.
#[macro_export]
macro_rules! assert_sources {
    ($nb:expr, [$($src:expr),* $(,)?]) => {{
        let nb: &nbrebuild_core::Notebook = &$nb;
        let actual: Vec<&str> = nb.cells.iter().filter_map(|c| c.source()).collect();
        let expected: Vec<&str> = vec![$($src),*];
        pretty_assertions::assert_eq!(actual, expected, "cell sources differ");
    }};
}

// ---------------------------------------------------------------------------
// Normalization invariants
// ---------------------------------------------------------------------------

/// Code and markdown cells of `nb`, compared on the fields normalization
/// must carry: tag, source, execution count, outputs, metadata.
pub fn canonical_fields(nb: &Notebook) -> Vec<serde_json::Value> {
    nb.cells
        .iter()
        .filter_map(|cell| match cell {
            Cell::Code(code) => Some(serde_json::json!({
                "cell_type": "code",
                "source": code.source,
                "execution_count": code.execution_count,
                "outputs": code.outputs,
                "metadata": code.metadata,
            })),
            Cell::Markdown(md) => Some(serde_json::json!({
                "cell_type": "markdown",
                "source": md.source,
                "metadata": md.metadata,
            })),
            Cell::Other(_) => None,
        })
        .collect()
}

/// Assert that `rebuilt` is a faithful normalization of `original`: same
/// metadata, same recognised cells in the same order, nothing else.
pub fn assert_normalized_from(original: &Notebook, rebuilt: &Notebook) {
    pretty_assertions::assert_eq!(rebuilt.metadata, original.metadata, "metadata changed");
    assert!(
        rebuilt.cells.iter().all(Cell::is_recognized),
        "normalized notebook still has unsupported cells: {:?}",
        rebuilt.cells.iter().map(Cell::cell_type).collect::<Vec<_>>()
    );
    pretty_assertions::assert_eq!(
        canonical_fields(rebuilt),
        canonical_fields(original),
        "recognised cells differ"
    );
}
