//! nbrebuild — load, extend and rebuild Jupyter notebooks.
//!
//! Re-exports [`nbrebuild_core`] so that integration tests and the binary can
//! import everything from one place, and provides [`run`], the binary's
//! open-then-rebuild entry point.
//!
//! # Pipeline
//!
//! ```text
//! open ──► add cells ──► normalize ──► write
//! ```
//!
//! Normalization keeps code and markdown cells in canonical shape and drops
//! every other cell type, which is what notebook renderers on code hosts
//! expect.

pub use nbrebuild_core::*;

use anyhow::Context;
use std::path::Path;

/// Open `input` and write its normalized form to `output`.
pub fn run(input: &Path, output: &Path, config: &config::Config) -> anyhow::Result<()> {
    let editor = NotebookEditor::open_with(input, config.policy())
        .with_context(|| format!("failed to open {}", input.display()))?;
    let rebuilt = editor
        .rebuild(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        kept = rebuilt.cells.len(),
        dropped = editor.notebook().cells.len() - rebuilt.cells.len(),
        "notebook rebuilt"
    );
    Ok(())
}
