//! Editing session bound to a notebook file.
//!
//! [`NotebookEditor::open`] loads the file, the `add_cell_*` methods append
//! cells in memory, and [`save`](NotebookEditor::save) /
//! [`save_as`](NotebookEditor::save_as) persist them. [`rebuild`](NotebookEditor::rebuild)
//! writes a normalized copy elsewhere and leaves the session untouched.

use crate::cells::{append_code_cell, append_markdown_cell};
use crate::error::Result;
use crate::format::{self, FormatPolicy};
use crate::normalizer::normalize_with;
use crate::types::Notebook;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded notebook plus the path it came from.
#[derive(Debug, Clone)]
pub struct NotebookEditor {
    path: PathBuf,
    notebook: Notebook,
    policy: FormatPolicy,
}

impl NotebookEditor {
    /// Open `path` with the default [`FormatPolicy`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, FormatPolicy::default())
    }

    pub fn open_with(path: impl AsRef<Path>, policy: FormatPolicy) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let notebook = format::read_path(&path, &policy)?;
        debug!(
            path = %path.display(),
            cells = notebook.cells.len(),
            nbformat = notebook.nbformat,
            nbformat_minor = notebook.nbformat_minor,
            "opened notebook"
        );
        Ok(Self {
            path,
            notebook,
            policy,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> &FormatPolicy {
        &self.policy
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }

    pub fn into_notebook(self) -> Notebook {
        self.notebook
    }

    /// Overwrite the file the session was opened from.
    pub fn save(&self) -> Result<()> {
        self.save_as(&self.path)
    }

    /// Write the current notebook to `path`. The session stays bound to its
    /// original path.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        format::write_path(&self.notebook, path, &self.policy)?;
        debug!(path = %path.display(), cells = self.notebook.cells.len(), "saved notebook");
        Ok(())
    }

    pub fn add_cell_code(&mut self, content: impl Into<String>) {
        append_code_cell(&mut self.notebook, content);
    }

    pub fn add_cell_markdown(&mut self, content: impl Into<String>) {
        append_markdown_cell(&mut self.notebook, content);
    }

    /// The normalized form of the current notebook.
    pub fn rebuilt(&self) -> Notebook {
        normalize_with(&self.notebook, &self.policy)
    }

    /// Normalize the current notebook and write it to `new_path`. Returns
    /// the notebook that was written.
    pub fn rebuild(&self, new_path: impl AsRef<Path>) -> Result<Notebook> {
        let new_path = new_path.as_ref();
        let rebuilt = self.rebuilt();
        format::write_path(&rebuilt, new_path, &self.policy)?;
        debug!(
            from = %self.path.display(),
            to = %new_path.display(),
            kept = rebuilt.cells.len(),
            dropped = self.notebook.cells.len() - rebuilt.cells.len(),
            "rebuilt notebook"
        );
        Ok(rebuilt)
    }
}
