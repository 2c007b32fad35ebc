//! nbrebuild-core — notebook loading, editing and normalization.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! notebook types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! read_path ──► Notebook ──► append ──► normalize ──► write_path
//!                  │                                      ▲
//!                  └──────────────── save ────────────────┘
//! ```
//!
//! Everything is synchronous and single-owner: a [`NotebookEditor`] holds
//! the only copy of its notebook for the duration of a session.

pub mod cells;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod types;

pub use cells::{append_code_cell, append_markdown_cell, new_code_cell, new_markdown_cell, new_notebook};
pub use editor::NotebookEditor;
pub use error::{FormatError, NotebookError, Result};
pub use format::{load, save, FormatPolicy};
pub use normalizer::{normalize, normalize_with};
pub use types::{Cell, CodeCell, MarkdownCell, Metadata, Notebook, OpaqueCell, Output};
