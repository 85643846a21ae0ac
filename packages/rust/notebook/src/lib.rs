//! Jupyter notebook document model and nbformat 4.5 serialization.
//!
//! [`Notebook`] is an ordered cell sequence plus document metadata
//! (kernelspec + language_info). Serialization goes through `serde` so that
//! a serialized notebook re-parses into the same cell sequence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nbweave_shared::Result;

/// nbformat major version emitted by this crate.
pub const NBFORMAT: u32 = 4;
/// nbformat minor version emitted by this crate.
pub const NBFORMAT_MINOR: u32 = 5;

/// Notebook file extension.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// Per-cell metadata.
///
/// Non-Python code cells record their language here, since the kernelspec is
/// document-wide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A single notebook cell, discriminated by `cell_type` in the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "snake_case")]
pub enum NotebookCell {
    Markdown {
        id: String,
        metadata: CellMetadata,
        source: Vec<String>,
    },
    Code {
        id: String,
        metadata: CellMetadata,
        source: Vec<String>,
        /// Execution output placeholders; always empty for generated cells.
        outputs: Vec<serde_json::Value>,
        execution_count: Option<u32>,
    },
}

impl NotebookCell {
    /// Create a markdown cell.
    pub fn markdown(source: impl AsRef<str>) -> Self {
        Self::Markdown {
            id: new_cell_id(),
            metadata: CellMetadata::default(),
            source: source_lines(source.as_ref()),
        }
    }

    /// Create a code cell tagged with a language.
    ///
    /// Python is the document default, so only other languages land in cell
    /// metadata.
    pub fn code(source: impl AsRef<str>, language: &str) -> Self {
        let metadata = CellMetadata {
            language: (language != "python").then(|| language.to_string()),
        };
        Self::Code {
            id: new_cell_id(),
            metadata,
            source: source_lines(source.as_ref()),
            outputs: Vec::new(),
            execution_count: None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, Self::Markdown { .. })
    }

    /// Cell source reassembled into a single string.
    pub fn source_text(&self) -> String {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source.concat(),
        }
    }

    /// Language recorded for this cell, if any.
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Code { metadata, .. } => metadata.language.as_deref(),
            Self::Markdown { .. } => None,
        }
    }
}

/// nbformat cell ids: any short `[a-zA-Z0-9-_]` token; UUIDs qualify.
fn new_cell_id() -> String {
    Uuid::now_v7().to_string()
}

/// Split source into nbformat line form: every line keeps its trailing
/// newline except the last.
fn source_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Document metadata
// ---------------------------------------------------------------------------

/// Jupyter kernel specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

impl KernelSpec {
    /// Python 3 kernel, the document default.
    pub fn python3() -> Self {
        Self {
            display_name: "Python 3".to_string(),
            language: "python".to_string(),
            name: "python3".to_string(),
        }
    }
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self::python3()
    }
}

/// `language_info` block required by the nbformat schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
}

/// Document-level notebook metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

impl Default for NotebookMetadata {
    fn default() -> Self {
        let kernelspec = KernelSpec::python3();
        let language_info = LanguageInfo {
            name: kernelspec.language.clone(),
        };
        Self {
            kernelspec,
            language_info,
        }
    }
}

// ---------------------------------------------------------------------------
// Notebook
// ---------------------------------------------------------------------------

/// The output artifact: ordered cells plus document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<NotebookCell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    /// Create an empty notebook with default metadata.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: NotebookMetadata::default(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Append a cell.
    pub fn push(&mut self, cell: NotebookCell) {
        self.cells.push(cell);
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn code_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }

    pub fn markdown_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_markdown()).count()
    }

    /// Serialize to pretty-printed nbformat JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a serialized notebook back into the model.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
