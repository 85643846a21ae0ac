//! End-to-end `convert` pipeline: read → parse → assemble → write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::{info, instrument};

use nbweave_markdown::{ParseOptions, parse_document};
use nbweave_notebook::{NOTEBOOK_EXTENSION, Notebook};
use nbweave_shared::{AppConfig, NbweaveError, Result};

use crate::assemble::assemble;

/// Runtime conversion options — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Fence language tags converted into executable code cells.
    pub code_languages: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ConvertOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            code_languages: config.defaults.code_languages.clone(),
        }
    }
}

/// A single file conversion request.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Markdown source path.
    pub input: PathBuf,
    /// Destination path; derived from `input` when absent.
    pub output: Option<PathBuf>,
    /// Conversion options.
    pub options: ConvertOptions,
}

/// Result of a file conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_cells: usize,
    pub markdown_cells: usize,
    pub code_cells: usize,
    /// Wall-clock time, not serialized in the report JSON.
    #[serde(skip)]
    pub elapsed: std::time::Duration,
}

/// Convert markdown text into a notebook document. Pure: no I/O.
pub fn convert_text(text: &str, options: &ConvertOptions) -> Notebook {
    let parse_opts = ParseOptions::from_tags(&options.code_languages);
    assemble(parse_document(text, &parse_opts))
}

/// Run the full conversion for one file.
///
/// The input must exist and be readable; nothing is written on a read
/// failure. A write failure leaves the destination in an undefined state and
/// is surfaced with the underlying cause.
#[instrument(skip_all, fields(input = %request.input.display()))]
pub fn convert_file(request: &ConvertRequest) -> Result<ConvertReport> {
    let start = Instant::now();

    let text = std::fs::read_to_string(&request.input)
        .map_err(|e| NbweaveError::input(&request.input, e))?;

    let notebook = convert_text(&text, &request.options);
    let json = notebook.to_json()?;

    let output = request
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&request.input));

    std::fs::write(&output, json).map_err(|e| NbweaveError::output(&output, e))?;

    let report = ConvertReport {
        input: request.input.clone(),
        output,
        total_cells: notebook.cell_count(),
        markdown_cells: notebook.markdown_cell_count(),
        code_cells: notebook.code_cell_count(),
        elapsed: start.elapsed(),
    };

    info!(
        output = %report.output.display(),
        total = report.total_cells,
        markdown = report.markdown_cells,
        code = report.code_cells,
        "notebook written"
    );

    Ok(report)
}

/// Default destination: input path with its extension replaced by `.ipynb`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(NOTEBOOK_EXTENSION)
}
