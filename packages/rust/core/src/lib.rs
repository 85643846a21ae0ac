//! End-to-end conversion pipeline for nbweave.
//!
//! Ties the markdown parser and the notebook model into one workflow:
//! read a skill document, parse it into cells, assemble a notebook, write
//! the `.ipynb` file.

pub mod assemble;
pub mod pipeline;

pub use assemble::assemble;
pub use pipeline::{ConvertOptions, ConvertReport, ConvertRequest, convert_file, convert_text};
