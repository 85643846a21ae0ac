//! nbweave CLI — markdown skill documents to Jupyter notebooks.
//!
//! Splits a markdown document on `---` rules, lifts recognized fenced code
//! blocks into executable cells, and writes an nbformat 4.5 notebook.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
