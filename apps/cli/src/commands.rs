//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;

use nbweave_core::pipeline::{ConvertOptions, ConvertRequest, convert_file};
use nbweave_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// nbweave — turn markdown skill documents into runnable notebooks.
#[derive(Parser)]
#[command(
    name = "nbweave",
    version,
    about = "Convert markdown documents into Jupyter notebooks.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Convert a markdown file to a notebook.
    Convert {
        /// Input markdown file.
        input: PathBuf,

        /// Output .ipynb path (defaults to the input with .ipynb extension).
        output: Option<PathBuf>,

        /// Comma-separated fence languages to treat as code cells.
        #[arg(long)]
        code_languages: Option<String>,

        /// Print the conversion report as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "nbweave=info",
        1 => "nbweave=debug",
        _ => "nbweave=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert {
            input,
            output,
            code_languages,
            json,
        } => cmd_convert(input, output, code_languages.as_deref(), json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn cmd_convert(
    input: PathBuf,
    output: Option<PathBuf>,
    code_languages: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = load_config()?;

    // CLI flag overrides config file values.
    let mut options = ConvertOptions::from(&config);
    if let Some(langs) = code_languages {
        options.code_languages = langs
            .split(',')
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
    }

    info!(
        input = %input.display(),
        code_languages = ?options.code_languages,
        "converting markdown to notebook"
    );

    let report = convert_file(&ConvertRequest {
        input,
        output,
        options,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("  Notebook written successfully!");
    println!("  Input:   {}", report.input.display());
    println!("  Output:  {}", report.output.display());
    println!(
        "  Cells:   {} ({} markdown, {} code)",
        report.total_cells, report.markdown_cells, report.code_cells
    );
    println!("  Time:    {:.1}s", report.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
