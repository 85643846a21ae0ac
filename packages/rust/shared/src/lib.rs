//! Shared error model and configuration for nbweave.
//!
//! This crate is the foundation depended on by all other nbweave crates.
//! It provides:
//! - [`NbweaveError`] — the unified error type
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{NbweaveError, Result};
