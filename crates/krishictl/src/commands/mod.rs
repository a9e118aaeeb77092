//! Command handlers for krishictl.

pub mod config;
pub mod domains;
pub mod eval;
pub mod route;

use anyhow::{Context, Result};
use krishi_router::Config;
use std::path::Path;

/// An explicit path must load; otherwise fall back through the default
/// locations to built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load()),
    }
}

/// Print a key/value row with a fixed key column
pub(crate) fn print_kv(key: &str, value: &str, width: usize) {
    println!("{:width$} {}", key, value, width = width);
}
