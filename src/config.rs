//! Configuration loader and defaults for the gruvsite dev server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults). Fields cover the
//! listening port and the two directories files are served from.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default HTTP listening port
const DEFAULT_PORT: u16 = 3000;

/// Default directory for bundled assets (stylesheets, images, scripts)
const DEFAULT_ASSETS_DIR: &str = "static";

/// Default project root, where the `.html` pages live
const DEFAULT_ROOT_DIR: &str = ".";

/// Application configuration for the dev server
pub struct Config {
    /// HTTP listening port
    pub port: u16,
    /// Assets directory, checked first for static paths
    pub assets_dir: String,
    /// Project root, checked second and used for `.html` resolution
    pub root_dir: String,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    port: env::var("GRUVSITE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),

    assets_dir: env::var("GRUVSITE_ASSETS_DIR").unwrap_or_else(|_| DEFAULT_ASSETS_DIR.into()),

    root_dir: env::var("GRUVSITE_ROOT_DIR").unwrap_or_else(|_| DEFAULT_ROOT_DIR.into()),
});
