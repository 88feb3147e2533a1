//! gruvsite crate entrypoint.
//!
//! Starts the Tokio runtime and launches the dev server defined in the
//! `server` module. Keep this file minimal — application logic lives in
//! `server`, `config`, and `theme`.
//!
use gruvsite::server;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    server::run().await;
}
