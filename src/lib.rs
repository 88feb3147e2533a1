//! Local development scaffold for a static daisyUI site.
//!
//! Two independent pieces live here: a small HTTP file server
//! (`server`) that maps clean URLs like `/about` to `about.html`, and
//! the Tailwind/daisyUI theme declaration (`theme`) consumed by the CSS
//! build pipeline.
//!
/// HTTP server implementation and request handling
pub mod server;
/// Configuration management and settings
pub mod config;
/// Tailwind/daisyUI build-time theme declaration
pub mod theme;
