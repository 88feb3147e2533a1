//! Tailwind/daisyUI theme declaration for the gruvsite build pipeline.
//!
//! Nothing here runs at request time: the CSS build tool consumes the
//! serialized [`TAILWIND_CONFIG`] verbatim. The two palettes are the
//! gruvbox dark scheme and its light counterpart; values are passed
//! through unchanged, never computed.
//!
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One daisyUI theme: ten semantic color roles mapped to hex values.
///
/// Field names follow daisyUI's wire keys (`base-100` is the page
/// background, `base-content` the foreground text color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: String,
    #[serde(rename = "base-100")]
    pub base_100: String,
    #[serde(rename = "base-content")]
    pub base_content: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl ThemeColors {
    /// All ten (role, value) pairs, in daisyUI's wire order.
    pub fn roles(&self) -> [(&'static str, &str); 10] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("neutral", self.neutral.as_str()),
            ("base-100", self.base_100.as_str()),
            ("base-content", self.base_content.as_str()),
            ("info", self.info.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
        ]
    }
}

/// The `theme` block of the Tailwind config. `extend` stays empty; the
/// palettes live under `daisyui` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeOptions {
    #[serde(default)]
    pub extend: Map<String, Value>,
}

/// The `daisyui` plugin block: the list of selectable themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaisyUi {
    pub themes: Vec<BTreeMap<String, ThemeColors>>,
}

/// The full build-tool configuration object, mirroring the external
/// tool's expected shape field-for-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailwindConfig {
    /// Glob patterns the tool scans for class usage
    pub content: Vec<String>,
    pub theme: ThemeOptions,
    /// Plugin names; resolved by the tool, not by us
    pub plugins: Vec<String>,
    pub daisyui: DaisyUi,
}

impl TailwindConfig {
    /// Look up a declared theme by name.
    pub fn theme(&self, name: &str) -> Option<&ThemeColors> {
        self.daisyui.themes.iter().find_map(|set| set.get(name))
    }

    /// Render the declaration as JSON for the CSS build pipeline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The gruvbox dark palette.
pub fn gruvbox() -> ThemeColors {
    ThemeColors {
        primary: "#98971a".into(),
        secondary: "#d79921".into(),
        accent: "#cc241d".into(),
        neutral: "#689d6a".into(),
        base_100: "#282828".into(),
        base_content: "#ebdbb2".into(),
        info: "#83a598".into(),
        success: "#b8bb26".into(),
        warning: "#fabd2f".into(),
        error: "#fb4934".into(),
    }
}

/// The light palette. Brand colors match gruvbox; only the base and
/// status colors shift for a bright background.
pub fn light() -> ThemeColors {
    ThemeColors {
        primary: "#98971a".into(),
        secondary: "#d79921".into(),
        accent: "#cc241d".into(),
        neutral: "#689d6a".into(),
        base_100: "#fbf1c7".into(),
        base_content: "#3c3836".into(),
        info: "#076678".into(),
        success: "#79740e".into(),
        warning: "#b57614".into(),
        error: "#9d0006".into(),
    }
}

/// The build-tool configuration instance, lazily built
pub static TAILWIND_CONFIG: Lazy<TailwindConfig> = Lazy::new(|| TailwindConfig {
    content: vec!["./src/**/*.{html,js}".into()],
    theme: ThemeOptions::default(),
    plugins: vec!["daisyui".into()],
    daisyui: DaisyUi {
        themes: vec![BTreeMap::from([
            ("gruvbox".into(), gruvbox()),
            ("light".into(), light()),
        ])],
    },
});

/// Parse a `#rrggbb` hex color string to its RGB components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
