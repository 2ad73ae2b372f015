//! utilcfg: load, validate and resolve build descriptors for a utility-class
//! CSS generator.
//!
//! The descriptor names the files to scan (`content`), the dark-mode strategy,
//! palette extensions and plugin references. The generator itself is an
//! external collaborator; this crate only hands it a validated,
//! default-filled view of the descriptor.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{FilesystemScanner, default_palette};
pub use app::api::{
    CheckOptions, CheckOutcome, InitOptions, check, check_at, fingerprint, fingerprint_at, init,
    init_at, show, show_at, tokens, tokens_at,
};
pub use app::config::{discover_config, load_config};
pub use app::content::resolve_content;
pub use domain::config::{parse_config_content, to_artifact_string};
pub use domain::{
    AppError, BuildConfig, ColorLiteral, ColorValue, ConfigError, ConfigFormat, ContentGlob,
    ContentReport, DarkModeStrategy, MergePolicy, Palette, PluginRef, ShadeKey, ThemeConfig,
    ThemeExtend,
};
pub use ports::ContentScanner;
