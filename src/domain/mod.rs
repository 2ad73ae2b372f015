pub mod config;
pub mod content;
pub mod error;

pub use config::{
    BuildConfig, ColorLiteral, ColorValue, ConfigError, ConfigFormat, ContentGlob,
    DarkModeStrategy, MergePolicy, Palette, PluginRef, ShadeKey, ThemeConfig, ThemeExtend,
};
pub use content::{ContentReport, Diagnostics, PatternMatch};
pub use error::AppError;
