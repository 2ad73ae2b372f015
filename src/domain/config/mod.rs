pub mod build_config;
pub mod color;
pub mod content;
pub mod dark_mode;
pub mod dto;
pub mod error;
pub mod format;
pub mod palette;
pub mod parse;
pub mod paths;
pub mod plugin;
pub mod scalar;

pub use build_config::{BuildConfig, ThemeConfig, ThemeExtend};
pub use color::ColorLiteral;
pub use content::ContentGlob;
pub use dark_mode::DarkModeStrategy;
pub use dto::BuildConfigDto;
pub use error::ConfigError;
pub use format::ConfigFormat;
pub use palette::{ColorValue, ColorValueDto, MergePolicy, Palette, ShadeKey};
pub use parse::{fingerprint, parse_config_content, to_artifact_string};
pub use plugin::PluginRef;
pub use scalar::RawScalar;
