mod config_templates;
mod default_palette;

pub use config_templates::{STARTER_CONTENT, render_starter_config};
pub use default_palette::default_palette;
