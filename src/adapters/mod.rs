pub mod assets;
pub mod filesystem;

pub use assets::{STARTER_CONTENT, default_palette, render_starter_config};
pub use filesystem::FilesystemScanner;
