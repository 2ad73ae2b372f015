//! Filesystem-backed descriptor discovery and loading.
//!
//! Pure parsing and validation live in `domain::config`.

mod load_config;

pub use load_config::{discover_config, load_config, resolve_config_path};
