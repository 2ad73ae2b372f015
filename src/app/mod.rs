pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
mod context;

pub use context::AppContext;
