pub mod diagnostics;
pub mod report;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use report::{ContentReport, PatternMatch};
