use crate::domain::Palette;
use crate::ports::ContentScanner;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ContentScanner> {
    scanner: S,
    defaults: Palette,
}

impl<S: ContentScanner> AppContext<S> {
    /// Create a new application context.
    pub fn new(scanner: S, defaults: Palette) -> Self {
        Self { scanner, defaults }
    }

    /// Get a reference to the content scanner.
    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// The generator's default token table.
    pub fn defaults(&self) -> &Palette {
        &self.defaults
    }
}
