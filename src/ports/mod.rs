mod content_scanner;

pub use content_scanner::ContentScanner;
