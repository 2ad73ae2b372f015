mod fake_scanner;

pub use fake_scanner::FakeScanner;
