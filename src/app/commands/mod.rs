pub mod check;
pub mod fingerprint;
pub mod init;
pub mod show;
pub mod tokens;
