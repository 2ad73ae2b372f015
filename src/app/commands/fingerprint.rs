use std::path::Path;

use crate::app::config::load_config;
use crate::domain::AppError;
use crate::domain::config::fingerprint;

/// Cache key for the descriptor at `path`.
pub fn execute(path: &Path) -> Result<String, AppError> {
    let config = load_config(path)?;
    Ok(fingerprint(&config)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn equal_descriptors_in_different_formats_share_fingerprint() {
        let dir = TempDir::new().unwrap();
        let toml_path = dir.path().join("a.toml");
        let yaml_path = dir.path().join("b.yaml");
        fs::write(&toml_path, "darkMode = \"class\"\ncontent = [\"src/**/*.html\"]\n").unwrap();
        fs::write(&yaml_path, "content:\n  - \"src/**/*.html\"\ndarkMode: class\n").unwrap();

        assert_eq!(execute(&toml_path).unwrap(), execute(&yaml_path).unwrap());
    }
}
