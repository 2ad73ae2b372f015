use std::path::Path;

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::domain::{AppError, Palette};
use crate::ports::ContentScanner;

/// Merged color token table for the descriptor at `path`, optionally
/// narrowed to one category.
pub fn execute<S: ContentScanner>(
    ctx: &AppContext<S>,
    path: &Path,
    category: Option<&str>,
) -> Result<Palette, AppError> {
    let config = load_config(path)?;
    let table = config.resolve_colors(ctx.defaults());

    let Some(name) = category else {
        return Ok(table);
    };
    match table.category(name) {
        Some(value) => Ok(std::iter::once((name.to_string(), value.clone())).collect()),
        None => Err(AppError::CategoryNotFound {
            name: name.to_string(),
            available: table.categories().collect::<Vec<_>>().join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::adapters::default_palette;
    use crate::testing::FakeScanner;

    const EXTENDED: &str = r##"
content = ["src/**/*.html"]

[theme.extend.colors]
brand = "#112233"

[theme.extend.colors.pink]
600 = "#ff0066"
"##;

    fn context() -> AppContext<FakeScanner> {
        AppContext::new(FakeScanner::default(), default_palette().unwrap())
    }

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("utilcfg.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn extension_merges_over_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = context();

        let table = execute(&ctx, &write(&dir, EXTENDED), None).unwrap();

        assert_eq!(table.get("pink", Some("600")).unwrap().as_str(), "#ff0066");
        assert_eq!(table.get("pink", Some("500")).unwrap().as_str(), "#ec4899");
        assert_eq!(table.get("brand", None).unwrap().as_str(), "#112233");
        assert_eq!(table.category("blue"), ctx.defaults().category("blue"));
    }

    #[test]
    fn narrows_to_one_category() {
        let dir = TempDir::new().unwrap();

        let table = execute(&context(), &write(&dir, EXTENDED), Some("pink")).unwrap();

        assert_eq!(table.categories().collect::<Vec<_>>(), ["pink"]);
    }

    #[test]
    fn unknown_category_lists_available() {
        let dir = TempDir::new().unwrap();

        let err = execute(&context(), &write(&dir, EXTENDED), Some("teal")).unwrap_err();

        assert!(matches!(err, AppError::CategoryNotFound { ref name, .. } if name == "teal"));
        assert!(err.to_string().contains("pink"));
    }
}
