//! Starter descriptor templates for `init`.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, context};

use crate::domain::{AppError, ConfigFormat, DarkModeStrategy};

static INIT_TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates/init");

/// Scan targets written into a fresh descriptor.
pub const STARTER_CONTENT: [&str; 2] = ["./templates/**/*.html", "./static/**/*.js"];

fn template_name(format: ConfigFormat) -> String {
    format!("utilcfg.{}.j2", format.extension())
}

/// Render the starter descriptor for `format`.
pub fn render_starter_config(
    format: ConfigFormat,
    dark_mode: DarkModeStrategy,
    content: &[&str],
) -> Result<String, AppError> {
    let name = template_name(format);
    let source = INIT_TEMPLATES_DIR
        .get_file(&name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::InternalError(format!("Init template '{}' is missing", name)))?;

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(&name, source)?;

    let template = env.get_template(&name)?;
    let rendered = template.render(context! {
        dark_mode => dark_mode.as_str(),
        content => content,
    })?;
    Ok(rendered + "\n")
}
