mod common;

use std::path::Path;

use common::{REFERENCE_TOML, TestContext};
use utilcfg::{
    AppError, CheckOptions, ConfigError, ConfigFormat, DarkModeStrategy, InitOptions,
    default_palette, load_config, parse_config_content,
};

#[test]
fn load_config_reads_reference_descriptor() {
    let ctx = TestContext::new();
    let path = ctx.write_reference_config();

    let config = load_config(&path).unwrap();

    assert_eq!(config.dark_mode, DarkModeStrategy::Class);
    assert_eq!(config.content.len(), 2);
    assert!(config.plugins.is_empty());
}

#[test]
fn merged_tokens_keep_unrelated_defaults_unmodified() {
    let config = parse_config_content(REFERENCE_TOML, ConfigFormat::Toml).unwrap();
    let defaults = default_palette().unwrap();

    let merged = config.resolve_colors(&defaults);

    assert_eq!(merged.get("pink", Some("600")).unwrap().as_str(), "#db2777");
    for (name, value) in defaults.iter().filter(|(name, _)| *name != "pink") {
        assert_eq!(merged.category(name), Some(value), "default category '{name}' changed");
    }
    assert_eq!(merged.len(), defaults.len());
}

#[test]
fn check_at_reports_unmatched_patterns() {
    let ctx = TestContext::new();
    ctx.write_reference_config();
    ctx.write_file("static/app.js", "");

    let outcome = utilcfg::check_at(ctx.work_dir(), None, CheckOptions::default()).unwrap();

    let unmatched: Vec<&str> = outcome.report.unmatched().map(|glob| glob.as_str()).collect();
    assert_eq!(unmatched, ["./templates/**/*.html"]);
    assert_eq!(outcome.exit_code(false), 0);
    assert_eq!(outcome.exit_code(true), 1);
}

#[test]
fn check_at_resolves_relative_root_against_dir() {
    let ctx = TestContext::new();
    ctx.write_file("utilcfg.toml", "content = [\"**/*.html\"]\n");
    ctx.write_file("site/index.html", "");

    let options = CheckOptions { root: Some("site".into()), ..CheckOptions::default() };
    let outcome = utilcfg::check_at(ctx.work_dir(), None, options).unwrap();

    assert_eq!(outcome.report.root, ctx.work_dir().join("site"));
    assert_eq!(outcome.report.unique_files().len(), 1);
}

#[test]
fn check_at_scans_hidden_directories_on_request() {
    let ctx = TestContext::new();
    ctx.write_file("utilcfg.toml", "content = [\"**/*.html\"]\n");
    ctx.write_file(".site/index.html", "");

    let skipped = utilcfg::check_at(ctx.work_dir(), None, CheckOptions::default()).unwrap();
    let options = CheckOptions { include_hidden: true, ..CheckOptions::default() };
    let scanned = utilcfg::check_at(ctx.work_dir(), None, options).unwrap();

    assert_eq!(skipped.exit_code(true), 1);
    assert_eq!(scanned.report.unique_files().len(), 1);
    assert_eq!(scanned.exit_code(true), 0);
}

#[test]
fn show_at_defaults_to_source_format() {
    let ctx = TestContext::new();
    ctx.write_file("utilcfg.yml", "content:\n  - \"src/**\"\n");

    let rendered = utilcfg::show_at(ctx.work_dir(), None, None).unwrap();

    assert!(rendered.contains("darkMode: media"));
}

#[test]
fn tokens_at_narrows_category() {
    let ctx = TestContext::new();
    ctx.write_reference_config();

    let table = utilcfg::tokens_at(ctx.work_dir(), None, Some("pink")).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("pink", Some("950")).unwrap().as_str(), "#500724");
}

#[test]
fn init_at_then_fingerprint_at() {
    let ctx = TestContext::new();
    let options = InitOptions { format: ConfigFormat::Json, ..InitOptions::default() };

    let path = utilcfg::init_at(ctx.work_dir(), options).unwrap();
    let digest = utilcfg::fingerprint_at(ctx.work_dir(), None).unwrap();

    assert_eq!(path, ctx.work_dir().join("utilcfg.json"));
    assert_eq!(digest.len(), 64);
}

#[test]
fn explicit_missing_config_is_io_error() {
    let ctx = TestContext::new();

    let err = utilcfg::fingerprint_at(ctx.work_dir(), Some(Path::new("nope.toml"))).unwrap_err();

    assert!(matches!(err, AppError::Config(ConfigError::Io { .. })));
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
