//! End-to-end generation passes through the reference host.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;
use tola_styles::config::SiteConfig;
use tola_styles::hooks::Generator;
use tola_styles::site::Site;
use tola_styles::{StyleError, asset};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// A small site: two articles, one page, two stylesheets.
fn sample_site() -> (TempDir, SiteConfig) {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("content");
    write(&content.join("css/theme.css"), "body { margin: 0 }");
    write(&content.join("css/print/print.css"), "@media print {}");
    write(
        &content.join("posts/hello.md"),
        "---\ntitle: Hello\ncss: theme.css, print.css\n---\n\n# Hello",
    );
    write(
        &content.join("posts/toml.md"),
        "+++\ntitle = \"Toml\"\ncss = \"theme.css\"\n+++\n",
    );
    write(
        &content.join("pages/about.md"),
        "---\ntitle: About\ncss:\n---\n",
    );
    write(&content.join("plain.md"), "no frontmatter here");

    let mut config = SiteConfig::default();
    config.normalize_paths(dir.path());
    (dir, config)
}

fn snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_full_pass() {
    let (_dir, config) = sample_site();
    let site = Site::from_config(&config);

    let report = site.build().unwrap();
    assert_eq!(report.articles, 3);
    assert_eq!(report.pages, 1);
    assert_eq!(report.styled, 3);

    let output = &config.build.output;

    // Stylesheets are flattened into output/css
    assert_eq!(
        fs::read_to_string(output.join("css/theme.css")).unwrap(),
        "body { margin: 0 }"
    );
    assert!(output.join("css/print.css").is_file());
    assert!(!output.join("css/print").exists());

    let hello = read_json(&output.join("posts/hello.json"));
    assert_eq!(hello["title"], "Hello");
    assert_eq!(
        hello["styles"],
        json!([
            r#"<link rel="stylesheet" href="%s/css/theme.css" type="text/css">"#,
            r#"<link rel="stylesheet" href="%s/css/print.css" type="text/css">"#,
        ])
    );

    let toml = read_json(&output.join("posts/toml.json"));
    assert_eq!(toml["styles"].as_array().unwrap().len(), 1);

    // Empty `css` still produces one tag, for the empty identifier
    let about = read_json(&output.join("pages/about.json"));
    assert_eq!(
        about["styles"],
        json!([r#"<link rel="stylesheet" href="%s/css/" type="text/css">"#])
    );

    let plain = read_json(&output.join("plain.json"));
    assert_eq!(plain, json!({}));
}

#[test]
fn test_rebuild_is_idempotent() {
    let (_dir, config) = sample_site();
    let site = Site::from_config(&config);
    let css_out = config.build.output.join("css");

    site.build().unwrap();
    let first = snapshot(&css_out);
    let hello_first = fs::read(config.build.output.join("posts/hello.json")).unwrap();

    site.build().unwrap();
    assert_eq!(snapshot(&css_out), first);
    assert_eq!(
        fs::read(config.build.output.join("posts/hello.json")).unwrap(),
        hello_first
    );
}

#[test]
fn test_disabled_styles_passes_through() {
    let (_dir, mut config) = sample_site();
    config.styles.enable = false;
    let site = Site::from_config(&config);

    let report = site.build().unwrap();
    assert_eq!(report.styled, 0);
    assert!(!config.build.output.join("css").exists());

    let hello = read_json(&config.build.output.join("posts/hello.json"));
    assert!(hello.get("styles").is_none());
}

#[test]
fn test_generator_lists_stylesheets_relative_to_content() {
    let (_dir, config) = sample_site();
    let site = Site::from_config(&config);

    let files = site.get_files(asset::CSS_DIR, &[asset::CSS_EXT]);
    assert_eq!(
        files,
        vec![
            Path::new("css/print/print.css").to_path_buf(),
            Path::new("css/theme.css").to_path_buf(),
        ]
    );
}

#[test]
fn test_copy_missing_stylesheet_aborts() {
    let (_dir, config) = sample_site();
    let dest = config.build.output.join("css");

    let err = asset::copy_resources(
        &config.build.content,
        &dest,
        &["css/theme.css", "css/missing.css"],
    )
    .unwrap_err();

    assert!(matches!(err, StyleError::NotFound(_)));
    assert!(dest.join("theme.css").is_file());
}
