//! Loading manifests and CSS-modules tables from disk.

use std::fs;

use classed::{render_html, Manifest, ManifestError, Props, StyleTable, TableError};
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/app.json");

#[test]
fn test_load_fixture_manifest() {
    let library = Manifest::load(FIXTURE).unwrap();
    let names: Vec<&str> = library.names().collect();
    assert_eq!(names, vec!["Box", "Simple", "Banner"]);

    let boxed = library.require("Box").unwrap();
    assert_eq!(
        boxed.class_name(&Props::new()),
        "App_red__3kTq1 App_small__Qe7rB App_base__0hWcd"
    );
    assert_eq!(
        boxed.class_name(&Props::new().set("size", "massive").set("color", "harsh")),
        "App_red__3kTq1 App_big__Lm2x0 App_base__0hWcd"
    );

    let simple = library.require("Simple").unwrap();
    assert_eq!(
        simple.class_name(&Props::new()),
        "App_big__Lm2x0 App_green__9aPzv"
    );
}

#[test]
fn test_fixture_banner_wraps_box() {
    let library = Manifest::load(FIXTURE).unwrap();
    let banner = library.require("Banner").unwrap();
    assert_eq!(banner.display_name(), Some("Classed.Classed.div"));

    let html = render_html(&banner.render(
        Props::new().set("color", "soft").child("Tiny soft"),
        None,
    ))
    .unwrap();
    assert_eq!(
        html,
        r#"<div color="soft" class="App_green__9aPzv App_small__Qe7rB App_base__0hWcd App_big__Lm2x0">Tiny soft</div>"#
    );
}

#[test]
fn test_fixture_has_no_problems() {
    let manifest = Manifest::from_path(FIXTURE).unwrap();
    let base_dir = std::path::Path::new(FIXTURE).parent().unwrap();
    assert!(manifest.problems(base_dir).unwrap().is_empty());
}

#[test]
fn test_table_file_relative_to_manifest() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("styles")).unwrap();
    fs::write(
        dir.path().join("styles/card.module.json"),
        r#"{"card": "Card_card__x", "raised": "Card_raised__y"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{
            "tableFile": "styles/card.module.json",
            "components": {
                "Card": {
                    "target": "article",
                    "variants": {"elevation": {"raised": "raised"}},
                    "classNames": ["card"]
                }
            }
        }"#,
    )
    .unwrap();

    let library = Manifest::load(dir.path().join("manifest.json")).unwrap();
    let card = library.require("Card").unwrap();
    assert_eq!(
        card.class_name(&Props::new().set("elevation", "raised")),
        "Card_raised__y Card_card__x"
    );
    // No selection and no default: the axis is left out.
    assert_eq!(card.class_name(&Props::new()), "Card_card__x");
}

#[test]
fn test_missing_table_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"tableFile": "nope.json", "components": {}}"#,
    )
    .unwrap();

    let err = Manifest::load(dir.path().join("manifest.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Table(TableError::Io { .. })));
}

#[test]
fn test_malformed_manifest_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Manifest::load(&path).unwrap_err();
    match err {
        ManifestError::Parse { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_table_from_css_modules_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("App.module.json");
    fs::write(&path, r#"{"base": "App_base__1"}"#).unwrap();
    let table = StyleTable::from_path(&path).unwrap();
    assert_eq!(table.get("base"), Some("App_base__1"));

    fs::write(&path, r#"["base"]"#).unwrap();
    assert!(matches!(
        StyleTable::from_path(&path),
        Err(TableError::Parse { path: Some(_), .. })
    ));
}
