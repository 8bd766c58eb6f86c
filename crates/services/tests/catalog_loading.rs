use std::io::Write;

use fit_core::model::ModelKind;
use services::{Catalog, CatalogError, SessionService};

const CATALOG: &str = r#"[
  {
    "id": 10,
    "title": "Flat",
    "model": {"type": "horizontal", "c": 2},
    "points": [{"x": 0, "y": 1}, {"x": 1, "y": 2}, {"x": 2, "y": 3}],
    "prompt": "Score y = 2."
  },
  {
    "id": 11,
    "title": "Bowl",
    "model": {"type": "parabola", "a": 1, "b": 0, "c": -1},
    "points": [{"x": -1, "y": 0}, {"x": 0, "y": -1}, {"x": 1, "y": 0}, {"x": 2, "y": 3}],
    "prompt": "Score y = x^2 - 1."
  }
]"#;

#[test]
fn loads_catalog_from_file() {
    let path = std::env::temp_dir().join(format!("fit-catalog-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create temp catalog");
    file.write_all(CATALOG.as_bytes()).expect("write temp catalog");
    drop(file);

    let catalog = Catalog::from_path(&path).expect("load catalog");
    let _ = std::fs::remove_file(&path);

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.questions()[1].model().kind(), ModelKind::Parabola);

    let mut session = SessionService::new(catalog);
    session.toggle_reveal();
    assert_eq!(session.frame().solution.as_ref().unwrap().mse, 2.0 / 3.0);
    session.next();
    assert_eq!(session.frame().solution, None);
    assert_eq!(session.frame().equation, "y = 1x² + 0x \u{2212} 1");
}

#[test]
fn missing_file_reports_path() {
    let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert!(path.ends_with("here.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(CatalogError::Json(_))
    ));
}
