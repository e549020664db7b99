use folio_core::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn sample() -> serde_json::Value {
    json!({
        "profile": {
            "name": "Ana Souza",
            "birth_date": "1990-06-15",
            "contacts": {"email": "ana@example.com"}
        },
        "courses": [
            {"name": "Machine Learning", "institution": "MIT ", "tags": ["ai", "python"], "conclusion": "2021-03-15"},
            {"name": "Web Development", "institution": "UFRJ", "tags": ["web"]},
            {"name": "Deep Learning", "institution": "MIT", "tags": [" ai"]}
        ],
        "books": [
            {"title": "The Rust Programming Language", "publish_name": "No Starch Press", "tags": ["rust"]}
        ]
    })
}

#[test]
fn test_load_portfolio_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    fs::write(&path, sample().to_string()).unwrap();

    let data = load_portfolio(&path).unwrap();

    assert_eq!(data.profile.name, "Ana Souza");
    assert_eq!(data.courses.len(), 3);
    assert_eq!(data.books.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_portfolio(dir.path().join("missing.json"));

    assert!(matches!(result, Err(FolioError::Io(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    assert!(matches!(parse_portfolio("{not json"), Err(FolioError::Json(_))));
}

#[test]
fn test_schema_violation_is_reported() {
    let data = json!({"profile": {"name": "Ana"}, "books": [{"title": "Dune"}]});

    match parse_portfolio(&data.to_string()) {
        Err(FolioError::Schema(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_content_rules_are_checked() {
    let data = json!({"profile": {"name": ""}});

    match parse_portfolio(&data.to_string()) {
        Err(FolioError::Validation(errors)) => {
            assert_eq!(errors, vec!["Profile name cannot be empty".to_string()])
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_save_then_load_keeps_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let data = parse_portfolio(&sample().to_string()).unwrap();

    save_portfolio(&data, &path).unwrap();

    assert_eq!(load_portfolio(&path).unwrap(), data);
}

#[test]
fn test_course_view_over_loaded_data() {
    let data = parse_portfolio(&sample().to_string()).unwrap();
    let mut view = FacetedListView::new(ItemKind::Course, data.courses);

    assert_eq!(view.sorted_groups(), vec!["MIT", "UFRJ"]);
    assert_eq!(view.sorted_tags(), vec!["ai", "python", "web"]);

    view.on_page_change(4);
    view.toggle_group("MIT");
    assert_eq!(view.pagination().current_page(), 1);

    let page = view.visible_page(SortBy::default());
    let names: Vec<&str> = page.iter().map(|(_, c)| c.name.as_str()).collect();
    assert_eq!(names, vec!["Deep Learning", "Machine Learning"]);

    let cleared = view.clear_filters();
    assert_eq!(cleared.groups, vec!["MIT"]);
    assert_eq!(view.filtered_items(SortBy::default()).len(), 3);
}
