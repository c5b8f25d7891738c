//! Documents discovered on disk walked through a channel value.

use std::fs;

use leafwalk_core::{Extractor, LeafwalkConfig};
use leafwalk_value::{Shape, Value, walk};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn corpus() -> TempDir {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("nested");
    fs::create_dir(&nested).unwrap();

    fs::write(temp.path().join("a.json"), r#"{ "greeting": "hello" }"#).unwrap();
    fs::write(nested.join("b.json"), r#"[1, "two", { "three": "3" }]"#).unwrap();
    temp
}

#[test]
fn document_stream_closes_after_last_document() {
    let temp = corpus();
    let config = LeafwalkConfig {
        channel_capacity: 1,
        ..LeafwalkConfig::default()
    };

    let documents = Extractor::new(config).documents(&[temp.path().to_path_buf()]);
    assert_eq!(documents.shape(), Shape::Channel);

    let mut got = Vec::new();
    walk(&documents, |text| got.push(text.to_string()));

    // path, text of a.json, then path, texts of nested/b.json
    assert_eq!(got.len(), 5);
    assert!(got[0].ends_with("a.json"));
    assert_eq!(got[1], "hello");
    assert!(got[2].ends_with("b.json"));
    assert_eq!(&got[3..], ["two", "3"]);
}

#[test]
fn extract_paths_over_multiple_roots() {
    let first = corpus();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("z.json"), r#""last""#).unwrap();

    let texts: Vec<_> = Extractor::default()
        .extract_paths(&[first.path().to_path_buf(), second.path().to_path_buf()])
        .into_iter()
        .map(|found| found.text)
        .collect();

    assert_eq!(texts.len(), 4);
    assert!(texts.contains(&"hello".to_string()));
    assert!(texts.contains(&"last".to_string()));
}

#[test]
fn in_memory_and_on_disk_documents_agree() {
    let temp = corpus();
    let on_disk: Vec<_> = Extractor::default()
        .extract_paths(&[temp.path().join("nested")])
        .into_iter()
        .map(|found| found.text)
        .collect();

    let in_memory = leafwalk_core::parse_document(
        r#"[1, "two", { "three": "3" }]"#,
        LeafwalkConfig::default().object_layout,
    )
    .unwrap();
    let mut expected = Vec::new();
    walk(&in_memory, |text| expected.push(text.to_string()));

    assert_eq!(on_disk, expected);
    assert!(!matches!(in_memory, Value::Unit));
}
