use anyhow::Result;
use serde_json::json;

use bit_bookmarks::infrastructure::schema_validator::validate_bookmarks_file;
use bit_bookmarks::infrastructure::serde_json_adapter::decode_bookmarks;

#[test]
fn validate_valid_bookmarks_file_integration() -> Result<()> {
    let valid = json!([
        {"name": "Docs", "link": "https://x.test", "tags": ["ref", "go"]},
        {"name": "Docs", "link": "https://x.test", "tags": []},
        {"link": "relative/file.txt", "name": "no tags"},
        {"name": "Keep", "link": "https://k.test", "tags": null},
        {"name": "NoLink"}
    ]);

    validate_bookmarks_file(&valid)?;
    Ok(())
}

#[test]
fn validate_invalid_bookmarks_file_integration() {
    for invalid in [
        json!({"name": "Docs", "link": "https://x.test"}),
        json!([{"name": ["Docs"]}]),
        json!([{"name": "Docs", "link": 42}]),
        json!([{"name": "Docs", "link": "https://x.test", "tags": "ref"}]),
        json!(["https://x.test"]),
    ] {
        assert!(validate_bookmarks_file(&invalid).is_err(), "{invalid}");
    }
}

#[test]
fn decode_reports_schema_violations_as_errors() {
    let err = decode_bookmarks(br#"[{"name": "Docs", "link": 42}]"#).unwrap_err();
    assert!(err.to_string().contains("does not match schema"), "{err}");

    let err = decode_bookmarks(b"[{").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn decode_keeps_unknown_fields_out_of_the_model() -> Result<()> {
    let dtos = decode_bookmarks(br#"[{"name": "a", "link": "b", "tags": ["t"], "extra": 1}]"#)
        .map_err(|e| anyhow::anyhow!(e))?;
    assert_eq!(dtos.len(), 1);
    assert_eq!(dtos[0].tags, vec!["t".to_string()]);
    Ok(())
}
