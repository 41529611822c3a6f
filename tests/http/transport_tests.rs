use dbtap::{Body, decode_body};
use serde_json::json;

#[test]
fn test_decode_body_valid_json_object() {
    let decoded = decode_body(r#"{"items": [], "total_items": 0}"#);

    assert_eq!(decoded, json!({ "items": [], "total_items": 0 }));
}

#[test]
fn test_decode_body_valid_json_array() {
    let decoded = decode_body(r#"[1, 2, 3]"#);

    assert_eq!(decoded, json!([1, 2, 3]));
}

#[test]
fn test_decode_body_plain_text_degrades_to_message() {
    let decoded = decode_body("Moved Permanently");

    assert_eq!(decoded, json!({ "message": "Moved Permanently" }));
}

#[test]
fn test_decode_body_empty_degrades_to_message() {
    let decoded = decode_body("");

    assert_eq!(decoded, json!({ "message": "" }));
}

#[test]
fn test_decode_body_truncated_json_degrades_to_message() {
    let raw = r#"{"name": "test_db"#;

    assert_eq!(decode_body(raw), json!({ "message": raw }));
}

#[test]
fn test_encode_json_body() {
    let body = Body::Json(json!({ "name": "ns" }));

    assert_eq!(body.encode().expect("encode"), r#"{"name":"ns"}"#);
}

#[test]
fn test_encode_text_body_is_byte_for_byte() {
    let raw = "select * from ns where year > 2010\n";
    let body = Body::Text(raw.to_string());

    assert_eq!(body.encode().expect("encode"), raw);
}
