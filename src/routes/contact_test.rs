use super::*;

#[test]
fn received_response_matches_contract() {
    let json = serde_json::to_value(ContactResponse::received()).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "message": "Message received successfully!"}));
}

#[test]
fn parse_json_reads_fields() {
    let submission = parse_json(br#"{"name":"A","phone":"1","email":"a@b.com","service":"x","message":"hi"}"#);
    assert_eq!(submission.name.as_deref(), Some("A"));
    assert_eq!(submission.service.as_deref(), Some("x"));
}

#[test]
fn parse_json_treats_garbage_as_empty() {
    assert!(parse_json(b"{not json").is_empty());
    assert!(parse_json(b"").is_empty());
    assert!(parse_json(b"  \n").is_empty());
}
