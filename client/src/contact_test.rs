use super::*;

#[test]
fn collects_known_fields_only() {
    let request = ContactRequest::from_fields([
        ("name", "A".to_string()),
        ("email", "a@b.com".to_string()),
        ("utm_source", "ad".to_string()),
    ]);
    assert_eq!(request.name, "A");
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.phone, "");
}

#[test]
fn serializes_every_field() {
    let request = ContactRequest::from_fields(FIELDS.iter().map(|f| (*f, format!("{f}-value"))));
    let json = serde_json::to_value(&request).unwrap();
    for field in FIELDS {
        assert_eq!(json[field], format!("{field}-value"));
    }
}

#[test]
fn success_reply_shows_server_message() {
    let reply: ContactReply =
        serde_json::from_str(r#"{"success":true,"message":"Message received successfully!"}"#).unwrap();
    assert_eq!(status_text(Some(&reply)), "Message received successfully!");
}

#[test]
fn failure_or_missing_reply_shows_generic_message() {
    let reply: ContactReply = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert_eq!(status_text(Some(&reply)), FAILURE_MESSAGE);
    assert_eq!(status_text(None), FAILURE_MESSAGE);
}
