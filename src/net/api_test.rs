use super::*;
use crate::net::types::MemberRole;

#[test]
fn collection_endpoint_formats_expected_path() {
    assert_eq!(collection_endpoint("members"), "/api/members");
}

#[test]
fn record_endpoint_includes_the_id() {
    assert_eq!(record_endpoint("awards", "a-42"), "/api/awards/a-42");
}

#[test]
fn list_endpoint_without_filter_is_the_collection() {
    assert_eq!(list_endpoint("events", None), "/api/events");
}

#[test]
fn list_endpoint_with_filter_adds_type_query() {
    assert_eq!(list_endpoint("members", Some("faculty")), "/api/members?type=faculty");
}

#[test]
fn status_message_formats_status() {
    assert_eq!(status_message(503), "request failed: 503");
}

#[test]
fn upsert_body_strips_server_owned_fields() {
    let member = MemberRecord {
        id: "m-1".to_owned(),
        name: "John Doe".to_owned(),
        designation: "Professor".to_owned(),
        image: None,
        linkedin: None,
        created_at: 123,
        role: MemberRole::Faculty {
            department: "Computer Science".to_owned(),
        },
    };
    let body = upsert_body(&member);
    assert!(body.get("id").is_none());
    assert!(body.get("createdAt").is_none());
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["type"], "faculty");
}
