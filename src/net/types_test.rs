use super::*;

fn faculty(name: &str, department: &str) -> MemberRecord {
    MemberRecord {
        id: "m-1".to_owned(),
        name: name.to_owned(),
        designation: "Professor".to_owned(),
        image: None,
        linkedin: None,
        created_at: 1_700_000_000_000,
        role: MemberRole::Faculty {
            department: department.to_owned(),
        },
    }
}

// =============================================================
// Role discriminator mapping
// =============================================================

#[test]
fn role_type_keys_match_filter_values() {
    let roles = [
        MemberRole::Faculty { department: String::new() },
        MemberRole::Advisory { education: String::new() },
        MemberRole::Executive { position: String::new(), education: String::new() },
        MemberRole::Core { position: String::new(), education: String::new() },
        MemberRole::Member { education: String::new() },
    ];
    for role in &roles {
        assert!(
            MemberRole::FILTERS.iter().any(|(value, _)| *value == role.type_key()),
            "no filter tab for {}",
            role.type_key()
        );
    }
}

#[test]
fn faculty_has_department_but_no_position() {
    let role = MemberRole::Faculty { department: "Computer Science".to_owned() };
    assert_eq!(role.department(), Some("Computer Science"));
    assert_eq!(role.position(), None);
    assert_eq!(role.education(), None);
}

#[test]
fn executive_has_position_and_education_but_no_department() {
    let role = MemberRole::Executive {
        position: "Secretary".to_owned(),
        education: "B.Tech".to_owned(),
    };
    assert_eq!(role.position(), Some("Secretary"));
    assert_eq!(role.education(), Some("B.Tech"));
    assert_eq!(role.department(), None);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn member_serializes_role_under_type_discriminator() {
    let member = faculty("John Doe", "Computer Science");
    let value = serde_json::to_value(&member).expect("serialize");
    assert_eq!(value["type"], "faculty");
    assert_eq!(value["department"], "Computer Science");
    assert_eq!(value["createdAt"], 1_700_000_000_000_i64);
    assert!(value.get("position").is_none());
}

#[test]
fn member_deserializes_from_flat_wire_object() {
    let member: MemberRecord = serde_json::from_value(serde_json::json!({
        "id": "m-9",
        "name": "Jane Roe",
        "designation": "Student",
        "type": "core",
        "position": "Treasurer",
        "education": "B.E.",
        "createdAt": 5
    }))
    .expect("deserialize");
    assert_eq!(member.role.position(), Some("Treasurer"));
    assert_eq!(member.role.type_key(), "core");
}

#[test]
fn member_missing_record_id_defaults_to_empty() {
    let member: MemberRecord = serde_json::from_value(serde_json::json!({
        "name": "New",
        "designation": "Student",
        "type": "member",
        "education": "B.Sc."
    }))
    .expect("deserialize");
    assert_eq!(member.id, "");
    assert_eq!(member.created_at, 0);
}

// =============================================================
// Search haystacks
// =============================================================

#[test]
fn member_search_includes_role_secondary_field() {
    let member = faculty("John Doe", "Computer Science");
    let haystacks = Browsable::search_haystacks(&member);
    assert!(haystacks.contains(&"John Doe"));
    assert!(haystacks.contains(&"Computer Science"));
}

#[test]
fn award_without_awarded_by_searches_title_only() {
    let award = AwardRecord {
        id: "a-1".to_owned(),
        title: "Best Chapter".to_owned(),
        date: None,
        awarded_by: None,
        description: None,
        image: None,
        created_at: 0,
    };
    assert_eq!(Browsable::search_haystacks(&award), vec!["Best Chapter"]);
}
