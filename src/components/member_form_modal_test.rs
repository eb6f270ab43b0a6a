use super::*;

#[test]
fn faculty_role_keeps_only_department() {
    let role = assemble_role("faculty", " Computer Science ", "ignored", "ignored");
    assert_eq!(
        role,
        MemberRole::Faculty {
            department: "Computer Science".to_owned()
        }
    );
}

#[test]
fn executive_and_core_carry_position_and_education() {
    let executive = assemble_role("executive", "", "Secretary", "B.Tech");
    assert_eq!(executive.position(), Some("Secretary"));
    assert_eq!(executive.education(), Some("B.Tech"));

    let core = assemble_role("core", "", "Treasurer", "B.E.");
    assert_eq!(core.position(), Some("Treasurer"));
    assert_eq!(core.education(), Some("B.E."));
}

#[test]
fn advisory_carries_education_only() {
    let role = assemble_role("advisory", "", "ignored", "M.Tech");
    assert_eq!(
        role,
        MemberRole::Advisory {
            education: "M.Tech".to_owned()
        }
    );
}

#[test]
fn unknown_type_falls_back_to_plain_member() {
    let role = assemble_role("mystery", "", "", "B.Sc.");
    assert_eq!(role.type_key(), "member");
}

#[test]
fn saved_message_distinguishes_edit_from_create() {
    assert_eq!(saved_message(true), "Member updated successfully!");
    assert_eq!(saved_message(false), "Member added successfully!");
}
