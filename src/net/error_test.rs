use super::*;

#[test]
fn fetch_error_carries_collaborator_message_verbatim() {
    let err = StoreError::Fetch {
        collection: "members",
        message: "permission denied".to_owned(),
    };
    assert_eq!(err.to_string(), "Error fetching members: permission denied");
}

#[test]
fn delete_error_names_the_collection() {
    let err = StoreError::Delete {
        collection: "awards",
        message: "network unreachable".to_owned(),
    };
    assert_eq!(err.to_string(), "Error deleting awards record: network unreachable");
}

#[test]
fn save_error_names_the_collection() {
    let err = StoreError::Save {
        collection: "events",
        message: "timeout".to_owned(),
    };
    assert_eq!(err.to_string(), "Error saving events record: timeout");
}
