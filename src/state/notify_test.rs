use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let first = state.push_success("saved");
    let second = state.push_error("failed");
    assert!(second > first);
    assert_eq!(state.queue.len(), 2);
}

#[test]
fn notices_keep_fifo_order() {
    let mut state = NotifyState::default();
    state.push_success("one");
    state.push_success("two");
    let texts: Vec<&str> = state.queue.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn expire_removes_only_the_named_notice() {
    let mut state = NotifyState::default();
    let first = state.push_success("keep me out");
    state.push_error("still here");
    state.expire(first);
    assert_eq!(state.queue.len(), 1);
    assert_eq!(state.queue[0].kind, NoticeKind::Error);
}

#[test]
fn expire_is_idempotent() {
    let mut state = NotifyState::default();
    let id = state.push_success("once");
    state.expire(id);
    state.expire(id);
    assert!(state.queue.is_empty());
}

#[test]
fn partial_failure_surfaces_two_independent_notices() {
    // Delete succeeded server-side but the follow-up refresh failed: both
    // outcomes are reported separately, never merged.
    let mut state = NotifyState::default();
    state.push_success("Member deleted successfully!");
    state.push_error("Error fetching members: timeout");
    assert_eq!(state.queue[0].kind, NoticeKind::Success);
    assert_eq!(state.queue[1].kind, NoticeKind::Error);
}
