use super::*;

#[derive(Clone, Debug, PartialEq)]
struct TestRecord {
    id: String,
    name: String,
    position: Option<String>,
    kind: Option<&'static str>,
    created_at: i64,
}

impl Browsable for TestRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn type_key(&self) -> Option<&str> {
        self.kind
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![self.name.as_str()];
        if let Some(position) = self.position.as_deref() {
            haystacks.push(position);
        }
        haystacks
    }
}

fn record(id: &str, name: &str, kind: &'static str, created_at: i64) -> TestRecord {
    TestRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        position: None,
        kind: Some(kind),
        created_at,
    }
}

/// Five faculty and three members, newest first, as one fetched snapshot.
fn mixed_snapshot() -> Vec<TestRecord> {
    vec![
        record("f1", "Faculty One", "faculty", 80),
        record("f2", "Faculty Two", "faculty", 70),
        record("m1", "Member One", "member", 60),
        record("f3", "Faculty Three", "faculty", 50),
        record("m2", "Member Two", "member", 40),
        record("f4", "Faculty Four", "faculty", 30),
        record("m3", "Member Three", "member", 20),
        record("f5", "Faculty Five", "faculty", 10),
    ]
}

fn loaded(records: Vec<TestRecord>) -> BrowserState<TestRecord> {
    let mut state = BrowserState::default();
    let token = state.begin_refresh();
    assert!(state.apply_snapshot(token, Ok(records), false).is_none());
    state
}

// =============================================================
// Snapshot application and refresh races
// =============================================================

#[test]
fn default_state_is_empty_page_one() {
    let state = BrowserState::<TestRecord>::default();
    assert!(state.records.is_empty());
    assert!(!state.loading);
    assert_eq!(state.current_page, 1);
    assert!(state.pending_delete.is_none());
}

#[test]
fn begin_refresh_sets_loading() {
    let mut state = BrowserState::<TestRecord>::default();
    state.begin_refresh();
    assert!(state.loading);
}

#[test]
fn successful_snapshot_replaces_records_and_resets_page() {
    let mut state = loaded(mixed_snapshot());
    state.current_page = 2;
    let token = state.begin_refresh();
    let err = state.apply_snapshot(token, Ok(vec![record("x", "X", "member", 1)]), false);
    assert!(err.is_none());
    assert!(!state.loading);
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.current_page, 1);
}

#[test]
fn snapshot_ordering_is_non_increasing_in_created_at() {
    let state = loaded(mixed_snapshot());
    let stamps: Vec<i64> = state.records.iter().map(Browsable::created_at).collect();
    assert!(stamps.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn failed_fetch_keeps_previous_snapshot_intact() {
    let mut state = loaded(mixed_snapshot());
    let token = state.begin_refresh();
    let err = state.apply_snapshot(
        token,
        Err(crate::net::error::StoreError::Fetch {
            collection: "members",
            message: "boom".to_owned(),
        }),
        false,
    );
    assert!(err.is_some());
    assert!(!state.loading);
    assert_eq!(state.records.len(), 8);
}

#[test]
fn superseded_fetch_result_is_discarded() {
    let mut state = BrowserState::<TestRecord>::default();
    let stale = state.begin_refresh();
    let fresh = state.begin_refresh();
    // Fresh result lands first.
    assert!(state
        .apply_snapshot(fresh, Ok(vec![record("new", "New", "member", 2)]), false)
        .is_none());
    // Stale result arrives late and must not clobber the newer snapshot.
    assert!(state
        .apply_snapshot(stale, Ok(vec![record("old", "Old", "member", 1)]), false)
        .is_none());
    assert_eq!(state.records[0].id, "new");
}

#[test]
fn stale_error_is_swallowed_without_notification() {
    let mut state = BrowserState::<TestRecord>::default();
    let stale = state.begin_refresh();
    let fresh = state.begin_refresh();
    assert!(state.apply_snapshot(fresh, Ok(Vec::new()), false).is_none());
    let err = state.apply_snapshot(
        stale,
        Err(crate::net::error::StoreError::Fetch {
            collection: "members",
            message: "late failure".to_owned(),
        }),
        false,
    );
    assert!(err.is_none());
}

// =============================================================
// Filtering and search
// =============================================================

#[test]
fn no_filter_and_empty_search_returns_records_unchanged() {
    let state = loaded(mixed_snapshot());
    let view: Vec<&TestRecord> = state.filtered();
    let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
    let original: Vec<&str> = state.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, original);
}

#[test]
fn filtered_view_is_idempotent() {
    let mut state = loaded(mixed_snapshot());
    state.set_filter(Some("faculty".to_owned()));
    state.set_search("three".to_owned());
    let first: Vec<String> = state.filtered().iter().map(|r| r.id.clone()).collect();
    let second: Vec<String> = state.filtered().iter().map(|r| r.id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn type_filter_keeps_only_matching_records() {
    let mut state = loaded(mixed_snapshot());
    state.set_filter(Some("member".to_owned()));
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn type_filter_skipped_when_snapshot_was_server_filtered() {
    let mut state = BrowserState::default();
    state.set_filter(Some("faculty".to_owned()));
    let token = state.begin_refresh();
    // Server already narrowed to faculty; records deliberately carry a
    // different key to prove the client filter is not applied twice.
    let snapshot = vec![record("m9", "Server Filtered", "member", 5)];
    assert!(state.apply_snapshot(token, Ok(snapshot), true).is_none());
    assert_eq!(state.filtered().len(), 1);
}

#[test]
fn search_matches_case_insensitively() {
    let mut state = loaded(vec![
        record("d1", "John Doe", "member", 2),
        record("r1", "Jane Roe", "member", 1),
    ]);
    state.set_search("doe".to_owned());
    let view = state.filtered();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "John Doe");
}

#[test]
fn search_on_absent_field_excludes_without_error() {
    let with_position = TestRecord {
        id: "p1".to_owned(),
        name: "Alpha".to_owned(),
        position: Some("Secretary".to_owned()),
        kind: Some("executive"),
        created_at: 2,
    };
    let without_position = record("p2", "Beta", "faculty", 1);
    let mut state = loaded(vec![with_position, without_position]);
    state.set_search("secretary".to_owned());
    let view = state.filtered();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "p1");
}

#[test]
fn changing_search_resets_to_page_one() {
    let mut state = loaded(mixed_snapshot());
    state.next_page();
    assert_eq!(state.current_page, 2);
    state.set_search("faculty".to_owned());
    assert_eq!(state.current_page, 1);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn faculty_filter_page_two_holds_exactly_the_fifth_by_recency() {
    let mut state = loaded(mixed_snapshot());
    state.set_filter(Some("faculty".to_owned()));
    let page = state.page_slice(2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, "f5");
}

#[test]
fn out_of_range_pages_yield_empty_slices() {
    let state = loaded(mixed_snapshot());
    assert!(state.page_slice(0).is_empty());
    assert!(state.page_slice(99).is_empty());
}

#[test]
fn total_pages_rounds_up() {
    let state = loaded(mixed_snapshot());
    assert_eq!(state.total_pages(), 2);
}

#[test]
fn empty_filtered_view_has_zero_pages() {
    let mut state = loaded(mixed_snapshot());
    state.set_search("no such person".to_owned());
    assert_eq!(state.total_pages(), 0);
    assert!(state.current_slice().is_empty());
}

#[test]
fn navigation_clamps_at_both_bounds() {
    let mut state = loaded(mixed_snapshot());
    assert!(!state.can_prev());
    state.prev_page();
    assert_eq!(state.current_page, 1);
    state.next_page();
    assert_eq!(state.current_page, 2);
    assert!(!state.can_next());
    state.next_page();
    assert_eq!(state.current_page, 2);
}

// =============================================================
// Snapshot record lookup
// =============================================================

#[test]
fn find_record_selects_by_id() {
    let snapshot = mixed_snapshot();
    let found = find_record(&snapshot, "f3").expect("known id");
    assert_eq!(found.name, "Faculty Three");
}

#[test]
fn find_record_returns_none_for_unknown_id() {
    let snapshot = mixed_snapshot();
    assert!(find_record(&snapshot, "nope").is_none());
    assert!(find_record(&snapshot[..0], "f1").is_none());
}

// =============================================================
// Delete-confirmation state machine
// =============================================================

#[test]
fn request_then_cancel_leaves_no_pending_delete() {
    let mut state = loaded(mixed_snapshot());
    state.request_delete("x".to_owned());
    assert_eq!(state.pending_delete.as_deref(), Some("x"));
    state.cancel_delete();
    assert!(state.pending_delete.is_none());
}

#[test]
fn repeated_request_for_same_id_is_idempotent() {
    let mut state = loaded(mixed_snapshot());
    state.request_delete("f1".to_owned());
    state.request_delete("f1".to_owned());
    assert_eq!(state.pending_delete.as_deref(), Some("f1"));
}

#[test]
fn requesting_a_different_row_replaces_the_pending_id() {
    let mut state = loaded(mixed_snapshot());
    state.request_delete("f1".to_owned());
    state.request_delete("m2".to_owned());
    assert_eq!(state.pending_delete.as_deref(), Some("m2"));
}

#[test]
fn delete_success_clears_pending() {
    let mut state = loaded(mixed_snapshot());
    state.request_delete("f1".to_owned());
    state.delete_succeeded();
    assert!(state.pending_delete.is_none());
}
