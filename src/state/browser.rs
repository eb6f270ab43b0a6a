//! Generic record-browser state: snapshot, type filter, free-text search,
//! pagination, and the per-list delete-confirmation state machine.
//!
//! DESIGN
//! ======
//! One `BrowserState` replaces the near-identical list/filter/paginate logic
//! previously duplicated across every preview list. Transitions are pure;
//! network effects live in the components that own the signal. Each fetch is
//! tagged with a sequence token so a superseded in-flight refresh can never
//! clobber a newer snapshot — the later request always wins.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::net::error::StoreError;
use crate::util::search::contains_ci;

/// Records shown per page in every preview list.
pub const PAGE_SIZE: usize = 4;

/// A record the browser can list, filter, search, and delete.
pub trait Browsable: Clone + 'static {
    fn id(&self) -> &str;

    /// Opaque ordering key; snapshots arrive newest-first.
    fn created_at(&self) -> i64;

    /// Discriminator matched by the type-filter tabs. Collections without
    /// subtypes leave this `None` and are never narrowed by a filter.
    fn type_key(&self) -> Option<&str> {
        None
    }

    /// Case-insensitive search haystacks. A record lacking a field simply
    /// omits it, so it fails the match instead of erroring.
    fn search_haystacks(&self) -> Vec<&str>;
}

/// Select one record from a fetched snapshot by id. The storage contract
/// has no get-by-id, so detail views fetch the collection and pick from it;
/// an unknown id is simply absent, never an error.
pub fn find_record<'a, R: Browsable>(records: &'a [R], id: &str) -> Option<&'a R> {
    records.iter().find(|record| record.id() == id)
}

/// In-memory view state over one collection snapshot.
#[derive(Clone, Debug)]
pub struct BrowserState<R: Browsable> {
    /// Last-fetched snapshot; not live-synchronized with the store.
    pub records: Vec<R>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Selected type discriminator; `None` means "all".
    pub active_filter: Option<String>,
    /// Free-text query; empty means no search narrowing.
    pub search_text: String,
    /// 1-based page index into the filtered view.
    pub current_page: usize,
    /// Record id awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Set when the snapshot was already narrowed server-side, so the
    /// client-side type filter must not be applied a second time.
    server_filtered: bool,
    fetch_seq: u64,
}

impl<R: Browsable> Default for BrowserState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            active_filter: None,
            search_text: String::new(),
            current_page: 1,
            pending_delete: None,
            server_filtered: false,
            fetch_seq: 0,
        }
    }
}

impl<R: Browsable> BrowserState<R> {
    /// Mark a fetch as in flight and return its sequence token.
    pub fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Apply a completed fetch. Results from a superseded token are
    /// discarded outright. On success the snapshot is replaced wholesale and
    /// the page resets to 1; on failure the previous snapshot stays intact
    /// and the error is handed back for notification.
    pub fn apply_snapshot(
        &mut self,
        token: u64,
        result: Result<Vec<R>, StoreError>,
        server_filtered: bool,
    ) -> Option<StoreError> {
        if token != self.fetch_seq {
            return None;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.server_filtered = server_filtered;
                self.current_page = 1;
                None
            }
            Err(err) => Some(err),
        }
    }

    /// Select a type filter and reset pagination.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.active_filter = filter;
        self.current_page = 1;
    }

    /// Update the free-text query and reset pagination.
    pub fn set_search(&mut self, text: String) {
        self.search_text = text;
        self.current_page = 1;
    }

    /// The filtered view, recomputed on every call and never cached.
    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| self.matches_filter(record) && self.matches_search(record))
            .collect()
    }

    fn matches_filter(&self, record: &R) -> bool {
        if self.server_filtered {
            return true;
        }
        match self.active_filter.as_deref() {
            None => true,
            Some(filter) => record.type_key().is_some_and(|key| key == filter),
        }
    }

    fn matches_search(&self, record: &R) -> bool {
        let query = self.search_text.trim();
        if query.is_empty() {
            return true;
        }
        record
            .search_haystacks()
            .iter()
            .any(|haystack| contains_ci(haystack, query))
    }

    /// Number of pages in the filtered view; zero when it is empty.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The slice of the filtered view covering page `page` (1-based).
    /// Out-of-range pages yield an empty slice rather than panicking;
    /// navigation controls are disabled before that can happen.
    pub fn page_slice(&self, page: usize) -> Vec<&R> {
        if page == 0 {
            return Vec::new();
        }
        self.filtered()
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// The slice for `current_page`.
    pub fn current_slice(&self) -> Vec<&R> {
        self.page_slice(self.current_page)
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Step back one page; clamped at page 1.
    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.current_page -= 1;
        }
    }

    /// Step forward one page; clamped at the last page.
    pub fn next_page(&mut self) {
        if self.can_next() {
            self.current_page += 1;
        }
    }

    /// Arm the delete confirmation for `id` without touching storage.
    /// Idempotent for the same id; a different id replaces the pending one
    /// (the confirmation affordance is a single modal).
    pub fn request_delete(&mut self, id: String) {
        self.pending_delete = Some(id);
    }

    /// Disarm the confirmation without touching storage.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Clear the confirmation after the store acknowledged the delete.
    /// On failure callers leave `pending_delete` set so the user can retry
    /// or cancel.
    pub fn delete_succeeded(&mut self) {
        self.pending_delete = None;
    }
}
