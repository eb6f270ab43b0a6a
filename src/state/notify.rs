//! Process-wide notification queue with explicit enqueue/expire semantics.
//!
//! DESIGN
//! ======
//! Replaces ad-hoc success/error strings threaded through component props.
//! Producers push a notice and get back its id; a single consumer component
//! renders the queue and expires each notice after a fixed TTL. Display
//! duration and dismissal are the consumer's concern, not the producer's.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a notice stays visible before expiring.
pub const NOTICE_TTL_MS: u64 = 4_000;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// FIFO queue of live notices.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub queue: Vec<Notice>,
    next_id: u64,
}

impl NotifyState {
    /// Enqueue a notice and return its id for later expiry.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.queue.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn push_success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text)
    }

    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    /// Remove a notice by id. Expiring an already-expired id is a no-op.
    pub fn expire(&mut self, id: u64) {
        self.queue.retain(|notice| notice.id != id);
    }
}
