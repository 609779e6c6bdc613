use std::collections::{HashMap, VecDeque};

use crate::filter::TagFilter;
use crate::models::Question;
use crate::sinks::MenuHandle;

/// A question the tracker has already surfaced, together with its menu
/// handle once dispatch has attached one.
#[derive(Debug)]
pub struct TrackedEntry {
    pub question: Question,
    handle: Option<MenuHandle>,
}

impl TrackedEntry {
    fn new(question: Question) -> Self {
        Self {
            question,
            handle: None,
        }
    }

    pub fn handle(&self) -> Option<MenuHandle> {
        self.handle
    }
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Newly admitted questions, in batch order
    pub admitted: Vec<Question>,
    /// Entries pushed out by the capacity limit, oldest-admitted first.
    /// Each carries its menu handle out so it is dropped with the entry.
    pub evicted: Vec<TrackedEntry>,
}

/// Bounded, insertion-ordered registry of already-surfaced questions.
///
/// Owns the diffing algorithm: given a fetched batch, decide what is
/// newly relevant and what falls off the back of the recency window.
/// A question is admitted at most once for as long as it stays tracked;
/// an evicted id can come back if a later batch still carries it.
pub struct QuestionTracker {
    entries: HashMap<u64, TrackedEntry>,
    /// Admission order, oldest at the front
    order: VecDeque<u64>,
    filter: TagFilter,
    limit: usize,
}

impl QuestionTracker {
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(filter: TagFilter, limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            filter,
            limit,
        }
    }

    /// Diff a fetched batch against the known set.
    ///
    /// The batch is scanned in fetch order (the source contract says
    /// most-recent-first; we do not re-sort). Non-matching and
    /// already-known questions are skipped; the rest are admitted at the
    /// most-recent end. The capacity limit is enforced once after the
    /// whole batch, not per insertion, so a single pass may transiently
    /// overshoot before the oldest entries are evicted.
    pub fn reconcile(&mut self, batch: Vec<Question>) -> Reconciliation {
        let mut admitted = Vec::new();

        for question in batch {
            if !self.filter.matches(&question) {
                continue;
            }
            if self.entries.contains_key(&question.id) {
                continue;
            }

            self.order.push_back(question.id);
            self.entries
                .insert(question.id, TrackedEntry::new(question.clone()));
            admitted.push(question);
        }

        let mut evicted = Vec::new();
        while self.entries.len() > self.limit {
            let Some(id) = self.order.pop_front() else {
                break;
            };
            if let Some(entry) = self.entries.remove(&id) {
                evicted.push(entry);
            }
        }

        Reconciliation { admitted, evicted }
    }

    /// Store the menu handle dispatch got back for an admitted question.
    /// A no-op if the id is not tracked (it may already have been evicted).
    pub fn attach_handle(&mut self, id: u64, handle: MenuHandle) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.handle = Some(handle);
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
