//! Command log tracking the fate of dispatched persistence requests.
//!
//! Local state stays the provisional source of truth after every drop; this
//! log is what tells the user whether the server has caught up. Failed
//! entries stay visible (dirty banner) until a successful refetch replaces
//! the board snapshot.

use std::collections::VecDeque;

use uuid::Uuid;

use super::command::SyncCommand;

/// Fate of one dispatched write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// Request dispatched, response not yet seen.
    Pending,
    /// Backend acknowledged the write.
    Confirmed,
    /// Transport or server failure; local and server state may diverge.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    pub id: Uuid,
    pub command: SyncCommand,
    pub status: SyncStatus,
}

/// Bounded log of dispatched commands, oldest first.
#[derive(Debug, Default)]
pub struct SyncLog {
    entries: VecDeque<SyncEntry>,
    capacity: usize,
}

impl SyncLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a freshly dispatched command as pending and return its id.
    pub fn record(&mut self, command: SyncCommand) -> Uuid {
        let id = Uuid::new_v4();
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(SyncEntry {
            id,
            command,
            status: SyncStatus::Pending,
        });
        id
    }

    /// Resolve a pending entry. Unknown ids are ignored; the entry may have
    /// been evicted while its request was in flight.
    pub fn resolve(&mut self, id: Uuid, result: Result<(), String>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = match result {
                Ok(()) => SyncStatus::Confirmed,
                Err(message) => SyncStatus::Failed { message },
            };
        }
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == SyncStatus::Pending)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, SyncStatus::Failed { .. }))
            .count()
    }

    /// True when any write failed: local state can no longer be assumed to
    /// match the server.
    pub fn is_dirty(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn last_failure(&self) -> Option<&SyncEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| matches!(e.status, SyncStatus::Failed { .. }))
    }

    pub fn entries(&self) -> impl Iterator<Item = &SyncEntry> {
        self.entries.iter()
    }

    /// Forget history, e.g. after a successful refetch re-established the
    /// server as source of truth.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
