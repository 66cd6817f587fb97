use std::collections::VecDeque;

use tracing::warn;

use crate::constants::INITIAL_PENDING_CAPACITY;
use crate::toast::Toast;

/// Ordered list of toasts waiting for the display slot
///
/// Entries are kept in descending priority order with FIFO ordering among
/// equal priorities. The list is bounded: once full, an arrival that would
/// rank below every queued entry is dropped, otherwise the current tail is.
pub(crate) struct PendingQueue {
    entries: VecDeque<Toast>,
    max_pending: usize,
}

impl PendingQueue {
    pub fn new(max_pending: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(INITIAL_PENDING_CAPACITY),
            max_pending,
        }
    }

    /// Insert a toast at its priority position.
    ///
    /// Returns false if the list was full and the toast was dropped.
    pub fn insert(&mut self, toast: Toast) -> bool {
        // First strictly-lower-priority entry; inserting there keeps equal
        // priorities in submission order.
        let pos = self
            .entries
            .iter()
            .position(|queued| queued.priority() < toast.priority())
            .unwrap_or(self.entries.len());

        if self.entries.len() >= self.max_pending {
            if pos == self.entries.len() {
                warn!(
                    view = toast.view().id(),
                    priority = toast.priority(),
                    "pending list full, dropping arriving toast"
                );
                return false;
            }
            let dropped = self.entries.pop_back();
            if let Some(dropped) = dropped {
                warn!(
                    view = dropped.view().id(),
                    priority = dropped.priority(),
                    "pending list full, dropping lowest-priority toast"
                );
            }
        }

        self.entries.insert(pos, toast);
        true
    }

    /// Remove and return the highest-priority pending toast.
    pub fn pop(&mut self) -> Option<Toast> {
        self.entries.pop_front()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
