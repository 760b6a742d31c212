use std::cell::Cell;

use uuid::Uuid;

/// UI-side bookkeeping, lives on the event loop thread
#[derive(Debug, Default)]
pub struct UiState {
    pending: Cell<Option<Uuid>>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest request wins; anything older is stale from here on
    pub fn begin(&self, request_id: Uuid) {
        self.pending.set(Some(request_id));
    }

    /// True if `request_id` is the one on display. Clears it.
    pub fn finish(&self, request_id: Uuid) -> bool {
        if self.pending.get() == Some(request_id) {
            self.pending.set(None);
            true
        } else {
            false
        }
    }
}
