//! Single-slot session store for the most recent upload.

use crate::table::TabularData;

/// The most recently uploaded data, shared by every request in the process.
///
/// Both slots are replaced wholesale on upload; there is no history and no
/// per-user isolation. Mutation is plain because the HTTP layer keeps the
/// one instance behind a lock.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    dataset: Option<TabularData>,
    text: Option<String>,
}

impl SessionState {
    /// Replaces the tabular slot. The previous dataset, if any, is dropped.
    pub fn set_dataset(&mut self, dataset: TabularData) {
        self.dataset = Some(dataset);
    }

    /// Replaces the text slot. The previous blob, if any, is dropped.
    pub fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    pub fn dataset(&self) -> Option<&TabularData> {
        self.dataset.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
