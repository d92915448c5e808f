//! In-memory editor for driving a toolbar without a real text engine.
//!
//! Records every call the toolbar makes so hosts and tests can check the
//! protocol, and lets the caller push selection updates the way a real
//! editor would.

use std::sync::{Mutex, MutexGuard, PoisonError};

use n0_future::boxed::BoxFuture;

use crate::actions::ToolbarAction;
use crate::editor::{EditorError, SelectedSet, SelectionCallback, ToolbarEditor};

/// A call made into the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCall {
    RegisterToolbar,
    ApplyAction(ToolbarAction),
    PrepareInsertionPoint,
    GetSelectedText,
    PresentLinkDialog(String),
}

struct Inner {
    calls: Vec<EditorCall>,
    callback: Option<SelectionCallback>,
    selected_text: Result<String, EditorError>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            callback: None,
            selected_text: Ok(String::new()),
        }
    }
}

/// Editor that only remembers what it was asked to do.
#[derive(Default)]
pub struct MemoryEditor {
    inner: Mutex<Inner>,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Text returned by the next selected-text request.
    pub fn set_selected_text(&self, text: impl Into<String>) {
        self.lock().selected_text = Ok(text.into());
    }

    /// Make the next selected-text requests fail.
    pub fn fail_selected_text(&self, reason: impl Into<String>) {
        self.lock().selected_text = Err(EditorError::SelectionUnavailable(reason.into()));
    }

    /// Push a selection update to the registered toolbar, if any.
    ///
    /// Returns false when no toolbar is registered.
    pub fn push_selection(&self, selected: SelectedSet) -> bool {
        let inner = self.lock();
        match &inner.callback {
            Some(callback) => {
                callback(selected);
                true
            }
            None => false,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.lock().callback.is_some()
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> Vec<EditorCall> {
        self.lock().calls.clone()
    }

    /// Drain the call log.
    pub fn take_calls(&self) -> Vec<EditorCall> {
        std::mem::take(&mut self.lock().calls)
    }
}

impl ToolbarEditor for MemoryEditor {
    fn register_toolbar(&self, on_selection_changed: SelectionCallback) {
        let mut inner = self.lock();
        if inner.callback.is_some() {
            tracing::warn!("replacing previously registered toolbar callback");
        }
        inner.calls.push(EditorCall::RegisterToolbar);
        inner.callback = Some(on_selection_changed);
    }

    fn apply_action(&self, action: &ToolbarAction) {
        self.lock().calls.push(EditorCall::ApplyAction(action.clone()));
    }

    fn prepare_insertion_point(&self) {
        self.lock().calls.push(EditorCall::PrepareInsertionPoint);
    }

    fn selected_text(&self) -> BoxFuture<Result<String, EditorError>> {
        let mut inner = self.lock();
        inner.calls.push(EditorCall::GetSelectedText);
        let result = inner.selected_text.clone();
        Box::pin(async move { result })
    }

    fn present_link_dialog(&self, seed_text: String) {
        self.lock().calls.push(EditorCall::PresentLinkDialog(seed_text));
    }
}
