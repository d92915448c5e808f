//! The contract between the toolbar and the editor it is bound to.
//!
//! The editor is external and owns all selection truth. The toolbar only
//! mirrors the active formatting it is told about and forwards presses back
//! through this narrow interface.

use std::collections::HashSet;
use std::sync::Arc;

use miette::Diagnostic;
use n0_future::boxed::BoxFuture;

use crate::actions::ToolbarAction;

/// Callback the editor invokes whenever the active formatting changes.
pub type SelectionCallback = Box<dyn Fn(SelectedSet) + Send + Sync + 'static>;

/// Error from an editor-side request.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The editor could not report its current selection.
    #[error("selected text unavailable: {0}")]
    #[diagnostic(code(weaver_toolbar::editor::selection_unavailable))]
    SelectionUnavailable(String),
}

/// Capabilities the toolbar needs from an editor.
///
/// `present_link_dialog` is called from the link continuation, which the
/// host may drive on any thread.
pub trait ToolbarEditor: Send + Sync {
    /// Register the toolbar's selection observer.
    ///
    /// Called exactly once per binding. The editor decides when and how often
    /// the callback fires.
    fn register_toolbar(&self, on_selection_changed: SelectionCallback);

    /// Apply a direct formatting action. Fire-and-forget.
    fn apply_action(&self, action: &ToolbarAction);

    /// Ready the cursor/selection context for an inserted link or image.
    fn prepare_insertion_point(&self);

    /// Current text selection, possibly empty.
    fn selected_text(&self) -> BoxFuture<Result<String, EditorError>>;

    /// Show the editor's own link-entry surface, pre-filled with `seed_text`.
    fn present_link_dialog(&self, seed_text: String);
}

/// Shared handle to an editor, as handed out by the host accessor.
pub type EditorHandle = Arc<dyn ToolbarEditor>;

/// Actions active for the editor's present selection.
///
/// Immutable once built; the editor replaces it wholesale on every update.
/// Equality checks instance identity first, so re-pushing the same set is
/// cheap to detect.
#[derive(Debug, Clone, Default)]
pub struct SelectedSet(Arc<HashSet<ToolbarAction>>);

impl SelectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, action: &ToolbarAction) -> bool {
        self.0.contains(action)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolbarAction> {
        self.0.iter()
    }

    /// Whether both handles point at the same set instance.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SelectedSet {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.0 == other.0
    }
}

impl Eq for SelectedSet {}

impl FromIterator<ToolbarAction> for SelectedSet {
    fn from_iter<I: IntoIterator<Item = ToolbarAction>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}

impl From<HashSet<ToolbarAction>> for SelectedSet {
    fn from(set: HashSet<ToolbarAction>) -> Self {
        Self(Arc::new(set))
    }
}
