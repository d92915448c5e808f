//! Routing of pressed toolbar actions to the editor or the host.
//!
//! Most actions pass straight through to the editor. Links and images go
//! through an insertion flow: the editor prepares an insertion point first,
//! then the host hook takes over if one is configured. Only links have a
//! built-in fallback (the editor's own link dialog); an image press with no
//! hook does nothing further.

use std::fmt;
use std::sync::{Arc, Weak};

use n0_future::boxed::BoxFuture;

use crate::actions::ToolbarAction;
use crate::editor::ToolbarEditor;

/// Host callback for an insertion flow.
pub type PressHook = Arc<dyn Fn() + Send + Sync + 'static>;

/// Optional host short-circuits for the insertion flows.
#[derive(Clone, Default)]
pub struct ToolbarHooks {
    /// Replaces the built-in link dialog.
    pub on_link_press: Option<PressHook>,
    /// Handles image insertion. Without it, image presses only prepare the
    /// insertion point.
    pub on_image_press: Option<PressHook>,
}

impl ToolbarHooks {
    pub fn on_link_press(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_link_press = Some(Arc::new(hook));
        self
    }

    pub fn on_image_press(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_image_press = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for ToolbarHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarHooks")
            .field("on_link_press", &self.on_link_press.is_some())
            .field("on_image_press", &self.on_image_press.is_some())
            .finish()
    }
}

/// Which behavior a press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward verbatim to `apply_action`.
    PassThrough,
    LinkInsertion,
    ImageInsertion,
    /// Not a catalog action; nothing to do.
    Unrouted,
}

/// Classify an action.
pub fn route(action: &ToolbarAction) -> Route {
    match action {
        ToolbarAction::PlainText
        | ToolbarAction::SetBold
        | ToolbarAction::SetItalic
        | ToolbarAction::SetUnderline
        | ToolbarAction::SetStrikethrough
        | ToolbarAction::SetSubscript
        | ToolbarAction::SetSuperscript
        | ToolbarAction::InsertOrderedList
        | ToolbarAction::InsertBulletList
        | ToolbarAction::Heading1
        | ToolbarAction::Heading2
        | ToolbarAction::Heading3
        | ToolbarAction::Heading4
        | ToolbarAction::Heading5
        | ToolbarAction::Heading6
        | ToolbarAction::SetParagraph
        | ToolbarAction::RemoveFormat
        | ToolbarAction::AlignLeft
        | ToolbarAction::AlignCenter
        | ToolbarAction::AlignRight
        | ToolbarAction::AlignFull
        | ToolbarAction::SetHorizontalRule
        | ToolbarAction::SetIndent
        | ToolbarAction::SetOutdent => Route::PassThrough,
        ToolbarAction::InsertLink => Route::LinkInsertion,
        ToolbarAction::InsertImage => Route::ImageInsertion,
        ToolbarAction::Custom(_) => Route::Unrouted,
    }
}

/// What a press ended up doing.
pub enum Dispatched {
    /// Forwarded to the editor's `apply_action`.
    Applied,
    /// Insertion point prepared, then handed to a host hook.
    HostHandled,
    /// Insertion point prepared and the selected text requested. The dialog
    /// opens when the host drives this future to completion, on whatever
    /// executor it runs. Dropping it cancels the dialog.
    LinkDialogPending(BoxFuture<()>),
    /// Insertion point prepared, nothing else to do (image without a hook).
    Prepared,
    /// Unrouted action or no editor to talk to.
    Ignored,
}

impl fmt::Debug for Dispatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("Applied"),
            Self::HostHandled => f.write_str("HostHandled"),
            Self::LinkDialogPending(_) => f.write_str("LinkDialogPending(..)"),
            Self::Prepared => f.write_str("Prepared"),
            Self::Ignored => f.write_str("Ignored"),
        }
    }
}

/// Route a pressed action.
///
/// The editor is held weakly. A press after the host dropped the editor is
/// absorbed and reported as `Ignored`.
///
/// Never blocks and needs no runtime: the link flow hands its continuation
/// back to the caller instead of waiting on the selected text.
pub fn dispatch(
    editor: &Weak<dyn ToolbarEditor>,
    hooks: &ToolbarHooks,
    action: &ToolbarAction,
) -> Dispatched {
    let route = route(action);
    if route == Route::Unrouted {
        tracing::debug!(%action, "ignoring press on unrouted action");
        return Dispatched::Ignored;
    }

    let Some(strong) = editor.upgrade() else {
        tracing::warn!(%action, "press after editor was dropped");
        return Dispatched::Ignored;
    };

    match route {
        Route::PassThrough => {
            strong.apply_action(action);
            Dispatched::Applied
        }
        Route::LinkInsertion => {
            strong.prepare_insertion_point();
            if let Some(hook) = &hooks.on_link_press {
                hook();
                return Dispatched::HostHandled;
            }
            let pending = strong.selected_text();
            let editor = editor.clone();
            Dispatched::LinkDialogPending(Box::pin(async move {
                let seed = match pending.await {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("selected text unavailable, opening empty link dialog: {e}");
                        String::new()
                    }
                };
                match editor.upgrade() {
                    Some(editor) => editor.present_link_dialog(seed),
                    None => tracing::debug!("editor dropped before link dialog could open"),
                }
            }))
        }
        Route::ImageInsertion => {
            strong.prepare_insertion_point();
            match &hooks.on_image_press {
                Some(hook) => {
                    hook();
                    Dispatched::HostHandled
                }
                None => Dispatched::Prepared,
            }
        }
        Route::Unrouted => Dispatched::Ignored,
    }
}
