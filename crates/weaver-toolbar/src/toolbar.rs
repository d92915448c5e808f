//! `RichTextToolbar` - binds toolbar state to an editor.
//!
//! Mounting performs the one-time handshake: the host accessor is called
//! once, and the toolbar registers a single selection callback with the
//! editor it returns. From then on the editor pushes selection updates into
//! the shared state, and every recomputation is published on a watch channel
//! so the rendering layer can redraw without the editor ever waiting on it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::watch;

use crate::actions::{ActionList, ToolbarAction};
use crate::config::ToolbarConfig;
use crate::dispatch::{Dispatched, ToolbarHooks, dispatch};
use crate::editor::{EditorHandle, SelectedSet, ToolbarEditor};
use crate::error::ToolbarError;
use crate::icons::{IconOverrideMap, IconRef};
use crate::render::{ActionRenderer, ButtonRenderer, ToolbarButton, ToolbarStyle};
use crate::state::{Row, ToolbarState};

/// State shared between the toolbar and the editor's callback.
struct Shared {
    state: Mutex<ToolbarState>,
    rows: watch::Sender<Arc<[Row]>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ToolbarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_selection_update(&self, selected: SelectedSet) {
        let mut state = self.lock();
        if state.apply_selection_update(selected) {
            tracing::trace!(generation = state.generation(), "selection changed");
            self.rows.send_replace(state.rows());
        } else {
            tracing::trace!("selection unchanged, skipping recompute");
        }
    }

    fn set_actions(&self, actions: ActionList) {
        let mut state = self.lock();
        state.set_actions(actions);
        self.rows.send_replace(state.rows());
    }
}

/// A formatting toolbar bound to one editor.
pub struct RichTextToolbar {
    editor: Weak<dyn ToolbarEditor>,
    shared: Arc<Shared>,
    hooks: ToolbarHooks,
    renderer: ButtonRenderer,
}

impl RichTextToolbar {
    pub fn builder() -> ToolbarBuilder {
        ToolbarBuilder::default()
    }

    /// Mount a toolbar from host configuration.
    ///
    /// `get_editor` is called exactly once. If it yields no editor the toolbar
    /// is never constructed and `ToolbarError::NoEditor` is returned.
    ///
    /// The toolbar only holds the editor weakly; the host keeps it alive.
    pub fn mount<F>(
        get_editor: F,
        config: ToolbarConfig,
        hooks: ToolbarHooks,
    ) -> Result<Self, ToolbarError>
    where
        F: FnOnce() -> Option<EditorHandle>,
    {
        let actions = config.action_list();
        let icons = config.icon_overrides().cloned();
        Self::bind(get_editor, actions, icons, config.style, hooks)
    }

    fn bind<F>(
        get_editor: F,
        actions: ActionList,
        icons: Option<IconOverrideMap>,
        style: ToolbarStyle,
        hooks: ToolbarHooks,
    ) -> Result<Self, ToolbarError>
    where
        F: FnOnce() -> Option<EditorHandle>,
    {
        let Some(editor) = get_editor() else {
            tracing::error!("toolbar has no editor");
            return Err(ToolbarError::NoEditor);
        };

        let state = ToolbarState::new(actions);
        let (rows, _) = watch::channel(state.rows());
        let shared = Arc::new(Shared {
            state: Mutex::new(state),
            rows,
        });

        let observer = Arc::clone(&shared);
        editor.register_toolbar(Box::new(move |selected| {
            observer.apply_selection_update(selected);
        }));
        tracing::debug!("toolbar bound to editor");

        Ok(Self {
            editor: Arc::downgrade(&editor),
            shared,
            hooks,
            renderer: ButtonRenderer::new(style, icons),
        })
    }

    /// Replace the action list. Hosts call this when their own list changes.
    pub fn set_actions(&self, actions: ActionList) {
        self.shared.set_actions(actions);
    }

    /// Apply a new host configuration: actions, icons and style.
    ///
    /// The editor binding is kept as is.
    pub fn reconfigure(&mut self, config: ToolbarConfig) {
        self.renderer = ButtonRenderer::new(config.style.clone(), config.icon_overrides().cloned());
        self.set_actions(config.action_list());
    }

    /// Current rows, in button order.
    pub fn rows(&self) -> Arc<[Row]> {
        self.shared.lock().rows()
    }

    /// Selection currently mirrored from the editor.
    pub fn selected(&self) -> SelectedSet {
        self.shared.lock().selected().clone()
    }

    pub fn actions(&self) -> ActionList {
        self.shared.lock().actions().clone()
    }

    /// Number of row recomputations since mount.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation()
    }

    /// Receive the rows every time they are recomputed.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Row]>> {
        self.shared.rows.subscribe()
    }

    /// Handle a button press.
    ///
    /// No toolbar lock is held while the editor is called, so an editor may
    /// push a selection update from inside `apply_action`.
    pub fn press(&self, action: &ToolbarAction) -> Dispatched {
        tracing::debug!(%action, "toolbar press");
        dispatch(&self.editor, &self.hooks, action)
    }

    pub fn resolve_icon(&self, action: &ToolbarAction) -> Option<IconRef> {
        self.renderer.resolve_icon(action)
    }

    pub fn style(&self) -> &ToolbarStyle {
        self.renderer.style()
    }

    /// Render every row with the default button renderer.
    pub fn render(&self) -> Vec<ToolbarButton> {
        self.render_with(&self.renderer)
    }

    /// Render every row with a host renderer.
    pub fn render_with<R: ActionRenderer>(&self, renderer: &R) -> Vec<R::Element> {
        self.rows()
            .iter()
            .map(|row| renderer.render_action(&row.action, row.selected))
            .collect()
    }
}

/// Builder for a [`RichTextToolbar`].
#[derive(Debug, Default)]
pub struct ToolbarBuilder {
    actions: Option<ActionList>,
    icons: Option<IconOverrideMap>,
    style: ToolbarStyle,
    hooks: ToolbarHooks,
}

impl ToolbarBuilder {
    pub fn actions(mut self, actions: ActionList) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn icon_overrides(mut self, icons: IconOverrideMap) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn style(mut self, style: ToolbarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn hooks(mut self, hooks: ToolbarHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn on_link_press(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.hooks = self.hooks.on_link_press(hook);
        self
    }

    pub fn on_image_press(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.hooks = self.hooks.on_image_press(hook);
        self
    }

    /// Bind to the editor returned by `get_editor`.
    pub fn mount<F>(self, get_editor: F) -> Result<RichTextToolbar, ToolbarError>
    where
        F: FnOnce() -> Option<EditorHandle>,
    {
        RichTextToolbar::bind(
            get_editor,
            self.actions.unwrap_or_default(),
            self.icons,
            self.style,
            self.hooks,
        )
    }
}
