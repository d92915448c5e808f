//! weaver-toolbar: a formatting toolbar bound to a rich-text editor.
//!
//! This crate provides:
//! - `ToolbarAction` and the built-in action catalog
//! - Icon resolution with host overrides
//! - `ToolbarEditor`, the contract an editor implements to host a toolbar
//! - `ToolbarState`, the row projection of actions against the selection
//! - Press dispatch: pass-through, link insertion and image insertion flows
//! - `RichTextToolbar`, which binds all of the above to one editor
//!
//! Drawing is left to the host; `ButtonRenderer` only describes buttons.

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod icons;
pub mod memory;
pub mod render;
pub mod state;
pub mod toolbar;

pub use actions::{ActionList, CATALOG, DEFAULT_ACTIONS, ToolbarAction};
pub use config::{FileStore, Loader, Saver, ToolbarConfig};
pub use dispatch::{Dispatched, PressHook, Route, ToolbarHooks, dispatch, route};
pub use editor::{EditorError, EditorHandle, SelectedSet, SelectionCallback, ToolbarEditor};
pub use error::{ConfigError, ToolbarError};
pub use icons::{IconOverrideMap, IconRef, default_icon, default_icon_map, resolve_icon};
pub use memory::{EditorCall, MemoryEditor};
pub use render::{ActionRenderer, ButtonRenderer, ButtonStyle, ToolbarButton, ToolbarStyle};
pub use smol_str::SmolStr;
pub use state::{Row, ToolbarState, changed_rows, project_rows};
pub use toolbar::{RichTextToolbar, ToolbarBuilder};
