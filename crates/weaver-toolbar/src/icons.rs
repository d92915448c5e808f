//! Icon resolution for toolbar buttons.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::actions::ToolbarAction;

/// Reference to an icon asset, e.g. an image path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(SmolStr);

impl IconRef {
    pub fn new(asset: impl Into<SmolStr>) -> Self {
        Self(asset.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Host-supplied icons, consulted before the built-in defaults.
pub type IconOverrideMap = HashMap<ToolbarAction, IconRef>;

/// Built-in icon for an action, if it has one.
///
/// Only the default button set ships with icons.
pub fn default_icon(action: &ToolbarAction) -> Option<IconRef> {
    let asset = match action {
        ToolbarAction::InsertOrderedList => "img/num_list.png",
        ToolbarAction::InsertBulletList => "img/list.png",
        ToolbarAction::SetBold => "img/bold.png",
        ToolbarAction::SetItalic => "img/italic.png",
        ToolbarAction::SetUnderline => "img/underline.png",
        ToolbarAction::PlainText => "img/T.png",
        _ => return None,
    };
    Some(IconRef::new(asset))
}

/// The built-in icon table, freshly built on each call.
pub fn default_icon_map() -> HashMap<ToolbarAction, IconRef> {
    crate::actions::CATALOG
        .iter()
        .filter_map(|action| default_icon(action).map(|icon| (action.clone(), icon)))
        .collect()
}

/// Resolve the icon for an action.
///
/// Host overrides win, then the built-in table. `None` is a normal outcome:
/// the button renders without an icon.
pub fn resolve_icon(
    action: &ToolbarAction,
    overrides: Option<&IconOverrideMap>,
) -> Option<IconRef> {
    overrides
        .and_then(|map| map.get(action).cloned())
        .or_else(|| default_icon(action))
}
