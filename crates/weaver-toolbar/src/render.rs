//! Turning rows into renderable buttons.
//!
//! Drawing is the host's job. This module only decides what each button looks
//! like: the default `ButtonRenderer` switches between a selected and an
//! unselected style and attaches the resolved icon. Hosts that want full
//! control pass any `Fn(&ToolbarAction, bool) -> E` instead.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::actions::ToolbarAction;
use crate::icons::{IconOverrideMap, IconRef, resolve_icon};

/// Renders a single toolbar row.
pub trait ActionRenderer {
    type Element;

    fn render_action(&self, action: &ToolbarAction, selected: bool) -> Self::Element;
}

impl<F, E> ActionRenderer for F
where
    F: Fn(&ToolbarAction, bool) -> E,
{
    type Element = E;

    fn render_action(&self, action: &ToolbarAction, selected: bool) -> E {
        self(action, selected)
    }
}

/// Style of one button state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    /// Background color, in any CSS color syntax.
    pub background: SmolStr,
}

impl ButtonStyle {
    pub fn new(background: impl Into<SmolStr>) -> Self {
        Self {
            background: background.into(),
        }
    }
}

/// Styling for the default button renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarStyle {
    pub selected_button: ButtonStyle,
    pub unselected_button: ButtonStyle,
    /// Icon tint for unselected buttons. `None` leaves the icon untinted.
    pub icon_tint: Option<SmolStr>,
    pub selected_icon_tint: Option<SmolStr>,
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            selected_button: ButtonStyle::new("yellow"),
            unselected_button: ButtonStyle::new("#dddbc7"),
            icon_tint: None,
            selected_icon_tint: None,
        }
    }
}

/// A button as produced by the default renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarButton {
    /// Stable key for the host's list diffing; the action id.
    pub key: SmolStr,
    pub action: ToolbarAction,
    pub title: SmolStr,
    pub icon: Option<IconRef>,
    pub background: SmolStr,
    pub icon_tint: Option<SmolStr>,
    pub selected: bool,
}

/// Default renderer: style switch plus resolved icon.
#[derive(Debug, Clone, Default)]
pub struct ButtonRenderer {
    style: ToolbarStyle,
    icons: Option<IconOverrideMap>,
}

impl ButtonRenderer {
    pub fn new(style: ToolbarStyle, icons: Option<IconOverrideMap>) -> Self {
        Self { style, icons }
    }

    pub fn style(&self) -> &ToolbarStyle {
        &self.style
    }

    pub fn resolve_icon(&self, action: &ToolbarAction) -> Option<IconRef> {
        resolve_icon(action, self.icons.as_ref())
    }
}

impl ActionRenderer for ButtonRenderer {
    type Element = ToolbarButton;

    fn render_action(&self, action: &ToolbarAction, selected: bool) -> ToolbarButton {
        let (button, tint) = if selected {
            (&self.style.selected_button, &self.style.selected_icon_tint)
        } else {
            (&self.style.unselected_button, &self.style.icon_tint)
        };

        ToolbarButton {
            key: SmolStr::new(action.as_str()),
            action: action.clone(),
            title: SmolStr::new(action.label()),
            icon: self.resolve_icon(action),
            background: button.background.clone(),
            icon_tint: tint.clone(),
            selected,
        }
    }
}
