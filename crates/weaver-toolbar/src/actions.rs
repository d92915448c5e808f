//! Toolbar actions and the built-in catalog.
//!
//! `ToolbarAction` names one formatting or insertion operation the toolbar can
//! trigger. The known set is closed, but hosts may add their own buttons through
//! `ToolbarAction::Custom`, which the dispatcher never routes and the icon
//! resolver only finds in host overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

use crate::error::ToolbarError;

/// A toolbar action identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolbarAction {
    // === Block type ===
    /// Reset the block to plain text.
    PlainText,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    /// Wrap the block in a paragraph.
    SetParagraph,

    // === Inline formatting ===
    SetBold,
    SetItalic,
    SetUnderline,
    SetStrikethrough,
    SetSubscript,
    SetSuperscript,
    /// Strip all inline formatting from the selection.
    RemoveFormat,

    // === Lists ===
    InsertOrderedList,
    InsertBulletList,

    // === Alignment ===
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignFull,

    // === Structure ===
    SetHorizontalRule,
    SetIndent,
    SetOutdent,

    // === Insertion flows ===
    /// Insert a link. Needs the editor to prepare an insertion point first.
    InsertLink,
    /// Insert an image. Needs the editor to prepare an insertion point first.
    InsertImage,

    /// Host-defined action outside the catalog.
    Custom(SmolStr),
}

/// Every known action, in canonical order.
pub static CATALOG: [ToolbarAction; 26] = [
    ToolbarAction::PlainText,
    ToolbarAction::SetBold,
    ToolbarAction::SetItalic,
    ToolbarAction::SetUnderline,
    ToolbarAction::SetStrikethrough,
    ToolbarAction::SetSubscript,
    ToolbarAction::SetSuperscript,
    ToolbarAction::InsertOrderedList,
    ToolbarAction::InsertBulletList,
    ToolbarAction::Heading1,
    ToolbarAction::Heading2,
    ToolbarAction::Heading3,
    ToolbarAction::Heading4,
    ToolbarAction::Heading5,
    ToolbarAction::Heading6,
    ToolbarAction::SetParagraph,
    ToolbarAction::RemoveFormat,
    ToolbarAction::AlignLeft,
    ToolbarAction::AlignCenter,
    ToolbarAction::AlignRight,
    ToolbarAction::AlignFull,
    ToolbarAction::SetHorizontalRule,
    ToolbarAction::SetIndent,
    ToolbarAction::SetOutdent,
    ToolbarAction::InsertLink,
    ToolbarAction::InsertImage,
];

/// Buttons shown when the host doesn't supply its own list, left to right.
pub static DEFAULT_ACTIONS: [ToolbarAction; 6] = [
    ToolbarAction::InsertOrderedList,
    ToolbarAction::InsertBulletList,
    ToolbarAction::SetBold,
    ToolbarAction::SetItalic,
    ToolbarAction::SetUnderline,
    ToolbarAction::PlainText,
];

impl ToolbarAction {
    /// Create a host-defined action.
    pub fn custom(id: impl Into<SmolStr>) -> Self {
        Self::Custom(id.into())
    }

    /// Stable string identifier, as used in config files and by editors.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText => "text",
            Self::Heading1 => "h1",
            Self::Heading2 => "h2",
            Self::Heading3 => "h3",
            Self::Heading4 => "h4",
            Self::Heading5 => "h5",
            Self::Heading6 => "h6",
            Self::SetParagraph => "paragraph",
            Self::SetBold => "bold",
            Self::SetItalic => "italic",
            Self::SetUnderline => "underline",
            Self::SetStrikethrough => "strikeThrough",
            Self::SetSubscript => "subscript",
            Self::SetSuperscript => "superscript",
            Self::RemoveFormat => "removeFormat",
            Self::InsertOrderedList => "orderedList",
            Self::InsertBulletList => "unorderedList",
            Self::AlignLeft => "justifyLeft",
            Self::AlignCenter => "justifyCenter",
            Self::AlignRight => "justifyRight",
            Self::AlignFull => "justifyFull",
            Self::SetHorizontalRule => "horizontalRule",
            Self::SetIndent => "indent",
            Self::SetOutdent => "outdent",
            Self::InsertLink => "link",
            Self::InsertImage => "image",
            Self::Custom(id) => id.as_str(),
        }
    }

    /// Human-readable label, used for button titles.
    pub fn label(&self) -> &str {
        match self {
            Self::PlainText => "Plain Text",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Heading3 => "Heading 3",
            Self::Heading4 => "Heading 4",
            Self::Heading5 => "Heading 5",
            Self::Heading6 => "Heading 6",
            Self::SetParagraph => "Paragraph",
            Self::SetBold => "Bold",
            Self::SetItalic => "Italic",
            Self::SetUnderline => "Underline",
            Self::SetStrikethrough => "Strikethrough",
            Self::SetSubscript => "Subscript",
            Self::SetSuperscript => "Superscript",
            Self::RemoveFormat => "Remove Formatting",
            Self::InsertOrderedList => "Numbered List",
            Self::InsertBulletList => "Bullet List",
            Self::AlignLeft => "Align Left",
            Self::AlignCenter => "Align Center",
            Self::AlignRight => "Align Right",
            Self::AlignFull => "Justify",
            Self::SetHorizontalRule => "Horizontal Rule",
            Self::SetIndent => "Indent",
            Self::SetOutdent => "Outdent",
            Self::InsertLink => "Link",
            Self::InsertImage => "Image",
            Self::Custom(id) => id.as_str(),
        }
    }

    /// Whether this action is part of the built-in catalog.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Whether pressing this action goes through an insertion flow
    /// rather than straight to the editor.
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::InsertLink | Self::InsertImage)
    }
}

impl FromStr for ToolbarAction {
    type Err = std::convert::Infallible;

    /// Parse an identifier. Anything outside the catalog becomes `Custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = CATALOG
            .iter()
            .find(|known| known.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Self::Custom(SmolStr::new(s)));
        Ok(action)
    }
}

impl From<&str> for ToolbarAction {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ToolbarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ToolbarAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ToolbarAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = SmolStr::deserialize(deserializer)?;
        Ok(ToolbarAction::from(id.as_str()))
    }
}

/// Ordered, duplicate-free list of toolbar actions.
///
/// Order is the left-to-right button order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ToolbarAction>", into = "Vec<ToolbarAction>")]
pub struct ActionList(Vec<ToolbarAction>);

impl ActionList {
    /// Build a list, rejecting duplicate entries.
    pub fn new(actions: impl IntoIterator<Item = ToolbarAction>) -> Result<Self, ToolbarError> {
        let mut list: Vec<ToolbarAction> = Vec::new();
        for action in actions {
            if list.contains(&action) {
                return Err(ToolbarError::DuplicateAction(action));
            }
            list.push(action);
        }
        Ok(Self(list))
    }

    /// Parse a list from string identifiers.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<Self, ToolbarError> {
        Self::new(ids.into_iter().map(ToolbarAction::from))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolbarAction> {
        self.0.iter()
    }

    pub fn contains(&self, action: &ToolbarAction) -> bool {
        self.0.contains(action)
    }

    pub fn as_slice(&self) -> &[ToolbarAction] {
        &self.0
    }
}

impl Default for ActionList {
    fn default() -> Self {
        Self(DEFAULT_ACTIONS.to_vec())
    }
}

impl TryFrom<Vec<ToolbarAction>> for ActionList {
    type Error = ToolbarError;

    fn try_from(actions: Vec<ToolbarAction>) -> Result<Self, Self::Error> {
        Self::new(actions)
    }
}

impl From<ActionList> for Vec<ToolbarAction> {
    fn from(list: ActionList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a ToolbarAction;
    type IntoIter = std::slice::Iter<'a, ToolbarAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|a| a.as_str()).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_ids_parse_back_to_catalog_entries() {
        for action in CATALOG.iter() {
            assert_eq!(&ToolbarAction::from(action.as_str()), action);
            assert!(action.is_known());
        }
    }

    #[test]
    fn test_unknown_id_is_custom() {
        let action = ToolbarAction::from("insertVideo");
        assert_eq!(action, ToolbarAction::custom("insertVideo"));
        assert!(!action.is_known());
        assert_eq!(action.to_string(), "insertVideo");
    }

    #[test]
    fn test_default_list() {
        let list = ActionList::default();
        assert_eq!(list.as_slice(), &DEFAULT_ACTIONS);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = ActionList::from_ids(["bold", "italic", "bold"]).unwrap_err();
        match err {
            ToolbarError::DuplicateAction(action) => assert_eq!(action, ToolbarAction::SetBold),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_deserialize_validates() {
        let list: ActionList = serde_json::from_str(r#"["h1", "link", "myButton"]"#).unwrap();
        assert_eq!(
            list.as_slice(),
            &[
                ToolbarAction::Heading1,
                ToolbarAction::InsertLink,
                ToolbarAction::custom("myButton"),
            ]
        );

        let dup: Result<ActionList, _> = serde_json::from_str(r#"["h1", "h1"]"#);
        assert!(dup.is_err());
    }
}
