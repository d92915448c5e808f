//! Mounting, selection sync and re-render notification.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use weaver_toolbar::{
    ActionList, EditorCall, EditorHandle, MemoryEditor, RichTextToolbar, SelectedSet,
    ToolbarAction, ToolbarConfig, ToolbarError, ToolbarHooks,
};

fn selection(ids: &[&str]) -> SelectedSet {
    ids.iter().map(|id| ToolbarAction::from(*id)).collect()
}

fn mount(editor: &Arc<MemoryEditor>) -> RichTextToolbar {
    let handle: EditorHandle = editor.clone();
    RichTextToolbar::builder()
        .mount(move || Some(handle))
        .expect("editor is present")
}

#[test]
fn test_mount_without_editor_fails() {
    let calls = AtomicUsize::new(0);
    let result = RichTextToolbar::mount(
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            None
        },
        ToolbarConfig::default(),
        ToolbarHooks::default(),
    );

    assert!(matches!(result, Err(ToolbarError::NoEditor)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_mount_registers_once() {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(&editor);

    assert!(editor.is_registered());
    assert_eq!(editor.calls(), [EditorCall::RegisterToolbar]);
    assert!(toolbar.selected().is_empty());
    assert_eq!(toolbar.rows().len(), 6);
}

#[test]
fn test_rows_track_latest_selection() {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(&editor);

    let updates = [
        selection(&["bold"]),
        selection(&["bold", "italic", "orderedList"]),
        selection(&[]),
        selection(&["text", "justifyLeft"]),
    ];
    for update in updates {
        assert!(editor.push_selection(update.clone()));
        for row in toolbar.rows().iter() {
            assert_eq!(row.selected, update.contains(&row.action), "{}", row.action);
        }
    }
}

#[test]
fn test_repeated_selection_does_not_recompute() {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(&editor);
    let mut rows = toolbar.subscribe();

    let set = selection(&["underline"]);
    editor.push_selection(set.clone());
    assert_eq!(toolbar.generation(), 1);
    assert!(rows.has_changed().unwrap());
    rows.borrow_and_update();

    editor.push_selection(set);
    editor.push_selection(selection(&["underline"]));
    assert_eq!(toolbar.generation(), 1);
    assert!(!rows.has_changed().unwrap());
}

#[test]
fn test_subscribers_see_new_rows() {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(&editor);
    let mut rows = toolbar.subscribe();

    editor.push_selection(selection(&["italic"]));
    assert!(rows.has_changed().unwrap());
    let published = rows.borrow_and_update().clone();
    assert!(Arc::ptr_eq(&published, &toolbar.rows()));
    assert!(published.iter().any(|r| r.action == ToolbarAction::SetItalic && r.selected));
}

#[test]
fn test_set_actions_after_mount() {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(&editor);
    editor.push_selection(selection(&["h2", "bold"]));

    toolbar.set_actions(ActionList::from_ids(["h1", "h2", "h3", "link"]).unwrap());
    let rows = toolbar.rows();
    let flags: Vec<(&str, bool)> = rows
        .iter()
        .map(|r| (r.action.as_str(), r.selected))
        .collect();
    assert_eq!(
        flags,
        [("h1", false), ("h2", true), ("h3", false), ("link", false)]
    );
}

#[test]
fn test_reconfigure_replaces_icons_and_actions() {
    let editor = Arc::new(MemoryEditor::new());
    let mut toolbar = mount(&editor);

    let config: ToolbarConfig = serde_json::from_str(
        r#"{ "actions": ["bold", "strikeThrough"], "icon_overrides": { "strikeThrough": "img/strike.png" } }"#,
    )
    .unwrap();
    toolbar.reconfigure(config);

    assert_eq!(toolbar.actions().len(), 2);
    assert_eq!(
        toolbar
            .resolve_icon(&ToolbarAction::SetStrikethrough)
            .map(|i| i.to_string()),
        Some("img/strike.png".to_string())
    );
    // Binding survives reconfiguration.
    editor.push_selection(selection(&["strikeThrough"]));
    assert!(toolbar.rows()[1].selected);
    assert_eq!(editor.calls(), [EditorCall::RegisterToolbar]);
}

#[test]
fn test_editor_pushing_from_apply_action_does_not_deadlock() {
    use weaver_toolbar::{EditorError, SelectionCallback, ToolbarEditor};

    /// Editor that echoes every applied action back as the new selection.
    struct EchoEditor {
        inner: MemoryEditor,
    }

    impl ToolbarEditor for EchoEditor {
        fn register_toolbar(&self, cb: SelectionCallback) {
            self.inner.register_toolbar(cb);
        }
        fn apply_action(&self, action: &ToolbarAction) {
            self.inner.apply_action(action);
            self.inner
                .push_selection([action.clone()].into_iter().collect());
        }
        fn prepare_insertion_point(&self) {
            self.inner.prepare_insertion_point();
        }
        fn selected_text(&self) -> n0_future::boxed::BoxFuture<Result<String, EditorError>> {
            self.inner.selected_text()
        }
        fn present_link_dialog(&self, seed_text: String) {
            self.inner.present_link_dialog(seed_text);
        }
    }

    let editor = Arc::new(EchoEditor {
        inner: MemoryEditor::new(),
    });
    let handle: EditorHandle = editor.clone();
    let toolbar = RichTextToolbar::builder()
        .mount(move || Some(handle))
        .unwrap();

    toolbar.press(&ToolbarAction::SetBold);
    assert_eq!(toolbar.selected(), selection(&["bold"]));
}
