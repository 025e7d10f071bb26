//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `EditorAction`s and dispatches
//! them onto an [`Editor`]. Platform-aware: ⌘ on macOS and Ctrl elsewhere
//! resolve identically.

use crate::editor::Editor;
use crate::input::Modifiers;

/// Actions keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    Duplicate,
    Delete,
    SelectAll,
    /// Escape: cancel a pending placement if one exists, else deselect.
    Dismiss,
    Group,
    Ungroup,
    BringForward,
    SendBackward,
    BringToFront,
    SendToBack,
}

/// Resolves key events into editor actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action. `key` is the host
    /// `KeyboardEvent.key` value. Returns `None` for unbound combos.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<EditorAction> {
        let cmd = modifiers.ctrl || modifiers.meta;

        if cmd && modifiers.shift {
            return match key {
                "z" | "Z" => Some(EditorAction::Redo),
                "g" | "G" => Some(EditorAction::Ungroup),
                "[" => Some(EditorAction::SendToBack),
                "]" => Some(EditorAction::BringToFront),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(EditorAction::Undo),
                "y" | "Y" => Some(EditorAction::Redo),
                "a" | "A" => Some(EditorAction::SelectAll),
                "c" | "C" => Some(EditorAction::Copy),
                "x" | "X" => Some(EditorAction::Cut),
                "v" | "V" => Some(EditorAction::Paste),
                "d" | "D" => Some(EditorAction::Duplicate),
                "g" | "G" => Some(EditorAction::Group),
                "[" => Some(EditorAction::SendBackward),
                "]" => Some(EditorAction::BringForward),
                _ => None,
            };
        }

        match key {
            "Delete" | "Backspace" => Some(EditorAction::Delete),
            "Escape" => Some(EditorAction::Dismiss),
            _ => None,
        }
    }
}

/// Dispatch an action onto the editor. Z-order actions apply to each
/// selected component in selection order.
pub fn apply_action(editor: &mut Editor, action: EditorAction) {
    match action {
        EditorAction::Undo => editor.undo(),
        EditorAction::Redo => editor.redo(),
        EditorAction::Copy => editor.copy_selection(),
        EditorAction::Cut => editor.cut_selection(),
        EditorAction::Paste => editor.paste(),
        EditorAction::Duplicate => editor.duplicate_selection(),
        EditorAction::Delete => editor.delete_selected(),
        EditorAction::SelectAll => editor.select_all(),
        EditorAction::Dismiss => {
            if editor.has_pending_placement() {
                editor.cancel_placement();
            } else {
                editor.clear_selection();
            }
        }
        EditorAction::Group => {
            editor.group_selection("Group");
        }
        EditorAction::Ungroup => editor.ungroup_selection(),
        EditorAction::BringForward => {
            for id in editor.selected_ids().to_vec() {
                editor.bring_forward(id);
            }
        }
        EditorAction::SendBackward => {
            for id in editor.selected_ids().to_vec() {
                editor.send_backward(id);
            }
        }
        EditorAction::BringToFront => {
            for id in editor.selected_ids().to_vec() {
                editor.bring_to_front(id);
            }
        }
        EditorAction::SendToBack => {
            for id in editor.selected_ids().to_vec() {
                editor.send_to_back(id);
            }
        }
    }
}
