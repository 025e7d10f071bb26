//! Clipboard: copy/cut/paste over the current selection.

use crate::editor::Editor;
use folio_core::{Component, Id};

/// Positional offset applied to pasted components so they never land
/// exactly on their originals.
pub const PASTE_OFFSET: f32 = 20.0;

/// Holds structural copies of the most recently copied components.
#[derive(Debug, Default)]
pub struct Clipboard {
    buffer: Vec<Component>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Editor {
    /// Snapshot the selected components into the clipboard buffer. Never
    /// touches the model or history.
    pub fn copy_selection(&mut self) {
        let selection = &self.selection;
        self.clipboard.buffer = self
            .components
            .iter()
            .filter(|c| selection.contains(c.id))
            .cloned()
            .collect();
    }

    /// Clone the buffer onto the page: fresh ids, a fixed +20/+20 offset,
    /// group back-references stripped (the group record itself is not
    /// duplicated). The pasted ids become the new selection; one commit.
    pub fn paste(&mut self) {
        if self.clipboard.buffer.is_empty() {
            return;
        }
        let clones = clone_with_fresh_ids(&self.clipboard.buffer, PASTE_OFFSET, PASTE_OFFSET);
        let ids: Vec<Id> = clones.iter().map(|c| c.id).collect();
        self.components.extend(clones);
        self.selection.replace(ids);
        self.commit();
    }

    /// Copy followed by delete-selected; the delete provides the single
    /// history commit.
    pub fn cut_selection(&mut self) {
        self.copy_selection();
        self.delete_selected();
    }

    /// Paste semantics applied directly to the selection, leaving the
    /// clipboard buffer untouched.
    pub fn duplicate_selection(&mut self) {
        let selection = &self.selection;
        let originals: Vec<Component> = self
            .components
            .iter()
            .filter(|c| selection.contains(c.id))
            .cloned()
            .collect();
        if originals.is_empty() {
            return;
        }
        let clones = clone_with_fresh_ids(&originals, PASTE_OFFSET, PASTE_OFFSET);
        let ids: Vec<Id> = clones.iter().map(|c| c.id).collect();
        self.components.extend(clones);
        self.selection.replace(ids);
        self.commit();
    }
}

/// Deep-copy components with regenerated ids, shifted position, and no
/// group membership.
pub(crate) fn clone_with_fresh_ids(source: &[Component], dx: f32, dy: f32) -> Vec<Component> {
    source
        .iter()
        .map(|c| {
            let mut dup = c.clone();
            dup.id = Id::fresh(dup.kind.prefix());
            dup.x += dx;
            dup.y += dy;
            dup.group = None;
            dup
        })
        .collect()
}
