//! Page manager.
//!
//! Exactly one page is current at any time. Its components live in the
//! editor's working set and are flushed back into the page record before
//! any switch — the two-phase flush-then-load is the only thing keeping
//! edits on multiple pages from being silently lost. The last page can
//! never be deleted.

use crate::clipboard::clone_with_fresh_ids;
use crate::editor::Editor;
use folio_core::{Group, Id, Page};
use smallvec::SmallVec;

impl Editor {
    /// Write the live working set back into the current page record.
    pub(crate) fn flush_current(&mut self) {
        let page = &mut self.pages[self.current];
        page.components = self.components.clone();
        page.background = self.background;
    }

    /// Make `pages[index]` current: load its components and background,
    /// clear the selection, and re-seed the history (snapshots describe
    /// only the current page's list).
    pub(crate) fn load_page(&mut self, index: usize) {
        self.current = index;
        self.components = self.pages[index].components.clone();
        self.background = self.pages[index].background;
        self.selection.clear();
        self.history.reset(&self.components);
    }

    /// Two-phase switch: flush the active page, then load the target.
    /// Silent no-op on an unknown id or when already current.
    pub fn switch_page(&mut self, id: Id) {
        let Some(index) = self.pages.iter().position(|p| p.id == id) else {
            return;
        };
        if index == self.current {
            return;
        }
        self.flush_current();
        self.load_page(index);
        log::debug!("switched to page {id}");
    }

    /// Append an empty page and make it current.
    pub fn add_page(&mut self, name: impl Into<String>) -> Id {
        self.flush_current();
        let page = Page::new(name);
        let id = page.id;
        self.pages.push(page);
        self.load_page(self.pages.len() - 1);
        id
    }

    /// Delete a page. Refused (silently) for the last remaining page.
    /// Deleting the active page promotes the first remaining one and loads
    /// it per the switch procedure.
    pub fn delete_page(&mut self, id: Id) {
        if self.pages.len() <= 1 {
            return;
        }
        let Some(index) = self.pages.iter().position(|p| p.id == id) else {
            return;
        };

        let was_active = index == self.current;
        let removed = self.pages.remove(index);

        // Groups living on the removed page die with it. For the active
        // page the record is stale — the live working set is authoritative.
        let dead: Vec<Id> = if was_active {
            self.components.iter().map(|c| c.id).collect()
        } else {
            removed.components.iter().map(|c| c.id).collect()
        };
        self.groups
            .retain(|g| !g.members.iter().any(|m| dead.contains(m)));

        if was_active {
            self.load_page(0);
        } else if index < self.current {
            self.current -= 1;
        }
        log::debug!("deleted page {id}");
    }

    /// Deep-duplicate a page: fresh component ids, group records contained
    /// in the page cloned and remapped. The copy is inserted right after
    /// the source and becomes current.
    pub fn duplicate_page(&mut self, id: Id) -> Option<Id> {
        let index = self.pages.iter().position(|p| p.id == id)?;
        self.flush_current();

        let source = &self.pages[index];
        let mut copy = Page::new(format!("{} copy", source.name));
        copy.background = source.background;

        let mut id_map: Vec<(Id, Id)> = Vec::new();
        copy.components = clone_with_fresh_ids(&source.components, 0.0, 0.0);
        for (old, new) in source.components.iter().zip(copy.components.iter()) {
            id_map.push((old.id, new.id));
        }

        // Re-create each group whose members all came along.
        let mut cloned_groups: Vec<Group> = Vec::new();
        for group in &self.groups {
            let remapped: SmallVec<[Id; 8]> = group
                .members
                .iter()
                .filter_map(|m| id_map.iter().find(|(old, _)| old == m).map(|(_, new)| *new))
                .collect();
            if remapped.len() >= 2 {
                let mut dup = Group::new(group.name.clone(), remapped.clone());
                dup.locked = group.locked;
                dup.visible = group.visible;
                for c in copy.components.iter_mut() {
                    if remapped.contains(&c.id) {
                        c.group = Some(dup.id);
                    }
                }
                cloned_groups.push(dup);
            }
        }
        self.groups.extend(cloned_groups);

        let new_id = copy.id;
        self.pages.insert(index + 1, copy);
        self.load_page(index + 1);
        Some(new_id)
    }

    /// Rename a page in place. Silent no-op on an unknown id.
    pub fn rename_page(&mut self, id: Id, name: impl Into<String>) {
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
            page.name = name.into();
        }
    }
}
