//! Group lifecycle: create, dissolve, and the write-through lock/visibility
//! toggles.
//!
//! Membership is kept consistent eagerly: deletes and history restores run
//! [`Editor::reconcile_groups`], which prunes member entries whose component
//! is gone (or no longer points back), dissolves groups below two members,
//! and clears dangling back-references. Groups whose members live on other
//! pages are left alone.

use crate::editor::Editor;
use folio_core::{Group, Id};
use smallvec::SmallVec;

impl Editor {
    /// Aggregate the current selection (≥2 components) into a new group.
    /// Members already belonging to another group are reassigned; the old
    /// groups dissolve if that leaves them below two members. Returns the
    /// new group's id, or `None` on an under-specified selection.
    pub fn group_selection(&mut self, name: &str) -> Option<Id> {
        let members: SmallVec<[Id; 8]> = self
            .components
            .iter()
            .filter(|c| self.selection.contains(c.id))
            .map(|c| c.id)
            .collect();
        if members.len() < 2 {
            return None;
        }

        let group = Group::new(name, members.clone());
        let gid = group.id;
        for c in self.components.iter_mut() {
            if members.contains(&c.id) {
                c.group = Some(gid);
            }
        }
        self.groups.push(group);
        self.reconcile_groups();
        self.commit();
        log::debug!("grouped {} components as {gid}", members.len());
        Some(gid)
    }

    /// Dissolve one group, clearing every member's back-reference.
    pub fn ungroup(&mut self, group_id: Id) {
        if self.dissolve(group_id) {
            self.commit();
        }
    }

    /// Dissolve every group represented in the selection, as one history
    /// step.
    pub fn ungroup_selection(&mut self) {
        let mut gids: Vec<Id> = Vec::new();
        for c in self.components.iter() {
            if self.selection.contains(c.id)
                && let Some(gid) = c.group
                && !gids.contains(&gid)
            {
                gids.push(gid);
            }
        }
        let mut changed = false;
        for gid in gids {
            changed |= self.dissolve(gid);
        }
        if changed {
            self.commit();
        }
    }

    /// Write-through visibility toggle: the group record and every member's
    /// own `visible` flag change together, so renderers and hit testing
    /// never consult the group.
    pub fn set_group_visible(&mut self, group_id: Id, visible: bool) {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) else {
            return;
        };
        group.visible = visible;
        let members = group.members.clone();
        for c in self.components.iter_mut() {
            if members.contains(&c.id) {
                c.visible = visible;
            }
        }
        self.commit();
    }

    /// Write-through lock toggle, same contract as
    /// [`Editor::set_group_visible`].
    pub fn set_group_locked(&mut self, group_id: Id, locked: bool) {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) else {
            return;
        };
        group.locked = locked;
        let members = group.members.clone();
        for c in self.components.iter_mut() {
            if members.contains(&c.id) {
                c.locked = locked;
            }
        }
        self.commit();
    }

    fn dissolve(&mut self, group_id: Id) -> bool {
        let Some(pos) = self.groups.iter().position(|g| g.id == group_id) else {
            return false;
        };
        self.groups.remove(pos);
        for c in self.components.iter_mut() {
            if c.group == Some(group_id) {
                c.group = None;
            }
        }
        true
    }

    /// Bring group records back in line with the live component list.
    /// Groups with no member on the current page belong to another page and
    /// are skipped.
    pub(crate) fn reconcile_groups(&mut self) {
        let components = &self.components;
        let mut dissolved: Vec<Id> = Vec::new();
        for group in self.groups.iter_mut() {
            let on_page = group
                .members
                .iter()
                .any(|id| components.iter().any(|c| c.id == *id));
            if !on_page {
                continue;
            }
            group
                .members
                .retain(|id| components.iter().any(|c| c.id == *id && c.group == Some(group.id)));
            if group.members.len() < 2 {
                dissolved.push(group.id);
            }
        }

        if !dissolved.is_empty() {
            self.groups.retain(|g| !dissolved.contains(&g.id));
            log::debug!("dissolved {} underflowed group(s)", dissolved.len());
        }

        // Clear back-references into groups that no longer exist.
        let live: Vec<Id> = self.groups.iter().map(|g| g.id).collect();
        for c in self.components.iter_mut() {
            if let Some(gid) = c.group
                && !live.contains(&gid)
            {
                c.group = None;
            }
        }
    }
}
