//! Selection manager.
//!
//! The selection is an ordered set of component ids, always a subset of the
//! current page's live list. Clicking any member of a group selects or
//! deselects the *whole* group; marquee selection is a pure bounding-box
//! intersection test.

use crate::editor::Editor;
use folio_core::{Bounds, Component, Group, Id};

/// The active selection set.
#[derive(Debug, Default)]
pub struct Selection {
    ids: Vec<Id>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub(crate) fn remove(&mut self, id: Id) {
        self.ids.retain(|s| *s != id);
    }

    pub(crate) fn replace(&mut self, ids: Vec<Id>) {
        self.ids = ids;
    }

    /// Click selection. A grouped component stands for its entire group:
    /// additive mode toggles the whole membership (all selected → deselect
    /// all, otherwise select the union); non-additive mode replaces the
    /// selection with exactly the unit.
    pub(crate) fn select(
        &mut self,
        id: Id,
        additive: bool,
        components: &[Component],
        groups: &[Group],
    ) {
        let Some(component) = components.iter().find(|c| c.id == id) else {
            return;
        };
        let unit: Vec<Id> = match component
            .group
            .and_then(|gid| groups.iter().find(|g| g.id == gid))
        {
            Some(group) => group.members.iter().copied().collect(),
            None => vec![id],
        };

        if additive {
            if unit.iter().all(|m| self.contains(*m)) {
                self.ids.retain(|s| !unit.contains(s));
            } else {
                for m in unit {
                    if !self.contains(m) {
                        self.ids.push(m);
                    }
                }
            }
        } else {
            self.ids = unit;
        }
    }

    /// Every component on the page, grouping notwithstanding.
    pub(crate) fn select_all(&mut self, components: &[Component]) {
        self.ids = components.iter().map(|c| c.id).collect();
    }

    /// Fresh selection of every component whose bounding box strictly
    /// overlaps the rectangle — partial coverage qualifies, touching edges
    /// do not.
    pub(crate) fn marquee(&mut self, rect: &Bounds, components: &[Component]) {
        self.ids = crate::hit::components_in_rect(components, rect);
    }
}

impl Editor {
    /// Click selection; `additive` is the shift-click path.
    pub fn select(&mut self, id: Id, additive: bool) {
        self.selection
            .select(id, additive, &self.components, &self.groups);
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.components);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Marquee selection over a page-coordinate rectangle.
    pub fn marquee_select(&mut self, rect: Bounds) {
        self.selection.marquee(&rect, &self.components);
    }
}
