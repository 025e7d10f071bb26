//! The editor state container and component-level mutations.
//!
//! Invalid references and under-specified batch operations are silent
//! no-ops throughout — the engine never raises toward the UI. Only the
//! persistence boundary ([`crate::persist`]) surfaces errors.

use crate::clipboard::Clipboard;
use crate::history::History;
use crate::placement::PendingPlacement;
use crate::selection::Selection;
use folio_core::{Axis, Color, Component, ComponentPatch, Group, Guide, Id, Page};

/// The document being edited, plus every piece of editing state around it.
///
/// The `components` vector is the live working set for the current page;
/// the matching [`Page`] record is refreshed from it on every page switch,
/// duplication, and document export (flush-then-load).
pub struct Editor {
    pub(crate) pages: Vec<Page>,
    pub(crate) current: usize,
    pub(crate) components: Vec<Component>,
    pub(crate) background: Color,
    pub(crate) groups: Vec<Group>,
    pub(crate) guides: Vec<Guide>,
    pub(crate) selection: Selection,
    pub(crate) history: History,
    pub(crate) clipboard: Clipboard,
    pub(crate) pending: Option<PendingPlacement>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// A fresh single-page document.
    pub fn new() -> Self {
        let page = Page::new("Page 1");
        Self {
            current: 0,
            components: Vec::new(),
            background: page.background,
            pages: vec![page],
            groups: Vec::new(),
            guides: Vec::new(),
            selection: Selection::new(),
            history: History::new(&[]),
            clipboard: Clipboard::new(),
            pending: None,
        }
    }

    // ─── Read access ─────────────────────────────────────────────────────

    /// Live component working set of the current page.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: Id) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// All pages. Records other than the current one are authoritative;
    /// the current page's record is only refreshed on flush (switch,
    /// duplicate, export).
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page_id(&self) -> Id {
        self.pages[self.current].id
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Background changes are not part of the component snapshot, so they
    /// are not undoable.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: Id) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn selected_ids(&self) -> &[Id] {
        self.selection.ids()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Component mutations ─────────────────────────────────────────────

    /// Append a component and commit. The creator is responsible for the
    /// initial z-order — factories default to 0, interactive creation uses
    /// [`Editor::top_z`].
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
        self.commit();
    }

    /// Append a batch of components as a single history step.
    pub fn add_components(&mut self, batch: impl IntoIterator<Item = Component>) {
        let before = self.components.len();
        self.components.extend(batch);
        if self.components.len() != before {
            self.commit();
        }
    }

    /// Next z-order above everything on the page (max + 1, or 0 when
    /// empty).
    pub fn top_z(&self) -> i32 {
        self.components.iter().map(|c| c.z).max().map_or(0, |z| z + 1)
    }

    /// Merge a partial update into the matching component; silent no-op on
    /// an unknown id.
    ///
    /// Deliberately does NOT commit: drag/resize/rotate gestures stream one
    /// of these per pointer frame and call [`Editor::commit`] exactly once
    /// when the gesture ends.
    pub fn update_component(&mut self, id: Id, patch: &ComponentPatch) {
        if let Some(c) = self.components.iter_mut().find(|c| c.id == id) {
            c.apply(patch);
        }
    }

    /// Arbitrary (kind-specific) edit under the same no-commit contract as
    /// [`Editor::update_component`].
    pub fn update_component_with(&mut self, id: Id, f: impl FnOnce(&mut Component)) {
        if let Some(c) = self.components.iter_mut().find(|c| c.id == id) {
            f(c);
            c.clamp_extents();
        }
    }

    /// Shift every selected, unlocked component by a delta. Transient — the
    /// gesture owner commits at the end. Group siblings are already in the
    /// selection (selection expands groups), so the whole group moves in
    /// one synchronous pass.
    pub fn move_selection_by(&mut self, dx: f32, dy: f32) {
        let selection = &self.selection;
        for c in self.components.iter_mut() {
            if selection.contains(c.id) && !c.locked {
                c.x += dx;
                c.y += dy;
            }
        }
    }

    /// Remove one component, dropping it from the selection and pruning
    /// group membership eagerly. Commits.
    pub fn delete_component(&mut self, id: Id) {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        if self.components.len() == before {
            return;
        }
        self.selection.remove(id);
        self.reconcile_groups();
        self.commit();
    }

    /// Remove everything selected as a single history step.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let selection = &self.selection;
        self.components.retain(|c| !selection.contains(c.id));
        self.selection.clear();
        self.reconcile_groups();
        self.commit();
    }

    // ─── Guides ──────────────────────────────────────────────────────────
    //
    // Guides are advisory and live outside the component snapshot, so none
    // of these operations touch history.

    pub fn add_guide(&mut self, axis: Axis, offset: f32) -> Id {
        let guide = Guide::new(axis, offset);
        let id = guide.id;
        self.guides.push(guide);
        id
    }

    pub fn move_guide(&mut self, id: Id, offset: f32) {
        if let Some(g) = self.guides.iter_mut().find(|g| g.id == id) {
            g.offset = offset;
        }
    }

    pub fn set_guide_visible(&mut self, id: Id, visible: bool) {
        if let Some(g) = self.guides.iter_mut().find(|g| g.id == id) {
            g.visible = visible;
        }
    }

    pub fn remove_guide(&mut self, id: Id) {
        self.guides.retain(|g| g.id != id);
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Record the live component list as a history snapshot. Mutating
    /// operations call this themselves; gesture owners call it once per
    /// gesture.
    pub fn commit(&mut self) {
        self.history.commit(&self.components);
    }

    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.components = snapshot;
            self.selection.clear();
            self.reconcile_groups();
        }
    }

    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.components = snapshot;
            self.selection.clear();
            self.reconcile_groups();
        }
    }
}
