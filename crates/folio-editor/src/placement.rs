//! Pending placement: insert-by-pointer for templates, assets, and new
//! components.
//!
//! A pending set is staged without touching the model; the next pointer
//! press lands it (fresh ids, batch append, one commit) and an escape
//! discards it with no history trace. Template and remote-asset insertion
//! go through this same path, so identifier uniqueness and history
//! semantics match manual creation exactly.

use crate::clipboard::clone_with_fresh_ids;
use crate::editor::Editor;
use folio_core::{Component, Id};

/// Components staged for pointer placement.
#[derive(Debug)]
pub struct PendingPlacement {
    pub(crate) components: Vec<Component>,
}

impl Editor {
    /// Stage a ready-made set of components (a template, an asset, or a
    /// single new component) for placement. An empty set is ignored;
    /// staging replaces any previously pending set.
    pub fn begin_placement(&mut self, components: Vec<Component>) {
        if components.is_empty() {
            return;
        }
        self.pending = Some(PendingPlacement { components });
    }

    pub fn has_pending_placement(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard the pending set. No model mutation, no history entry.
    pub fn cancel_placement(&mut self) {
        self.pending = None;
    }

    /// Land the pending set with its top-left corner at (x, y). Internal
    /// offsets and stacking are preserved; every component gets a fresh id
    /// and the set is appended above the existing content as one history
    /// step. The placed ids become the new selection.
    pub fn place_pending(&mut self, x: f32, y: f32) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let min_x = pending
            .components
            .iter()
            .map(|c| c.x)
            .fold(f32::INFINITY, f32::min);
        let min_y = pending
            .components
            .iter()
            .map(|c| c.y)
            .fold(f32::INFINITY, f32::min);
        let min_z = pending.components.iter().map(|c| c.z).min().unwrap_or(0);
        let z_shift = self.top_z() - min_z;

        let mut placed = clone_with_fresh_ids(&pending.components, x - min_x, y - min_y);
        for c in placed.iter_mut() {
            c.z += z_shift;
        }
        let ids: Vec<Id> = placed.iter().map(|c| c.id).collect();
        self.components.extend(placed);
        self.selection.replace(ids);
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Component, ComponentPatch, ShapeKind};

    fn template() -> Vec<Component> {
        let mut heading = Component::text("Heading");
        heading.apply(&ComponentPatch::position(100.0, 100.0));
        let mut badge = Component::shape(ShapeKind::Ellipse);
        badge.apply(&ComponentPatch::position(140.0, 160.0));
        badge.z = 3;
        vec![heading, badge]
    }

    #[test]
    fn placement_translates_to_pointer_preserving_offsets() {
        let mut ed = Editor::new();
        ed.begin_placement(template());
        ed.place_pending(10.0, 20.0);

        assert_eq!(ed.components().len(), 2);
        let heading = &ed.components()[0];
        let badge = &ed.components()[1];
        assert_eq!((heading.x, heading.y), (10.0, 20.0));
        // Internal +40/+60 offset kept.
        assert_eq!((badge.x, badge.y), (50.0, 80.0));
        // Placed set is the selection.
        assert_eq!(ed.selected_ids().len(), 2);
    }

    #[test]
    fn placement_stacks_above_existing_content() {
        let mut ed = Editor::new();
        let mut base = Component::shape(ShapeKind::Rect);
        base.z = 12;
        ed.add_component(base);

        ed.begin_placement(template());
        ed.place_pending(0.0, 0.0);
        // Lowest placed z lands at top_z (13); internal stacking preserved.
        assert_eq!(ed.components()[1].z, 13);
        assert_eq!(ed.components()[2].z, 16);
    }

    #[test]
    fn placement_regenerates_ids() {
        let mut ed = Editor::new();
        let set = template();
        let staged_ids: Vec<_> = set.iter().map(|c| c.id).collect();
        ed.begin_placement(set);
        ed.place_pending(0.0, 0.0);
        for c in ed.components() {
            assert!(!staged_ids.contains(&c.id));
        }
    }

    #[test]
    fn cancel_discards_without_history() {
        let mut ed = Editor::new();
        ed.add_component(Component::line());
        let depth = ed.history.depth();

        ed.begin_placement(template());
        assert!(ed.has_pending_placement());
        ed.cancel_placement();
        assert!(!ed.has_pending_placement());
        assert_eq!(ed.components().len(), 1);
        assert_eq!(ed.history.depth(), depth);

        // Placing after a cancel is a no-op.
        ed.place_pending(5.0, 5.0);
        assert_eq!(ed.components().len(), 1);
    }

    #[test]
    fn single_placement_is_one_undo_step() {
        let mut ed = Editor::new();
        ed.begin_placement(template());
        ed.place_pending(0.0, 0.0);
        assert_eq!(ed.components().len(), 2);

        ed.undo();
        assert!(ed.components().is_empty());
    }
}
