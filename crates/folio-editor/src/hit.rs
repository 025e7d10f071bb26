//! Hit testing: pointer position → component lookup.
//!
//! Works on unrotated bounding boxes. Invisible components are skipped —
//! renderers omit them, so they cannot be clicked. Locked components still
//! hit: lock disables handles, not presence.

use folio_core::{Bounds, Component, Id};

/// Topmost visible component containing the point, or `None` for the page
/// background. Higher z wins; equal z falls back to later list position
/// (matching paint order).
pub fn hit_test(components: &[Component], x: f32, y: f32) -> Option<Id> {
    components
        .iter()
        .enumerate()
        .filter(|(_, c)| c.visible && c.bounds().contains(x, y))
        .max_by_key(|(i, c)| (c.z, *i))
        .map(|(_, c)| c.id)
}

/// Ids of every component whose bounding box strictly overlaps the
/// rectangle, in list order. Visibility is not consulted — this is the
/// marquee's purely geometric test.
pub fn components_in_rect(components: &[Component], rect: &Bounds) -> Vec<Id> {
    components
        .iter()
        .filter(|c| c.bounds().intersects(rect))
        .map(|c| c.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Component, ComponentPatch, ShapeKind};

    fn at(x: f32, y: f32, z: i32) -> Component {
        let mut c = Component::shape(ShapeKind::Rect); // 120×120
        c.apply(&ComponentPatch::position(x, y));
        c.z = z;
        c
    }

    #[test]
    fn topmost_by_z_wins() {
        let bottom = at(0.0, 0.0, 1);
        let top = at(50.0, 50.0, 5);
        let top_id = top.id;
        let components = vec![bottom, top];

        // Point inside the overlap region.
        assert_eq!(hit_test(&components, 60.0, 60.0), Some(top_id));
    }

    #[test]
    fn equal_z_prefers_later_component() {
        let first = at(0.0, 0.0, 2);
        let second = at(0.0, 0.0, 2);
        let second_id = second.id;
        let components = vec![first, second];
        assert_eq!(hit_test(&components, 10.0, 10.0), Some(second_id));
    }

    #[test]
    fn invisible_components_cannot_be_hit() {
        let mut hidden = at(0.0, 0.0, 9);
        hidden.visible = false;
        let below = at(0.0, 0.0, 1);
        let below_id = below.id;
        let components = vec![hidden, below];
        assert_eq!(hit_test(&components, 5.0, 5.0), Some(below_id));
    }

    #[test]
    fn background_miss_returns_none() {
        let components = vec![at(0.0, 0.0, 0)];
        assert_eq!(hit_test(&components, 500.0, 500.0), None);
    }

    #[test]
    fn rect_collection_is_geometric() {
        let mut hidden = at(0.0, 0.0, 0);
        hidden.visible = false;
        let hidden_id = hidden.id;
        let components = vec![hidden];

        let rect = Bounds {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
        };
        assert_eq!(components_in_rect(&components, &rect), vec![hidden_id]);
    }
}
