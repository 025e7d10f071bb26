//! Arrangement operations: z-order, alignment, distribution.
//!
//! Z-orders are sparse integers and are never re-indexed — every operation
//! rewrites only the target's `z`, relative to the current extremum or the
//! nearest neighbor on the relevant side.

use crate::editor::Editor;
use folio_core::{AlignEdge, Axis, Bounds, Id};

impl Editor {
    fn z_of(&self, id: Id) -> Option<i32> {
        self.component(id).map(|c| c.z)
    }

    fn set_z(&mut self, id: Id, z: i32) {
        if let Some(c) = self.components.iter_mut().find(|c| c.id == id) {
            c.z = z;
        }
    }

    /// Raise above everything: z = max + 1. No-op when the target is
    /// already the unique topmost component (or alone on the page).
    pub fn bring_to_front(&mut self, id: Id) {
        let Some(z) = self.z_of(id) else { return };
        let Some(max) = self
            .components
            .iter()
            .filter(|c| c.id != id)
            .map(|c| c.z)
            .max()
        else {
            return;
        };
        if z > max {
            return;
        }
        self.set_z(id, max + 1);
        self.commit();
    }

    /// Lower below everything: z = min − 1. No-op when already the unique
    /// bottommost component.
    pub fn send_to_back(&mut self, id: Id) {
        let Some(z) = self.z_of(id) else { return };
        let Some(min) = self
            .components
            .iter()
            .filter(|c| c.id != id)
            .map(|c| c.z)
            .min()
        else {
            return;
        };
        if z < min {
            return;
        }
        self.set_z(id, min - 1);
        self.commit();
    }

    /// Step above the nearest neighbor on the upper side. Requires at least
    /// one component with a strictly greater z; no-op otherwise.
    pub fn bring_forward(&mut self, id: Id) {
        let Some(z) = self.z_of(id) else { return };
        let Some(neighbor) = self
            .components
            .iter()
            .filter(|c| c.id != id && c.z > z)
            .map(|c| c.z)
            .min()
        else {
            return;
        };
        self.set_z(id, neighbor + 1);
        self.commit();
    }

    /// Step below the nearest neighbor on the lower side.
    pub fn send_backward(&mut self, id: Id) {
        let Some(z) = self.z_of(id) else { return };
        let Some(neighbor) = self
            .components
            .iter()
            .filter(|c| c.id != id && c.z < z)
            .map(|c| c.z)
            .max()
        else {
            return;
        };
        self.set_z(id, neighbor - 1);
        self.commit();
    }

    /// Align the selection onto a shared edge or center line. Requires ≥2
    /// selected components; the reference coordinate is the min (left/top),
    /// max (right/bottom), or mean of centers (center/middle) over the
    /// selection. One history step for the whole move.
    pub fn align_selection(&mut self, edge: AlignEdge) {
        let boxes = self.selected_boxes();
        if boxes.len() < 2 {
            return;
        }

        match edge {
            AlignEdge::Left => {
                let target = fold_min(boxes.iter().map(|(_, b)| b.x));
                for (id, _) in &boxes {
                    self.set_x(*id, target);
                }
            }
            AlignEdge::Right => {
                let target = fold_max(boxes.iter().map(|(_, b)| b.x + b.width));
                for (id, b) in &boxes {
                    self.set_x(*id, target - b.width);
                }
            }
            AlignEdge::Center => {
                let target = mean(boxes.iter().map(|(_, b)| b.center().0));
                for (id, b) in &boxes {
                    self.set_x(*id, target - b.width / 2.0);
                }
            }
            AlignEdge::Top => {
                let target = fold_min(boxes.iter().map(|(_, b)| b.y));
                for (id, _) in &boxes {
                    self.set_y(*id, target);
                }
            }
            AlignEdge::Bottom => {
                let target = fold_max(boxes.iter().map(|(_, b)| b.y + b.height));
                for (id, b) in &boxes {
                    self.set_y(*id, target - b.height);
                }
            }
            AlignEdge::Middle => {
                let target = mean(boxes.iter().map(|(_, b)| b.center().1));
                for (id, b) in &boxes {
                    self.set_y(*id, target - b.height / 2.0);
                }
            }
        }
        self.commit();
    }

    /// Space the selection so every inter-component gap along the axis is
    /// equal. Requires ≥3 selected components; the first and last (by
    /// leading coordinate) stay fixed. One history step.
    pub fn distribute_selection(&mut self, axis: Axis) {
        let mut items: Vec<(Id, f32, f32)> = self
            .selected_boxes()
            .into_iter()
            .map(|(id, b)| match axis {
                Axis::Horizontal => (id, b.x, b.width),
                Axis::Vertical => (id, b.y, b.height),
            })
            .collect();
        if items.len() < 3 {
            return;
        }
        items.sort_by(|a, b| a.1.total_cmp(&b.1));

        let (_, first_leading, first_extent) = items[0];
        let (_, last_leading, last_extent) = items[items.len() - 1];
        let span = (last_leading + last_extent) - first_leading;
        let total_extent: f32 = items.iter().map(|(_, _, e)| e).sum();
        let gap = (span - total_extent) / (items.len() as f32 - 1.0);

        let mut cursor = first_leading + first_extent + gap;
        for &(id, _, extent) in &items[1..items.len() - 1] {
            match axis {
                Axis::Horizontal => self.set_x(id, cursor),
                Axis::Vertical => self.set_y(id, cursor),
            }
            cursor += extent + gap;
        }
        self.commit();
    }

    fn selected_boxes(&self) -> Vec<(Id, Bounds)> {
        self.components
            .iter()
            .filter(|c| self.selection.contains(c.id))
            .map(|c| (c.id, c.bounds()))
            .collect()
    }

    fn set_x(&mut self, id: Id, x: f32) {
        if let Some(c) = self.components.iter_mut().find(|c| c.id == id) {
            c.x = x;
        }
    }

    fn set_y(&mut self, id: Id, y: f32) {
        if let Some(c) = self.components.iter_mut().find(|c| c.id == id) {
            c.y = y;
        }
    }
}

fn fold_min(values: impl Iterator<Item = f32>) -> f32 {
    values.fold(f32::INFINITY, f32::min)
}

fn fold_max(values: impl Iterator<Item = f32>) -> f32 {
    values.fold(f32::NEG_INFINITY, f32::max)
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (sum, count) = values.fold((0.0, 0u32), |(s, n), v| (s + v, n + 1));
    sum / count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Component, ComponentPatch};

    fn sized(x: f32, y: f32, w: f32, h: f32) -> Component {
        let mut c = Component::shape(folio_core::ShapeKind::Rect);
        c.apply(&ComponentPatch {
            x: Some(x),
            y: Some(y),
            width: Some(w),
            height: Some(h),
            ..Default::default()
        });
        c
    }

    #[test]
    fn z_order_quartet() {
        let mut ed = Editor::new();
        let (mut a, mut b, mut c) = (sized(0.0, 0.0, 10.0, 10.0), sized(0.0, 0.0, 10.0, 10.0), sized(0.0, 0.0, 10.0, 10.0));
        a.z = 0;
        b.z = 5;
        c.z = 9;
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        ed.add_components([a, b, c]);

        ed.bring_to_front(a_id);
        assert_eq!(ed.component(a_id).unwrap().z, 10);
        // Other z-orders untouched.
        assert_eq!(ed.component(b_id).unwrap().z, 5);
        assert_eq!(ed.component(c_id).unwrap().z, 9);

        // Already the unique topmost → no-op.
        ed.bring_to_front(a_id);
        assert_eq!(ed.component(a_id).unwrap().z, 10);

        ed.send_to_back(a_id);
        assert_eq!(ed.component(a_id).unwrap().z, 4);

        // Nearest neighbor above 4 is 5 → lands at 6.
        ed.bring_forward(a_id);
        assert_eq!(ed.component(a_id).unwrap().z, 6);

        // Nearest neighbor below 6 is 5 → lands at 4.
        ed.send_backward(a_id);
        assert_eq!(ed.component(a_id).unwrap().z, 4);

        // Nothing below the bottommost → no-op.
        ed.send_backward(a_id);
        assert_eq!(ed.component(a_id).unwrap().z, 4);
    }

    #[test]
    fn z_order_noop_on_single_component() {
        let mut ed = Editor::new();
        let c = sized(0.0, 0.0, 10.0, 10.0);
        let id = c.id;
        ed.add_component(c);
        let depth = ed.history.depth();

        ed.bring_to_front(id);
        ed.send_to_back(id);
        ed.bring_forward(id);
        ed.send_backward(id);
        assert_eq!(ed.component(id).unwrap().z, 0);
        assert_eq!(ed.history.depth(), depth);
    }

    #[test]
    fn align_center_matches_mean_of_centers() {
        let mut ed = Editor::new();
        let a = sized(0.0, 0.0, 100.0, 20.0);
        let b = sized(300.0, 50.0, 50.0, 20.0);
        let (a_id, b_id) = (a.id, b.id);
        ed.add_components([a, b]);
        ed.select_all();

        // Centers 50 and 325 → mean 187.5.
        ed.align_selection(AlignEdge::Center);
        assert_eq!(ed.component(a_id).unwrap().x, 137.5);
        assert_eq!(ed.component(b_id).unwrap().x, 162.5);
        // Vertical position untouched by a horizontal alignment.
        assert_eq!(ed.component(b_id).unwrap().y, 50.0);
    }

    #[test]
    fn align_edges() {
        let mut ed = Editor::new();
        let a = sized(10.0, 5.0, 100.0, 40.0);
        let b = sized(60.0, 80.0, 20.0, 10.0);
        let (a_id, b_id) = (a.id, b.id);
        ed.add_components([a, b]);
        ed.select_all();

        ed.align_selection(AlignEdge::Left);
        assert_eq!(ed.component(b_id).unwrap().x, 10.0);

        ed.align_selection(AlignEdge::Right);
        // Right edge of the wider box: 10 + 100 = 110.
        assert_eq!(ed.component(b_id).unwrap().x, 90.0);

        ed.align_selection(AlignEdge::Top);
        assert_eq!(ed.component(b_id).unwrap().y, 5.0);

        ed.align_selection(AlignEdge::Bottom);
        assert_eq!(ed.component(b_id).unwrap().y, 35.0);
        assert_eq!(ed.component(a_id).unwrap().y, 5.0);
    }

    #[test]
    fn align_requires_two_selected() {
        let mut ed = Editor::new();
        let a = sized(10.0, 10.0, 50.0, 50.0);
        let id = a.id;
        ed.add_component(a);
        ed.select(id, false);

        ed.align_selection(AlignEdge::Left);
        assert_eq!(ed.component(id).unwrap().x, 10.0);
    }

    #[test]
    fn distribute_equalizes_gaps() {
        let mut ed = Editor::new();
        let a = sized(0.0, 0.0, 10.0, 10.0);
        let b = sized(50.0, 0.0, 10.0, 10.0);
        let c = sized(200.0, 0.0, 10.0, 10.0);
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        ed.add_components([a, b, c]);
        ed.select_all();

        // span 210, extents 30 → gap (210 − 30) / 2 = 90.
        // First trailing edge at 10, so the middle lands at x = 100.
        ed.distribute_selection(Axis::Horizontal);
        assert_eq!(ed.component(a_id).unwrap().x, 0.0);
        assert_eq!(ed.component(b_id).unwrap().x, 100.0);
        assert_eq!(ed.component(c_id).unwrap().x, 200.0);
    }

    #[test]
    fn distribute_vertical_and_underflow() {
        let mut ed = Editor::new();
        let a = sized(0.0, 0.0, 10.0, 20.0);
        let b = sized(0.0, 30.0, 10.0, 20.0);
        let c = sized(0.0, 200.0, 10.0, 20.0);
        let (b_id, c_id) = (b.id, c.id);
        let a_id = a.id;
        ed.add_components([a, b, c]);

        // Two selected → silent no-op.
        ed.select(a_id, false);
        ed.select(b_id, true);
        ed.distribute_selection(Axis::Vertical);
        assert_eq!(ed.component(b_id).unwrap().y, 30.0);

        ed.select_all();
        // span 220, extents 60 → gap 80; middle y = 20 + 80 = 100.
        ed.distribute_selection(Axis::Vertical);
        assert_eq!(ed.component(b_id).unwrap().y, 100.0);
        assert_eq!(ed.component(c_id).unwrap().y, 200.0);
    }
}
