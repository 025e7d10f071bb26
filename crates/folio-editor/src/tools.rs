//! The select tool: click selection, drag-move, and marquee.
//!
//! Drag gestures are the one place where sub-updates are deliberately not
//! atomic with respect to history: each pointer-move issues a transient
//! `move_selection_by`, and exactly one commit fires on pointer-up. A
//! pointer press while a placement is pending lands the pending set
//! instead.

use crate::editor::Editor;
use crate::hit::hit_test;
use crate::input::InputEvent;
use folio_core::Bounds;

#[derive(Debug)]
struct DragState {
    last_x: f32,
    last_y: f32,
    moved: bool,
}

/// Pointer-driven selection/move tool.
#[derive(Debug, Default)]
pub struct SelectTool {
    drag: Option<DragState>,
    marquee_start: Option<(f32, f32)>,
    /// Current marquee rectangle, exposed for the host to draw.
    pub marquee_rect: Option<Bounds>,
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Bounds {
        Bounds {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    /// Feed one input event through the tool.
    pub fn handle(&mut self, editor: &mut Editor, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { x, y, modifiers } => {
                if editor.has_pending_placement() {
                    editor.place_pending(*x, *y);
                    return;
                }
                self.marquee_start = None;
                self.marquee_rect = None;

                match hit_test(editor.components(), *x, *y) {
                    Some(hit) => {
                        let already = editor.selected_ids().contains(&hit);
                        if modifiers.shift {
                            editor.select(hit, true);
                        } else if !already {
                            editor.select(hit, false);
                        }
                        // Clicking an already-selected component keeps the
                        // selection so the whole set can be dragged.
                        self.drag = Some(DragState {
                            last_x: *x,
                            last_y: *y,
                            moved: false,
                        });
                    }
                    None => {
                        if !modifiers.shift {
                            editor.clear_selection();
                        }
                        self.marquee_start = Some((*x, *y));
                        self.marquee_rect = Some(Bounds {
                            x: *x,
                            y: *y,
                            width: 0.0,
                            height: 0.0,
                        });
                    }
                }
            }
            InputEvent::PointerMove { x, y, modifiers } => {
                if let Some((sx, sy)) = self.marquee_start {
                    self.marquee_rect = Some(Self::normalize_rect(sx, sy, *x, *y));
                    return;
                }
                if let Some(drag) = &mut self.drag {
                    let mut dx = x - drag.last_x;
                    let mut dy = y - drag.last_y;
                    drag.last_x = *x;
                    drag.last_y = *y;

                    // Shift: constrain to the dominant axis.
                    if modifiers.shift {
                        if dx.abs() > dy.abs() {
                            dy = 0.0;
                        } else {
                            dx = 0.0;
                        }
                    }
                    if dx != 0.0 || dy != 0.0 {
                        drag.moved = true;
                        editor.move_selection_by(dx, dy);
                    }
                }
            }
            InputEvent::PointerUp { .. } => {
                if let Some(rect) = self.marquee_rect.take() {
                    self.marquee_start = None;
                    editor.marquee_select(rect);
                } else if let Some(drag) = self.drag.take()
                    && drag.moved
                {
                    // The single history commit closing the gesture.
                    editor.commit();
                }
            }
            InputEvent::Key { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use folio_core::{Component, ComponentPatch, ShapeKind};

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    fn mv(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    fn up(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    fn editor_with_rect_at(x: f32, y: f32) -> (Editor, folio_core::Id) {
        let mut ed = Editor::new();
        let mut c = Component::shape(ShapeKind::Rect); // 120×120
        c.apply(&ComponentPatch::position(x, y));
        let id = c.id;
        ed.add_component(c);
        (ed, id)
    }

    #[test]
    fn drag_streams_transient_updates_and_commits_once() {
        let (mut ed, id) = editor_with_rect_at(0.0, 0.0);
        let mut tool = SelectTool::new();

        tool.handle(&mut ed, &down(10.0, 10.0));
        assert_eq!(ed.selected_ids(), [id]);

        // Five pointer frames, no history churn.
        for i in 1..=5 {
            tool.handle(&mut ed, &mv(10.0 + i as f32 * 8.0, 10.0));
        }
        assert_eq!(ed.component(id).unwrap().x, 40.0);

        tool.handle(&mut ed, &up(50.0, 10.0));

        // One undo reverses the whole gesture.
        ed.undo();
        assert_eq!(ed.component(id).unwrap().x, 0.0);
        // And nothing earlier than the add is left in between.
        ed.undo();
        assert!(ed.components().is_empty());
    }

    #[test]
    fn click_without_movement_commits_nothing() {
        let (mut ed, _) = editor_with_rect_at(0.0, 0.0);
        let mut tool = SelectTool::new();
        let depth = ed.history.depth();

        tool.handle(&mut ed, &down(10.0, 10.0));
        tool.handle(&mut ed, &up(10.0, 10.0));
        assert_eq!(ed.history.depth(), depth);
    }

    #[test]
    fn empty_space_drag_becomes_marquee_selection() {
        let (mut ed, id) = editor_with_rect_at(300.0, 300.0);
        let mut tool = SelectTool::new();

        tool.handle(&mut ed, &down(250.0, 250.0));
        tool.handle(&mut ed, &mv(450.0, 450.0));
        assert!(tool.marquee_rect.is_some());
        tool.handle(&mut ed, &up(450.0, 450.0));

        assert_eq!(ed.selected_ids(), [id]);
        assert!(tool.marquee_rect.is_none());
    }

    #[test]
    fn shift_click_adds_to_selection() {
        let (mut ed, first) = editor_with_rect_at(0.0, 0.0);
        let mut second = Component::shape(ShapeKind::Rect);
        second.apply(&ComponentPatch::position(400.0, 0.0));
        let second_id = second.id;
        ed.add_component(second);

        let mut tool = SelectTool::new();
        tool.handle(&mut ed, &down(10.0, 10.0));
        tool.handle(&mut ed, &up(10.0, 10.0));
        tool.handle(
            &mut ed,
            &InputEvent::PointerDown {
                x: 410.0,
                y: 10.0,
                modifiers: Modifiers::SHIFT,
            },
        );
        assert!(ed.selected_ids().contains(&first));
        assert!(ed.selected_ids().contains(&second_id));
    }

    #[test]
    fn pointer_down_lands_pending_placement() {
        let mut ed = Editor::new();
        ed.begin_placement(vec![Component::text("staged")]);
        let mut tool = SelectTool::new();

        tool.handle(&mut ed, &down(100.0, 200.0));
        assert!(!ed.has_pending_placement());
        assert_eq!(ed.components().len(), 1);
        assert_eq!(ed.components()[0].x, 100.0);
    }

    #[test]
    fn grouped_drag_moves_all_members() {
        let mut ed = Editor::new();
        let mut a = Component::shape(ShapeKind::Rect);
        a.apply(&ComponentPatch::position(0.0, 0.0));
        let mut b = Component::shape(ShapeKind::Rect);
        b.apply(&ComponentPatch::position(400.0, 400.0));
        let (a_id, b_id) = (a.id, b.id);
        ed.add_components([a, b]);
        ed.select_all();
        ed.group_selection("pair").unwrap();
        ed.clear_selection();

        let mut tool = SelectTool::new();
        // Clicking one member selects — and therefore drags — the group.
        tool.handle(&mut ed, &down(10.0, 10.0));
        tool.handle(&mut ed, &mv(30.0, 10.0));
        tool.handle(&mut ed, &up(30.0, 10.0));

        assert_eq!(ed.component(a_id).unwrap().x, 20.0);
        assert_eq!(ed.component(b_id).unwrap().x, 420.0);
    }
}
