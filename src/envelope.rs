//! Envelope model and pointer interaction.
//!
//! Pure state: no textures and no `egui::Context` in here, so the whole
//! state machine is unit-testable. The UI layer feeds [`PointerSample`]s in
//! and applies the returned [`Effect`] (cursor + overlay redraw request).

use egui::{CursorIcon, Pos2, pos2};

/// Half-extent of a marker's hit box, in canvas pixels. Hit testing uses the
/// Manhattan metric, so the effective hit box is the drawn diamond itself.
pub const HIT_HALF_EXTENT: f32 = 4.0;

/// One control point of the envelope polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub pos: Pos2,
    pub draggable: bool,
}

impl ControlPoint {
    pub const fn new(pos: Pos2) -> Self {
        Self {
            pos,
            draggable: true,
        }
    }

    pub const fn fixed(pos: Pos2) -> Self {
        Self {
            pos,
            draggable: false,
        }
    }

    /// Manhattan-distance hit test; fixed points never register.
    pub fn hit(&self, cursor: Pos2) -> bool {
        if !self.draggable {
            return false;
        }
        (cursor.x - self.pos.x).abs() + (cursor.y - self.pos.y).abs() <= HIT_HALF_EXTENT
    }
}

/// Tagged interaction state. A bound point index only exists in the states
/// that actually use one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Hovering(usize),
    Dragging(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Down,
    Move,
    Up,
    Leave,
}

/// One pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub primary: bool,
    pub pos: Pos2,
}

/// What the UI layer must do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub cursor: Option<CursorIcon>,
    pub redraw_overlay: bool,
}

impl Effect {
    const IGNORED: Self = Self {
        cursor: None,
        redraw_overlay: false,
    };

    const fn cursor_only(cursor: CursorIcon) -> Self {
        Self {
            cursor: Some(cursor),
            redraw_overlay: false,
        }
    }

    const fn dragged() -> Self {
        Self {
            cursor: Some(CursorIcon::Move),
            redraw_overlay: true,
        }
    }
}

/// The ordered control points plus the current drag state.
pub struct EnvelopeState {
    width: f32,
    height: f32,
    points: Vec<ControlPoint>,
    drag: DragState,
}

impl EnvelopeState {
    /// Initial envelope: fixed endpoints on the center line, three draggable
    /// interior points laid out on grid columns.
    pub fn new(width: f32, height: f32, grid_size: f32) -> Self {
        let half_y = height / 2.0;
        let top_y = half_y % grid_size;
        let points = vec![
            ControlPoint::fixed(pos2(0.0, half_y)),
            ControlPoint::new(pos2(grid_size, top_y)),
            ControlPoint::new(pos2(grid_size * 2.0, top_y + grid_size)),
            ControlPoint::new(pos2(grid_size * 8.0, top_y)),
            ControlPoint::fixed(pos2(width, half_y)),
        ];
        Self {
            width,
            height,
            points,
            drag: DragState::Idle,
        }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub const fn drag(&self) -> DragState {
        self.drag
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    fn clamp(&self, pos: Pos2) -> Pos2 {
        pos2(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }

    fn hit_test(&self, cursor: Pos2) -> Option<usize> {
        self.points.iter().position(|p| p.hit(cursor))
    }

    fn move_active(&mut self, idx: usize, cursor: Pos2) {
        let target = self.clamp(cursor);
        if let Some(point) = self.points.get_mut(idx) {
            point.pos = target;
        }
    }

    fn resolve_hover(&mut self, cursor: Pos2) -> Effect {
        match self.hit_test(cursor) {
            Some(idx) => {
                self.drag = DragState::Hovering(idx);
                Effect::cursor_only(CursorIcon::PointingHand)
            }
            None => {
                self.drag = DragState::Idle;
                Effect::cursor_only(CursorIcon::Default)
            }
        }
    }

    /// Advance the state machine by one pointer event.
    pub fn handle_pointer(&mut self, ev: PointerSample) -> Effect {
        if !ev.primary {
            return Effect::IGNORED;
        }
        match (ev.kind, self.drag) {
            (PointerKind::Enter | PointerKind::Move, DragState::Dragging(idx)) => {
                self.move_active(idx, ev.pos);
                Effect::dragged()
            }
            (PointerKind::Enter | PointerKind::Move, _) => self.resolve_hover(ev.pos),
            (PointerKind::Down, DragState::Hovering(idx) | DragState::Dragging(idx)) => {
                self.drag = DragState::Dragging(idx);
                self.move_active(idx, ev.pos);
                Effect::dragged()
            }
            (PointerKind::Down, DragState::Idle) => Effect::cursor_only(CursorIcon::Default),
            (PointerKind::Up, _) => self.resolve_hover(ev.pos),
            // Pointer capture keeps an active drag alive outside the canvas.
            (PointerKind::Leave, DragState::Dragging(_)) => Effect::IGNORED,
            (PointerKind::Leave, _) => {
                self.drag = DragState::Idle;
                Effect::cursor_only(CursorIcon::Default)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;
    const HEIGHT: f32 = 200.0;
    const GRID: f32 = HEIGHT / 2.0 * 50.0 / 127.0;

    fn state() -> EnvelopeState {
        EnvelopeState::new(WIDTH, HEIGHT, GRID)
    }

    fn sample(kind: PointerKind, pos: Pos2) -> PointerSample {
        PointerSample {
            kind,
            primary: true,
            pos,
        }
    }

    #[test]
    fn initial_layout_matches_grid_columns() {
        let st = state();
        let pts = st.points();
        assert_eq!(pts.len(), 5);
        assert!(!pts[0].draggable);
        assert!(!pts[4].draggable);
        assert!((pts[0].pos.y - HEIGHT / 2.0).abs() < f32::EPSILON);
        assert!((pts[4].pos.x - WIDTH).abs() < f32::EPSILON);
        assert!((pts[1].pos.x - GRID).abs() < f32::EPSILON);
        assert!((pts[3].pos.x - GRID * 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn manhattan_hit_is_exact_at_the_boundary() {
        let p = ControlPoint::new(pos2(100.0, 50.0));
        assert!(p.hit(pos2(102.0, 52.0))); // distance 4
        assert!(p.hit(pos2(104.0, 50.0))); // distance 4 on one axis
        assert!(!p.hit(pos2(103.0, 52.0))); // distance 5
        assert!(!p.hit(pos2(105.0, 50.0))); // distance 5
    }

    #[test]
    fn fixed_endpoints_never_hit() {
        let st = state();
        let left = st.points()[0].pos;
        let right = st.points()[4].pos;
        assert!(st.hit_test(left).is_none());
        assert!(st.hit_test(right).is_none());
    }

    #[test]
    fn hover_transitions_and_cursor() {
        let mut st = state();
        let target = st.points()[1].pos;
        let fx = st.handle_pointer(sample(PointerKind::Move, target));
        assert_eq!(st.drag(), DragState::Hovering(1));
        assert_eq!(fx.cursor, Some(CursorIcon::PointingHand));
        assert!(!fx.redraw_overlay);

        let fx = st.handle_pointer(sample(PointerKind::Move, pos2(300.0, 10.0)));
        assert_eq!(st.drag(), DragState::Idle);
        assert_eq!(fx.cursor, Some(CursorIcon::Default));
    }

    #[test]
    fn drag_updates_position_and_requests_redraw() {
        let mut st = state();
        let start = st.points()[2].pos;
        st.handle_pointer(sample(PointerKind::Move, start));
        let fx = st.handle_pointer(sample(PointerKind::Down, start));
        assert_eq!(st.drag(), DragState::Dragging(2));
        assert!(fx.redraw_overlay);

        let fx = st.handle_pointer(sample(PointerKind::Move, pos2(150.0, 80.0)));
        assert!(fx.redraw_overlay);
        assert_eq!(fx.cursor, Some(CursorIcon::Move));
        assert_eq!(st.points()[2].pos, pos2(150.0, 80.0));

        st.handle_pointer(sample(PointerKind::Up, pos2(150.0, 80.0)));
        assert!(!st.is_dragging());
        assert_eq!(st.points()[2].pos, pos2(150.0, 80.0));
    }

    #[test]
    fn drag_positions_clamp_to_canvas_bounds() {
        let mut st = state();
        let start = st.points()[1].pos;
        st.handle_pointer(sample(PointerKind::Move, start));
        st.handle_pointer(sample(PointerKind::Down, start));
        st.handle_pointer(sample(PointerKind::Move, pos2(-50.0, 512.0)));
        assert_eq!(st.points()[1].pos, pos2(0.0, HEIGHT));

        st.handle_pointer(sample(PointerKind::Move, pos2(9000.0, -3.0)));
        assert_eq!(st.points()[1].pos, pos2(WIDTH, 0.0));
    }

    #[test]
    fn release_position_sticks_after_clamping() {
        let mut st = state();
        let start = st.points()[3].pos;
        st.handle_pointer(sample(PointerKind::Move, start));
        st.handle_pointer(sample(PointerKind::Down, start));
        st.handle_pointer(sample(PointerKind::Move, pos2(500.0, 100.0)));
        st.handle_pointer(sample(PointerKind::Up, pos2(500.0, 100.0)));
        assert_eq!(st.points()[3].pos, pos2(WIDTH, 100.0));
        assert_ne!(st.points()[3].pos, start);
    }

    #[test]
    fn leave_keeps_an_active_drag_alive() {
        let mut st = state();
        let start = st.points()[1].pos;
        st.handle_pointer(sample(PointerKind::Move, start));
        st.handle_pointer(sample(PointerKind::Down, start));
        let fx = st.handle_pointer(sample(PointerKind::Leave, pos2(-10.0, -10.0)));
        assert_eq!(fx, Effect::IGNORED);
        assert_eq!(st.drag(), DragState::Dragging(1));

        // Captured moves keep updating the point.
        st.handle_pointer(sample(PointerKind::Move, pos2(-10.0, 60.0)));
        assert_eq!(st.points()[1].pos, pos2(0.0, 60.0));
    }

    #[test]
    fn leave_without_drag_resets_to_idle() {
        let mut st = state();
        let target = st.points()[1].pos;
        st.handle_pointer(sample(PointerKind::Move, target));
        assert_eq!(st.drag(), DragState::Hovering(1));
        let fx = st.handle_pointer(sample(PointerKind::Leave, pos2(-1.0, -1.0)));
        assert_eq!(st.drag(), DragState::Idle);
        assert_eq!(fx.cursor, Some(CursorIcon::Default));
    }

    #[test]
    fn non_primary_events_change_nothing() {
        let mut st = state();
        let target = st.points()[1].pos;
        let before = target;
        for kind in [
            PointerKind::Enter,
            PointerKind::Move,
            PointerKind::Down,
            PointerKind::Up,
            PointerKind::Leave,
        ] {
            let fx = st.handle_pointer(PointerSample {
                kind,
                primary: false,
                pos: target,
            });
            assert_eq!(fx, Effect::IGNORED);
        }
        assert_eq!(st.drag(), DragState::Idle);
        assert_eq!(st.points()[1].pos, before);
    }

    #[test]
    fn down_away_from_points_starts_no_drag() {
        let mut st = state();
        st.handle_pointer(sample(PointerKind::Move, pos2(250.0, 20.0)));
        st.handle_pointer(sample(PointerKind::Down, pos2(250.0, 20.0)));
        assert_eq!(st.drag(), DragState::Idle);
        // A later move over a point is only a hover, not a drag.
        let target = st.points()[1].pos;
        st.handle_pointer(sample(PointerKind::Move, target));
        assert_eq!(st.drag(), DragState::Hovering(1));
    }
}
