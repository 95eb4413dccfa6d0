/// Horizontal travel (px) that separates a deliberate drag from a tap
pub const DRAG_CONFIRM_THRESHOLD_PX: f32 = 30.0;

/// Gesture phase of the mobile filter drawer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerPhase {
    Idle,
    Dragging {
        start_x: f32,
        current_x: f32,
        confirmed: bool,
    },
}

/// How a completed touch resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResolution {
    /// Travel past the threshold in the toggling direction
    ConfirmedDrag,
    /// Negligible movement; same as a click on the toggle
    Tap,
}

/// Open/closed flag plus the in-flight gesture, owned by one gallery
/// instance and reset at the end of every gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerState {
    pub is_open: bool,
    pub phase: DrawerPhase,
}

impl DrawerState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            phase: DrawerPhase::Idle,
        }
    }

    /// Begin a gesture: record the start coordinate, clear the
    /// confirmed-drag flag
    pub fn touch_start(&mut self, x: f32) {
        self.phase = DrawerPhase::Dragging {
            start_x: x,
            current_x: x,
            confirmed: false,
        };
    }

    /// Track finger movement
    /// The drag is confirmed once travel exceeds the threshold in the
    /// direction that would toggle the drawer: positive (rightward)
    /// closes an open drawer, negative (leftward) opens a closed one
    pub fn touch_move(&mut self, x: f32) {
        if let DrawerPhase::Dragging {
            start_x, confirmed, ..
        } = self.phase
        {
            let delta = x - start_x;
            let now_confirmed = confirmed
                || (self.is_open && delta >= DRAG_CONFIRM_THRESHOLD_PX)
                || (!self.is_open && delta <= -DRAG_CONFIRM_THRESHOLD_PX);

            self.phase = DrawerPhase::Dragging {
                start_x,
                current_x: x,
                confirmed: now_confirmed,
            };
        }
    }

    /// End the gesture and return how it resolved
    /// A confirmed drag toggles; anything shorter is a tap, which
    /// toggles too. Returns None for a touchend with no prior start.
    pub fn touch_end(&mut self) -> Option<GestureResolution> {
        let resolution = match self.phase {
            DrawerPhase::Dragging { confirmed: true, .. } => GestureResolution::ConfirmedDrag,
            DrawerPhase::Dragging { confirmed: false, .. } => GestureResolution::Tap,
            DrawerPhase::Idle => return None,
        };

        self.is_open = !self.is_open;
        self.phase = DrawerPhase::Idle;
        Some(resolution)
    }

    /// Abandon any in-flight gesture without toggling
    pub fn cancel(&mut self) {
        self.phase = DrawerPhase::Idle;
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftward_drag_opens_closed_drawer() {
        let mut drawer = DrawerState::new();
        drawer.touch_start(200.0);
        drawer.touch_move(160.0);

        assert_eq!(drawer.touch_end(), Some(GestureResolution::ConfirmedDrag));
        assert!(drawer.is_open);
    }

    #[test]
    fn test_rightward_drag_closes_open_drawer() {
        let mut drawer = DrawerState::new();
        drawer.is_open = true;

        drawer.touch_start(100.0);
        drawer.touch_move(140.0);

        assert_eq!(drawer.touch_end(), Some(GestureResolution::ConfirmedDrag));
        assert!(!drawer.is_open);
    }

    #[test]
    fn test_wrong_direction_never_confirms() {
        let mut drawer = DrawerState::new();
        // Closed drawer, rightward travel: not the opening direction
        drawer.touch_start(100.0);
        drawer.touch_move(200.0);

        assert_eq!(drawer.touch_end(), Some(GestureResolution::Tap));
    }

    #[test]
    fn test_sub_threshold_travel_is_a_tap() {
        let mut drawer = DrawerState::new();
        drawer.touch_start(100.0);
        drawer.touch_move(75.0);

        assert_eq!(drawer.touch_end(), Some(GestureResolution::Tap));
        assert!(drawer.is_open);
    }

    #[test]
    fn test_confirmation_sticks_after_backtracking() {
        let mut drawer = DrawerState::new();
        drawer.touch_start(100.0);
        drawer.touch_move(60.0);
        drawer.touch_move(95.0);

        assert_eq!(drawer.touch_end(), Some(GestureResolution::ConfirmedDrag));
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let mut drawer = DrawerState::new();
        assert_eq!(drawer.touch_end(), None);
        assert!(!drawer.is_open);
    }

    #[test]
    fn test_gesture_resets_phase() {
        let mut drawer = DrawerState::new();
        drawer.touch_start(100.0);
        drawer.touch_end();
        assert_eq!(drawer.phase, DrawerPhase::Idle);
    }

    #[test]
    fn test_cancel_keeps_open_state() {
        let mut drawer = DrawerState::new();
        drawer.touch_start(100.0);
        drawer.touch_move(50.0);
        drawer.cancel();

        assert!(!drawer.is_open);
        assert_eq!(drawer.phase, DrawerPhase::Idle);
    }
}
