use crate::core::data::pixel_point::PixelPoint;
use crate::core::navigation::events::ScrollDirection;

/// The kind of gesture a non-idle [`NavigationState`] belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GestureKind {
    Pan,
    Select,
    ScrollZoomIn,
    ScrollZoomOut,
}

impl GestureKind {
    #[must_use]
    pub fn from_scroll(direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::Up => Self::ScrollZoomIn,
            ScrollDirection::Down => Self::ScrollZoomOut,
        }
    }
}

/// At most one gesture is active. Drag gestures carry the grid position
/// (already y-flipped) where their button went down.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum NavigationState {
    #[default]
    Idle,
    Panning {
        anchor: PixelPoint,
    },
    Selecting {
        anchor: PixelPoint,
    },
    ScrollZoomingIn,
    ScrollZoomingOut,
}

impl NavigationState {
    #[must_use]
    pub fn begin(kind: GestureKind, anchor: PixelPoint) -> Self {
        match kind {
            GestureKind::Pan => Self::Panning { anchor },
            GestureKind::Select => Self::Selecting { anchor },
            GestureKind::ScrollZoomIn => Self::ScrollZoomingIn,
            GestureKind::ScrollZoomOut => Self::ScrollZoomingOut,
        }
    }

    #[must_use]
    pub fn gesture(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Panning { .. } => Some(GestureKind::Pan),
            Self::Selecting { .. } => Some(GestureKind::Select),
            Self::ScrollZoomingIn => Some(GestureKind::ScrollZoomIn),
            Self::ScrollZoomingOut => Some(GestureKind::ScrollZoomOut),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Option<PixelPoint> {
        match self {
            Self::Panning { anchor } | Self::Selecting { anchor } => Some(*anchor),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// An event for `kind` is accepted while idle or while `kind` itself is
    /// in progress.
    #[must_use]
    pub fn admits(&self, kind: GestureKind) -> bool {
        self.gesture().is_none_or(|active| active == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [GestureKind; 4] = [
        GestureKind::Pan,
        GestureKind::Select,
        GestureKind::ScrollZoomIn,
        GestureKind::ScrollZoomOut,
    ];

    #[test]
    fn idle_admits_every_gesture() {
        let state = NavigationState::Idle;

        for kind in ALL_KINDS {
            assert!(state.admits(kind));
        }
    }

    #[test]
    fn active_gesture_admits_only_itself() {
        for active in ALL_KINDS {
            let state = NavigationState::begin(active, PixelPoint::new(1.0, 2.0));

            for kind in ALL_KINDS {
                assert_eq!(state.admits(kind), kind == active, "{active:?} vs {kind:?}");
            }
        }
    }

    #[test]
    fn drag_gestures_keep_their_anchor() {
        let anchor = PixelPoint::new(3.0, 4.0);

        assert_eq!(
            NavigationState::begin(GestureKind::Pan, anchor).anchor(),
            Some(anchor)
        );
        assert_eq!(
            NavigationState::begin(GestureKind::Select, anchor).anchor(),
            Some(anchor)
        );
        assert_eq!(
            NavigationState::begin(GestureKind::ScrollZoomIn, anchor).anchor(),
            None
        );
        assert_eq!(NavigationState::Idle.anchor(), None);
    }

    #[test]
    fn scroll_direction_picks_zoom_kind() {
        assert_eq!(
            GestureKind::from_scroll(ScrollDirection::Up),
            GestureKind::ScrollZoomIn
        );
        assert_eq!(
            GestureKind::from_scroll(ScrollDirection::Down),
            GestureKind::ScrollZoomOut
        );
    }

    #[test]
    fn default_state_is_idle() {
        assert!(NavigationState::default().is_idle());
    }
}
