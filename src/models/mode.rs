//! Visual mode and layout state of the viewer.
//!
//! The viewer's behavior depends on several independent inputs (the parent's
//! `maximized` flag, the selection queue length, the viewport width). They are
//! folded into [`ViewerLayout`] so the placement and visibility rules can be
//! checked on their own.

use super::SelectionQueue;

/// Visual mode requested by the parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    /// Small floating picture-in-picture placement (default)
    #[default]
    Minimized,
    /// Full-viewport placement
    Maximized,
}

impl VisualMode {
    pub fn from_maximized(maximized: bool) -> Self {
        if maximized { Self::Maximized } else { Self::Minimized }
    }

    pub fn is_maximized(self) -> bool {
        self == Self::Maximized
    }
}

/// How many files the selection queue holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing queued
    #[default]
    Empty,
    /// One file queued (present, not active)
    Single,
    /// Several files queued (multi-select active)
    Multiple,
}

impl SelectionState {
    pub fn of(queue: &SelectionQueue) -> Self {
        Self::from_len(queue.len())
    }

    pub fn from_len(len: usize) -> Self {
        match len {
            0 => Self::Empty,
            1 => Self::Single,
            _ => Self::Multiple,
        }
    }
}

/// Where the viewer is placed on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Maximized, filling the parent
    Docked,
    /// Minimized, anchored to the bottom-right corner
    Floating,
    /// Extra-small viewport: edge-to-edge in either mode
    FullWidth,
}

impl Placement {
    /// Resolve the placement for `mode` at `viewport_width`.
    ///
    /// At or below `breakpoint` the mode is ignored.
    pub fn resolve(mode: VisualMode, viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width <= breakpoint {
            Self::FullWidth
        } else if mode.is_maximized() {
            Self::Docked
        } else {
            Self::Floating
        }
    }
}

/// Combined layout state of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerLayout {
    pub mode: VisualMode,
    pub selection: SelectionState,
    pub placement: Placement,
}

impl ViewerLayout {
    pub fn new(
        mode: VisualMode,
        selection: SelectionState,
        viewport_width: f64,
        breakpoint: f64,
    ) -> Self {
        Self {
            mode,
            selection,
            placement: Placement::resolve(mode, viewport_width, breakpoint),
        }
    }

    /// The selection panel shows when maximized or when anything is queued.
    pub fn show_selection(&self) -> bool {
        self.mode.is_maximized() || self.selection != SelectionState::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: f64 = 576.0;

    #[test]
    fn test_selection_visibility_combinations() {
        let cases = [
            (false, 0, false),
            (false, 2, true),
            (true, 0, true),
            (true, 2, true),
        ];
        for (maximized, len, expected) in cases {
            let layout = ViewerLayout::new(
                VisualMode::from_maximized(maximized),
                SelectionState::from_len(len),
                1280.0,
                BP,
            );
            assert_eq!(
                layout.show_selection(),
                expected,
                "maximized={maximized} len={len}"
            );
        }
    }

    #[test]
    fn test_single_selection_shows_panel() {
        let layout = ViewerLayout::new(VisualMode::Minimized, SelectionState::Single, 1280.0, BP);
        assert!(layout.show_selection());
    }

    #[test]
    fn test_placement_resolution() {
        assert_eq!(
            Placement::resolve(VisualMode::Maximized, 1280.0, BP),
            Placement::Docked
        );
        assert_eq!(
            Placement::resolve(VisualMode::Minimized, 1280.0, BP),
            Placement::Floating
        );
        assert_eq!(
            Placement::resolve(VisualMode::Minimized, BP, BP),
            Placement::FullWidth
        );
        assert_eq!(
            Placement::resolve(VisualMode::Maximized, 320.0, BP),
            Placement::FullWidth
        );
    }

    #[test]
    fn test_selection_state_from_len() {
        assert_eq!(SelectionState::from_len(0), SelectionState::Empty);
        assert_eq!(SelectionState::from_len(1), SelectionState::Single);
        assert_eq!(SelectionState::from_len(7), SelectionState::Multiple);
    }
}
