//! Viewer geometry derivation.
//!
//! Geometry is a pure function of the placement, the orientation hint and the
//! floating resolution. It is never stored; components recompute it and
//! render it as inline CSS.

use std::fmt::Write;

use crate::config::{
    DEFAULT_FLOATING, FLOATING_OFFSET_PX, FLOATING_RADIUS_PX, FLOATING_SHADOW, HAIRLINE_PX,
    MIN_FLOATING_WIDTH_PX,
};
use crate::core::registry::{RendererDescriptor, Resolution};
use crate::models::Placement;

/// CSS length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Length {
    #[default]
    Auto,
    Px(f64),
    Percent(f64),
}

impl Length {
    fn css(self) -> Option<String> {
        match self {
            Self::Auto => None,
            Self::Px(px) => Some(format!("{}px", px)),
            Self::Percent(pct) => Some(format!("{}%", pct)),
        }
    }
}

/// CSS positioning scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

/// Geometry of one box (root container or scrollable frame).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxStyle {
    pub flex: Option<u8>,
    pub position: Position,
    pub width: Length,
    pub height: Length,
    pub max_width: Length,
    pub max_height: Length,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub border_radius: f64,
    pub border_width: f64,
    pub shadow: Option<&'static str>,
    pub clip: bool,
}

impl BoxStyle {
    /// Inline CSS declarations for this box.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(flex) = self.flex {
            let _ = write!(css, "flex: {};", flex);
        }
        if self.position == Position::Absolute {
            css.push_str("position: absolute;");
        }
        for (name, length) in [
            ("width", self.width),
            ("height", self.height),
            ("max-width", self.max_width),
            ("max-height", self.max_height),
        ] {
            if let Some(value) = length.css() {
                let _ = write!(css, "{}: {};", name, value);
            }
        }
        for (name, offset) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if let Some(px) = offset {
                let _ = write!(css, "{}: {}px;", name, px);
            }
        }
        if self.border_radius > 0.0 {
            let _ = write!(css, "border-radius: {}px;", self.border_radius);
        }
        if self.border_width > 0.0 {
            let _ = write!(css, "border-width: {}px; border-style: solid;", self.border_width);
        }
        if let Some(shadow) = self.shadow {
            let _ = write!(css, "box-shadow: {};", shadow);
        }
        if self.clip {
            css.push_str("overflow: hidden;");
        }
        css
    }
}

/// Derived geometry of the whole viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerGeometry {
    pub root: BoxStyle,
    pub frame: BoxStyle,
}

impl ViewerGeometry {
    /// Derive geometry for `placement`.
    ///
    /// `vertical` raises the root's flex weight from 2 to 3. `floating` is
    /// only used by [`Placement::Floating`].
    pub fn derive(placement: Placement, vertical: bool, floating: Resolution) -> Self {
        let flex = Some(if vertical { 3 } else { 2 });

        match placement {
            Placement::Docked => Self {
                root: BoxStyle {
                    flex,
                    max_width: Length::Percent(100.0),
                    max_height: Length::Percent(100.0),
                    ..BoxStyle::default()
                },
                frame: BoxStyle::default(),
            },
            Placement::Floating => Self {
                root: BoxStyle {
                    flex,
                    position: Position::Absolute,
                    width: Length::Px(floating.width),
                    right: Some(FLOATING_OFFSET_PX),
                    bottom: Some(FLOATING_OFFSET_PX),
                    border_radius: FLOATING_RADIUS_PX,
                    border_width: HAIRLINE_PX,
                    shadow: Some(FLOATING_SHADOW),
                    clip: true,
                    ..BoxStyle::default()
                },
                frame: BoxStyle {
                    width: Length::Px(floating.width),
                    height: Length::Px(floating.height),
                    ..BoxStyle::default()
                },
            },
            Placement::FullWidth => Self {
                root: BoxStyle {
                    flex,
                    position: Position::Absolute,
                    width: Length::Percent(100.0),
                    max_height: Length::Percent(100.0),
                    left: Some(0.0),
                    right: Some(0.0),
                    bottom: Some(0.0),
                    clip: true,
                    ..BoxStyle::default()
                },
                frame: BoxStyle {
                    width: Length::Percent(100.0),
                    ..BoxStyle::default()
                },
            },
        }
    }
}

/// Floating size for a renderer at `viewport_width`.
///
/// Uses the renderer's preferred size (or the default) and scales it down,
/// keeping the aspect ratio, so the floating viewer plus both corner offsets
/// fits the viewport.
pub fn floating_resolution(renderer: Option<&RendererDescriptor>, viewport_width: f64) -> Resolution {
    fit_floating(renderer.and_then(|r| r.floating), viewport_width)
}

/// Fit a preferred floating size (or the default) to `viewport_width`.
pub fn fit_floating(preferred: Option<Resolution>, viewport_width: f64) -> Resolution {
    let preferred =
        preferred.unwrap_or(Resolution::new(DEFAULT_FLOATING.0, DEFAULT_FLOATING.1));

    let available = (viewport_width - 2.0 * FLOATING_OFFSET_PX).max(MIN_FLOATING_WIDTH_PX);
    if !available.is_finite() || preferred.width <= available {
        return preferred;
    }

    let scale = available / preferred.width;
    Resolution::new(available, (preferred.height * scale).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BREAKPOINT_XS_PX;
    use crate::core::registry::RendererKind;
    use crate::models::VisualMode;

    const FLOAT: Resolution = Resolution::new(360.0, 203.0);

    #[test]
    fn test_docked_geometry() {
        let g = ViewerGeometry::derive(Placement::Docked, false, FLOAT);
        assert_eq!(g.root.flex, Some(2));
        assert_eq!(g.root.max_width, Length::Percent(100.0));
        assert_eq!(g.root.max_height, Length::Percent(100.0));
        assert_eq!(g.root.shadow, None);
        assert_eq!(g.frame, BoxStyle::default());
    }

    #[test]
    fn test_vertical_raises_flex() {
        let g = ViewerGeometry::derive(Placement::Docked, true, FLOAT);
        assert_eq!(g.root.flex, Some(3));
    }

    #[test]
    fn test_floating_geometry() {
        let g = ViewerGeometry::derive(Placement::Floating, false, FLOAT);
        assert_eq!(g.root.position, Position::Absolute);
        assert_eq!(g.root.width, Length::Px(360.0));
        assert_eq!(g.root.right, Some(FLOATING_OFFSET_PX));
        assert_eq!(g.root.bottom, Some(FLOATING_OFFSET_PX));
        assert!(g.root.shadow.is_some());
        assert!(g.root.border_radius > 0.0);
        assert_eq!(g.frame.width, Length::Px(360.0));
        assert_eq!(g.frame.height, Length::Px(203.0));
    }

    #[test]
    fn test_breakpoint_override_is_mode_independent() {
        for width in [320.0, BREAKPOINT_XS_PX] {
            for vertical in [false, true] {
                let geometry = |mode| {
                    let placement = Placement::resolve(mode, width, BREAKPOINT_XS_PX);
                    ViewerGeometry::derive(placement, vertical, FLOAT)
                };
                let minimized = geometry(VisualMode::Minimized);
                let maximized = geometry(VisualMode::Maximized);
                assert_eq!(minimized, maximized);
                assert_eq!(minimized.root.to_css(), maximized.root.to_css());
                assert_eq!(minimized.root.width, Length::Percent(100.0));
                assert_eq!(minimized.root.left, Some(0.0));
                assert_eq!(minimized.root.bottom, Some(0.0));
                assert_eq!(minimized.root.shadow, None);
                assert_eq!(minimized.root.border_radius, 0.0);
                assert_eq!(minimized.frame.width, Length::Percent(100.0));
            }
        }
    }

    #[test]
    fn test_to_css() {
        let g = ViewerGeometry::derive(Placement::Floating, false, FLOAT);
        let css = g.root.to_css();
        assert!(css.starts_with("flex: 2;position: absolute;width: 360px;"));
        assert!(css.contains("right: 20px;bottom: 20px;"));
        assert!(css.contains("box-shadow: rgba(0, 0, 0, 0.2) 0px 2px 2px 1px;"));
        assert!(css.ends_with("overflow: hidden;"));
        assert_eq!(g.frame.to_css(), "width: 360px;height: 203px;");
        assert_eq!(BoxStyle::default().to_css(), "");
    }

    #[test]
    fn test_floating_resolution_prefers_renderer() {
        let audio = RendererDescriptor {
            kind: RendererKind::Audio,
            label: "Audio".into(),
            floating: Some(Resolution::new(360.0, 120.0)),
            transport: true,
        };
        assert_eq!(
            floating_resolution(Some(&audio), 1280.0),
            Resolution::new(360.0, 120.0)
        );
        assert_eq!(floating_resolution(None, 1280.0), FLOAT);
    }

    #[test]
    fn test_floating_resolution_fits_viewport() {
        let fitted = floating_resolution(None, 300.0);
        assert_eq!(fitted.width, 260.0);
        assert_eq!(fitted.height, (203.0_f64 * 260.0 / 360.0).round());

        let tiny = floating_resolution(None, 100.0);
        assert_eq!(tiny.width, MIN_FLOATING_WIDTH_PX);

        // Unknown viewport (native builds report infinity)
        assert_eq!(floating_resolution(None, f64::INFINITY), FLOAT);
    }
}
