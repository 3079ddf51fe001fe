//! 3-D card tilt.
//!
//! Pure mapping from a pointer position and an element's bounding box to a
//! CSS transform. The pointer is normalised to `[0, 1]` across the box, so
//! each rotation stays within half of the configured maximum on either side.

use crate::cursor::Point;

pub const DEFAULT_MAX_TILT_DEG: f64 = 12.0;
pub const DEFAULT_SCALE: f64 = 1.03;

/// Perspective distance shared by every tilt transform
pub const PERSPECTIVE_PX: f64 = 900.0;

/// Transition while tracking the pointer
pub const TRACKING_TRANSITION: &str = "transform 120ms ease-out";

/// Slower transition back to rest after the pointer leaves
pub const SETTLE_TRANSITION: &str = "transform 300ms cubic-bezier(.2,.9,.3,1)";

/// Element bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltOptions {
    /// Full rotation range in degrees
    pub max_tilt: f64,
    /// Scale applied while tilted
    pub scale: f64,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            max_tilt: DEFAULT_MAX_TILT_DEG,
            scale: DEFAULT_SCALE,
        }
    }
}

/// A perspective rotation plus uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl TiltTransform {
    /// Zero rotation at unit scale
    pub const NEUTRAL: TiltTransform = TiltTransform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    pub fn css(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Transform plus the transition used to reach it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltStyle {
    pub transform: TiltTransform,
    pub transition: &'static str,
}

impl TiltStyle {
    /// Inline `style` attribute value
    pub fn to_style(&self) -> String {
        format!(
            "transform: {}; transition: {};",
            self.transform.css(),
            self.transition
        )
    }
}

/// Rotation for a pointer over `rect`.
///
/// Vertical offset rotates around X (inverted so the near edge dips),
/// horizontal offset around Y. Degenerate boxes yield the neutral transform.
pub fn tilt_for(pointer: Point, rect: Rect, options: TiltOptions) -> TiltTransform {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return TiltTransform::NEUTRAL;
    }
    let px = ((pointer.x - rect.left) / rect.width).clamp(0.0, 1.0);
    let py = ((pointer.y - rect.top) / rect.height).clamp(0.0, 1.0);

    TiltTransform {
        rotate_x: (py - 0.5) * options.max_tilt * -1.0,
        rotate_y: (px - 0.5) * options.max_tilt,
        scale: options.scale,
    }
}

/// Style while the pointer moves over (or enters) the element
pub fn tracking_style(pointer: Point, rect: Rect, options: TiltOptions) -> TiltStyle {
    TiltStyle {
        transform: tilt_for(pointer, rect, options),
        transition: TRACKING_TRANSITION,
    }
}

/// Style after the pointer leaves
pub fn settle_style() -> TiltStyle {
    TiltStyle {
        transform: TiltTransform::NEUTRAL,
        transition: SETTLE_TRANSITION,
    }
}
