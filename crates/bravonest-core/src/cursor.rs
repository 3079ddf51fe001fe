//! Cursor follower.
//!
//! Two overlays track the pointer: a dot pinned to the exact position and an
//! outline ring that eases toward it once per animation frame with
//! `position += (target - position) * ease`.

/// Default smoothing factor for the outline ring
pub const DEFAULT_EASE: f64 = 0.18;

/// Half the dot's size; the dot is centred on the pointer
pub const DOT_RADIUS: f64 = 6.0;

/// Half the outline ring's size
pub const OUTLINE_RADIUS: f64 = 18.0;

/// Attribute that marks an element as interactive for the cursor
pub const CURSOR_MARKER: &str = "data-cursor";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move toward `target` by `factor` of the remaining distance
    pub fn ease_toward(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Whether the element under the pointer should get the interactive style
///
/// Links and buttons always count, as does anything inside an element
/// carrying [`CURSOR_MARKER`].
pub fn is_interactive_target(tag_name: &str, inside_marked: bool) -> bool {
    inside_marked || tag_name.eq_ignore_ascii_case("a") || tag_name.eq_ignore_ascii_case("button")
}

/// CSS translations for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub dot: Point,
    pub outline: Point,
}

impl CursorFrame {
    pub fn dot_transform(&self) -> String {
        translate3d(self.dot)
    }

    pub fn outline_transform(&self) -> String {
        translate3d(self.outline)
    }
}

fn translate3d(p: Point) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", p.x, p.y)
}

/// Pointer-follow state for one cursor overlay
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    pointer: Point,
    outline: Point,
    ease: f64,
    visible: bool,
    hovering: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(DEFAULT_EASE)
    }
}

impl CursorFollower {
    /// `ease` is clamped to (0, 1]; non-finite values fall back to the default
    pub fn new(ease: f64) -> Self {
        let ease = if ease.is_finite() && ease > 0.0 {
            ease.min(1.0)
        } else {
            DEFAULT_EASE
        };
        Self {
            pointer: Point::default(),
            outline: Point::default(),
            ease,
            visible: false,
            hovering: false,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
        self.visible = true;
    }

    pub fn pointer_entered(&mut self) {
        self.visible = true;
    }

    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn outline(&self) -> Point {
        self.outline
    }

    /// Advance the outline one animation frame and return both transforms
    pub fn frame(&mut self) -> CursorFrame {
        self.outline = self.outline.ease_toward(self.pointer, self.ease);
        CursorFrame {
            dot: Point::new(self.pointer.x - DOT_RADIUS, self.pointer.y - DOT_RADIUS),
            outline: Point::new(self.outline.x - OUTLINE_RADIUS, self.outline.y - OUTLINE_RADIUS),
        }
    }
}
