//! Integer screen geometry.
//!
//! Origins are signed (overlays and anchors can sit left of or above the
//! viewport origin), extents are unsigned. Edge coordinates are computed in
//! `i64` so `x + width` never overflows.

use core::fmt;

use num_traits::{Float, ToPrimitive};

/// A point in screen coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round fractional coordinates (as reported by most windowing toolkits)
    /// to the nearest pixel.
    ///
    /// Values beyond the `i32` range saturate; NaN maps to 0.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: round_coord(x),
            y: round_coord(y),
        }
    }
}

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in screen coordinates.
///
/// Used for anchors, viewports and placement results alike.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect from its top-left corner and size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rect from its four edges.
    ///
    /// Fails when `right < left` or `bottom < top`. Extents wider than
    /// `u32::MAX` cannot occur since both edges are `i32`.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, GeometryError> {
        if right < left || bottom < top {
            return Err(GeometryError::InvertedEdges);
        }
        Ok(Self {
            x: left,
            y: top,
            width: (right as i64 - left as i64) as u32,
            height: (bottom as i64 - top as i64) as u32,
        })
    }

    /// Round fractional coordinates to whole pixels.
    ///
    /// Origins saturate at the `i32` range, negative or NaN extents become 0.
    pub fn from_f32(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: round_coord(x),
            y: round_coord(y),
            width: round_extent(width),
            height: round_extent(height),
        }
    }

    /// Exclusive right edge (`x + width`).
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge (`y + height`).
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether either extent is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` lies inside the rect. Right and bottom edges are exclusive.
    pub fn contains_point(&self, p: Point) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        px >= self.x as i64 && px < self.right() && py >= self.y as i64 && py < self.bottom()
    }

    /// Whether `other` lies entirely within this rect, touching edges allowed.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Geometry construction error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Right edge is left of the left edge, or bottom is above top.
    InvertedEdges,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedEdges => f.write_str("rectangle edges are inverted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}

/// Saturate an `i64` coordinate into `i32`.
pub(crate) fn saturate_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Saturate a non-negative `i64` span into `u32`. Negative spans become 0.
pub(crate) fn saturate_span(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

fn round_coord(v: f32) -> i32 {
    if v.is_nan() {
        return 0;
    }
    Float::round(v)
        .to_i32()
        .unwrap_or(if v > 0.0 { i32::MAX } else { i32::MIN })
}

fn round_extent(v: f32) -> u32 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    Float::round(v).to_u32().unwrap_or(u32::MAX)
}
