//! Overlay placement relative to an anchor.
//!
//! An [`Anchor`] describes what the overlay hangs off: a single point (a
//! context menu at the cursor), a rectangle it opens beside or below (a
//! menu-bar item, a combo box). [`Anchor::resolve`] picks the side to expand
//! toward and clamps the overlay to the viewport.
//!
//! Direction preference is fixed: right before left, down before up. The
//! preferred side wins whenever the overlay fits there; otherwise the side
//! with more room wins and the overlay shrinks to that room.
//!
//! # Example
//!
//! ```
//! use zenplace::{Anchor, HorizontalDirection, Point, Rect, VerticalDirection};
//!
//! // Context menu near the bottom-right corner of a 800×600 window.
//! let placed = Anchor::around_position(Point::new(750, 580))
//!     .resolve(120, 200, Rect::new(0, 0, 800, 600));
//!
//! assert_eq!(placed.horizontal, HorizontalDirection::Left);
//! assert_eq!(placed.vertical, VerticalDirection::Up);
//! assert_eq!(placed.rect, Rect::new(630, 380, 120, 200));
//! ```

use crate::geometry::{Point, Rect, saturate_i32, saturate_span};

/// Which side of the anchor the overlay extends toward horizontally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    /// Overlay's right edge sits on the left pivot.
    Left,
    /// Overlay's left edge sits on the right pivot.
    Right,
}

/// Whether the overlay opens upward or downward from the anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    Up,
    Down,
}

/// What an overlay is positioned against.
///
/// ```text
///   BoundsHorizontal              BoundsVertical
///   (opens below/above)           (opens beside)
///
///   ┌──────┐                      ┌──────┐┌─────────┐
///   │anchor│                      │anchor││ overlay │
///   ├──────┴───┐                  └──────┘│         │
///   │ overlay  │                          └─────────┘
///   └──────────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Expand from a single point in any direction.
    Position(Point),
    /// Open below or above the rectangle, left-aligned with it when
    /// expanding right and right-aligned when expanding left.
    BoundsHorizontal(Rect),
    /// Open beside the rectangle, top-aligned with it when expanding down
    /// and bottom-aligned when expanding up.
    BoundsVertical(Rect),
}

/// Edge coordinates an overlay starts from, one per direction.
///
/// Kept in `i64` since a rect's far edge can lie outside the `i32` range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pivots {
    /// Overlay's left edge when expanding right.
    pub right_start: i64,
    /// Overlay's right edge when expanding left.
    pub left_start: i64,
    /// Overlay's top edge when expanding down.
    pub bottom_start: i64,
    /// Overlay's bottom edge when expanding up.
    pub top_start: i64,
}

/// Result of [`Anchor::resolve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Where the overlay goes, already clamped to the viewport.
    pub rect: Rect,
    pub horizontal: HorizontalDirection,
    pub vertical: VerticalDirection,
}

/// Corner of a placed overlay that touches its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Anchor to a single screen point.
    pub const fn around_position(position: Point) -> Self {
        Self::Position(position)
    }

    /// Anchor to a rectangle, opening below or above it.
    ///
    /// Suits menu-bar items and combo boxes.
    pub const fn around_bounds_horizontal(bounds: Rect) -> Self {
        Self::BoundsHorizontal(bounds)
    }

    /// Anchor to a rectangle, opening to its right or left.
    ///
    /// Suits sub-menus hanging off a menu entry.
    pub const fn around_bounds_vertical(bounds: Rect) -> Self {
        Self::BoundsVertical(bounds)
    }

    /// The anchor point, for [`Anchor::Position`].
    pub const fn position(&self) -> Option<Point> {
        match *self {
            Self::Position(p) => Some(p),
            Self::BoundsHorizontal(_) | Self::BoundsVertical(_) => None,
        }
    }

    /// The anchor rectangle, for either bounds variant.
    pub const fn bounds(&self) -> Option<Rect> {
        match *self {
            Self::Position(_) => None,
            Self::BoundsHorizontal(r) | Self::BoundsVertical(r) => Some(r),
        }
    }

    /// Edge coordinates the overlay expands from in each direction.
    pub const fn pivots(&self) -> Pivots {
        match *self {
            Self::Position(p) => Pivots {
                right_start: p.x as i64,
                left_start: p.x as i64,
                bottom_start: p.y as i64,
                top_start: p.y as i64,
            },
            Self::BoundsHorizontal(r) => Pivots {
                right_start: r.x as i64,
                left_start: r.right(),
                bottom_start: r.bottom(),
                top_start: r.y as i64,
            },
            Self::BoundsVertical(r) => Pivots {
                right_start: r.right(),
                left_start: r.x as i64,
                bottom_start: r.y as i64,
                top_start: r.bottom(),
            },
        }
    }

    /// Place an overlay of the requested size inside `available`.
    ///
    /// Never fails. The returned width never exceeds `width`. The returned
    /// height is the whole space below the pivot whenever the overlay opens
    /// downward, even if `height` is smaller; when it opens upward, `height`
    /// is clamped to the space above.
    ///
    /// ```
    /// use zenplace::{Anchor, Point, Rect, VerticalDirection};
    ///
    /// let placed = Anchor::around_position(Point::new(0, 50))
    ///     .resolve(100, 10, Rect::new(0, 0, 1000, 1000));
    ///
    /// assert_eq!(placed.vertical, VerticalDirection::Down);
    /// assert_eq!(placed.rect.height, 950);
    /// ```
    pub fn resolve(&self, width: u32, height: u32, available: Rect) -> Placement {
        let pivots = self.pivots();
        let (x, width, horizontal) = place_horizontal(&pivots, width, &available);
        let (y, height, vertical) = place_vertical(&pivots, height, &available);
        Placement {
            rect: Rect {
                x,
                y,
                width,
                height,
            },
            horizontal,
            vertical,
        }
    }
}

impl Placement {
    /// Corner of the overlay that touches the anchor.
    pub const fn anchor_corner(&self) -> Corner {
        match (self.horizontal, self.vertical) {
            (HorizontalDirection::Right, VerticalDirection::Down) => Corner::TopLeft,
            (HorizontalDirection::Left, VerticalDirection::Down) => Corner::TopRight,
            (HorizontalDirection::Right, VerticalDirection::Up) => Corner::BottomLeft,
            (HorizontalDirection::Left, VerticalDirection::Up) => Corner::BottomRight,
        }
    }
}

impl From<Placement> for (Rect, HorizontalDirection, VerticalDirection) {
    fn from(p: Placement) -> Self {
        (p.rect, p.horizontal, p.vertical)
    }
}

impl Corner {
    /// Coordinates of this corner of `rect`. Right and bottom are exclusive
    /// edges, saturated to `i32`.
    pub fn point(self, rect: &Rect) -> Point {
        let right = saturate_i32(rect.right());
        let bottom = saturate_i32(rect.bottom());
        match self {
            Self::TopLeft => Point::new(rect.x, rect.y),
            Self::TopRight => Point::new(right, rect.y),
            Self::BottomLeft => Point::new(rect.x, bottom),
            Self::BottomRight => Point::new(right, bottom),
        }
    }
}

// ============================================================================
// Per-axis placement
// ============================================================================

/// Pick x, width and direction. Right wins whenever the full width fits.
fn place_horizontal(
    pivots: &Pivots,
    width: u32,
    available: &Rect,
) -> (i32, u32, HorizontalDirection) {
    let rightward = saturate_span(available.right() - pivots.right_start);
    let leftward = saturate_span(pivots.left_start - available.x as i64);

    if width <= rightward {
        return (saturate_i32(pivots.right_start), width, HorizontalDirection::Right);
    }

    if rightward >= leftward {
        #[cfg(feature = "tracing")]
        tracing::trace!(width, rightward, leftward, "overlay shrunk to fit rightward");
        (saturate_i32(pivots.right_start), rightward, HorizontalDirection::Right)
    } else {
        let w = width.min(leftward);
        #[cfg(feature = "tracing")]
        tracing::trace!(width, rightward, leftward, placed = w, "overlay flipped leftward");
        (saturate_i32(pivots.left_start - w as i64), w, HorizontalDirection::Left)
    }
}

/// Pick y, height and direction. Down wins whenever the full height fits.
///
/// Unlike the horizontal axis, opening downward always takes the whole
/// space below the pivot rather than the requested height. Whether opening
/// downward should keep the requested height instead is an open question.
fn place_vertical(
    pivots: &Pivots,
    height: u32,
    available: &Rect,
) -> (i32, u32, VerticalDirection) {
    let downward = saturate_span(available.bottom() - pivots.bottom_start);
    let upward = saturate_span(pivots.top_start - available.y as i64);

    if height <= downward {
        return (saturate_i32(pivots.bottom_start), downward, VerticalDirection::Down);
    }

    if downward >= upward {
        #[cfg(feature = "tracing")]
        tracing::trace!(height, downward, upward, "overlay shrunk to fit downward");
        return (saturate_i32(pivots.bottom_start), downward, VerticalDirection::Down);
    }

    let h = height.min(upward);
    #[cfg(feature = "tracing")]
    tracing::trace!(height, downward, upward, placed = h, "overlay flipped upward");
    (saturate_i32(pivots.top_start - h as i64), h, VerticalDirection::Up)
}
