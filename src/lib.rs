//! Overlay placement for drop-down lists, context menus and tooltips.
//!
//! Given an anchor (a screen point or a screen rectangle), the size an
//! overlay would like to have, and the viewport it has to live in, computes
//! the rectangle the overlay should occupy and which side of the anchor it
//! opens toward.
//!
//! Pure geometry — no I/O, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Integer screen points and rectangles
//! - [`placement`] — Anchor modes, direction preference, viewport clamping
//! - `svg` — Diagram of a resolved placement (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenplace::{Anchor, HorizontalDirection, Rect, VerticalDirection};
//!
//! // A menu-bar item at (40, 0), 60×20, inside a 800×600 window.
//! let item = Rect::new(40, 0, 60, 20);
//! let window = Rect::new(0, 0, 800, 600);
//!
//! let placed = Anchor::around_bounds_horizontal(item).resolve(200, 300, window);
//!
//! assert_eq!(placed.rect.x, 40);
//! assert_eq!(placed.rect.y, 20);
//! assert_eq!(placed.rect.width, 200);
//! assert_eq!(placed.horizontal, HorizontalDirection::Right);
//! assert_eq!(placed.vertical, VerticalDirection::Down);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod placement;
#[cfg(feature = "svg")]
pub mod svg;

pub use geometry::{GeometryError, Point, Rect, Size};
pub use placement::{Anchor, Corner, HorizontalDirection, Pivots, Placement, VerticalDirection};
