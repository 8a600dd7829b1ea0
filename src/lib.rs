//! Floating Placement - viewport-aware positioning for tooltips and popovers
//!
//! This library computes where a floating element sits next to its anchor,
//! flipping and re-aligning through a fixed rotation table when the requested
//! placement would overflow the viewport.
//!
//! # Example
//!
//! ```rust
//! use floating_placement::{find_position, Placement, Position, Rect, Viewport};
//!
//! let anchor = Rect::new(350.0, 290.0, 100.0, 20.0);
//! let tooltip = Rect::sized(50.0, 30.0);
//! let viewport = Viewport::new(800.0, 600.0);
//!
//! let pos = find_position(&anchor, &tooltip, Placement::RightStart, &viewport);
//! assert_eq!(pos, Some(Position::new(290.0, 454.0)));
//! ```

pub mod error;
pub mod placement;
pub mod request;

pub use error::PlacementError;
pub use placement::{
    find_position, find_position_str, find_position_with_config, resolve, Alignment, Attempt,
    OverflowDirection, Placement, PlacementConfig, Position, Rect, Resolution, Side, Viewport,
};
pub use request::{Evaluation, RequestError, RequestFile};
