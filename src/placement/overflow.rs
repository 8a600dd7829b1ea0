//! Viewport overflow detection

use super::types::{OverflowDirection, Position, Rect, Viewport};

/// Find the viewport edge a floating element at `position` would cross
///
/// Edges are tested top, right, bottom, left and the first hit is reported,
/// so a box spilling over several edges always reports the vertical one
/// before the horizontal one on the same corner.
pub fn check_overflow(
    position: &Position,
    floating: &Rect,
    viewport: &Viewport,
) -> Option<OverflowDirection> {
    if position.top < 0.0 {
        Some(OverflowDirection::Top)
    } else if position.left + floating.width > viewport.width {
        Some(OverflowDirection::Right)
    } else if position.top + floating.height > viewport.height {
        Some(OverflowDirection::Bottom)
    } else if position.left < 0.0 {
        Some(OverflowDirection::Left)
    } else {
        None
    }
}
