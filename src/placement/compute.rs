//! Geometry of a single placement
//!
//! Computes where the floating element's top-left corner goes for one
//! placement, with no regard for the viewport.

use super::types::{Alignment, Placement, Position, Rect, Side};

/// Compute the floating element's position for `placement`
///
/// The main axis puts the floating element `gap` pixels off the anchor's
/// side; the cross axis centers it or lines up the leading/trailing edges.
pub fn compute_position(anchor: &Rect, floating: &Rect, placement: Placement, gap: f64) -> Position {
    let side = placement.side();
    let alignment = placement.alignment();

    match side {
        Side::Top | Side::Bottom => {
            let top = if side == Side::Top {
                anchor.top - floating.height - gap
            } else {
                anchor.bottom + gap
            };
            let left = match alignment {
                None => anchor.center_x() - floating.width / 2.0,
                Some(Alignment::Start) => anchor.left,
                Some(Alignment::End) => anchor.right - floating.width,
            };
            Position::new(top, left)
        }
        Side::Left | Side::Right => {
            let left = if side == Side::Left {
                anchor.left - floating.width - gap
            } else {
                anchor.right + gap
            };
            let top = match alignment {
                None => anchor.center_y() - floating.height / 2.0,
                Some(Alignment::Start) => anchor.top,
                Some(Alignment::End) => anchor.bottom - floating.height,
            };
            Position::new(top, left)
        }
    }
}
