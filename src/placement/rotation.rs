//! Placement rotation table
//!
//! When a placement overflows the viewport, the table names the placement to
//! try next. Three kinds of entries appear:
//!
//! - Overflow toward the placement's own side flips to the opposite side and
//!   keeps the alignment (`top-start` overflowing the top becomes
//!   `bottom-start`). The centered `bottom` and `left` placements instead
//!   move to the other axis (`bottom` -> `right`, `left` -> `top`), so
//!   `top`, `bottom`, `right`, `left` form one cycle. Without that, a
//!   `top` <-> `bottom` flip would spend all four attempts on two
//!   placements when the anchor is taller than the room on either side.
//! - Overflow on the cross axis re-aligns so the floating element grows away
//!   from the edge it crossed (`top` overflowing the right becomes `top-end`).
//! - Everything else falls back to [`default_successor`], the opposite side
//!   centered.

use super::types::{OverflowDirection, Placement};

use Placement::*;

/// Successor placements, indexed by `[placement][overflow direction]`
///
/// Rows follow [`Placement::ALL`]; columns follow [`OverflowDirection::ALL`]
/// (top, right, bottom, left).
#[rustfmt::skip]
pub const ROTATION_TABLE: [[Placement; 4]; 12] = [
    // overflow: top, right, bottom, left
    [Bottom,       TopEnd,    Bottom,   TopStart],    // top
    [BottomStart,  TopEnd,    Bottom,   Top],         // top-start
    [BottomEnd,    Top,       Bottom,   TopStart],    // top-end
    [Top,          BottomEnd, Right,    BottomStart], // bottom
    [Top,          BottomEnd, TopStart, Bottom],      // bottom-start
    [Top,          Bottom,    TopEnd,   BottomStart], // bottom-end
    [LeftStart,    Right,     LeftEnd,  Top],         // left
    [Left,         Right,     LeftEnd,  RightStart],  // left-start
    [LeftStart,    Right,     Left,     RightEnd],    // left-end
    [RightStart,   Left,      RightEnd, Left],        // right
    [Right,        LeftStart, RightEnd, Left],        // right-start
    [RightStart,   LeftEnd,   Right,    Left],        // right-end
];

/// Placement to try after `current` overflowed toward `overflow`
pub fn next_placement(current: Placement, overflow: OverflowDirection) -> Placement {
    ROTATION_TABLE[current.index()][overflow.index()]
}

/// Fallback successor: the opposite side, centered
pub fn default_successor(current: Placement) -> Placement {
    Placement::from_parts(current.side().opposite(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::types::Side;

    /// Whether `overflow` points at the side the placement is attached to
    fn overflows_own_side(placement: Placement, overflow: OverflowDirection) -> bool {
        matches!(
            (placement.side(), overflow),
            (Side::Top, OverflowDirection::Top)
                | (Side::Bottom, OverflowDirection::Bottom)
                | (Side::Left, OverflowDirection::Left)
                | (Side::Right, OverflowDirection::Right)
        )
    }

    #[test]
    fn test_own_side_overflow_flips_and_keeps_alignment() {
        for placement in Placement::ALL {
            if matches!(placement, Bottom | Left) {
                continue;
            }
            for dir in OverflowDirection::ALL {
                if !overflows_own_side(placement, dir) {
                    continue;
                }
                let next = next_placement(placement, dir);
                assert_eq!(next.side(), placement.side().opposite(), "{placement} / {dir}");
                assert_eq!(next.alignment(), placement.alignment(), "{placement} / {dir}");
            }
        }
    }

    #[test]
    fn test_centered_own_side_overflow_cycles_all_sides() {
        let dir_for = |p: Placement| match p.side() {
            Side::Top => OverflowDirection::Top,
            Side::Bottom => OverflowDirection::Bottom,
            Side::Left => OverflowDirection::Left,
            Side::Right => OverflowDirection::Right,
        };
        for start in [Top, Bottom, Left, Right] {
            let mut seen = vec![start];
            let mut current = start;
            for _ in 0..3 {
                current = next_placement(current, dir_for(current));
                assert!(!seen.contains(&current), "{start} revisits {current}");
                seen.push(current);
            }
        }
        assert_eq!(next_placement(Top, OverflowDirection::Top), Bottom);
        assert_eq!(next_placement(Bottom, OverflowDirection::Bottom), Right);
        assert_eq!(next_placement(Right, OverflowDirection::Right), Left);
        assert_eq!(next_placement(Left, OverflowDirection::Left), Top);
    }

    #[test]
    fn test_cross_axis_overflow_keeps_side() {
        let cross = [
            (Top, OverflowDirection::Right, TopEnd),
            (Top, OverflowDirection::Left, TopStart),
            (BottomStart, OverflowDirection::Right, BottomEnd),
            (BottomEnd, OverflowDirection::Left, BottomStart),
            (Left, OverflowDirection::Top, LeftStart),
            (Left, OverflowDirection::Bottom, LeftEnd),
            (RightStart, OverflowDirection::Bottom, RightEnd),
            (RightEnd, OverflowDirection::Top, RightStart),
        ];
        for (current, dir, expected) in cross {
            assert_eq!(next_placement(current, dir), expected);
        }
    }

    #[test]
    fn test_realign_toward_center_when_already_aligned_away() {
        // `top-start` already grows rightward; crossing the left edge falls back to centered
        assert_eq!(next_placement(TopStart, OverflowDirection::Left), Top);
        assert_eq!(next_placement(TopEnd, OverflowDirection::Right), Top);
        assert_eq!(next_placement(LeftStart, OverflowDirection::Top), Left);
        assert_eq!(next_placement(RightEnd, OverflowDirection::Bottom), Right);
    }

    #[test]
    fn test_remaining_entries_use_default() {
        // Overflow on the side facing away from the anchor's own side
        for placement in Placement::ALL {
            let away = match placement.side() {
                Side::Top => OverflowDirection::Bottom,
                Side::Bottom => OverflowDirection::Top,
                Side::Left => OverflowDirection::Right,
                Side::Right => OverflowDirection::Left,
            };
            assert_eq!(
                next_placement(placement, away),
                default_successor(placement),
                "{placement} / {away}"
            );
        }
    }

    #[test]
    fn test_default_successor_is_centered() {
        assert_eq!(default_successor(TopEnd), Bottom);
        assert_eq!(default_successor(RightStart), Left);
        assert!(Placement::ALL
            .iter()
            .all(|p| default_successor(*p).alignment().is_none()));
    }

    #[test]
    fn test_never_maps_to_itself() {
        for placement in Placement::ALL {
            for dir in OverflowDirection::ALL {
                assert_ne!(next_placement(placement, dir), placement, "{placement} / {dir}");
            }
        }
    }
}
