//! Resolution loop
//!
//! Tries the requested placement, and on overflow walks the rotation table
//! for at most [`MAX_ATTEMPTS`] candidates.

use crate::error::PlacementError;

use super::compute::compute_position;
use super::config::PlacementConfig;
use super::overflow::check_overflow;
use super::rotation::next_placement;
use super::types::{OverflowDirection, Placement, Position, Rect, Viewport};

/// Total candidate placements tried per resolution (initial + 3 retries)
pub const MAX_ATTEMPTS: usize = 4;

/// One candidate placement evaluated during resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attempt {
    pub placement: Placement,
    pub position: Position,
    /// Edge the candidate crossed; `None` if it fit or was not checked
    pub overflow: Option<OverflowDirection>,
}

/// Outcome of a resolution, with every candidate that was tried
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Placement that was asked for
    pub requested: Placement,
    /// Candidates in the order they were evaluated
    pub attempts: Vec<Attempt>,
    /// Placement whose position was accepted
    pub placement: Option<Placement>,
    /// Accepted position; `None` when every candidate overflowed
    pub position: Option<Position>,
}

impl Resolution {
    /// Whether a position was found
    pub fn is_found(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the requested placement had to be swapped for another
    pub fn is_rotated(&self) -> bool {
        self.placement.is_some_and(|p| p != self.requested)
    }
}

/// Resolve a placement and keep the full attempt trace
pub fn resolve(
    anchor: &Rect,
    floating: &Rect,
    placement: Placement,
    viewport: &Viewport,
    config: &PlacementConfig,
) -> Resolution {
    let mut attempts = Vec::with_capacity(MAX_ATTEMPTS);

    if config.skip_overflow_check {
        let position = compute_position(anchor, floating, placement, config.gap);
        log::trace!("{placement}: raw position {position:?} (overflow check skipped)");
        attempts.push(Attempt {
            placement,
            position,
            overflow: None,
        });
        return Resolution {
            requested: placement,
            attempts,
            placement: Some(placement),
            position: Some(position),
        };
    }

    let mut current = placement;
    for attempt in 0..MAX_ATTEMPTS {
        let position = compute_position(anchor, floating, current, config.gap);
        let overflow = check_overflow(&position, floating, viewport);
        log::trace!("attempt {attempt}: {current} -> {position:?}");
        attempts.push(Attempt {
            placement: current,
            position,
            overflow,
        });

        match overflow {
            None => {
                log::debug!("{placement} resolved as {current} after {} attempt(s)", attempt + 1);
                return Resolution {
                    requested: placement,
                    attempts,
                    placement: Some(current),
                    position: Some(position),
                };
            }
            Some(direction) => {
                let next = next_placement(current, direction);
                log::debug!("{current} overflows {direction}, trying {next}");
                current = next;
            }
        }
    }

    log::debug!("{placement}: no placement fits after {MAX_ATTEMPTS} attempts");
    Resolution {
        requested: placement,
        attempts,
        placement: None,
        position: None,
    }
}

/// Find the floating element's position with default configuration
///
/// Returns `None` when no candidate fits the viewport; the caller should
/// keep the previous position or hide the floating element.
///
/// # Example
///
/// ```rust
/// use floating_placement::{find_position, Placement, Position, Rect, Viewport};
///
/// let anchor = Rect::new(10.0, 10.0, 100.0, 20.0);
/// let floating = Rect::sized(50.0, 30.0);
/// let viewport = Viewport::new(800.0, 600.0);
///
/// // No room above the anchor, so the tooltip flips below it
/// let pos = find_position(&anchor, &floating, Placement::Top, &viewport);
/// assert_eq!(pos, Some(Position::new(34.0, 35.0)));
/// ```
pub fn find_position(
    anchor: &Rect,
    floating: &Rect,
    placement: Placement,
    viewport: &Viewport,
) -> Option<Position> {
    find_position_with_config(anchor, floating, placement, viewport, &PlacementConfig::default())
}

/// Find the floating element's position with custom configuration
pub fn find_position_with_config(
    anchor: &Rect,
    floating: &Rect,
    placement: Placement,
    viewport: &Viewport,
    config: &PlacementConfig,
) -> Option<Position> {
    resolve(anchor, floating, placement, viewport, config).position
}

/// Find the floating element's position for a placement given by name
///
/// Fails with [`PlacementError::InvalidPlacement`] if `placement` is not one
/// of the twelve kebab-case names.
pub fn find_position_str(
    anchor: &Rect,
    floating: &Rect,
    placement: &str,
    viewport: &Viewport,
    config: &PlacementConfig,
) -> Result<Option<Position>, PlacementError> {
    let placement: Placement = placement.parse()?;
    Ok(find_position_with_config(
        anchor, floating, placement, viewport, config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_no_overflow_returns_first_attempt() {
        let anchor = Rect::new(350.0, 290.0, 100.0, 20.0);
        let floating = Rect::sized(50.0, 30.0);
        let res = resolve(
            &anchor,
            &floating,
            Placement::Bottom,
            &viewport(),
            &PlacementConfig::default(),
        );
        assert_eq!(res.attempts.len(), 1);
        assert_eq!(res.placement, Some(Placement::Bottom));
        assert_eq!(res.position, Some(Position::new(314.0, 375.0)));
        assert!(!res.is_rotated());
    }

    #[test]
    fn test_flip_to_bottom() {
        let anchor = Rect::new(10.0, 10.0, 100.0, 20.0);
        let floating = Rect::sized(50.0, 30.0);
        let res = resolve(
            &anchor,
            &floating,
            Placement::Top,
            &viewport(),
            &PlacementConfig::default(),
        );
        assert_eq!(res.attempts.len(), 2);
        assert_eq!(res.attempts[0].position, Position::new(-24.0, 35.0));
        assert_eq!(res.attempts[0].overflow, Some(OverflowDirection::Top));
        assert_eq!(res.placement, Some(Placement::Bottom));
        assert_eq!(res.position, Some(Position::new(34.0, 35.0)));
        assert!(res.is_rotated());
    }

    #[test]
    fn test_exhausted_returns_none() {
        let anchor = Rect::new(0.0, 0.0, 800.0, 600.0);
        let floating = Rect::sized(900.0, 700.0);
        let res = resolve(
            &anchor,
            &floating,
            Placement::Top,
            &viewport(),
            &PlacementConfig::default(),
        );
        assert_eq!(res.attempts.len(), MAX_ATTEMPTS);
        assert!(res.attempts.iter().all(|a| a.overflow.is_some()));
        assert_eq!(res.position, None);
        assert_eq!(res.placement, None);
        assert!(!res.is_found());
    }

    #[test]
    fn test_skip_overflow_check_returns_raw_position() {
        let anchor = Rect::new(10.0, 10.0, 100.0, 20.0);
        let floating = Rect::sized(50.0, 30.0);
        let config = PlacementConfig::new().with_skip_overflow_check(true);
        let res = resolve(&anchor, &floating, Placement::Top, &viewport(), &config);
        assert_eq!(res.attempts.len(), 1);
        assert_eq!(res.attempts[0].overflow, None);
        assert_eq!(res.position, Some(Position::new(-24.0, 35.0)));
    }

    #[test]
    fn test_find_position_str() {
        let anchor = Rect::new(350.0, 290.0, 100.0, 20.0);
        let floating = Rect::sized(50.0, 30.0);
        let config = PlacementConfig::default();

        let pos = find_position_str(&anchor, &floating, "right-start", &viewport(), &config);
        assert_eq!(pos, Ok(Some(Position::new(290.0, 454.0))));

        let err = find_position_str(&anchor, &floating, "north", &viewport(), &config);
        assert!(matches!(err, Err(PlacementError::InvalidPlacement { .. })));
    }
}
