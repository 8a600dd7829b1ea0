//! Core types for placement resolution

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PlacementError;

/// An axis-aligned rectangle in viewport coordinates
///
/// Mirrors what a DOM `getBoundingClientRect()` measurement reports, so all
/// six edges and extents are stored rather than derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create a rectangle at the origin with the given size
    ///
    /// Only the size of the floating element matters to the resolver.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Horizontal midpoint
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::sized(0.0, 0.0)
    }
}

/// Viewport-relative offset of the floating element's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Visible area the floating element must stay within, origin at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Side of the anchor the floating element is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The side across the anchor
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Top and bottom stack the floating element vertically
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Cross-axis alignment; no alignment means centered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Leading edges line up
    Start,
    /// Trailing edges line up
    End,
}

/// Where the floating element sits relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

impl Placement {
    /// Every placement, in table order
    pub const ALL: [Placement; 12] = [
        Placement::Top,
        Placement::TopStart,
        Placement::TopEnd,
        Placement::Bottom,
        Placement::BottomStart,
        Placement::BottomEnd,
        Placement::Left,
        Placement::LeftStart,
        Placement::LeftEnd,
        Placement::Right,
        Placement::RightStart,
        Placement::RightEnd,
    ];

    /// Combine a side and an optional alignment
    pub fn from_parts(side: Side, alignment: Option<Alignment>) -> Self {
        use Alignment::*;
        match (side, alignment) {
            (Side::Top, None) => Placement::Top,
            (Side::Top, Some(Start)) => Placement::TopStart,
            (Side::Top, Some(End)) => Placement::TopEnd,
            (Side::Bottom, None) => Placement::Bottom,
            (Side::Bottom, Some(Start)) => Placement::BottomStart,
            (Side::Bottom, Some(End)) => Placement::BottomEnd,
            (Side::Left, None) => Placement::Left,
            (Side::Left, Some(Start)) => Placement::LeftStart,
            (Side::Left, Some(End)) => Placement::LeftEnd,
            (Side::Right, None) => Placement::Right,
            (Side::Right, Some(Start)) => Placement::RightStart,
            (Side::Right, Some(End)) => Placement::RightEnd,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Placement::Top | Placement::TopStart | Placement::TopEnd => Side::Top,
            Placement::Bottom | Placement::BottomStart | Placement::BottomEnd => Side::Bottom,
            Placement::Left | Placement::LeftStart | Placement::LeftEnd => Side::Left,
            Placement::Right | Placement::RightStart | Placement::RightEnd => Side::Right,
        }
    }

    pub fn alignment(self) -> Option<Alignment> {
        match self {
            Placement::TopStart
            | Placement::BottomStart
            | Placement::LeftStart
            | Placement::RightStart => Some(Alignment::Start),
            Placement::TopEnd | Placement::BottomEnd | Placement::LeftEnd | Placement::RightEnd => {
                Some(Alignment::End)
            }
            Placement::Top | Placement::Bottom | Placement::Left | Placement::Right => None,
        }
    }

    /// Row of this placement in the rotation table
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case name, e.g. `top-start`
    pub fn name(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Placement::ALL
            .iter()
            .copied()
            .find(|p| p.name() == trimmed)
            .ok_or_else(|| PlacementError::invalid(s))
    }
}

impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Viewport edge a candidate position crosses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowDirection {
    Top,
    Right,
    Bottom,
    Left,
}

impl OverflowDirection {
    /// Every direction, in the order the overflow check tests them
    pub const ALL: [OverflowDirection; 4] = [
        OverflowDirection::Top,
        OverflowDirection::Right,
        OverflowDirection::Bottom,
        OverflowDirection::Left,
    ];

    /// Column of this direction in the rotation table
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OverflowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowDirection::Top => write!(f, "top"),
            OverflowDirection::Right => write!(f, "right"),
            OverflowDirection::Bottom => write!(f, "bottom"),
            OverflowDirection::Left => write!(f, "left"),
        }
    }
}
