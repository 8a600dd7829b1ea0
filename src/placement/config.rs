//! Configuration for placement resolution

/// Distance in pixels kept between the anchor and the floating element
pub const DEFAULT_GAP: f64 = 4.0;

/// Configuration options for placement resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Gap between the anchor and the floating element
    pub gap: f64,

    /// Return the raw position for the requested placement without
    /// checking the viewport or rotating to other placements
    pub skip_overflow_check: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            skip_overflow_check: false,
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between anchor and floating element
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Enable or disable the overflow check and rotation
    pub fn with_skip_overflow_check(mut self, skip: bool) -> Self {
        self.skip_overflow_check = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.gap, 4.0);
        assert!(!config.skip_overflow_check);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_gap(8.0)
            .with_skip_overflow_check(true);

        assert_eq!(config.gap, 8.0);
        assert!(config.skip_overflow_check);
    }
}
