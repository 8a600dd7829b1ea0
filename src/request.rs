//! Placement request files
//!
//! A request file describes a viewport and one or more anchor/floating pairs
//! in TOML, so placements can be evaluated outside of a host UI:
//!
//! ```toml
//! [viewport]
//! width = 800
//! height = 600
//!
//! [[request]]
//! name = "corner"
//! placement = "top"
//! anchor = { top = 10, left = 10, width = 100, height = 20 }
//! floating = { width = 50, height = 30 }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::placement::{resolve, Placement, PlacementConfig, Rect, Resolution, Viewport};

/// Errors that can occur when loading or parsing request files
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to read request file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse request TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Request file contains no [[request]] entries")]
    Empty,
    #[error("Request '{name}' has a negative or non-finite {field}")]
    InvalidRect { name: String, field: &'static str },
}

/// A viewport plus the placement problems to solve within it
#[derive(Debug, Clone)]
pub struct RequestFile {
    pub viewport: Viewport,
    pub config: PlacementConfig,
    pub requests: Vec<PlacementRequest>,
}

/// One anchor/floating pair and the placement asked for
#[derive(Debug, Clone)]
pub struct PlacementRequest {
    pub name: String,
    pub placement: Placement,
    pub anchor: Rect,
    pub floating: Rect,
}

/// Result of evaluating one request
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub name: String,
    pub resolution: Resolution,
}

impl Evaluation {
    /// One-line summary, e.g. `tip: bottom top=34 left=35`
    pub fn summary(&self) -> String {
        match (self.resolution.placement, self.resolution.position) {
            (Some(placement), Some(pos)) => {
                format!("{}: {} top={} left={}", self.name, placement, pos.top, pos.left)
            }
            _ => format!("{}: no placement fits", self.name),
        }
    }
}

/// TOML structure for deserializing request files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRequestFile {
    viewport: Viewport,
    options: Option<TomlOptions>,
    #[serde(default)]
    request: Vec<TomlRequest>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOptions {
    gap: Option<f64>,
    skip_overflow_check: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRequest {
    name: Option<String>,
    placement: Placement,
    anchor: TomlRect,
    floating: TomlSize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRect {
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSize {
    width: f64,
    height: f64,
}

impl RequestFile {
    /// Load requests from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, RequestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load requests from a TOML string
    pub fn from_str(content: &str) -> Result<Self, RequestError> {
        let parsed: TomlRequestFile = toml::from_str(content)?;
        if parsed.request.is_empty() {
            return Err(RequestError::Empty);
        }
        check_size("viewport", "width", parsed.viewport.width)?;
        check_size("viewport", "height", parsed.viewport.height)?;

        let mut config = PlacementConfig::default();
        if let Some(options) = &parsed.options {
            if let Some(gap) = options.gap {
                check_size("options", "gap", gap)?;
                config = config.with_gap(gap);
            }
            if let Some(skip) = options.skip_overflow_check {
                config = config.with_skip_overflow_check(skip);
            }
        }

        let requests = parsed
            .request
            .into_iter()
            .enumerate()
            .map(|(i, req)| {
                let name = req.name.unwrap_or_else(|| format!("request-{}", i + 1));
                check_coordinate(&name, "anchor top", req.anchor.top)?;
                check_coordinate(&name, "anchor left", req.anchor.left)?;
                check_size(&name, "anchor width", req.anchor.width)?;
                check_size(&name, "anchor height", req.anchor.height)?;
                check_size(&name, "floating width", req.floating.width)?;
                check_size(&name, "floating height", req.floating.height)?;
                Ok(PlacementRequest {
                    anchor: Rect::new(
                        req.anchor.left,
                        req.anchor.top,
                        req.anchor.width,
                        req.anchor.height,
                    ),
                    floating: Rect::sized(req.floating.width, req.floating.height),
                    placement: req.placement,
                    name,
                })
            })
            .collect::<Result<Vec<_>, RequestError>>()?;

        Ok(RequestFile {
            viewport: parsed.viewport,
            config,
            requests,
        })
    }

    /// Replace the configuration read from the file
    pub fn with_config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve every request in file order
    pub fn evaluate(&self) -> Vec<Evaluation> {
        self.requests
            .iter()
            .map(|req| Evaluation {
                name: req.name.clone(),
                resolution: resolve(
                    &req.anchor,
                    &req.floating,
                    req.placement,
                    &self.viewport,
                    &self.config,
                ),
            })
            .collect()
    }
}

/// Sizes must be finite and non-negative
fn check_size(name: &str, field: &'static str, value: f64) -> Result<(), RequestError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RequestError::InvalidRect {
            name: name.to_string(),
            field,
        });
    }
    Ok(())
}

/// Coordinates may be negative (anchors scrolled off screen) but must be finite
fn check_coordinate(name: &str, field: &'static str, value: f64) -> Result<(), RequestError> {
    if !value.is_finite() {
        return Err(RequestError::InvalidRect {
            name: name.to_string(),
            field,
        });
    }
    Ok(())
}
