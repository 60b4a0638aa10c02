//! Editor appearance and interaction settings.

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::surface::{Fill, Rgba, Stroke};

/// Pointer distance, in pixels, within which a press grabs a point.
pub const HIT_RADIUS: f64 = 6.0;
/// Radius of the point markers.
pub const MARKER_RADIUS: f64 = 6.0;
/// Number of straight segments the curve is flattened into.
pub const CURVE_SEGMENTS: usize = 200;

const POLYGON_COLOR: Rgba = Rgba::rgb8(0x6c, 0x75, 0x7d);
const CURVE_COLOR: Rgba = Rgba::rgb8(0x0d, 0x6e, 0xfd);
const ENDPOINT_COLOR: Rgba = Rgba::rgb8(0x19, 0x87, 0x54);
const INTERIOR_COLOR: Rgba = Rgba::rgb8(0xfd, 0x7e, 0x14);
const OUTLINE_COLOR: Rgba = Rgba::rgba8(0x00, 0x00, 0x00, 0x33);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct EditorOptions {
    pub hit_radius: f64,
    pub marker_radius: f64,
    pub curve_segments: usize,
    /// The control polygon.
    pub polygon: Stroke,
    pub curve: Stroke,
    /// Markers for the first and last point.
    pub endpoint: Fill,
    pub interior: Fill,
}

impl Default for EditorOptions {
    fn default() -> Self {
        EditorOptions {
            hit_radius: HIT_RADIUS,
            marker_radius: MARKER_RADIUS,
            curve_segments: CURVE_SEGMENTS,
            polygon: Stroke::dashed(POLYGON_COLOR, 1.0, vec![5.0, 5.0]),
            curve: Stroke::solid(CURVE_COLOR, 2.0),
            endpoint: Fill {
                color: ENDPOINT_COLOR,
                outline: OUTLINE_COLOR,
                outline_width: 1.0,
            },
            interior: Fill {
                color: INTERIOR_COLOR,
                outline: OUTLINE_COLOR,
                outline_width: 1.0,
            },
        }
    }
}

impl EditorOptions {
    /// The marker style for an endpoint or an interior point.
    pub(crate) fn marker(&self, is_endpoint: bool) -> &Fill {
        if is_endpoint {
            &self.endpoint
        } else {
            &self.interior
        }
    }

    /// Options with degenerate values replaced by their defaults.
    pub fn sanitized(mut self) -> EditorOptions {
        let defaults = EditorOptions::default();
        if !(self.hit_radius > 0.0) {
            log::warn!("invalid hit radius {}, using default", self.hit_radius);
            self.hit_radius = defaults.hit_radius;
        }
        if !(self.marker_radius > 0.0) {
            log::warn!("invalid marker radius {}, using default", self.marker_radius);
            self.marker_radius = defaults.marker_radius;
        }
        if self.curve_segments == 0 {
            log::warn!("curve needs at least one segment, using default");
            self.curve_segments = defaults.curve_segments;
        }
        self
    }
}
