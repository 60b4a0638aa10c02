//! The drawing surface the editor paints on.

use kurbo::{BezPath, Circle, Size};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

/// A drawing surface supplied by the host.
///
/// Coordinates are in surface pixels. The surface is repainted from
/// scratch every frame: [`clear`](Surface::clear) is always the first call.
pub trait Surface {
    /// The current pixel size of the surface.
    fn size(&self) -> Size;

    /// Change the pixel size, normally to match the displayed size.
    fn resize(&mut self, size: Size);

    fn clear(&mut self);

    fn stroke(&mut self, path: &BezPath, style: &Stroke);

    fn fill_circle(&mut self, circle: Circle, style: &Fill);
}

/// A color, packed as `0xRRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", transparent)
)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::rgba8(r, g, b, 0xff)
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    pub fn to_rgba32_u32(self) -> u32 {
        self.0
    }
}

/// How to stroke a path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    /// Alternating dash and gap lengths; solid if `None`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dash: Option<Vec<f64>>,
}

/// How to paint a point marker: a filled disc with a thin outline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Fill {
    pub color: Rgba,
    pub outline: Rgba,
    pub outline_width: f64,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f64) -> Stroke {
        Stroke {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Rgba, width: f64, dash: Vec<f64>) -> Stroke {
        Stroke {
            color,
            width,
            dash: Some(dash),
        }
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.as_ref().map(|d| !d.is_empty()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_channels() {
        let c = Rgba::rgb8(0x0d, 0x6e, 0xfd);
        assert_eq!(c.to_rgba32_u32(), 0x0d6e_fdff);
        assert_eq!(Rgba::rgba8(0, 0, 0, 0x33).to_rgba32_u32(), 0x0000_0033);
    }

    #[test]
    fn empty_dash_is_solid() {
        assert!(!Stroke::dashed(Rgba(0), 1.0, vec![]).is_dashed());
        assert!(Stroke::dashed(Rgba(0), 1.0, vec![5.0, 5.0]).is_dashed());
        assert!(!Stroke::solid(Rgba(0), 1.0).is_dashed());
    }
}
