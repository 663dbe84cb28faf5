//! Configuration for scale math, legend requests and view fitting
//!
//! Scale conversion is parameterised by a convention (pixel size and the
//! inches-per-meter factor). Presets cover the OGC defaults; `Custom` lets a
//! host match a server that renders at a different nominal DPI.

use crate::core::constants::{INCHES_PER_METER, MM_PER_INCH, OGC_PIXEL_SIZE_MM};
use crate::core::units::Unit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaleConvention {
    /// 0.28 mm pixels, as mandated by OGC SLD and WMTS
    Ogc,
    /// Classic 72 DPI screen assumption
    Screen72,
    /// Classic 96 DPI screen assumption
    Screen96,
    Custom(ScaleOptions),
}

impl ScaleConvention {
    pub fn resolve(&self) -> ScaleOptions {
        match self {
            Self::Ogc => ScaleOptions {
                pixel_size_mm: OGC_PIXEL_SIZE_MM,
                inches_per_meter: INCHES_PER_METER,
            },
            Self::Screen72 => ScaleOptions {
                pixel_size_mm: MM_PER_INCH / 72.0,
                inches_per_meter: INCHES_PER_METER,
            },
            Self::Screen96 => ScaleOptions {
                pixel_size_mm: MM_PER_INCH / 96.0,
                inches_per_meter: INCHES_PER_METER,
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for ScaleConvention {
    fn default() -> Self {
        Self::Ogc
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOptions {
    pub pixel_size_mm: f64,
    pub inches_per_meter: f64,
}

impl ScaleOptions {
    /// Dots per inch implied by the pixel size
    pub fn dpi(&self) -> f64 {
        MM_PER_INCH / self.pixel_size_mm
    }

    /// Map units per pixel at the given scale denominator
    pub fn resolution_for_scale(&self, scale: f64, unit: Unit) -> f64 {
        scale / (unit.meters_per_unit() * self.inches_per_meter * self.dpi())
    }

    /// Scale denominator at the given resolution
    pub fn scale_for_resolution(&self, resolution: f64, unit: Unit) -> f64 {
        resolution * unit.meters_per_unit() * self.inches_per_meter * self.dpi()
    }
}

impl Default for ScaleOptions {
    fn default() -> Self {
        ScaleConvention::default().resolve()
    }
}

/// Fixed parameters of a WMS GetLegendGraphic request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub service: String,
    pub version: String,
    pub request: String,
    pub format: String,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            service: "WMS".to_string(),
            version: "1.3.0".to_string(),
            request: "GetLegendGraphic".to_string(),
            format: "image/png".to_string(),
        }
    }
}

/// Options for fitting a view to an extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Padding in pixels: top, right, bottom, left
    pub padding: [f64; 4],
    /// Snap to the nearest allowed resolution instead of the next one that
    /// still shows the whole extent
    pub nearest: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: [0.0; 4],
            nearest: false,
        }
    }
}
