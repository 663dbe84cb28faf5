use crate::core::bounds::Bounds;
use crate::core::config::FitOptions;
use crate::core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_VIEWPORT_SIZE, WEB_MERCATOR_MAX_RESOLUTION};
use crate::core::geo::Point;
use crate::core::units::Unit;
use serde::{Deserialize, Serialize};

/// The part of the host view state the helpers read and update:
/// center and resolution in map units, plus the viewport size in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct View {
    /// The center of the view in map projection units
    pub center: Option<Point>,
    /// Map units per pixel; `None` until the host has set one
    pub resolution: Option<f64>,
    /// Allowed resolutions, one per zoom level
    pub resolutions: Option<Vec<f64>>,
    /// The size of the viewport in pixels
    pub size: Option<Point>,
    /// Snap computed resolutions to the allowed ones
    pub constrain_resolution: bool,
    /// Projection unit
    pub unit: Unit,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: None,
            resolution: None,
            resolutions: None,
            size: None,
            constrain_resolution: false,
            unit: Unit::Meters,
        }
    }
}

impl View {
    /// Creates a view centered at `center` with the given resolution
    pub fn new(center: Point, resolution: f64) -> Self {
        Self {
            center: Some(center),
            resolution: Some(resolution),
            ..Self::default()
        }
    }

    pub fn with_resolutions(mut self, resolutions: Vec<f64>) -> Self {
        self.resolutions = Some(resolutions);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Point::new(width, height));
        self
    }

    pub fn with_constrained_resolution(mut self, constrain: bool) -> Self {
        self.constrain_resolution = constrain;
        self
    }

    /// Sets the resolution of the zoom level `zoom` from the allowed resolutions
    pub fn with_zoom(mut self, zoom: usize) -> Self {
        self.resolution = self.allowed_resolutions().get(zoom).copied();
        self
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = Some(center);
    }

    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolution = Some(resolution);
    }

    /// Viewport size, falling back to the default when the host reported none
    pub fn viewport_size(&self) -> Point {
        self.size
            .unwrap_or_else(|| Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1))
    }

    /// The configured resolutions, or the EPSG:3857 pyramid
    pub fn allowed_resolutions(&self) -> Vec<f64> {
        match &self.resolutions {
            Some(resolutions) => resolutions.clone(),
            None => (0..=DEFAULT_MAX_ZOOM)
                .map(|z| WEB_MERCATOR_MAX_RESOLUTION / 2_f64.powi(z as i32))
                .collect(),
        }
    }

    /// Finest and coarsest allowed resolution
    pub fn resolution_limits(&self) -> Option<(f64, f64)> {
        self.allowed_resolutions()
            .into_iter()
            .filter(|r| r.is_finite() && *r > 0.0)
            .fold(None, |limits, r| match limits {
                None => Some((r, r)),
                Some((min, max)) => Some((min.min(r), max.max(r))),
            })
    }

    /// Current scale denominator, if the view has a resolution
    pub fn scale(&self) -> Option<f64> {
        self.resolution
            .map(|res| crate::core::scale::scale_for_resolution(res, self.unit))
    }

    /// Gets the extent currently shown in the viewport
    pub fn calculate_extent(&self) -> Option<Bounds> {
        let center = self.center?;
        let resolution = self.resolution?;
        let size = self.viewport_size();

        Some(Bounds::from_center_and_size(
            center,
            size.x * resolution,
            size.y * resolution,
        ))
    }

    /// Centers the view on `extent` and picks a resolution showing all of it.
    ///
    /// The resolution is kept within [`View::resolution_limits`]; a point
    /// extent gets the finest allowed resolution.
    pub fn fit(&mut self, extent: &Bounds, options: &FitOptions) {
        let size = self.viewport_size();
        let [top, right, bottom, left] = options.padding;
        let available = Point::new(
            (size.x - left - right).max(1.0),
            (size.y - top - bottom).max(1.0),
        );

        let mut resolution = (extent.width() / available.x).max(extent.height() / available.y);
        if let Some((min, max)) = self.resolution_limits() {
            // a single point has no size to fit
            if !resolution.is_finite() || resolution <= 0.0 {
                resolution = min;
            }
            resolution = resolution.clamp(min, max);
        }
        if self.constrain_resolution {
            resolution = self.constrain(resolution, options.nearest);
        }

        // shift the center so the padded area is centered on the extent
        let center = extent.center();
        let offset = Point::new((right - left) / 2.0, (top - bottom) / 2.0).multiply(resolution);
        let center = center.add(&offset);

        log::debug!(
            "fitting view to [{:.6}, {:.6}, {:.6}, {:.6}] at resolution {}",
            extent.min.x,
            extent.min.y,
            extent.max.x,
            extent.max.y,
            resolution
        );

        self.set_center(center);
        self.set_resolution(resolution);
    }

    /// Snaps `resolution` to one of the allowed resolutions.
    ///
    /// Without `nearest`, picks the finest allowed resolution that is still
    /// at least `resolution`, so the target extent stays fully visible.
    fn constrain(&self, resolution: f64, nearest: bool) -> f64 {
        let allowed = self.allowed_resolutions();
        if allowed.is_empty() || !resolution.is_finite() {
            return resolution;
        }

        if nearest {
            return allowed
                .iter()
                .copied()
                .min_by(|a, b| {
                    (a - resolution)
                        .abs()
                        .total_cmp(&(b - resolution).abs())
                })
                .unwrap_or(resolution);
        }

        let tolerance = resolution * 1e-9;
        allowed
            .iter()
            .copied()
            .filter(|r| *r + tolerance >= resolution)
            .min_by(|a, b| a.total_cmp(b))
            .or_else(|| allowed.iter().copied().max_by(|a, b| a.total_cmp(b)))
            .unwrap_or(resolution)
    }
}
