//! Core constants derived from OGC conventions and common web-map defaults.
//! Keeping them in a single place makes it easier to tweak crate-wide magic numbers.

/// Nominal rendering pixel size in millimetres (OGC SLD/SE, WMTS).
pub const OGC_PIXEL_SIZE_MM: f64 = 0.28;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Inches per meter as used by the scale formulas of the web-mapping ecosystem.
pub const INCHES_PER_METER: f64 = 39.37;

/// Sphere radius used to derive the length of one degree.
pub const EARTH_SPHERE_RADIUS: f64 = 6_370_997.0;

/// Resolution at zoom 0 of the EPSG:3857 tile pyramid (256 px tiles).
pub const WEB_MERCATOR_MAX_RESOLUTION: f64 = 156_543.033_928_040_97;

/// Highest zoom level of the default resolution pyramid.
pub const DEFAULT_MAX_ZOOM: u8 = 28;

/// Viewport size in pixels assumed when the host has not reported one.
pub const DEFAULT_VIEWPORT_SIZE: (f64, f64) = (100.0, 100.0);

/// WMS request parameter carrying the layer name(s).
pub const LAYERS_PARAM: &str = "LAYERS";
