//! Scale ↔ resolution conversion and scale-to-zoom lookup.

use crate::core::config::ScaleOptions;
use crate::core::units::Unit;

/// Map units per pixel at the scale `1 : scale`, using the OGC pixel size.
pub fn resolution_for_scale(scale: f64, unit: Unit) -> f64 {
    ScaleOptions::default().resolution_for_scale(scale, unit)
}

/// Scale denominator at `resolution`, the inverse of [`resolution_for_scale`].
pub fn scale_for_resolution(resolution: f64, unit: Unit) -> f64 {
    ScaleOptions::default().scale_for_resolution(resolution, unit)
}

/// Index of the resolution closest to the one implied by `scale`.
///
/// Tile pyramids only offer discrete resolutions, so the nearest one wins;
/// ties go to the lower zoom level. The sequence is not assumed to be sorted.
/// Returns `0` for a scale that is not a positive finite number and for an
/// empty sequence.
pub fn zoom_for_scale(scale: f64, resolutions: &[f64], unit: Unit) -> usize {
    if !scale.is_finite() || scale <= 0.0 {
        log::debug!("zoom_for_scale: ignoring degenerate scale {}", scale);
        return 0;
    }

    let target = resolution_for_scale(scale, unit);
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (zoom, resolution) in resolutions.iter().enumerate() {
        let distance = (resolution - target).abs();
        if distance < best_distance {
            best = zoom;
            best_distance = distance;
        }
    }

    best
}

/// Parses a user-typed scale such as `"25000"` or `"1:25000"`.
pub fn parse_scale(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let denominator = trimmed
        .strip_prefix("1:")
        .map(str::trim)
        .unwrap_or(trimmed)
        .replace(['_', ' '], "");

    denominator.parse::<f64>().ok().filter(|s| s.is_finite())
}

/// [`zoom_for_scale`] for unparsed input; unparseable text yields `0`.
pub fn zoom_for_scale_str(scale: &str, resolutions: &[f64], unit: Unit) -> usize {
    match parse_scale(scale) {
        Some(scale) => zoom_for_scale(scale, resolutions, unit),
        None => 0,
    }
}

/// Rounds a scale denominator to a value fit for display.
pub fn round_scale(scale: f64) -> f64 {
    let step = if scale < 100.0 {
        1.0
    } else if scale < 10_000.0 {
        10.0
    } else if scale < 1_000_000.0 {
        100.0
    } else {
        1000.0
    };

    (scale / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCALE: f64 = 1909.09;
    const MERCATOR_RESOLUTIONS: [f64; 4] = [
        1.19432856696,  // 4265
        0.597164283478, // 2132
        0.298582141739, // 1066
        0.149291070869, // 533
    ];

    #[test]
    fn test_resolution_for_scale_per_unit() {
        assert_eq!(resolution_for_scale(TEST_SCALE, Unit::Degrees), 0.000004807292355257246);
        assert_eq!(resolution_for_scale(TEST_SCALE, Unit::Meters), 0.5345462690925383);
        assert_eq!(resolution_for_scale(TEST_SCALE, Unit::Feet), 1.7537607253692198);
        assert_eq!(resolution_for_scale(TEST_SCALE, Unit::UsFeet), 1.7537572178477696);
    }

    #[test]
    fn test_scale_for_resolution_is_inverse() {
        for unit in Unit::ALL {
            let resolution = resolution_for_scale(TEST_SCALE, unit);
            let scale = scale_for_resolution(resolution, unit);
            assert!((scale - TEST_SCALE).abs() < 1e-9, "{unit}: {scale}");
        }

        let resolution = 190_919.09;
        let scale = scale_for_resolution(resolution, Unit::Meters);
        assert!((resolution_for_scale(scale, Unit::Meters) - resolution).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_for_scale_nearest() {
        let scales = [5000.0, 2500.0, 1000.0, 500.0];
        for (expected, scale) in scales.iter().enumerate() {
            assert_eq!(zoom_for_scale(*scale, &MERCATOR_RESOLUTIONS, Unit::Meters), expected);
        }
    }

    #[test]
    fn test_zoom_for_scale_degenerate_input() {
        assert_eq!(zoom_for_scale(-1.0, &[1.0, 2.0], Unit::Meters), 0);
        assert_eq!(zoom_for_scale(0.0, &[1.0, 2.0], Unit::Meters), 0);
        assert_eq!(zoom_for_scale(f64::NAN, &[1.0, 2.0], Unit::Meters), 0);
        assert_eq!(zoom_for_scale(f64::INFINITY, &[1.0, 2.0], Unit::Meters), 0);
        assert_eq!(zoom_for_scale(5000.0, &[], Unit::Meters), 0);
        assert_eq!(zoom_for_scale_str("scale", &[1.0, 2.0], Unit::Meters), 0);
    }

    #[test]
    fn test_zoom_for_scale_unsorted_and_ties() {
        // target for 5000 in meters is ~1.4
        assert_eq!(zoom_for_scale(5000.0, &[0.1, 9.0, 1.5, 3.0], Unit::Meters), 2);
        assert_eq!(zoom_for_scale(5000.0, &[2.0, 2.0, 2.0], Unit::Meters), 0);
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("25000"), Some(25_000.0));
        assert_eq!(parse_scale(" 1:25 000 "), Some(25_000.0));
        assert_eq!(parse_scale("1:1_000"), Some(1000.0));
        assert_eq!(parse_scale("not a number"), None);
        assert_eq!(parse_scale("inf"), None);
    }

    #[test]
    fn test_round_scale() {
        assert_eq!(round_scale(42.4), 42.0);
        assert_eq!(round_scale(1909.09), 1910.0);
        assert_eq!(round_scale(25_049.0), 25_000.0);
        assert_eq!(round_scale(1_234_567.0), 1_235_000.0);
    }
}
