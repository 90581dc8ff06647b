//! Compass angle helpers. All angles are in degrees.

/// Wraps an angle into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = (deg + 360.0).rem_euclid(360.0);
    // rem_euclid rounds to 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed minimal rotation from `a` to `b`, in `[-180, 180)`.
pub fn shortest_angle_diff(a: f64, b: f64) -> f64 {
    (b - a + 540.0).rem_euclid(360.0) - 180.0
}

/// Interpolates between two directions along the shorter arc.
///
/// `frac` is the position between `a` (0.0) and `b` (1.0). The result is
/// always normalized into `[0, 360)`, whatever the range of the inputs.
pub fn interpolate_angle(a: f64, b: f64, frac: f64) -> f64 {
    let diff = shortest_angle_diff(a, b);
    normalize_degrees(a + frac * diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_negative_and_large() {
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-9);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }

    #[test]
    fn shortest_diff_crosses_north() {
        assert!((shortest_angle_diff(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((shortest_angle_diff(10.0, 350.0) + 20.0).abs() < 1e-9);
        assert!((shortest_angle_diff(90.0, 350.0) + 100.0).abs() < 1e-9);
    }

    #[test]
    fn shortest_diff_opposite_directions() {
        assert!((shortest_angle_diff(0.0, 180.0) + 180.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_takes_short_arc() {
        assert!(interpolate_angle(350.0, 10.0, 0.5).abs() < 1e-9);
        assert!((interpolate_angle(10.0, 350.0, 0.25) - 5.0).abs() < 1e-9);
        assert!((interpolate_angle(0.0, 90.0, 0.5) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_endpoints_match_inputs() {
        assert!((interpolate_angle(350.0, 10.0, 0.0) - 350.0).abs() < 1e-9);
        assert!((interpolate_angle(350.0, 10.0, 1.0) - 10.0).abs() < 1e-9);
        assert!((interpolate_angle(-30.0, 400.0, 0.0) - 330.0).abs() < 1e-9);
        assert!((interpolate_angle(-30.0, 400.0, 1.0) - 40.0).abs() < 1e-9);
    }
}
