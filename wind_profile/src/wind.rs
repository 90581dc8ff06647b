//! Wind layers and altitude interpolation over a sounding.

use crate::angle::interpolate_angle;
use crate::validation::{validate_layers, ProfileError};

/// Wind measured at a single altitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindLayer {
    pub altitude_ft: f64,
    /// Direction in degrees from north.
    pub direction: f64,
    pub speed_kts: f64,
}

impl WindLayer {
    pub fn new(altitude_ft: f64, direction: f64, speed_kts: f64) -> Self {
        Self {
            altitude_ft,
            direction,
            speed_kts,
        }
    }
}

/// Wind layers ordered by ascending altitude.
///
/// The ordering is assumed, not checked, when built with [`WindProfile::new`].
/// Use [`WindProfile::try_new`] to reject unsorted or degenerate soundings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindProfile {
    layers: Vec<WindLayer>,
}

impl WindProfile {
    /// Creates a profile without checking the layers.
    pub fn new(layers: Vec<WindLayer>) -> Self {
        Self { layers }
    }

    /// Creates a profile after running [`validate_layers`] on the layers.
    pub fn try_new(layers: Vec<WindLayer>) -> Result<Self, ProfileError> {
        validate_layers(&layers)?;
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[WindLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Checks the layers for ordering and numeric problems.
    pub fn validate(&self) -> Result<(), ProfileError> {
        validate_layers(&self.layers)
    }

    /// Interpolated `(direction, speed)` at the given altitude.
    /// See [`wind_at_altitude`].
    pub fn wind_at_altitude(&self, altitude_ft: f64) -> (f64, f64) {
        wind_at_altitude(&self.layers, altitude_ft)
    }
}

impl From<Vec<WindLayer>> for WindProfile {
    fn from(layers: Vec<WindLayer>) -> Self {
        Self::new(layers)
    }
}

impl FromIterator<WindLayer> for WindProfile {
    fn from_iter<I: IntoIterator<Item = WindLayer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Linearly interpolate wind direction and speed from a sounding.
///
/// Returns `(direction, speed)`. An empty sounding yields `(0.0, 0.0)`.
/// Altitudes outside the sounding clamp to the nearest boundary layer, whose
/// values are returned unchanged. Between layers the speed is interpolated
/// linearly and the direction along the shorter arc, normalized to `[0, 360)`.
///
/// Layers must be sorted by ascending altitude; this is not checked. The
/// bounding pair is the first whose upper altitude is at or above the query.
/// The fraction is an unguarded division, so non-finite layer altitudes yield
/// NaN or infinity in the result.
pub fn wind_at_altitude(layers: &[WindLayer], altitude_ft: f64) -> (f64, f64) {
    let (Some(first), Some(last)) = (layers.first(), layers.last()) else {
        log::trace!("empty wind profile, returning calm");
        return (0.0, 0.0);
    };

    if altitude_ft <= first.altitude_ft {
        log::trace!("{altitude_ft} ft at or below lowest layer");
        return (first.direction, first.speed_kts);
    }

    for pair in layers.windows(2) {
        let lower = &pair[0];
        let upper = &pair[1];
        if altitude_ft <= upper.altitude_ft {
            let frac = (altitude_ft - lower.altitude_ft) / (upper.altitude_ft - lower.altitude_ft);
            log::trace!(
                "{altitude_ft} ft between {} ft and {} ft (frac {frac})",
                lower.altitude_ft,
                upper.altitude_ft
            );
            let direction = interpolate_angle(lower.direction, upper.direction, frac);
            let speed = lower.speed_kts + frac * (upper.speed_kts - lower.speed_kts);
            return (direction, speed);
        }
    }

    log::trace!("{altitude_ft} ft above highest layer");
    (last.direction, last.speed_kts)
}
