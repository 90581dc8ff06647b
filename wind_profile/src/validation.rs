//! Optional checks for wind soundings.
//!
//! Interpolation accepts any layers. These checks are for callers that want
//! to reject soundings which would give meaningless results.

use crate::wind::WindLayer;

/// Problem found in a sounding, reported for the first offending layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("layer {index}: {field} is not finite")]
    NonFinite { index: usize, field: &'static str },
    #[error("layer {index}: altitude {altitude_ft} ft is below previous layer at {previous_ft} ft")]
    Unsorted {
        index: usize,
        previous_ft: f64,
        altitude_ft: f64,
    },
    #[error("layer {index}: altitude {altitude_ft} ft repeats previous layer")]
    DuplicateAltitude { index: usize, altitude_ft: f64 },
    #[error("layer {index}: negative speed {speed_kts} kt")]
    NegativeSpeed { index: usize, speed_kts: f64 },
}

/// Checks that layers are finite, have non-negative speed and strictly
/// ascending altitudes. An empty slice is valid.
pub fn validate_layers(layers: &[WindLayer]) -> Result<(), ProfileError> {
    let result = check(layers);
    if let Err(err) = &result {
        log::debug!("rejected wind profile: {err}");
    }
    result
}

fn check(layers: &[WindLayer]) -> Result<(), ProfileError> {
    let mut previous: Option<f64> = None;
    for (index, layer) in layers.iter().enumerate() {
        for (field, value) in [
            ("altitude", layer.altitude_ft),
            ("direction", layer.direction),
            ("speed", layer.speed_kts),
        ] {
            if !value.is_finite() {
                return Err(ProfileError::NonFinite { index, field });
            }
        }

        if layer.speed_kts < 0.0 {
            return Err(ProfileError::NegativeSpeed {
                index,
                speed_kts: layer.speed_kts,
            });
        }

        if let Some(previous_ft) = previous {
            if layer.altitude_ft < previous_ft {
                return Err(ProfileError::Unsorted {
                    index,
                    previous_ft,
                    altitude_ft: layer.altitude_ft,
                });
            }
            if layer.altitude_ft == previous_ft {
                return Err(ProfileError::DuplicateAltitude {
                    index,
                    altitude_ft: layer.altitude_ft,
                });
            }
        }
        previous = Some(layer.altitude_ft);
    }
    Ok(())
}
