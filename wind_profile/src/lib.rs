//! Wind conditions at arbitrary altitude, interpolated from a sounding.

pub mod angle;
pub mod validation;
pub mod wind;

pub use angle::{interpolate_angle, normalize_degrees, shortest_angle_diff};
pub use validation::{validate_layers, ProfileError};
pub use wind::{wind_at_altitude, WindLayer, WindProfile};
