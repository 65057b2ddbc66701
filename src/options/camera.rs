use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Closed interval of angles in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct AngleRange {
    /// Lower bound, inclusive.
    pub min: f32,
    /// Upper bound, inclusive.
    pub max: f32,
}

impl AngleRange {
    /// Create a range from its bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. Never panics, even for an inverted
    /// range or a NaN input.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        self.min.max(self.max.min(value))
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Movement, look and projection parameters for the first-person camera.
pub struct CameraOptions {
    /// Movement speed in world units per millisecond of frame time.
    #[schemars(title = "Move Speed", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub move_speed: f32,
    /// Degrees of rotation per unit of mouse motion.
    #[schemars(title = "Look Sensitivity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub look_sensitivity: f32,
    /// Allowed pitch in degrees; must lie strictly inside (-90, 90).
    #[schemars(title = "Pitch Range")]
    pub pitch_range: AngleRange,
    /// Allowed vertical field of view in degrees.
    #[schemars(title = "Field of View Range")]
    pub fov_range: AngleRange,
    /// Eye height the camera is pinned to after every move, if any.
    #[schemars(title = "Eye Height")]
    pub pin_height: Option<f32>,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            move_speed: 0.005,
            look_sensitivity: 0.1,
            pitch_range: AngleRange::new(-89.9, 89.9),
            fov_range: AngleRange::new(10.0, 45.0),
            pin_height: None,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl CameraOptions {
    /// Defaults with the camera pinned to `eye_height`, i.e. ground-locked
    /// walking instead of free flight.
    #[must_use]
    pub fn first_person(eye_height: f32) -> Self {
        Self {
            pin_height: Some(eye_height),
            ..Self::default()
        }
    }

    /// Reject configurations the controller cannot honor.
    pub fn validate(&self) -> Result<(), CameraError> {
        check_range("pitch_range", self.pitch_range, -90.0, 90.0)?;
        check_range("fov_range", self.fov_range, 0.0, 180.0)?;
        check_non_negative("move_speed", self.move_speed)?;
        check_non_negative("look_sensitivity", self.look_sensitivity)?;
        if let Some(height) = self.pin_height {
            if !height.is_finite() {
                return Err(CameraError::InvalidOptions(format!(
                    "pin_height must be finite, got {height}"
                )));
            }
        }
        if !(self.znear.is_finite() && self.zfar.is_finite())
            || self.znear <= 0.0
            || self.zfar <= self.znear
        {
            return Err(CameraError::InvalidOptions(format!(
                "clip planes must satisfy 0 < znear < zfar, got {} and {}",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }
}

fn check_range(
    name: &str,
    range: AngleRange,
    lower: f32,
    upper: f32,
) -> Result<(), CameraError> {
    if !(range.min.is_finite() && range.max.is_finite()) {
        return Err(CameraError::InvalidOptions(format!(
            "{name} bounds must be finite"
        )));
    }
    if range.min > range.max {
        return Err(CameraError::InvalidOptions(format!(
            "{name} is inverted: min {} > max {}",
            range.min, range.max
        )));
    }
    if range.min <= lower || range.max >= upper {
        return Err(CameraError::InvalidOptions(format!(
            "{name} must lie strictly inside ({lower}, {upper})"
        )));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f32) -> Result<(), CameraError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CameraError::InvalidOptions(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraOptions::default().validate().is_ok());
        assert!(CameraOptions::first_person(1.5).validate().is_ok());
    }

    #[test]
    fn pitch_range_must_stay_inside_vertical() {
        let opts = CameraOptions {
            pitch_range: AngleRange::new(-90.0, 45.0),
            ..CameraOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(CameraError::InvalidOptions(_))
        ));
    }

    #[test]
    fn inverted_fov_range_is_rejected() {
        let opts = CameraOptions {
            fov_range: AngleRange::new(60.0, 30.0),
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn clip_planes_are_checked() {
        let opts = CameraOptions {
            znear: 10.0,
            zfar: 1.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn zero_sensitivity_locks_the_view() {
        let locked = CameraOptions {
            look_sensitivity: 0.0,
            ..CameraOptions::default()
        };
        assert!(locked.validate().is_ok());

        let negative = CameraOptions {
            look_sensitivity: -0.1,
            ..CameraOptions::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn clamp_is_total() {
        let range = AngleRange::new(10.0, 45.0);
        assert_eq!(range.clamp(95.0), 45.0);
        assert_eq!(range.clamp(-3.0), 10.0);
        assert_eq!(range.clamp(20.0), 20.0);
        assert!(range.contains(range.clamp(f32::NAN)));

        let inverted = AngleRange::new(45.0, 10.0);
        assert!(inverted.clamp(30.0).is_finite());
    }
}
