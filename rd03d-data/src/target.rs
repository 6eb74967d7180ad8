#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tracked reflection reported by the radar.
///
/// The derived `distance_cm` and `angle_deg` are computed from `x` and `y`
/// when the target is built and cannot be changed on their own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawTarget"))]
pub struct Target {
    x: i16,
    y: i16,
    speed: i16,
    distance_raw: u16,
    distance_cm: f32,
    angle_deg: f32,
    valid: bool,
}

impl Target {
    /// Builds a detected target from decoded coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - Lateral offset in mm, negative to the left of the sensor.
    /// * `y` - Forward distance in mm.
    /// * `speed` - Radial speed in cm/s, negative when approaching.
    /// * `distance_raw` - Distance resolution code as sent by the sensor.
    pub fn new(x: i16, y: i16, speed: i16, distance_raw: u16) -> Target {
        let (distance_cm, angle_deg) = polar(x, y);
        Target {
            x,
            y,
            speed,
            distance_raw,
            distance_cm,
            angle_deg,
            valid: true,
        }
    }

    /// Lateral offset from the sensor centerline in mm.
    pub fn x(&self) -> i16 {
        self.x
    }

    /// Forward distance from the sensor in mm.
    pub fn y(&self) -> i16 {
        self.y
    }

    /// Radial speed in cm/s. Negative values approach the sensor.
    pub fn speed(&self) -> i16 {
        self.speed
    }

    pub fn distance_raw(&self) -> u16 {
        self.distance_raw
    }

    /// Straight-line distance in cm.
    pub fn distance_cm(&self) -> f32 {
        self.distance_cm
    }

    /// Bearing in degrees from the forward axis, positive to the right.
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// False for an empty slot.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Wire shape accepted when deserializing. Derived fields are recomputed.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTarget {
    x: i16,
    y: i16,
    speed: i16,
    distance_raw: u16,
    valid: bool,
}

#[cfg(feature = "serde")]
impl From<RawTarget> for Target {
    fn from(raw: RawTarget) -> Target {
        if !raw.valid {
            return Target::default();
        }
        Target::new(raw.x, raw.y, raw.speed, raw.distance_raw)
    }
}

fn polar(x: i16, y: i16) -> (f32, f32) {
    let x_mm = x as f32;
    let y_mm = y as f32;
    let distance_cm = (x_mm * x_mm + y_mm * y_mm).sqrt() / 10.;
    let angle_deg = x_mm.atan2(y_mm).to_degrees();
    (distance_cm, angle_deg)
}
