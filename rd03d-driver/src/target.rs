use crate::constants::TARGET_DATA_SIZE;
use crate::numeric::{from_offset, from_sign_magnitude, to_u16_le};
use rd03d_data::Target;

pub(crate) trait Rd03dTarget {
    fn from_slot(slot: &[u8]) -> Target;
}

impl Rd03dTarget for Target {
    /// Decodes one 8-byte target block: X, Y, speed and distance code as
    /// little-endian words. A block with zero X and Y is an empty slot.
    fn from_slot(slot: &[u8]) -> Target {
        assert_eq!(slot.len(), TARGET_DATA_SIZE);
        let raw_x = to_u16_le(slot[0], slot[1]);
        let raw_y = to_u16_le(slot[2], slot[3]);
        let raw_speed = to_u16_le(slot[4], slot[5]);
        let raw_distance = to_u16_le(slot[6], slot[7]);

        if raw_x == 0 && raw_y == 0 {
            return Target::default();
        }

        Target::new(
            from_sign_magnitude(raw_x),
            from_offset(raw_y),
            from_sign_magnitude(raw_speed),
            raw_distance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_raw_values() {
        let target = Target::from_slot(&[0xE8, 0x83, 0xE8, 0x83, 0x0A, 0x80, 0x40, 0x01]);
        assert!(target.is_valid());
        assert_eq!(target.x(), 1000);
        assert_eq!(target.y(), 1000);
        assert_eq!(target.speed(), 10);
        assert_eq!(target.distance_raw(), 0x0140);

        let target = Target::from_slot(&[0xE8, 0x03, 0x00, 0x80, 0x0A, 0x00, 0x00, 0x00]);
        assert!(target.is_valid());
        assert_eq!(target.x(), -1000);
        assert_eq!(target.y(), 0);
        assert_eq!(target.speed(), -10);
    }

    #[test]
    fn test_derived_fields() {
        // X = +1000 mm, Y = +2000 mm
        let target = Target::from_slot(&[0xE8, 0x83, 0xD0, 0x87, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(target.y(), 2000);
        assert!(f32::abs(target.distance_cm() - 223.6) < 0.1);
        assert!(f32::abs(target.angle_deg() - 26.6) < 0.1);
    }

    #[test]
    fn test_empty_slot() {
        let target = Target::from_slot(&[0x00; 8]);
        assert_eq!(target, Target::default());

        // Speed and distance code are ignored once X and Y are both zero.
        let target = Target::from_slot(&[0x00, 0x00, 0x00, 0x00, 0x0A, 0x80, 0x40, 0x01]);
        assert!(!target.is_valid());
        assert_eq!(target.speed(), 0);
        assert_eq!(target.distance_raw(), 0);
    }

    #[test]
    fn test_zero_y_raw_is_still_valid() {
        // Raw Y of zero decodes through the offset to the far negative end.
        let target = Target::from_slot(&[0x64, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert!(target.is_valid());
        assert_eq!(target.x(), 100);
        assert_eq!(target.y(), i16::MIN);
    }
}
