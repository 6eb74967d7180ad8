pub(crate) fn to_u16_le(lo: u8, hi: u8) -> u16 {
    (lo as u16) + ((hi as u16) << 8)
}

/// Sign-magnitude with the sign bit inverted: bit 15 set means positive.
pub(crate) fn from_sign_magnitude(raw: u16) -> i16 {
    let magnitude = (raw & 0x7FFF) as i16;
    if raw & 0x8000 != 0 {
        magnitude
    } else {
        -magnitude
    }
}

pub(crate) fn from_offset(raw: u16) -> i16 {
    raw.wrapping_sub(0x8000) as i16
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u16_le() {
        assert_eq!(to_u16_le(0xE8, 0x83), 0x83E8);
        assert_eq!(to_u16_le(0x0A, 0x00), 0x000A);
    }

    #[test]
    fn test_from_sign_magnitude() {
        assert_eq!(from_sign_magnitude(0x83E8), 1000);
        assert_eq!(from_sign_magnitude(0x03E8), -1000);
        assert_eq!(from_sign_magnitude(0x800A), 10);
        assert_eq!(from_sign_magnitude(0x000A), -10);
        assert_eq!(from_sign_magnitude(0x8000), 0);
        assert_eq!(from_sign_magnitude(0xFFFF), 32767);
        assert_eq!(from_sign_magnitude(0x7FFF), -32767);
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(from_offset(0x8000), 0);
        assert_eq!(from_offset(0x83E8), 1000);
        assert_eq!(from_offset(0xFFFF), 32767);
        // Below the bias wraps to a negative value, as the sensor sends it.
        assert_eq!(from_offset(0x0001), -32767);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&[0x55, 0xCC]), "55 CC");
        assert_eq!(to_string(&[]), "");
    }
}
