//! Bit-packing helpers shared by the raw pixel converters

/// Upper four bits of a byte, shifted down.
#[inline]
#[must_use]
pub const fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}

/// Lower four bits of a byte.
#[inline]
#[must_use]
pub const fn low_nibble(byte: u8) -> u8 {
    byte & 0x0F
}

/// Scale a 4-bit channel to 8 bits by shifting it into the high nibble.
///
/// `0xF` becomes `0xF0`, not `0xFF`; the low nibble is left empty.
#[inline]
#[must_use]
pub const fn expand_nibble(nibble: u8) -> u8 {
    nibble << 4
}

/// Join two bytes into a 16-bit word, first byte high.
#[inline]
#[must_use]
pub const fn pair_word(first: u8, second: u8) -> u16 {
    ((first as u16) << 8) | second as u16
}

/// Arithmetic shift of the top bit across the whole byte: `0x00` or `0xFF`.
#[inline]
#[must_use]
pub const fn sign_fill_top_bit(byte: u8) -> u8 {
    ((byte as i8) >> 7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibbles() {
        assert_eq!(high_nibble(0xA5), 0x0A);
        assert_eq!(low_nibble(0xA5), 0x05);
        assert_eq!(expand_nibble(0x0F), 0xF0);
        assert_eq!(expand_nibble(0x01), 0x10);
    }

    #[test]
    fn test_pair_word() {
        assert_eq!(pair_word(0x12, 0x34), 0x1234);
        assert_eq!(pair_word(0xFF, 0x00), 0xFF00);
    }

    #[test]
    fn test_sign_fill() {
        assert_eq!(sign_fill_top_bit(0x80), 0xFF);
        assert_eq!(sign_fill_top_bit(0xFF), 0xFF);
        assert_eq!(sign_fill_top_bit(0x7F), 0x00);
        assert_eq!(sign_fill_top_bit(0x00), 0x00);
    }
}
