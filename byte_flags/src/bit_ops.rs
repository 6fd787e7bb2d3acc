// Single-bit primitives on one word. Bit 0 is the least-significant bit.

use crate::{BITS_PER_WORD, ByteFlagsError, Result, String};

#[inline(always)]
pub fn set(word: &mut u8, bit: u8) {
    debug_assert!(usize::from(bit) < BITS_PER_WORD);
    *word |= 1 << bit;
}

#[inline(always)]
pub fn clear(word: &mut u8, bit: u8) {
    debug_assert!(usize::from(bit) < BITS_PER_WORD);
    *word &= !(1 << bit);
}

#[inline(always)]
pub fn flip(word: &mut u8, bit: u8) {
    debug_assert!(usize::from(bit) < BITS_PER_WORD);
    *word ^= 1 << bit;
}

#[inline(always)]
pub fn get(word: u8, bit: u8) -> bool {
    debug_assert!(usize::from(bit) < BITS_PER_WORD);
    (word >> bit) & 1 == 1
}

/// Narrows a caller-supplied position to a bit offset inside one word.
pub fn check_position(position: usize) -> Result<u8> {
    match u8::try_from(position) {
        Ok(bit) if position < BITS_PER_WORD => Ok(bit),
        _ => Err(ByteFlagsError::index_out_of_range(position, BITS_PER_WORD)),
    }
}

/// Most-significant bit first, always eight characters.
pub fn binary_string(word: u8) -> String {
    (0..BITS_PER_WORD as u8)
        .rev()
        .map(|bit| if get(word, bit) { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_touch_one_bit() {
        let mut word = 0b1010_0000;
        set(&mut word, 0);
        assert_eq!(word, 0b1010_0001);
        clear(&mut word, 7);
        assert_eq!(word, 0b0010_0001);
        flip(&mut word, 5);
        assert_eq!(word, 0b0000_0001);
        assert!(get(word, 0));
        assert!(!get(word, 1));
    }

    #[test]
    fn positions_past_seven_are_rejected() {
        assert_eq!(check_position(7), Ok(7));
        assert_eq!(
            check_position(8),
            Err(ByteFlagsError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert!(check_position(300).is_err());
    }

    #[test]
    fn binary_string_is_msb_first() {
        assert_eq!(binary_string(3), "00000011");
        assert_eq!(binary_string(0x80), "10000000");
        assert_eq!(binary_string(0xFF), "11111111");
    }
}
