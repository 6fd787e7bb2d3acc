//! Growable sequences of flag words addressed by one global index.
//!
//! Flag `i` lives in word `i / 8`, bit `i % 8`. The bank only ever grows:
//! new words are appended zeroed and existing words keep their bytes.
//!
//! # Examples
//!
//! ```rust
//! use byte_flags::FlagBank;
//!
//! let mut bank = FlagBank::new();
//! bank.toggle_global(9)?;
//!
//! assert_eq!(bank.byte_count(), 2);
//! assert_eq!(bank.byte_at(0)?, 0);
//! assert_eq!(bank.byte_at(1)?, 2);
//! assert_eq!(bank.to_bytes(), vec![0, 2]);
//! # Ok::<(), byte_flags::ByteFlagsError>(())
//! ```

use tracing::{debug, trace};

use crate::{Arc, BITS_PER_WORD, ByteFlagsError, FlagMapping, FlagWord, Result, String, Vec};

/// Name bound to the addressed bit by the one-entry mapping built per toggle.
const SCRATCH_FLAG: &str = "target";

/// Bytes needed to hold `flag_count` flags.
#[inline]
pub const fn bytes_for_flags(flag_count: usize) -> usize {
    flag_count.div_ceil(BITS_PER_WORD)
}

/// Word and bit coordinates of a global flag index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitAddress {
    pub word: usize,
    pub bit: u8,
}

impl BitAddress {
    #[inline]
    pub const fn new(global_index: usize) -> Self {
        Self {
            word: global_index / BITS_PER_WORD,
            bit: (global_index % BITS_PER_WORD) as u8,
        }
    }

    /// The global index this address names, or `None` if a hand-built
    /// address does not fit in a `usize` or has `bit` past 7.
    #[inline]
    pub const fn global_index(self) -> Option<usize> {
        if self.bit as usize >= BITS_PER_WORD {
            return None;
        }
        match self.word.checked_mul(BITS_PER_WORD) {
            Some(base) => base.checked_add(self.bit as usize),
            None => None,
        }
    }
}

impl From<usize> for BitAddress {
    fn from(global_index: usize) -> Self {
        Self::new(global_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct FlagBank {
    words: Vec<FlagWord>,
    // Nameless layout shared by every word; bank access is positional.
    layout: Arc<FlagMapping>,
}

impl Default for FlagBank {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagBank {
    /// Creates a bank with no words.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            layout: Arc::new(FlagMapping::empty()),
        }
    }

    /// Creates a bank already sized for `flag_count` flags.
    pub fn with_flag_count(flag_count: usize) -> Result<Self> {
        let mut bank = Self::new();
        bank.ensure_capacity(flag_count)?;
        Ok(bank)
    }

    /// Restores a bank from its canonical byte sequence.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let layout = Arc::new(FlagMapping::empty());
        let words = bytes
            .iter()
            .map(|&byte| FlagWord::with_value(Arc::clone(&layout), byte))
            .collect();
        Self { words, layout }
    }

    /// Grows the bank until it can hold at least `flag_count` flags.
    ///
    /// Appended words start at zero; existing words are untouched and the
    /// bank never shrinks.
    pub fn ensure_capacity(&mut self, flag_count: usize) -> Result<()> {
        let required = bytes_for_flags(flag_count);
        let current = self.words.len();
        if required <= current {
            return Ok(());
        }

        self.words
            .try_reserve(required - current)
            .map_err(|_| ByteFlagsError::index_out_of_range(flag_count, self.capacity()))?;
        let layout = Arc::clone(&self.layout);
        self.words
            .resize_with(required, || FlagWord::new(Arc::clone(&layout)));

        debug!(from = current, to = required, "grew flag bank");
        Ok(())
    }

    /// Splits a global flag index into word and bit coordinates.
    ///
    /// Indices that are negative, or too large to address on this platform,
    /// fail with [`ByteFlagsError::IndexOutOfRange`].
    pub fn address_of(&self, global_index: i64) -> Result<BitAddress> {
        usize::try_from(global_index)
            .map(BitAddress::new)
            .map_err(|_| ByteFlagsError::IndexOutOfRange {
                index: global_index,
                len: self.capacity(),
            })
    }

    /// Flips one flag, growing the bank first if the index is past the end.
    pub fn toggle_global(&mut self, global_index: usize) -> Result<()> {
        let (word, address) = self.grow_to(global_index)?;

        let target = FlagMapping::single(SCRATCH_FLAG, usize::from(address.bit))?;
        let mut scratch = FlagWord::with_value(Arc::new(target), word.byte());
        scratch.toggle(SCRATCH_FLAG)?;
        word.set_byte(scratch.byte())?;

        trace!(
            global_index,
            word = address.word,
            bit = address.bit,
            byte = word.byte(),
            "toggled flag"
        );
        Ok(())
    }

    /// Sets one flag to `enabled`, growing the bank first if needed.
    pub fn set_global(&mut self, global_index: usize, enabled: bool) -> Result<()> {
        let (word, address) = self.grow_to(global_index)?;
        let position = usize::from(address.bit);
        if enabled {
            word.set_bit(position)
        } else {
            word.clear_bit(position)
        }
    }

    fn grow_to(&mut self, global_index: usize) -> Result<(&mut FlagWord, BitAddress)> {
        let required = global_index
            .checked_add(1)
            .ok_or_else(|| ByteFlagsError::index_out_of_range(global_index, self.capacity()))?;
        self.ensure_capacity(required)?;

        let address = BitAddress::new(global_index);
        let len = self.words.len();
        let word = self
            .words
            .get_mut(address.word)
            .ok_or_else(|| ByteFlagsError::index_out_of_range(address.word, len))?;
        Ok((word, address))
    }

    /// Reads one flag. Flags past the end of the bank read as unset.
    pub fn is_enabled_global(&self, global_index: usize) -> bool {
        let address = BitAddress::new(global_index);
        self.words
            .get(address.word)
            .is_some_and(|word| word.bit(usize::from(address.bit)).unwrap_or(false))
    }

    pub fn byte_at(&self, word_index: usize) -> Result<u8> {
        self.words
            .get(word_index)
            .map(FlagWord::byte)
            .ok_or_else(|| ByteFlagsError::index_out_of_range(word_index, self.words.len()))
    }

    pub fn byte_count(&self) -> usize {
        self.words.len()
    }

    /// Number of flags the bank holds without growing.
    pub fn capacity(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, word_index: usize) -> Option<&FlagWord> {
        self.words.get(word_index)
    }

    pub fn words(&self) -> &[FlagWord] {
        &self.words
    }

    pub fn bytes(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.words.iter().map(FlagWord::byte)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes().collect()
    }

    /// Each word's eight-character binary form, lowest word first.
    pub fn binary_strings(&self) -> impl ExactSizeIterator<Item = String> + '_ {
        self.words.iter().map(FlagWord::to_binary_string)
    }
}

impl From<Vec<u8>> for FlagBank {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<FlagBank> for Vec<u8> {
    fn from(bank: FlagBank) -> Self {
        bank.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn toggle_nine_grows_to_two_words() -> Result<()> {
        let mut bank = FlagBank::new();
        assert_eq!(bank.byte_count(), 0);

        bank.toggle_global(9)?;
        assert_eq!(bank.byte_count(), 2);
        assert_eq!(bank.byte_at(0)?, 0);
        assert_eq!(bank.byte_at(1)?, 2);
        assert!(bank.is_enabled_global(9));

        bank.toggle_global(9)?;
        assert_eq!(bank.byte_at(1)?, 0);
        assert_eq!(bank.byte_count(), 2);
        Ok(())
    }

    #[test]
    fn address_splits_word_and_bit() -> Result<()> {
        let bank = FlagBank::new();
        assert_eq!(bank.address_of(0)?, BitAddress { word: 0, bit: 0 });
        assert_eq!(bank.address_of(7)?, BitAddress { word: 0, bit: 7 });
        assert_eq!(bank.address_of(8)?, BitAddress { word: 1, bit: 0 });
        assert_eq!(bank.address_of(23)?, BitAddress { word: 2, bit: 7 });
        assert_eq!(
            bank.address_of(-1),
            Err(ByteFlagsError::IndexOutOfRange { index: -1, len: 0 })
        );
        assert_eq!(BitAddress::new(23).global_index(), Some(23));
        assert_eq!(BitAddress::new(usize::MAX).global_index(), Some(usize::MAX));
        Ok(())
    }

    #[test]
    fn hand_built_addresses_may_not_map_back() {
        let huge = BitAddress {
            word: usize::MAX,
            bit: 0,
        };
        assert_eq!(huge.global_index(), None);
        let past_seven = BitAddress { word: 0, bit: 8 };
        assert_eq!(past_seven.global_index(), None);
    }

    #[test]
    fn ensure_capacity_only_grows() -> Result<()> {
        let mut bank = FlagBank::from_bytes(&[0xAA, 0x01]);
        bank.ensure_capacity(24)?;
        assert_eq!(bank.to_bytes(), vec![0xAA, 0x01, 0x00]);

        bank.ensure_capacity(3)?;
        assert_eq!(bank.byte_count(), 3);
        assert_eq!(bank.capacity(), 24);
        Ok(())
    }

    #[test]
    fn pre_sized_banks_round_up() -> Result<()> {
        assert_eq!(FlagBank::with_flag_count(0)?.byte_count(), 0);
        assert_eq!(FlagBank::with_flag_count(8)?.byte_count(), 1);
        assert_eq!(FlagBank::with_flag_count(9)?.byte_count(), 2);
        assert_eq!(FlagBank::with_flag_count(24)?.byte_count(), 3);
        assert_eq!(bytes_for_flags(17), 3);
        Ok(())
    }

    #[test]
    fn byte_at_past_the_end_fails() {
        let bank = FlagBank::from_bytes(&[1]);
        assert_eq!(
            bank.byte_at(1),
            Err(ByteFlagsError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn overflowing_index_is_rejected() {
        let mut bank = FlagBank::new();
        assert!(matches!(
            bank.toggle_global(usize::MAX),
            Err(ByteFlagsError::IndexOutOfRange { .. })
        ));
        assert!(bank.is_empty());
    }

    #[test]
    fn set_global_and_reads_past_the_end() -> Result<()> {
        let mut bank = FlagBank::new();
        assert!(!bank.is_enabled_global(40));

        bank.set_global(3, true)?;
        bank.set_global(12, true)?;
        bank.set_global(3, false)?;
        assert_eq!(bank.to_bytes(), vec![0x00, 0x10]);

        let strings: Vec<_> = bank.binary_strings().collect();
        assert_eq!(strings, vec!["00000000", "00010000"]);
        Ok(())
    }

    #[test]
    fn words_share_one_layout() -> Result<()> {
        let bank = FlagBank::with_flag_count(16)?;
        let first = bank.word(0).map(FlagWord::mapping);
        let second = bank.word(1).map(FlagWord::mapping);
        assert!(matches!((first, second), (Some(a), Some(b)) if Arc::ptr_eq(a, b)));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_bytes() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Row {
            flags: FlagBank,
        }

        let mut bank = FlagBank::new();
        bank.toggle_global(0).unwrap();
        bank.toggle_global(15).unwrap();

        let text = toml::to_string(&Row { flags: bank.clone() }).unwrap();
        assert_eq!(text.trim(), "flags = [1, 128]");
        let back: Row = toml::from_str(&text).unwrap();
        assert_eq!(back.flags, bank);
    }
}
