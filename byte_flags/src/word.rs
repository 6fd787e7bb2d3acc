//! A single byte of named boolean flags.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use byte_flags::{FlagMapping, FlagWord};
//!
//! let mapping = Arc::new(FlagMapping::new([
//!     ("DARK_MODE", 0),
//!     ("NOTIFICATIONS", 1),
//!     ("AUTO_SAVE", 2),
//! ])?);
//!
//! let mut settings = FlagWord::new(mapping);
//! settings.enable("DARK_MODE")?;
//! settings.toggle("NOTIFICATIONS")?;
//!
//! assert!(settings.is_enabled("DARK_MODE")?);
//! assert_eq!(settings.byte(), 3);
//! assert_eq!(settings.to_binary_string(), "00000011");
//! # Ok::<(), byte_flags::ByteFlagsError>(())
//! ```

use core::fmt;

use crate::{Arc, ByteFlagsError, FlagMapping, Result, String, bit_ops};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagWord {
    value: u8,
    mapping: Arc<FlagMapping>,
}

impl FlagWord {
    /// Creates a word with every bit cleared.
    pub fn new(mapping: Arc<FlagMapping>) -> Self {
        Self::with_value(mapping, 0)
    }

    pub fn with_value(mapping: Arc<FlagMapping>, value: u8) -> Self {
        Self { value, mapping }
    }

    pub fn mapping(&self) -> &Arc<FlagMapping> {
        &self.mapping
    }

    pub fn enable(&mut self, name: &str) -> Result<()> {
        let bit = self.mapping.position_of(name)?;
        bit_ops::set(&mut self.value, bit);
        Ok(())
    }

    pub fn disable(&mut self, name: &str) -> Result<()> {
        let bit = self.mapping.position_of(name)?;
        bit_ops::clear(&mut self.value, bit);
        Ok(())
    }

    pub fn toggle(&mut self, name: &str) -> Result<()> {
        let bit = self.mapping.position_of(name)?;
        bit_ops::flip(&mut self.value, bit);
        Ok(())
    }

    pub fn is_enabled(&self, name: &str) -> Result<bool> {
        let bit = self.mapping.position_of(name)?;
        Ok(bit_ops::get(self.value, bit))
    }

    pub fn set(&mut self, name: &str, enabled: bool) -> Result<()> {
        if enabled {
            self.enable(name)
        } else {
            self.disable(name)
        }
    }

    /// Enables each name in turn.
    ///
    /// Stops at the first unknown name; flags enabled before it stay enabled.
    pub fn enable_all<'a, I>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().try_for_each(|name| self.enable(name))
    }

    /// Disables each name in turn, with the same partial-application rule as
    /// [`FlagWord::enable_all`].
    pub fn disable_all<'a, I>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().try_for_each(|name| self.disable(name))
    }

    /// Returns the raw byte, suitable for a one-byte storage column.
    pub fn byte(&self) -> u8 {
        self.value
    }

    /// Replaces the raw byte.
    ///
    /// Values outside `0..=255` are rejected with
    /// [`ByteFlagsError::OutOfRange`] and leave the word unchanged; they are
    /// never clamped or masked.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use byte_flags::{ByteFlagsError, FlagMapping, FlagWord};
    /// let mut word = FlagWord::new(Arc::new(FlagMapping::empty()));
    /// word.set_byte(200)?;
    /// assert_eq!(word.set_byte(256), Err(ByteFlagsError::OutOfRange(256)));
    /// assert_eq!(word.set_byte(-1), Err(ByteFlagsError::OutOfRange(-1)));
    /// assert_eq!(word.byte(), 200);
    /// # Ok::<(), ByteFlagsError>(())
    /// ```
    pub fn set_byte(&mut self, value: impl Into<i64>) -> Result<()> {
        let value = value.into();
        self.value = u8::try_from(value).map_err(|_| ByteFlagsError::OutOfRange(value))?;
        Ok(())
    }

    pub fn to_binary_string(&self) -> String {
        bit_ops::binary_string(self.value)
    }

    /// Reads a bit by position, whether or not the mapping names it.
    pub fn bit(&self, position: usize) -> Result<bool> {
        let bit = bit_ops::check_position(position)?;
        Ok(bit_ops::get(self.value, bit))
    }

    pub fn set_bit(&mut self, position: usize) -> Result<()> {
        let bit = bit_ops::check_position(position)?;
        bit_ops::set(&mut self.value, bit);
        Ok(())
    }

    pub fn clear_bit(&mut self, position: usize) -> Result<()> {
        let bit = bit_ops::check_position(position)?;
        bit_ops::clear(&mut self.value, bit);
        Ok(())
    }

    pub fn flip_bit(&mut self, position: usize) -> Result<()> {
        let bit = bit_ops::check_position(position)?;
        bit_ops::flip(&mut self.value, bit);
        Ok(())
    }

    /// Names of the mapped flags that are currently set, in position order.
    pub fn enabled_flags(&self) -> EnabledFlags<'_> {
        EnabledFlags {
            entries: self.mapping.entries().iter(),
            value: self.value,
        }
    }
}

impl fmt::Display for FlagWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary_string())
    }
}

pub struct EnabledFlags<'a> {
    entries: core::slice::Iter<'a, (String, u8)>,
    value: u8,
}

impl<'a> Iterator for EnabledFlags<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value;
        self.entries
            .by_ref()
            .find(|&&(_, bit)| bit_ops::get(value, bit))
            .map(|(name, _)| name.as_str())
    }
}
