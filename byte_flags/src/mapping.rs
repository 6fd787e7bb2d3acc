//! Validated tables from flag name to bit position.
//!
//! A [`FlagMapping`] is built once from a caller-supplied table and never
//! changes afterwards. Every rule is checked at construction, so lookups only
//! ever fail for names that were never mapped.
//!
//! # Examples
//!
//! ```rust
//! use byte_flags::{ByteFlagsError, FlagMapping, MappingFault};
//!
//! let mapping = FlagMapping::new([("DARK_MODE", 0), ("NOTIFICATIONS", 1), ("AUTO_SAVE", 2)])?;
//! assert_eq!(mapping.position_of("AUTO_SAVE")?, 2);
//! assert_eq!(mapping.name_at(1), Some("NOTIFICATIONS"));
//!
//! let clash = FlagMapping::new([("A", 4), ("B", 4)]);
//! assert!(matches!(
//!     clash,
//!     Err(ByteFlagsError::InvalidMapping(MappingFault::DuplicatePosition { position: 4, .. }))
//! ));
//! # Ok::<(), ByteFlagsError>(())
//! ```

use crate::{BITS_PER_WORD, ByteFlagsError, MappingFault, Result, String, Vec};

#[cfg(feature = "serde")]
use crate::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<String, usize>",
        into = "BTreeMap<String, usize>"
    )
)]
pub struct FlagMapping {
    // Sorted by position.
    entries: Vec<(String, u8)>,
}

impl FlagMapping {
    /// Builds a mapping, rejecting empty names, repeated names, repeated
    /// positions and positions outside `0..=7`.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut table: Vec<(String, u8)> = Vec::new();

        for (name, position) in entries {
            let name = name.into();
            if name.is_empty() {
                return Err(MappingFault::EmptyName.into());
            }
            if table.iter().any(|(existing, _)| *existing == name) {
                return Err(MappingFault::DuplicateName(name).into());
            }
            let bit = match u8::try_from(position) {
                Ok(bit) if position < BITS_PER_WORD => bit,
                _ => return Err(MappingFault::PositionOutOfRange { name, position }.into()),
            };
            if let Some((holder, _)) = table.iter().find(|&&(_, taken)| taken == bit) {
                return Err(MappingFault::DuplicatePosition {
                    position: bit,
                    first: holder.clone(),
                    second: name,
                }
                .into());
            }
            table.push((name, bit));
        }

        table.sort_unstable_by_key(|&(_, bit)| bit);
        Ok(Self { entries: table })
    }

    /// A mapping with exactly one name, used for ad-hoc access to a single
    /// bit of a word.
    pub fn single(name: impl Into<String>, position: usize) -> Result<Self> {
        Self::new([(name.into(), position)])
    }

    /// A mapping with no names; every bit is reachable only by position.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn position_of(&self, name: &str) -> Result<u8> {
        self.entries
            .iter()
            .find(|(mapped, _)| mapped == name)
            .map(|&(_, bit)| bit)
            .ok_or_else(|| ByteFlagsError::UnknownFlag(name.into()))
    }

    pub fn name_at(&self, position: u8) -> Option<&str> {
        self.entries
            .iter()
            .find(|&&(_, bit)| bit == position)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_ok()
    }

    /// Iterates `(name, position)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.entries.iter().map(|(name, bit)| (name.as_str(), *bit))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, u8)] {
        &self.entries
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BTreeMap<String, usize>> for FlagMapping {
    type Error = ByteFlagsError;

    fn try_from(table: BTreeMap<String, usize>) -> Result<Self> {
        Self::new(table)
    }
}

#[cfg(feature = "serde")]
impl From<FlagMapping> for BTreeMap<String, usize> {
    fn from(mapping: FlagMapping) -> Self {
        mapping
            .entries
            .into_iter()
            .map(|(name, bit)| (name, usize::from(bit)))
            .collect()
    }
}
