use crate::String;
use core::fmt;
#[cfg(feature = "std")]
use thiserror::Error;

pub type Result<T> = core::result::Result<T, ByteFlagsError>;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteFlagsError {
    #[cfg_attr(feature = "std", error("invalid flag mapping: {0}"))]
    InvalidMapping(MappingFault),

    #[cfg_attr(feature = "std", error("unknown flag `{0}`"))]
    UnknownFlag(String),

    #[cfg_attr(feature = "std", error("byte value {0} is outside 0..=255"))]
    OutOfRange(i64),

    #[cfg_attr(
        feature = "std",
        error("index {index} is out of range for length {len}")
    )]
    IndexOutOfRange { index: i64, len: usize },
}

impl ByteFlagsError {
    /// Builds an `IndexOutOfRange` from an unsigned index, saturating indices
    /// that do not fit in an `i64`.
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        ByteFlagsError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

/// The rule a rejected mapping table broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingFault {
    EmptyName,
    DuplicateName(String),
    DuplicatePosition {
        position: u8,
        first: String,
        second: String,
    },
    PositionOutOfRange { name: String, position: usize },
}

impl fmt::Display for MappingFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingFault::EmptyName => write!(f, "flag names must not be empty"),
            MappingFault::DuplicateName(name) => write!(f, "flag `{}` is mapped twice", name),
            MappingFault::DuplicatePosition {
                position,
                first,
                second,
            } => write!(
                f,
                "bit {} is claimed by both `{}` and `{}`",
                position, first, second
            ),
            MappingFault::PositionOutOfRange { name, position } => {
                write!(f, "flag `{}` has position {}, expected 0..=7", name, position)
            }
        }
    }
}

impl From<MappingFault> for ByteFlagsError {
    fn from(fault: MappingFault) -> Self {
        ByteFlagsError::InvalidMapping(fault)
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for ByteFlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteFlagsError::InvalidMapping(fault) => write!(f, "invalid flag mapping: {}", fault),
            ByteFlagsError::UnknownFlag(name) => write!(f, "unknown flag `{}`", name),
            ByteFlagsError::OutOfRange(v) => write!(f, "byte value {} is outside 0..=255", v),
            ByteFlagsError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for length {}", index, len)
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for ByteFlagsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ByteFlagsError::from(MappingFault::DuplicatePosition {
            position: 3,
            first: "Sound".into(),
            second: "Vibration".into(),
        });
        assert_eq!(
            err.to_string(),
            "invalid flag mapping: bit 3 is claimed by both `Sound` and `Vibration`"
        );
        assert_eq!(
            ByteFlagsError::OutOfRange(256).to_string(),
            "byte value 256 is outside 0..=255"
        );
    }

    #[test]
    fn huge_indices_saturate() {
        assert_eq!(
            ByteFlagsError::index_out_of_range(usize::MAX, 2),
            ByteFlagsError::IndexOutOfRange {
                index: i64::MAX,
                len: 2
            }
        );
    }
}
