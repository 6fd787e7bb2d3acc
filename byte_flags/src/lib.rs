//! # byte_flags
//!
//! Packs named boolean flags into the bits of 8-bit words. A `no_std`
//! compatible crate (with `alloc`).
//!
//! - [`FlagMapping`]: a validated, immutable table from flag name to bit 0-7.
//! - [`FlagWord`]: one byte plus a shared mapping, mutated one bit at a time.
//! - [`FlagBank`]: a growable run of words addressed by a single global flag
//!   index.
//!
//! ```rust
//! use std::sync::Arc;
//! use byte_flags::{FlagBank, FlagMapping, FlagWord};
//!
//! let mapping = Arc::new(FlagMapping::new([("A", 0), ("B", 1), ("C", 2)])?);
//! let mut word = FlagWord::new(mapping);
//! word.enable("B")?;
//! assert_eq!(word.byte(), 2);
//! assert_eq!(word.to_binary_string(), "00000010");
//!
//! // More than eight flags: index them globally.
//! let mut bank = FlagBank::with_flag_count(12)?;
//! bank.toggle_global(9)?;
//! assert_eq!(bank.to_bytes(), vec![0, 2]);
//! # Ok::<(), byte_flags::ByteFlagsError>(())
//! ```
//!
//! ## Storage
//!
//! A word's stored form is its byte; a bank's is its bytes in order. The
//! mapping is not stored: keep it stable between writing and reading bytes,
//! or stored flags will be read under the wrong names.
//!
//! ## Features
//! - `std` (default): standard library support and `std::error::Error` via `thiserror`
//! - `serde`: load a [`FlagMapping`] from a name/position table, and store a
//!   [`FlagBank`] as its byte sequence

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::{string::String, sync::Arc, vec::Vec};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{string::String, sync::Arc, vec::Vec};

#[cfg(all(feature = "serde", feature = "std"))]
pub(crate) use std::collections::BTreeMap;

#[cfg(all(feature = "serde", not(feature = "std")))]
pub(crate) use alloc::collections::BTreeMap;

/// Bits held by one word.
pub const BITS_PER_WORD: usize = 8;

pub mod error;
pub use error::{ByteFlagsError, MappingFault, Result};

mod bit_ops;

pub mod bank;
pub mod mapping;
pub mod word;

pub use bank::{BitAddress, FlagBank, bytes_for_flags};
pub use mapping::FlagMapping;
pub use word::{EnabledFlags, FlagWord};
