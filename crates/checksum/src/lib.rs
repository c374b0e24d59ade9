//! Fixed-width Jenkins one-at-a-time checksums.
//!
//! This crate provides 16-, 32-, and 64-bit non-cryptographic checksums over
//! byte buffers, all derived from one mixing primitive: a variant of the
//! Jenkins one-at-a-time hash that XORs the *total* input length into every
//! byte step and adds it again during finalization.
//!
//! # Supported Widths
//!
//! | Type | Seed(s) | Output | Derivation |
//! |------|---------|--------|------------|
//! | [`Joaat16`] | 0x19D699A5 | `i16` | high 16 bits XOR-folded into low 16 |
//! | [`Joaat32`] | 0x2E824E35 | `i32` | full mixer output |
//! | [`Joaat64`] | 0x3FFEFFFF, 0x6FA3E7C9 | `i64` | two chained mixer passes, packed |
//!
//! # Absent vs. empty input
//!
//! Every entry point takes an *optional* buffer. `None` yields 0 for all
//! widths without mixing. `Some(&[])` runs finalization over the width's
//! seed and yields a fixed, documented, nonzero value.
//!
//! # Not incremental
//!
//! Because the total length participates in every mixing step, these
//! checksums cannot be computed incrementally. There is no streaming API,
//! and none can be added without changing every output.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Joaat16, Joaat32, Joaat64};
//!
//! let data = b"123456789";
//! assert_eq!(Joaat16::checksum(data), 29780);
//! assert_eq!(Joaat32::checksum(data), 1546819616);
//! assert_eq!(Joaat64::checksum(data), 4216014835717037756);
//!
//! // Absent input short-circuits to zero for every width.
//! assert_eq!(Joaat32::checksum_opt(None), 0);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` and allocation-free.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod joaat;
mod mix;

pub use joaat::{Joaat16, Joaat32, Joaat64};
// Re-export the trait for convenience
pub use traits::Checksum;
