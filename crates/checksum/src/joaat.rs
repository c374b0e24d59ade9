//! The three checksum widths.
//!
//! Each width seeds the shared mixer with its own constant so the three
//! outputs are decorrelated from one another. There is no arithmetic
//! relationship between the widths: `Joaat16` is not a truncation of
//! `Joaat32`, and `Joaat64` is not an extension of either.

use traits::Checksum;

use crate::mix::one_at_a_time;

/// Seed for [`Joaat16`] (433494437).
const SEED16: u32 = 0x19D6_99A5;

/// Seed for [`Joaat32`] (780291637).
const SEED32: u32 = 0x2E82_4E35;

/// First-pass seed for [`Joaat64`] (1073676287).
const SEED64_PASS1: u32 = 0x3FFE_FFFF;

/// Second-pass constant for [`Joaat64`] (1873012681). XORed with the
/// first-pass result to seed the second pass.
const SEED64_PASS2: u32 = 0x6FA3_E7C9;

// ─────────────────────────────────────────────────────────────────────────────
// Joaat16
// ─────────────────────────────────────────────────────────────────────────────

/// 16-bit one-at-a-time checksum.
///
/// Mixes with seed 0x19D699A5, then XOR-folds the high 16 bits of the 32-bit
/// result into the low 16 bits and reinterprets them as `i16`.
///
/// # Example
///
/// ```ignore
/// use checksum::{Checksum, Joaat16};
///
/// assert_eq!(Joaat16::checksum(b"123456789"), 29780);
/// assert_eq!(Joaat16::checksum_opt(None), 0);
/// ```
#[derive(Clone, Default)]
pub struct Joaat16;

impl Joaat16 {
  /// Compute the checksum in a `const` context.
  #[must_use]
  pub const fn compute(data: Option<&[u8]>) -> i16 {
    match data {
      Some(bytes) => {
        let h = one_at_a_time(SEED16, bytes);
        ((h >> 16) ^ h) as u16 as i16
      }
      None => 0,
    }
  }
}

impl Checksum for Joaat16 {
  const OUTPUT_SIZE: usize = 2;
  type Output = i16;

  #[inline]
  fn checksum_opt(data: Option<&[u8]>) -> i16 {
    Self::compute(data)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Joaat32
// ─────────────────────────────────────────────────────────────────────────────

/// 32-bit one-at-a-time checksum.
///
/// Mixes with seed 0x2E824E35 and reinterprets the full 32-bit result as
/// `i32`, with no folding.
///
/// # Collisions
///
/// This construction is unusually collision-prone for short decimal-digit
/// strings, a known property of the algorithm rather than a bug. For example,
/// `"12404"` and `"16120"` both map to 1392626697. Do not use it to
/// discriminate between values drawn from dense numeric key spaces.
///
/// # Example
///
/// ```ignore
/// use checksum::{Checksum, Joaat32};
///
/// assert_eq!(Joaat32::checksum(b"123456789"), 1546819616);
/// ```
#[derive(Clone, Default)]
pub struct Joaat32;

impl Joaat32 {
  /// Compute the checksum in a `const` context.
  #[must_use]
  pub const fn compute(data: Option<&[u8]>) -> i32 {
    match data {
      Some(bytes) => one_at_a_time(SEED32, bytes) as i32,
      None => 0,
    }
  }
}

impl Checksum for Joaat32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = i32;

  #[inline]
  fn checksum_opt(data: Option<&[u8]>) -> i32 {
    Self::compute(data)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Joaat64
// ─────────────────────────────────────────────────────────────────────────────

/// 64-bit one-at-a-time checksum.
///
/// Runs the mixer twice over the same buffer: the first pass is seeded with
/// 0x3FFEFFFF, the second with the first result XOR 0x6FA3E7C9. The first
/// result lands in the high 32 bits, the second in the low 32 bits.
///
/// The chained second seed means the low word depends on the high word, so
/// the two halves do not collide in lockstep.
///
/// A present empty buffer checksums to -4574248572204083670
/// (0xC085_0128_B370_162A), the finalization-only mix of both passes. Only
/// an absent buffer yields 0.
///
/// # Example
///
/// ```ignore
/// use checksum::{Checksum, Joaat64};
///
/// assert_eq!(Joaat64::checksum(b"123456789"), 4216014835717037756);
/// ```
#[derive(Clone, Default)]
pub struct Joaat64;

impl Joaat64 {
  /// Compute the checksum in a `const` context.
  #[must_use]
  pub const fn compute(data: Option<&[u8]>) -> i64 {
    match data {
      Some(bytes) => {
        let hi = one_at_a_time(SEED64_PASS1, bytes);
        let lo = one_at_a_time(hi ^ SEED64_PASS2, bytes);
        (((hi as u64) << 32) | lo as u64) as i64
      }
      None => 0,
    }
  }
}

impl Checksum for Joaat64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = i64;

  #[inline]
  fn checksum_opt(data: Option<&[u8]>) -> i64 {
    Self::compute(data)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Canonical vectors, pinned at compile time. If these fail, the build fails.

/// Standard test input for check values.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(Joaat16::compute(Some(CHECK_INPUT)) == 29780);
  assert!(Joaat32::compute(Some(CHECK_INPUT)) == 1_546_819_616);
  assert!(Joaat64::compute(Some(CHECK_INPUT)) == 4_216_014_835_717_037_756);
};

// A present empty buffer mixes finalization only. None of the width seeds is
// the finalization fixed point, so none of these is 0. That includes the
// 64-bit width, whose original design notes claimed otherwise.
const _: () = {
  assert!(Joaat16::compute(Some(b"")) == -11321);
  assert!(Joaat32::compute(Some(b"")) == 421_915_978);
  assert!(Joaat64::compute(Some(b"")) == -4_574_248_572_204_083_670);
};

// An absent buffer is 0 for every width.
const _: () = {
  assert!(Joaat16::compute(None) == 0);
  assert!(Joaat32::compute(None) == 0);
  assert!(Joaat64::compute(None) == 0);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
