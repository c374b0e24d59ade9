//! One-shot checksum traits.
//!
//! Traits for fixed-width, non-cryptographic checksums over byte buffers.

use core::fmt::Debug;

/// One-shot non-cryptographic checksum.
///
/// These checksums are suitable for quick equality and integrity checks in
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// or any input an attacker controls.
///
/// This trait is intentionally one-shot. The algorithms behind it fold the
/// total input length into every mixing step, so a partial result cannot be
/// resumed when more bytes arrive; a streaming `update`/`finalize` surface
/// would be unimplementable without changing the output.
///
/// # Absent vs. empty input
///
/// The input is an *optional* buffer. An absent buffer (`None`) yields 0 for
/// every width, without running the mixer at all. A present but empty buffer
/// (`Some(&[])`) runs the mixer's finalization over the width's seed and in
/// general does **not** yield 0. Callers that need the distinction must not
/// collapse `None` into an empty slice.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Joaat32};
///
/// let sum = Joaat32::checksum(b"hello world");
/// assert_eq!(Joaat32::checksum_opt(None), 0);
/// ```
pub trait Checksum {
  /// Output size in bytes.
  ///
  /// - Joaat16: 2
  /// - Joaat32: 4
  /// - Joaat64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// A signed fixed-width integer (`i16`, `i32`, `i64`).
  type Output: Copy + Eq + Debug + Default;

  /// Compute the checksum of an optional buffer.
  ///
  /// Returns 0 when `data` is `None`. A present buffer may be empty; the
  /// result is then the finalization-only mix of the seed, not 0.
  #[must_use]
  fn checksum_opt(data: Option<&[u8]>) -> Self::Output;

  /// Compute the checksum of a present buffer.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    Self::checksum_opt(Some(data))
  }
}
