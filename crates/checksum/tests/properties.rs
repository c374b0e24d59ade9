//! Property tests for the checksum widths.
//!
//! Determinism and API-consistency properties are asserted for every width.
//! Probabilistic properties (order sensitivity, bit-flip avalanche) are
//! asserted only on the 64-bit width, where the collision odds of a random
//! pair are negligible; the narrow widths genuinely collide at their scale
//! and are covered by fixed, pre-verified vectors instead.

use checksum::{Checksum as _, Joaat16, Joaat32, Joaat64};
use proptest::prelude::*;

proptest! {
  #[test]
  fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Joaat16::checksum(&data), Joaat16::checksum(&data));
    prop_assert_eq!(Joaat32::checksum(&data), Joaat32::checksum(&data));
    prop_assert_eq!(Joaat64::checksum(&data), Joaat64::checksum(&data));
  }

  #[test]
  fn checksum_is_checksum_opt_some(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Joaat16::checksum(&data), Joaat16::checksum_opt(Some(data.as_slice())));
    prop_assert_eq!(Joaat32::checksum(&data), Joaat32::checksum_opt(Some(data.as_slice())));
    prop_assert_eq!(Joaat64::checksum(&data), Joaat64::checksum_opt(Some(data.as_slice())));
  }

  #[test]
  fn const_compute_matches_trait(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
    prop_assert_eq!(Joaat16::compute(Some(data.as_slice())), Joaat16::checksum(&data));
    prop_assert_eq!(Joaat32::compute(Some(data.as_slice())), Joaat32::checksum(&data));
    prop_assert_eq!(Joaat64::compute(Some(data.as_slice())), Joaat64::checksum(&data));
  }

  #[test]
  fn joaat64_order_sensitive(data in proptest::collection::vec(any::<u8>(), 2..512)) {
    let reversed: Vec<u8> = data.iter().rev().copied().collect();
    prop_assume!(reversed != data);
    prop_assert_ne!(Joaat64::checksum(&data), Joaat64::checksum(&reversed));
  }

  #[test]
  fn joaat64_bit_flip_changes_output(
    data in proptest::collection::vec(any::<u8>(), 1..512),
    bit in any::<usize>()
  ) {
    let bit = bit % (data.len() * 8);
    let mut flipped = data.clone();
    flipped[bit / 8] ^= 1 << (bit % 8);
    prop_assert_ne!(Joaat64::checksum(&data), Joaat64::checksum(&flipped));
  }

  #[test]
  fn length_is_part_of_the_value(data in proptest::collection::vec(any::<u8>(), 0..512)) {
    // Appending a zero byte changes the length fold, so even a "neutral"
    // suffix must move the 64-bit checksum.
    let mut extended = data.clone();
    extended.push(0);
    prop_assert_ne!(Joaat64::checksum(&data), Joaat64::checksum(&extended));
  }
}
