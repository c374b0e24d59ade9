//! Fuzz target for the checksum widths.
//!
//! Tests that:
//! - Computation never panics, whatever the buffer contents
//! - Repeated computation over the same bytes is deterministic
//! - The const entry points agree with the trait entry points
//! - An absent buffer is 0 for every width

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Joaat16, Joaat32, Joaat64};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = input.data.as_slice();

  let s16 = Joaat16::checksum(data);
  let s32 = Joaat32::checksum(data);
  let s64 = Joaat64::checksum(data);

  assert_eq!(s16, Joaat16::checksum(data), "joaat16 nondeterministic");
  assert_eq!(s32, Joaat32::checksum(data), "joaat32 nondeterministic");
  assert_eq!(s64, Joaat64::checksum(data), "joaat64 nondeterministic");

  assert_eq!(s16, Joaat16::compute(Some(data)), "joaat16 const mismatch");
  assert_eq!(s32, Joaat32::compute(Some(data)), "joaat32 const mismatch");
  assert_eq!(s64, Joaat64::compute(Some(data)), "joaat64 const mismatch");

  assert_eq!(Joaat16::checksum_opt(None), 0);
  assert_eq!(Joaat32::checksum_opt(None), 0);
  assert_eq!(Joaat64::checksum_opt(None), 0);
});
