// Copyright (c) 2018-2019, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use std::fmt::Debug;

cfg_if::cfg_if! {
  if #[cfg(feature = "check_overflow")] {
    /// Asserts that `val * scale + offset` is representable in an `i32`.
    #[inline(always)]
    fn check_overflow(val: i32, scale: i32, offset: i32) {
      let wide = i64::from(val) * i64::from(scale) + i64::from(offset);
      debug_assert!(
        i32::try_from(wide).is_ok(),
        "rotation overflow: {val} * {scale} + {offset} = {wide}"
      );
    }
  } else {
    #[inline(always)]
    fn check_overflow(_val: i32, _scale: i32, _offset: i32) {}
  }
}

/// Fixed-point arithmetic used by every transform kernel.
///
/// The kernels only ever combine coefficients through these operations, so
/// the rounding of each step is pinned down here and is identical for every
/// implementation.
pub trait TxOperations: Copy + Debug + PartialEq {
  fn zero() -> Self;

  /// Multiplies by `mul / 2^SHIFT`, rounding half up:
  /// `(self * mul + (1 << (SHIFT - 1))) >> SHIFT`.
  fn tx_mul<const SHIFT: i32>(self, mul: i32) -> Self;
  /// Halves with the parity correction `(self + (self < 0)) >> 1`, which
  /// rounds towards zero.
  fn rshift1(self) -> Self;
  /// Floor of half, `self >> 1`.
  fn half(self) -> Self;
  fn add(self, b: Self) -> Self;
  fn sub(self, b: Self) -> Self;
  fn neg(self) -> Self;
  /// `(self + b + 1) >> 1`
  fn add_avg(self, b: Self) -> Self;
  /// `(self - b + 1) >> 1`
  fn sub_avg(self, b: Self) -> Self;
}

impl TxOperations for i32 {
  fn zero() -> Self {
    0
  }

  #[inline(always)]
  fn tx_mul<const SHIFT: i32>(self, mul: i32) -> Self {
    check_overflow(self, mul, 1 << SHIFT >> 1);
    ((self * mul) + (1 << SHIFT >> 1)) >> SHIFT
  }

  #[inline(always)]
  fn rshift1(self) -> Self {
    (self + i32::from(self < 0)) >> 1
  }

  #[inline(always)]
  fn half(self) -> Self {
    self >> 1
  }

  #[inline(always)]
  fn add(self, b: Self) -> Self {
    self + b
  }

  #[inline(always)]
  fn sub(self, b: Self) -> Self {
    self - b
  }

  #[inline(always)]
  fn neg(self) -> Self {
    -self
  }

  #[inline(always)]
  fn add_avg(self, b: Self) -> Self {
    (self + b + 1) >> 1
  }

  #[inline(always)]
  fn sub_avg(self, b: Self) -> Self {
    (self - b + 1) >> 1
  }
}

// Wide intermediates for inputs that exceed the i32 guard-bit budget. No
// overflow check: the products of any i32 input fit comfortably.
impl TxOperations for i64 {
  fn zero() -> Self {
    0
  }

  #[inline(always)]
  fn tx_mul<const SHIFT: i32>(self, mul: i32) -> Self {
    ((self * i64::from(mul)) + (1 << SHIFT >> 1)) >> SHIFT
  }

  #[inline(always)]
  fn rshift1(self) -> Self {
    (self + i64::from(self < 0)) >> 1
  }

  #[inline(always)]
  fn half(self) -> Self {
    self >> 1
  }

  #[inline(always)]
  fn add(self, b: Self) -> Self {
    self + b
  }

  #[inline(always)]
  fn sub(self, b: Self) -> Self {
    self - b
  }

  #[inline(always)]
  fn neg(self) -> Self {
    -self
  }

  #[inline(always)]
  fn add_avg(self, b: Self) -> Self {
    (self + b + 1) >> 1
  }

  #[inline(always)]
  fn sub_avg(self, b: Self) -> Self {
    (self - b + 1) >> 1
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn rshift1_rounds_towards_zero() {
    assert_eq!(7i32.rshift1(), 3);
    assert_eq!((-7i32).rshift1(), -3);
    assert_eq!((-1i32).rshift1(), 0);
    assert_eq!((-8i64).rshift1(), -4);
  }

  #[test]
  fn half_rounds_down() {
    assert_eq!(7i32.half(), 3);
    assert_eq!((-7i32).half(), -4);
  }

  #[test]
  fn tx_mul_rounds_half_up() {
    // 11585/16384 ~= 1/sqrt(2)
    assert_eq!(100i32.tx_mul::<14>(11585), 71);
    assert_eq!((-100i32).tx_mul::<14>(11585), -71);
    assert_eq!(1i32.tx_mul::<1>(1), 1);
    assert_eq!((-1i32).tx_mul::<1>(1), 0);
    assert_eq!(3i32.tx_mul::<15>(-5995), (-5995 * 3 + 16384) >> 15);
  }

  #[test]
  fn averages_round_up() {
    assert_eq!(3i32.add_avg(4), 4);
    assert_eq!((-3i32).add_avg(-4), -3);
    assert_eq!(3i32.sub_avg(4), 0);
    assert_eq!(3i64.sub_avg(-4), 4);
  }

  #[cfg(all(feature = "check_overflow", debug_assertions))]
  #[test]
  #[should_panic(expected = "rotation overflow")]
  fn overflowing_rotation_asserts() {
    // 2^20 * 46341 needs 36 bits.
    let _ = (1i32 << 20).tx_mul::<15>(46341);
  }

  #[test]
  fn backends_agree() {
    for v in -300i32..300 {
      let a = v.tx_mul::<13>(3393);
      let b = i64::from(v).tx_mul::<13>(3393);
      assert_eq!(i64::from(a), b);
      assert_eq!(i64::from(v.rshift1()), i64::from(v).rshift1());
    }
  }
}
