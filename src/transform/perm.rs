// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Slot orderings of the transform kernels.
//!
//! The composer kernels produce (and consume) coefficients in bit-reversed
//! frequency order. Entry `k` of a table names the kernel slot that holds
//! frequency `k`. Every bit-reversal table is its own inverse.

use crate::transform::ops::TxOperations;

pub const BITREV_4: [usize; 4] = [0, 2, 1, 3];

pub const BITREV_8: [usize; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

pub const BITREV_16: [usize; 16] = [
  0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15,
];

pub const BITREV_32: [usize; 32] = [
  0, 16, 8, 24, 4, 20, 12, 28, 2, 18, 10, 26, 6, 22, 14, 30, 1, 17, 9, 25, 5,
  21, 13, 29, 3, 19, 11, 27, 7, 23, 15, 31,
];

pub const BITREV_64: [usize; 64] = [
  0, 32, 16, 48, 8, 40, 24, 56, 4, 36, 20, 52, 12, 44, 28, 60, 2, 34, 18, 50,
  10, 42, 26, 58, 6, 38, 22, 54, 14, 46, 30, 62, 1, 33, 17, 49, 9, 41, 25, 57,
  5, 37, 21, 53, 13, 45, 29, 61, 3, 35, 19, 51, 11, 43, 27, 59, 7, 39, 23, 55,
  15, 47, 31, 63,
];

/// Bit reversal of `N - 1 - k`, the order of the precise 4- and 16-point
/// DST-IV kernels. Those kernels are built to be embedded with their input
/// reversed and every other output negated.
pub const BITREV_REVERSED_4: [usize; 4] = [3, 1, 2, 0];

pub const BITREV_REVERSED_16: [usize; 16] = [
  15, 7, 11, 3, 13, 5, 9, 1, 14, 6, 10, 2, 12, 4, 8, 0,
];

/// Frequency produced by each output of the 8-point polynomial product.
pub const DST8_POLY_PERM: [usize; 8] = [0, 7, 1, 6, 2, 5, 3, 4];

/// Inverse of [`DST8_POLY_PERM`]: output slot holding each frequency.
pub const DST8_POLY_SLOT: [usize; 8] = [0, 2, 4, 6, 7, 5, 3, 1];

/// Returns the number of elements a buffer needs to hold `n` samples spaced
/// `stride` apart.
#[inline]
pub const fn strided_len(n: usize, stride: usize) -> usize {
  (n - 1) * stride + 1
}

/// Gathers `N` samples spaced `stride` apart.
#[inline(always)]
pub fn load_strided<T: Copy, const N: usize>(
  input: &[T], stride: usize,
) -> [T; N] {
  std::array::from_fn(|j| input[j * stride])
}

/// Writes `slots[perm[k]]` to `output[k * stride]` for every `k`.
#[inline(always)]
pub fn store_permuted<T: Copy, const N: usize>(
  output: &mut [T], stride: usize, slots: &[T; N], perm: &[usize; N],
) {
  for (k, &p) in perm.iter().enumerate() {
    output[k * stride] = slots[p];
  }
}

/// Loads `N` contiguous coefficients in reverse, negating the ones at even
/// slots. This undoes the output signs of the embedded DST-IV kernels.
#[inline(always)]
pub fn load_reversed_signed<T: TxOperations, const N: usize>(
  input: &[T],
) -> [T; N] {
  std::array::from_fn(|j| {
    let c = input[N - 1 - j];
    if j & 1 == 0 {
      c.neg()
    } else {
      c
    }
  })
}

/// Writes `slots[perm[k]]` to `output[k]`, negating the odd frequencies.
#[inline(always)]
pub fn store_permuted_signed<T: TxOperations, const N: usize>(
  output: &mut [T], slots: &[T; N], perm: &[usize; N],
) {
  for (k, &p) in perm.iter().enumerate() {
    output[k] = if k & 1 == 0 { slots[p] } else { slots[p].neg() };
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn compose<const N: usize>(a: &[usize; N], b: &[usize; N]) -> [usize; N] {
    std::array::from_fn(|k| a[b[k]])
  }

  fn identity<const N: usize>() -> [usize; N] {
    std::array::from_fn(|k| k)
  }

  fn bit_reverse(k: usize, n: usize) -> usize {
    k.reverse_bits() >> (usize::BITS - n.trailing_zeros())
  }

  #[test]
  fn tables_are_bit_reversals() {
    fn check<const N: usize>(table: &[usize; N]) {
      for (k, &p) in table.iter().enumerate() {
        assert_eq!(p, bit_reverse(k, N), "N = {N}, k = {k}");
      }
    }
    check(&BITREV_4);
    check(&BITREV_8);
    check(&BITREV_16);
    check(&BITREV_32);
    check(&BITREV_64);
    for k in 0..16 {
      assert_eq!(BITREV_REVERSED_16[k], bit_reverse(15 - k, 16));
    }
    for k in 0..4 {
      assert_eq!(BITREV_REVERSED_4[k], bit_reverse(3 - k, 4));
    }
  }

  #[test]
  fn tables_compose_to_identity() {
    assert_eq!(compose(&BITREV_4, &BITREV_4), identity());
    assert_eq!(compose(&BITREV_8, &BITREV_8), identity());
    assert_eq!(compose(&BITREV_16, &BITREV_16), identity());
    assert_eq!(compose(&BITREV_32, &BITREV_32), identity());
    assert_eq!(compose(&BITREV_64, &BITREV_64), identity());
    assert_eq!(compose(&BITREV_REVERSED_4, &BITREV_REVERSED_4), identity());
    assert_eq!(
      compose(&BITREV_REVERSED_16, &BITREV_REVERSED_16),
      identity()
    );
    assert_eq!(compose(&DST8_POLY_PERM, &DST8_POLY_SLOT), identity());
    assert_eq!(compose(&DST8_POLY_SLOT, &DST8_POLY_PERM), identity());
  }

  #[test]
  fn strided_helpers() {
    let input = [1, -1, 2, -2, 3, -3, 4, -4];
    assert_eq!(strided_len(4, 2), 7);
    let slots: [i32; 4] = load_strided(&input, 2);
    assert_eq!(slots, [1, 2, 3, 4]);
    let mut output = [0; 7];
    store_permuted(&mut output, 2, &slots, &BITREV_4);
    assert_eq!(output, [1, 0, 3, 0, 2, 0, 4]);
  }

  #[test]
  fn signed_helpers() {
    let slots: [i32; 4] = load_reversed_signed(&[1, 2, 3, 4]);
    assert_eq!(slots, [-4, 3, -2, 1]);
    let mut output = [0; 4];
    store_permuted_signed(&mut output, &[1, 2, 3, 4], &BITREV_REVERSED_4);
    assert_eq!(output, [4, -2, 3, -1]);
  }
}
