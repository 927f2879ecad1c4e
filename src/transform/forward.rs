// Copyright (c) 2018-2019, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Forward 1-D transforms.
//!
//! Every function reads `N` samples from `input[0], input[stride], ...` and
//! writes `N` contiguous coefficients in ascending frequency order.

use super::daala::*;
use super::ops::TxOperations;
use super::perm::*;

#[inline(always)]
fn check_buffers<T>(output: &[T], input: &[T], stride: usize, n: usize) {
  assert!(output.len() >= n, "output holds {} of {n}", output.len());
  assert!(
    input.len() >= strided_len(n, stride),
    "input holds {} of {} at stride {stride}",
    input.len(),
    strided_len(n, stride)
  );
}

macro_rules! impl_fwd_tx {
  ($($(#[$attr:meta])* $name:ident, $n:literal, $kernel:ident, $perm:ident;)+)
    => {
    $(
      $(#[$attr])*
      ///
      /// # Panics
      ///
      /// - If `output` is shorter than the transform
      /// - If `input` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], input: &[T], stride: usize,
      ) {
        check_buffers(output, input, stride, $n);
        let slots = $kernel(load_strided::<T, $n>(input, stride));
        store_permuted(output, 1, &slots, &$perm);
      }
    )+
  };
}

// The precise 4- and 16-point DST-IV kernels take their input reversed and
// leave every odd frequency negated.
macro_rules! impl_fwd_tx_signed {
  ($($(#[$attr:meta])* $name:ident, $n:literal, $kernel:ident, $perm:ident;)+)
    => {
    $(
      $(#[$attr])*
      ///
      /// # Panics
      ///
      /// - If `output` is shorter than the transform
      /// - If `input` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], input: &[T], stride: usize,
      ) {
        check_buffers(output, input, stride, $n);
        let slots = $kernel(std::array::from_fn::<T, $n, _>(|j| {
          input[($n - 1 - j) * stride]
        }));
        store_permuted_signed(output, &slots, &$perm);
      }
    )+
  };
}

impl_fwd_tx! {
  /// 4-point DCT-II built from 3-shear lifting rotations.
  fdct4_precise, 4, daala_fdct_ii_4_precise, BITREV_4;
  /// 4-point DCT-II with flattened rotations.
  fdct4_flat, 4, daala_fdct_ii_4_flat, BITREV_4;
  fdct8_precise, 8, daala_fdct_ii_8_precise, BITREV_8;
  fdct8_flat, 8, daala_fdct_ii_8_flat, BITREV_8;
  fdct16_precise, 16, daala_fdct_ii_16_precise, BITREV_16;
  fdct16_flat, 16, daala_fdct_ii_16_flat, BITREV_16;
  fdct32_precise, 32, daala_fdct_ii_32_precise, BITREV_32;
  fdct32_flat, 32, daala_fdct_ii_32_flat, BITREV_32;
  /// 64-point DCT-II. There is no flattened variant at this size.
  fdct64_precise, 64, daala_fdct_ii_64_precise, BITREV_64;
  fdst4_flat, 4, daala_fdst_iv_4_flat, BITREV_4;
  /// 8-point DST-IV built from 3-shear lifting rotations.
  fdst8_precise, 8, daala_fdst_iv_8_precise, BITREV_8;
  fdst8_flat, 8, daala_fdst_iv_8_flat, BITREV_8;
  fdst16_flat, 16, daala_fdst_iv_16_flat, BITREV_16;
  /// 32-point DST-IV. There is no flattened variant at this size.
  fdst32_precise, 32, daala_fdst_iv_32_precise, BITREV_32;
}

impl_fwd_tx_signed! {
  /// 4-point DST-IV built from 3-shear lifting rotations.
  fdst4_precise, 4, daala_fdst_iv_4_precise, BITREV_REVERSED_4;
  fdst16_precise, 16, daala_fdst_iv_16_precise, BITREV_REVERSED_16;
}

/// 4-point DST-VII. Output is not exactly invertible by [`idst4`].
///
/// [`idst4`]: crate::transform::idst4
///
/// # Panics
///
/// - If `output` is shorter than the transform
/// - If `input` does not cover every strided sample
pub fn fdst4<T: TxOperations>(output: &mut [T], input: &[T], stride: usize) {
  check_buffers(output, input, stride, 4);
  output[..4].copy_from_slice(&daala_fdst_vii_4(load_strided(input, stride)));
}

/// 8-point odd transform computed as a polynomial product modulo
/// `z^8 + 1`.
///
/// # Panics
///
/// - If `output` is shorter than the transform
/// - If `input` does not cover every strided sample
pub fn fdst8_poly<T: TxOperations>(
  output: &mut [T], input: &[T], stride: usize,
) {
  check_buffers(output, input, stride, 8);
  let slots = daala_poly_prod_8(load_strided(input, stride));
  store_permuted(output, 1, &slots, &DST8_POLY_SLOT);
}

macro_rules! impl_fwd_half_right {
  ($($(#[$attr:meta])* $name:ident, $dct:ident;)+) => {
    $(
      $(#[$attr])*
      ///
      /// The first 32 samples pass through to the upper half of the output;
      /// the last 32 are transformed with a 32-point DCT-II into the lower
      /// half.
      ///
      /// # Panics
      ///
      /// - If `output` is shorter than the transform
      /// - If `input` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], input: &[T], stride: usize,
      ) {
        check_buffers(output, input, stride, 64);
        $dct(&mut output[..32], &input[32 * stride..], stride);
        for i in 0..32 {
          output[32 + i] = input[i * stride];
        }
      }
    )+
  };
}

impl_fwd_half_right! {
  /// 64-point half-right odd transform over the precise 32-point DCT-II.
  fdst64_precise, fdct32_precise;
  /// 64-point half-right odd transform over the flattened 32-point DCT-II.
  fdst64_flat, fdct32_flat;
}

#[inline(always)]
fn fidtx<T: TxOperations, const N: usize>(
  output: &mut [T], input: &[T], stride: usize,
) {
  check_buffers(output, input, stride, N);
  for (j, out) in output[..N].iter_mut().enumerate() {
    *out = input[j * stride];
  }
}

macro_rules! impl_fidtx {
  ($($name:ident, $n:literal;)+) => {
    $(
      #[doc = concat!("Forward ", $n, "-point identity transform.")]
      ///
      /// # Panics
      ///
      /// - If `output` is shorter than the transform
      /// - If `input` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], input: &[T], stride: usize,
      ) {
        fidtx::<T, $n>(output, input, stride);
      }
    )+
  };
}

impl_fidtx! {
  fidtx4, 4;
  fidtx8, 8;
  fidtx16, 16;
  fidtx32, 32;
  fidtx64, 64;
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn dct4_impulse() {
    let mut output = [0i32; 4];
    fdct4_precise(&mut output, &[4, 0, 0, 0], 1);
    assert_eq!(output, [2, 3, 2, 1]);
  }

  #[test]
  fn strided_input() {
    let input = [7, 100, -3, 100, 12, 100, 5, 100];
    let mut strided = [0i32; 4];
    let mut contiguous = [0i32; 4];
    fdct4_flat(&mut strided, &input, 2);
    fdct4_flat(&mut contiguous, &[7, -3, 12, 5], 1);
    assert_eq!(strided, contiguous);
  }

  #[test]
  fn half_right_passes_first_half() {
    let input: [i32; 64] = std::array::from_fn(|i| i as i32 - 20);
    let mut output = [0i32; 64];
    fdst64_flat(&mut output, &input, 1);
    assert_eq!(&output[32..], &input[..32]);
    let mut low = [0i32; 32];
    fdct32_flat(&mut low, &input[32..], 1);
    assert_eq!(&output[..32], &low[..]);
  }

  #[test]
  #[should_panic(expected = "input holds 8 of 15 at stride 2")]
  fn short_input_panics() {
    let mut output = [0i32; 8];
    fdct8_precise(&mut output, &[0; 8], 2);
  }
}
