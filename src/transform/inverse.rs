// Copyright (c) 2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Inverse 1-D transforms.
//!
//! Every function reads `N` contiguous coefficients in ascending frequency
//! order and writes `N` samples to `output[0], output[stride], ...`.

use super::daala::*;
use super::ops::TxOperations;
use super::perm::*;

#[inline(always)]
fn check_buffers<T>(output: &[T], stride: usize, input: &[T], n: usize) {
  assert!(input.len() >= n, "input holds {} of {n}", input.len());
  assert!(
    output.len() >= strided_len(n, stride),
    "output holds {} of {} at stride {stride}",
    output.len(),
    strided_len(n, stride)
  );
}

macro_rules! impl_inv_tx {
  ($($(#[$attr:meta])* $name:ident, $n:literal, $kernel:ident, $perm:ident;)+)
    => {
    $(
      $(#[$attr])*
      ///
      /// # Panics
      ///
      /// - If `input` is shorter than the transform
      /// - If `output` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], stride: usize, input: &[T],
      ) {
        check_buffers(output, stride, input, $n);
        let slots = $kernel(load_strided::<T, $n>(input, 1));
        store_permuted(output, stride, &slots, &$perm);
      }
    )+
  };
}

macro_rules! impl_inv_tx_signed {
  ($($(#[$attr:meta])* $name:ident, $n:literal, $kernel:ident, $perm:ident;)+)
    => {
    $(
      $(#[$attr])*
      ///
      /// # Panics
      ///
      /// - If `input` is shorter than the transform
      /// - If `output` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], stride: usize, input: &[T],
      ) {
        check_buffers(output, stride, input, $n);
        let slots = $kernel(load_reversed_signed::<T, $n>(input));
        store_permuted(output, stride, &slots, &$perm);
      }
    )+
  };
}

impl_inv_tx! {
  /// Inverse of [`fdct4_precise`](super::fdct4_precise).
  idct4_precise, 4, daala_idct_ii_4_precise, BITREV_4;
  idct4_flat, 4, daala_idct_ii_4_flat, BITREV_4;
  /// Inverse of [`fdct8_precise`](super::fdct8_precise).
  idct8_precise, 8, daala_idct_ii_8_precise, BITREV_8;
  idct8_flat, 8, daala_idct_ii_8_flat, BITREV_8;
  idct16_precise, 16, daala_idct_ii_16_precise, BITREV_16;
  idct16_flat, 16, daala_idct_ii_16_flat, BITREV_16;
  idct32_precise, 32, daala_idct_ii_32_precise, BITREV_32;
  idct32_flat, 32, daala_idct_ii_32_flat, BITREV_32;
  idct64_precise, 64, daala_idct_ii_64_precise, BITREV_64;
  idst4_flat, 4, daala_idst_iv_4_flat, BITREV_4;
  idst8_precise, 8, daala_idst_iv_8_precise, BITREV_8;
  idst8_flat, 8, daala_idst_iv_8_flat, BITREV_8;
  idst16_flat, 16, daala_idst_iv_16_flat, BITREV_16;
  idst32_precise, 32, daala_idst_iv_32_precise, BITREV_32;
}

impl_inv_tx_signed! {
  /// Inverse of [`fdst4_precise`](super::fdst4_precise).
  idst4_precise, 4, daala_idst_iv_4_precise, BITREV_REVERSED_4;
  /// Inverse of [`fdst16_precise`](super::fdst16_precise).
  idst16_precise, 16, daala_idst_iv_16_precise, BITREV_REVERSED_16;
}

/// 4-point inverse DST-VII.
///
/// # Panics
///
/// - If `input` is shorter than the transform
/// - If `output` does not cover every strided sample
pub fn idst4<T: TxOperations>(output: &mut [T], stride: usize, input: &[T]) {
  check_buffers(output, stride, input, 4);
  let samples = daala_idst_vii_4(load_strided(input, 1));
  for (j, &s) in samples.iter().enumerate() {
    output[j * stride] = s;
  }
}

/// Inverse of [`fdst8_poly`](super::fdst8_poly). The polynomial
/// product is its own inverse up to rounding once the frequencies are put
/// back in product order.
///
/// # Panics
///
/// - If `input` is shorter than the transform
/// - If `output` does not cover every strided sample
pub fn idst8_poly<T: TxOperations>(
  output: &mut [T], stride: usize, input: &[T],
) {
  check_buffers(output, stride, input, 8);
  let coeffs: [T; 8] = std::array::from_fn(|i| input[DST8_POLY_PERM[i]]);
  let samples = daala_poly_prod_8(coeffs);
  for (j, &s) in samples.iter().enumerate() {
    output[j * stride] = s;
  }
}

macro_rules! impl_inv_half_right {
  ($($(#[$attr:meta])* $name:ident, $dct:ident;)+) => {
    $(
      $(#[$attr])*
      ///
      /// # Panics
      ///
      /// - If `input` is shorter than the transform
      /// - If `output` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], stride: usize, input: &[T],
      ) {
        check_buffers(output, stride, input, 64);
        for i in 0..32 {
          output[i * stride] = input[32 + i];
        }
        $dct(&mut output[32 * stride..], stride, &input[..32]);
      }
    )+
  };
}

impl_inv_half_right! {
  /// Inverse of [`fdst64_precise`](super::fdst64_precise).
  idst64_precise, idct32_precise;
  /// Inverse of [`fdst64_flat`](super::fdst64_flat).
  idst64_flat, idct32_flat;
}

#[inline(always)]
fn iidtx<T: TxOperations, const N: usize>(
  output: &mut [T], stride: usize, input: &[T],
) {
  check_buffers(output, stride, input, N);
  for (j, &c) in input[..N].iter().enumerate() {
    output[j * stride] = c;
  }
}

macro_rules! impl_iidtx {
  ($($name:ident, $n:literal;)+) => {
    $(
      #[doc = concat!("Inverse ", $n, "-point identity transform.")]
      ///
      /// # Panics
      ///
      /// - If `input` is shorter than the transform
      /// - If `output` does not cover every strided sample
      pub fn $name<T: TxOperations>(
        output: &mut [T], stride: usize, input: &[T],
      ) {
        iidtx::<T, $n>(output, stride, input);
      }
    )+
  };
}

impl_iidtx! {
  iidtx4, 4;
  iidtx8, 8;
  iidtx16, 16;
  iidtx32, 32;
  iidtx64, 64;
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn strided_output() {
    let coeffs = [40, -12, 7, 3];
    let mut strided = [99i32; 10];
    let mut contiguous = [0i32; 4];
    idct4_precise(&mut strided, 3, &coeffs);
    idct4_precise(&mut contiguous, 1, &coeffs);
    for j in 0..4 {
      assert_eq!(strided[j * 3], contiguous[j]);
    }
    assert_eq!(strided[1], 99);
    assert_eq!(strided[5], 99);
  }

  #[test]
  fn identity_scatters() {
    let mut output = [0i32; 7];
    iidtx4(&mut output, 2, &[1, 2, 3, 4]);
    assert_eq!(output, [1, 0, 2, 0, 3, 0, 4]);
  }

  #[test]
  fn exact_output_fits() {
    let mut output = [1i32; 15];
    idct8_flat(&mut output, 2, &[0; 8]);
    assert_eq!(output, [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0]);
  }

  #[test]
  #[should_panic(expected = "output holds 14 of 15 at stride 2")]
  fn short_output_panics() {
    let mut output = [0i32; 14];
    idct8_flat(&mut output, 2, &[0; 8]);
  }
}
