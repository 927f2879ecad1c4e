// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Fixed-point 1-D transforms.

pub use self::forward::*;
pub use self::inverse::*;

use crate::config::TxError;

pub mod daala;
mod forward;
mod inverse;
pub mod ops;
pub mod perm;

/// Forward transform: `(output, input, input_stride)`.
pub type FwdTxfmFn<T> = fn(&mut [T], &[T], usize);
/// Inverse transform: `(output, output_stride, input)`.
pub type InvTxfmFn<T> = fn(&mut [T], usize, &[T]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxfmKind {
  DCT,
  DST,
  Identity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TxfmType {
  DCT4,
  DCT8,
  DCT16,
  DCT32,
  DCT64,
  DST4,
  DST8,
  DST16,
  DST32,
  DST64,
  Identity4,
  Identity8,
  Identity16,
  Identity32,
  Identity64,
}

impl TxfmType {
  pub const ALL: [TxfmType; 15] = {
    use TxfmType::*;
    [
      DCT4, DCT8, DCT16, DCT32, DCT64, DST4, DST8, DST16, DST32, DST64,
      Identity4, Identity8, Identity16, Identity32, Identity64,
    ]
  };

  /// Looks up the transform of `kind` with `size` points.
  ///
  /// # Errors
  ///
  /// Returns `TxError::InvalidSize` unless `size` is 4, 8, 16, 32 or 64.
  pub fn new(kind: TxfmKind, size: usize) -> Result<Self, TxError> {
    if !size.is_power_of_two() || !(4..=64).contains(&size) {
      return Err(TxError::InvalidSize(size));
    }
    let idx = size.trailing_zeros() as usize - 2;
    let base = match kind {
      TxfmKind::DCT => 0,
      TxfmKind::DST => 5,
      TxfmKind::Identity => 10,
    };
    Ok(Self::ALL[base + idx])
  }

  #[inline]
  pub const fn size(self) -> usize {
    use TxfmType::*;
    match self {
      DCT4 | DST4 | Identity4 => 4,
      DCT8 | DST8 | Identity8 => 8,
      DCT16 | DST16 | Identity16 => 16,
      DCT32 | DST32 | Identity32 => 32,
      DCT64 | DST64 | Identity64 => 64,
    }
  }

  #[inline]
  pub const fn kind(self) -> TxfmKind {
    use TxfmType::*;
    match self {
      DCT4 | DCT8 | DCT16 | DCT32 | DCT64 => TxfmKind::DCT,
      DST4 | DST8 | DST16 | DST32 | DST64 => TxfmKind::DST,
      Identity4 | Identity8 | Identity16 | Identity32 | Identity64 => {
        TxfmKind::Identity
      }
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::config::{Dst8Kernel, TxConfig, TxFamily};
  use interpolate_name::interpolate_test;
  use rand::{Rng, SeedableRng};
  use rand_chacha::ChaChaRng;
  use std::f64::consts::PI;

  struct TxPair {
    name: &'static str,
    fwd: FwdTxfmFn<i32>,
    inv: InvTxfmFn<i32>,
  }

  macro_rules! pairs {
    ($($fwd:ident / $inv:ident),+ $(,)?) => {
      vec![$(TxPair {
        name: stringify!($fwd),
        fwd: $fwd::<i32>,
        inv: $inv::<i32>,
      }),+]
    };
  }

  fn precise_pairs(n: usize) -> Vec<TxPair> {
    match n {
      4 => pairs![
        fdct4_precise / idct4_precise,
        fdst4_precise / idst4_precise,
        fidtx4 / iidtx4,
      ],
      8 => pairs![
        fdct8_precise / idct8_precise,
        fdst8_precise / idst8_precise,
        fidtx8 / iidtx8,
      ],
      16 => pairs![
        fdct16_precise / idct16_precise,
        fdst16_precise / idst16_precise,
        fidtx16 / iidtx16,
      ],
      32 => pairs![
        fdct32_precise / idct32_precise,
        fdst32_precise / idst32_precise,
        fidtx32 / iidtx32,
      ],
      64 => pairs![
        fdct64_precise / idct64_precise,
        fdst64_precise / idst64_precise,
        fidtx64 / iidtx64,
      ],
      _ => unreachable!(),
    }
  }

  fn approximate_pairs(n: usize) -> Vec<TxPair> {
    match n {
      4 => pairs![fdct4_flat / idct4_flat, fdst4_flat / idst4_flat],
      8 => pairs![fdct8_flat / idct8_flat, fdst8_flat / idst8_flat],
      16 => pairs![fdct16_flat / idct16_flat, fdst16_flat / idst16_flat],
      32 => pairs![fdct32_flat / idct32_flat],
      64 => pairs![fdst64_flat / idst64_flat],
      _ => unreachable!(),
    }
  }

  // DST-VII kernels, checked against their own basis.
  fn odd_pairs(n: usize) -> Vec<TxPair> {
    match n {
      4 => pairs![fdst4 / idst4],
      8 => pairs![fdst8_poly / idst8_poly],
      _ => Vec::new(),
    }
  }

  // Largest sample magnitude exercised per size. Keeps every rotation
  // product of the i32 backend well inside 31 bits.
  fn max_sample(n: usize) -> i32 {
    match n {
      4 => 4095,
      8 => 2047,
      16 | 32 => 1023,
      _ => 511,
    }
  }

  fn random_input(ra: &mut ChaChaRng, n: usize, max: i32) -> Vec<i32> {
    (0..n).map(|_| ra.gen_range(-max..=max)).collect()
  }

  // Orthonormal floating-point definitions of the forward transforms.
  fn float_dct(x: &[f64]) -> Vec<f64> {
    let n = x.len() as f64;
    (0..x.len())
      .map(|k| {
        let scale = if k == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
        let sum: f64 = x
          .iter()
          .enumerate()
          .map(|(j, &v)| {
            v * (PI * (2 * j + 1) as f64 * k as f64 / (2.0 * n)).cos()
          })
          .sum();
        scale * sum
      })
      .collect()
  }

  fn float_dst_iv(x: &[f64]) -> Vec<f64> {
    let n = x.len() as f64;
    (0..x.len())
      .map(|k| {
        let sum: f64 = x
          .iter()
          .enumerate()
          .map(|(j, &v)| {
            v * (PI * ((2 * j + 1) * (2 * k + 1)) as f64 / (4.0 * n)).sin()
          })
          .sum();
        (2.0 / n).sqrt() * sum
      })
      .collect()
  }

  // sqrt(4/(2N+1)) sin(pi (j+1)(2k+1)/(2N+1))
  fn float_dst_vii(x: &[f64]) -> Vec<f64> {
    let m = (2 * x.len() + 1) as f64;
    (0..x.len())
      .map(|k| {
        let sum: f64 = x
          .iter()
          .enumerate()
          .map(|(j, &v)| {
            v * (PI * ((j + 1) * (2 * k + 1)) as f64 / m).sin()
          })
          .sum();
        (4.0 / m).sqrt() * sum
      })
      .collect()
  }

  fn float_half_right(x: &[f64]) -> Vec<f64> {
    let mut y = float_dct(&x[32..]);
    y.extend_from_slice(&x[..32]);
    y
  }

  fn float_reference(name: &str) -> fn(&[f64]) -> Vec<f64> {
    if name.starts_with("fdct") {
      float_dct
    } else if name.starts_with("fdst64") {
      float_half_right
    } else if name.starts_with("fdst") {
      float_dst_iv
    } else {
      <[f64]>::to_vec
    }
  }

  fn assert_close(
    name: &str, input: &[i32], actual: &[i32], expected: &[f64], tol: f64,
  ) {
    for (k, (&a, &e)) in actual.iter().zip(expected).enumerate() {
      assert!(
        (f64::from(a) - e).abs() <= tol,
        "{name}: coefficient {k} is {a}, expected {e:.2} for {input:?}"
      );
    }
  }

  #[interpolate_test(4, 4)]
  #[interpolate_test(8, 8)]
  #[interpolate_test(16, 16)]
  #[interpolate_test(32, 32)]
  #[interpolate_test(64, 64)]
  fn precise_roundtrip(n: usize) {
    let mut ra = ChaChaRng::from_seed([0; 32]);
    let mut coeffs = vec![0; n];
    let mut output = vec![0; n];
    for pair in precise_pairs(n) {
      for _ in 0..200 {
        let input = random_input(&mut ra, n, max_sample(n));
        (pair.fwd)(&mut coeffs, &input, 1);
        (pair.inv)(&mut output, 1, &coeffs);
        assert_eq!(output, input, "{}", pair.name);
      }
    }
  }

  #[interpolate_test(4, 4)]
  #[interpolate_test(8, 8)]
  #[interpolate_test(16, 16)]
  #[interpolate_test(32, 32)]
  #[interpolate_test(64, 64)]
  fn approximate_roundtrip(n: usize) {
    let mut ra = ChaChaRng::from_seed([1; 32]);
    let mut coeffs = vec![0; n];
    let mut output = vec![0; n];
    let mut pairs = approximate_pairs(n);
    pairs.extend(odd_pairs(n));
    for pair in pairs {
      let tolerance = if pair.name == "fdst8_poly" { 16 } else { 8 };
      for _ in 0..200 {
        let input = random_input(&mut ra, n, max_sample(n));
        (pair.fwd)(&mut coeffs, &input, 1);
        (pair.inv)(&mut output, 1, &coeffs);
        for (&x, &y) in input.iter().zip(&output) {
          assert!(
            (x - y).abs() <= tolerance,
            "{}: {x} came back as {y}",
            pair.name
          );
        }
      }
    }
  }

  #[interpolate_test(4, 4)]
  #[interpolate_test(8, 8)]
  #[interpolate_test(16, 16)]
  #[interpolate_test(32, 32)]
  #[interpolate_test(64, 64)]
  fn approximates_float_basis(n: usize) {
    let mut ra = ChaChaRng::from_seed([2; 32]);
    let mut coeffs = vec![0; n];
    let mut pairs = precise_pairs(n);
    pairs.extend(approximate_pairs(n));
    for pair in pairs {
      let reference = float_reference(pair.name);
      for _ in 0..100 {
        let input = random_input(&mut ra, n, max_sample(n).min(1023));
        let x: Vec<f64> = input.iter().map(|&v| f64::from(v)).collect();
        (pair.fwd)(&mut coeffs, &input, 1);
        assert_close(pair.name, &input, &coeffs, &reference(&x), 8.0);
      }
    }
  }

  #[test]
  fn dst_vii_approximates_float_basis() {
    let mut ra = ChaChaRng::from_seed([3; 32]);
    let mut coeffs = [0; 4];
    for _ in 0..500 {
      let input = random_input(&mut ra, 4, 1023);
      let x: Vec<f64> = input.iter().map(|&v| f64::from(v)).collect();
      fdst4(&mut coeffs, &input, 1);
      assert_close("fdst4", &input, &coeffs, &float_dst_vii(&x), 4.0);
    }
  }

  // The polynomial kernel computes the 8-point DST-VII, the odd transform
  // of length 2*8 + 1 = 17.
  #[test]
  fn dst8_poly_approximates_float_basis() {
    let mut ra = ChaChaRng::from_seed([4; 32]);
    let mut coeffs = [0; 8];
    for _ in 0..500 {
      let input = random_input(&mut ra, 8, 1023);
      let x: Vec<f64> = input.iter().map(|&v| f64::from(v)).collect();
      fdst8_poly(&mut coeffs, &input, 1);
      assert_close("fdst8_poly", &input, &coeffs, &float_dst_vii(&x), 12.0);
    }
  }

  #[interpolate_test(4, 4)]
  #[interpolate_test(8, 8)]
  #[interpolate_test(16, 16)]
  #[interpolate_test(32, 32)]
  #[interpolate_test(64, 64)]
  fn zero_in_zero_out(n: usize) {
    let mut pairs = precise_pairs(n);
    pairs.extend(approximate_pairs(n));
    pairs.extend(odd_pairs(n));
    let zeros = vec![0; 64];
    for pair in pairs {
      let mut output = vec![1; 64];
      (pair.fwd)(&mut output, &zeros, 1);
      assert!(output.iter().take(n).all(|&c| c == 0), "{}", pair.name);
      let mut output = vec![1; 64];
      (pair.inv)(&mut output, 1, &zeros);
      assert!(output.iter().take(n).all(|&c| c == 0), "{}", pair.name);
    }
  }

  #[test]
  fn dc_only() {
    let dcts: [(FwdTxfmFn<i32>, usize); 9] = [
      (fdct4_precise, 4),
      (fdct4_flat, 4),
      (fdct8_precise, 8),
      (fdct8_flat, 8),
      (fdct16_precise, 16),
      (fdct16_flat, 16),
      (fdct32_precise, 32),
      (fdct32_flat, 32),
      (fdct64_precise, 64),
    ];
    for &(fwd, n) in dcts.iter() {
      let mut coeffs = vec![0; n];
      for c in -255..=255 {
        fwd(&mut coeffs, &vec![c; n], 1);
        assert!(coeffs[1..].iter().all(|&v| v == 0), "N = {n}, c = {c}");
      }
    }
  }

  #[test]
  fn dc_gain() {
    // 64 * sqrt(N / 4)
    let expected = [(4, 128), (8, 181), (16, 256), (32, 362), (64, 512)];
    for &family in &[TxFamily::Reference, TxFamily::Precise] {
      let config = TxConfig::new(family, Dst8Kernel::Rotation);
      for &(n, dc) in expected.iter() {
        let t = TxfmType::new(TxfmKind::DCT, n).unwrap();
        let mut coeffs = vec![0; n];
        config.forward(t, &mut coeffs, &vec![64; n], 1).unwrap();
        assert_eq!(coeffs[0], dc, "{family:?} N = {n}");
      }
    }
  }

  #[interpolate_test(4, 4)]
  #[interpolate_test(8, 8)]
  #[interpolate_test(16, 16)]
  #[interpolate_test(32, 32)]
  #[interpolate_test(64, 64)]
  fn strided_matches_contiguous(n: usize) {
    let mut ra = ChaChaRng::from_seed([5; 32]);
    let stride = 3;
    let mut pairs = precise_pairs(n);
    pairs.extend(approximate_pairs(n));
    for pair in pairs {
      let input = random_input(&mut ra, n, 255);
      let mut spread = vec![i32::MAX; (n - 1) * stride + 1];
      for (j, &v) in input.iter().enumerate() {
        spread[j * stride] = v;
      }
      let mut from_strided = vec![0; n];
      let mut from_contiguous = vec![0; n];
      (pair.fwd)(&mut from_strided, &spread, stride);
      (pair.fwd)(&mut from_contiguous, &input, 1);
      assert_eq!(from_strided, from_contiguous, "{}", pair.name);

      let mut output = vec![i32::MIN; (n - 1) * stride + 1];
      let mut expected = vec![0; n];
      (pair.inv)(&mut output, stride, &from_contiguous);
      (pair.inv)(&mut expected, 1, &from_contiguous);
      for (j, &v) in output.iter().enumerate() {
        if j % stride == 0 {
          assert_eq!(v, expected[j / stride], "{}", pair.name);
        } else {
          assert_eq!(v, i32::MIN, "{} wrote between samples", pair.name);
        }
      }
    }
  }

  #[test]
  fn backends_agree() {
    let mut ra = ChaChaRng::from_seed([6; 32]);
    for &family in &[TxFamily::Reference, TxFamily::Precise] {
      let config = TxConfig::new(family, Dst8Kernel::Rotation);
      for &t in TxfmType::ALL.iter() {
        let n = t.size();
        let input = random_input(&mut ra, n, max_sample(n));
        let wide: Vec<i64> = input.iter().map(|&v| i64::from(v)).collect();
        let mut narrow_out = vec![0i32; n];
        let mut wide_out = vec![0i64; n];
        config.forward(t, &mut narrow_out, &input, 1).unwrap();
        config.forward(t, &mut wide_out, &wide, 1).unwrap();
        let widened: Vec<i64> =
          narrow_out.iter().map(|&v| i64::from(v)).collect();
        assert_eq!(widened, wide_out, "{t:?}");
      }
    }
  }

  // Full-scale inputs at the per-size budget, run through every kernel on
  // the i32 backend. With `check_overflow` this asserts on every rotation
  // product.
  #[test]
  fn sample_budget_never_overflows() {
    let mut ra = ChaChaRng::from_seed([9; 32]);
    let configs = [
      TxConfig::new(TxFamily::Reference, Dst8Kernel::Rotation),
      TxConfig::new(TxFamily::Reference, Dst8Kernel::Polynomial),
      TxConfig::new(TxFamily::Precise, Dst8Kernel::Rotation),
      TxConfig::new(TxFamily::Flat, Dst8Kernel::Rotation),
    ];
    for config in configs.iter() {
      for &t in TxfmType::ALL.iter() {
        let (Ok(fwd), Ok(inv)) =
          (config.forward_fn::<i32>(t), config.inverse_fn::<i32>(t))
        else {
          continue;
        };
        let n = t.size();
        let m = max_sample(n);
        let mut coeffs = vec![0; n];
        let mut output = vec![0; n];
        for i in 0..64 {
          let input: Vec<i32> = match i {
            0 => vec![m; n],
            1 => vec![-m; n],
            2 => (0..n).map(|j| if j & 1 == 0 { m } else { -m }).collect(),
            _ => (0..n).map(|_| if ra.gen() { m } else { -m }).collect(),
          };
          fwd(&mut coeffs, &input, 1);
          inv(&mut output, 1, &coeffs);
          if config.family == TxFamily::Precise {
            assert_eq!(output, input, "{t:?}");
          }
        }
      }
    }
  }

  #[test]
  fn deterministic() {
    let mut ra = ChaChaRng::from_seed([7; 32]);
    let input = random_input(&mut ra, 64, 511);
    for pair in precise_pairs(64) {
      let mut first = vec![0; 64];
      let mut second = vec![0; 64];
      (pair.fwd)(&mut first, &input, 1);
      (pair.fwd)(&mut second, &input, 1);
      assert_eq!(first, second, "{}", pair.name);
    }
  }

  #[interpolate_test(4, 4)]
  #[interpolate_test(8, 8)]
  #[interpolate_test(16, 16)]
  #[interpolate_test(32, 32)]
  fn precise_and_flat_agree(n: usize) {
    let mut ra = ChaChaRng::from_seed([8; 32]);
    // Both lists start with the DCT, then the DST where one exists.
    for (p, f) in precise_pairs(n).iter().zip(&approximate_pairs(n)) {
      for _ in 0..100 {
        let input = random_input(&mut ra, n, 1023);
        let mut a = vec![0; n];
        let mut b = vec![0; n];
        (p.fwd)(&mut a, &input, 1);
        (f.fwd)(&mut b, &input, 1);
        for (&x, &y) in a.iter().zip(&b) {
          assert!((x - y).abs() <= 8, "{} vs {}: {x} {y}", p.name, f.name);
        }
      }
    }
  }

  #[test]
  fn type_lookup() {
    for &t in TxfmType::ALL.iter() {
      assert_eq!(TxfmType::new(t.kind(), t.size()), Ok(t));
    }
    assert_eq!(TxfmType::new(TxfmKind::DST, 2), Err(TxError::InvalidSize(2)));
    assert_eq!(
      TxfmType::new(TxfmKind::DCT, 24),
      Err(TxError::InvalidSize(24))
    );
    assert_eq!(
      TxfmType::new(TxfmKind::Identity, 128),
      Err(TxError::InvalidSize(128))
    );
  }
}
