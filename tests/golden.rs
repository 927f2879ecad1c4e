// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Frozen outputs of every public transform. Any change to the order of a
// sum or the rounding of a rotation shows up here.

use pretty_assertions::assert_eq;

/// Deterministic 8-bit residual pattern.
fn pattern<const N: usize>(seed: i32) -> [i32; N] {
  std::array::from_fn(|j| ((j as i32 * 73 + seed * 29) % 211) - 105)
}

macro_rules! golden_fwd {
  ($($name:ident, $n:literal, $seed:literal => $expected:expr;)+) => {
    $(
      #[test]
      fn $name() {
        let input = super::pattern::<$n>($seed);
        let mut output = [0i32; $n];
        daala_tx::transform::$name(&mut output, &input, 1);
        assert_eq!(output, $expected);
      }
    )+
  };
}

macro_rules! golden_inv {
  ($($name:ident, $n:literal, $seed:literal => $expected:expr;)+) => {
    $(
      #[test]
      fn $name() {
        let input = super::pattern::<$n>($seed);
        let mut output = [0i32; $n];
        daala_tx::transform::$name(&mut output, 1, &input);
        assert_eq!(output, $expected);
      }
    )+
  };
}

#[test]
fn dct4_unit_impulse() {
  let mut output = [0i32; 4];
  daala_tx::transform::fdct4_precise(&mut output, &[4, 0, 0, 0], 1);
  assert_eq!(output, [2, 3, 2, 1]);
  daala_tx::transform::fdct4_flat(&mut output, &[4, 0, 0, 0], 1);
  assert_eq!(output, [2, 3, 2, 1]);
}

// Lifting rounding in the embedded DST stages of the precise 8- and 32-point
// DCTs lets a constant input leak into one AC coefficient past these levels.
#[test]
fn precise_dct_dc_leak() {
  let mut output = [0i32; 8];
  daala_tx::transform::fdct8_precise(&mut output, &[1220; 8], 1);
  assert_eq!(output, [3451, 0, 0, 0, 0, 0, 0, 0]);
  daala_tx::transform::fdct8_precise(&mut output, &[1221; 8], 1);
  assert_eq!(output, [3454, 0, 0, 0, 1, 0, 0, 0]);

  let mut output = [0i32; 32];
  daala_tx::transform::fdct32_precise(&mut output, &[627; 32], 1);
  assert_eq!(output[0], 3547);
  assert!(output[1..].iter().all(|&c| c == 0));
  daala_tx::transform::fdct32_precise(&mut output, &[628; 32], 1);
  let mut expected = [0i32; 32];
  expected[0] = 3553;
  expected[16] = 1;
  assert_eq!(output, expected);
}

mod forward {
  use pretty_assertions::assert_eq;

  golden_fwd! {
    fdct4_precise, 4, 1 => [-39, -25, -106, 46];
    fdct4_flat, 4, 1 => [-39, -25, -106, 46];
    fdst4_precise, 4, 1 => [-18, 17, -120, -14];
    fdst4_flat, 4, 1 => [-18, 18, -120, -14];
    fdst4, 4, 1 => [-23, -6, -118, 26];
    fdct8_precise, 8, 1 => [-15, -30, -40, -18, -75, -83, 97, 7];
    fdct8_flat, 8, 1 => [-15, -29, -41, -19, -74, -83, 98, 8];
    fdst8_precise, 8, 1 => [5, 2, -17, 16, -38, -152, 14, -5];
    fdst8_flat, 8, 1 => [5, 3, -17, 16, -38, -151, 15, -6];
    fdst8_poly, 8, 1 => [1, -5, -31, -5, -74, -119, 73, 8];
    fdct16_precise, 16, 1 => [
      39, -58, -27, -13, -29, -12, -35, -15, -54, -25, -176, 106, 69, 10, 18,
      4,
    ];
    fdct16_flat, 16, 1 => [
      39, -58, -26, -12, -29, -13, -37, -14, -54, -24, -175, 107, 70, 10, 17,
      3,
    ];
    fdst16_precise, 16, 1 => [
      63, -10, -10, 3, -11, 7, -15, 12, -23, 35, -224, -42, 14, -10, 4, -2,
    ];
    fdst16_flat, 16, 1 => [
      65, -11, -11, 4, -11, 8, -14, 16, -21, 33, -225, -41, 12, -9, 4, -4,
    ];
    fdct32_precise, 32, 1 => [
      3, 16, -2, -100, -1, 8, 1, -59, 0, -3, -1, -57, -1, -8, 1, -78, 0, -15,
      1, -179, -1, -95, 1, 221, 0, -7, 0, 58, -1, -16, 1, 31,
    ];
    fdct32_flat, 32, 1 => [
      3, 15, -2, -102, 0, 8, 0, -58, 0, -1, 0, -56, -2, -8, 1, -76, 0, -14, 1,
      -179, -1, -96, 1, 223, 0, -8, 1, 60, 0, -19, 1, 31,
    ];
    fdst32_precise, 32, 1 => [
      -1, 30, 68, -61, -19, 7, 32, -36, -7, 3, 32, -36, -3, -1, 43, -49, -2,
      3, 87, -133, -24, -146, -195, 98, 14, -16, -41, 33, 13, -17, -23, 19,
    ];
    fdct64_precise, 64, 1 => [
      11, -6, 23, -9, 60, -108, -51, -14, -23, -10, 55, -19, -9, -15, -34,
      -46, 19, -15, 9, 11, -7, -48, -1, -42, -13, 8, 16, -27, 18, -47, -43,
      -29, 0, -41, 57, -17, -37, -56, -44, -205, 67, -31, 7, -150, -74, 302,
      35, 72, 50, -12, -56, 35, -12, 21, 49, 26, -16, 15, -25, -21, 18, 16, 4,
      31,
    ];
    fdst64_precise, 64, 1 => [
      14, -13, 84, -27, -34, -69, -13, -12, 28, -15, -12, -58, -20, -32, 28,
      -15, 1, -96, -52, -116, 95, -104, -104, 172, 69, 71, -15, -12, -24, 16,
      26, 27, -76, -3, 70, -68, 5, 78, -60, 13, 86, -52, 21, 94, -44, 29, 102,
      -36, 37, -101, -28, 45, -93, -20, 53, -85, -12, 61, -77, -4, 69, -69, 4,
      77,
    ];
    fdst64_flat, 64, 1 => [
      14, -14, 83, -26, -34, -69, -14, -12, 28, -14, -11, -56, -21, -33, 28,
      -16, 1, -95, -53, -115, 95, -105, -103, 172, 70, 72, -16, -11, -23, 17,
      26, 27, -76, -3, 70, -68, 5, 78, -60, 13, 86, -52, 21, 94, -44, 29, 102,
      -36, 37, -101, -28, 45, -93, -20, 53, -85, -12, 61, -77, -4, 69, -69, 4,
      77,
    ];
    fidtx4, 4, 1 => [-76, -3, 70, -68];
    fidtx8, 8, 1 => [-76, -3, 70, -68, 5, 78, -60, 13];
  }
}

mod inverse {
  use pretty_assertions::assert_eq;

  golden_inv! {
    idct4_precise, 4, 2 => [32, -40, -106, 19];
    idct4_flat, 4, 2 => [33, -40, -106, 19];
    idst4_precise, 4, 2 => [35, 36, -108, -3];
    idst4_flat, 4, 2 => [36, 37, -109, -4];
    idst4, 4, 2 => [52, -2, -106, 5];
    idct8_precise, 8, 2 => [7, 59, -29, -95, 6, -96, -49, 63];
    idct8_flat, 8, 2 => [8, 58, -30, -96, 7, -95, -48, 63];
    idst8_precise, 8, 2 => [-14, 37, 81, -73, 1, -77, -84, 52];
    idst8_flat, 8, 2 => [-14, 38, 80, -74, 2, -77, -85, 52];
    idst8_poly, 8, 2 => [-7, 77, 31, -75, 12, -97, -65, 50];
    idct16_precise, 16, 2 => [
      -36, 65, 35, 28, -18, -21, -67, -35, -78, 51, 6, -183, -7, -11, 38, 42,
    ];
    idct16_flat, 16, 2 => [
      -35, 64, 34, 28, -19, -21, -66, -36, -77, 52, 7, -183, -7, -11, 38, 42,
    ];
    idst16_precise, 16, 2 => [
      -66, -8, 35, 59, 36, 31, -22, -22, -73, -4, 72, -178, -48, -23, 25, 37,
    ];
    idst16_flat, 16, 2 => [
      -66, -9, 34, 59, 37, 32, -19, -22, -73, -3, 73, -177, -47, -24, 23, 37,
    ];
    idct32_precise, 32, 2 => [
      -28, -35, 66, 27, 35, 32, 5, 27, -24, 16, -48, 3, -66, -5, -73, -9, -64,
      -5, -28, 6, 151, -72, -224, 17, -92, 31, -39, 40, -5, 41, 19, 36,
    ];
    idct32_flat, 32, 2 => [
      -28, -34, 67, 26, 37, 32, 6, 27, -24, 17, -48, 3, -65, -5, -73, -8, -64,
      -4, -28, 6, 150, -73, -223, 16, -92, 31, -39, 41, -6, 40, 20, 37,
    ];
    idst32_precise, 32, 2 => [
      -3, -51, -48, 39, -15, 65, 0, 72, 1, 61, -9, 39, -27, 10, -43, -15, -45,
      -36, -22, -48, 147, 46, -231, -16, -99, -1, -45, 17, -6, 30, 18, 30,
    ];
    idct64_precise, 64, 2 => [
      -29, -22, 15, -72, 45, 81, 11, 17, -11, 81, 0, 27, -29, 48, 8, 9, -24,
      4, 15, -15, -21, -33, 14, -28, -23, -52, -3, -16, -35, -45, -34, 15,
      -48, -25, -65, 53, -32, -5, -78, 91, 133, -33, 95, -37, -353, 14, -50,
      33, -108, -14, -4, 21, -20, -30, 26, 13, 28, -27, 35, 20, 42, -8, 18,
      33,
    ];
    idst64_precise, 64, 2 => [
      -32, 41, -97, -24, 49, -89, -16, 57, -81, -8, 65, -73, 0, 73, -65, 8,
      81, -57, 16, 89, -49, 24, 97, -41, 32, 105, -33, 40, -98, -25, 48, -90,
      -28, -35, 66, 27, 35, 32, 5, 27, -24, 16, -48, 3, -66, -5, -73, -9, -64,
      -5, -28, 6, 151, -72, -224, 17, -92, 31, -39, 40, -5, 41, 19, 36,
    ];
    idst64_flat, 64, 2 => [
      -32, 41, -97, -24, 49, -89, -16, 57, -81, -8, 65, -73, 0, 73, -65, 8,
      81, -57, 16, 89, -49, 24, 97, -41, 32, 105, -33, 40, -98, -25, 48, -90,
      -28, -34, 67, 26, 37, 32, 6, 27, -24, 17, -48, 3, -65, -5, -73, -8, -64,
      -4, -28, 6, 150, -73, -223, 16, -92, 31, -39, 41, -6, 40, 20, 37,
    ];
    iidtx4, 4, 2 => [-47, 26, 99, -39];
    iidtx8, 8, 2 => [-47, 26, 99, -39, 34, -104, -31, 42];
  }
}
