// Copyright (c) 2019-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use libfuzzer_sys::arbitrary::{Arbitrary, Error, Unstructured};
use log::debug;

use crate::config::{Dst8Kernel, TxConfig, TxFamily};
use crate::transform::perm::strided_len;
use crate::transform::TxfmType;

// Adding new fuzz targets
//
// 1. Add a function to this file taking a type that implements Arbitrary.
// 2. cargo fuzz add something
// 3. Copy fuzz/fuzz_targets/roundtrip.rs to fuzz/fuzz_targets/something.rs
//    and change the function being called to fuzz_something.

#[derive(Debug)]
pub struct ArbitraryBlock {
  txfm_type: TxfmType,
  family: TxFamily,
  stride: usize,
  samples: Vec<i32>,
}

impl Arbitrary<'_> for ArbitraryBlock {
  fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self, Error> {
    let txfm_type = *u.choose(&TxfmType::ALL)?;
    let family = *u.choose(&[TxFamily::Reference, TxFamily::Precise])?;
    let stride = u.int_in_range(1..=4)?;
    let samples = (0..strided_len(txfm_type.size(), stride))
      .map(|_| u.int_in_range(-32768..=32767))
      .collect::<Result<_, _>>()?;
    Ok(Self { txfm_type, family, stride, samples })
  }
}

/// Runs a 16-bit block through a forward and inverse transform on the
/// `i64` backend. The precise family must come back unchanged and every
/// strided sample must be written.
pub fn fuzz_roundtrip(block: ArbitraryBlock) {
  let ArbitraryBlock { txfm_type, family, stride, samples } = block;
  debug!("{txfm_type:?} {family} stride {stride}");
  let config = TxConfig::new(family, Dst8Kernel::Rotation);
  let n = txfm_type.size();
  let input: Vec<i64> = samples.iter().map(|&v| i64::from(v)).collect();
  let mut coeffs = vec![0i64; n];
  let mut output = vec![i64::MIN; input.len()];
  config.forward(txfm_type, &mut coeffs, &input, stride).unwrap();
  config.inverse(txfm_type, &mut output, stride, &coeffs).unwrap();
  for j in 0..n {
    let (x, y) = (input[j * stride], output[j * stride]);
    if family == TxFamily::Precise {
      assert_eq!(x, y, "{txfm_type:?} sample {j}");
    } else {
      assert!(y != i64::MIN, "{txfm_type:?} sample {j} not written");
    }
  }
}
