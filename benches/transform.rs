// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use criterion::*;
use daala_tx::{Dst8Kernel, TxConfig, TxFamily, TxfmType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

fn init_buffers(size: usize) -> (Vec<i32>, Vec<i32>) {
  let mut ra = ChaChaRng::from_seed([0; 32]);
  let input: Vec<i32> = (0..size).map(|_| ra.gen_range(-255..=255)).collect();
  let output = vec![0i32; size];

  (input, output)
}

fn bench_family(c: &mut Criterion, family: TxFamily, dst8: Dst8Kernel) {
  let config = TxConfig::new(family, dst8);
  for &t in TxfmType::ALL.iter() {
    let (Ok(fwd), Ok(inv)) =
      (config.forward_fn::<i32>(t), config.inverse_fn::<i32>(t))
    else {
      continue;
    };
    let n = t.size();
    let (input, mut output) = init_buffers(n);
    c.bench_function(&format!("f{t:?}_{family}_{dst8}"), |b| {
      b.iter(|| fwd(&mut output, black_box(&input), 1))
    });
    c.bench_function(&format!("i{t:?}_{family}_{dst8}"), |b| {
      b.iter(|| inv(&mut output, 1, black_box(&input)))
    });
  }
}

pub fn reference(c: &mut Criterion) {
  bench_family(c, TxFamily::Reference, Dst8Kernel::Rotation);
}

pub fn precise(c: &mut Criterion) {
  bench_family(c, TxFamily::Precise, Dst8Kernel::Rotation);
}

pub fn dst8(c: &mut Criterion) {
  let (input, mut output) = init_buffers(8);
  c.bench_function("fdst8_precise", |b| {
    b.iter(|| daala_tx::transform::fdst8_precise(&mut output, &input, 1))
  });
  c.bench_function("fdst8_flat", |b| {
    b.iter(|| daala_tx::transform::fdst8_flat(&mut output, &input, 1))
  });
  c.bench_function("fdst8_poly", |b| {
    b.iter(|| daala_tx::transform::fdst8_poly(&mut output, &input, 1))
  });
}

criterion_group!(transform, reference, precise, dst8);
criterion_main!(transform);
