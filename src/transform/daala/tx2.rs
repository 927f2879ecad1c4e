// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

/// 2-point orthonormal Type-II forward DCT built from three shears.
pub fn daala_fdct_ii_2_precise<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  // 13573/32768 ~= Tan[pi/8] ~= 0.414213562373095
  let p0 = p0.sub(p1.tx_mul::<15>(13573));
  // 5793/8192 ~= Sin[pi/4] ~= 0.707106781186547
  let p1 = p1.add(p0.tx_mul::<13>(5793));
  // 3393/8192 ~= Tan[pi/8] ~= 0.414213562373095
  let p0 = p0.sub(p1.tx_mul::<13>(3393));
  (p0, p1)
}

/// 2-point orthonormal Type-II inverse DCT built from three shears.
pub fn daala_idct_ii_2_precise<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  // 3393/8192 ~= Tan[pi/8] ~= 0.414213562373095
  let p0 = p0.add(p1.tx_mul::<13>(3393));
  // 5793/8192 ~= Sin[pi/4] ~= 0.707106781186547
  let p1 = p1.sub(p0.tx_mul::<13>(5793));
  // 13573/32768 ~= Tan[pi/8] ~= 0.414213562373095
  let p0 = p0.add(p1.tx_mul::<15>(13573));
  (p0, p1)
}

pub fn daala_fdct_ii_2_asym_precise<T: TxOperations>(
  p0: T, p1: T, p1h: T,
) -> (T, T) {
  let p0 = p0.add(p1h);
  let p1 = p0.sub(p1);
  (p0, p1)
}

pub fn daala_idct_ii_2_asym_precise<T: TxOperations>(
  p0: T, p1: T,
) -> (T, T, T) {
  let p1 = p0.sub(p1);
  let p1h = p1.rshift1();
  let p0 = p0.sub(p1h);
  (p0, p1, p1h)
}

/// 2-point orthonormal Type-II forward DCT using a flattened rotation.
pub fn daala_fdct_ii_2_flat<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  let t = p0.sub_avg(p1);
  // 46341/32768 ~= 2*Sin[Pi/4] = 1.4142135623730951
  let p0 = p1.tx_mul::<15>(46341);
  let p1 = t.tx_mul::<15>(46341);
  let p0 = p0.add(p1);
  (p0, p1)
}

/// 2-point orthonormal Type-II inverse DCT using a flattened rotation.
pub fn daala_idct_ii_2_flat<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  let t = p0.add(p1);
  // 11585/8192 ~= 2*Sin[Pi/4] = 1.4142135623730951
  let p1 = p0.tx_mul::<13>(11585);
  // 11585/16384 ~= Cos[Pi/4] = 0.7071067811865475
  let p0 = t.tx_mul::<14>(11585);
  let p1 = p1.sub(p0);
  (p0, p1)
}

/// 2-point orthonormal Type-IV forward DST built from three shears.
pub fn daala_fdst_iv_2_precise<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  // 10947/16384 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let p0 = p0.sub(p1.tx_mul::<14>(10947));
  // 473/512 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let p1 = p1.add(p0.tx_mul::<9>(473));
  let p0 = p0.sub(p1.tx_mul::<14>(10947));
  (p0, p1)
}

/// 2-point orthonormal Type-IV inverse DST built from three shears.
pub fn daala_idst_iv_2_precise<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  // 10947/16384 ~= Tan[3*Pi/16]) ~= 0.668178637919299
  let p0 = p0.add(p1.tx_mul::<14>(10947));
  // 473/512 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let p1 = p1.sub(p0.tx_mul::<9>(473));
  let p0 = p0.add(p1.tx_mul::<14>(10947));
  (p0, p1)
}

pub fn daala_fdst_iv_2_asym_precise<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  // 11507/16384 ~= 4*Sin[Pi/8] - 2*Tan[Pi/8] ~= 0.702306604714169
  let p0 = p0.sub(p1.tx_mul::<14>(11507));
  // 669/1024 ~= Cos[Pi/8]/Sqrt[2] ~= 0.653281482438188
  let p1 = p1.add(p0.tx_mul::<10>(669));
  // 4573/4096 ~= 4*Sin[Pi/8] - Tan[Pi/8] ~= 1.11652016708726
  let p0 = p0.sub(p1.tx_mul::<12>(4573));
  (p0, p1)
}

pub fn daala_idst_iv_2_asym_precise<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  // 4573/4096 ~= 4*Sin[Pi/8] - Tan[Pi/8] ~= 1.11652016708726
  let p0 = p0.add(p1.tx_mul::<12>(4573));
  // 669/1024 ~= Cos[Pi/8]/Sqrt[2] ~= 0.653281482438188
  let p1 = p1.sub(p0.tx_mul::<10>(669));
  // 11507/16384 ~= 4*Sin[Pi/8] - 2*Tan[Pi/8] ~= 0.702306604714169
  let p0 = p0.add(p1.tx_mul::<14>(11507));
  (p0, p1)
}

/// 2-point orthonormal Type-IV forward DST using a flattened rotation.
pub fn daala_fdst_iv_2_flat<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  let t = p0.add_avg(p1);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = p0.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.541196100146197
  let p0 = p1.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let p0 = p0.add(t);
  let p1 = u.sub(t);
  (p0, p1)
}

pub fn daala_fdst_iv_2_asym_flat<T: TxOperations>(
  p0: T, p0h: T, p1: T,
) -> (T, T) {
  let t = p0h.add(p1);
  // 15137/16384 ~= (Cos[3*Pi/8] + Sin[3*Pi/8])/Sqrt[2] = 0.9238795325112867
  let u = p0.tx_mul::<14>(15137);
  // 3135/4096 ~= (Cos[3*Pi/8] - Sin[3*Pi/8])*Sqrt[2] = 0.7653668647301795
  let p0 = p1.tx_mul::<12>(3135);
  // 8867/16384 ~= Cos[3*Pi/8]*Sqrt[2] = 0.5411961001461971
  let t = t.tx_mul::<14>(8867);
  let p0 = p0.add(t);
  let p1 = u.sub(t);
  (p0, p1)
}

pub fn daala_idst_iv_2_asym_flat<T: TxOperations>(p0: T, p1: T) -> (T, T) {
  let t = p0.add_avg(p1);
  // 3135/4096 ~= (Cos[Pi/8] - Sin[Pi/8])*Sqrt[2] = 0.7653668647301795
  let u = p1.tx_mul::<12>(3135);
  // 15137/16384 ~= (Cos[Pi/8] + Sin[Pi/8])/Sqrt[2] = 0.9238795325112867
  let p1 = p0.tx_mul::<14>(15137);
  // 8867/8192 ~= 2*Cos[3*Pi/8]*Sqrt[2] = 1.082392200292394
  let t = t.tx_mul::<13>(8867);
  let p0 = u.add(t);
  let p1 = p1.sub(t.rshift1());
  (p0, p1)
}
