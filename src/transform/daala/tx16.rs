// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

use super::tx8::*;

/// 16-point orthonormal Type-II forward DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idct_ii_16_precise`] undoes this function exactly.
pub fn daala_fdct_ii_16_precise<T: TxOperations>(
  [
    s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15,
  ]: [T; 16],
) -> [T; 16] {
  let s15 = s0.sub(s15);
  let s15h = s15.rshift1();
  let s0 = s0.sub(s15h);
  let s14 = s14.add(s1);
  let s14h = s14.rshift1();
  let s1 = s14h.sub(s1);
  let s13 = s2.sub(s13);
  let s2 = s2.sub(s13.rshift1());
  let s12 = s12.add(s3);
  let s12h = s12.rshift1();
  let s3 = s12h.sub(s3);
  let s11 = s4.sub(s11);
  let s4 = s4.sub(s11.rshift1());
  let s10 = s10.add(s5);
  let s10h = s10.rshift1();
  let s5 = s10h.sub(s5);
  let s9 = s6.sub(s9);
  let s6 = s6.sub(s9.rshift1());
  let s8 = s8.add(s7);
  let s8h = s8.rshift1();
  let s7 = s8h.sub(s7);
  let [s0, s8, s4, s12, s2, s10, s6, s14] =
    daala_fdct_ii_8_asym_precise([
      s0, s8, s8h, s4, s12, s12h, s2, s10, s10h, s6, s14, s14h,
    ]);
  let [s15, s7, s11, s3, s13, s5, s9, s1] =
    daala_fdst_iv_8_asym_precise([s15, s7, s11, s3, s13, s5, s9, s1]);
  [s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15]
}

/// 16-point orthonormal Type-II inverse DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdct_ii_16_precise`] undoes this function exactly.
pub fn daala_idct_ii_16_precise<T: TxOperations>(
  [
    s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15,
  ]: [T; 16],
) -> [T; 16] {
  let [s15, s11, s13, s9, s14, s10, s12, s8] =
    daala_idst_iv_8_asym_precise([s15, s11, s13, s9, s14, s10, s12, s8]);
  let [s0, s4, s2, s6, s1, s1h, s5, s5h, s3, s3h, s7, s7h] =
    daala_idct_ii_8_asym_precise([s0, s4, s2, s6, s1, s5, s3, s7]);
  let s15h = s15.rshift1();
  let s0 = s0.add(s15h);
  let s15 = s0.sub(s15);
  let s14 = s1h.sub(s14);
  let s1 = s1.sub(s14);
  let s2 = s2.add(s13.rshift1());
  let s13 = s2.sub(s13);
  let s12 = s3h.sub(s12);
  let s3 = s3.sub(s12);
  let s4 = s4.add(s11.rshift1());
  let s11 = s4.sub(s11);
  let s10 = s5h.sub(s10);
  let s5 = s5.sub(s10);
  let s6 = s6.add(s9.rshift1());
  let s9 = s6.sub(s9);
  let s8 = s7h.sub(s8);
  let s7 = s7.sub(s8);
  [s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15]
}

/// Asymmetric 16-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 32-point transform instead of recomputing them.
pub fn daala_fdct_ii_16_asym_precise<T: TxOperations>(
  [
    t0, t8, t8h, t4, t12, t12h, t2, t10, t10h, t6, t14, t14h, t1, t9, t9h, t5,
    t13, t13h, t3, t11, t11h, t7, t15, t15h,
  ]: [T; 24],
) -> [T; 16] {
  let t0 = t0.add(t15h);
  let t15 = t0.sub(t15);
  let t1 = t1.sub(t14h);
  let t14 = t14.add(t1);
  let t2 = t2.add(t13h);
  let t13 = t2.sub(t13);
  let t3 = t3.sub(t12h);
  let t12 = t12.add(t3);
  let t4 = t4.add(t11h);
  let t11 = t4.sub(t11);
  let t5 = t5.sub(t10h);
  let t10 = t10.add(t5);
  let t6 = t6.add(t9h);
  let t9 = t6.sub(t9);
  let t7 = t7.sub(t8h);
  let t8 = t8.add(t7);
  let [t0, t8, t4, t12, t2, t10, t6, t14] =
    daala_fdct_ii_8_precise([t0, t8, t4, t12, t2, t10, t6, t14]);
  let [t15, t7, t11, t3, t13, t5, t9, t1] =
    daala_fdst_iv_8_precise([t15, t7, t11, t3, t13, t5, t9, t1]);
  [t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15]
}

/// Asymmetric 16-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 32-point butterfly stage.
pub fn daala_idct_ii_16_asym_precise<T: TxOperations>(
  [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15,
  ]: [T; 16],
) -> [T; 24] {
  let [t15, t11, t13, t9, t14, t10, t12, t8] =
    daala_idst_iv_8_precise([t15, t11, t13, t9, t14, t10, t12, t8]);
  let [t0, t4, t2, t6, t1, t5, t3, t7] =
    daala_idct_ii_8_precise([t0, t4, t2, t6, t1, t5, t3, t7]);
  let t1 = t1.sub(t14);
  let t1h = t1.rshift1();
  let t14 = t14.add(t1h);
  let t9 = t6.sub(t9);
  let t9h = t9.rshift1();
  let t6 = t6.sub(t9h);
  let t5 = t5.sub(t10);
  let t5h = t5.rshift1();
  let t10 = t10.add(t5h);
  let t13 = t2.sub(t13);
  let t13h = t13.rshift1();
  let t2 = t2.sub(t13h);
  let t3 = t3.sub(t12);
  let t3h = t3.rshift1();
  let t12 = t12.add(t3h);
  let t11 = t4.sub(t11);
  let t11h = t11.rshift1();
  let t4 = t4.sub(t11h);
  let t7 = t7.sub(t8);
  let t7h = t7.rshift1();
  let t8 = t8.add(t7h);
  let t15 = t0.sub(t15);
  let t15h = t15.rshift1();
  let t0 = t0.sub(t15h);
  [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t1h, t9, t9h, t5, t5h, t13, t13h,
    t3, t3h, t11, t11h, t7, t7h, t15, t15h,
  ]
}

/// 16-point orthonormal Type-II forward DCT with flattened rotations.
pub fn daala_fdct_ii_16_flat<T: TxOperations>(
  [
    s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15,
  ]: [T; 16],
) -> [T; 16] {
  let s15 = s0.sub(s15);
  let s15h = s15.rshift1();
  let s0 = s0.sub(s15h);
  let s1 = s1.add(s14);
  let s1h = s1.rshift1();
  let s14 = s14.sub(s1h);
  let s13 = s2.sub(s13);
  let s13h = s13.rshift1();
  let s2 = s2.sub(s13h);
  let s3 = s3.add(s12);
  let s3h = s3.rshift1();
  let s12 = s12.sub(s3h);
  let s11 = s4.sub(s11);
  let s11h = s11.rshift1();
  let s4 = s4.sub(s11h);
  let s5 = s5.add(s10);
  let s5h = s5.rshift1();
  let s10 = s10.sub(s5h);
  let s9 = s6.sub(s9);
  let s9h = s9.rshift1();
  let s6 = s6.sub(s9h);
  let s7 = s7.add(s8);
  let s7h = s7.rshift1();
  let s8 = s8.sub(s7h);
  let [s0, s1, s2, s3, s4, s5, s6, s7] =
    daala_fdct_ii_8_asym_flat([
      s0, s1, s1h, s2, s3, s3h, s4, s5, s5h, s6, s7, s7h,
    ]);
  let [s15, _, s14, s13, _, s12, s11, s10, s9, s8] =
    daala_fdst_iv_8_asym_flat([
      s15, s15h, s14, s13, s13h, s12, s11, s11h, s10, s9, s9h, s8,
    ]);
  [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15]
}

/// 16-point orthonormal Type-II inverse DCT with flattened rotations.
pub fn daala_idct_ii_16_flat<T: TxOperations>(
  [
    s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15,
  ]: [T; 16],
) -> [T; 16] {
  let [s15, s11, s13, s9, s14, s10, s12, s8] =
    daala_idst_iv_8_asym_flat([s15, s11, s13, s9, s14, s10, s12, s8]);
  let [s0, s4, s2, s6, s1, s1h, s5, s5h, s3, s3h, s7, s7h] =
    daala_idct_ii_8_asym_flat([s0, s4, s2, s6, s1, s5, s3, s7]);
  let s8 = s8.add(s7h);
  let s7 = s7.sub(s8);
  let s6 = s6.add(s9.rshift1());
  let s9 = s6.sub(s9);
  let s10 = s10.add(s5h);
  let s5 = s5.sub(s10);
  let s4 = s4.add(s11.rshift1());
  let s11 = s4.sub(s11);
  let s12 = s12.add(s3h);
  let s3 = s3.sub(s12);
  let s2 = s2.add(s13.rshift1());
  let s13 = s2.sub(s13);
  let s14 = s14.add(s1h);
  let s1 = s1.sub(s14);
  let s0 = s0.add(s15.rshift1());
  let s15 = s0.sub(s15);
  [s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15]
}

/// Asymmetric 16-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 32-point transform instead of recomputing them.
pub fn daala_fdct_ii_16_asym_flat<T: TxOperations>(
  [
    t0, t8, t8h, t4, t12, t12h, t2, t10, t10h, t6, t14, t14h, t1, t9, t9h, t5,
    t13, t13h, t3, t11, t11h, t7, t15, t15h,
  ]: [T; 24],
) -> [T; 16] {
  let t0 = t0.add(t15h);
  let t15 = t0.sub(t15);
  let t1 = t1.sub(t14h);
  let t14 = t14.add(t1);
  let t2 = t2.add(t13h);
  let t13 = t2.sub(t13);
  let t3 = t3.sub(t12h);
  let t12 = t12.add(t3);
  let t4 = t4.add(t11h);
  let t11 = t4.sub(t11);
  let t5 = t5.sub(t10h);
  let t10 = t10.add(t5);
  let t6 = t6.add(t9h);
  let t9 = t6.sub(t9);
  let t7 = t7.sub(t8h);
  let t8 = t8.add(t7);
  let [t0, t8, t4, t12, t2, t10, t6, t14] =
    daala_fdct_ii_8_flat([t0, t8, t4, t12, t2, t10, t6, t14]);
  let [t15, t7, t11, t3, t13, t5, t9, t1] =
    daala_fdst_iv_8_flat([t15, t7, t11, t3, t13, t5, t9, t1]);
  [t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15]
}

/// Asymmetric 16-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 32-point butterfly stage.
pub fn daala_idct_ii_16_asym_flat<T: TxOperations>(
  [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15,
  ]: [T; 16],
) -> [T; 24] {
  let [t15, t11, t13, t9, t14, t10, t12, t8] =
    daala_idst_iv_8_flat([t15, t11, t13, t9, t14, t10, t12, t8]);
  let [t0, t4, t2, t6, t1, t5, t3, t7] =
    daala_idct_ii_8_flat([t0, t4, t2, t6, t1, t5, t3, t7]);
  let t1 = t1.sub(t14);
  let t1h = t1.rshift1();
  let t14 = t14.add(t1h);
  let t9 = t6.sub(t9);
  let t9h = t9.rshift1();
  let t6 = t6.sub(t9h);
  let t5 = t5.sub(t10);
  let t5h = t5.rshift1();
  let t10 = t10.add(t5h);
  let t13 = t2.sub(t13);
  let t13h = t13.rshift1();
  let t2 = t2.sub(t13h);
  let t3 = t3.sub(t12);
  let t3h = t3.rshift1();
  let t12 = t12.add(t3h);
  let t11 = t4.sub(t11);
  let t11h = t11.rshift1();
  let t4 = t4.sub(t11h);
  let t7 = t7.sub(t8);
  let t7h = t7.rshift1();
  let t8 = t8.add(t7h);
  let t15 = t0.sub(t15);
  let t15h = t15.rshift1();
  let t0 = t0.sub(t15h);
  [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t1h, t9, t9h, t5, t5h, t13, t13h,
    t3, t3h, t11, t11h, t7, t7h, t15, t15h,
  ]
}

/// 16-point orthonormal Type-IV forward DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idst_iv_16_precise`] undoes this function exactly.
pub fn daala_fdst_iv_16_precise<T: TxOperations>(
  [
    s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15,
  ]: [T; 16],
) -> [T; 16] {
  // 13573/32768 ~= Tan[Pi/8] ~= 0.414213562373095
  let s1 = s1.add(s14.tx_mul::<15>(13573));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186547
  let s14 = s14.sub(s1.tx_mul::<14>(11585));
  let s1 = s1.add(s14.tx_mul::<15>(13573));
  // 21895/32768 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let s13 = s13.add(s2.tx_mul::<15>(21895));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let s2 = s2.sub(s13.tx_mul::<14>(15137));
  let s13 = s13.add(s2.tx_mul::<15>(21895));
  // 3259/16384 ~= Tan[Pi/16] ~= 0.198912367379658
  let s12 = s12.add(s3.tx_mul::<14>(3259));
  // 3135/8192 ~= Sin[Pi/8] ~= 0.382683432365090
  let s3 = s3.sub(s12.tx_mul::<13>(3135));
  let s12 = s12.add(s3.tx_mul::<14>(3259));
  let s10 = s10.add(s5.tx_mul::<15>(13573));
  let s5 = s5.sub(s10.tx_mul::<14>(11585));
  let s10 = s10.add(s5.tx_mul::<15>(13573));
  let s6 = s6.add(s9.tx_mul::<15>(13573));
  let s9 = s9.sub(s6.tx_mul::<14>(11585));
  let s6 = s6.add(s9.tx_mul::<15>(13573));
  let s15 = s15.add(s14);
  let s15h = s15.rshift1();
  let s14 = s15h.sub(s14);
  let s0 = s0.add(s1);
  let s0h = s0.rshift1();
  let s1 = s0h.sub(s1);
  let s2 = s3.sub(s2);
  let s2h = s2.rshift1();
  let s3 = s3.sub(s2h);
  let s13 = s13.sub(s12);
  let s13h = s13.rshift1();
  let s12 = s12.add(s13h);
  let s10 = s4.sub(s10);
  let s4 = s4.sub(s10.rshift1());
  let s5 = s5.add(s11);
  let s11 = s5.rshift1().sub(s11);
  let s8 = s8.add(s6);
  let s6 = s6.sub(s8.rshift1());
  let s7 = s9.sub(s7);
  let s9 = s9.sub(s7.rshift1());
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.820678790828660
  let s4 = s4.add(s11.tx_mul::<13>(6723));
  // 16069/16384 ~= Sin[7*Pi/16] ~= 0.980785280403230
  let s11 = s11.sub(s4.tx_mul::<14>(16069));
  let s4 = s4.add(s11.tx_mul::<13>(6723));
  // 8757/16384 ~= Tan[5*Pi/32]) ~= 0.534511135950792
  let s10 = s10.add(s5.tx_mul::<14>(8757));
  // 6811/8192 ~= Sin[5*Pi/16] ~= 0.831469612302545
  let s5 = s5.sub(s10.tx_mul::<13>(6811));
  let s10 = s10.add(s5.tx_mul::<14>(8757));
  // 2485/8192 ~= Tan[3*Pi/32] ~= 0.303346683607342
  let s6 = s6.add(s9.tx_mul::<13>(2485));
  // 4551/8192 ~= Sin[3*Pi/16] ~= 0.555570233019602
  let s9 = s9.sub(s6.tx_mul::<13>(4551));
  let s6 = s6.add(s9.tx_mul::<13>(2485));
  // 3227/32768 ~= Tan[Pi/32] ~= 0.09849140335716425
  let s7 = s7.add(s8.tx_mul::<15>(3227));
  // 6393/32768 ~= Sin[Pi/16] ~= 0.19509032201612825
  let s8 = s8.sub(s7.tx_mul::<15>(6393));
  let s7 = s7.add(s8.tx_mul::<15>(3227));
  let s1 = s1.sub(s2h);
  let s2 = s2.add(s1);
  let s14 = s14.add(s13h);
  let s13 = s14.sub(s13);
  let s3 = s3.add(s15h);
  let s15 = s15.sub(s3);
  let s12 = s0h.sub(s12);
  let s0 = s0.sub(s12);
  let s11 = s11.add(s8.rshift1());
  let s8 = s11.sub(s8);
  let s4 = s4.add(s7.rshift1());
  let s7 = s7.sub(s4);
  let s6 = s6.add(s5.rshift1());
  let s5 = s6.sub(s5);
  let s9 = s9.sub(s10.rshift1());
  let s10 = s10.add(s9);
  let s8 = s8.add(s0);
  let s0 = s0.sub(s8.rshift1());
  let s15 = s15.add(s7);
  let s7 = s15.rshift1().sub(s7);
  let s1 = s1.sub(s6);
  let s6 = s6.add(s1.rshift1());
  let s9 = s9.add(s14);
  let s14 = s9.rshift1().sub(s14);
  let s2 = s2.add(s10);
  let s10 = s2.rshift1().sub(s10);
  let s5 = s5.add(s13);
  let s13 = s13.sub(s5.rshift1());
  let s4 = s12.sub(s4);
  let s12 = s12.sub(s4.rshift1());
  let s3 = s3.sub(s11);
  let s11 = s11.add(s3.rshift1());
  // 2799/4096 ~= (1/Sqrt[2] - Cos[31*Pi/64]/2)/Sin[31*Pi/64]
  let s0 = s0.sub(s15.tx_mul::<12>(2799));
  // 2893/2048 ~= Sqrt[2]*Sin[31*Pi/64]
  let s15 = s15.add(s0.tx_mul::<11>(2893));
  // 5397/8192 ~= (Cos[Pi/4] - Cos[31*Pi/64])/Sin[31*Pi/64]
  let s0 = s0.sub(s15.tx_mul::<13>(5397));
  // 41/64 ~= (1/Sqrt[2] - Cos[29*Pi/64]/2)/Sin[29*Pi/64]
  let s14 = s14.add(s1.tx_mul::<6>(41));
  // 2865/2048 ~= Sqrt[2]*Sin[29*Pi/64]
  let s1 = s1.sub(s14.tx_mul::<11>(2865));
  // 4641/8192 ~= (1/Sqrt[2] - Cos[29*Pi/64])/Sin[29*Pi/64]
  let s14 = s14.add(s1.tx_mul::<13>(4641));
  // 2473/4096 ~= (1/Sqrt[2] - Cos[27*Pi/64]/2)/Sin[27*Pi/64]
  let s13 = s13.add(s2.tx_mul::<12>(2473));
  // 5619/4096 ~= Sqrt[2]*Sin[27*Pi/64]
  let s2 = s2.sub(s13.tx_mul::<12>(5619));
  // 7839/16384 ~= (1/Sqrt[2] - Cos[27*Pi/64])/Sin[27*Pi/64]
  let s13 = s13.add(s2.tx_mul::<14>(7839));
  // 5747/8192 ~= (1/Sqrt[2] - Cos[7*Pi/64]/2)/Sin[7*Pi/64]
  let s12 = s12.sub(s3.tx_mul::<13>(5747));
  // 3903/8192 ~= Sqrt[2]*Sin[7*Pi/64] ~=
  let s3 = s3.add(s12.tx_mul::<13>(3903));
  // 5701/8192 ~= (1/Sqrt[2] - Cos[7*Pi/64])/Sin[7*Pi/64]
  let s12 = s12.add(s3.tx_mul::<13>(5701));
  // 4471/8192 ~= (1/Sqrt[2] - Cos[23*Pi/64]/2)/Sin[23*Pi/64]
  let s11 = s11.add(s4.tx_mul::<13>(4471));
  // 1309/1024 ~= Sqrt[2]*Sin[23*Pi/64]
  let s4 = s4.sub(s11.tx_mul::<10>(1309));
  // 5067/16384 ~= (1/Sqrt[2] - Cos[23*Pi/64])/Sin[23*Pi/64]
  let s11 = s11.add(s4.tx_mul::<14>(5067));
  // 2217/4096 ~= (1/Sqrt[2] - Cos[11*Pi/64]/2)/Sin[11*Pi/64]
  let s10 = s10.sub(s5.tx_mul::<12>(2217));
  // 1489/2048 ~= Sqrt[2]*Sin[11*Pi/64] ~= 0.72705107329128
  let s5 = s5.add(s10.tx_mul::<11>(1489));
  // 75/256 ~= (1/Sqrt[2] - Cos[11*Pi/64])/Sin[11*Pi/64]
  let s10 = s10.add(s5.tx_mul::<8>(75));
  // 2087/4096 ~= (1/Sqrt[2] - Cos[19*Pi/64]/2)/Sin[19*Pi/64]
  let s6 = s6.sub(s9.tx_mul::<12>(2087));
  // 4653/4096 ~= Sqrt[2]*Sin[19*Pi/64]
  let s9 = s9.add(s6.tx_mul::<12>(4653));
  // 4545/32768 ~= (1/Sqrt[2] - Cos[19*Pi/64])/Sin[19*Pi/64]
  let s6 = s6.sub(s9.tx_mul::<15>(4545));
  // 2053/4096 ~= (1/Sqrt[2] - Cos[15*Pi/64]/2)/Sin[15*Pi/64]
  let s7 = s7.add(s8.tx_mul::<12>(2053));
  // 1945/2048 ~= Sqrt[2]*Sin[15*Pi/64]
  let s8 = s8.sub(s7.tx_mul::<11>(1945));
  // 1651/32768 ~= (1/Sqrt[2] - Cos[15*Pi/64])/Sin[15*Pi/64]
  let s7 = s7.sub(s8.tx_mul::<15>(1651));
  [s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15]
}

/// 16-point orthonormal Type-IV inverse DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdst_iv_16_precise`] undoes this function exactly.
pub fn daala_idst_iv_16_precise<T: TxOperations>(
  [
    s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15,
  ]: [T; 16],
) -> [T; 16] {
  // 1651/32768 ~= (1/Sqrt[2] - Cos[15*Pi/64])/Sin[15*Pi/64]
  let s14 = s14.add(s1.tx_mul::<15>(1651));
  // 1945/2048 ~= Sqrt[2]*Sin[15*Pi/64]
  let s1 = s1.add(s14.tx_mul::<11>(1945));
  // 2053/4096 ~= (1/Sqrt[2] - Cos[15*Pi/64]/2)/Sin[15*Pi/64]
  let s14 = s14.sub(s1.tx_mul::<12>(2053));
  // 4545/32768 ~= (1/Sqrt[2] - Cos[19*Pi/64])/Sin[19*Pi/64]
  let s6 = s6.add(s9.tx_mul::<15>(4545));
  // 4653/32768 ~= Sqrt[2]*Sin[19*Pi/64]
  let s9 = s9.sub(s6.tx_mul::<12>(4653));
  // 2087/4096 ~= (1/Sqrt[2] - Cos[19*Pi/64]/2)/Sin[19*Pi/64]
  let s6 = s6.add(s9.tx_mul::<12>(2087));
  // 75/256 ~= (1/Sqrt[2] - Cos[11*Pi/64])/Sin[11*Pi/64]
  let s5 = s5.sub(s10.tx_mul::<8>(75));
  // 1489/2048 ~= Sqrt[2]*Sin[11*Pi/64]
  let s10 = s10.sub(s5.tx_mul::<11>(1489));
  // 2217/4096 ~= (1/Sqrt[2] - Cos[11*Pi/64]/2)/Sin[11*Pi/64]
  let s5 = s5.add(s10.tx_mul::<12>(2217));
  // 5067/16384 ~= (1/Sqrt[2] - Cos[23*Pi/64])/Sin[23*Pi/64]
  let s13 = s13.sub(s2.tx_mul::<14>(5067));
  // 1309/1024 ~= Sqrt[2]*Sin[23*Pi/64]
  let s2 = s2.add(s13.tx_mul::<10>(1309));
  // 4471/8192 ~= (1/Sqrt[2] - Cos[23*Pi/64]/2)/Sin[23*Pi/64]
  let s13 = s13.sub(s2.tx_mul::<13>(4471));
  // 5701/8192 ~= (1/Sqrt[2] - Cos[7*Pi/64])/Sin[7*Pi/64]
  let s3 = s3.sub(s12.tx_mul::<13>(5701));
  // 3903/8192 ~= Sqrt[2]*Sin[7*Pi/64]
  let s12 = s12.sub(s3.tx_mul::<13>(3903));
  // 5747/8192 ~= (1/Sqrt[2] - Cos[7*Pi/64]/2)/Sin[7*Pi/64]
  let s3 = s3.add(s12.tx_mul::<13>(5747));
  // 7839/16384 ~= (1/Sqrt[2] - Cos[27*Pi/64])/Sin[27*Pi/64]
  let s11 = s11.sub(s4.tx_mul::<14>(7839));
  // 5619/4096 ~= Sqrt[2]*Sin[27*Pi/64]
  let s4 = s4.add(s11.tx_mul::<12>(5619));
  // 2473/4096 ~= (1/Sqrt[2] - Cos[27*Pi/64]/2)/Sin[27*Pi/64]
  let s11 = s11.sub(s4.tx_mul::<12>(2473));
  // 4641/8192 ~= (1/Sqrt[2] - Cos[29*Pi/64])/Sin[29*Pi/64]
  let s7 = s7.sub(s8.tx_mul::<13>(4641));
  // 2865/2048 ~= Sqrt[2]*Sin[29*Pi/64]
  let s8 = s8.add(s7.tx_mul::<11>(2865));
  // 41/64 ~= (1/Sqrt[2] - Cos[29*Pi/64]/2)/Sin[29*Pi/64]
  let s7 = s7.sub(s8.tx_mul::<6>(41));
  // 5397/8192 ~= (Cos[Pi/4] - Cos[31*Pi/64])/Sin[31*Pi/64]
  let s0 = s0.add(s15.tx_mul::<13>(5397));
  // 2893/2048 ~= Sqrt[2]*Sin[31*Pi/64]
  let s15 = s15.sub(s0.tx_mul::<11>(2893));
  // 2799/4096 ~= (1/Sqrt[2] - Cos[31*Pi/64]/2)/Sin[31*Pi/64]
  let s0 = s0.add(s15.tx_mul::<12>(2799));
  let s13 = s13.sub(s12.rshift1());
  let s12 = s12.add(s13);
  let s3 = s3.add(s2.rshift1());
  let s2 = s3.sub(s2);
  let s11 = s11.add(s10.rshift1());
  let s10 = s10.sub(s11);
  let s5 = s4.rshift1().sub(s5);
  let s4 = s4.sub(s5);
  let s7 = s9.rshift1().sub(s7);
  let s9 = s9.sub(s7);
  let s6 = s6.sub(s8.rshift1());
  let s8 = s8.add(s6);
  let s14 = s15.rshift1().sub(s14);
  let s15 = s15.sub(s14);
  let s0 = s0.add(s1.rshift1());
  let s1 = s1.sub(s0);
  let s5 = s5.sub(s9);
  let s9 = s9.add(s5.rshift1());
  let s10 = s6.sub(s10);
  let s6 = s6.sub(s10.rshift1());
  let s14 = s14.add(s2);
  let s2 = s2.sub(s14.rshift1());
  let s1 = s13.sub(s1);
  let s13 = s13.sub(s1.rshift1());
  let s0 = s0.add(s3);
  let s0h = s0.rshift1();
  let s3 = s0h.sub(s3);
  let s15 = s15.add(s12);
  let s15h = s15.rshift1();
  let s12 = s12.sub(s15h);
  let s11 = s7.sub(s11);
  let s11h = s11.rshift1();
  let s7 = s7.sub(s11h);
  let s4 = s4.sub(s8);
  let s4h = s4.rshift1();
  let s8 = s8.add(s4h);
  // 3227/32768 ~= Tan[Pi/32] ~= 0.09849140335716425
  let s14 = s14.sub(s1.tx_mul::<15>(3227));
  // 6393/32768 ~= Sin[Pi/16] ~= 0.19509032201612825
  let s1 = s1.add(s14.tx_mul::<15>(6393));
  let s14 = s14.sub(s1.tx_mul::<15>(3227));
  // 2485/8192 ~= Tan[3*Pi/32] ~= 0.303346683607342
  let s6 = s6.sub(s9.tx_mul::<13>(2485));
  // 4551/8192 ~= Sin[3*Pi/16] ~= 0.555570233019602
  let s9 = s9.add(s6.tx_mul::<13>(4551));
  let s6 = s6.sub(s9.tx_mul::<13>(2485));
  // 8757/16384 ~= Tan[5*Pi/32] ~= 0.534511135950792
  let s5 = s5.sub(s10.tx_mul::<14>(8757));
  // 6811/8192 ~= Sin[5*Pi/16] ~= 0.831469612302545
  let s10 = s10.add(s5.tx_mul::<13>(6811));
  let s5 = s5.sub(s10.tx_mul::<14>(8757));
  // 6723/8192 ~= Tan[7*Pi/32]) ~= 0.820678790828660
  let s2 = s2.sub(s13.tx_mul::<13>(6723));
  // 16069/16384 ~= Sin[7*Pi/16] ~= 0.980785280403230
  let s13 = s13.add(s2.tx_mul::<14>(16069));
  let s2 = s2.sub(s13.tx_mul::<13>(6723));
  let s9 = s9.add(s14.rshift1());
  let s14 = s9.sub(s14);
  let s6 = s6.add(s1.rshift1());
  let s1 = s1.sub(s6);
  let s13 = s10.rshift1().sub(s13);
  let s10 = s10.sub(s13);
  let s2 = s2.add(s5.rshift1());
  let s5 = s2.sub(s5);
  let s3 = s3.sub(s11h);
  let s11 = s11.add(s3);
  let s12 = s12.add(s4h);
  let s4 = s12.sub(s4);
  let s8 = s0h.sub(s8);
  let s0 = s0.sub(s8);
  let s7 = s15h.sub(s7);
  let s15 = s15.sub(s7);
  // 13573/32768 ~= Tan[pi/8] ~= 0.414213562373095
  let s6 = s6.sub(s9.tx_mul::<15>(13573));
  // 11585/16384 ~= Sin[pi/4] ~= 0.707106781186547
  let s9 = s9.add(s6.tx_mul::<14>(11585));
  let s6 = s6.sub(s9.tx_mul::<15>(13573));
  let s5 = s5.sub(s10.tx_mul::<15>(13573));
  let s10 = s10.add(s5.tx_mul::<14>(11585));
  let s5 = s5.sub(s10.tx_mul::<15>(13573));
  // 3259/16384 ~= Tan[Pi/16] ~= 0.198912367379658
  let s3 = s3.sub(s12.tx_mul::<14>(3259));
  // 3135/8192 ~= Sin[Pi/8] ~= 0.382683432365090
  let s12 = s12.add(s3.tx_mul::<13>(3135));
  let s3 = s3.sub(s12.tx_mul::<14>(3259));
  // 21895/32768 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let s11 = s11.sub(s4.tx_mul::<15>(21895));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let s4 = s4.add(s11.tx_mul::<14>(15137));
  let s11 = s11.sub(s4.tx_mul::<15>(21895));
  let s8 = s8.sub(s7.tx_mul::<15>(13573));
  let s7 = s7.add(s8.tx_mul::<14>(11585));
  let s8 = s8.sub(s7.tx_mul::<15>(13573));
  [s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15]
}

/// Asymmetric 16-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 32-point transform instead of recomputing them.
pub fn daala_fdst_iv_16_asym_precise<T: TxOperations>(
  [
    t0, t0h, t8, t4, t4h, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7,
    t7h, t15,
  ]: [T; 19],
) -> [T; 17] {
  let t8 = t8.neg();
  let t9 = t9.neg();
  let t10 = t10.neg();
  let t11 = t11.neg();
  let t13 = t13.neg();
  // 13573/16384 ~= 2*Tan[Pi/8] ~= 0.828427124746190
  let t1 = t1.sub(t14.tx_mul::<14>(13573));
  // 11585/32768 ~= Sin[Pi/4]/2 ~= 0.353553390593274
  let t14 = t14.add(t1.tx_mul::<15>(11585));
  let t1 = t1.sub(t14.tx_mul::<14>(13573));
  // 4161/16384 ~= Tan[3*Pi/16] - Tan[Pi/8] ~= 0.253965075546204
  let t2 = t2.add(t13.tx_mul::<14>(4161));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t13 = t13.sub(t2.tx_mul::<14>(15137));
  // 14341/16384 ~= Tan[3*Pi/16] + Tan[Pi/8]/2 ~= 0.875285419105846
  let t2 = t2.add(t13.tx_mul::<14>(14341));
  let t12 = t12.sub(t3.tx_mul::<14>(14341));
  let t3 = t3.add(t12.tx_mul::<14>(15137));
  let t12 = t12.sub(t3.tx_mul::<14>(4161));
  let t14 = t0h.sub(t14);
  let t0 = t0.sub(t14);
  let t15 = t1.rshift1().sub(t15);
  let t1 = t1.sub(t15);
  let t12 = t12.neg();
  let t2 = t12.rshift1().sub(t2);
  let t12 = t12.sub(t2);
  let t3 = t13.rshift1().sub(t3);
  let t13 = t3.sub(t13);
  // 7489/8192 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t9 = t9.sub(t6.tx_mul::<13>(7489));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186548
  let t6 = t6.add(t9.tx_mul::<14>(11585));
  // -19195/32768 ~= Tan[Pi/8] - Tan[Pi/4] ~= -0.585786437626905
  let t9 = t9.add(t6.tx_mul::<15>(19195));
  let t8 = t8.add(t9.rshift1());
  let t9 = t9.sub(t8);
  let t6 = t7h.sub(t6);
  let t7 = t7.sub(t6);
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.820678790828660
  let t8 = t8.add(t7.tx_mul::<13>(6723));
  // 16069/16384 ~= Sin[7*Pi/16] ~= 0.980785280403230
  let t7 = t7.sub(t8.tx_mul::<14>(16069));
  let t8 = t8.add(t7.tx_mul::<13>(6723));
  // 17515/32768 ~= Tan[5*Pi/32]) ~= 0.534511135950792
  let t9 = t9.add(t6.tx_mul::<15>(17515));
  // 13623/16384 ~= Sin[5*Pi/16] ~= 0.831469612302545
  let t6 = t6.sub(t9.tx_mul::<14>(13623));
  let t9 = t9.add(t6.tx_mul::<15>(17515));
  let t5 = t5.add(t10.tx_mul::<14>(13573));
  let t10 = t10.sub(t5.tx_mul::<15>(11585));
  let t5 = t5.add(t10.tx_mul::<14>(13573));
  let t11 = t11.add(t5.rshift1());
  let t5 = t11.sub(t5);
  let t10 = t10.add(t4h);
  let t4 = t4.sub(t10);
  // 2485/8192 ~= Tan[3*Pi/32] ~= 0.303346683607342
  let t10 = t10.add(t5.tx_mul::<13>(2485));
  // 18205/32768 ~= Sin[3*Pi/16] ~= 0.555570233019602
  let t5 = t5.sub(t10.tx_mul::<15>(18205));
  let t10 = t10.add(t5.tx_mul::<13>(2485));
  let t11 = t11.sub(t4.tx_mul::<13>(6723));
  let t4 = t4.add(t11.tx_mul::<14>(16069));
  let t11 = t11.sub(t4.tx_mul::<13>(6723));
  let t5 = t5.neg();
  let t12 = t12.sub(t15);
  let t12h = t12.rshift1();
  let t15 = t15.add(t12h);
  let t3 = t3.add(t0);
  let t3h = t3.rshift1();
  let t0 = t0.sub(t3h);
  let t13 = t13.sub(t1);
  let t13h = t13.rshift1();
  let t1 = t1.add(t13h);
  let t2 = t2.add(t14);
  let t2h = t2.rshift1();
  let t14 = t14.sub(t2h);
  let t8 = t8.add(t4);
  let t8h = t8.rshift1();
  let t4 = t8h.sub(t4);
  let t7 = t11.sub(t7);
  let t7h = t7.rshift1();
  let t11 = t7h.sub(t11);
  let t6 = t6.sub(t10);
  let t6h = t6.rshift1();
  let t10 = t10.add(t6h);
  let t9 = t5.sub(t9);
  let t9h = t9.rshift1();
  let t5 = t5.sub(t9h);
  let t0 = t0.sub(t7h);
  let t7 = t7.add(t0);
  let t15 = t15.add(t8h);
  let t8 = t8.sub(t15);
  let t14 = t14.sub(t6h);
  let t6 = t6.add(t14);
  let t1 = t1.add(t9h);
  let t9 = t9.sub(t1);
  let t11 = t11.sub(t12h);
  let t12 = t12.add(t11);
  let t4 = t4.add(t3h);
  let t3 = t3.sub(t4);
  let t10 = t10.sub(t13h);
  let t13 = t13.add(t10);
  let t5 = t2h.sub(t5);
  let t2 = t2.sub(t5);
  let t8 = t8.neg();
  let t9 = t9.neg();
  let t10 = t10.neg();
  let t11 = t11.neg();
  let t12 = t12.neg();
  let t13 = t13.neg();
  let t15 = t15.neg();
  // 7799/8192 ~= Tan[31*Pi/128] ~= 0.952079146700925
  let t0 = t0.sub(t15.tx_mul::<13>(7799));
  // 4091/4096 ~= Sin[31*Pi/64] ~= 0.998795456205172
  let t15 = t15.add(t0.tx_mul::<12>(4091));
  let t0 = t0.sub(t15.tx_mul::<13>(7799));
  // 2417/32768 ~= Tan[3*Pi/128] ~= 0.0737644315224493
  let t1 = t1.add(t14.tx_mul::<15>(2417));
  // 601/4096 ~= Sin[3*Pi/64] ~= 0.146730474455362
  let t14 = t14.sub(t1.tx_mul::<12>(601));
  let t1 = t1.add(t14.tx_mul::<15>(2417));
  // 14525/32768 ~= Tan[17*Pi/128] ~= 0.443269513890864
  let t7 = t7.sub(t8.tx_mul::<15>(14525));
  // 3035/4096 ~= Sin[17*Pi/64] ~= 0.740951125354959
  let t8 = t8.add(t7.tx_mul::<12>(3035));
  // 7263/16384 ~= Tan[17*Pi/128] ~= 0.443269513890864
  let t7 = t7.sub(t8.tx_mul::<14>(7263));
  // 6393/8192 ~= Tan[27*Pi/128] ~= 0.780407659653944
  let t2 = t2.sub(t13.tx_mul::<13>(6393));
  // 3973/4096 ~= Sin[27*Pi/64] ~= 0.970031253194544
  let t13 = t13.add(t2.tx_mul::<12>(3973));
  let t2 = t2.sub(t13.tx_mul::<13>(6393));
  // 9281/16384 ~= Tan[21*Pi/128] ~= 0.566493002730344
  let t5 = t5.sub(t10.tx_mul::<14>(9281));
  // 7027/8192 ~= Sin[21*Pi/64] ~= 0.857728610000272
  let t10 = t10.add(t5.tx_mul::<13>(7027));
  let t5 = t5.sub(t10.tx_mul::<14>(9281));
  // 11539/16384 ~= Tan[25*Pi/128] ~= 0.704279460865044
  let t3 = t3.sub(t12.tx_mul::<14>(11539));
  // 7713/8192 ~= Sin[25*Pi/64] ~= 0.941544065183021
  let t12 = t12.add(t3.tx_mul::<13>(7713));
  let t3 = t3.sub(t12.tx_mul::<14>(11539));
  // 10375/16384 ~= Tan[23*Pi/128] ~= 0.633243016177569
  let t4 = t4.sub(t11.tx_mul::<14>(10375));
  // 7405/8192 ~= Sin[23*Pi/64] ~= 0.903989293123443
  let t11 = t11.add(t4.tx_mul::<13>(7405));
  let t4 = t4.sub(t11.tx_mul::<14>(10375));
  // 8247/16384 ~= Tan[19*Pi/128] ~= 0.503357699799294
  let t6 = t6.sub(t9.tx_mul::<14>(8247));
  // 1645/2048 ~= Sin[19*Pi/64] ~= 0.803207531480645
  let t9 = t9.add(t6.tx_mul::<11>(1645));
  let t6 = t6.sub(t9.tx_mul::<14>(8247));
  [t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t7h, t15]
}

/// Asymmetric 16-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 32-point butterfly stage.
pub fn daala_idst_iv_16_asym_precise<T: TxOperations>(
  [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15,
  ]: [T; 16],
) -> [T; 19] {
  // 8247/16384 ~= Tan[19*Pi/128] ~= 0.503357699799294
  let t6 = t6.add(t9.tx_mul::<14>(8247));
  // 1645/2048 ~= Sin[19*Pi/64] ~= 0.803207531480645
  let t9 = t9.sub(t6.tx_mul::<11>(1645));
  let t6 = t6.add(t9.tx_mul::<14>(8247));
  // 10375/16384 ~= Tan[23*Pi/128] ~= 0.633243016177569
  let t2 = t2.add(t13.tx_mul::<14>(10375));
  // 7405/8192 ~= Sin[23*Pi/64] ~= 0.903989293123443
  let t13 = t13.sub(t2.tx_mul::<13>(7405));
  let t2 = t2.add(t13.tx_mul::<14>(10375));
  // 11539/16384 ~= Tan[25*Pi/128] ~= 0.704279460865044
  let t12 = t12.add(t3.tx_mul::<14>(11539));
  // 7713/8192 ~= Sin[25*Pi/64] ~= 0.941544065183021
  let t3 = t3.sub(t12.tx_mul::<13>(7713));
  let t12 = t12.add(t3.tx_mul::<14>(11539));
  // 9281/16384 ~= Tan[21*Pi/128] ~= 0.566493002730344
  let t10 = t10.add(t5.tx_mul::<14>(9281));
  // 7027/8192 ~= Sin[21*Pi/64] ~= 0.857728610000272
  let t5 = t5.sub(t10.tx_mul::<13>(7027));
  let t10 = t10.add(t5.tx_mul::<14>(9281));
  // 6393/8192 ~= Tan[27*Pi/128] ~= 0.780407659653944
  let t4 = t4.add(t11.tx_mul::<13>(6393));
  // 3973/4096 ~= Sin[27*Pi/64] ~= 0.970031253194544
  let t11 = t11.sub(t4.tx_mul::<12>(3973));
  let t4 = t4.add(t11.tx_mul::<13>(6393));
  // 7263/16384 ~= Tan[17*Pi/128] ~= 0.443269513890864
  let t14 = t14.add(t1.tx_mul::<14>(7263));
  // 3035/4096 ~= Sin[17*Pi/64] ~= 0.740951125354959
  let t1 = t1.sub(t14.tx_mul::<12>(3035));
  // 14525/32768 ~= Tan[17*Pi/128] ~= 0.443269513890864
  let t14 = t14.add(t1.tx_mul::<15>(14525));
  // 2417/32768 ~= Tan[3*Pi/128] ~= 0.0737644315224493
  let t8 = t8.sub(t7.tx_mul::<15>(2417));
  // 601/4096 ~= Sin[3*Pi/64] ~= 0.146730474455362
  let t7 = t7.add(t8.tx_mul::<12>(601));
  let t8 = t8.sub(t7.tx_mul::<15>(2417));
  // 7799/8192 ~= Tan[31*Pi/128] ~= 0.952079146700925
  let t0 = t0.add(t15.tx_mul::<13>(7799));
  // 4091/4096 ~= Sin[31*Pi/64] ~= 0.998795456205172
  let t15 = t15.sub(t0.tx_mul::<12>(4091));
  let t0 = t0.add(t15.tx_mul::<13>(7799));
  let t1 = t1.neg();
  let t3 = t3.neg();
  let t5 = t5.neg();
  let t9 = t9.neg();
  let t11 = t11.neg();
  let t13 = t13.neg();
  let t15 = t15.neg();
  let t4 = t4.add(t10);
  let t4h = t4.rshift1();
  let t10 = t4h.sub(t10);
  let t11 = t11.sub(t5);
  let t11h = t11.rshift1();
  let t5 = t5.add(t11h);
  let t12 = t12.add(t2);
  let t12h = t12.rshift1();
  let t2 = t2.sub(t12h);
  let t3 = t3.sub(t13);
  let t3h = t3.rshift1();
  let t13 = t13.add(t3h);
  let t9 = t9.add(t8);
  let t9h = t9.rshift1();
  let t8 = t8.sub(t9h);
  let t6 = t6.sub(t7);
  let t6h = t6.rshift1();
  let t7 = t7.add(t6h);
  let t1 = t1.add(t15);
  let t1h = t1.rshift1();
  let t15 = t15.sub(t1h);
  let t14 = t14.sub(t0);
  let t14h = t14.rshift1();
  let t0 = t0.add(t14h);
  let t10 = t10.add(t9h);
  let t9 = t10.sub(t9);
  let t5 = t5.sub(t6h);
  let t6 = t6.add(t5);
  let t13 = t14h.sub(t13);
  let t14 = t13.sub(t14);
  let t2 = t1h.sub(t2);
  let t1 = t1.sub(t2);
  let t7 = t7.add(t4h);
  let t4 = t4.sub(t7);
  let t8 = t8.sub(t11h);
  let t11 = t11.add(t8);
  let t0 = t0.add(t12h);
  let t12 = t12.sub(t0);
  let t15 = t15.sub(t3h);
  let t3 = t3.add(t15);
  let t10 = t10.neg();
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.820678790828660
  let t13 = t13.add(t2.tx_mul::<13>(6723));
  // 16069/16384 ~= Sin[7*Pi/16] ~= 0.980785280403230
  let t2 = t2.sub(t13.tx_mul::<14>(16069));
  let t13 = t13.add(t2.tx_mul::<13>(6723));
  // 2485/8192 ~= Tan[3*Pi/32] ~= 0.303346683607342
  let t5 = t5.sub(t10.tx_mul::<13>(2485));
  // 18205/32768 ~= Sin[3*Pi/16] ~= 0.555570233019602
  let t10 = t10.add(t5.tx_mul::<15>(18205));
  let t5 = t5.sub(t10.tx_mul::<13>(2485));
  let t2 = t2.add(t5);
  let t2h = t2.rshift1();
  let t5 = t5.sub(t2h);
  let t10 = t13.sub(t10);
  let t13 = t13.sub(t10.rshift1());
  // 13573/16384 ~= 2*Tan[Pi/8] ~= 0.828427124746190
  let t10 = t10.sub(t5.tx_mul::<14>(13573));
  // 11585/32768 ~= Sin[Pi/4]/2 ~= 0.353553390593274
  let t5 = t5.add(t10.tx_mul::<15>(11585));
  let t10 = t10.sub(t5.tx_mul::<14>(13573));
  // 17515/32768 ~= Tan[5*Pi/32] ~= 0.534511135950792
  let t9 = t9.sub(t6.tx_mul::<15>(17515));
  // 13623/16384 ~= Sin[5*Pi/16] ~= 0.831469612302545
  let t6 = t6.add(t9.tx_mul::<14>(13623));
  let t9 = t9.sub(t6.tx_mul::<15>(17515));
  let t1 = t1.sub(t14.tx_mul::<13>(6723));
  let t14 = t14.add(t1.tx_mul::<14>(16069));
  let t1 = t1.sub(t14.tx_mul::<13>(6723));
  let t14 = t14.add(t6);
  let t14h = t14.rshift1();
  let t6 = t14h.sub(t6);
  let t9 = t9.add(t1);
  let t1 = t1.sub(t9.rshift1());
  // -19195/32768 ~= Tan[Pi/8] - Tan[Pi/4] ~= -0.585786437626905
  let t9 = t9.sub(t6.tx_mul::<15>(19195));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186548
  let t6 = t6.sub(t9.tx_mul::<14>(11585));
  // 7489/8192 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t9 = t9.add(t6.tx_mul::<13>(7489));
  let t11 = t12.sub(t11);
  let t12 = t11.rshift1().sub(t12);
  let t3 = t3.add(t4);
  let t4 = t3.rshift1().sub(t4);
  let t3 = t3.neg();
  let t8 = t8.add(t15);
  let t15 = t8.rshift1().sub(t15);
  let t0 = t0.add(t7);
  let t0h = t0.rshift1();
  let t7 = t0h.sub(t7);
  // 4161/16384 ~= Tan[3*Pi/16] - Tan[Pi/8] ~= 0.253965075546204
  let t3 = t3.add(t12.tx_mul::<14>(4161));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t12 = t12.sub(t3.tx_mul::<14>(15137));
  // 14341/16384 ~= Tan[3*Pi/16] + Tan[Pi/8]/2 ~= 0.875285419105846
  let t3 = t3.add(t12.tx_mul::<14>(14341));
  let t4 = t4.sub(t11.tx_mul::<14>(14341));
  let t11 = t11.add(t4.tx_mul::<14>(15137));
  let t4 = t4.sub(t11.tx_mul::<14>(4161));
  let t8 = t8.add(t7.tx_mul::<14>(13573));
  let t7 = t7.sub(t8.tx_mul::<15>(11585));
  let t8 = t8.add(t7.tx_mul::<14>(13573));
  let t1 = t1.neg();
  let t5 = t5.neg();
  let t9 = t9.neg();
  let t11 = t11.neg();
  let t13 = t13.neg();
  [
    t0, t0h, t8, t4, t12, t2, t2h, t10, t6, t14, t14h, t1, t9, t5, t13, t3,
    t11, t7, t15,
  ]
}

/// 16-point orthonormal Type-IV forward DST with flattened rotations.
pub fn daala_fdst_iv_16_flat<T: TxOperations>(
  [
    s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15,
  ]: [T; 16],
) -> [T; 16] {
  let t = s1.add(s14);
  // 32729/32768 ~= (Sin[17*Pi/64] + Cos[17*Pi/64])/Sqrt[2] ~= 0.99879545620517
  let u = s14.tx_mul::<15>(32729);
  // 201/2048 ~= (Sin[17*Pi/64] - Cos[17*Pi/64])*Sqrt[2] ~= 0.09813534865483615
  let s14 = s1.tx_mul::<11>(201);
  // 31121/32768 ~= Cos[17*Pi/64]*Sqrt[2] = 0.9497277818777543
  let t = t.tx_mul::<15>(31121);
  let s14 = s14.add(t);
  let s1 = u.sub(t.rshift1());
  let t = s6.sub(s9);
  // 32413/32768 ~= (Sin[19*Pi/64] + Cos[19*Pi/64])/Sqrt[2] ~= 0.98917650996478
  let u = s9.tx_mul::<15>(32413);
  // 601/2048 ~= (Sin[19*Pi/64] - Cos[19*Pi/64])*Sqrt[2] ~= 0.29346094891072355
  let s9 = s6.tx_mul::<11>(601);
  // 27605/32768 ~= Cos[19*Pi/64]*Sqrt[2] = 0.8424460355094193
  let t = t.tx_mul::<15>(27605);
  let s9 = s9.add(t);
  let s6 = u.add(t.rshift1());
  let t = s5.add(s10);
  // 15893/16384 ~= (Sin[21*Pi/64] + Cos[21*Pi/64])/Sqrt[2] ~= 0.97003125319454
  let u = s10.tx_mul::<14>(15893);
  // 3981/8192 ~= (Sin[21*Pi/64] - Cos[21*Pi/64])*Sqrt[2] ~= 0.4859603598065279
  let s10 = s5.tx_mul::<13>(3981);
  // 1489/2048 ~= Cos[21*Pi/64]*Sqrt[2] ~= 0.72705107329128
  let t = t.tx_mul::<11>(1489);
  let s10 = s10.add(t);
  let s5 = t.rshift1().sub(u);
  let t = s13.sub(s2);
  // 30853/32768 ~= (Sin[23*Pi/64] + Cos[23*Pi/64])/Sqrt[2] ~= 0.94154406518302
  let u = s13.tx_mul::<15>(30853);
  // 11039/16384 ~= (Sin[23*Pi/64] - Cos[23*Pi/64])*Sqrt[2] ~= 0.67377970678444
  let s13 = s2.tx_mul::<14>(11039);
  // 19813/32768 ~= Cos[23*Pi/64]*Sqrt[2] ~= 0.6046542117908008
  let t = t.tx_mul::<15>(19813);
  let s13 = s13.sub(t);
  let s2 = t.rshift1().sub(u);
  let t = s3.add(s12);
  // 14811/16384 ~= (Sin[25*Pi/64] + Cos[25*Pi/64])/Sqrt[2] ~= 0.90398929312344
  let u = s12.tx_mul::<14>(14811);
  // 7005/8192 ~= (Sin[25*Pi/64] - Cos[25*Pi/64])*Sqrt[2] ~= 0.8551101868605642
  let s12 = s3.tx_mul::<13>(7005);
  // 3903/8192 ~= Cos[25*Pi/64]*Sqrt[2] ~= 0.47643419969316125
  let t = t.tx_mul::<13>(3903);
  let s12 = s12.add(t);
  let s3 = u.sub(t.rshift1());
  let t = s11.sub(s4);
  // 14053/16384 ~= (Sin[27*Pi/64] + Cos[27*Pi/64])/Sqrt[2] ~= 0.85772861000027
  let u = s11.tx_mul::<14>(14053);
  // 8423/8192 ~= (Sin[27*Pi/64] - Cos[27*Pi/64])*Sqrt[2] ~= 1.0282054883864435
  let s11 = s4.tx_mul::<13>(8423);
  // 2815/8192 ~= Cos[27*Pi/64]*Sqrt[2] = 0.34362586580705035
  let t = t.tx_mul::<13>(2815);
  let s11 = s11.sub(t);
  let s4 = t.rshift1().sub(u);
  let t = s7.add(s8);
  // 1645/2048 ~= (Sin[29*Pi/64] + Cos[29*Pi/64])/Sqrt[2] ~= 0.8032075314806449
  let u = s8.tx_mul::<11>(1645);
  // 305/256 ~= (Sin[29*Pi/64] - Cos[29*Pi/64])*Sqrt[2] ~= 1.1913986089848667
  let s8 = s7.tx_mul::<8>(305);
  // 425/2048 ~= Cos[29*Pi/64]*Sqrt[2] ~= 0.20750822698821159
  let t = t.tx_mul::<11>(425);
  let s8 = s8.add(t);
  let s7 = u.sub(t.rshift1());
  let t = s0.sub(s15);
  // 24279/32768 ~= (Sin[31*Pi/64] + Cos[31*Pi/64])/Sqrt[2] ~= 0.74095112535495
  let u = s15.tx_mul::<15>(24279);
  // 44011/32768 ~= (Sin[31*Pi/64] - Cos[31*Pi/64])*Sqrt[2] ~= 1.34311790969403
  let s15 = s0.tx_mul::<15>(44011);
  // 1137/16384 ~= Cos[31*Pi/64]*Sqrt[2] ~= 0.0693921705079406
  let t = t.tx_mul::<14>(1137);
  let s0 = u.add(t.rshift1());
  let s15 = s15.add(t);
  let s3 = s3.sub(s13.rshift1());
  let s13 = s13.add(s3);
  let s2 = s2.add(s12.rshift1());
  let s12 = s12.sub(s2);
  let s5 = s5.sub(s11.rshift1());
  let s11 = s11.add(s5);
  let s4 = s4.sub(s10.rshift1());
  let s10 = s10.add(s4);
  let s1 = s1.add(s15.rshift1());
  let s15 = s15.sub(s1);
  let s7 = s7.sub(s9.rshift1());
  let s9 = s9.add(s7);
  let s6 = s6.sub(s8.rshift1());
  let s8 = s8.add(s6);
  let s0 = s0.add(s14.rshift1());
  let s14 = s14.sub(s0);
  let s10 = s10.sub(s9);
  let s9 = s9.add(s10.rshift1());
  let s5 = s5.add(s6);
  let s6 = s6.sub(s5.rshift1());
  let s1 = s1.sub(s2);
  let s2 = s2.add(s1.rshift1());
  let s14 = s14.add(s13);
  let s13 = s13.sub(s14.rshift1());
  let s0 = s0.add(s12);
  let s0h = s0.rshift1();
  let s12 = s12.sub(s0h);
  let s15 = s15.sub(s3);
  let s15h = s15.rshift1();
  let s3 = s3.add(s15h);
  let s11 = s11.add(s7);
  let s11h = s11.rshift1();
  let s7 = s7.sub(s11h);
  let s4 = s4.add(s8);
  let s4h = s4.rshift1();
  let s8 = s8.sub(s4h);
  let t = s1.add_avg(s14);
  // 9633/8192 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = s1.tx_mul::<13>(9633);
  // 12873/16384 ~= Sin[7*Pi/16] - Cos[7*Pi/16] ~= 0.7856949583871022
  let s1 = s14.tx_mul::<14>(12873);
  // 12785/32768 ~= 2*Cos[7*Pi/16] ~= 0.3901806440322565
  let t = t.tx_mul::<15>(12785);
  let s1 = s1.add(t);
  let s14 = u.sub(t);
  let t = s6.add(s9);
  // 45451/32768 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s9.tx_mul::<15>(45451);
  // 9041/32768 ~= Sin[5*Pi/16] - Cos[5*Pi/16] ~= 0.27589937928294306
  let s9 = s6.tx_mul::<15>(9041);
  // 18205/32768 ~= Cos[5*Pi/16] ~= 0.5555702330196022
  let t = t.tx_mul::<15>(18205);
  let s9 = s9.add(t);
  let s6 = u.sub(t);
  let t = s5.add_avg(s10);
  // 22725/16384 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s10.tx_mul::<14>(22725);
  let s10 = s5.tx_mul::<15>(9041);
  // 18205/16384 ~= 2*Cos[5*Pi/16] ~= 1.1111404660392044
  let t = t.tx_mul::<14>(18205);
  let s10 = s10.add(t);
  let s5 = t.sub(u);
  let t = s2.add(s13);
  // 38531/32768 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = s2.tx_mul::<15>(38531);
  let s2 = s13.tx_mul::<14>(12873);
  // 6393/32768 ~= Cos[7*Pi/16] ~= 0.19509032201612825
  let t = t.tx_mul::<15>(6393);
  let s2 = s2.add(t);
  let s13 = u.sub(t);
  let s3 = s3.sub(s4h);
  let s4 = s4.add(s3);
  let s8 = s8.sub(s0h);
  let s0 = s0.add(s8);
  let s7 = s7.add(s15h);
  let s15 = s15.sub(s7);
  let s12 = s12.add(s11h);
  let s11 = s11.sub(s12);
  let s6 = s6.add(s14.rshift1());
  let s14 = s14.sub(s6);
  let s9 = s9.sub(s1.rshift1());
  let s1 = s1.add(s9);
  let s13 = s13.sub(s5.rshift1());
  let s5 = s5.add(s13);
  let s2 = s2.sub(s10.rshift1());
  let s10 = s10.add(s2);
  let t = s3.add_avg(s12);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = s3.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let s3 = s12.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let s3 = s3.add(t);
  let s12 = u.sub(t);
  let t = s4.add_avg(s11);
  let u = s4.tx_mul::<14>(21407);
  let s4 = s11.tx_mul::<14>(8867);
  let t = t.tx_mul::<12>(3134);
  let s4 = s4.add(t);
  let s11 = u.sub(t);
  let t = s5.add_avg(s10);
  // 11585/8192 ~= Sin[Pi/4] + Cos[Pi/4] ~= 1.4142135623730951
  let u = s10.tx_mul::<13>(11585);
  let s10 = t.tx_mul::<13>(11585);
  let s5 = s10.sub(u);
  let t = s6.sub_avg(s9);
  let s6 = s9.tx_mul::<13>(11585);
  let s9 = t.tx_mul::<13>(11585);
  let s6 = s6.add(s9);
  let t = s7.sub_avg(s8);
  let s7 = s8.tx_mul::<13>(11585);
  let s8 = t.tx_mul::<13>(11585);
  let s7 = s7.add(s8);
  [s0, s8, s4, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7, s15]
}

/// 16-point orthonormal Type-IV inverse DST with flattened rotations.
pub fn daala_idst_iv_16_flat<T: TxOperations>(
  [
    s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15,
  ]: [T; 16],
) -> [T; 16] {
  let t = s6.add_avg(s9);
  // 11585/8192 ~= Sin[Pi/4] + Cos[Pi/4] ~= 1.4142135623730951
  let s9 = s6.tx_mul::<13>(11585);
  let s6 = t.tx_mul::<13>(11585);
  let s9 = s9.sub(s6);
  let t = s5.add_avg(s10);
  let s10 = s5.tx_mul::<13>(11585);
  let s5 = t.tx_mul::<13>(11585);
  let s10 = s10.sub(s5);
  let t = s7.add_avg(s8);
  let s8 = s7.tx_mul::<13>(11585);
  let s7 = t.tx_mul::<13>(11585);
  let s8 = s8.sub(s7);
  let t = s3.add_avg(s12);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = s3.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let s3 = s12.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let s3 = s3.add(t);
  let s12 = u.sub(t);
  let t = s11.sub_avg(s4);
  let u = s11.tx_mul::<14>(21407);
  let s11 = s4.tx_mul::<14>(8867);
  let t = t.tx_mul::<12>(3135);
  let s11 = s11.sub(t);
  let s4 = t.sub(u);
  let s10 = s10.add(s2);
  let s2 = s2.sub(s10.rshift1());
  let s5 = s5.sub(s13);
  let s13 = s13.add(s5.rshift1());
  let s1 = s1.sub(s9);
  let s9 = s9.add(s1.rshift1());
  let s14 = s14.add(s6);
  let s6 = s6.sub(s14.rshift1());
  let s11 = s11.add(s12);
  let s11h = s11.rshift1();
  let s12 = s12.sub(s11h);
  let s15 = s15.add(s7);
  let s15h = s15.rshift1();
  let s7 = s7.sub(s15h);
  let s0 = s0.sub(s8);
  let s0h = s0.rshift1();
  let s8 = s8.add(s0h);
  let s4 = s4.add(s3);
  let s4h = s4.rshift1();
  let s3 = s3.sub(s4h);
  let t = s13.sub(s2);
  // 38531/32768 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = s13.tx_mul::<15>(38531);
  // 12873/16384 ~= Sin[7*Pi/16] - Cos[7*Pi/16] ~= 0.7856949583871022
  let s13 = s2.tx_mul::<14>(12873);
  // 6393/32768 ~= Cos[7*Pi/16] ~= 0.19509032201612825
  let t = t.tx_mul::<15>(6393);
  let s13 = s13.sub(t);
  let s2 = t.sub(u);
  let t = s5.sub_avg(s10);
  // 22725/16384 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s5.tx_mul::<14>(22725);
  // 9041/32768 ~= Sin[5*Pi/16] - Cos[5*Pi/16] ~= 0.27589937928294306
  let s5 = s10.tx_mul::<15>(9041);
  // 18205/16384 ~= 2*Cos[5*Pi/16] ~= 1.1111404660392044
  let t = t.tx_mul::<14>(18205);
  let s5 = s5.sub(t);
  let s10 = t.sub(u);
  let t = s6.add(s9);
  // 45451/32768 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s9.tx_mul::<15>(45451);
  let s9 = s6.tx_mul::<15>(9041);
  // 18205/32768 ~= Cos[5*Pi/16] ~= 0.5555702330196022
  let t = t.tx_mul::<15>(18205);
  let s9 = s9.add(t);
  let s6 = u.sub(t);
  let t = s1.add_avg(s14);
  // 9633/8192 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = s1.tx_mul::<13>(9633);
  let s1 = s14.tx_mul::<14>(12873);
  // 12785/32768 ~= 2*Cos[7*Pi/16] ~= 0.3901806440322565
  let t = t.tx_mul::<15>(12785);
  let s1 = s1.add(t);
  let s14 = u.sub(t);
  let s8 = s8.sub(s4h);
  let s4 = s4.add(s8);
  let s7 = s7.add(s11h);
  let s11 = s11.sub(s7);
  let s3 = s3.sub(s15h);
  let s15 = s15.add(s3);
  let s12 = s12.add(s0h);
  let s0 = s0.sub(s12);
  let s13 = s13.add(s14.rshift1());
  let s14 = s14.sub(s13);
  let s2 = s2.add(s1.rshift1());
  let s1 = s1.sub(s2);
  let s6 = s6.sub(s5.rshift1());
  let s5 = s5.add(s6);
  let s9 = s9.sub(s10.rshift1());
  let s10 = s10.add(s9);
  let s0 = s0.sub(s14);
  let s0h = s0.rshift1();
  let s14 = s14.add(s0h);
  let s1 = s1.sub(s15);
  let s1h = s1.rshift1();
  let s15 = s15.add(s1h);
  let s2 = s2.add(s12);
  let s2h = s2.rshift1();
  let s12 = s12.sub(s2h);
  let s3 = s3.add(s13);
  let s3h = s3.rshift1();
  let s13 = s13.sub(s3h);
  let s4 = s4.sub(s10);
  let s4h = s4.rshift1();
  let s10 = s10.add(s4h);
  let s5 = s5.sub(s11);
  let s5h = s5.rshift1();
  let s11 = s11.add(s5h);
  let s6 = s6.add(s8);
  let s6h = s6.rshift1();
  let s8 = s8.sub(s6h);
  let s7 = s7.add(s9);
  let s7h = s7.rshift1();
  let s9 = s9.sub(s7h);
  let t = s14.sub(s1h);
  // 32729/32768 ~= (Sin[17*Pi/64] + Cos[17*Pi/64])/Sqrt[2] ~= 0.99879545620517
  let u = s1.tx_mul::<15>(32729);
  // 201/2048 ~= (Sin[17*Pi/64] - Cos[17*Pi/64])*Sqrt[2] ~= 0.09813534865483615
  let s1 = s14.tx_mul::<11>(201);
  // 31121/32768 ~= Cos[17*Pi/64]*Sqrt[2] ~= 0.9497277818777543
  let t = t.tx_mul::<15>(31121);
  let s1 = s1.add(t);
  let s14 = u.add(t);
  let t = s6h.add(s9);
  // 32413/32768 ~= (Sin[19*Pi/64] + Cos[19*Pi/64])/Sqrt[2] ~= 0.98917650996478
  let u = s6.tx_mul::<15>(32413);
  // 601/2048 ~= (Sin[19*Pi/64] - Cos[19*Pi/64])*Sqrt[2] ~= 0.29346094891072355
  let s6 = s9.tx_mul::<11>(601);
  // 27605/32768 ~= Cos[19*Pi/64]*Sqrt[2] ~= 0.8424460355094193
  let t = t.tx_mul::<15>(27605);
  let s6 = s6.add(t);
  let s9 = u.sub(t);
  let t = s10.sub(s5h);
  // 15893/16384 ~= (Sin[21*Pi/64] + Cos[21*Pi/64])/Sqrt[2] ~= 0.97003125319454
  let u = s5.tx_mul::<14>(15893);
  // 3981/8192 ~= (Sin[21*Pi/64] - Cos[21*Pi/64])*Sqrt[2] ~= 0.4859603598065279
  let s5 = s10.tx_mul::<13>(3981);
  // 1489/2048 ~= Cos[21*Pi/64]*Sqrt[2] ~= 0.72705107329128
  let t = t.tx_mul::<11>(1489);
  let s5 = s5.add(t);
  let s10 = u.add(t);
  let t = s2h.add(s13);
  // 30853/32768 ~= (Sin[23*Pi/64] + Cos[23*Pi/64])/Sqrt[2] ~= 0.94154406518302
  let u = s2.tx_mul::<15>(30853);
  // 11039/16384 ~= (Sin[23*Pi/64] - Cos[23*Pi/64])*Sqrt[2] ~= 0.67377970678444
  let s2 = s13.tx_mul::<14>(11039);
  // 19813/32768 ~= Cos[23*Pi/64]*Sqrt[2] ~= 0.6046542117908008
  let t = t.tx_mul::<15>(19813);
  let s2 = s2.add(t);
  let s13 = u.sub(t);
  let t = s12.sub(s3h);
  // 14811/16384 ~= (Sin[25*Pi/64] + Cos[25*Pi/64])/Sqrt[2] ~= 0.90398929312344
  let u = s3.tx_mul::<14>(14811);
  // 7005/8192 ~= (Sin[25*Pi/64] - Cos[25*Pi/64])*Sqrt[2] ~= 0.8551101868605642
  let s3 = s12.tx_mul::<13>(7005);
  // 3903/8192 ~= Cos[25*Pi/64]*Sqrt[2] ~= 0.47643419969316125
  let t = t.tx_mul::<13>(3903);
  let s3 = s3.add(t);
  let s12 = u.add(t);
  let t = s4h.add(s11);
  // 14053/16384 ~= (Sin[27*Pi/64] + Cos[27*Pi/64])/Sqrt[2] ~= 0.85772861000027
  let u = s4.tx_mul::<14>(14053);
  // 8423/8192 ~= (Sin[27*Pi/64] - Cos[27*Pi/64])*Sqrt[2] ~= 1.0282054883864435
  let s4 = s11.tx_mul::<13>(8423);
  // 2815/8192 ~= Cos[27*Pi/64]*Sqrt[2] ~= 0.34362586580705035
  let t = t.tx_mul::<13>(2815);
  let s4 = s4.add(t);
  let s11 = u.sub(t);
  let t = s8.sub(s7h);
  // 1645/2048 ~= (Sin[29*Pi/64] + Cos[29*Pi/64])/Sqrt[2] ~= 0.8032075314806449
  let u = s7.tx_mul::<11>(1645);
  // 305/256 ~= (Sin[29*Pi/64] - Cos[29*Pi/64])*Sqrt[2] ~= 1.1913986089848667
  let s7 = s8.tx_mul::<8>(305);
  // 425/2048 ~= Cos[29*Pi/64]*Sqrt[2] ~= 0.20750822698821159
  let t = t.tx_mul::<11>(425);
  let s7 = s7.add(t);
  let s8 = u.add(t);
  let t = s0h.add(s15);
  // 24279/32768 ~= (Sin[31*Pi/64] + Cos[31*Pi/64])/Sqrt[2] ~= 0.74095112535495
  let u = s0.tx_mul::<15>(24279);
  // 44011/32768 ~= (Sin[31*Pi/64] - Cos[31*Pi/64])*Sqrt[2] ~= 1.34311790969403
  let s0 = s15.tx_mul::<15>(44011);
  // 1137/16384 ~= Cos[31*Pi/64]*Sqrt[2] ~= 0.06939217050794069
  let t = t.tx_mul::<14>(1137);
  let s0 = s0.add(t);
  let s15 = u.sub(t);
  [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15]
}

/// Asymmetric 16-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 32-point transform instead of recomputing them.
pub fn daala_fdst_iv_16_asym_flat<T: TxOperations>(
  [
    s0, s0h, s8, s4, s4h, s12, s2, s2h, s10, s6, s6h, s14, s1, s1h, s9, s5,
    s5h, s13, s3, s3h, s11, s7, s7h, s15,
  ]: [T; 24],
) -> [T; 18] {
  let t = s1h.add(s14);
  // 46285/32768 ~= Sin[17*Pi/64] + Cos[17*Pi/64] ~= 1.4125100802019774
  let u = s14.tx_mul::<15>(46285);
  // 1137/16384 ~= Sin[17*Pi/64] - Cos[17*Pi/64] ~= 0.06939217050794078
  let s14 = s1.tx_mul::<14>(1137);
  // 44011/32768 ~= Cos[17*Pi/64]*2 ~= 1.3431179096940367
  let t = t.tx_mul::<15>(44011);
  let s14 = s14.add(t);
  let s1 = u.sub(t.rshift1());
  let t = s6h.sub(s9);
  // 45839/32768 ~= Sin[19*Pi/64] + Cos[19*Pi/64] ~= 1.3989068359730783
  let u = s9.tx_mul::<15>(45839);
  // 425/2048 ~= Sin[19*Pi/64] - Cos[19*Pi/64] ~= 0.20750822698821159
  let s9 = s6.tx_mul::<11>(425);
  // 305/256 ~= Cos[19*Pi/64]*2 ~= 1.1913986089848667
  let t = t.tx_mul::<8>(305);
  let s9 = s9.add(t);
  let s6 = u.add(t.rshift1());
  let t = s5h.add(s10);
  // 5619/4096 ~= Sin[21*Pi/64] + Cos[21*Pi/64] ~= 1.371831354193494
  let u = s10.tx_mul::<12>(5619);
  // 2815/8192 ~= Sin[21*Pi/64] - Cos[21*Pi/64] ~= 0.34362586580705046
  let s10 = s5.tx_mul::<13>(2815);
  // 8423/8192 ~= Cos[21*Pi/64]*2 ~= 1.0282054883864433
  let t = t.tx_mul::<13>(8423);
  let s10 = s10.add(t);
  let s5 = t.rshift1().sub(u);
  let t = s13.sub(s2h);
  // 2727/2048 ~= Sin[23*Pi/64] + Cos[23*Pi/64] ~= 1.3315443865537255
  let u = s13.tx_mul::<11>(2727);
  // 3903/8192 ~= Sin[23*Pi/64] - Cos[23*Pi/64] ~= 0.47643419969316125
  let s13 = s2.tx_mul::<13>(3903);
  // 7005/8192 ~= Cos[23*Pi/64]*2 ~= 0.8551101868605642
  let t = t.tx_mul::<13>(7005);
  let s13 = s13.sub(t);
  let s2 = t.rshift1().sub(u);
  let t = s3h.add(s12);
  // 10473/8192 ~= Sin[25*Pi/64] + Cos[25*Pi/64] ~= 1.278433918575241
  let u = s12.tx_mul::<13>(10473);
  // 19813/32768 ~= Sin[25*Pi/64] - Cos[25*Pi/64] ~= 0.6046542117908007
  let s12 = s3.tx_mul::<15>(19813);
  // 11039/16384 ~= Cos[25*Pi/64]*2 ~= 0.6737797067844401
  let t = t.tx_mul::<14>(11039);
  let s12 = s12.add(t);
  let s3 = u.sub(t.rshift1());
  let t = s11.sub(s4h);
  // 9937/8192 ~= Sin[27*Pi/64] + Cos[27*Pi/64] ~= 1.213011433097808
  let u = s11.tx_mul::<13>(9937);
  // 1489/2048 ~= Sin[27*Pi/64] - Cos[27*Pi/64] ~= 0.72705107329128
  let s11 = s4.tx_mul::<11>(1489);
  // 3981/8192 ~= Cos[27*Pi/64]*2 ~= 0.48596035980652774
  let t = t.tx_mul::<13>(3981);
  let s11 = s11.sub(t);
  let s4 = t.rshift1().sub(u);
  let t = s7h.add(s8);
  // 37221/32768 ~= Sin[29*Pi/64] + Cos[29*Pi/64] ~= 1.1359069844201428
  let u = s8.tx_mul::<15>(37221);
  // 27605/32768 ~= Sin[29*Pi/64] - Cos[29*Pi/64] ~= 0.8424460355094192
  let s8 = s7.tx_mul::<15>(27605);
  // 601/2048 ~= Cos[29*Pi/64]*2 ~= 0.2934609489107235
  let t = t.tx_mul::<11>(601);
  let s8 = s8.add(t);
  let s7 = u.sub(t.rshift1());
  let t = s0h.sub(s15);
  // 1073/1024 ~= Sin[31*Pi/64] + Cos[31*Pi/64] ~= 1.0478631305325905
  let u = s15.tx_mul::<10>(1073);
  // 31121/32768 ~= Sin[31*Pi/64] - Cos[31*Pi/64] ~= 0.9497277818777544
  let s15 = s0.tx_mul::<15>(31121);
  // 201/2048 ~= Cos[31*Pi/64]*2 ~= 0.09813534865483603
  let t = t.tx_mul::<11>(201);
  let s0 = u.add(t.rshift1());
  let s15 = s15.add(t);
  let s3 = s3.sub(s13.rshift1());
  let s13 = s13.add(s3);
  let s2 = s2.add(s12.rshift1());
  let s12 = s12.sub(s2);
  let s5 = s5.sub(s11.rshift1());
  let s11 = s11.add(s5);
  let s4 = s4.sub(s10.rshift1());
  let s10 = s10.add(s4);
  let s1 = s1.add(s15.rshift1());
  let s15 = s15.sub(s1);
  let s7 = s7.sub(s9.rshift1());
  let s9 = s9.add(s7);
  let s6 = s6.sub(s8.rshift1());
  let s8 = s8.add(s6);
  let s0 = s0.add(s14.rshift1());
  let s14 = s14.sub(s0);
  let s10 = s10.sub(s9);
  let s9 = s9.add(s10.rshift1());
  let s5 = s5.add(s6);
  let s6 = s6.sub(s5.rshift1());
  let s1 = s1.sub(s2);
  let s2 = s2.add(s1.rshift1());
  let s14 = s14.add(s13);
  let s13 = s13.sub(s14.rshift1());
  let s0 = s0.add(s12);
  let s0h = s0.rshift1();
  let s12 = s12.sub(s0h);
  let s15 = s15.sub(s3);
  let s15h = s15.rshift1();
  let s3 = s3.add(s15h);
  let s11 = s11.add(s7);
  let s11h = s11.rshift1();
  let s7 = s7.sub(s11h);
  let s4 = s4.add(s8);
  let s4h = s4.rshift1();
  let s8 = s8.sub(s4h);
  let t = s1.add(s14);
  // 9633/8192 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = s1.tx_mul::<13>(9633);
  // 12873/16384 ~= Sin[7*Pi/16] - Cos[7*Pi/16] ~= 0.7856949583871022
  let s1 = s14.tx_mul::<14>(12873);
  // 6393/32768 ~= Cos[7*Pi/16] ~= 0.19509032201612825
  let t = t.tx_mul::<15>(6393);
  let s1 = s1.add(t);
  let s14 = u.sub(t);
  let t = s6.add(s9);
  // 22725/16384 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s9.tx_mul::<14>(22725);
  // 9041/32768 ~= Sin[5*Pi/16] - Cos[5*Pi/16] ~= 0.27589937928294306
  let s9 = s6.tx_mul::<15>(9041);
  // 18205/32768 ~= Cos[5*Pi/16] ~= 0.5555702330196022
  let t = t.tx_mul::<15>(18205);
  let s9 = s9.add(t);
  let s6 = u.sub(t);
  let t = s5.add(s10);
  // 11363/8192 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s10.tx_mul::<13>(11363);
  let s10 = s5.tx_mul::<15>(9041);
  // 4551/8192 ~= Cos[5*Pi/16] ~= 0.5555702330196022
  let t = t.tx_mul::<13>(4551);
  let s10 = s10.add(t);
  let s5 = t.sub(u);
  let t = s2.add(s13);
  let u = s2.tx_mul::<13>(9633);
  let s2 = s13.tx_mul::<14>(12873);
  let t = t.tx_mul::<15>(6393);
  let s2 = s2.add(t);
  let s13 = u.sub(t);
  let s3 = s3.sub(s4h);
  let s4 = s4.add(s3);
  let s8 = s8.sub(s0h);
  let s0 = s0.add(s8);
  let s7 = s7.add(s15h);
  let s15 = s15.sub(s7);
  let s12 = s12.add(s11h);
  let s11 = s11.sub(s12);
  let s6 = s6.add(s14.rshift1());
  let s14 = s14.sub(s6);
  let s9 = s9.sub(s1.rshift1());
  let s1 = s1.add(s9);
  let s13 = s13.sub(s5.rshift1());
  let s5 = s5.add(s13);
  let s2 = s2.sub(s10.rshift1());
  let s10 = s10.add(s2);
  let t = s3.add(s12);
  // 10703/8192 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = s3.tx_mul::<13>(10703);
  // 8867/16348 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let s3 = s12.tx_mul::<14>(8867);
  // 3135/8192 ~= Cos[3*Pi/8] ~= 0.3826834323650898
  let t = t.tx_mul::<13>(3135);
  let s3 = s3.add(t);
  let s12 = u.sub(t);
  let t = s4.add(s11);
  let u = s4.tx_mul::<13>(10703);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let s4 = s11.tx_mul::<14>(8867);
  let t = t.tx_mul::<13>(3135);
  let s4 = s4.add(t);
  let s11 = u.sub(t);
  let t = s5.add(s10);
  // 11585/8192 ~= Sin[Pi/4] + Cos[Pi/4] ~= 1.4142135623730951
  let u = s10.tx_mul::<13>(11585);
  // 11585/16384 ~= Cos[Pi/4] ~= 0.7071067811865475
  let s10 = t.tx_mul::<14>(11585);
  let s5 = s10.sub(u);
  let t = s6.sub(s9);
  let s6 = s9.tx_mul::<13>(11585);
  let s9 = t.tx_mul::<14>(11585);
  let s6 = s6.add(s9);
  let t = s7.sub(s8);
  let s7 = s8.tx_mul::<13>(11585);
  let s8 = t.tx_mul::<14>(11585);
  let s7 = s7.add(s8);
  [
    s0, s0h, s8, s4, s4h, s12, s2, s10, s6, s14, s1, s9, s5, s13, s3, s11, s7,
    s15,
  ]
}

/// Asymmetric 16-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 32-point butterfly stage.
pub fn daala_idst_iv_16_asym_flat<T: TxOperations>(
  [
    s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15,
  ]: [T; 16],
) -> [T; 16] {
  let t = s6.add(s9);
  // 11585/8192 ~= Sin[Pi/4] + Cos[Pi/4] ~= 1.4142135623730951
  let s9 = s6.tx_mul::<13>(11585);
  // 11585/16384 ~= Cos[Pi/4] ~= 0.7071067811865475
  let s6 = t.tx_mul::<14>(11585);
  let s9 = s9.sub(s6);
  let t = s5.add(s10);
  let s10 = s5.tx_mul::<13>(11585);
  let s5 = t.tx_mul::<14>(11585);
  let s10 = s10.sub(s5);
  let t = s7.add(s8);
  let s8 = s7.tx_mul::<13>(11585);
  let s7 = t.tx_mul::<14>(11585);
  let s8 = s8.sub(s7);
  let t = s3.sub(s12);
  // 10703/8192 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = s12.tx_mul::<13>(10703);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let s12 = s3.tx_mul::<14>(8867);
  // 3135/8192 ~= Cos[3*Pi/8] ~= 0.3826834323650898
  let t = t.tx_mul::<13>(3135);
  let s12 = s12.add(t);
  let s3 = u.add(t);
  let t = s11.sub(s4);
  let u = s11.tx_mul::<13>(10703);
  let s11 = s4.tx_mul::<14>(8867);
  let t = t.tx_mul::<13>(3135);
  let s11 = s11.sub(t);
  let s4 = t.sub(u);
  let s10 = s10.add(s2);
  let s2 = s2.sub(s10.rshift1());
  let s5 = s5.sub(s13);
  let s13 = s13.add(s5.rshift1());
  let s1 = s1.sub(s9);
  let s9 = s9.add(s1.rshift1());
  let s14 = s14.add(s6);
  let s6 = s6.sub(s14.rshift1());
  let s11 = s11.add(s12);
  let s11h = s11.rshift1();
  let s12 = s12.sub(s11h);
  let s15 = s15.add(s7);
  let s15h = s15.rshift1();
  let s7 = s7.sub(s15h);
  let s0 = s0.sub(s8);
  let s0h = s0.rshift1();
  let s8 = s8.add(s0h);
  let s4 = s4.add(s3);
  let s4h = s4.rshift1();
  let s3 = s3.sub(s4h);
  let t = s13.sub(s2);
  // 9633/8192 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = s13.tx_mul::<13>(9633);
  // 12873/16384 ~= Sin[7*Pi/16] - Cos[7*Pi/16] ~= 0.7856949583871022
  let s13 = s2.tx_mul::<14>(12873);
  // 6393/32768 ~= Cos[7*Pi/16] ~= 0.19509032201612825
  let t = t.tx_mul::<15>(6393);
  let s13 = s13.sub(t);
  let s2 = t.sub(u);
  let t = s5.sub(s10);
  // 11363/8192 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s5.tx_mul::<13>(11363);
  // 9041/32768 ~= Sin[5*Pi/16] - Cos[5*Pi/16] ~= 0.27589937928294306
  let s5 = s10.tx_mul::<15>(9041);
  // 4551/8192 ~= Cos[5*Pi/16] ~= 0.5555702330196022
  let t = t.tx_mul::<13>(4551);
  let s5 = s5.sub(t);
  let s10 = t.sub(u);
  let t = s6.add(s9);
  // 22725/16384 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = s9.tx_mul::<14>(22725);
  let s9 = s6.tx_mul::<15>(9041);
  // 18205/32768 ~= Cos[5*Pi/16] ~= 0.5555702330196022
  let t = t.tx_mul::<15>(18205);
  let s9 = s9.add(t);
  let s6 = u.sub(t);
  let t = s1.add(s14);
  let u = s1.tx_mul::<13>(9633);
  let s1 = s14.tx_mul::<14>(12873);
  let t = t.tx_mul::<15>(6393);
  let s1 = s1.add(t);
  let s14 = u.sub(t);
  let s8 = s8.sub(s4h);
  let s4 = s4.add(s8);
  let s7 = s7.add(s11h);
  let s11 = s11.sub(s7);
  let s3 = s3.sub(s15h);
  let s15 = s15.add(s3);
  let s12 = s12.add(s0h);
  let s0 = s0.sub(s12);
  let s13 = s13.add(s14.rshift1());
  let s14 = s14.sub(s13);
  let s2 = s2.add(s1.rshift1());
  let s1 = s1.sub(s2);
  let s6 = s6.sub(s5.rshift1());
  let s5 = s5.add(s6);
  let s9 = s9.sub(s10.rshift1());
  let s10 = s10.add(s9);
  let s0 = s0.sub(s14);
  let s0h = s0.rshift1();
  let s14 = s14.add(s0h);
  let s1 = s1.sub(s15);
  let s1h = s1.rshift1();
  let s15 = s15.add(s1h);
  let s2 = s2.add(s12);
  let s2h = s2.rshift1();
  let s12 = s12.sub(s2h);
  let s3 = s3.add(s13);
  let s3h = s3.rshift1();
  let s13 = s13.sub(s3h);
  let s4 = s4.sub(s10);
  let s4h = s4.rshift1();
  let s10 = s10.add(s4h);
  let s5 = s5.sub(s11);
  let s5h = s5.rshift1();
  let s11 = s11.add(s5h);
  let s6 = s6.add(s8);
  let s6h = s6.rshift1();
  let s8 = s8.sub(s6h);
  let s7 = s7.add(s9);
  let s7h = s7.rshift1();
  let s9 = s9.sub(s7h);
  let t = s14.sub(s1h);
  // 23143/32768 ~= (Sin[17*Pi/64] + Cos[17*Pi/64])/2 ~= 0.7062550401009887
  let u = s1.tx_mul::<15>(23143);
  // 1137/8192 ~= (Sin[17*Pi/64] - Cos[17*Pi/64])*2 ~= 0.13878434101588155
  let s1 = s14.tx_mul::<13>(1137);
  // 44011/32768 ~= Cos[17*Pi/64]*2 ~= 1.3431179096940367
  let t = t.tx_mul::<15>(44011);
  let s1 = s1.add(t);
  let s14 = u.add(t.rshift1());
  let t = s6h.add(s9);
  // 2865/4096 ~= (Sin[19*Pi/64] + Cos[19*Pi/64])/2 ~= 0.6994534179865391
  let u = s6.tx_mul::<12>(2865);
  // 13599/32768 ~= (Sin[19*Pi/64] - Cos[19*Pi/64])*2 ~= 0.41501645397642317
  let s6 = s9.tx_mul::<15>(13599);
  // 305/256 ~= Cos[19*Pi/64]*2 ~= 1.1913986089848667
  let t = t.tx_mul::<8>(305);
  let s6 = s6.add(t);
  let s9 = u.sub(t.rshift1());
  let t = s10.sub(s5h);
  // 5619/8192 ~= (Sin[21*Pi/64] + Cos[21*Pi/64])/2 ~= 0.685915677096747
  let u = s5.tx_mul::<13>(5619);
  // 2815/4096 ~= (Sin[21*Pi/64] - Cos[21*Pi/64])*2 ~= 0.6872517316141009
  let s5 = s10.tx_mul::<12>(2815);
  // 8423/8192 ~= Cos[21*Pi/64]*2 ~= 1.0282054883864433
  let t = t.tx_mul::<13>(8423);
  let s5 = s5.add(t);
  let s10 = u.add(t.rshift1());
  let t = s2h.add(s13);
  // 2727/4096 ~= (Sin[23*Pi/64] + Cos[23*Pi/64])/2 ~= 0.6657721932768628
  let u = s2.tx_mul::<12>(2727);
  // 3903/4096 ~= (Sin[23*Pi/64] - Cos[23*Pi/64])*2 ~= 0.9528683993863225
  let s2 = s13.tx_mul::<12>(3903);
  // 7005/8192 ~= Cos[23*Pi/64]*2 ~= 0.8551101868605642
  let t = t.tx_mul::<13>(7005);
  let s2 = s2.add(t);
  let s13 = u.sub(t.rshift1());
  let t = s12.sub(s3h);
  // 10473/16384 ~= (Sin[25*Pi/64] + Cos[25*Pi/64])/2 ~= 0.6392169592876205
  let u = s3.tx_mul::<14>(10473);
  // 39627/32768 ~= (Sin[25*Pi/64] - Cos[25*Pi/64])*2 ~= 1.2093084235816014
  let s3 = s12.tx_mul::<15>(39627);
  // 11039/16384 ~= Cos[25*Pi/64]*2 ~= 0.6737797067844401
  let t = t.tx_mul::<14>(11039);
  let s3 = s3.add(t);
  let s12 = u.add(t.rshift1());
  let t = s4h.add(s11);
  // 9937/16384 ~= (Sin[27*Pi/64] + Cos[27*Pi/64])/2 ~= 0.606505716548904
  let u = s4.tx_mul::<14>(9937);
  // 1489/1024 ~= (Sin[27*Pi/64] - Cos[27*Pi/64])*2 ~= 1.45410214658256
  let s4 = s11.tx_mul::<10>(1489);
  // 3981/8192 ~= Cos[27*Pi/64]*2 ~= 0.48596035980652774
  let t = t.tx_mul::<13>(3981);
  let s4 = s4.add(t);
  let s11 = u.sub(t.rshift1());
  let t = s8.sub(s7h);
  // 18611/32768 ~= (Sin[29*Pi/64] + Cos[29*Pi/64])/2 ~= 0.5679534922100714
  let u = s7.tx_mul::<15>(18611);
  // 55211/32768 ~= (Sin[29*Pi/64] - Cos[29*Pi/64])*2 ~= 1.6848920710188384
  let s7 = s8.tx_mul::<15>(55211);
  // 601/2048 ~= Cos[29*Pi/64]*2 ~= 0.2934609489107235
  let t = t.tx_mul::<11>(601);
  let s7 = s7.add(t);
  let s8 = u.add(t.rshift1());
  let t = s0h.add(s15);
  // 1073/2048 ~= (Sin[31*Pi/64] + Cos[31*Pi/64])/2 ~= 0.5239315652662953
  let u = s0.tx_mul::<11>(1073);
  // 62241/32768 ~= (Sin[31*Pi/64] - Cos[31*Pi/64])*2 ~= 1.8994555637555088
  let s0 = s15.tx_mul::<15>(62241);
  // 201/2048 ~= Cos[31*Pi/64]*2 ~= 0.09813534865483603
  let t = t.tx_mul::<11>(201);
  let s0 = s0.add(t);
  let s15 = u.sub(t.rshift1());
  [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15]
}
