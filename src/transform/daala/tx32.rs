// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

use super::tx16::*;

/// 32-point orthonormal Type-II forward DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idct_ii_32_precise`] undoes this function exactly.
pub fn daala_fdct_ii_32_precise<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  let t31 = t0.sub(t31);
  let t31h = t31.rshift1();
  let t0 = t0.sub(t31h);
  let t30 = t30.add(t1);
  let t30h = t30.rshift1();
  let t1 = t30h.sub(t1);
  let t29 = t2.sub(t29);
  let t2 = t2.sub(t29.rshift1());
  let t28 = t28.add(t3);
  let t28h = t28.rshift1();
  let t3 = t28h.sub(t3);
  let t27 = t4.sub(t27);
  let t4 = t4.sub(t27.rshift1());
  let t26 = t26.add(t5);
  let t26h = t26.rshift1();
  let t5 = t26h.sub(t5);
  let t25 = t6.sub(t25);
  let t6 = t6.sub(t25.rshift1());
  let t24 = t24.add(t7);
  let t24h = t24.rshift1();
  let t7 = t24h.sub(t7);
  let t23 = t8.sub(t23);
  let t23h = t23.rshift1();
  let t8 = t8.sub(t23h);
  let t22 = t22.add(t9);
  let t22h = t22.rshift1();
  let t9 = t22h.sub(t9);
  let t21 = t10.sub(t21);
  let t10 = t10.sub(t21.rshift1());
  let t20 = t20.add(t11);
  let t20h = t20.rshift1();
  let t11 = t20h.sub(t11);
  let t19 = t12.sub(t19);
  let t12 = t12.sub(t19.rshift1());
  let t18 = t18.add(t13);
  let t18h = t18.rshift1();
  let t13 = t18h.sub(t13);
  let t17 = t14.sub(t17);
  let t17h = t17.rshift1();
  let t14 = t14.sub(t17h);
  let t16 = t16.add(t15);
  let t16h = t16.rshift1();
  let t15 = t16h.sub(t15);
  let [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
  ] =
    daala_fdct_ii_16_asym_precise([
      t0, t16, t16h, t8, t24, t24h, t4, t20, t20h, t12, t28, t28h, t2, t18,
      t18h, t10, t26, t26h, t6, t22, t22h, t14, t30, t30h,
    ]);
  let [
    t31, t15, t23, t7, t27, t11, t19, t3, t29, t13, t21, t5, t25, t9, t17, _,
    t1,
  ] =
    daala_fdst_iv_16_asym_precise([
      t31, t31h, t15, t23, t23h, t7, t27, t11, t19, t3, t29, t13, t21, t5, t25,
      t9, t17, t17h, t1,
    ]);
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// 32-point orthonormal Type-II inverse DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdct_ii_32_precise`] undoes this function exactly.
pub fn daala_idct_ii_32_precise<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  let [
    t31, t31h, t23, t27, t19, t29, t29h, t21, t25, t17, t17h, t30, t22, t26,
    t18, t28, t20, t24, t16,
  ] =
    daala_idst_iv_16_asym_precise([
      t31, t23, t27, t19, t29, t21, t25, t17, t30, t22, t26, t18, t28, t20,
      t24, t16,
    ]);
  let [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t1h, t9, t9h, t5, t5h, t13, t13h,
    t3, t3h, t11, t11h, t7, t7h, t15, t15h,
  ] =
    daala_idct_ii_16_asym_precise([
      t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15,
    ]);
  let t30 = t1h.sub(t30);
  let t1 = t1.sub(t30);
  let t14 = t14.add(t17h);
  let t17 = t14.sub(t17);
  let t22 = t9h.sub(t22);
  let t9 = t9.sub(t22);
  let t6 = t6.add(t25.rshift1());
  let t25 = t6.sub(t25);
  let t26 = t5h.sub(t26);
  let t5 = t5.sub(t26);
  let t10 = t10.add(t21.rshift1());
  let t21 = t10.sub(t21);
  let t18 = t13h.sub(t18);
  let t13 = t13.sub(t18);
  let t2 = t2.add(t29h);
  let t29 = t2.sub(t29);
  let t28 = t3h.sub(t28);
  let t3 = t3.sub(t28);
  let t12 = t12.add(t19.rshift1());
  let t19 = t12.sub(t19);
  let t20 = t11h.sub(t20);
  let t11 = t11.sub(t20);
  let t4 = t4.add(t27.rshift1());
  let t27 = t4.sub(t27);
  let t24 = t7h.sub(t24);
  let t7 = t7.sub(t24);
  let t8 = t8.add(t23.rshift1());
  let t23 = t8.sub(t23);
  let t16 = t15h.sub(t16);
  let t15 = t15.sub(t16);
  let t0 = t0.add(t31h);
  let t31 = t0.sub(t31);
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// Asymmetric 32-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 64-point transform instead of recomputing them.
pub fn daala_fdct_ii_32_asym_precise<T: TxOperations>(
  [
    t0, t16, t16h, t8, t24, t24h, t4, t20, t20h, t12, t28, t28h, t2, t18, t18h,
    t10, t26, t26h, t6, t22, t22h, t14, t30, t30h, t1, t17, t17h, t9, t25,
    t25h, t5, t21, t21h, t13, t29, t29h, t3, t19, t19h, t11, t27, t27h, t7,
    t23, t23h, t15, t31, t31h,
  ]: [T; 48],
) -> [T; 32] {
  let t0 = t0.add(t31h);
  let t31 = t0.sub(t31);
  let t1 = t30h.sub(t1);
  let t30 = t30.sub(t1);
  let t2 = t2.add(t29h);
  let t29 = t2.sub(t29);
  let t3 = t28h.sub(t3);
  let t28 = t28.sub(t3);
  let t4 = t4.add(t27h);
  let t27 = t4.sub(t27);
  let t5 = t26h.sub(t5);
  let t26 = t26.sub(t5);
  let t6 = t6.add(t25h);
  let t25 = t6.sub(t25);
  let t7 = t24h.sub(t7);
  let t24 = t24.sub(t7);
  let t8 = t8.add(t23h);
  let t23 = t8.sub(t23);
  let t9 = t22h.sub(t9);
  let t22 = t22.sub(t9);
  let t10 = t10.add(t21h);
  let t21 = t10.sub(t21);
  let t11 = t20h.sub(t11);
  let t20 = t20.sub(t11);
  let t12 = t12.add(t19h);
  let t19 = t12.sub(t19);
  let t13 = t18h.sub(t13);
  let t18 = t18.sub(t13);
  let t14 = t14.add(t17h);
  let t17 = t14.sub(t17);
  let t15 = t16h.sub(t15);
  let t16 = t16.sub(t15);
  let [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
  ] =
    daala_fdct_ii_16_precise([
      t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14,
      t30,
    ]);
  let [
    t31, t15, t23, t7, t27, t11, t19, t3, t29, t13, t21, t5, t25, t9, t17, t1,
  ] =
    daala_fdst_iv_16_precise([
      t31, t15, t23, t7, t27, t11, t19, t3, t29, t13, t21, t5, t25, t9, t17,
      t1,
    ]);
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// Asymmetric 32-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 64-point butterfly stage.
pub fn daala_idct_ii_32_asym_precise<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 48] {
  let [
    t31, t23, t27, t19, t29, t21, t25, t17, t30, t22, t26, t18, t28, t20, t24,
    t16,
  ] =
    daala_idst_iv_16_precise([
      t31, t23, t27, t19, t29, t21, t25, t17, t30, t22, t26, t18, t28, t20,
      t24, t16,
    ]);
  let [t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15] =
    daala_idct_ii_16_precise([
      t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15,
    ]);
  let t31 = t0.sub(t31);
  let t31h = t31.rshift1();
  let t0 = t0.sub(t31h);
  let t1 = t1.add(t30);
  let t1h = t1.rshift1();
  let t30 = t1h.sub(t30);
  let t29 = t2.sub(t29);
  let t29h = t29.rshift1();
  let t2 = t2.sub(t29h);
  let t3 = t3.add(t28);
  let t3h = t3.rshift1();
  let t28 = t3h.sub(t28);
  let t27 = t4.sub(t27);
  let t27h = t27.rshift1();
  let t4 = t4.sub(t27h);
  let t5 = t5.add(t26);
  let t5h = t5.rshift1();
  let t26 = t5h.sub(t26);
  let t25 = t6.sub(t25);
  let t25h = t25.rshift1();
  let t6 = t6.sub(t25h);
  let t7 = t7.add(t24);
  let t7h = t7.rshift1();
  let t24 = t7h.sub(t24);
  let t23 = t8.sub(t23);
  let t23h = t23.rshift1();
  let t8 = t8.sub(t23h);
  let t9 = t9.add(t22);
  let t9h = t9.rshift1();
  let t22 = t9h.sub(t22);
  let t21 = t10.sub(t21);
  let t21h = t21.rshift1();
  let t10 = t10.sub(t21h);
  let t11 = t11.add(t20);
  let t11h = t11.rshift1();
  let t20 = t11h.sub(t20);
  let t19 = t12.sub(t19);
  let t19h = t19.rshift1();
  let t12 = t12.sub(t19h);
  let t13 = t13.add(t18);
  let t13h = t13.rshift1();
  let t18 = t13h.sub(t18);
  let t17 = t14.sub(t17);
  let t17h = t17.rshift1();
  let t14 = t14.sub(t17h);
  let t15 = t15.add(t16);
  let t15h = t15.rshift1();
  let t16 = t15h.sub(t16);
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t1h, t17, t17h, t9, t9h, t25, t25h, t5, t5h, t21, t21h, t13, t13h, t29,
    t29h, t3, t3h, t19, t19h, t11, t11h, t27, t27h, t7, t7h, t23, t23h, t15,
    t15h, t31, t31h,
  ]
}

/// 32-point orthonormal Type-II forward DCT with flattened rotations.
pub fn daala_fdct_ii_32_flat<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  let t31 = t0.sub(t31);
  let t31h = t31.rshift1();
  let t0 = t0.sub(t31h);
  let t30 = t30.add(t1);
  let t30h = t30.rshift1();
  let t1 = t1.sub(t30h);
  let t29 = t2.sub(t29);
  let t29h = t29.rshift1();
  let t2 = t2.sub(t29h);
  let t28 = t28.add(t3);
  let t28h = t28.rshift1();
  let t3 = t3.sub(t28h);
  let t27 = t4.sub(t27);
  let t27h = t27.rshift1();
  let t4 = t4.sub(t27h);
  let t26 = t26.add(t5);
  let t26h = t26.rshift1();
  let t5 = t5.sub(t26h);
  let t25 = t6.sub(t25);
  let t25h = t25.rshift1();
  let t6 = t6.sub(t25h);
  let t24 = t24.add(t7);
  let t24h = t24.rshift1();
  let t7 = t7.sub(t24h);
  let t23 = t8.sub(t23);
  let t23h = t23.rshift1();
  let t8 = t8.sub(t23h);
  let t22 = t22.add(t9);
  let t22h = t22.rshift1();
  let t9 = t9.sub(t22h);
  let t21 = t10.sub(t21);
  let t21h = t21.rshift1();
  let t10 = t10.sub(t21h);
  let t20 = t20.add(t11);
  let t20h = t20.rshift1();
  let t11 = t11.sub(t20h);
  let t19 = t12.sub(t19);
  let t19h = t19.rshift1();
  let t12 = t12.sub(t19h);
  let t18 = t18.add(t13);
  let t18h = t18.rshift1();
  let t13 = t13.sub(t18h);
  let t17 = t14.sub(t17);
  let t17h = t17.rshift1();
  let t14 = t14.sub(t17h);
  let t16 = t16.add(t15);
  let t16h = t16.rshift1();
  let t15 = t15.sub(t16h);
  let [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
  ] =
    daala_fdct_ii_16_asym_flat([
      t0, t16, t16h, t8, t24, t24h, t4, t20, t20h, t12, t28, t28h, t2, t18,
      t18h, t10, t26, t26h, t6, t22, t22h, t14, t30, t30h,
    ]);
  let [
    t31, _, t15, t23, _, t7, t27, t11, t19, t3, t29, t13, t21, t5, t25, t9,
    t17, t1,
  ] =
    daala_fdst_iv_16_asym_flat([
      t31, t31h, t15, t23, t23h, t7, t27, t27h, t11, t19, t19h, t3, t29, t29h,
      t13, t21, t21h, t5, t25, t25h, t9, t17, t17h, t1,
    ]);
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// 32-point orthonormal Type-II inverse DCT with flattened rotations.
pub fn daala_idct_ii_32_flat<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  let [
    t31, t23, t27, t19, t29, t21, t25, t17, t30, t22, t26, t18, t28, t20, t24,
    t16,
  ] =
    daala_idst_iv_16_asym_flat([
      t31, t23, t27, t19, t29, t21, t25, t17, t30, t22, t26, t18, t28, t20,
      t24, t16,
    ]);
  let [
    t0, t8, t4, t12, t2, t10, t6, t14, t1, t1h, t9, t9h, t5, t5h, t13, t13h,
    t3, t3h, t11, t11h, t7, t7h, t15, t15h,
  ] =
    daala_idct_ii_16_asym_flat([
      t0, t8, t4, t12, t2, t10, t6, t14, t1, t9, t5, t13, t3, t11, t7, t15,
    ]);
  let t30 = t30.add(t1h);
  let t1 = t1.sub(t30);
  let t17h = t17.rshift1();
  let t14 = t14.add(t17h);
  let t17 = t14.sub(t17);
  let t22 = t22.add(t9h);
  let t9 = t9.sub(t22);
  let t6 = t6.add(t25.rshift1());
  let t25 = t6.sub(t25);
  let t26 = t26.add(t5h);
  let t5 = t5.sub(t26);
  let t10 = t10.add(t21.rshift1());
  let t21 = t10.sub(t21);
  let t18 = t18.add(t13h);
  let t13 = t13.sub(t18);
  let t29h = t29.rshift1();
  let t2 = t2.add(t29h);
  let t29 = t2.sub(t29);
  let t28 = t28.add(t3h);
  let t3 = t3.sub(t28);
  let t12 = t12.add(t19.rshift1());
  let t19 = t12.sub(t19);
  let t20 = t20.add(t11h);
  let t11 = t11.sub(t20);
  let t4 = t4.add(t27.rshift1());
  let t27 = t4.sub(t27);
  let t24 = t24.add(t7h);
  let t7 = t7.sub(t24);
  let t8 = t8.add(t23.rshift1());
  let t23 = t8.sub(t23);
  let t16 = t16.add(t15h);
  let t15 = t15.sub(t16);
  let t31h = t31.rshift1();
  let t0 = t0.add(t31h);
  let t31 = t0.sub(t31);
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// 32-point orthonormal Type-IV forward DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idst_iv_32_precise`] undoes this function exactly.
pub fn daala_fdst_iv_32_precise<T: TxOperations>(
  [
    t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11, t12, t13, t14, t15, t16,
    t17, t18, t19, t20, t21, t22, t23, t24, t25, t26, t27, t28, t29, t30, t31,
  ]: [T; 32],
) -> [T; 32] {
  // Stage 0
  let t25 = t25.add(t6.tx_mul::<12>(659));
  let t6 = t6.sub(t25.tx_mul::<15>(10279));
  let t25 = t25.add(t6.tx_mul::<12>(659));
  let t17 = t17.add(t14.tx_mul::<13>(3045));
  let t14 = t14.sub(t17.tx_mul::<15>(21403));
  let t17 = t17.add(t14.tx_mul::<13>(3045));
  let t9 = t9.add(t22.tx_mul::<15>(20191));
  let t22 = t22.sub(t9.tx_mul::<15>(29269));
  let t9 = t9.add(t22.tx_mul::<15>(20191));
  let t30 = t30.add(t1.tx_mul::<15>(1207));
  let t1 = t1.sub(t30.tx_mul::<15>(2411));
  let t30 = t30.add(t1.tx_mul::<15>(1207));
  let t4 = t4.add(t27.tx_mul::<14>(13113));
  let t27 = t27.sub(t4.tx_mul::<13>(7993));
  let t4 = t4.add(t27.tx_mul::<14>(13113));
  let t19 = t19.add(t12.tx_mul::<15>(10381));
  let t12 = t12.sub(t19.tx_mul::<13>(4717));
  let t19 = t19.add(t12.tx_mul::<15>(10381));
  let t11 = t11.add(t20.tx_mul::<15>(18035));
  let t20 = t20.sub(t11.tx_mul::<13>(6921));
  let t11 = t11.add(t20.tx_mul::<15>(18035));
  let t28 = t28.add(t3.tx_mul::<14>(1411));
  let t3 = t3.sub(t28.tx_mul::<14>(2801));
  let t28 = t28.add(t3.tx_mul::<14>(1411));
  let t26 = t26.add(t5.tx_mul::<14>(2225));
  let t5 = t5.sub(t26.tx_mul::<13>(2185));
  let t26 = t26.add(t5.tx_mul::<14>(2225));
  let t18 = t18.add(t13.tx_mul::<15>(11273));
  let t13 = t13.sub(t18.tx_mul::<9>(315));
  let t18 = t18.add(t13.tx_mul::<15>(11273));
  let t21 = t21.add(t10.tx_mul::<15>(8637));
  let t10 = t10.sub(t21.tx_mul::<15>(16151));
  let t21 = t21.add(t10.tx_mul::<15>(8637));
  let t29 = t29.add(t2.tx_mul::<15>(2013));
  let t2 = t2.sub(t29.tx_mul::<15>(4011));
  let t29 = t29.add(t2.tx_mul::<15>(2013));
  let t24 = t24.add(t7.tx_mul::<15>(6101));
  let t7 = t7.sub(t24.tx_mul::<15>(11793));
  let t24 = t24.add(t7.tx_mul::<15>(6101));
  let t8 = t8.add(t23.tx_mul::<14>(10659));
  let t23 = t23.sub(t8.tx_mul::<15>(29957));
  let t8 = t8.add(t23.tx_mul::<14>(10659));
  let t16 = t16.add(t15.tx_mul::<11>(819));
  let t15 = t15.sub(t16.tx_mul::<15>(22595));
  let t16 = t16.add(t15.tx_mul::<11>(819));
  let t0 = t0.add(t31.tx_mul::<15>(31973));
  let t31 = t31.sub(t0.tx_mul::<14>(16379));
  let t0 = t0.add(t31.tx_mul::<15>(31973));
  // Stage 1
  let t19 = t19.sub(t28);
  let t19h = t19.rshift1();
  let t28 = t28.add(t19h);
  let t27 = t20.sub(t27);
  let t27h = t27.rshift1();
  let t20 = t27h.sub(t20);
  let t12 = t12.add(t3);
  let t12h = t12.rshift1();
  let t3 = t3.sub(t12h);
  let t4 = t4.add(t11);
  let t4h = t4.rshift1();
  let t11 = t11.sub(t4h);
  let t31 = t31.add(t15);
  let t31h = t31.rshift1();
  let t15 = t15.sub(t31h);
  let t8 = t8.sub(t24);
  let t8h = t8.rshift1();
  let t24 = t24.add(t8h);
  let t0 = t0.add(t16);
  let t0h = t0.rshift1();
  let t16 = t16.sub(t0h);
  let t23 = t7.sub(t23);
  let t23h = t23.rshift1();
  let t7 = t7.sub(t23h);
  let t17 = t17.sub(t30);
  let t17h = t17.rshift1();
  let t30 = t30.add(t17h);
  let t6 = t6.add(t22);
  let t6h = t6.rshift1();
  let t22 = t6h.sub(t22);
  let t14 = t14.add(t1);
  let t14h = t14.rshift1();
  let t1 = t1.sub(t14h);
  let t25 = t25.add(t9);
  let t25h = t25.rshift1();
  let t9 = t9.sub(t25h);
  let t2 = t2.sub(t13);
  let t2h = t2.rshift1();
  let t13 = t13.add(t2h);
  let t21 = t26.sub(t21);
  let t21h = t21.rshift1();
  let t26 = t26.sub(t21h);
  let t29 = t29.add(t18);
  let t29h = t29.rshift1();
  let t18 = t18.sub(t29h);
  let t10 = t10.add(t5);
  let t10h = t10.rshift1();
  let t5 = t5.sub(t10h);
  // Stage 2
  let t22 = t22.sub(t17h);
  let t17 = t17.add(t22);
  let t9 = t14h.sub(t9);
  let t14 = t14.sub(t9);
  let t13 = t21h.sub(t13);
  let t21 = t21.sub(t13);
  let t18 = t18.add(t10h);
  let t10 = t10.sub(t18);
  let t20 = t19h.sub(t20);
  let t19 = t19.sub(t20);
  let t11 = t11.sub(t12h);
  let t12 = t12.add(t11);
  let t16 = t16.add(t23h);
  let t23 = t16.sub(t23);
  let t15 = t15.add(t8h);
  let t8 = t15.sub(t8);
  let t3 = t3.sub(t27h);
  let t27 = t27.add(t3);
  let t28 = t28.add(t4h);
  let t4 = t4.sub(t28);
  let t24 = t24.sub(t0h);
  let t0 = t0.add(t24);
  let t7 = t31h.sub(t7);
  let t31 = t7.sub(t31);
  let t1 = t1.sub(t6h);
  let t6 = t6.add(t1);
  let t30 = t30.add(t25h);
  let t25 = t25.sub(t30);
  let t26 = t26.sub(t29h);
  let t29 = t29.add(t26);
  let t5 = t5.add(t2h);
  let t2 = t2.sub(t5);
  // Stage 3
  let t19 = t19.add(t12.tx_mul::<15>(11725));
  let t12 = t12.sub(t19.tx_mul::<13>(5197));
  let t19 = t19.add(t12.tx_mul::<15>(11725));
  let t13 = t13.add(t18.tx_mul::<11>(513));
  let t18 = t18.sub(t13.tx_mul::<15>(15447));
  let t13 = t13.add(t18.tx_mul::<11>(513));
  let t17 = t17.add(t14.tx_mul::<15>(4861));
  let t14 = t14.sub(t17.tx_mul::<12>(1189));
  let t17 = t17.add(t14.tx_mul::<15>(4861));
  let t16 = t16.add(t15.tx_mul::<14>(805));
  let t15 = t15.sub(t16.tx_mul::<13>(803));
  let t16 = t16.add(t15.tx_mul::<14>(805));
  let t11 = t11.add(t20.tx_mul::<14>(7749));
  let t20 = t20.sub(t11.tx_mul::<14>(12665));
  let t11 = t11.add(t20.tx_mul::<14>(7749));
  let t21 = t21.add(t10.tx_mul::<12>(2455));
  let t10 = t10.sub(t21.tx_mul::<15>(28899));
  let t21 = t21.add(t10.tx_mul::<12>(2455));
  let t9 = t9.add(t22.tx_mul::<14>(12151));
  let t22 = t22.sub(t9.tx_mul::<15>(31357));
  let t9 = t9.add(t22.tx_mul::<14>(12151));
  let t23 = t23.add(t8.tx_mul::<15>(29699));
  let t8 = t8.sub(t23.tx_mul::<14>(16305));
  let t23 = t23.add(t8.tx_mul::<15>(29699));
  // Stage 4
  let t15 = t15.sub(t12);
  let t15h = t15.rshift1();
  let t12 = t12.add(t15h);
  let t18 = t17.sub(t18);
  let t18h = t18.rshift1();
  let t17 = t17.sub(t18h);
  let t16 = t16.add(t19);
  let t16h = t16.rshift1();
  let t19 = t16h.sub(t19);
  let t13 = t13.sub(t14);
  let t13h = t13.rshift1();
  let t14 = t14.add(t13h);
  let t22 = t10.sub(t22);
  let t22h = t22.rshift1();
  let t10 = t22h.sub(t10);
  let t9 = t9.add(t21);
  let t9h = t9.rshift1();
  let t21 = t21.sub(t9h);
  let t11 = t11.add(t8);
  let t11h = t11.rshift1();
  let t8 = t8.sub(t11h);
  let t20 = t20.add(t23);
  let t20h = t20.rshift1();
  let t23 = t23.sub(t20h);
  let t1 = t1.sub(t2);
  let t1h = t1.rshift1();
  let t2 = t2.add(t1h);
  let t3 = t3.add(t31);
  let t3h = t3.rshift1();
  let t31 = t31.sub(t3h);
  let t30 = t30.add(t29);
  let t30h = t30.rshift1();
  let t29 = t29.sub(t30h);
  let t28 = t28.sub(t0);
  let t28h = t28.rshift1();
  let t0 = t0.add(t28h);
  let t26 = t6.sub(t26);
  let t6 = t6.sub(t26.rshift1());
  let t24 = t24.add(t27);
  let t27 = t24.rshift1().sub(t27);
  let t7 = t4.sub(t7);
  let t4 = t4.sub(t7.rshift1());
  let t5 = t5.sub(t25);
  let t25 = t25.add(t5.rshift1());
  // Stage 5
  let t25 = t25.add(t6.tx_mul::<13>(2485));
  let t6 = t6.sub(t25.tx_mul::<15>(18205));
  let t25 = t25.add(t6.tx_mul::<13>(2485));
  let t24 = t24.add(t7.tx_mul::<15>(3227));
  let t7 = t7.sub(t24.tx_mul::<15>(6393));
  let t24 = t24.add(t7.tx_mul::<15>(3227));
  let t26 = t26.add(t5.tx_mul::<15>(17515));
  let t5 = t5.sub(t26.tx_mul::<14>(13623));
  let t26 = t26.add(t5.tx_mul::<15>(17515));
  let t4 = t4.add(t27.tx_mul::<13>(6723));
  let t27 = t27.sub(t4.tx_mul::<14>(16069));
  let t4 = t4.add(t27.tx_mul::<13>(6723));
  // Stage 6
  let t19 = t19.add(t13h);
  let t13 = t13.sub(t19);
  let t12 = t12.sub(t18h);
  let t18 = t18.add(t12);
  let t17 = t16h.sub(t17);
  let t16 = t16.sub(t17);
  let t14 = t14.add(t15h);
  let t15 = t15.sub(t14);
  let t21 = t20h.sub(t21);
  let t20 = t20.sub(t21);
  let t10 = t10.add(t11h);
  let t11 = t11.sub(t10);
  let t23 = t23.sub(t22h);
  let t22 = t22.add(t23);
  let t8 = t8.add(t9h);
  let t9 = t8.sub(t9);
  let t29 = t3h.sub(t29);
  let t3 = t3.sub(t29);
  let t2 = t2.sub(t28h);
  let t28 = t28.add(t2);
  let t31 = t31.sub(t1h);
  let t1 = t1.add(t31);
  let t0 = t0.add(t30h);
  let t30 = t30.sub(t0);
  let t25 = t24.rshift1().sub(t25);
  let t24 = t24.sub(t25);
  let t6 = t6.add(t7.rshift1());
  let t7 = t7.sub(t6);
  let t4 = t26.rshift1().sub(t4);
  let t26 = t26.sub(t4);
  let t27 = t27.add(t5.rshift1());
  let t5 = t27.sub(t5);
  // Stage 7
  let t13 = t13.add(t18.tx_mul::<15>(21895));
  let t18 = t18.sub(t13.tx_mul::<14>(15137));
  let t13 = t13.add(t18.tx_mul::<15>(21895));
  let t19 = t19.add(t12.tx_mul::<15>(21895));
  let t12 = t12.sub(t19.tx_mul::<14>(15137));
  let t19 = t19.add(t12.tx_mul::<15>(21895));
  let t17 = t17.add(t14.tx_mul::<15>(13573));
  let t14 = t14.sub(t17.tx_mul::<14>(11585));
  let t17 = t17.add(t14.tx_mul::<15>(13573));
  let t11 = t11.add(t20.tx_mul::<15>(21895));
  let t20 = t20.sub(t11.tx_mul::<14>(15137));
  let t11 = t11.add(t20.tx_mul::<15>(21895));
  let t10 = t10.add(t21.tx_mul::<14>(3259));
  let t21 = t21.sub(t10.tx_mul::<13>(3135));
  let t10 = t10.add(t21.tx_mul::<14>(3259));
  let t9 = t9.add(t22.tx_mul::<15>(13573));
  let t22 = t22.sub(t9.tx_mul::<14>(11585));
  let t9 = t9.add(t22.tx_mul::<15>(13573));
  let t28 = t28.add(t3.tx_mul::<14>(3259));
  let t3 = t3.sub(t28.tx_mul::<13>(3135));
  let t28 = t28.add(t3.tx_mul::<14>(3259));
  let t2 = t2.add(t29.tx_mul::<14>(3259));
  let t29 = t29.sub(t2.tx_mul::<13>(3135));
  let t2 = t2.add(t29.tx_mul::<14>(3259));
  let t30 = t30.add(t1.tx_mul::<15>(13573));
  let t1 = t1.sub(t30.tx_mul::<14>(11585));
  let t30 = t30.add(t1.tx_mul::<15>(13573));
  let t25 = t25.add(t6.tx_mul::<15>(13573));
  let t6 = t6.sub(t25.tx_mul::<14>(11585));
  let t25 = t25.add(t6.tx_mul::<15>(13573));
  let t26 = t26.add(t5.tx_mul::<15>(13573));
  let t5 = t5.sub(t26.tx_mul::<14>(11585));
  let t26 = t26.add(t5.tx_mul::<15>(13573));
  [
    t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11, t12, t13, t14, t15, t16,
    t17, t18, t19, t20, t21, t22, t23, t24, t25, t26, t27, t28, t29, t30, t31,
  ]
}

/// 32-point orthonormal Type-IV inverse DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdst_iv_32_precise`] undoes this function exactly.
pub fn daala_idst_iv_32_precise<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  // Stage 0
  let t26 = t26.sub(t5.tx_mul::<15>(13573));
  let t5 = t5.add(t26.tx_mul::<14>(11585));
  let t26 = t26.sub(t5.tx_mul::<15>(13573));
  let t25 = t25.sub(t6.tx_mul::<15>(13573));
  let t6 = t6.add(t25.tx_mul::<14>(11585));
  let t25 = t25.sub(t6.tx_mul::<15>(13573));
  let t30 = t30.sub(t1.tx_mul::<15>(13573));
  let t1 = t1.add(t30.tx_mul::<14>(11585));
  let t30 = t30.sub(t1.tx_mul::<15>(13573));
  let t2 = t2.sub(t29.tx_mul::<14>(3259));
  let t29 = t29.add(t2.tx_mul::<13>(3135));
  let t2 = t2.sub(t29.tx_mul::<14>(3259));
  let t28 = t28.sub(t3.tx_mul::<14>(3259));
  let t3 = t3.add(t28.tx_mul::<13>(3135));
  let t28 = t28.sub(t3.tx_mul::<14>(3259));
  let t9 = t9.sub(t22.tx_mul::<15>(13573));
  let t22 = t22.add(t9.tx_mul::<14>(11585));
  let t9 = t9.sub(t22.tx_mul::<15>(13573));
  let t10 = t10.sub(t21.tx_mul::<14>(3259));
  let t21 = t21.add(t10.tx_mul::<13>(3135));
  let t10 = t10.sub(t21.tx_mul::<14>(3259));
  let t11 = t11.sub(t20.tx_mul::<15>(21895));
  let t20 = t20.add(t11.tx_mul::<14>(15137));
  let t11 = t11.sub(t20.tx_mul::<15>(21895));
  let t17 = t17.sub(t14.tx_mul::<15>(13573));
  let t14 = t14.add(t17.tx_mul::<14>(11585));
  let t17 = t17.sub(t14.tx_mul::<15>(13573));
  let t19 = t19.sub(t12.tx_mul::<15>(21895));
  let t12 = t12.add(t19.tx_mul::<14>(15137));
  let t19 = t19.sub(t12.tx_mul::<15>(21895));
  let t13 = t13.sub(t18.tx_mul::<15>(21895));
  let t18 = t18.add(t13.tx_mul::<14>(15137));
  let t13 = t13.sub(t18.tx_mul::<15>(21895));
  // Stage 1
  let t5 = t27.sub(t5);
  let t27 = t27.sub(t5.rshift1());
  let t26 = t26.add(t4);
  let t4 = t26.rshift1().sub(t4);
  let t7 = t7.add(t6);
  let t6 = t6.sub(t7.rshift1());
  let t24 = t24.add(t25);
  let t25 = t24.rshift1().sub(t25);
  let t30 = t30.add(t0);
  let t30h = t30.rshift1();
  let t0 = t0.sub(t30h);
  let t1 = t1.sub(t31);
  let t1h = t1.rshift1();
  let t31 = t31.add(t1h);
  let t28 = t28.sub(t2);
  let t28h = t28.rshift1();
  let t2 = t2.add(t28h);
  let t3 = t3.add(t29);
  let t3h = t3.rshift1();
  let t29 = t3h.sub(t29);
  let t9 = t8.sub(t9);
  let t9h = t9.rshift1();
  let t8 = t8.sub(t9h);
  let t22 = t22.sub(t23);
  let t22h = t22.rshift1();
  let t23 = t23.add(t22h);
  let t11 = t11.add(t10);
  let t11h = t11.rshift1();
  let t10 = t10.sub(t11h);
  let t20 = t20.add(t21);
  let t20h = t20.rshift1();
  let t21 = t20h.sub(t21);
  let t15 = t15.add(t14);
  let t15h = t15.rshift1();
  let t14 = t14.sub(t15h);
  let t16 = t16.add(t17);
  let t16h = t16.rshift1();
  let t17 = t16h.sub(t17);
  let t18 = t18.sub(t12);
  let t18h = t18.rshift1();
  let t12 = t12.add(t18h);
  let t13 = t13.add(t19);
  let t13h = t13.rshift1();
  let t19 = t19.sub(t13h);
  // Stage 2
  let t4 = t4.sub(t27.tx_mul::<13>(6723));
  let t27 = t27.add(t4.tx_mul::<14>(16069));
  let t4 = t4.sub(t27.tx_mul::<13>(6723));
  let t26 = t26.sub(t5.tx_mul::<15>(17515));
  let t5 = t5.add(t26.tx_mul::<14>(13623));
  let t26 = t26.sub(t5.tx_mul::<15>(17515));
  let t24 = t24.sub(t7.tx_mul::<15>(3227));
  let t7 = t7.add(t24.tx_mul::<15>(6393));
  let t24 = t24.sub(t7.tx_mul::<15>(3227));
  let t25 = t25.sub(t6.tx_mul::<13>(2485));
  let t6 = t6.add(t25.tx_mul::<15>(18205));
  let t25 = t25.sub(t6.tx_mul::<13>(2485));
  // Stage 3
  let t25 = t25.sub(t5.rshift1());
  let t5 = t5.add(t25);
  let t4 = t4.add(t7.rshift1());
  let t7 = t4.sub(t7);
  let t27 = t24.rshift1().sub(t27);
  let t24 = t24.sub(t27);
  let t6 = t6.add(t26.rshift1());
  let t26 = t6.sub(t26);
  let t0 = t0.sub(t28h);
  let t28 = t28.add(t0);
  let t29 = t29.add(t30h);
  let t30 = t30.sub(t29);
  let t31 = t31.add(t3h);
  let t3 = t3.sub(t31);
  let t2 = t2.sub(t1h);
  let t1 = t1.add(t2);
  let t23 = t23.add(t20h);
  let t20 = t20.sub(t23);
  let t8 = t8.add(t11h);
  let t11 = t11.sub(t8);
  let t21 = t21.add(t9h);
  let t9 = t9.sub(t21);
  let t10 = t22h.sub(t10);
  let t22 = t10.sub(t22);
  let t14 = t14.sub(t13h);
  let t13 = t13.add(t14);
  let t19 = t16h.sub(t19);
  let t16 = t16.sub(t19);
  let t17 = t17.add(t18h);
  let t18 = t17.sub(t18);
  let t12 = t12.sub(t15h);
  let t15 = t15.add(t12);
  // Stage 4
  let t23 = t23.sub(t8.tx_mul::<15>(29699));
  let t8 = t8.add(t23.tx_mul::<14>(16305));
  let t23 = t23.sub(t8.tx_mul::<15>(29699));
  let t9 = t9.sub(t22.tx_mul::<14>(12151));
  let t22 = t22.add(t9.tx_mul::<15>(31357));
  let t9 = t9.sub(t22.tx_mul::<14>(12151));
  let t21 = t21.sub(t10.tx_mul::<12>(2455));
  let t10 = t10.add(t21.tx_mul::<15>(28899));
  let t21 = t21.sub(t10.tx_mul::<12>(2455));
  let t11 = t11.sub(t20.tx_mul::<14>(7749));
  let t20 = t20.add(t11.tx_mul::<14>(12665));
  let t11 = t11.sub(t20.tx_mul::<14>(7749));
  let t16 = t16.sub(t15.tx_mul::<14>(805));
  let t15 = t15.add(t16.tx_mul::<13>(803));
  let t16 = t16.sub(t15.tx_mul::<14>(805));
  let t17 = t17.sub(t14.tx_mul::<15>(4861));
  let t14 = t14.add(t17.tx_mul::<12>(1189));
  let t17 = t17.sub(t14.tx_mul::<15>(4861));
  let t13 = t13.sub(t18.tx_mul::<11>(513));
  let t18 = t18.add(t13.tx_mul::<15>(15447));
  let t13 = t13.sub(t18.tx_mul::<11>(513));
  let t19 = t19.sub(t12.tx_mul::<15>(11725));
  let t12 = t12.add(t19.tx_mul::<13>(5197));
  let t19 = t19.sub(t12.tx_mul::<15>(11725));
  // Stage 5
  let t2 = t2.add(t5);
  let t2h = t2.rshift1();
  let t5 = t5.sub(t2h);
  let t29 = t29.sub(t26);
  let t29h = t29.rshift1();
  let t26 = t26.add(t29h);
  let t25 = t25.add(t30);
  let t25h = t25.rshift1();
  let t30 = t30.sub(t25h);
  let t6 = t6.sub(t1);
  let t6h = t6.rshift1();
  let t1 = t1.add(t6h);
  let t31 = t7.sub(t31);
  let t31h = t31.rshift1();
  let t7 = t31h.sub(t7);
  let t0 = t0.sub(t24);
  let t0h = t0.rshift1();
  let t24 = t24.add(t0h);
  let t4 = t4.add(t28);
  let t4h = t4.rshift1();
  let t28 = t28.sub(t4h);
  let t27 = t27.sub(t3);
  let t27h = t27.rshift1();
  let t3 = t3.add(t27h);
  let t8 = t15.sub(t8);
  let t8h = t8.rshift1();
  let t15 = t15.sub(t8h);
  let t23 = t16.sub(t23);
  let t23h = t23.rshift1();
  let t16 = t16.sub(t23h);
  let t12 = t12.sub(t11);
  let t12h = t12.rshift1();
  let t11 = t11.add(t12h);
  let t19 = t19.add(t20);
  let t19h = t19.rshift1();
  let t20 = t19h.sub(t20);
  let t10 = t10.add(t18);
  let t10h = t10.rshift1();
  let t18 = t18.sub(t10h);
  let t21 = t21.add(t13);
  let t21h = t21.rshift1();
  let t13 = t21h.sub(t13);
  let t14 = t14.add(t9);
  let t14h = t14.rshift1();
  let t9 = t14h.sub(t9);
  let t17 = t17.sub(t22);
  let t17h = t17.rshift1();
  let t22 = t22.add(t17h);
  // Stage 6
  let t5 = t5.add(t10h);
  let t10 = t10.sub(t5);
  let t18 = t18.add(t29h);
  let t29 = t29.sub(t18);
  let t26 = t26.add(t21h);
  let t21 = t26.sub(t21);
  let t13 = t13.sub(t2h);
  let t2 = t2.add(t13);
  let t9 = t9.add(t25h);
  let t25 = t25.sub(t9);
  let t1 = t1.add(t14h);
  let t14 = t14.sub(t1);
  let t22 = t6h.sub(t22);
  let t6 = t6.sub(t22);
  let t30 = t30.sub(t17h);
  let t17 = t17.add(t30);
  let t7 = t7.add(t23h);
  let t23 = t7.sub(t23);
  let t16 = t16.add(t0h);
  let t0 = t0.sub(t16);
  let t24 = t24.sub(t8h);
  let t8 = t8.add(t24);
  let t15 = t15.add(t31h);
  let t31 = t31.sub(t15);
  let t11 = t11.add(t4h);
  let t4 = t4.sub(t11);
  let t3 = t3.add(t12h);
  let t12 = t12.sub(t3);
  let t20 = t27h.sub(t20);
  let t27 = t20.sub(t27);
  let t28 = t28.sub(t19h);
  let t19 = t19.add(t28);
  // Stage 7
  let t0 = t0.sub(t31.tx_mul::<15>(31973));
  let t31 = t31.add(t0.tx_mul::<14>(16379));
  let t0 = t0.sub(t31.tx_mul::<15>(31973));
  let t16 = t16.sub(t15.tx_mul::<11>(819));
  let t15 = t15.add(t16.tx_mul::<15>(22595));
  let t16 = t16.sub(t15.tx_mul::<11>(819));
  let t8 = t8.sub(t23.tx_mul::<14>(10659));
  let t23 = t23.add(t8.tx_mul::<15>(29957));
  let t8 = t8.sub(t23.tx_mul::<14>(10659));
  let t24 = t24.sub(t7.tx_mul::<15>(6101));
  let t7 = t7.add(t24.tx_mul::<15>(11793));
  let t24 = t24.sub(t7.tx_mul::<15>(6101));
  let t29 = t29.sub(t2.tx_mul::<15>(2013));
  let t2 = t2.add(t29.tx_mul::<15>(4011));
  let t29 = t29.sub(t2.tx_mul::<15>(2013));
  let t21 = t21.sub(t10.tx_mul::<15>(8637));
  let t10 = t10.add(t21.tx_mul::<15>(16151));
  let t21 = t21.sub(t10.tx_mul::<15>(8637));
  let t18 = t18.sub(t13.tx_mul::<15>(11273));
  let t13 = t13.add(t18.tx_mul::<9>(315));
  let t18 = t18.sub(t13.tx_mul::<15>(11273));
  let t26 = t26.sub(t5.tx_mul::<14>(2225));
  let t5 = t5.add(t26.tx_mul::<13>(2185));
  let t26 = t26.sub(t5.tx_mul::<14>(2225));
  let t28 = t28.sub(t3.tx_mul::<14>(1411));
  let t3 = t3.add(t28.tx_mul::<14>(2801));
  let t28 = t28.sub(t3.tx_mul::<14>(1411));
  let t11 = t11.sub(t20.tx_mul::<15>(18035));
  let t20 = t20.add(t11.tx_mul::<13>(6921));
  let t11 = t11.sub(t20.tx_mul::<15>(18035));
  let t19 = t19.sub(t12.tx_mul::<15>(10381));
  let t12 = t12.add(t19.tx_mul::<13>(4717));
  let t19 = t19.sub(t12.tx_mul::<15>(10381));
  let t4 = t4.sub(t27.tx_mul::<14>(13113));
  let t27 = t27.add(t4.tx_mul::<13>(7993));
  let t4 = t4.sub(t27.tx_mul::<14>(13113));
  let t30 = t30.sub(t1.tx_mul::<15>(1207));
  let t1 = t1.add(t30.tx_mul::<15>(2411));
  let t30 = t30.sub(t1.tx_mul::<15>(1207));
  let t9 = t9.sub(t22.tx_mul::<15>(20191));
  let t22 = t22.add(t9.tx_mul::<15>(29269));
  let t9 = t9.sub(t22.tx_mul::<15>(20191));
  let t17 = t17.sub(t14.tx_mul::<13>(3045));
  let t14 = t14.add(t17.tx_mul::<15>(21403));
  let t17 = t17.sub(t14.tx_mul::<13>(3045));
  let t25 = t25.sub(t6.tx_mul::<12>(659));
  let t6 = t6.add(t25.tx_mul::<15>(10279));
  let t25 = t25.sub(t6.tx_mul::<12>(659));
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// Asymmetric 32-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 64-point transform instead of recomputing them.
pub fn daala_fdst_iv_32_asym_precise<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  let t30 = t30.neg();
  // 13573/16384 ~= 2*Tan[Pi/8] ~= 0.828427124746190
  let t5 = t5.sub(t26.tx_mul::<14>(13573));
  // 11585/32768 ~= Sin[Pi/4]/2 ~= 0.353553390593274
  let t26 = t26.add(t5.tx_mul::<15>(11585));
  let t5 = t5.sub(t26.tx_mul::<14>(13573));
  // 29957/32768 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t25 = t25.add(t6.tx_mul::<15>(29957));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186548
  let t6 = t6.sub(t25.tx_mul::<14>(11585));
  // -19195/32768 ~= Tan[Pi/8] - Tan[Pi/4] ~= -0.585786437626905
  let t25 = t25.sub(t6.tx_mul::<15>(19195));
  let t30 = t30.add(t1.tx_mul::<15>(29957));
  let t1 = t1.sub(t30.tx_mul::<14>(11585));
  let t30 = t30.sub(t1.tx_mul::<15>(19195));
  // 28681/32768 ~= Tan[3*Pi/16] + Tan[Pi/8]/2 ~= 0.875285419105846
  let t29 = t29.add(t2.tx_mul::<15>(28681));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t2 = t2.sub(t29.tx_mul::<14>(15137));
  // 4161/16384 ~= Tan[3*Pi/16] - Tan[Pi/8] ~= 0.253965075546204
  let t29 = t29.add(t2.tx_mul::<14>(4161));
  let t3 = t3.add(t28.tx_mul::<14>(4161));
  let t28 = t28.sub(t3.tx_mul::<14>(15137));
  // 14341/16384 ~= Tan[3*Pi/16] + Tan[Pi/8]/2 ~= 0.875285419105846
  let t3 = t3.add(t28.tx_mul::<14>(14341));
  let t9 = t9.sub(t22.tx_mul::<15>(19195));
  let t22 = t22.sub(t9.tx_mul::<14>(11585));
  // 7489/8192 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t9 = t9.add(t22.tx_mul::<13>(7489));
  // 3259/8192 ~= 2*Tan[Pi/16] ~= 0.397824734759316
  let t10 = t10.add(t21.tx_mul::<13>(3259));
  // 3135/16384 ~= Sin[Pi/8]/2 ~= 0.1913417161825449
  let t21 = t21.sub(t10.tx_mul::<14>(3135));
  let t10 = t10.add(t21.tx_mul::<13>(3259));
  let t11 = t11.add(t20.tx_mul::<14>(4161));
  let t20 = t20.sub(t11.tx_mul::<14>(15137));
  let t11 = t11.add(t20.tx_mul::<14>(14341));
  let t17 = t17.add(t14.tx_mul::<15>(29957));
  let t14 = t14.sub(t17.tx_mul::<14>(11585));
  let t17 = t17.sub(t14.tx_mul::<15>(19195));
  let t19 = t19.add(t12.tx_mul::<15>(28681));
  let t12 = t12.sub(t19.tx_mul::<14>(15137));
  let t19 = t19.add(t12.tx_mul::<14>(4161));
  let t13 = t13.add(t18.tx_mul::<14>(4161));
  let t18 = t18.sub(t13.tx_mul::<14>(15137));
  let t13 = t13.add(t18.tx_mul::<14>(14341));
  let t1 = t1.neg();
  let t2 = t2.neg();
  let t3 = t3.neg();
  let t13 = t13.neg();
  let t16 = t16.neg();
  let t24 = t24.neg();
  let t28 = t28.neg();
  let t27 = t27.sub(t5.rshift1());
  let t5 = t5.add(t27);
  let t26 = t26.sub(t4.rshift1());
  let t4 = t4.add(t26);
  let t6 = t6.sub(t7.rshift1());
  let t7 = t7.add(t6);
  let t24 = t24.sub(t25.rshift1());
  let t25 = t25.add(t24);
  let t1 = t1.add(t0.rshift1());
  let t0 = t0.sub(t1);
  let t31 = t31.sub(t30.rshift1());
  let t30 = t30.add(t31);
  let t3 = t3.sub(t29.rshift1());
  let t29 = t29.add(t3);
  let t2 = t2.add(t28.rshift1());
  let t28 = t28.sub(t2);
  let t9 = t9.sub(t8.rshift1());
  let t8 = t8.add(t9);
  let t23 = t23.add(t22.rshift1());
  let t22 = t22.sub(t23);
  let t11 = t11.add(t10.rshift1());
  let t10 = t10.sub(t11);
  let t21 = t21.sub(t20.rshift1());
  let t20 = t20.add(t21);
  let t14 = t14.sub(t15.rshift1());
  let t15 = t15.add(t14);
  let t16 = t16.sub(t17.rshift1());
  let t17 = t17.add(t16);
  let t12 = t12.sub(t18.rshift1());
  let t18 = t18.add(t12);
  let t13 = t13.add(t19.rshift1());
  let t19 = t19.sub(t13);
  let t4 = t4.neg();
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.8206787908286602
  let t4 = t4.add(t27.tx_mul::<13>(6723));
  // 16069/16384 ~= Sin[7*Pi/16] ~= 0.9807852804032304
  let t27 = t27.sub(t4.tx_mul::<14>(16069));
  let t4 = t4.add(t27.tx_mul::<13>(6723));
  // 17515/32768 ~= Tan[5*Pi/32] ~= 0.5345111359507916
  let t5 = t5.add(t26.tx_mul::<15>(17515));
  // 13623/16384 ~= Sin[5*Pi/16] ~= 0.8314696123025452
  let t26 = t26.sub(t5.tx_mul::<14>(13623));
  let t5 = t5.add(t26.tx_mul::<15>(17515));
  // 3227/32768 ~= Tan[Pi/32] ~= 0.09849140335716425
  let t7 = t7.add(t24.tx_mul::<15>(3227));
  // 6393/32768 ~= Sin[Pi/16] ~= 0.19509032201612825
  let t24 = t24.sub(t7.tx_mul::<15>(6393));
  let t7 = t7.add(t24.tx_mul::<15>(3227));
  // 2485/8192 ~= Tan[3*Pi/32] ~= 0.303346683607342
  let t6 = t6.add(t25.tx_mul::<13>(2485));
  // 18205/32768 ~= Sin[3*Pi/16] ~= 0.555570233019602
  let t25 = t25.sub(t6.tx_mul::<15>(18205));
  let t6 = t6.add(t25.tx_mul::<13>(2485));
  let t5 = t5.neg();
  let t27 = t27.add(t24);
  let t27h = t27.rshift1();
  let t24 = t24.sub(t27h);
  let t4 = t4.add(t7);
  let t4h = t4.rshift1();
  let t7 = t7.sub(t4h);
  let t5 = t5.add(t25);
  let t5h = t5.rshift1();
  let t25 = t25.sub(t5h);
  let t26 = t26.add(t6);
  let t26h = t26.rshift1();
  let t6 = t6.sub(t26h);
  let t0 = t0.sub(t3);
  let t0h = t0.rshift1();
  let t3 = t3.add(t0h);
  let t31 = t31.sub(t28);
  let t31h = t31.rshift1();
  let t28 = t28.add(t31h);
  let t30 = t30.add(t29);
  let t30h = t30.rshift1();
  let t29 = t29.sub(t30h);
  let t1 = t1.sub(t2);
  let t1h = t1.rshift1();
  let t2 = t2.add(t1h);
  let t8 = t8.add(t11);
  let t11 = t11.sub(t8.rshift1());
  let t23 = t23.add(t20);
  let t20 = t20.sub(t23.rshift1());
  let t9 = t9.add(t21);
  let t21 = t21.sub(t9.rshift1());
  let t22 = t22.sub(t10);
  let t10 = t10.add(t22.rshift1());
  let t12 = t12.sub(t15);
  let t15 = t15.add(t12.rshift1());
  let t19 = t19.add(t16);
  let t16 = t16.sub(t19.rshift1());
  let t13 = t13.sub(t14);
  let t14 = t14.add(t13.rshift1());
  let t18 = t18.add(t17);
  let t17 = t17.sub(t18.rshift1());
  let t9 = t9.neg();
  let t21 = t21.neg();
  // 805/16384 ~= Tan[Pi/64] ~= 0.04912684976946793
  let t8 = t8.add(t23.tx_mul::<14>(805));
  // 803/8192 ~= Sin[Pi/32] ~= 0.0980171403295606
  let t23 = t23.sub(t8.tx_mul::<13>(803));
  let t8 = t8.add(t23.tx_mul::<14>(805));
  // 11725/32768 ~= Tan[7*Pi/64] ~= 0.3578057213145241
  let t20 = t20.add(t11.tx_mul::<15>(11725));
  // 5197/8192 ~= Sin[7*Pi/32] ~= 0.6343932841636455
  let t11 = t11.sub(t20.tx_mul::<13>(5197));
  let t20 = t20.add(t11.tx_mul::<15>(11725));
  // 2455/4096 ~= Tan[11*Pi/64] ~= 0.5993769336819237
  let t10 = t10.add(t21.tx_mul::<12>(2455));
  // 14449/16384 ~= Sin[11*Pi/32] ~= 0.881921264348355
  let t21 = t21.sub(t10.tx_mul::<14>(14449));
  let t10 = t10.add(t21.tx_mul::<12>(2455));
  // 4861/32768 ~= Tan[3*Pi/64] ~= 0.14833598753834742
  let t9 = t9.add(t22.tx_mul::<15>(4861));
  // 1189/4096 ~= Sin[3*Pi/32] ~= 0.29028467725446233
  let t22 = t22.sub(t9.tx_mul::<12>(1189));
  let t9 = t9.add(t22.tx_mul::<15>(4861));
  let t15 = t15.add(t16.tx_mul::<14>(805));
  let t16 = t16.sub(t15.tx_mul::<13>(803));
  let t15 = t15.add(t16.tx_mul::<14>(805));
  // 2931/8192 ~= Tan[7*Pi/64] ~= 0.3578057213145241
  let t12 = t12.add(t19.tx_mul::<13>(2931));
  let t19 = t19.sub(t12.tx_mul::<13>(5197));
  let t12 = t12.add(t19.tx_mul::<13>(2931));
  // 513/2048 ~= Tan[5*Pi/64] ~= 0.25048696019130545
  let t13 = t13.add(t18.tx_mul::<11>(513));
  // 7723/16384 ~= Sin[5*Pi/32] ~= 0.47139673682599764
  let t18 = t18.sub(t13.tx_mul::<14>(7723));
  let t13 = t13.add(t18.tx_mul::<11>(513));
  let t14 = t14.add(t17.tx_mul::<15>(4861));
  let t17 = t17.sub(t14.tx_mul::<12>(1189));
  let t14 = t14.add(t17.tx_mul::<15>(4861));
  let t10 = t10.neg();
  let t11 = t11.neg();
  let t29 = t29.add(t5h);
  let t5 = t5.sub(t29);
  let t2 = t2.sub(t26h);
  let t26 = t26.add(t2);
  let t25 = t25.add(t1h);
  let t1 = t1.sub(t25);
  let t6 = t6.sub(t30h);
  let t30 = t30.add(t6);
  let t7 = t7.add(t31h);
  let t31 = t31.sub(t7);
  let t24 = t24.add(t0h);
  let t0 = t0.sub(t24);
  let t3 = t3.sub(t4h);
  let t4 = t4.add(t3);
  let t28 = t28.add(t27h);
  let t27 = t27.sub(t28);
  let t15 = t15.sub(t23.rshift1());
  let t23 = t23.add(t15);
  let t16 = t16.sub(t8.rshift1());
  let t8 = t8.add(t16);
  let t20 = t20.add(t12.rshift1());
  let t12 = t12.sub(t20);
  let t11 = t11.add(t19.rshift1());
  let t19 = t19.sub(t11);
  let t10 = t10.add(t18.rshift1());
  let t18 = t18.sub(t10);
  let t21 = t21.add(t13.rshift1());
  let t13 = t13.sub(t21);
  let t14 = t14.sub(t22.rshift1());
  let t22 = t22.add(t14);
  let t17 = t17.sub(t9.rshift1());
  let t9 = t9.add(t17);
  let t10 = t10.sub(t5);
  let t5 = t5.add(t10.rshift1());
  let t26 = t26.sub(t21);
  let t21 = t21.add(t26.rshift1());
  let t2 = t2.sub(t18);
  let t18 = t18.add(t2.rshift1());
  let t13 = t13.sub(t29);
  let t29 = t29.add(t13.rshift1());
  let t22 = t22.add(t25);
  let t25 = t25.sub(t22.rshift1());
  let t6 = t6.add(t9);
  let t9 = t9.sub(t6.rshift1());
  let t14 = t14.sub(t30);
  let t30 = t30.add(t14.rshift1());
  let t1 = t1.sub(t17);
  let t17 = t17.add(t1.rshift1());
  let t0 = t0.sub(t16);
  let t16 = t16.add(t0.rshift1());
  let t15 = t15.add(t31);
  let t31 = t31.sub(t15.rshift1());
  let t8 = t8.sub(t7);
  let t7 = t7.add(t8.rshift1());
  let t24 = t24.sub(t23);
  let t23 = t23.add(t24.rshift1());
  let t4 = t4.sub(t20);
  let t20 = t20.add(t4.rshift1());
  let t11 = t11.sub(t27);
  let t27 = t27.add(t11.rshift1());
  let t3 = t3.sub(t19);
  let t19 = t19.add(t3.rshift1());
  let t12 = t12.sub(t28);
  let t28 = t28.add(t12.rshift1());
  let t27 = t27.neg();
  let t28 = t28.neg();
  let t29 = t29.neg();
  let t30 = t30.neg();
  // 2847/4096 ~= (1/Sqrt[2] - Cos[63*Pi/128]/2)/Sin[63*Pi/128]
  let t31 = t31.add(t0.tx_mul::<12>(2847));
  // 5791/4096 ~= Sqrt[2]*Sin[63*Pi/128]
  let t0 = t0.sub(t31.tx_mul::<12>(5791));
  // 5593/8192 ~= (1/Sqrt[2] - Cos[63*Pi/128])/Sin[63*Pi/128]
  let t31 = t31.add(t0.tx_mul::<13>(5593));
  // 4099/8192 ~= (1/Sqrt[2] - Cos[31*Pi/128]/2)/Sin[31*Pi/128]
  let t16 = t16.sub(t15.tx_mul::<13>(4099));
  // 1997/2048 ~= Sqrt[2]*Sin[31*Pi/128]
  let t15 = t15.add(t16.tx_mul::<11>(1997));
  // -815/32768 ~= (1/Sqrt[2] - Cos[31*Pi/128])/Sin[31*Pi/128]
  let t16 = t16.add(t15.tx_mul::<15>(815));
  // 2527/4096 ~= (1/Sqrt[2] - Cos[17*Pi/128]/2)/Sin[17*Pi/128]
  let t23 = t23.sub(t8.tx_mul::<12>(2527));
  // 4695/8192 ~= Sqrt[2]*Sin[17*Pi/128]
  let t8 = t8.add(t23.tx_mul::<13>(4695));
  // -4187/8192 ~= (1/Sqrt[2] - Cos[17*Pi/128])/Sin[17*Pi/128]
  let t23 = t23.add(t8.tx_mul::<13>(4187));
  // 5477/8192 ~= (1/Sqrt[2] - Cos[15*Pi/128]/2)/Sin[15*Pi/128]
  let t7 = t7.add(t24.tx_mul::<13>(5477));
  // 4169/8192 ~= Sqrt[2]*Sin[15*Pi/128]
  let t24 = t24.sub(t7.tx_mul::<13>(4169));
  // -2571/4096 ~= (1/Sqrt[2] - Cos[15*Pi/128])/Sin[15*Pi/128]
  let t7 = t7.sub(t24.tx_mul::<12>(2571));
  // 5331/8192 ~= (1/Sqrt[2] - Cos[59*Pi/128]/2)/Sin[59*Pi/128]
  let t29 = t29.add(t2.tx_mul::<13>(5331));
  // 5749/4096 ~= Sqrt[2]*Sin[59*Pi/128]
  let t2 = t2.sub(t29.tx_mul::<12>(5749));
  // 2413/4096 ~= (1/Sqrt[2] - Cos[59*Pi/128])/Sin[59*Pi/128]
  let t29 = t29.add(t2.tx_mul::<12>(2413));
  // 4167/8192 ~= (1/Sqrt[2] - Cos[27*Pi/128]/2)/Sin[27*Pi/128]
  let t18 = t18.sub(t13.tx_mul::<13>(4167));
  // 891/1024 ~= Sqrt[2]*Sin[27*Pi/128]
  let t13 = t13.add(t18.tx_mul::<10>(891));
  // -4327/32768 ~= (1/Sqrt[2] - Cos[27*Pi/128])/Sin[27*Pi/128]
  let t18 = t18.add(t13.tx_mul::<15>(4327));
  // 2261/4096 ~= (1/Sqrt[2] - Cos[21*Pi/128]/2)/Sin[21*Pi/128]
  let t21 = t21.sub(t10.tx_mul::<12>(2261));
  // 2855/4096 ~= Sqrt[2]*Sin[21*Pi/128]
  let t10 = t10.add(t21.tx_mul::<12>(2855));
  // -5417/16384 ~= (1/Sqrt[2] - Cos[21*Pi/128])/Sin[21*Pi/128]
  let t21 = t21.add(t10.tx_mul::<14>(5417));
  // 3459/4096 ~= (1/Sqrt[2] - Cos[11*Pi/128]/2)/Sin[11*Pi/128]
  let t5 = t5.add(t26.tx_mul::<12>(3459));
  // 1545/4096 ~= Sqrt[2]*Sin[11*Pi/128]
  let t26 = t26.sub(t5.tx_mul::<12>(1545));
  // -1971/2048 ~= (1/Sqrt[2] - Cos[11*Pi/128])/Sin[11*Pi/128]
  let t5 = t5.sub(t26.tx_mul::<11>(1971));
  // 323/512 ~= (1/Sqrt[2] - Cos[57*Pi/128]/2)/Sin[57*Pi/128]
  let t28 = t28.add(t3.tx_mul::<9>(323));
  // 5707/4096 ~= Sqrt[2]*Sin[57*Pi/128]
  let t3 = t3.sub(t28.tx_mul::<12>(5707));
  // 2229/4096 ~= (1/Sqrt[2] - Cos[57*Pi/128])/Sin[57*Pi/128]
  let t28 = t28.add(t3.tx_mul::<12>(2229));
  // 1061/2048 ~= (1/Sqrt[2] - Cos[25*Pi/128]/2)/Sin[25*Pi/128]
  let t19 = t19.sub(t12.tx_mul::<11>(1061));
  // 6671/8192 ~= Sqrt[2]*Sin[25*Pi/128]
  let t12 = t12.add(t19.tx_mul::<13>(6671));
  // -6287/32768 ~= (1/Sqrt[2] - Cos[25*Pi/128])/Sin[25*Pi/128]
  let t19 = t19.add(t12.tx_mul::<15>(6287));
  // 4359/8192 ~= (1/Sqrt[2] - Cos[23*Pi/128]/2)/Sin[23*Pi/128]
  let t20 = t20.sub(t11.tx_mul::<13>(4359));
  // 3099/4096 ~= Sqrt[2]*Sin[23*Pi/128]
  let t11 = t11.add(t20.tx_mul::<12>(3099));
  // -2109/8192 ~= (1/Sqrt[2] - Cos[23*Pi/128])/Sin[23*Pi/128]
  let t20 = t20.add(t11.tx_mul::<13>(2109));
  // 5017/8192 ~= (1/Sqrt[2] - Cos[55*Pi/128]/2)/Sin[55*Pi/128]
  let t27 = t27.add(t4.tx_mul::<13>(5017));
  // 1413/1024 ~= Sqrt[2]*Sin[55*Pi/128]
  let t4 = t4.sub(t27.tx_mul::<10>(1413));
  // 8195/16384 ~= (1/Sqrt[2] - Cos[55*Pi/128])/Sin[55*Pi/128]
  let t27 = t27.add(t4.tx_mul::<14>(8195));
  // 2373/4096 ~= (1/Sqrt[2] - Cos[19*Pi/128]/2)/Sin[19*Pi/128]
  let t9 = t9.add(t22.tx_mul::<12>(2373));
  // 5209/8192 ~= Sqrt[2]*Sin[19*Pi/128]
  let t22 = t22.sub(t9.tx_mul::<13>(5209));
  // -3391/8192 ~= (1/Sqrt[2] - Cos[19*Pi/128])/Sin[19*Pi/128]
  let t9 = t9.sub(t22.tx_mul::<13>(3391));
  // 1517/2048 ~= (1/Sqrt[2] - Cos[13*Pi/128]/2)/Sin[13*Pi/128]
  let t25 = t25.sub(t6.tx_mul::<11>(1517));
  // 1817/4096 ~= Sqrt[2]*Sin[13*Pi/128]
  let t6 = t6.add(t25.tx_mul::<12>(1817));
  // -6331/8192 ~= (1/Sqrt[2] - Cos[13*Pi/128])/Sin[13*Pi/128]
  let t25 = t25.add(t6.tx_mul::<13>(6331));
  // 515/1024 ~= (1/Sqrt[2] - Cos[29*Pi/128]/2)/Sin[29*Pi/128]
  let t17 = t17.sub(t14.tx_mul::<10>(515));
  // 7567/8192 ~= Sqrt[2]*Sin[29*Pi/128]
  let t14 = t14.add(t17.tx_mul::<13>(7567));
  // -2513/32768 ~= (1/Sqrt[2] - Cos[29*Pi/128])/Sin[29*Pi/128]
  let t17 = t17.add(t14.tx_mul::<15>(2513));
  // 2753/4096 ~= (1/Sqrt[2] - Cos[61*Pi/128]/2)/Sin[61*Pi/128]
  let t30 = t30.add(t1.tx_mul::<12>(2753));
  // 5777/4096 ~= Sqrt[2]*Sin[61*Pi/128]
  let t1 = t1.sub(t30.tx_mul::<12>(5777));
  // 1301/2048 ~= (1/Sqrt[2] - Cos[61*Pi/128])/Sin[61*Pi/128]
  let t30 = t30.add(t1.tx_mul::<11>(1301));
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}

/// Asymmetric 32-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 64-point butterfly stage.
pub fn daala_idst_iv_32_asym_precise<T: TxOperations>(
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]: [T; 32],
) -> [T; 32] {
  // 1301/2048 ~= (1/Sqrt[2] - Cos[61*Pi/128])/Sin[61*Pi/128]
  let t15 = t15.sub(t16.tx_mul::<11>(1301));
  // 5777/4096 ~= Sqrt[2]*Sin[61*Pi/128]
  let t16 = t16.add(t15.tx_mul::<12>(5777));
  // 2753/4096 ~= (1/Sqrt[2] - Cos[61*Pi/128]/2)/Sin[61*Pi/128]
  let t15 = t15.sub(t16.tx_mul::<12>(2753));
  // -2513/32768 ~= (1/Sqrt[2] - Cos[29*Pi/128])/Sin[29*Pi/128]
  let t17 = t17.sub(t14.tx_mul::<15>(2513));
  // 7567/8192 ~= Sqrt[2]*Sin[29*Pi/128]
  let t14 = t14.sub(t17.tx_mul::<13>(7567));
  // 515/1024 ~= (1/Sqrt[2] - Cos[29*Pi/128]/2)/Sin[29*Pi/128]
  let t17 = t17.add(t14.tx_mul::<10>(515));
  // -6331/8192 ~= (1/Sqrt[2] - Cos[13*Pi/128])/Sin[13*Pi/128]
  let t19 = t19.sub(t12.tx_mul::<13>(6331));
  // 1817/4096 ~= Sqrt[2]*Sin[13*Pi/128]
  let t12 = t12.sub(t19.tx_mul::<12>(1817));
  // 1517/2048 ~= (1/Sqrt[2] - Cos[13*Pi/128]/2)/Sin[13*Pi/128]
  let t19 = t19.add(t12.tx_mul::<11>(1517));
  // -3391/8192 ~= (1/Sqrt[2] - Cos[19*Pi/128])/Sin[19*Pi/128]
  let t18 = t18.add(t13.tx_mul::<13>(3391));
  // 5209/8192 ~= Sqrt[2]*Sin[19*Pi/128]
  let t13 = t13.add(t18.tx_mul::<13>(5209));
  // 2373/4096 ~= (1/Sqrt[2] - Cos[19*Pi/128]/2)/Sin[19*Pi/128]
  let t18 = t18.sub(t13.tx_mul::<12>(2373));
  // 8195/16384 ~= (1/Sqrt[2] - Cos[55*Pi/128])/Sin[55*Pi/128]
  let t27 = t27.sub(t4.tx_mul::<14>(8195));
  // 1413/1024 ~= Sqrt[2]*Sin[55*Pi/128]
  let t4 = t4.add(t27.tx_mul::<10>(1413));
  // 5017/8192 ~= (1/Sqrt[2] - Cos[55*Pi/128]/2)/Sin[55*Pi/128]
  let t27 = t27.sub(t4.tx_mul::<13>(5017));
  // -2109/8192 ~= (1/Sqrt[2] - Cos[23*Pi/128])/Sin[23*Pi/128]
  let t5 = t5.sub(t26.tx_mul::<13>(2109));
  // 3099/4096 ~= Sqrt[2]*Sin[23*Pi/128]
  let t26 = t26.sub(t5.tx_mul::<12>(3099));
  // 4359/8192 ~= (1/Sqrt[2] - Cos[23*Pi/128]/2)/Sin[23*Pi/128]
  let t5 = t5.add(t26.tx_mul::<13>(4359));
  // -6287/32768 ~= (1/Sqrt[2] - Cos[25*Pi/128])/Sin[25*Pi/128]
  let t25 = t25.sub(t6.tx_mul::<15>(6287));
  // 6671/8192 ~= Sqrt[2]*Sin[25*Pi/128]
  let t6 = t6.sub(t25.tx_mul::<13>(6671));
  // 1061/2048 ~= (1/Sqrt[2] - Cos[25*Pi/128]/2)/Sin[25*Pi/128]
  let t25 = t25.add(t6.tx_mul::<11>(1061));
  // 2229/4096 ~= (1/Sqrt[2] - Cos[57*Pi/128])/Sin[57*Pi/128]
  let t7 = t7.sub(t24.tx_mul::<12>(2229));
  // 5707/4096 ~= Sqrt[2]*Sin[57*Pi/128]
  let t24 = t24.add(t7.tx_mul::<12>(5707));
  // 323/512 ~= (1/Sqrt[2] - Cos[57*Pi/128]/2)/Sin[57*Pi/128]
  let t7 = t7.sub(t24.tx_mul::<9>(323));
  // -1971/2048 ~= (1/Sqrt[2] - Cos[11*Pi/128])/Sin[11*Pi/128]
  let t20 = t20.add(t11.tx_mul::<11>(1971));
  // 1545/4096 ~= Sqrt[2]*Sin[11*Pi/128]
  let t11 = t11.add(t20.tx_mul::<12>(1545));
  // 3459/4096 ~= (1/Sqrt[2] - Cos[11*Pi/128]/2)/Sin[11*Pi/128]
  let t20 = t20.sub(t11.tx_mul::<12>(3459));
  // -5417/16384 ~= (1/Sqrt[2] - Cos[21*Pi/128])/Sin[21*Pi/128]
  let t21 = t21.sub(t10.tx_mul::<14>(5417));
  // 2855/4096 ~= Sqrt[2]*Sin[21*Pi/128]
  let t10 = t10.sub(t21.tx_mul::<12>(2855));
  // 2261/4096 ~= (1/Sqrt[2] - Cos[21*Pi/128]/2)/Sin[21*Pi/128]
  let t21 = t21.add(t10.tx_mul::<12>(2261));
  // -4327/32768 ~= (1/Sqrt[2] - Cos[27*Pi/128])/Sin[27*Pi/128]
  let t9 = t9.sub(t22.tx_mul::<15>(4327));
  // 891/1024 ~= Sqrt[2]*Sin[27*Pi/128]
  let t22 = t22.sub(t9.tx_mul::<10>(891));
  // 4167/8192 ~= (1/Sqrt[2] - Cos[27*Pi/128]/2)/Sin[27*Pi/128]
  let t9 = t9.add(t22.tx_mul::<13>(4167));
  // 2413/4096 ~= (1/Sqrt[2] - Cos[59*Pi/128])/Sin[59*Pi/128]
  let t23 = t23.sub(t8.tx_mul::<12>(2413));
  // 5749/4096 ~= Sqrt[2]*Sin[59*Pi/128]
  let t8 = t8.add(t23.tx_mul::<12>(5749));
  // 5331/8192 ~= (1/Sqrt[2] - Cos[59*Pi/128]/2)/Sin[59*Pi/128]
  let t23 = t23.sub(t8.tx_mul::<13>(5331));
  // -2571/4096 ~= (1/Sqrt[2] - Cos[15*Pi/128])/Sin[15*Pi/128]
  let t28 = t28.add(t3.tx_mul::<12>(2571));
  // 4169/8192 ~= Sqrt[2]*Sin[15*Pi/128]
  let t3 = t3.add(t28.tx_mul::<13>(4169));
  // 5477/8192 ~= (1/Sqrt[2] - Cos[15*Pi/128]/2)/Sin[15*Pi/128]
  let t28 = t28.sub(t3.tx_mul::<13>(5477));
  // -4187/8192 ~= (1/Sqrt[2] - Cos[17*Pi/128])/Sin[17*Pi/128]
  let t29 = t29.sub(t2.tx_mul::<13>(4187));
  // 4695/8192 ~= Sqrt[2]*Sin[17*Pi/128]
  let t2 = t2.sub(t29.tx_mul::<13>(4695));
  // 2527/4096 ~= (1/Sqrt[2] - Cos[17*Pi/128]/2)/Sin[17*Pi/128]
  let t29 = t29.add(t2.tx_mul::<12>(2527));
  // -815/32768 ~= (1/Sqrt[2] - Cos[31*Pi/128])/Sin[31*Pi/128]
  let t1 = t1.sub(t30.tx_mul::<15>(815));
  // 1997/2048 ~= Sqrt[2]*Sin[31*Pi/128]
  let t30 = t30.sub(t1.tx_mul::<11>(1997));
  // 4099/8192 ~= (1/Sqrt[2] - Cos[31*Pi/128]/2)/Sin[31*Pi/128]
  let t1 = t1.add(t30.tx_mul::<13>(4099));
  // 5593/8192 ~= (1/Sqrt[2] - Cos[63*Pi/128])/Sin[63*Pi/128]
  let t31 = t31.sub(t0.tx_mul::<13>(5593));
  // 5791/4096 ~= Sqrt[2]*Sin[63*Pi/128]
  let t0 = t0.add(t31.tx_mul::<12>(5791));
  // 2847/4096 ~= (1/Sqrt[2] - Cos[63*Pi/128]/2)/Sin[63*Pi/128]
  let t31 = t31.sub(t0.tx_mul::<12>(2847));
  let t7 = t7.neg();
  let t15 = t15.neg();
  let t23 = t23.neg();
  let t27 = t27.neg();
  let t7 = t7.sub(t6.rshift1());
  let t6 = t6.add(t7);
  let t25 = t25.sub(t24.rshift1());
  let t24 = t24.add(t25);
  let t27 = t27.sub(t26.rshift1());
  let t26 = t26.add(t27);
  let t5 = t5.sub(t4.rshift1());
  let t4 = t4.add(t5);
  let t29 = t29.sub(t3.rshift1());
  let t3 = t3.add(t29);
  let t28 = t28.sub(t2.rshift1());
  let t2 = t2.add(t28);
  let t31 = t31.add(t30.rshift1());
  let t30 = t30.sub(t31);
  let t1 = t1.sub(t0.rshift1());
  let t0 = t0.add(t1);
  let t17 = t17.sub(t16.rshift1());
  let t16 = t16.add(t17);
  let t15 = t15.sub(t14.rshift1());
  let t14 = t14.add(t15);
  let t18 = t18.add(t12.rshift1());
  let t12 = t12.sub(t18);
  let t19 = t19.add(t13.rshift1());
  let t13 = t13.sub(t19);
  let t23 = t23.sub(t22.rshift1());
  let t22 = t22.add(t23);
  let t9 = t9.sub(t8.rshift1());
  let t8 = t8.add(t9);
  let t21 = t21.sub(t11.rshift1());
  let t11 = t11.add(t21);
  let t20 = t20.sub(t10.rshift1());
  let t10 = t10.add(t20);
  let t18 = t18.sub(t17);
  let t17 = t17.add(t18.rshift1());
  let t13 = t13.sub(t14);
  let t14 = t14.add(t13.rshift1());
  let t22 = t22.add(t21);
  let t21 = t21.sub(t22.rshift1());
  let t9 = t9.add(t10);
  let t10 = t10.sub(t9.rshift1());
  let t25 = t25.add(t26);
  let t26 = t26.sub(t25.rshift1());
  let t6 = t6.add(t5);
  let t5 = t5.sub(t6.rshift1());
  let t2 = t2.sub(t1);
  let t1 = t1.add(t2.rshift1());
  let t29 = t29.sub(t30);
  let t30 = t30.add(t29.rshift1());
  let t27 = t27.add(t7);
  let t27h = t27.rshift1();
  let t7 = t7.sub(t27h);
  let t4 = t4.sub(t24);
  let t4h = t4.rshift1();
  let t24 = t24.add(t4h);
  let t0 = t0.add(t3);
  let t0h = t0.rshift1();
  let t3 = t3.sub(t0h);
  let t31 = t31.add(t28);
  let t31h = t31.rshift1();
  let t28 = t28.sub(t31h);
  let t15 = t15.sub(t12);
  let t15h = t15.rshift1();
  let t12 = t12.add(t15h);
  let t16 = t16.add(t19);
  let t16h = t16.rshift1();
  let t19 = t19.sub(t16h);
  let t11 = t11.sub(t8);
  let t11h = t11.rshift1();
  let t8 = t8.add(t11h);
  let t20 = t20.add(t23);
  let t20h = t20.rshift1();
  let t23 = t23.sub(t20h);
  let t10 = t10.neg();
  let t26 = t26.neg();
  // 4861/32768 ~= Tan[3*Pi/64] ~= 0.14833598753834742
  let t14 = t14.sub(t17.tx_mul::<15>(4861));
  // 1189/4096 ~= Sin[3*Pi/32] ~= 0.29028467725446233
  let t17 = t17.add(t14.tx_mul::<12>(1189));
  let t14 = t14.sub(t17.tx_mul::<15>(4861));
  // 513/2048 ~= Tan[5*Pi/64] ~= 0.25048696019130545
  let t22 = t22.sub(t9.tx_mul::<11>(513));
  // 7723/16384 ~= Sin[5*Pi/32] ~= 0.47139673682599764
  let t9 = t9.add(t22.tx_mul::<14>(7723));
  let t22 = t22.sub(t9.tx_mul::<11>(513));
  // 2931/8192 ~= Tan[7*Pi/64] ~= 0.3578057213145241
  let t6 = t6.sub(t25.tx_mul::<13>(2931));
  // 5197/8192 ~= Sin[7*Pi/32] ~= 0.6343932841636455
  let t25 = t25.add(t6.tx_mul::<13>(5197));
  let t6 = t6.sub(t25.tx_mul::<13>(2931));
  // 805/16384 ~= Tan[Pi/64] ~= 0.04912684976946793
  let t30 = t30.sub(t1.tx_mul::<14>(805));
  // 803/8192 ~= Sin[Pi/32] ~= 0.0980171403295606
  let t1 = t1.add(t30.tx_mul::<13>(803));
  let t30 = t30.sub(t1.tx_mul::<14>(805));
  let t18 = t18.sub(t13.tx_mul::<15>(4861));
  let t13 = t13.add(t18.tx_mul::<12>(1189));
  let t18 = t18.sub(t13.tx_mul::<15>(4861));
  // 2455/4096 ~= Tan[11*Pi/64] ~= 0.5993769336819237
  let t10 = t10.sub(t21.tx_mul::<12>(2455));
  // 14449/16384 ~= Sin[11*Pi/32] ~= 0.881921264348355
  let t21 = t21.add(t10.tx_mul::<14>(14449));
  let t10 = t10.sub(t21.tx_mul::<12>(2455));
  // 11725/32768 ~= Tan[7*Pi/64] ~= 0.3578057213145241
  let t5 = t5.sub(t26.tx_mul::<15>(11725));
  let t26 = t26.add(t5.tx_mul::<13>(5197));
  let t5 = t5.sub(t26.tx_mul::<15>(11725));
  let t2 = t2.sub(t29.tx_mul::<14>(805));
  let t29 = t29.add(t2.tx_mul::<13>(803));
  let t2 = t2.sub(t29.tx_mul::<14>(805));
  let t21 = t21.neg();
  let t18 = t18.neg();
  let t17 = t17.add(t9.rshift1());
  let t9 = t9.sub(t17);
  let t14 = t14.sub(t22.rshift1());
  let t22 = t22.add(t14);
  let t1 = t1.add(t25.rshift1());
  let t25 = t25.sub(t1);
  let t30 = t30.sub(t6.rshift1());
  let t6 = t6.add(t30);
  let t10 = t10.sub(t13.rshift1());
  let t13 = t13.add(t10);
  let t21 = t21.add(t18.rshift1());
  let t18 = t18.sub(t21);
  let t5 = t5.add(t29.rshift1());
  let t29 = t29.sub(t5);
  let t26 = t26.add(t2.rshift1());
  let t2 = t2.sub(t26);
  let t8 = t8.sub(t16h);
  let t16 = t16.add(t8);
  let t23 = t23.add(t15h);
  let t15 = t15.sub(t23);
  let t7 = t7.sub(t31h);
  let t31 = t31.add(t7);
  let t24 = t24.sub(t0h);
  let t0 = t0.add(t24);
  let t12 = t12.add(t11h);
  let t11 = t11.sub(t12);
  let t19 = t19.add(t20h);
  let t20 = t20.sub(t19);
  let t28 = t28.add(t4h);
  let t4 = t4.sub(t28);
  let t3 = t3.add(t27h);
  let t27 = t27.sub(t3);
  let t20 = t20.neg();
  // 2485/8192 ~= Tan[3*Pi/32] ~= 0.303346683607342
  let t12 = t12.sub(t19.tx_mul::<13>(2485));
  // 18205/32768 ~= Sin[3*Pi/16] ~= 0.555570233019602
  let t19 = t19.add(t12.tx_mul::<15>(18205));
  let t12 = t12.sub(t19.tx_mul::<13>(2485));
  // 3227/32768 ~= Tan[Pi/32] ~= 0.09849140335716425
  let t28 = t28.sub(t3.tx_mul::<15>(3227));
  // 6393/32768 ~= Sin[Pi/16] ~= 0.19509032201612825
  let t3 = t3.add(t28.tx_mul::<15>(6393));
  let t28 = t28.sub(t3.tx_mul::<15>(3227));
  // 17515/32768 ~= Tan[5*Pi/32] ~= 0.5345111359507916
  let t20 = t20.sub(t11.tx_mul::<15>(17515));
  // 13623/16384 ~= Sin[5*Pi/16] ~= 0.8314696123025452
  let t11 = t11.add(t20.tx_mul::<14>(13623));
  let t20 = t20.sub(t11.tx_mul::<15>(17515));
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.8206787908286602
  let t4 = t4.sub(t27.tx_mul::<13>(6723));
  // 16069/16384 ~= Sin[7*Pi/16] ~= 0.9807852804032304
  let t27 = t27.add(t4.tx_mul::<14>(16069));
  let t4 = t4.sub(t27.tx_mul::<13>(6723));
  let t4 = t4.neg();
  let t25 = t25.add(t22);
  let t22 = t22.sub(t25.rshift1());
  let t9 = t9.sub(t6);
  let t6 = t6.add(t9.rshift1());
  let t17 = t17.sub(t1);
  let t1 = t1.add(t17.rshift1());
  let t30 = t30.sub(t14);
  let t14 = t14.add(t30.rshift1());
  let t5 = t5.sub(t21);
  let t21 = t21.add(t5.rshift1());
  let t10 = t10.add(t26);
  let t26 = t26.sub(t10.rshift1());
  let t13 = t13.add(t29);
  let t29 = t29.sub(t13.rshift1());
  let t2 = t2.sub(t18);
  let t18 = t18.add(t2.rshift1());
  let t7 = t7.add(t8);
  let t8 = t8.sub(t7.rshift1());
  let t23 = t23.sub(t24);
  let t24 = t24.add(t23.rshift1());
  let t15 = t15.sub(t31);
  let t31 = t31.add(t15.rshift1());
  let t0 = t0.add(t16);
  let t16 = t16.sub(t0.rshift1());
  let t19 = t19.sub(t3);
  let t3 = t3.add(t19.rshift1());
  let t28 = t28.sub(t12);
  let t12 = t12.add(t28.rshift1());
  let t4 = t4.sub(t11);
  let t11 = t11.add(t4.rshift1());
  let t20 = t20.sub(t27);
  let t27 = t27.add(t20.rshift1());
  let t1 = t1.neg();
  let t3 = t3.neg();
  let t7 = t7.neg();
  let t8 = t8.neg();
  let t16 = t16.neg();
  let t22 = t22.neg();
  let t24 = t24.neg();
  // 14341/16384 ~= Tan[3*Pi/16] + Tan[Pi/8]/2 ~= 0.875285419105846
  let t22 = t22.sub(t9.tx_mul::<14>(14341));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t9 = t9.add(t22.tx_mul::<14>(15137));
  // 4161/16384 ~= Tan[3*Pi/16] - Tan[Pi/8] ~= 0.253965075546204
  let t22 = t22.sub(t9.tx_mul::<14>(4161));
  let t25 = t25.sub(t6.tx_mul::<14>(4161));
  let t6 = t6.add(t25.tx_mul::<14>(15137));
  // 28681/32768 ~= Tan[3*Pi/16] + Tan[Pi/8]/2 ~= 0.875285419105846
  let t25 = t25.sub(t6.tx_mul::<15>(28681));
  // -19195/32768 ~= Tan[Pi/8] - Tan[Pi/4] ~= -0.585786437626905
  let t17 = t17.add(t14.tx_mul::<15>(19195));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186548
  let t14 = t14.add(t17.tx_mul::<14>(11585));
  // 29957/32768 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t17 = t17.sub(t14.tx_mul::<15>(29957));
  let t26 = t26.sub(t5.tx_mul::<14>(14341));
  let t5 = t5.add(t26.tx_mul::<14>(15137));
  let t26 = t26.sub(t5.tx_mul::<14>(4161));
  // 3259/8192 ~= 2*Tan[Pi/16] ~= 0.397824734759316
  let t10 = t10.sub(t21.tx_mul::<13>(3259));
  // 3135/16384 ~= Sin[Pi/8]/2 ~= 0.1913417161825449
  let t21 = t21.add(t10.tx_mul::<14>(3135));
  let t10 = t10.sub(t21.tx_mul::<13>(3259));
  // 7489/8192 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t18 = t18.sub(t13.tx_mul::<13>(7489));
  let t13 = t13.add(t18.tx_mul::<14>(11585));
  let t18 = t18.add(t13.tx_mul::<15>(19195));
  let t24 = t24.sub(t7.tx_mul::<14>(14341));
  let t7 = t7.add(t24.tx_mul::<14>(15137));
  let t24 = t24.sub(t7.tx_mul::<14>(4161));
  let t23 = t23.sub(t8.tx_mul::<14>(4161));
  let t8 = t8.add(t23.tx_mul::<14>(15137));
  let t23 = t23.sub(t8.tx_mul::<15>(28681));
  let t15 = t15.add(t16.tx_mul::<15>(19195));
  let t16 = t16.add(t15.tx_mul::<14>(11585));
  let t15 = t15.sub(t16.tx_mul::<15>(29957));
  let t19 = t19.add(t12.tx_mul::<15>(19195));
  let t12 = t12.add(t19.tx_mul::<14>(11585));
  let t19 = t19.sub(t12.tx_mul::<15>(29957));
  // 13573/16384 ~= 2*Tan[Pi/8] ~= 0.828427124746190
  let t20 = t20.add(t11.tx_mul::<14>(13573));
  // 11585/32768 ~= Sin[Pi/4]/2 ~= 0.353553390593274
  let t11 = t11.sub(t20.tx_mul::<15>(11585));
  let t20 = t20.add(t11.tx_mul::<14>(13573));
  let t15 = t15.neg();
  [
    t0, t16, t8, t24, t4, t20, t12, t28, t2, t18, t10, t26, t6, t22, t14, t30,
    t1, t17, t9, t25, t5, t21, t13, t29, t3, t19, t11, t27, t7, t23, t15, t31,
  ]
}
