// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

use super::tx4::*;

/// 8-point orthonormal Type-II forward DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idct_ii_8_precise`] undoes this function exactly.
pub fn daala_fdct_ii_8_precise<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 8] {
  let r7 = r0.sub(r7);
  let r7h = r7.rshift1();
  let r0 = r0.sub(r7h);
  let r6 = r6.add(r1);
  let r6h = r6.rshift1();
  let r1 = r6h.sub(r1);
  let r5 = r2.sub(r5);
  let r5h = r5.rshift1();
  let r2 = r2.sub(r5h);
  let r4 = r4.add(r3);
  let r4h = r4.rshift1();
  let r3 = r4h.sub(r3);
  let [r0, r4, r2, r6] =
    daala_fdct_ii_4_asym_precise([r0, r4, r4h, r2, r6, r6h]);
  let [r7, r3, r5, r1] = daala_fdst_iv_4_asym_precise([r7, r7h, r3, r5, r1]);
  [r0, r4, r2, r6, r1, r5, r3, r7]
}

/// 8-point orthonormal Type-II inverse DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdct_ii_8_precise`] undoes this function exactly.
pub fn daala_idct_ii_8_precise<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 8] {
  let [r7, r7h, r5, r6, r4] = daala_idst_iv_4_asym_precise([r7, r5, r6, r4]);
  let [r0, r2, r1, r1h, r3, r3h] =
    daala_idct_ii_4_asym_precise([r0, r2, r1, r3]);
  let r0 = r0.add(r7h);
  let r7 = r0.sub(r7);
  let r6 = r1h.sub(r6);
  let r1 = r1.sub(r6);
  let r5h = r5.rshift1();
  let r2 = r2.add(r5h);
  let r5 = r2.sub(r5);
  let r4 = r3h.sub(r4);
  let r3 = r3.sub(r4);
  [r0, r4, r2, r6, r1, r5, r3, r7]
}

/// Asymmetric 8-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 16-point transform instead of recomputing them.
pub fn daala_fdct_ii_8_asym_precise<T: TxOperations>(
  [r0, r4, r4h, r2, r6, r6h, r1, r5, r5h, r3, r7, r7h]: [T; 12],
) -> [T; 8] {
  let r0 = r0.add(r7h);
  let r7 = r0.sub(r7);
  let r1 = r6h.sub(r1);
  let r6 = r6.sub(r1);
  let r2 = r2.add(r5h);
  let r5 = r2.sub(r5);
  let r3 = r4h.sub(r3);
  let r4 = r4.sub(r3);
  let [r0, r4, r2, r6] = daala_fdct_ii_4_precise([r0, r4, r2, r6]);
  let [r7, r3, r5, r1] = daala_fdst_iv_4_precise([r7, r3, r5, r1]);
  [r0, r4, r2, r6, r1, r5, r3, r7]
}

/// Asymmetric 8-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 16-point butterfly stage.
pub fn daala_idct_ii_8_asym_precise<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 12] {
  let [r7, r5, r6, r4] = daala_idst_iv_4_precise([r7, r5, r6, r4]);
  let [r0, r2, r1, r3] = daala_idct_ii_4_precise([r0, r2, r1, r3]);
  let r7 = r0.sub(r7);
  let r7h = r7.rshift1();
  let r0 = r0.sub(r7h);
  let r1 = r1.add(r6);
  let r1h = r1.rshift1();
  let r6 = r1h.sub(r6);
  let r5 = r2.sub(r5);
  let r5h = r5.rshift1();
  let r2 = r2.sub(r5h);
  let r3 = r3.add(r4);
  let r3h = r3.rshift1();
  let r4 = r3h.sub(r4);
  [r0, r4, r2, r6, r1, r1h, r5, r5h, r3, r3h, r7, r7h]
}

/// 8-point orthonormal Type-II forward DCT with flattened rotations.
pub fn daala_fdct_ii_8_flat<T: TxOperations>(
  [r0, r1, r2, r3, r4, r5, r6, r7]: [T; 8],
) -> [T; 8] {
  let r7 = r0.sub(r7);
  let r7h = r7.rshift1();
  let r0 = r0.sub(r7h);
  let r1 = r1.add(r6);
  let r1h = r1.rshift1();
  let r6 = r6.sub(r1h);
  let r5 = r2.sub(r5);
  let r5h = r5.rshift1();
  let r2 = r2.sub(r5h);
  let r3 = r3.add(r4);
  let r3h = r3.rshift1();
  let r4 = r4.sub(r3h);
  let [r0, r1, r2, r3] = daala_fdct_ii_4_asym_flat([r0, r1, r1h, r2, r3, r3h]);
  let [r7, r6, r5, r4] = daala_fdst_iv_4_asym_flat([r7, r7h, r6, r5, r5h, r4]);
  [r0, r1, r2, r3, r4, r5, r6, r7]
}

/// 8-point orthonormal Type-II inverse DCT with flattened rotations.
pub fn daala_idct_ii_8_flat<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 8] {
  let [r7, r5, r6, r4] = daala_idst_iv_4_asym_flat([r7, r5, r6, r4]);
  let [r0, r2, r1, r1h, r3, r3h] = daala_idct_ii_4_asym_flat([r0, r2, r1, r3]);
  let r4 = r4.add(r3h);
  let r3 = r3.sub(r4);
  let r2 = r2.add(r5.rshift1());
  let r5 = r2.sub(r5);
  let r6 = r6.add(r1h);
  let r1 = r1.sub(r6);
  let r0 = r0.add(r7.rshift1());
  let r7 = r0.sub(r7);
  [r0, r4, r2, r6, r1, r5, r3, r7]
}

/// Asymmetric 8-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 16-point transform instead of recomputing them.
pub fn daala_fdct_ii_8_asym_flat<T: TxOperations>(
  [r0, r1, r1h, r2, r3, r3h, r4, r5, r5h, r6, r7, r7h]: [T; 12],
) -> [T; 8] {
  let r0 = r0.add(r7h);
  let r7 = r0.sub(r7);
  let r4 = r4.sub(r3h);
  let r3 = r3.add(r4);
  let r2 = r2.add(r5h);
  let r5 = r2.sub(r5);
  let r6 = r6.sub(r1h);
  let r1 = r1.add(r6);
  let [r0, r1, r2, r3] = daala_fdct_ii_4_flat([r0, r1, r2, r3]);
  let [r7, r6, r5, r4] = daala_fdst_iv_4_flat([r7, r6, r5, r4]);
  [r0, r1, r2, r3, r4, r5, r6, r7]
}

/// Asymmetric 8-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 16-point butterfly stage.
pub fn daala_idct_ii_8_asym_flat<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 12] {
  let [r7, r5, r6, r4] = daala_idst_iv_4_flat([r7, r5, r6, r4]);
  let [r0, r2, r1, r3] = daala_idct_ii_4_flat([r0, r2, r1, r3]);
  let r7 = r0.sub(r7);
  let r7h = r7.rshift1();
  let r0 = r0.sub(r7h);
  let r1 = r1.sub(r6);
  let r1h = r1.rshift1();
  let r6 = r6.add(r1h);
  let r5 = r2.sub(r5);
  let r5h = r5.rshift1();
  let r2 = r2.sub(r5h);
  let r3 = r3.sub(r4);
  let r3h = r3.rshift1();
  let r4 = r4.add(r3h);
  [r0, r4, r2, r6, r1, r1h, r5, r5h, r3, r3h, r7, r7h]
}

/// 8-point orthonormal Type-IV forward DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idst_iv_8_precise`] undoes this function exactly.
pub fn daala_fdst_iv_8_precise<T: TxOperations>(
  [t0, t4, t2, t6, t1, t5, t3, t7]: [T; 8],
) -> [T; 8] {
  // 13573/32768 ~= Tan[Pi/8] ~= 0.414213562373095
  let t6 = t6.sub(t1.tx_mul::<15>(13573));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186547
  let t1 = t1.add(t6.tx_mul::<14>(11585));
  let t6 = t6.sub(t1.tx_mul::<15>(13573));
  // 21895/32768 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let t5 = t5.sub(t2.tx_mul::<15>(21895));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t2 = t2.add(t5.tx_mul::<14>(15137));
  // 10947/16384 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let t5 = t5.sub(t2.tx_mul::<14>(10947));
  // 3259/16384 ~= Tan[Pi/16] ~= 0.198912367379658
  let t4 = t4.sub(t3.tx_mul::<14>(3259));
  // 3135/8192 ~= Sin[Pi/8] ~= 0.382683432365090
  let t3 = t3.add(t4.tx_mul::<13>(3135));
  let t4 = t4.sub(t3.tx_mul::<14>(3259));
  let t7 = t7.add(t1);
  let t7h = t7.rshift1();
  let t1 = t1.sub(t7h);
  let t2 = t3.sub(t2);
  let t2h = t2.rshift1();
  let t3 = t3.sub(t2h);
  let t0 = t0.sub(t6);
  let t0h = t0.rshift1();
  let t6 = t6.add(t0h);
  let t5 = t4.sub(t5);
  let t5h = t5.rshift1();
  let t4 = t4.sub(t5h);
  let t1 = t1.add(t5h);
  let t5 = t1.sub(t5);
  let t4 = t4.add(t0h);
  let t0 = t0.sub(t4);
  let t6 = t6.sub(t2h);
  let t2 = t2.add(t6);
  let t3 = t3.sub(t7h);
  let t7 = t7.add(t3);
  let t7 = t7.neg();
  // 7425/8192 ~= Tan[15*Pi/64] ~= 0.906347169019147
  let t0 = t0.sub(t7.tx_mul::<13>(7425));
  // 8153/8192 ~= Sin[15*Pi/32] ~= 0.995184726672197
  let t7 = t7.add(t0.tx_mul::<13>(8153));
  let t0 = t0.sub(t7.tx_mul::<13>(7425));
  // 4861/32768 ~= Tan[3*Pi/64] ~= 0.148335987538347
  let t6 = t6.sub(t1.tx_mul::<15>(4861));
  // 1189/4096 ~= Sin[3*Pi/32] ~= 0.290284677254462
  let t1 = t1.add(t6.tx_mul::<12>(1189));
  let t6 = t6.sub(t1.tx_mul::<15>(4861));
  // 2455/4096 ~= Tan[11*Pi/64] ~= 0.599376933681924
  let t2 = t2.sub(t5.tx_mul::<12>(2455));
  // 7225/8192 ~= Sin[11*Pi/32] ~= 0.881921264348355
  let t5 = t5.add(t2.tx_mul::<13>(7225));
  let t2 = t2.sub(t5.tx_mul::<12>(2455));
  // 11725/32768 ~= Tan[7*Pi/64] ~= 0.357805721314524
  let t4 = t4.sub(t3.tx_mul::<15>(11725));
  // 5197/8192 ~= Sin[7*Pi/32] ~= 0.634393284163645
  let t3 = t3.add(t4.tx_mul::<13>(5197));
  let t4 = t4.sub(t3.tx_mul::<15>(11725));
  [t0, t4, t2, t6, t1, t5, t3, t7]
}

/// 8-point orthonormal Type-IV inverse DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdst_iv_8_precise`] undoes this function exactly.
pub fn daala_idst_iv_8_precise<T: TxOperations>(
  [t0, t4, t2, t6, t1, t5, t3, t7]: [T; 8],
) -> [T; 8] {
  // 11725/32768 ~= Tan[7*Pi/64] ~= 0.357805721314524
  let t1 = t1.add(t6.tx_mul::<15>(11725));
  // 5197/8192 ~= Sin[7*Pi/32] ~= 0.634393284163645
  let t6 = t6.sub(t1.tx_mul::<13>(5197));
  let t1 = t1.add(t6.tx_mul::<15>(11725));
  // 2455/4096 ~= Tan[11*Pi/64] ~= 0.599376933681924
  let t2 = t2.add(t5.tx_mul::<12>(2455));
  // 7225/8192 ~= Sin[11*Pi/32] ~= 0.881921264348355
  let t5 = t5.sub(t2.tx_mul::<13>(7225));
  let t2 = t2.add(t5.tx_mul::<12>(2455));
  // 4861/32768 ~= Tan[3*Pi/64] ~= 0.148335987538347
  let t3 = t3.add(t4.tx_mul::<15>(4861));
  // 1189/4096 ~= Sin[3*Pi/32] ~= 0.290284677254462
  let t4 = t4.sub(t3.tx_mul::<12>(1189));
  let t3 = t3.add(t4.tx_mul::<15>(4861));
  // 7425/8192 ~= Tan[15*Pi/64] ~= 0.906347169019147
  let t0 = t0.add(t7.tx_mul::<13>(7425));
  // 8153/8192 ~= Sin[15*Pi/32] ~= 0.995184726672197
  let t7 = t7.sub(t0.tx_mul::<13>(8153));
  let t0 = t0.add(t7.tx_mul::<13>(7425));
  let t7 = t7.neg();
  let t7 = t7.sub(t6);
  let t7h = t7.rshift1();
  let t6 = t6.add(t7h);
  let t2 = t2.sub(t3);
  let t2h = t2.rshift1();
  let t3 = t3.add(t2h);
  let t0 = t0.add(t1);
  let t0h = t0.rshift1();
  let t1 = t1.sub(t0h);
  let t5 = t4.sub(t5);
  let t5h = t5.rshift1();
  let t4 = t4.sub(t5h);
  let t1 = t1.add(t5h);
  let t5 = t1.sub(t5);
  let t3 = t3.sub(t0h);
  let t0 = t0.add(t3);
  let t6 = t6.add(t2h);
  let t2 = t6.sub(t2);
  let t4 = t4.add(t7h);
  let t7 = t7.sub(t4);
  // 3259/16384 ~= Tan[Pi/16] ~= 0.198912367379658
  let t1 = t1.add(t6.tx_mul::<14>(3259));
  // 3135/8192 ~= Sin[Pi/8] ~= 0.382683432365090
  let t6 = t6.sub(t1.tx_mul::<13>(3135));
  let t1 = t1.add(t6.tx_mul::<14>(3259));
  // 10947/16384 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let t5 = t5.add(t2.tx_mul::<14>(10947));
  // 15137/16384 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t2 = t2.sub(t5.tx_mul::<14>(15137));
  // 21895/32768 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let t5 = t5.add(t2.tx_mul::<15>(21895));
  // 13573/32768 ~= Tan[Pi/8] ~= 0.414213562373095
  let t3 = t3.add(t4.tx_mul::<15>(13573));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186547
  let t4 = t4.sub(t3.tx_mul::<14>(11585));
  let t3 = t3.add(t4.tx_mul::<15>(13573));
  [t0, t4, t2, t6, t1, t5, t3, t7]
}

/// Asymmetric 8-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 16-point transform instead of recomputing them.
pub fn daala_fdst_iv_8_asym_precise<T: TxOperations>(
  [t0, t4, t2, t6, t1, t5, t3, t7]: [T; 8],
) -> [T; 8] {
  // 1035/2048 ~= (Sqrt[2] - Cos[7*Pi/32])/(2*Sin[7*Pi/32])
  let t6 = t6.add(t1.tx_mul::<11>(1035));
  // 3675/4096 ~= Sqrt[2]*Sin[7*Pi/32]
  let t1 = t1.sub(t6.tx_mul::<12>(3675));
  // 851/8192 ~= (Cos[7*Pi/32] - 1/Sqrt[2])/Sin[7*Pi/32]
  let t6 = t6.sub(t1.tx_mul::<13>(851));
  // 4379/8192 ~= (Sqrt[2] - Sin[5*Pi/32])/(2*Cos[5*Pi/32])
  let t5 = t5.add(t2.tx_mul::<13>(4379));
  // 10217/8192 ~= Sqrt[2]*Cos[5*Pi/32]
  let t2 = t2.sub(t5.tx_mul::<13>(10217));
  // 4379/16384 ~= (1/Sqrt[2] - Sin[5*Pi/32])/Cos[5*Pi/32]
  let t5 = t5.add(t2.tx_mul::<14>(4379));
  // 12905/16384 ~= (Sqrt[2] - Cos[3*Pi/32])/(2*Sin[3*Pi/32])
  let t4 = t4.add(t3.tx_mul::<14>(12905));
  // 3363/8192 ~= Sqrt[2]*Sin[3*Pi/32]
  let t3 = t3.sub(t4.tx_mul::<13>(3363));
  // 3525/4096 ~= (Cos[3*Pi/32] - 1/Sqrt[2])/Sin[3*Pi/32]
  let t4 = t4.sub(t3.tx_mul::<12>(3525));
  // 5417/8192 ~= (Sqrt[2] - Sin[Pi/32])/(2*Cos[Pi/32])
  let t7 = t7.add(t0.tx_mul::<13>(5417));
  // 5765/4096 ~= Sqrt[2]*Cos[Pi/32]
  let t0 = t0.sub(t7.tx_mul::<12>(5765));
  // 2507/4096 ~= (1/Sqrt[2] - Sin[Pi/32])/Cos[Pi/32]
  let t7 = t7.add(t0.tx_mul::<12>(2507));
  let t0 = t0.add(t1);
  let t0h = t0.rshift1();
  let t1 = t1.sub(t0h);
  let t2 = t2.sub(t3);
  let t2h = t2.rshift1();
  let t3 = t3.add(t2h);
  let t5 = t5.sub(t4);
  let t5h = t5.rshift1();
  let t4 = t4.add(t5h);
  let t7 = t7.add(t6);
  let t7h = t7.rshift1();
  let t6 = t7h.sub(t6);
  let t4 = t7h.sub(t4);
  let t7 = t7.sub(t4);
  let t1 = t1.add(t5h);
  let t5 = t1.sub(t5);
  let t6 = t6.add(t2h);
  let t2 = t6.sub(t2);
  let t3 = t3.sub(t0h);
  let t0 = t0.add(t3);
  // 3259/16384 ~= Tan[Pi/16] ~= 0.198912367379658
  let t1 = t1.add(t6.tx_mul::<14>(3259));
  // 3135/8192 ~= Sin[Pi/8] ~= 0.382683432365090
  let t6 = t6.sub(t1.tx_mul::<13>(3135));
  let t1 = t1.add(t6.tx_mul::<14>(3259));
  // 2737/4096 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let t5 = t5.add(t2.tx_mul::<12>(2737));
  // 473/512 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t2 = t2.sub(t5.tx_mul::<9>(473));
  let t5 = t5.add(t2.tx_mul::<12>(2737));
  // 3393/8192 ~= Tan[Pi/8] ~= 0.414213562373095
  let t3 = t3.add(t4.tx_mul::<13>(3393));
  // 5793/8192 ~= Sin[Pi/4] ~= 0.707106781186547
  let t4 = t4.sub(t3.tx_mul::<13>(5793));
  let t3 = t3.add(t4.tx_mul::<13>(3393));
  [t0, t4, t2, t6, t1, t5, t3, t7]
}

/// Asymmetric 8-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 16-point butterfly stage.
pub fn daala_idst_iv_8_asym_precise<T: TxOperations>(
  [t0, t4, t2, t6, t1, t5, t3, t7]: [T; 8],
) -> [T; 8] {
  // 3393/8192 ~= Tan[Pi/8] ~= 0.414213562373095
  let t6 = t6.sub(t1.tx_mul::<13>(3393));
  // 5793/8192 ~= Sin[Pi/4] ~= 0.707106781186547
  let t1 = t1.add(t6.tx_mul::<13>(5793));
  let t6 = t6.sub(t1.tx_mul::<13>(3393));
  // 2737/4096 ~= Tan[3*Pi/16] ~= 0.668178637919299
  let t5 = t5.sub(t2.tx_mul::<12>(2737));
  // 473/512 ~= Sin[3*Pi/8] ~= 0.923879532511287
  let t2 = t2.add(t5.tx_mul::<9>(473));
  let t5 = t5.sub(t2.tx_mul::<12>(2737));
  // 3259/16384 ~= Tan[Pi/16] ~= 0.198912367379658
  let t4 = t4.sub(t3.tx_mul::<14>(3259));
  // 3135/8192 ~= Sin[Pi/8] ~= 0.382683432365090
  let t3 = t3.add(t4.tx_mul::<13>(3135));
  let t4 = t4.sub(t3.tx_mul::<14>(3259));
  let t0 = t0.sub(t6);
  let t0h = t0.rshift1();
  let t6 = t6.add(t0h);
  let t2 = t3.sub(t2);
  let t2h = t2.rshift1();
  let t3 = t3.sub(t2h);
  let t5 = t4.sub(t5);
  let t5h = t5.rshift1();
  let t4 = t4.sub(t5h);
  let t7 = t7.add(t1);
  let t7h = t7.rshift1();
  let t1 = t7h.sub(t1);
  let t3 = t7h.sub(t3);
  let t7 = t7.sub(t3);
  let t1 = t1.sub(t5h);
  let t5 = t5.add(t1);
  let t6 = t6.sub(t2h);
  let t2 = t2.add(t6);
  let t4 = t4.add(t0h);
  let t0 = t0.sub(t4);
  // 2507/4096 ~= (1/Sqrt[2] - Sin[Pi/32])/Cos[Pi/32]
  let t7 = t7.sub(t0.tx_mul::<12>(2507));
  // 5765/4096 ~= Sqrt[2]*Cos[Pi/32]
  let t0 = t0.add(t7.tx_mul::<12>(5765));
  // 5417/8192 ~= (Sqrt[2] - Sin[Pi/32])/(2*Cos[Pi/32])
  let t7 = t7.sub(t0.tx_mul::<13>(5417));
  // 3525/4096 ~= (Cos[3*Pi/32] - 1/Sqrt[2])/Sin[3*Pi/32]
  let t1 = t1.add(t6.tx_mul::<12>(3525));
  // 3363/8192 ~= Sqrt[2]*Sin[3*Pi/32]
  let t6 = t6.add(t1.tx_mul::<13>(3363));
  // 12905/16384 ~= (1/Sqrt[2] - Cos[3*Pi/32]/1)/Sin[3*Pi/32]
  let t1 = t1.sub(t6.tx_mul::<14>(12905));
  // 4379/16384 ~= (1/Sqrt[2] - Sin[5*Pi/32])/Cos[5*Pi/32]
  let t5 = t5.sub(t2.tx_mul::<14>(4379));
  // 10217/8192 ~= Sqrt[2]*Cos[5*Pi/32]
  let t2 = t2.add(t5.tx_mul::<13>(10217));
  // 4379/8192 ~= (Sqrt[2] - Sin[5*Pi/32])/(2*Cos[5*Pi/32])
  let t5 = t5.sub(t2.tx_mul::<13>(4379));
  // 851/8192 ~= (Cos[7*Pi/32] - 1/Sqrt[2])/Sin[7*Pi/32]
  let t3 = t3.add(t4.tx_mul::<13>(851));
  // 3675/4096 ~= Sqrt[2]*Sin[7*Pi/32]
  let t4 = t4.add(t3.tx_mul::<12>(3675));
  // 1035/2048 ~= (Sqrt[2] - Cos[7*Pi/32])/(2*Sin[7*Pi/32])
  let t3 = t3.sub(t4.tx_mul::<11>(1035));
  [t0, t4, t2, t6, t1, t5, t3, t7]
}

/// 8-point orthonormal Type-IV forward DST with flattened rotations.
pub fn daala_fdst_iv_8_flat<T: TxOperations>(
  [r0, r1, r2, r3, r4, r5, r6, r7]: [T; 8],
) -> [T; 8] {
  let t = r3.sub(r4);
  // 23059/16384 ~= Sin[9*Pi/32] + Cos[9*Pi/32] ~= 1.4074037375263826
  let u = r4.tx_mul::<14>(23059);
  // 2271/16384 ~= Sin[9*Pi/32] - Cos[9*Pi/32] ~= 0.1386171691990915
  let r4 = r3.tx_mul::<14>(2271);
  // 5197/8192 ~= Cos[9*Pi/32] ~= 0.6343932841636455
  let t = t.tx_mul::<13>(5197);
  let r3 = u.add(t);
  let r4 = r4.add(t);
  let t = r2.add(r5);
  // 22173/16384 ~= Sin[11*Pi/32] + Cos[11*Pi/32] ~= 1.3533180011743526
  let u = r2.tx_mul::<14>(22173);
  // 3363/8192 ~= Sin[11*Pi/32] - Cos[11*Pi/32] ~= 0.4105245275223574
  let r2 = r5.tx_mul::<13>(3363);
  // 15447/32768 ~= Cos[11*Pi/32] ~= 0.47139673682599764
  let t = t.tx_mul::<15>(15447);
  let r2 = r2.add(t);
  let r5 = u.sub(t);
  let t = r1.sub(r6);
  // 40869/32768 ~= Sin[13*Pi/32] + Cos[13*Pi/32] ~= 1.247225012986671
  let u = r6.tx_mul::<15>(40869);
  // 21845/32768 ~= Sin[13*Pi/32] - Cos[13*Pi/32] ~= 0.6666556584777465
  let r6 = r1.tx_mul::<15>(21845);
  // 1189/4096 ~= Cos[13*Pi/32] ~= 0.29028467725446233
  let t = t.tx_mul::<12>(1189);
  let r1 = u.add(t);
  let r6 = r6.add(t);
  let t = r0.add(r7);
  // 17911/16384 ~= Sin[15*Pi/32] + Cos[15*Pi/32] ~= 1.0932018670017576
  let u = r0.tx_mul::<14>(17911);
  // 14699/16384 ~= Sin[15*Pi/32] - Cos[15*Pi/32] ~= 0.8971675863426363
  let r0 = r7.tx_mul::<14>(14699);
  // 803/8192 ~= Cos[15*Pi/32] ~= 0.0980171403295606
  let t = t.tx_mul::<13>(803);
  let r0 = r0.add(t);
  let r7 = u.sub(t);
  let r2 = r2.sub(r1);
  let r2h = r2.rshift1();
  let r1 = r1.add(r2h);
  let r5 = r5.add(r6);
  let r5h = r5.rshift1();
  let r6 = r6.sub(r5h);
  let r0 = r0.add(r3);
  let r0h = r0.rshift1();
  let r3 = r3.sub(r0h);
  let r7 = r7.sub(r4);
  let r7h = r7.rshift1();
  let r4 = r4.add(r7h);
  let r3 = r3.add(r5h);
  let r5 = r5.sub(r3);
  let r1 = r1.sub(r0h);
  let r0 = r0.add(r1);
  let r4 = r4.add(r2h);
  let r2 = r2.sub(r4);
  let r6 = r6.add(r7h);
  let r7 = r7.sub(r6);
  let t = r4.sub_avg(r3);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = r3.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let r3 = r4.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let r3 = r3.add(t);
  let r4 = u.add(t);
  let t = r2.sub_avg(r5);
  let u = r2.tx_mul::<14>(21407);
  let r2 = r5.tx_mul::<14>(8867);
  let t = t.tx_mul::<12>(3135);
  let r5 = t.sub(u);
  let r2 = r2.sub(t);
  let t = r6.sub_avg(r1);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let r6 = r1.tx_mul::<13>(11585);
  let r1 = t.tx_mul::<13>(11585);
  let r6 = r6.add(r1);
  [r0, r1, r2, r3, r4, r5, r6, r7]
}

/// 8-point orthonormal Type-IV inverse DST with flattened rotations.
pub fn daala_idst_iv_8_flat<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 8] {
  let t = r1.add_avg(r6);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let r1 = r6.tx_mul::<13>(11585);
  let r6 = t.tx_mul::<13>(11585);
  let r1 = r1.sub(r6);
  let t = r5.sub_avg(r2);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = r5.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let r5 = r2.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let r5 = r5.sub(t);
  let r2 = t.sub(u);
  let t = r3.add_avg(r4);
  let u = r4.tx_mul::<14>(21407);
  let r4 = r3.tx_mul::<14>(8867);
  let t = t.tx_mul::<12>(3135);
  let r3 = u.sub(t);
  let r4 = r4.add(t);
  let r7 = r7.add(r6);
  let r7h = r7.rshift1();
  let r6 = r6.sub(r7h);
  let r2 = r2.add(r4);
  let r2h = r2.rshift1();
  let r4 = r4.sub(r2h);
  let r0 = r0.sub(r1);
  let r0h = r0.rshift1();
  let r1 = r1.add(r0h);
  let r5 = r5.add(r3);
  let r5h = r5.rshift1();
  let r3 = r3.sub(r5h);
  let r4 = r4.sub(r7h);
  let r7 = r7.add(r4);
  let r6 = r6.add(r5h);
  let r5 = r5.sub(r6);
  let r3 = r3.add(r0h);
  let r0 = r0.sub(r3);
  let r1 = r1.sub(r2h);
  let r2 = r2.add(r1);
  let t = r0.add(r7);
  // 17911/16384 ~= Sin[15*Pi/32] + Cos[15*Pi/32] ~= 1.0932018670017576
  let u = r0.tx_mul::<14>(17911);
  // 14699/16384 ~= Sin[15*Pi/32] - Cos[15*Pi/32] ~= 0.8971675863426363
  let r0 = r7.tx_mul::<14>(14699);
  // 803/8192 ~= Cos[15*Pi/32] ~= 0.0980171403295606
  let t = t.tx_mul::<13>(803);
  let r7 = u.sub(t);
  let r0 = r0.add(t);
  let t = r1.sub(r6);
  // 40869/32768 ~= Sin[13*Pi/32] + Cos[13*Pi/32] ~= 1.247225012986671
  let u = r6.tx_mul::<15>(40869);
  // 21845/32768 ~= Sin[13*Pi/32] - Cos[13*Pi/32] ~= 0.6666556584777465
  let r6 = r1.tx_mul::<15>(21845);
  // 1189/4096 ~= Cos[13*Pi/32] ~= 0.29028467725446233
  let t = t.tx_mul::<12>(1189);
  let r1 = u.add(t);
  let r6 = r6.add(t);
  let t = r2.add(r5);
  // 22173/16384 ~= Sin[11*Pi/32] + Cos[11*Pi/32] ~= 1.3533180011743526
  let u = r2.tx_mul::<14>(22173);
  // 3363/8192 ~= Sin[11*Pi/32] - Cos[11*Pi/32] ~= 0.4105245275223574
  let r2 = r5.tx_mul::<13>(3363);
  // 15447/32768 ~= Cos[11*Pi/32] ~= 0.47139673682599764
  let t = t.tx_mul::<15>(15447);
  let r5 = u.sub(t);
  let r2 = r2.add(t);
  let t = r3.sub(r4);
  // 23059/16384 ~= Sin[9*Pi/32] + Cos[9*Pi/32] ~= 1.4074037375263826
  let u = r4.tx_mul::<14>(23059);
  // 2271/16384 ~= Sin[9*Pi/32] - Cos[9*Pi/32] ~= 0.1386171691990915
  let r4 = r3.tx_mul::<14>(2271);
  // 5197/8192 ~= Cos[9*Pi/32] ~= 0.6343932841636455
  let t = t.tx_mul::<13>(5197);
  let r3 = u.add(t);
  let r4 = r4.add(t);
  [r0, r4, r2, r6, r1, r5, r3, r7]
}

/// Asymmetric 8-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 16-point transform instead of recomputing them.
pub fn daala_fdst_iv_8_asym_flat<T: TxOperations>(
  [r0, r0h, r1, r2, r2h, r3, r4, r4h, r5, r6, r6h, r7]: [T; 12],
) -> [T; 10] {
  let t = r3.sub(r4h);
  // 16305/16384 ~= (Sin[9*Pi/32] + Cos[9*Pi/32])/Sqrt[2] ~= 0.9951847266721969
  let u = r4.tx_mul::<14>(16305);
  // 803/4096 ~= (Sin[9*Pi/32] - Cos[9*Pi/32])*Sqrt[2] ~= 0.1960342806591213
  let r4 = r3.tx_mul::<12>(803);
  // 14699/16384 ~= Cos[9*Pi/32]*Sqrt[2] ~= 0.8971675863426364
  let t = t.tx_mul::<14>(14699);
  let r3 = u.add(t);
  let r4 = r4.add(t);
  let t = r2h.add(r5);
  // 31357/32768 ~= (Sin[11*Pi/32] + Cos[11*Pi/32])/Sqrt[2] ~= 0.95694033573220
  let u = r2.tx_mul::<15>(31357);
  // 1189/2048 ~= (Sin[11*Pi/32] - Cos[11*Pi/32])*Sqrt[2] ~= 0.5805693545089248
  let r2 = r5.tx_mul::<11>(1189);
  // 21845/32768 ~= Cos[11*Pi/32] ~= 0.6666556584777465
  let t = t.tx_mul::<15>(21845);
  let r2 = r2.add(t);
  let r5 = u.sub(t);
  let t = r1.sub(r6h);
  // 28899/32768 ~= (Sin[13*Pi/32] + Cos[13*Pi/32])/Sqrt[2] ~= 0.88192126434835
  let u = r6.tx_mul::<15>(28899);
  // 30893/32768 ~= (Sin[13*Pi/32] - Cos[13*Pi/32])*Sqrt[2] ~= 0.94279347365199
  let r6 = r1.tx_mul::<15>(30893);
  // 3363/8192 ~= Cos[13*Pi/32]*Sqrt[2] ~= 0.41052452752235735
  let t = t.tx_mul::<13>(3363);
  let r1 = u.add(t);
  let r6 = r6.add(t);
  let t = r0h.add(r7);
  // 12665/16384 ~= (Sin[15*Pi/32] + Cos[15*Pi/32])/Sqrt[2] ~= 0.77301045336273
  let u = r0.tx_mul::<14>(12665);
  // 5197/4096 ~= (Sin[15*Pi/32] - Cos[15*Pi/32])*Sqrt[2] ~= 1.268786568327291
  let r0 = r7.tx_mul::<12>(5197);
  // 2271/16384 ~= Cos[15*Pi/32]*Sqrt[2] ~= 0.13861716919909148
  let t = t.tx_mul::<14>(2271);
  let r0 = r0.add(t);
  let r7 = u.sub(t);
  let r2 = r2.sub(r1);
  let r2h = r2.rshift1();
  let r1 = r1.add(r2h);
  let r5 = r5.add(r6);
  let r5h = r5.rshift1();
  let r6 = r6.sub(r5h);
  let r0 = r0.add(r3);
  let r0h = r0.rshift1();
  let r3 = r3.sub(r0h);
  let r7 = r7.sub(r4);
  let r7h = r7.rshift1();
  let r4 = r4.add(r7h);
  let r3 = r3.add(r5h);
  let r5 = r5.sub(r3);
  let r1 = r1.sub(r0h);
  let r0 = r0.add(r1);
  let r4 = r4.add(r2h);
  let r2 = r2.sub(r4);
  let r6 = r6.add(r7h);
  let r7 = r7.sub(r6);
  let t = r4.sub_avg(r3);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = r3.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let r3 = r4.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let r3 = r3.add(t);
  let r4 = u.add(t);
  let t = r2.sub_avg(r5);
  let u = r2.tx_mul::<14>(21407);
  let r2 = r5.tx_mul::<14>(8867);
  let t = t.tx_mul::<12>(3135);
  let r5 = t.sub(u);
  let r2 = r2.sub(t);
  let t = r6.sub_avg(r1);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let r6 = r1.tx_mul::<13>(11585);
  let r1 = t.tx_mul::<13>(11585);
  let r6 = r6.add(r1);
  [r0, r0h, r1, r2, r2h, r3, r4, r5, r6, r7]
}

/// Asymmetric 8-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 16-point butterfly stage.
pub fn daala_idst_iv_8_asym_flat<T: TxOperations>(
  [r0, r4, r2, r6, r1, r5, r3, r7]: [T; 8],
) -> [T; 8] {
  let t = r1.add_avg(r6);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let r1 = r6.tx_mul::<13>(11585);
  let r6 = t.tx_mul::<13>(11585);
  let r1 = r1.sub(r6);
  let t = r5.sub_avg(r2);
  // 21407/16384 ~= Sin[3*Pi/8] + Cos[3*Pi/8] ~= 1.3065629648763766
  let u = r5.tx_mul::<14>(21407);
  // 8867/16384 ~= Sin[3*Pi/8] - Cos[3*Pi/8] ~= 0.5411961001461969
  let r5 = r2.tx_mul::<14>(8867);
  // 3135/4096 ~= 2*Cos[3*Pi/8] ~= 0.7653668647301796
  let t = t.tx_mul::<12>(3135);
  let r5 = r5.sub(t);
  let r2 = t.sub(u);
  let t = r3.add_avg(r4);
  let u = r4.tx_mul::<14>(21407);
  let r4 = r3.tx_mul::<14>(8867);
  let t = t.tx_mul::<12>(3135);
  let r3 = u.sub(t);
  let r4 = r4.add(t);
  let r7 = r7.add(r6);
  let r7h = r7.rshift1();
  let r6 = r6.sub(r7h);
  let r2 = r2.add(r4);
  let r2h = r2.rshift1();
  let r4 = r4.sub(r2h);
  let r0 = r0.sub(r1);
  let r0h = r0.rshift1();
  let r1 = r1.add(r0h);
  let r5 = r5.add(r3);
  let r5h = r5.rshift1();
  let r3 = r3.sub(r5h);
  let r4 = r4.sub(r7h);
  let r7 = r7.add(r4);
  let r6 = r6.add(r5h);
  let r5 = r5.sub(r6);
  let r3 = r3.add(r0h);
  let r0 = r0.sub(r3);
  let r1 = r1.sub(r2h);
  let r2 = r2.add(r1);
  let t = r0.add(r7);
  // 12665/16384 ~= (Sin[15*Pi/32] + Cos[15*Pi/32])/Sqrt[2] ~= 0.77301045336273
  let u = r0.tx_mul::<14>(12665);
  // 5197/4096 ~= (Sin[15*Pi/32] - Cos[15*Pi/32])*Sqrt[2] ~= 1.268786568327291
  let r0 = r7.tx_mul::<12>(5197);
  // 2271/16384 ~= Cos[15*Pi/32]*Sqrt[2] ~= 0.13861716919909148
  let t = t.tx_mul::<14>(2271);
  let r7 = u.sub(t.rshift1());
  let r0 = r0.add(t);
  let t = r1.sub(r6);
  // 28899/32768 ~= (Sin[13*Pi/32] + Cos[13*Pi/32])/Sqrt[2] ~= 0.88192126434835
  let u = r6.tx_mul::<15>(28899);
  // 30893/32768 ~= (Sin[13*Pi/32] - Cos[13*Pi/32])*Sqrt[2] ~= 0.94279347365199
  let r6 = r1.tx_mul::<15>(30893);
  // 3363/8192 ~= Cos[13*Pi/32]*Sqrt[2] ~= 0.41052452752235735
  let t = t.tx_mul::<13>(3363);
  let r1 = u.add(t.rshift1());
  let r6 = r6.add(t);
  let t = r2.add(r5);
  // 31357/32768 ~= (Sin[11*Pi/32] + Cos[11*Pi/32])/Sqrt[2] ~= 0.95694033573220
  let u = r2.tx_mul::<15>(31357);
  // 1189/2048 ~= (Sin[11*Pi/32] - Cos[11*Pi/32])*Sqrt[2] ~= 0.5805693545089248
  let r2 = r5.tx_mul::<11>(1189);
  // 21845/32768 ~= Cos[11*Pi/32] ~= 0.6666556584777465
  let t = t.tx_mul::<15>(21845);
  let r5 = u.sub(t.rshift1());
  let r2 = r2.add(t);
  let t = r3.sub(r4);
  // 16305/16384 ~= (Sin[9*Pi/32] + Cos[9*Pi/32])/Sqrt[2] ~= 0.9951847266721969
  let u = r4.tx_mul::<14>(16305);
  // 803/4096 ~= (Sin[9*Pi/32] - Cos[9*Pi/32])*Sqrt[2] ~= 0.1960342806591213
  let r4 = r3.tx_mul::<12>(803);
  // 14699/16384 ~= Cos[9*Pi/32]*Sqrt[2] ~= 0.8971675863426364
  let t = t.tx_mul::<14>(14699);
  let r3 = u.add(t.rshift1());
  let r4 = r4.add(t);
  [r0, r4, r2, r6, r1, r5, r3, r7]
}
