// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

use super::tx2::*;

/// 4-point orthonormal Type-II forward DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idct_ii_4_precise`] undoes this function exactly.
pub fn daala_fdct_ii_4_precise<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 4] {
  let q3 = q0.sub(q3);
  let q3h = q3.rshift1();
  let q0 = q0.sub(q3h);
  let q2 = q2.add(q1);
  let q2h = q2.rshift1();
  let q1 = q2h.sub(q1);
  let (q0, q2) = daala_fdct_ii_2_asym_precise(q0, q2, q2h);
  let (q3, q1) = daala_fdst_iv_2_asym_precise(q3, q1);
  [q0, q2, q1, q3]
}

/// 4-point orthonormal Type-II inverse DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdct_ii_4_precise`] undoes this function exactly.
pub fn daala_idct_ii_4_precise<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 4] {
  let (q3, q2) = daala_idst_iv_2_asym_precise(q3, q2);
  let (q0, q1, q1h) = daala_idct_ii_2_asym_precise(q0, q1);
  let q3h = q3.rshift1();
  let q0 = q0.add(q3h);
  let q3 = q0.sub(q3);
  let q2 = q1h.sub(q2);
  let q1 = q1.sub(q2);
  [q0, q2, q1, q3]
}

/// Asymmetric 4-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 8-point transform instead of recomputing them.
pub fn daala_fdct_ii_4_asym_precise<T: TxOperations>(
  [q0, q2, q2h, q1, q3, q3h]: [T; 6],
) -> [T; 4] {
  let q0 = q0.add(q3h);
  let q3 = q0.sub(q3);
  let q1 = q2h.sub(q1);
  let q2 = q1.sub(q2);
  let (q0, q2) = daala_fdct_ii_2_precise(q0, q2);
  let (q3, q1) = daala_fdst_iv_2_precise(q3, q1);
  [q0, q2, q1, q3]
}

/// Asymmetric 4-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 8-point butterfly stage.
pub fn daala_idct_ii_4_asym_precise<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 6] {
  let (q3, q2) = daala_idst_iv_2_precise(q3, q2);
  let (q0, q1) = daala_idct_ii_2_precise(q0, q1);
  let q1 = q2.sub(q1);
  let q1h = q1.rshift1();
  let q2 = q1h.sub(q2);
  let q3 = q0.sub(q3);
  let q3h = q3.rshift1();
  let q0 = q0.sub(q3h);
  [q0, q2, q1, q1h, q3, q3h]
}

/// 4-point orthonormal Type-II forward DCT with flattened rotations.
pub fn daala_fdct_ii_4_flat<T: TxOperations>(
  [q0, q1, q2, q3]: [T; 4],
) -> [T; 4] {
  let q3 = q0.sub(q3);
  let q3h = q3.rshift1();
  let q0 = q0.sub(q3h);
  let q1 = q1.add(q2);
  let q1h = q1.rshift1();
  let q2 = q2.sub(q1h);
  let (q0, q1) = daala_fdct_ii_2_asym_precise(q0, q1, q1h);
  let (q3, q2) = daala_fdst_iv_2_asym_flat(q3, q3h, q2);
  [q0, q1, q2, q3]
}

/// 4-point orthonormal Type-II inverse DCT with flattened rotations.
pub fn daala_idct_ii_4_flat<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 4] {
  let (q3, q2) = daala_idst_iv_2_asym_flat(q3, q2);
  let (q0, q1, q1h) = daala_idct_ii_2_asym_precise(q0, q1);
  let q2 = q2.add(q1h);
  let q1 = q1.sub(q2);
  let q0 = q0.add(q3.rshift1());
  let q3 = q0.sub(q3);
  [q0, q2, q1, q3]
}

/// Asymmetric 4-point Type-II forward DCT.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 8-point transform instead of recomputing them.
pub fn daala_fdct_ii_4_asym_flat<T: TxOperations>(
  [q0, q1, q1h, q2, q3, q3h]: [T; 6],
) -> [T; 4] {
  let q0 = q0.add(q3h);
  let q3 = q0.sub(q3);
  let q2 = q2.sub(q1h);
  let q1 = q1.add(q2);
  let (q0, q1) = daala_fdct_ii_2_flat(q0, q1);
  let (q3, q2) = daala_fdst_iv_2_flat(q3, q2);
  [q0, q1, q2, q3]
}

/// Asymmetric 4-point Type-II inverse DCT, also returning the half values
/// consumed by the enclosing 8-point butterfly stage.
pub fn daala_idct_ii_4_asym_flat<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 6] {
  // The flattened 2-point DST-IV is its own inverse.
  let (q3, q2) = daala_fdst_iv_2_flat(q3, q2);
  let (q0, q1) = daala_idct_ii_2_flat(q0, q1);
  let q1 = q1.sub(q2);
  let q1h = q1.rshift1();
  let q2 = q2.add(q1h);
  let q3 = q0.sub(q3);
  let q3h = q3.rshift1();
  let q0 = q0.sub(q3h);
  [q0, q2, q1, q1h, q3, q3h]
}

/// 4-point orthonormal Type-IV forward DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idst_iv_4_precise`] undoes this function exactly.
pub fn daala_fdst_iv_4_precise<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 4] {
  // 13573/32768 ~= Tan[Pi/8] ~= 0.414213562373095
  let q2 = q2.add(q1.tx_mul::<15>(13573));
  // 5793/8192 ~= Sin[Pi/4] ~= 0.707106781186547
  let q1 = q1.sub(q2.tx_mul::<13>(5793));
  // 3393/8192 ~= Tan[Pi/8] ~= 0.414213562373095
  let q2 = q2.add(q1.tx_mul::<13>(3393));
  let q0 = q0.add(q2);
  let q0h = q0.rshift1();
  let q2 = q0h.sub(q2);
  let q1 = q1.add(q3);
  let q1h = q1.rshift1();
  let q3 = q3.sub(q1h);
  // 537/1024 ~= (1/Sqrt[2] - Cos[3*Pi/16]/2)/Sin[3*Pi/16] ~= 0.524455699240090
  let q2 = q2.sub(q1.tx_mul::<10>(537));
  // 1609/2048 ~= Sqrt[2]*Sin[3*Pi/16] ~= 0.785694958387102
  let q1 = q1.add(q2.tx_mul::<11>(1609));
  // 7335/32768 ~= (1/Sqrt[2] - Cos[3*Pi/16])/Sin[3*Pi/16] ~= 0.223847182092655
  let q2 = q2.add(q1.tx_mul::<15>(7335));
  // 5091/8192 ~= (1/Sqrt[2] - Cos[7*Pi/16]/2)/Sin[7*Pi/16] ~= 0.62150363831711
  let q3 = q3.add(q0.tx_mul::<13>(5091));
  // 5681/4096 ~= Sqrt[2]*Sin[7*Pi/16] ~= 1.38703984532215
  let q0 = q0.sub(q3.tx_mul::<12>(5681));
  // 4277/8192 ~= (1/Sqrt[2] - Cos[7*Pi/16])/Sin[7*Pi/16] ~= 0.52204745462729
  let q3 = q3.add(q0.tx_mul::<13>(4277));
  [q0, q2, q1, q3]
}

/// 4-point orthonormal Type-IV inverse DST.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdst_iv_4_precise`] undoes this function exactly.
pub fn daala_idst_iv_4_precise<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 4] {
  // 4277/8192 ~= (1/Sqrt[2] - Cos[7*Pi/16])/Sin[7*Pi/16] ~= 0.52204745462729
  let q3 = q3.sub(q0.tx_mul::<13>(4277));
  // 5681/4096 ~= Sqrt[2]*Sin[7*Pi/16] ~= 1.38703984532215
  let q0 = q0.add(q3.tx_mul::<12>(5681));
  // 5091/8192 ~= (1/Sqrt[2] - Cos[7*Pi/16]/2)/Sin[7*Pi/16] ~= 0.62150363831711
  let q3 = q3.sub(q0.tx_mul::<13>(5091));
  // 7335/32768 ~= (1/Sqrt[2] - Cos[3*Pi/16])/Sin[3*Pi/16] ~= 0.223847182092655
  let q1 = q1.sub(q2.tx_mul::<15>(7335));
  // 1609/2048 ~= Sqrt[2]*Sin[3*Pi/16] ~= 0.785694958387102
  let q2 = q2.sub(q1.tx_mul::<11>(1609));
  // 537/1024 ~= (1/Sqrt[2] - Cos[3*Pi/16]/2)/Sin[3*Pi/16] ~= 0.524455699240090
  let q1 = q1.add(q2.tx_mul::<10>(537));
  let q2h = q2.rshift1();
  let q3 = q3.add(q2h);
  let q2 = q2.sub(q3);
  let q0h = q0.rshift1();
  let q1 = q0h.sub(q1);
  let q0 = q0.sub(q1);
  // 3393/8192 ~= Tan[Pi/8] ~= 0.414213562373095
  let q1 = q1.sub(q2.tx_mul::<13>(3393));
  // 5793/8192 ~= Sin[Pi/4] ~= 0.707106781186547
  let q2 = q2.add(q1.tx_mul::<13>(5793));
  // 13573/32768 ~= Tan[Pi/8] ~= 0.414213562373095
  let q1 = q1.sub(q2.tx_mul::<15>(13573));
  [q0, q2, q1, q3]
}

/// Asymmetric 4-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 8-point transform instead of recomputing them.
pub fn daala_fdst_iv_4_asym_precise<T: TxOperations>(
  [t0, t0h, t2, t1, t3]: [T; 5],
) -> [T; 4] {
  // 7489/8192 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t2 = t2.sub(t1.tx_mul::<13>(7489));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186548
  let t1 = t1.add(t2.tx_mul::<14>(11585));
  // -19195/32768 ~= Tan[Pi/8] - Tan[Pi/4] ~= -0.585786437626905
  let t2 = t2.add(t1.tx_mul::<15>(19195));
  let t3 = t3.add(t2.rshift1());
  let t2 = t2.sub(t3);
  let t1 = t0h.sub(t1);
  let t0 = t0.sub(t1);
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.820678790828660
  let t3 = t3.add(t0.tx_mul::<13>(6723));
  // 8035/8192 ~= Sin[7*Pi/16] ~= 0.980785280403230
  let t0 = t0.sub(t3.tx_mul::<13>(8035));
  let t3 = t3.add(t0.tx_mul::<13>(6723));
  // 8757/16384 ~= Tan[5*Pi/32] ~= 0.534511135950792
  let t2 = t2.add(t1.tx_mul::<14>(8757));
  // 6811/8192 ~= Sin[5*Pi/16] ~= 0.831469612302545
  let t1 = t1.sub(t2.tx_mul::<13>(6811));
  let t2 = t2.add(t1.tx_mul::<14>(8757));
  [t0, t2, t1, t3]
}

/// Asymmetric 4-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 8-point butterfly stage.
pub fn daala_idst_iv_4_asym_precise<T: TxOperations>(
  [t0, t2, t1, t3]: [T; 4],
) -> [T; 5] {
  // 8757/16384 ~= Tan[5*Pi/32] ~= 0.534511135950792
  let t1 = t1.sub(t2.tx_mul::<14>(8757));
  // 6811/8192 ~= Sin[5*Pi/16] ~= 0.831469612302545
  let t2 = t2.add(t1.tx_mul::<13>(6811));
  let t1 = t1.sub(t2.tx_mul::<14>(8757));
  // 6723/8192 ~= Tan[7*Pi/32] ~= 0.820678790828660
  let t3 = t3.sub(t0.tx_mul::<13>(6723));
  // 8035/8192 ~= Sin[7*Pi/16] ~= 0.980785280403230
  let t0 = t0.add(t3.tx_mul::<13>(8035));
  let t3 = t3.sub(t0.tx_mul::<13>(6723));
  let t0 = t0.add(t2);
  let t0h = t0.rshift1();
  let t2 = t0h.sub(t2);
  let t1 = t1.add(t3);
  let t3 = t3.sub(t1.rshift1());
  // -19195/32768 ~= Tan[Pi/8] - Tan[Pi/4] ~= -0.585786437626905
  let t1 = t1.sub(t2.tx_mul::<15>(19195));
  // 11585/16384 ~= Sin[Pi/4] ~= 0.707106781186548
  let t2 = t2.sub(t1.tx_mul::<14>(11585));
  // 7489/8192 ~= Tan[Pi/8] + Tan[Pi/4]/2 ~= 0.914213562373095
  let t1 = t1.add(t2.tx_mul::<13>(7489));
  [t0, t0h, t2, t1, t3]
}

/// 4-point orthonormal Type-IV forward DST with flattened rotations.
pub fn daala_fdst_iv_4_flat<T: TxOperations>(
  [q0, q1, q2, q3]: [T; 4],
) -> [T; 4] {
  let t = q0.sub(q3);
  // 13623/16384 ~= (Sin[7*Pi/16] + Cos[7*Pi/16])/Sqrt[2] ~= 0.8314696123025451
  let u = q3.tx_mul::<14>(13623);
  // 18205/16384 ~= (Sin[7*Pi/16] - Cos[7*Pi/16])*Sqrt[2] ~= 1.1111404660392046
  let q3 = q0.tx_mul::<14>(18205);
  // 9041/32768 ~= Cos[7*Pi/16]*Sqrt[2] ~= 0.275899379282943
  let t = t.tx_mul::<15>(9041);
  let q0 = u.add(t.rshift1());
  let q3 = q3.add(t);
  let t = q1.add(q2);
  // 16069/16384 ~= (Sin[5*Pi/16] + Cos[5*Pi/16])/Sqrt[2] ~= 0.9807852804032304
  let u = q1.tx_mul::<14>(16069);
  // 12785/32768 ~= (Sin[5*Pi/16] - Cos[5*Pi/16])*Sqrt[2] ~= 0.3901806440322566
  let q1 = q2.tx_mul::<15>(12785);
  // 12873/16384 ~= Cos[5*Pi/16]*Sqrt[2] ~= 0.7856949583871021
  let t = t.tx_mul::<14>(12873);
  let q2 = u.sub(t.rshift1());
  let q1 = q1.add(t);
  let q2 = q2.add(q3.rshift1());
  let q3 = q3.sub(q2);
  let q0 = q0.add(q1.rshift1());
  let q1 = q1.sub(q0);
  let t = q1.add_avg(q2);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let q1 = q2.tx_mul::<13>(11585);
  let q2 = t.tx_mul::<13>(11585);
  let q1 = q1.sub(q2);
  [q0, q1, q2, q3]
}

/// 4-point orthonormal Type-IV inverse DST with flattened rotations.
pub fn daala_idst_iv_4_flat<T: TxOperations>(
  [q0, q1, q2, q3]: [T; 4],
) -> [T; 4] {
  let t = q1.add_avg(q2);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let q2 = q1.tx_mul::<13>(11585);
  let q1 = t.tx_mul::<13>(11585);
  let q2 = q2.sub(q1);
  let q2 = q2.add(q0);
  let q2h = q2.rshift1();
  let q0 = q0.sub(q2h);
  let q3 = q3.add(q1);
  let q3h = q3.rshift1();
  let q1 = q1.sub(q3h);
  let t = q1.add(q2h);
  // 16069/16384 ~= (Sin[5*Pi/16] + Cos[5*Pi/16])/Sqrt[2] ~= 0.9807852804032304
  let u = q2.tx_mul::<14>(16069);
  // 12785/32768 ~= (Sin[5*Pi/16] - Cos[5*Pi/16])*Sqrt[2] ~= 0.3901806440322566
  let q2 = q1.tx_mul::<15>(12785);
  // 12873/16384 ~= Cos[5*Pi/16]*Sqrt[2] ~= 0.7856949583871021
  let t = t.tx_mul::<14>(12873);
  let q1 = u.sub(t);
  let q2 = q2.add(t);
  let t = q0.sub(q3h);
  // 13623/16384 ~= (Sin[7*Pi/16] + Cos[7*Pi/16])/Sqrt[2] ~= 0.8314696123025451
  let u = q3.tx_mul::<14>(13623);
  // 18205/16384 ~= (Sin[7*Pi/16] - Cos[7*Pi/16])*Sqrt[2] ~= 1.1111404660392046
  let q3 = q0.tx_mul::<14>(18205);
  // 9041/32768 ~= Cos[7*Pi/16]*Sqrt[2] = 0.275899379282943
  let t = t.tx_mul::<15>(9041);
  let q0 = u.add(t);
  let q3 = q3.add(t);
  [q0, q1, q2, q3]
}

/// Asymmetric 4-point Type-IV forward DST.
///
/// Takes the half values produced by the butterfly stage of the enclosing
/// 8-point transform instead of recomputing them.
pub fn daala_fdst_iv_4_asym_flat<T: TxOperations>(
  [q0, q0h, q1, q2, q2h, q3]: [T; 6],
) -> [T; 4] {
  let t = q0h.sub(q3);
  // 38531/32768 ~= Sin[7*Pi/16] + Cos[7*Pi/16] ~= 1.1758756024193586
  let u = q3.tx_mul::<15>(38531);
  // 12873/16384 ~= Sin[7*Pi/16] - Cos[7*Pi/16] ~= 0.7856949583871022
  let q3 = q0.tx_mul::<14>(12873);
  // 12785/32768 ~= 2*Cos[7*Pi/16] ~= 0.3901806440322565
  let t = t.tx_mul::<15>(12785);
  let q0 = u.add(t.rshift1());
  let q3 = q3.add(t);
  let t = q1.add(q2h);
  // 45451/32768 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = q1.tx_mul::<15>(45451);
  // 9041/32768 ~= Sin[5*Pi/16] - Cos[5*Pi/16] ~= 0.27589937928294306
  let q1 = q2.tx_mul::<15>(9041);
  // 18205/16384 ~= 2*Cos[5*Pi/16] ~= 1.1111404660392044
  let t = t.tx_mul::<14>(18205);
  let q1 = q1.add(t);
  let q2 = u.sub(t.rshift1());
  let q2 = q2.add(q3.rshift1());
  let q3 = q3.sub(q2);
  let q0 = q0.add(q1.rshift1());
  let q1 = q1.sub(q0);
  let t = q1.add_avg(q2);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let q1 = q2.tx_mul::<13>(11585);
  let q2 = t.tx_mul::<13>(11585);
  let q1 = q1.sub(q2);
  [q0, q1, q2, q3]
}

/// Asymmetric 4-point Type-IV inverse DST, also returning the half values
/// consumed by the enclosing 8-point butterfly stage.
pub fn daala_idst_iv_4_asym_flat<T: TxOperations>(
  [q0, q2, q1, q3]: [T; 4],
) -> [T; 4] {
  let t = q1.add_avg(q2);
  // 11585/8192 ~= 2*Sin[Pi/4] ~= 1.4142135623730951
  let q1 = q2.tx_mul::<13>(11585);
  let q2 = t.tx_mul::<13>(11585);
  let q1 = q1.sub(q2);
  let q1 = q1.add(q0);
  let q1h = q1.rshift1();
  let q0 = q0.sub(q1h);
  let q3 = q3.add(q2);
  let q3h = q3.rshift1();
  let q2 = q2.sub(q3h);
  let t = q1h.add(q2);
  // 45451/32768 ~= Sin[5*Pi/16] + Cos[5*Pi/16] ~= 1.3870398453221475
  let u = q1.tx_mul::<15>(45451);
  // 9041/32768 ~= Sin[5*Pi/16] - Cos[5*Pi/16] ~= 0.27589937928294306
  let q1 = q2.tx_mul::<15>(9041);
  // 18205/16384 ~= 2*Cos[5*Pi/16] ~= 1.1111404660392044
  let t = t.tx_mul::<14>(18205);
  let q1 = q1.add(t.rshift1());
  let q2 = u.sub(t);
  let t = q0.sub(q3h);
  // 38531/32768 ~= Sin[7*Pi/16] + Cos[7*Pi/16] = 1.1758756024193586
  let u = q3.tx_mul::<15>(38531);
  // 12873/16384 ~= Sin[7*Pi/16] - Cos[7*Pi/16] = 0.7856949583871022
  let q3 = q0.tx_mul::<14>(12873);
  // 12785/32768 ~= 2*Cos[7*Pi/16] = 0.3901806440322565
  let t = t.tx_mul::<15>(12785);
  let q3 = q3.add(t.rshift1());
  let q0 = u.add(t);
  [q0, q2, q1, q3]
}
