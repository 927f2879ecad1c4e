// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

/// Computes `Y(z) = X(z)*H(z) mod (z^8 + 1)` for the fixed odd-transform
/// filter `H` with Nussbaumer's short algorithm.
///
/// The coefficients of `Y` are the values of the negacyclic convolution of
/// the coefficients of `X` with those of `H`. Since `H` is fixed, all 21
/// multiplications are by precomputed constants (76 adds, 21 shifts).
/// The result lands in polynomial order; see
/// [`DST8_POLY_PERM`](crate::transform::perm::DST8_POLY_PERM) for the
/// frequency order.
pub fn daala_poly_prod_8<T: TxOperations>(
  [t0, t1, t2, t3, t4, t5, t6, t7]: [T; 8],
) -> [T; 8] {
  // Stage 0 butterfly
  let u7 = t0.sub(t7);
  let u7h = u7.rshift1();
  let u0 = t0.sub(u7h);
  let u2 = t2.sub(t6);
  let u2h = u2.rshift1();
  let u6 = t2.sub(u2h);
  let u4 = t4.add(t5);
  let u4h = u4.rshift1();
  let u5 = t4.sub(u4h);
  let u1 = t3.sub(t1);
  let u1h = u1.rshift1();
  let u3 = t3.sub(u1h);

  // Stage 1 butterfly
  let q0 = u0.add(u2h);
  let q1 = q0.sub(u2);
  let q4 = u3.add(u4h);
  let q5 = q4.sub(u4);
  let q2 = u7h.add(u5);
  let q7 = u7.sub(q2);
  let q6 = u1h.add(u6);
  let q3 = u1.sub(q6);

  // Stage 2 half-butterfly. The sums may need 17 bits; SIMD versions should
  // use a halving add.
  let q8 = q0.add_avg(q4);
  let q9 = q1.add(q5).half();
  let q10 = q2.add_avg(q3);
  let q11 = q7.add(q6).half();

  // Stage 3
  let q12 = t0.add(t3);
  let q13 = t0;
  let q14 = t3;
  let q15 = t5.sub(t6);
  let q16 = t6;
  let q17 = t5;
  let r0 = t2.add(t4);
  let r1 = t2.sub(r0.rshift1());
  let r2 = r1.sub_avg(q15);
  let r3 = t0.rshift1();
  let r4 = r3.sub_avg(t1);
  // q18 = (q6 - q4)/2 + (t0 - q15)/4
  //     = (t0 + t2 - t4)/4 - (t1 + t5 - t6)/2
  let q18 = r2.add(r4);
  let r5 = t5.sub(q15.half());
  let r6 = r0.add_avg(t3);
  let r7 = t7.add_avg(r6);
  // q19 = (q7 - q0)/2 + (t5 + t6 - t3)/4
  //     = (t5 + t6 - t7)/2 - (t2 + t3 + t4)/4
  let q19 = r5.sub(r7);
  let q20 = q18.sub(q19).half();

  // Stage 4
  let q0 = q0.tx_mul::<14>(-5995);
  let q1 = q1.tx_mul::<13>(-1373);
  let q2 = q2.tx_mul::<15>(22891);
  let q3 = q3.tx_mul::<10>(-217);
  let q4 = q4.tx_mul::<15>(13427);
  let q5 = q5.tx_mul::<14>(-11013);
  let q6 = q6.tx_mul::<11>(1373);
  let q7 = q7.tx_mul::<15>(-14077);
  let q8 = q8.tx_mul::<15>(-1437);
  let q9 = q9.tx_mul::<15>(27519);
  let q10 = q10.tx_mul::<15>(-15947);
  let q11 = q11.tx_mul::<15>(-7891);
  let q12 = q12.tx_mul::<15>(4897);
  let q13 = q13.tx_mul::<14>(-5079);
  let q14 = q14.tx_mul::<15>(365);
  let q15 = q15.tx_mul::<14>(3325);
  let q16 = q16.tx_mul::<14>(-5225);
  let q17 = q17.tx_mul::<14>(-1425);
  let q18 = q18.tx_mul::<15>(3453);
  let q19 = q19.tx_mul::<14>(-8421);
  let q20 = q20.tx_mul::<15>(-20295);

  // Stage 5
  let u0 = q0.add(q8);
  let u1 = q1.add(q9);
  let u2 = q2.add(q10);
  let u3 = q3.add(q10);
  let u4 = q4.add(q8);
  let u5 = q5.add(q9);
  let u6 = q6.add(q11);
  let u7 = q7.add(q11);

  // Stage 6
  let u10 = u0.add(u1);
  let u11 = u0.sub(u1);
  let u12 = u2.add(u7);
  let u13 = u2.sub(u7);
  let u14 = u3.add(u6);
  let u15 = u3.sub(u6);
  let u16 = u5.add(u4);
  let u17 = u5.sub(u4);

  // Stage 7
  let u8 = q19.add(q20);
  let u9 = q19.sub(q18);
  let u18 = q12.add(u8);
  let u19 = u18.add(q13);
  let u20 = u18.add(q14);
  let u21 = u9.add(u9);
  let u22 = q15.add(u21);
  let u23 = q16.sub(u22);
  let u24 = u22.add(q17);
  let u25 = u8.add(u8);
  let u26 = u25.add(u25);
  let u27 = u25.sub(u9);

  // Stage 8
  [
    u14.add(u16).add(u20),
    u12.sub(u10).sub(u25),
    u9.add(u13).sub(u17),
    u9.sub(u10).sub(u12).sub(u19),
    u15.sub(u11).sub(u27),
    u23.sub(u11).sub(u15),
    u13.add(u17).sub(u24).add(u26),
    u16.sub(u14).add(u21).sub(u25),
  ]
}
