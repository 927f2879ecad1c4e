// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

/// 4-point orthonormal Type-VII forward DST.
///
/// 11 adds, 5 multiplies and 2 shifts. Input and output are both in natural
/// order.
pub fn daala_fdst_vii_4<T: TxOperations>([q0, q1, q2, q3]: [T; 4]) -> [T; 4] {
  let t0 = q1.add(q3);
  // t1 = (q0 + q1 - q3)/2, kept inside 16 bits by the rounded average
  let t1 = q1.add(q0.sub_avg(t0));
  let t2 = q0.sub(q1);
  let t3 = q2;
  let t4 = q0.add(q3);
  // 7021/16384 ~= 2*Sin[2*Pi/9]/3 ~= 0.428525073124360
  let t0 = t0.tx_mul::<14>(7021);
  // 37837/32768 ~= 4*Sin[3*Pi/9]/3 ~= 1.154700538379252
  let t1 = t1.tx_mul::<15>(37837);
  // 21513/32768 ~= 2*Sin[4*Pi/9]/3 ~= 0.656538502008139
  let t2 = t2.tx_mul::<15>(21513);
  let t3 = t3.tx_mul::<15>(37837);
  // 467/2048 ~= 2*Sin[1*Pi/9]/3 ~= 0.228013428883779
  let t4 = t4.tx_mul::<11>(467);
  let t3h = t3.rshift1();
  let u4 = t4.add(t3h);
  [t0.add(u4), t1, t0.add(t2).sub(t3h), t2.add(t3).sub(u4)]
}

/// 4-point orthonormal Type-VII inverse DST.
pub fn daala_idst_vii_4<T: TxOperations>([q0, q1, q2, q3]: [T; 4]) -> [T; 4] {
  let t0 = q0.sub(q3);
  let t1 = q0.add(q2);
  let t2 = q3.add(t0.sub_avg(q2));
  let t3 = q1;
  let t4 = q2.add(q3);
  let t0 = t0.tx_mul::<11>(467);
  let t1 = t1.tx_mul::<14>(7021);
  let t2 = t2.tx_mul::<15>(37837);
  let t3 = t3.tx_mul::<15>(37837);
  let t4 = t4.tx_mul::<15>(21513);
  let t3h = t3.rshift1();
  let u4 = t4.add(t3h);
  [t0.add(u4), t1.add(t3).sub(u4), t2, t0.add(t1).sub(t3h)]
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn impulse() {
    let coeffs = daala_fdst_vii_4([64, 0, 0, 0]);
    assert_eq!(coeffs, [15, 37, 42, 27]);
    // Not a lifting structure, so the round trip is only approximate.
    assert_eq!(daala_idst_vii_4(coeffs), [63, 1, 0, 0]);
  }
}
