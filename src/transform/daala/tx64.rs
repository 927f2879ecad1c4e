// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::transform::ops::TxOperations;

use super::tx32::*;

/// 64-point orthonormal Type-II forward DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_idct_ii_64_precise`] undoes this function exactly.
pub fn daala_fdct_ii_64_precise<T: TxOperations>(
  [
    u0, u32, u16, u48, u8, u40, u24, u56, u4, u36, u20, u52, u12, u44, u28,
    u60, u2, u34, u18, u50, u10, u42, u26, u58, u6, u38, u22, u54, u14, u46,
    u30, u62, u1, u33, u17, u49, u9, u41, u25, u57, u5, u37, u21, u53, u13,
    u45, u29, u61, u3, u35, u19, u51, u11, u43, u27, u59, u7, u39, u23, u55,
    u15, u47, u31, u63,
  ]: [T; 64],
) -> [T; 64] {
  let u63 = u0.sub(u63);
  let u63h = u63.rshift1();
  let u0 = u0.sub(u63h);
  let u62 = u62.add(u1);
  let u62h = u62.rshift1();
  let u1 = u62h.sub(u1);
  let u61 = u2.sub(u61);
  let u61h = u61.rshift1();
  let u2 = u2.sub(u61h);
  let u60 = u60.add(u3);
  let u60h = u60.rshift1();
  let u3 = u60h.sub(u3);
  let u59 = u4.sub(u59);
  let u59h = u59.rshift1();
  let u4 = u4.sub(u59h);
  let u58 = u58.add(u5);
  let u58h = u58.rshift1();
  let u5 = u58h.sub(u5);
  let u57 = u6.sub(u57);
  let u57h = u57.rshift1();
  let u6 = u6.sub(u57h);
  let u56 = u56.add(u7);
  let u56h = u56.rshift1();
  let u7 = u56h.sub(u7);
  let u55 = u8.sub(u55);
  let u55h = u55.rshift1();
  let u8 = u8.sub(u55h);
  let u54 = u54.add(u9);
  let u54h = u54.rshift1();
  let u9 = u54h.sub(u9);
  let u53 = u10.sub(u53);
  let u53h = u53.rshift1();
  let u10 = u10.sub(u53h);
  let u52 = u52.add(u11);
  let u52h = u52.rshift1();
  let u11 = u52h.sub(u11);
  let u51 = u12.sub(u51);
  let u51h = u51.rshift1();
  let u12 = u12.sub(u51h);
  let u50 = u50.add(u13);
  let u50h = u50.rshift1();
  let u13 = u50h.sub(u13);
  let u49 = u14.sub(u49);
  let u49h = u49.rshift1();
  let u14 = u14.sub(u49h);
  let u48 = u48.add(u15);
  let u48h = u48.rshift1();
  let u15 = u48h.sub(u15);
  let u47 = u16.sub(u47);
  let u47h = u47.rshift1();
  let u16 = u16.sub(u47h);
  let u46 = u46.add(u17);
  let u46h = u46.rshift1();
  let u17 = u46h.sub(u17);
  let u45 = u18.sub(u45);
  let u45h = u45.rshift1();
  let u18 = u18.sub(u45h);
  let u44 = u44.add(u19);
  let u44h = u44.rshift1();
  let u19 = u44h.sub(u19);
  let u43 = u20.sub(u43);
  let u43h = u43.rshift1();
  let u20 = u20.sub(u43h);
  let u42 = u42.add(u21);
  let u42h = u42.rshift1();
  let u21 = u42h.sub(u21);
  let u41 = u22.sub(u41);
  let u41h = u41.rshift1();
  let u22 = u22.sub(u41h);
  let u40 = u40.add(u23);
  let u40h = u40.rshift1();
  let u23 = u40h.sub(u23);
  let u39 = u24.sub(u39);
  let u39h = u39.rshift1();
  let u24 = u24.sub(u39h);
  let u38 = u38.add(u25);
  let u38h = u38.rshift1();
  let u25 = u38h.sub(u25);
  let u37 = u26.sub(u37);
  let u37h = u37.rshift1();
  let u26 = u26.sub(u37h);
  let u36 = u36.add(u27);
  let u36h = u36.rshift1();
  let u27 = u36h.sub(u27);
  let u35 = u28.sub(u35);
  let u35h = u35.rshift1();
  let u28 = u28.sub(u35h);
  let u34 = u34.add(u29);
  let u34h = u34.rshift1();
  let u29 = u34h.sub(u29);
  let u33 = u30.sub(u33);
  let u33h = u33.rshift1();
  let u30 = u30.sub(u33h);
  let u32 = u32.add(u31);
  let u32h = u32.rshift1();
  let u31 = u32h.sub(u31);
  let [
    u0, u32, u16, u48, u8, u40, u24, u56, u4, u36, u20, u52, u12, u44, u28,
    u60, u2, u34, u18, u50, u10, u42, u26, u58, u6, u38, u22, u54, u14, u46,
    u30, u62,
  ] =
    daala_fdct_ii_32_asym_precise([
      u0, u32, u32h, u16, u48, u48h, u8, u40, u40h, u24, u56, u56h, u4, u36,
      u36h, u20, u52, u52h, u12, u44, u44h, u28, u60, u60h, u2, u34, u34h, u18,
      u50, u50h, u10, u42, u42h, u26, u58, u58h, u6, u38, u38h, u22, u54, u54h,
      u14, u46, u46h, u30, u62, u62h,
    ]);
  let [
    u63, u31, u47, u15, u55, u23, u39, u7, u59, u27, u43, u11, u51, u19, u35,
    u3, u61, u29, u45, u13, u53, u21, u37, u5, u57, u25, u41, u9, u49, u17,
    u33, u1,
  ] =
    daala_fdst_iv_32_asym_precise([
      u63, u31, u47, u15, u55, u23, u39, u7, u59, u27, u43, u11, u51, u19, u35,
      u3, u61, u29, u45, u13, u53, u21, u37, u5, u57, u25, u41, u9, u49, u17,
      u33, u1,
    ]);
  [
    u0, u32, u16, u48, u8, u40, u24, u56, u4, u36, u20, u52, u12, u44, u28,
    u60, u2, u34, u18, u50, u10, u42, u26, u58, u6, u38, u22, u54, u14, u46,
    u30, u62, u1, u33, u17, u49, u9, u41, u25, u57, u5, u37, u21, u53, u13,
    u45, u29, u61, u3, u35, u19, u51, u11, u43, u27, u59, u7, u39, u23, u55,
    u15, u47, u31, u63,
  ]
}

/// 64-point orthonormal Type-II inverse DCT.
///
/// Every rotation is a sequence of lifting steps, so
/// [`daala_fdct_ii_64_precise`] undoes this function exactly.
pub fn daala_idct_ii_64_precise<T: TxOperations>(
  [
    u0, u32, u16, u48, u8, u40, u24, u56, u4, u36, u20, u52, u12, u44, u28,
    u60, u2, u34, u18, u50, u10, u42, u26, u58, u6, u38, u22, u54, u14, u46,
    u30, u62, u1, u33, u17, u49, u9, u41, u25, u57, u5, u37, u21, u53, u13,
    u45, u29, u61, u3, u35, u19, u51, u11, u43, u27, u59, u7, u39, u23, u55,
    u15, u47, u31, u63,
  ]: [T; 64],
) -> [T; 64] {
  let [
    u63, u47, u55, u39, u59, u43, u51, u35, u61, u45, u53, u37, u57, u41, u49,
    u33, u62, u46, u54, u38, u58, u42, u50, u34, u60, u44, u52, u36, u56, u40,
    u48, u32,
  ] =
    daala_idst_iv_32_asym_precise([
      u63, u47, u55, u39, u59, u43, u51, u35, u61, u45, u53, u37, u57, u41,
      u49, u33, u62, u46, u54, u38, u58, u42, u50, u34, u60, u44, u52, u36,
      u56, u40, u48, u32,
    ]);
  let [
    u0, u16, u8, u24, u4, u20, u12, u28, u2, u18, u10, u26, u6, u22, u14, u30,
    u1, u1h, u17, u17h, u9, u9h, u25, u25h, u5, u5h, u21, u21h, u13, u13h, u29,
    u29h, u3, u3h, u19, u19h, u11, u11h, u27, u27h, u7, u7h, u23, u23h, u15,
    u15h, u31, u31h,
  ] =
    daala_idct_ii_32_asym_precise([
      u0, u16, u8, u24, u4, u20, u12, u28, u2, u18, u10, u26, u6, u22, u14,
      u30, u1, u17, u9, u25, u5, u21, u13, u29, u3, u19, u11, u27, u7, u23,
      u15, u31,
    ]);
  let u63h = u63.rshift1();
  let u0 = u0.add(u63h);
  let u63 = u0.sub(u63);
  let u62 = u1h.sub(u62);
  let u1 = u1.sub(u62);
  let u61h = u61.rshift1();
  let u2 = u2.add(u61h);
  let u61 = u2.sub(u61);
  let u60 = u3h.sub(u60);
  let u3 = u3.sub(u60);
  let u59h = u59.rshift1();
  let u4 = u4.add(u59h);
  let u59 = u4.sub(u59);
  let u58 = u5h.sub(u58);
  let u5 = u5.sub(u58);
  let u57h = u57.rshift1();
  let u6 = u6.add(u57h);
  let u57 = u6.sub(u57);
  let u56 = u7h.sub(u56);
  let u7 = u7.sub(u56);
  let u55h = u55.rshift1();
  let u8 = u8.add(u55h);
  let u55 = u8.sub(u55);
  let u54 = u9h.sub(u54);
  let u9 = u9.sub(u54);
  let u53h = u53.rshift1();
  let u10 = u10.add(u53h);
  let u53 = u10.sub(u53);
  let u52 = u11h.sub(u52);
  let u11 = u11.sub(u52);
  let u51h = u51.rshift1();
  let u12 = u12.add(u51h);
  let u51 = u12.sub(u51);
  let u50 = u13h.sub(u50);
  let u13 = u13.sub(u50);
  let u49h = u49.rshift1();
  let u14 = u14.add(u49h);
  let u49 = u14.sub(u49);
  let u48 = u15h.sub(u48);
  let u15 = u15.sub(u48);
  let u47h = u47.rshift1();
  let u16 = u16.add(u47h);
  let u47 = u16.sub(u47);
  let u46 = u17h.sub(u46);
  let u17 = u17.sub(u46);
  let u45h = u45.rshift1();
  let u18 = u18.add(u45h);
  let u45 = u18.sub(u45);
  let u44 = u19h.sub(u44);
  let u19 = u19.sub(u44);
  let u43h = u43.rshift1();
  let u20 = u20.add(u43h);
  let u43 = u20.sub(u43);
  let u42 = u21h.sub(u42);
  let u21 = u21.sub(u42);
  let u41h = u41.rshift1();
  let u22 = u22.add(u41h);
  let u41 = u22.sub(u41);
  let u40 = u23h.sub(u40);
  let u23 = u23.sub(u40);
  let u39h = u39.rshift1();
  let u24 = u24.add(u39h);
  let u39 = u24.sub(u39);
  let u38 = u25h.sub(u38);
  let u25 = u25.sub(u38);
  let u37h = u37.rshift1();
  let u26 = u26.add(u37h);
  let u37 = u26.sub(u37);
  let u36 = u27h.sub(u36);
  let u27 = u27.sub(u36);
  let u35h = u35.rshift1();
  let u28 = u28.add(u35h);
  let u35 = u28.sub(u35);
  let u34 = u29h.sub(u34);
  let u29 = u29.sub(u34);
  let u33h = u33.rshift1();
  let u30 = u30.add(u33h);
  let u33 = u30.sub(u33);
  let u32 = u31h.sub(u32);
  let u31 = u31.sub(u32);
  [
    u0, u32, u16, u48, u8, u40, u24, u56, u4, u36, u20, u52, u12, u44, u28,
    u60, u2, u34, u18, u50, u10, u42, u26, u58, u6, u38, u22, u54, u14, u46,
    u30, u62, u1, u33, u17, u49, u9, u41, u25, u57, u5, u37, u21, u53, u13,
    u45, u29, u61, u3, u35, u19, u51, u11, u43, u27, u59, u7, u39, u23, u55,
    u15, u47, u31, u63,
  ]
}
