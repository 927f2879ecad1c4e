// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Straight-line Daala transform kernels.
//!
//! Each size `N` is composed from the `N/2` DCT-II and DST-IV kernels plus
//! one stage of butterflies and rotations. Inputs are taken in sample order
//! and outputs are left in bit-reversed frequency order; see
//! [`perm`](crate::transform::perm) for the tables that undo it. The
//! `_asym` kernels exchange pre-halved values with the enclosing size and
//! are not complete transforms by themselves.

mod dst7;
mod poly8;
mod tx16;
mod tx2;
mod tx32;
mod tx4;
mod tx64;
mod tx8;

pub use self::dst7::*;
pub use self::poly8::*;
pub use self::tx16::*;
pub use self::tx2::*;
pub use self::tx32::*;
pub use self::tx4::*;
pub use self::tx64::*;
pub use self::tx8::*;

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn dct2_shears_invert() {
    assert_eq!(daala_fdct_ii_2_precise(10, 4), (4, 10));
    assert_eq!(daala_idct_ii_2_precise(4, 10), (10, 4));
  }
}
