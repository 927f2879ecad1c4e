// Copyright (c) 2017-2018, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Daala fixed-point integer transforms.
//!
//! Forward and inverse DCT-II, DST-IV and identity transforms of 4 to 64
//! points, built from integer lifting steps so that an encoder and a decoder
//! reproduce the same coefficients bit for bit on every platform.
//!
//! Each transform is a plain function over strided slices, generic over
//! the [`TxOperations`](transform::ops::TxOperations) backend:
//!
//! ```
//! use daala_tx::transform::{fdct8_precise, idct8_precise};
//!
//! let samples = [3, -1, 4, -1, 5, -9, 2, -6];
//! let mut coeffs = [0i32; 8];
//! let mut output = [0i32; 8];
//! fdct8_precise(&mut coeffs, &samples, 1);
//! idct8_precise(&mut output, 1, &coeffs);
//! assert_eq!(output, samples);
//! ```
//!
//! [`TxConfig`] picks the kernel behind each [`TxfmType`] for a family of
//! rotations.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod config;
pub mod transform;

#[cfg(fuzzing)]
pub mod fuzzing;

pub use crate::config::{Dst8Kernel, TxConfig, TxError, TxFamily};
pub use crate::transform::{FwdTxfmFn, InvTxfmFn, TxfmKind, TxfmType};
