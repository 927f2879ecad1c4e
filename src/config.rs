// Copyright (c) 2020-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Selection of the kernel behind each transform type.

use crate::transform::ops::TxOperations;
use crate::transform::perm::strided_len;
use crate::transform::*;

use arg_enum_proc_macro::ArgEnum;
use log::{debug, info, warn};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Rotation family used to build the DCT and DST kernels.
///
/// A stream must be inverted with the same family it was produced with.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, ArgEnum)]
pub enum TxFamily {
  /// The codec mix: flattened DCTs up to 32 points, the precise 64-point
  /// DCT, the 4-point DST-VII, flattened 8- and 16-point DSTs, the precise
  /// 32-point DST and the half-right 64-point DST.
  #[default]
  Reference,
  /// Lifting rotations everywhere. Every transform inverts exactly.
  #[arg_enum(alias = "pr")]
  Precise,
  /// Flattened rotations everywhere they exist.
  #[arg_enum(alias = "flattened")]
  Flat,
}

impl TxFamily {
  #[cfg(test)]
  pub(crate) const fn all() -> &'static [Self] {
    use TxFamily::*;
    &[Reference, Precise, Flat]
  }
}

/// Kernel used for the 8-point DST of the reference family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ArgEnum)]
pub enum Dst8Kernel {
  /// The DST-IV composed from lifting rotations.
  Rotation,
  /// Nussbaumer polynomial product modulo `z^8 + 1`.
  #[arg_enum(alias = "poly")]
  Polynomial,
}

impl Default for Dst8Kernel {
  fn default() -> Self {
    if cfg!(feature = "dst8_poly") {
      Dst8Kernel::Polynomial
    } else {
      Dst8Kernel::Rotation
    }
  }
}

/// Errors reported while resolving or running a transform.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum TxError {
  /// The family has no kernel for the transform type.
  #[error("no {family} kernel for {txfm_type:?}")]
  Unsupported {
    /// The requested transform.
    txfm_type: TxfmType,
    /// The configured family.
    family: TxFamily,
  },
  /// The polynomial 8-point kernel was combined with another family.
  #[error("the polynomial 8-point DST needs the Reference family, not {0}")]
  PolynomialFamily(TxFamily),
  /// The size is not a supported power of two.
  #[error("invalid transform size {0} (expected 4, 8, 16, 32 or 64)")]
  InvalidSize(usize),
  /// A buffer cannot hold every sample of the transform.
  #[error("buffer holds {actual} elements (expected >= {needed})")]
  ShortBuffer {
    /// Elements the transform touches.
    needed: usize,
    /// Length of the buffer.
    actual: usize,
  },
}

/// Transform configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TxConfig {
  /// Rotation family.
  pub family: TxFamily,
  /// 8-point DST kernel. Only the reference family honors `Polynomial`.
  pub dst8: Dst8Kernel,
}

impl TxConfig {
  pub const fn new(family: TxFamily, dst8: Dst8Kernel) -> Self {
    TxConfig { family, dst8 }
  }

  /// Builds the default configuration with the overrides in the
  /// `DAALA_TX_FAMILY` and `DAALA_TX_DST8` environment variables.
  ///
  /// Values that do not parse, or that form an invalid combination, are
  /// ignored with a warning.
  pub fn from_env() -> Self {
    let family = env::var("DAALA_TX_FAMILY").ok();
    let dst8 = env::var("DAALA_TX_DST8").ok();
    Self::from_vars(family.as_deref(), dst8.as_deref())
  }

  fn from_vars(family: Option<&str>, dst8: Option<&str>) -> Self {
    let mut config = TxConfig::default();
    if let Some(s) = family {
      match TxFamily::from_str(s) {
        Ok(family) => config.family = family,
        Err(_) => warn!("Ignoring unknown transform family {s:?}"),
      }
    }
    if let Some(s) = dst8 {
      match Dst8Kernel::from_str(s) {
        Ok(dst8) => config.dst8 = dst8,
        Err(_) => warn!("Ignoring unknown 8-point DST kernel {s:?}"),
      }
    }
    if let Err(e) = config.validate() {
      warn!("{e}; falling back to the rotation kernel");
      config.dst8 = Dst8Kernel::Rotation;
    }
    info!(
      "Transform family: {}, 8-point DST: {}",
      config.family, config.dst8
    );
    config
  }

  /// Checks the configuration for inconsistencies.
  ///
  /// # Errors
  ///
  /// Returns `TxError::PolynomialFamily` if the polynomial kernel is
  /// requested outside the reference family.
  pub fn validate(&self) -> Result<(), TxError> {
    if self.dst8 == Dst8Kernel::Polynomial
      && self.family != TxFamily::Reference
    {
      return Err(TxError::PolynomialFamily(self.family));
    }
    Ok(())
  }

  /// Resolves the forward kernel for `txfm_type`.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the family has no
  /// kernel of this type.
  pub fn forward_fn<T: TxOperations>(
    &self, txfm_type: TxfmType,
  ) -> Result<FwdTxfmFn<T>, TxError> {
    use self::TxFamily::*;
    use crate::transform::TxfmType::*;

    self.validate()?;
    let poly = self.dst8 == Dst8Kernel::Polynomial;
    let f: FwdTxfmFn<T> = match (self.family, txfm_type) {
      (Reference | Flat, DCT4) => fdct4_flat,
      (Precise, DCT4) => fdct4_precise,
      (Reference | Flat, DCT8) => fdct8_flat,
      (Precise, DCT8) => fdct8_precise,
      (Reference | Flat, DCT16) => fdct16_flat,
      (Precise, DCT16) => fdct16_precise,
      (Reference | Flat, DCT32) => fdct32_flat,
      (Precise, DCT32) => fdct32_precise,
      (Reference | Precise, DCT64) => fdct64_precise,
      (Reference, DST4) => fdst4,
      (Precise, DST4) => fdst4_precise,
      (Flat, DST4) => fdst4_flat,
      (Reference, DST8) if poly => fdst8_poly,
      (Reference | Flat, DST8) => fdst8_flat,
      (Precise, DST8) => fdst8_precise,
      (Reference | Flat, DST16) => fdst16_flat,
      (Precise, DST16) => fdst16_precise,
      (Reference | Precise, DST32) => fdst32_precise,
      (Reference | Flat, DST64) => fdst64_flat,
      (Precise, DST64) => fdst64_precise,
      (_, Identity4) => fidtx4,
      (_, Identity8) => fidtx8,
      (_, Identity16) => fidtx16,
      (_, Identity32) => fidtx32,
      (_, Identity64) => fidtx64,
      (family @ Flat, DCT64 | DST32) => {
        return Err(TxError::Unsupported { txfm_type, family })
      }
    };
    debug!("{txfm_type:?} forward kernel resolved for {}", self.family);
    Ok(f)
  }

  /// Resolves the inverse kernel for `txfm_type`.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the family has no
  /// kernel of this type.
  pub fn inverse_fn<T: TxOperations>(
    &self, txfm_type: TxfmType,
  ) -> Result<InvTxfmFn<T>, TxError> {
    use self::TxFamily::*;
    use crate::transform::TxfmType::*;

    self.validate()?;
    let poly = self.dst8 == Dst8Kernel::Polynomial;
    let f: InvTxfmFn<T> = match (self.family, txfm_type) {
      (Reference | Flat, DCT4) => idct4_flat,
      (Precise, DCT4) => idct4_precise,
      (Reference | Flat, DCT8) => idct8_flat,
      (Precise, DCT8) => idct8_precise,
      (Reference | Flat, DCT16) => idct16_flat,
      (Precise, DCT16) => idct16_precise,
      (Reference | Flat, DCT32) => idct32_flat,
      (Precise, DCT32) => idct32_precise,
      (Reference | Precise, DCT64) => idct64_precise,
      (Reference, DST4) => idst4,
      (Precise, DST4) => idst4_precise,
      (Flat, DST4) => idst4_flat,
      (Reference, DST8) if poly => idst8_poly,
      (Reference | Flat, DST8) => idst8_flat,
      (Precise, DST8) => idst8_precise,
      (Reference | Flat, DST16) => idst16_flat,
      (Precise, DST16) => idst16_precise,
      (Reference | Precise, DST32) => idst32_precise,
      (Reference | Flat, DST64) => idst64_flat,
      (Precise, DST64) => idst64_precise,
      (_, Identity4) => iidtx4,
      (_, Identity8) => iidtx8,
      (_, Identity16) => iidtx16,
      (_, Identity32) => iidtx32,
      (_, Identity64) => iidtx64,
      (family @ Flat, DCT64 | DST32) => {
        return Err(TxError::Unsupported { txfm_type, family })
      }
    };
    debug!("{txfm_type:?} inverse kernel resolved for {}", self.family);
    Ok(f)
  }

  /// Runs the forward transform `txfm_type` on `input` sampled at
  /// `stride`, writing contiguous coefficients to `output`.
  ///
  /// # Errors
  ///
  /// Returns an error if the kernel cannot be resolved or either buffer is
  /// too short. Nothing is written in that case.
  pub fn forward<T: TxOperations>(
    &self, txfm_type: TxfmType, output: &mut [T], input: &[T], stride: usize,
  ) -> Result<(), TxError> {
    let f = self.forward_fn(txfm_type)?;
    let n = txfm_type.size();
    check_len(output.len(), n)?;
    check_len(input.len(), strided_len(n, stride))?;
    f(output, input, stride);
    Ok(())
  }

  /// Runs the inverse transform `txfm_type` on the contiguous coefficients
  /// in `input`, writing samples to `output` at `stride`.
  ///
  /// # Errors
  ///
  /// Returns an error if the kernel cannot be resolved or either buffer is
  /// too short. Nothing is written in that case.
  pub fn inverse<T: TxOperations>(
    &self, txfm_type: TxfmType, output: &mut [T], stride: usize, input: &[T],
  ) -> Result<(), TxError> {
    let f = self.inverse_fn(txfm_type)?;
    let n = txfm_type.size();
    check_len(input.len(), n)?;
    check_len(output.len(), strided_len(n, stride))?;
    f(output, stride, input);
    Ok(())
  }
}

#[inline]
const fn check_len(actual: usize, needed: usize) -> Result<(), TxError> {
  if actual < needed {
    return Err(TxError::ShortBuffer { needed, actual });
  }
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn parse_family() {
    assert_eq!(TxFamily::from_str("Precise").ok(), Some(TxFamily::Precise));
    assert_eq!(TxFamily::from_str("flattened").ok(), Some(TxFamily::Flat));
    assert_eq!(
      Dst8Kernel::from_str("poly").ok(),
      Some(Dst8Kernel::Polynomial)
    );
    assert!(TxFamily::from_str("fast").is_err());
  }

  #[test]
  fn from_vars_overrides() {
    let config = TxConfig::from_vars(Some("Precise"), Some("Rotation"));
    assert_eq!(config, TxConfig::new(TxFamily::Precise, Dst8Kernel::Rotation));

    let config = TxConfig::from_vars(Some("bogus"), None);
    assert_eq!(config.family, TxFamily::Reference);

    // Invalid combinations fall back to the rotation kernel.
    let config = TxConfig::from_vars(Some("Flat"), Some("Polynomial"));
    assert_eq!(config, TxConfig::new(TxFamily::Flat, Dst8Kernel::Rotation));
    assert!(config.validate().is_ok());
  }

  #[test]
  fn polynomial_needs_reference() {
    for &family in TxFamily::all() {
      let config = TxConfig::new(family, Dst8Kernel::Polynomial);
      assert_eq!(
        config.validate().is_ok(),
        family == TxFamily::Reference,
        "{family:?}"
      );
    }
    let config = TxConfig::new(TxFamily::Precise, Dst8Kernel::Polynomial);
    assert_eq!(
      config.forward_fn::<i32>(TxfmType::DCT4).err(),
      Some(TxError::PolynomialFamily(TxFamily::Precise))
    );
  }

  #[test]
  fn flat_coverage() {
    let config = TxConfig::new(TxFamily::Flat, Dst8Kernel::Rotation);
    for &t in TxfmType::ALL.iter() {
      let supported = !matches!(t, TxfmType::DCT64 | TxfmType::DST32);
      assert_eq!(config.forward_fn::<i32>(t).is_ok(), supported, "{t:?}");
      assert_eq!(config.inverse_fn::<i64>(t).is_ok(), supported, "{t:?}");
    }
    assert_eq!(
      config.inverse_fn::<i32>(TxfmType::DST32).err(),
      Some(TxError::Unsupported {
        txfm_type: TxfmType::DST32,
        family: TxFamily::Flat
      })
    );
  }

  #[test]
  fn reference_and_precise_cover_everything() {
    for &family in &[TxFamily::Reference, TxFamily::Precise] {
      let config = TxConfig::new(family, Dst8Kernel::Rotation);
      for &t in TxfmType::ALL.iter() {
        assert!(config.forward_fn::<i32>(t).is_ok(), "{family:?} {t:?}");
        assert!(config.inverse_fn::<i32>(t).is_ok(), "{family:?} {t:?}");
      }
    }
  }

  #[test]
  fn reference_resolves_codec_kernels() {
    let config = TxConfig::new(TxFamily::Reference, Dst8Kernel::Rotation);
    let input = [17, -3, 250, -128, 0, 77, -19, 5];
    let mut a = [0i32; 8];
    let mut b = [0i32; 8];
    config.forward(TxfmType::DST8, &mut a, &input, 1).unwrap();
    fdst8_flat(&mut b, &input, 1);
    assert_eq!(a, b);

    let config = TxConfig::new(TxFamily::Reference, Dst8Kernel::Polynomial);
    config.forward(TxfmType::DST8, &mut a, &input, 1).unwrap();
    fdst8_poly(&mut b, &input, 1);
    assert_eq!(a, b);

    config.forward(TxfmType::DST4, &mut a, &input, 1).unwrap();
    fdst4(&mut b, &input, 1);
    assert_eq!(&a[..4], &b[..4]);
  }

  #[test]
  fn short_buffers() {
    let config = TxConfig::default();
    let mut output = [0i32; 16];
    assert_eq!(
      config.forward(TxfmType::DCT16, &mut output, &[0; 16], 2),
      Err(TxError::ShortBuffer { needed: 31, actual: 16 })
    );
    assert_eq!(
      config.inverse(TxfmType::DCT16, &mut output, 2, &[0; 16]),
      Err(TxError::ShortBuffer { needed: 31, actual: 16 })
    );
    assert_eq!(
      config.inverse(TxfmType::DCT32, &mut output, 1, &[0; 32]),
      Err(TxError::ShortBuffer { needed: 32, actual: 16 })
    );
  }

  #[test]
  fn checked_roundtrip() {
    let config = TxConfig::new(TxFamily::Precise, Dst8Kernel::Rotation);
    let input: Vec<i64> = (0..64).map(|i| (i * 37 % 101) - 50).collect();
    let mut coeffs = vec![0i64; 64];
    let mut output = vec![0i64; 64];
    for &t in TxfmType::ALL.iter() {
      let n = t.size();
      config.forward(t, &mut coeffs, &input, 1).unwrap();
      config.inverse(t, &mut output, 1, &coeffs).unwrap();
      assert_eq!(&output[..n], &input[..n], "{t:?}");
    }
  }
}
