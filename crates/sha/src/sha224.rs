//! SHA-224 (FIPS 180-4): SHA-256 with distinct initial values, truncated
//! to 28 bytes.

use traits::Digest;

use crate::w32::{Engine32, Kind32};

/// Incremental SHA-224 hasher.
#[derive(Clone)]
pub struct Sha224 {
  engine: Engine32,
}

impl Default for Sha224 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine32::new(Kind32::Sha224),
    }
  }
}

impl Sha224 {
  /// One-shot convenience over the [`Digest`] machinery.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 28] {
    <Self as Digest>::digest(data)
  }
}

impl Digest for Sha224 {
  const OUTPUT_SIZE: usize = 28;

  type Output = [u8; 28];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 28];
    self.engine.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset();
  }
}
