//! SHA-1 (FIPS 180-4): 20-byte digest over 64-byte blocks.
//!
//! SHA-1 is broken for collision resistance; it is provided for
//! compatibility with formats that still require it, not for new designs.

use traits::Digest;

use crate::w32::{Engine32, Kind32};

/// Incremental SHA-1 hasher.
#[derive(Clone)]
pub struct Sha1 {
  engine: Engine32,
}

impl Default for Sha1 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine32::new(Kind32::Sha1),
    }
  }
}

impl Sha1 {
  /// One-shot convenience over the [`Digest`] machinery.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 20] {
    <Self as Digest>::digest(data)
  }
}

impl Digest for Sha1 {
  const OUTPUT_SIZE: usize = 20;

  type Output = [u8; 20];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 20];
    self.engine.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset();
  }
}
