//! SHA-384 (FIPS 180-4): SHA-512 with distinct initial values, truncated
//! to 48 bytes.

use traits::Digest;

use crate::w64::{Engine64, Kind64};

/// Incremental SHA-384 hasher.
#[derive(Clone)]
pub struct Sha384 {
  engine: Engine64,
}

impl Default for Sha384 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine64::new(Kind64::Sha384),
    }
  }
}

impl Sha384 {
  /// One-shot convenience over the [`Digest`] machinery.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 48] {
    <Self as Digest>::digest(data)
  }
}

impl Digest for Sha384 {
  const OUTPUT_SIZE: usize = 48;

  type Output = [u8; 48];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 48];
    self.engine.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset();
  }
}
