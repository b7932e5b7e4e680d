//! SHA-256 (FIPS 180-4): 32-byte digest over 64-byte blocks.

use traits::Digest;

use crate::w32::{Engine32, Kind32};

/// Incremental SHA-256 hasher.
///
/// ```
/// use sha::{Digest, Sha256};
///
/// let mut hasher = Sha256::new();
/// hasher.update(b"abc");
/// let digest = hasher.finalize();
/// assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
#[derive(Clone)]
pub struct Sha256 {
  engine: Engine32,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine32::new(Kind32::Sha256),
    }
  }
}

impl Sha256 {
  /// One-shot convenience over the [`Digest`] machinery.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 32] {
    <Self as Digest>::digest(data)
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = 32;

  type Output = [u8; 32];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 32];
    self.engine.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset();
  }
}
