//! SHA-512 (FIPS 180-4): 64-byte digest over 128-byte blocks.

use traits::Digest;

use crate::w64::{Engine64, Kind64};

/// Incremental SHA-512 hasher.
///
/// ```
/// use sha::{Digest, Sha512};
///
/// let digest = Sha512::digest(b"abc");
/// assert_eq!(digest[..4], [0xdd, 0xaf, 0x35, 0xa1]);
/// ```
#[derive(Clone)]
pub struct Sha512 {
  engine: Engine64,
}

impl Default for Sha512 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine64::new(Kind64::Sha512),
    }
  }
}

impl Sha512 {
  /// One-shot convenience over the [`Digest`] machinery.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 64] {
    <Self as Digest>::digest(data)
  }
}

impl Digest for Sha512 {
  const OUTPUT_SIZE: usize = 64;

  type Output = [u8; 64];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 64];
    self.engine.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn hex(digest: &[u8]) -> std::string::String {
    digest.iter().map(|b| std::format!("{b:02x}")).collect()
  }

  #[test]
  fn abc() {
    assert_eq!(
      hex(&Sha512::digest(b"abc")),
      "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
       2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
  }

  #[test]
  fn padding_spills_into_extra_block() {
    // 112 bytes leaves no room for the 16-byte length field.
    let data = [0x61u8; 112];
    let mut hasher = Sha512::new();
    hasher.update(&data[..60]);
    hasher.update(&data[60..]);
    assert_eq!(hasher.finalize(), Sha512::digest(&data));
  }
}
