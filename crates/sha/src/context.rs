//! Runtime-selected digest context.
//!
//! [`ShaContext`] dispatches over the five hashers by [`Algorithm`] value
//! and enforces the accumulate-then-finalize lifecycle: once `finalize`
//! has produced a digest, further calls fail with
//! [`Error::InvalidState`](crate::Error::InvalidState) instead of silently
//! hashing into a new message.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use traits::Digest;

use crate::error::Error;
use crate::{Sha1, Sha224, Sha256, Sha384, Sha512};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The five supported digest algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  Sha1,
  Sha224,
  Sha256,
  Sha384,
  Sha512,
}

impl Algorithm {
  /// All algorithms, in selector order.
  pub const ALL: [Self; 5] = [Self::Sha1, Self::Sha224, Self::Sha256, Self::Sha384, Self::Sha512];

  /// Resolves a numeric selector: `"1"`, `"224"`, `"256"`, `"384"`, or
  /// `"512"`.
  pub fn from_selector(selector: &str) -> Result<Self, Error> {
    match selector {
      "1" => Ok(Self::Sha1),
      "224" => Ok(Self::Sha224),
      "256" => Ok(Self::Sha256),
      "384" => Ok(Self::Sha384),
      "512" => Ok(Self::Sha512),
      _ => Err(Error::UnsupportedAlgorithm),
    }
  }

  /// Display name, e.g. `"SHA-256"`.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Sha1 => "SHA-1",
      Self::Sha224 => "SHA-224",
      Self::Sha256 => "SHA-256",
      Self::Sha384 => "SHA-384",
      Self::Sha512 => "SHA-512",
    }
  }

  /// Digest length in bytes.
  #[must_use]
  pub const fn digest_len(self) -> usize {
    match self {
      Self::Sha1 => Sha1::OUTPUT_SIZE,
      Self::Sha224 => Sha224::OUTPUT_SIZE,
      Self::Sha256 => Sha256::OUTPUT_SIZE,
      Self::Sha384 => Sha384::OUTPUT_SIZE,
      Self::Sha512 => Sha512::OUTPUT_SIZE,
    }
  }
}

impl FromStr for Algorithm {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_selector(s)
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

enum Hasher {
  Sha1(Sha1),
  Sha224(Sha224),
  Sha256(Sha256),
  Sha384(Sha384),
  Sha512(Sha512),
}

impl Hasher {
  fn new(algorithm: Algorithm) -> Self {
    match algorithm {
      Algorithm::Sha1 => Self::Sha1(Sha1::new()),
      Algorithm::Sha224 => Self::Sha224(Sha224::new()),
      Algorithm::Sha256 => Self::Sha256(Sha256::new()),
      Algorithm::Sha384 => Self::Sha384(Sha384::new()),
      Algorithm::Sha512 => Self::Sha512(Sha512::new()),
    }
  }

  fn update(&mut self, data: &[u8]) {
    match self {
      Self::Sha1(h) => h.update(data),
      Self::Sha224(h) => h.update(data),
      Self::Sha256(h) => h.update(data),
      Self::Sha384(h) => h.update(data),
      Self::Sha512(h) => h.update(data),
    }
  }

  fn finalize_hex(&self) -> String {
    match self {
      Self::Sha1(h) => to_hex(&h.finalize()),
      Self::Sha224(h) => to_hex(&h.finalize()),
      Self::Sha256(h) => to_hex(&h.finalize()),
      Self::Sha384(h) => to_hex(&h.finalize()),
      Self::Sha512(h) => to_hex(&h.finalize()),
    }
  }
}

#[allow(clippy::indexing_slicing)] // Nibbles index a 16-entry table
fn to_hex(digest: &[u8]) -> String {
  let mut out = String::with_capacity(digest.len() * 2);
  for &byte in digest {
    out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
  }
  out
}

/// Accumulate-then-finalize digest context over a runtime-chosen
/// [`Algorithm`].
///
/// ```
/// use sha::{Algorithm, ShaContext};
///
/// let mut ctx = ShaContext::new(Algorithm::Sha256);
/// ctx.update(b"abc")?;
/// let hex = ctx.finalize()?;
/// assert!(hex.starts_with("ba7816bf"));
///
/// // The context is consumed by finalize; reuse is an error.
/// assert!(ctx.update(b"more").is_err());
/// # Ok::<(), sha::Error>(())
/// ```
pub struct ShaContext {
  algorithm: Algorithm,
  hasher: Hasher,
  finalized: bool,
}

impl ShaContext {
  #[must_use]
  pub fn new(algorithm: Algorithm) -> Self {
    Self {
      algorithm,
      hasher: Hasher::new(algorithm),
      finalized: false,
    }
  }

  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  /// Feeds more message bytes into the context.
  pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
    if self.finalized {
      return Err(Error::InvalidState);
    }
    self.hasher.update(data);
    Ok(())
  }

  /// Pads, closes the message, and renders the digest as lowercase hex.
  pub fn finalize(&mut self) -> Result<String, Error> {
    if self.finalized {
      return Err(Error::InvalidState);
    }
    self.finalized = true;
    Ok(self.hasher.finalize_hex())
  }
}
