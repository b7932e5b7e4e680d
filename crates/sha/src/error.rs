use core::fmt;

/// Errors surfaced by the digest context API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// `update` or `finalize` was called after the context was finalized.
  InvalidState,
  /// The algorithm selector named no known digest.
  UnsupportedAlgorithm,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidState => write!(f, "digest context already finalized"),
      Self::UnsupportedAlgorithm => write!(f, "unsupported algorithm selector"),
    }
  }
}

impl core::error::Error for Error {}
