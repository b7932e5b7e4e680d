//! Stream drivers: hash an [`io::Read`] source or a file in fixed-size
//! chunks without loading it into memory.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::string::String;
use std::vec;

use crate::context::{Algorithm, ShaContext};
use crate::error::Error;

pub use traits::io::DigestReader;

const CHUNK_LEN: usize = 64 * 1024;

/// Errors surfaced while hashing a stream.
#[derive(Debug)]
pub enum StreamError {
  /// The underlying reader failed.
  Read(io::Error),
  /// The digest context rejected the operation.
  Hash(Error),
}

impl core::fmt::Display for StreamError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Read(err) => write!(f, "read failed: {err}"),
      Self::Hash(err) => write!(f, "{err}"),
    }
  }
}

impl core::error::Error for StreamError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Read(err) => Some(err),
      Self::Hash(err) => Some(err),
    }
  }
}

impl From<io::Error> for StreamError {
  fn from(err: io::Error) -> Self {
    Self::Read(err)
  }
}

impl From<Error> for StreamError {
  fn from(err: Error) -> Self {
    Self::Hash(err)
  }
}

// Readers may return fewer bytes than asked for; keep reading until the
// buffer is full or the stream ends.
fn fill_buf<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
  let mut filled = 0;
  while filled < buf.len() {
    match reader.read(buf.get_mut(filled..).unwrap_or(&mut [])) {
      Ok(0) => break,
      Ok(n) => filled += n,
      Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
      Err(err) => return Err(err),
    }
  }
  Ok(filled)
}

/// Hashes everything `reader` yields and renders the digest as lowercase
/// hex.
///
/// ```no_run
/// use sha::Algorithm;
/// use sha::io::digest_stream;
///
/// let hex = digest_stream(Algorithm::Sha256, std::io::stdin().lock())?;
/// println!("{hex}");
/// # Ok::<(), sha::io::StreamError>(())
/// ```
pub fn digest_stream<R: Read>(algorithm: Algorithm, mut reader: R) -> Result<String, StreamError> {
  let mut ctx = ShaContext::new(algorithm);
  let mut buf = vec![0u8; CHUNK_LEN];

  loop {
    let filled = fill_buf(&mut reader, &mut buf)?;
    ctx.update(buf.get(..filled).unwrap_or(&[]))?;
    if filled < buf.len() {
      break;
    }
  }

  Ok(ctx.finalize()?)
}

/// Opens `path` and hashes its contents via [`digest_stream`].
pub fn digest_file<P: AsRef<Path>>(algorithm: Algorithm, path: P) -> Result<String, StreamError> {
  let file = File::open(path)?;
  digest_stream(algorithm, file)
}
