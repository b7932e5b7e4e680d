//! Differential fuzzing against reference implementations.
//!
//! Compares our digests against the RustCrypto crates to catch any
//! discrepancies, padding bugs included.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sha::Digest as _;

fuzz_target!(|data: &[u8]| {
  test_sha1_differential(data);
  test_sha256_differential(data);
  test_sha512_differential(data);
});

fn test_sha1_differential(data: &[u8]) {
  let ours = sha::Sha1::digest(data);
  let reference = {
    use sha1::Digest as _;
    sha1::Sha1::digest(data)
  };

  assert_eq!(ours[..], reference[..], "SHA-1 differential mismatch, len={}", data.len());

  // Self-consistency check: streaming should match one-shot
  let mut hasher = sha::Sha1::new();
  hasher.update(data);
  assert_eq!(hasher.finalize(), ours, "SHA-1 self-consistency mismatch");
}

fn test_sha256_differential(data: &[u8]) {
  let ours = sha::Sha256::digest(data);
  let reference = {
    use sha2::Digest as _;
    sha2::Sha256::digest(data)
  };

  assert_eq!(ours[..], reference[..], "SHA-256 differential mismatch, len={}", data.len());
}

fn test_sha512_differential(data: &[u8]) {
  let ours = sha::Sha512::digest(data);
  let reference = {
    use sha2::Digest as _;
    sha2::Sha512::digest(data)
  };

  assert_eq!(ours[..], reference[..], "SHA-512 differential mismatch, len={}", data.len());
}
