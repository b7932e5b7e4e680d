//! Fuzz target for the streaming digest API.
//!
//! Tests that arbitrary sequences of update calls produce the same digest
//! as one-shot hashing, for both block-size families.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sha::{Digest, Sha256, Sha512};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  test_streaming::<Sha256>(&input.data, &input.chunk_sizes);
  test_streaming::<Sha512>(&input.data, &input.chunk_sizes);
});

fn test_streaming<D: Digest>(data: &[u8], chunk_sizes: &[usize]) {
  let expected = D::digest(data);

  let mut hasher = D::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(
    hasher.finalize(),
    expected,
    "streaming mismatch, len={}",
    data.len()
  );
}
