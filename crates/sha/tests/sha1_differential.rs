//! Differential testing of SHA-1 against the RustCrypto implementation.

use proptest::prelude::*;
use sha::Sha1;
use traits::Digest as _;

fn sha1_ref(data: &[u8]) -> [u8; 20] {
  use sha1::Digest as _;
  let out = sha1::Sha1::digest(data);
  let mut bytes = [0u8; 20];
  bytes.copy_from_slice(&out);
  bytes
}

proptest! {
  #[test]
  fn sha1_one_shot_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha1::digest(&data), sha1_ref(&data));
  }

  #[test]
  fn sha1_streaming_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = sha1_ref(&data);

    let mut h = Sha1::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }
}

#[test]
fn sha1_padding_boundaries_match_reference() {
  // 55 fits the length field; 56 forces the extra block; 64 is one block.
  for len in [0usize, 1, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129] {
    let data = vec![0xa5u8; len];
    assert_eq!(Sha1::digest(&data), sha1_ref(&data), "len={len}");
  }
}
