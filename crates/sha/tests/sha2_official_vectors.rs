use sha::{Sha224, Sha256, Sha384, Sha512};

const ONE_BLOCK: &[u8] = b"abc";
const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

fn run_fixed_vectors<const OUT: usize>(
  vectors: &[(&[u8], &str)],
  name: &str,
  mut digest: impl FnMut(&[u8]) -> [u8; OUT],
) {
  for (i, (input, expected)) in vectors.iter().enumerate() {
    let actual = digest(input);
    assert_eq!(
      hex::encode(actual),
      *expected,
      "{name} vector mismatch at case {i} (len={})",
      input.len()
    );
  }
}

#[test]
fn sha224_official_vectors() {
  run_fixed_vectors(
    &[
      (b"".as_slice(), "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"),
      (ONE_BLOCK, "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
      (TWO_BLOCK, "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"),
    ],
    "sha224",
    Sha224::digest,
  );
}

#[test]
fn sha256_official_vectors() {
  run_fixed_vectors(
    &[
      (
        b"".as_slice(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
      ),
      (
        ONE_BLOCK,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
      ),
      (
        TWO_BLOCK,
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
      ),
    ],
    "sha256",
    Sha256::digest,
  );
}

#[test]
fn sha384_official_vectors() {
  run_fixed_vectors(
    &[
      (
        b"".as_slice(),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
      ),
      (
        ONE_BLOCK,
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
      ),
      (
        TWO_BLOCK,
        "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b",
      ),
    ],
    "sha384",
    Sha384::digest,
  );
}

#[test]
fn sha512_official_vectors() {
  run_fixed_vectors(
    &[
      (
        b"".as_slice(),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
      ),
      (
        ONE_BLOCK,
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
      ),
      (
        TWO_BLOCK,
        "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
      ),
    ],
    "sha512",
    Sha512::digest,
  );
}

#[test]
fn sha2_million_a() {
  let data = vec![b'a'; 1_000_000];
  assert_eq!(
    hex::encode(Sha224::digest(&data)),
    "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"
  );
  assert_eq!(
    hex::encode(Sha256::digest(&data)),
    "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
  );
  assert_eq!(
    hex::encode(Sha384::digest(&data)),
    "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b\
     07b8b3dc38ecc4ebae97ddd87f3d8985"
  );
  assert_eq!(
    hex::encode(Sha512::digest(&data)),
    "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
     de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
  );
}
