//! Word-64 compression engine: SHA-384 and SHA-512.
//!
//! Structurally the SHA-256 round logic over 64-bit words: 128-byte blocks,
//! 80 rounds, and a 128-bit message-length counter kept as two u64 halves
//! with explicit carry (there is no fixed-width 128-bit field in the wire
//! format to borrow, only two big-endian words).
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use crate::util::rotr64;

pub(crate) const BLOCK_LEN: usize = 128;

// The length field is a 16-byte big-endian bit count, high word first.
const PAD_LIMIT: usize = BLOCK_LEN - 16;

// SHA-384/512 round constants (FIPS 180-4 §4.2.3).
const K: [u64; 80] = [
  0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
  0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
  0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
  0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
  0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
  0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
  0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
  0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
  0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
  0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
  0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
  0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
  0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
  0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
  0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
  0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
  0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
  0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
  0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
  0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

// Initial hash values (FIPS 180-4 §5.3).
const H0_SHA384: [u64; 8] = [
  0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
  0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

const H0_SHA512: [u64; 8] = [
  0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
  0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ (x >> 6)
}

/// 128-bit byte counter: two u64 halves, carry propagated on add.
#[derive(Clone, Copy, Default)]
struct Len128 {
  hi: u64,
  lo: u64,
}

impl Len128 {
  #[inline]
  fn add(&mut self, bytes: u64) {
    let (lo, carry) = self.lo.overflowing_add(bytes);
    self.lo = lo;
    if carry {
      self.hi = self.hi.wrapping_add(1);
    }
  }

  /// Bit count as (high, low) big-endian words.
  #[inline]
  fn to_bits(self) -> (u64, u64) {
    ((self.hi << 3) | (self.lo >> 61), self.lo << 3)
  }
}

/// Variant tag; fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind64 {
  Sha384,
  Sha512,
}

/// Shared block accumulator for the word-64 family.
///
/// SHA-384 truncates the output to six state words; truncation is the
/// caller's concern via `finalize_into`.
#[derive(Clone)]
pub(crate) struct Engine64 {
  kind: Kind64,
  state: [u64; 8],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: Len128,
}

impl Engine64 {
  pub(crate) fn new(kind: Kind64) -> Self {
    let state = match kind {
      Kind64::Sha384 => H0_SHA384,
      Kind64::Sha512 => H0_SHA512,
    };
    Self {
      kind,
      state,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: Len128::default(),
    }
  }

  pub(crate) fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    // Top up a partially filled block first.
    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        compress(&mut self.state, &block);
        self.bytes_hashed.add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      compress(&mut self.state, block);
    }
    self.bytes_hashed.add((blocks.len() * BLOCK_LEN) as u64);

    if !rest.is_empty() {
      self.block[..rest.len()].copy_from_slice(rest);
      self.block_len = rest.len();
    }
  }

  /// Pad, compress the final block(s), and write the first `out.len()`
  /// bytes of the resulting state, big-endian.
  ///
  /// Non-mutating: operates on copies, so the engine can keep accumulating.
  pub(crate) fn finalize_into(&self, out: &mut [u8]) {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let mut total_len = self.bytes_hashed;
    total_len.add(block_len as u64);

    block[block_len] = 0x80;
    block_len += 1;

    // No room left for the length field: close this block and pad a fresh one.
    if block_len > PAD_LIMIT {
      block[block_len..].fill(0);
      compress(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..PAD_LIMIT].fill(0);

    let (bits_hi, bits_lo) = total_len.to_bits();
    block[PAD_LIMIT..PAD_LIMIT + 8].copy_from_slice(&bits_hi.to_be_bytes());
    block[PAD_LIMIT + 8..].copy_from_slice(&bits_lo.to_be_bytes());
    compress(&mut state, &block);

    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
      chunk.copy_from_slice(&word.to_be_bytes());
    }
  }

  #[inline]
  pub(crate) fn reset(&mut self) {
    *self = Self::new(self.kind);
  }
}

/// SHA-384/512 round routine (FIPS 180-4 §6.4.2): 80 rounds over eight
/// 64-bit working variables.
fn compress(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u64; 80];
  let (words, _) = block.as_chunks::<8>();
  for (t, chunk) in words.iter().enumerate() {
    w[t] = u64::from_be_bytes(*chunk);
  }
  for t in 16..80 {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }

  let mut a = state[0];
  let mut b = state[1];
  let mut c = state[2];
  let mut d = state[3];
  let mut e = state[4];
  let mut f = state[5];
  let mut g = state[6];
  let mut h = state[7];

  for t in 0..80 {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(K[t])
      .wrapping_add(w[t]);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
  state[4] = state[4].wrapping_add(e);
  state[5] = state[5].wrapping_add(f);
  state[6] = state[6].wrapping_add(g);
  state[7] = state[7].wrapping_add(h);
}
