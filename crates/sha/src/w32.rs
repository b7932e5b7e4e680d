//! Word-32 compression engine: SHA-1, SHA-224, and SHA-256.
//!
//! 64-byte blocks interpreted as 16 big-endian 32-bit words, a 64-bit byte
//! counter, and one of two round routines (80-round SHA-1, 64-round SHA-2)
//! selected by the variant tag at construction.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use crate::util::{rotl32, rotr32};

pub(crate) const BLOCK_LEN: usize = 64;

// The length field is an 8-byte big-endian bit count; padding must leave
// room for it in the last block.
const PAD_LIMIT: usize = BLOCK_LEN - 8;

// SHA-1 round constants, one per 20-round quartile (FIPS 180-4 §4.2.1).
const K1: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

// SHA-224/256 round constants (FIPS 180-4 §4.2.2).
const K2: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

// Initial hash values (FIPS 180-4 §5.3).
const H0_SHA1: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const H0_SHA224: [u32; 8] = [
  0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

const H0_SHA256: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Variant tag; fixed at construction, never re-dispatched per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind32 {
  Sha1,
  Sha224,
  Sha256,
}

/// Shared block accumulator for the word-32 family.
///
/// SHA-1 uses only the first five state words; SHA-224 truncates the output
/// to seven. Truncation is the caller's concern via `finalize_into`.
#[derive(Clone)]
pub(crate) struct Engine32 {
  kind: Kind32,
  state: [u32; 8],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Engine32 {
  pub(crate) fn new(kind: Kind32) -> Self {
    let mut state = [0u32; 8];
    match kind {
      Kind32::Sha1 => state[..5].copy_from_slice(&H0_SHA1),
      Kind32::Sha224 => state = H0_SHA224,
      Kind32::Sha256 => state = H0_SHA256,
    }
    Self {
      kind,
      state,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
    }
  }

  #[inline]
  fn compress(kind: Kind32, state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    match kind {
      Kind32::Sha1 => compress_sha1(state, block),
      Kind32::Sha224 | Kind32::Sha256 => compress_sha2(state, block),
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
        Self::compress(self.kind, &mut self.state, &block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      Self::compress(self.kind, &mut self.state, block);
    }
    self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);

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
    let total_len = self.bytes_hashed.wrapping_add(block_len as u64);

    block[block_len] = 0x80;
    block_len += 1;

    // No room left for the length field: close this block and pad a fresh one.
    if block_len > PAD_LIMIT {
      block[block_len..].fill(0);
      Self::compress(self.kind, &mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..PAD_LIMIT].fill(0);

    let bit_len = total_len.wrapping_mul(8);
    block[PAD_LIMIT..].copy_from_slice(&bit_len.to_be_bytes());
    Self::compress(self.kind, &mut state, &block);

    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
      chunk.copy_from_slice(&word.to_be_bytes());
    }
  }

  #[inline]
  pub(crate) fn reset(&mut self) {
    *self = Self::new(self.kind);
  }
}

/// SHA-1 round routine (FIPS 180-4 §6.1.2): 80 rounds, round function and
/// constant selected by 20-round quartile.
fn compress_sha1(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u32; 80];
  let (words, _) = block.as_chunks::<4>();
  for (t, chunk) in words.iter().enumerate() {
    w[t] = u32::from_be_bytes(*chunk);
  }
  for t in 16..80 {
    w[t] = rotl32(w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16], 1);
  }

  let mut a = state[0];
  let mut b = state[1];
  let mut c = state[2];
  let mut d = state[3];
  let mut e = state[4];

  for t in 0..80 {
    let f = match t / 20 {
      0 => ch(b, c, d),
      2 => maj(b, c, d),
      _ => parity(b, c, d),
    };
    let temp = rotl32(a, 5)
      .wrapping_add(f)
      .wrapping_add(e)
      .wrapping_add(K1[t / 20])
      .wrapping_add(w[t]);
    e = d;
    d = c;
    c = rotl32(b, 30);
    b = a;
    a = temp;
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
  state[4] = state[4].wrapping_add(e);
}

/// SHA-224/256 round routine (FIPS 180-4 §6.2.2): 64 rounds over eight
/// working variables.
fn compress_sha2(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u32; 64];
  let (words, _) = block.as_chunks::<4>();
  for (t, chunk) in words.iter().enumerate() {
    w[t] = u32::from_be_bytes(*chunk);
  }
  for t in 16..64 {
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

  for t in 0..64 {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(K2[t])
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
