#[inline(always)]
pub(crate) const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

#[inline(always)]
pub(crate) const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
pub(crate) const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}
