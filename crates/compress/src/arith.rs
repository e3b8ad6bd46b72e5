//! Modular 64-bit arithmetic and the SHA-2 bitwise primitives.
//!
//! Multi-operand sums (3-5 operands) go through carry-save reduction: a 3:2
//! compressor folds three operands into a sum/carry pair without propagating
//! carries, and one ordinary carry-propagate addition finishes the job. In the
//! source hardware this bounds the per-tick critical path; in software the
//! reductions are exact modular sums and interchangeable with naive chained
//! addition (tested below).

/// Two-operand addition mod 2^64.
#[inline(always)]
#[must_use]
pub const fn add2(a: u64, b: u64) -> u64 {
  a.wrapping_add(b)
}

/// 3:2 carry-save compressor.
///
/// Returns `(sum, carry)` with `sum + carry == a + b + c (mod 2^64)`: the sum
/// lane is the bitwise XOR, the carry lane the majority shifted left one.
#[inline(always)]
#[must_use]
pub const fn csa(a: u64, b: u64, c: u64) -> (u64, u64) {
  (a ^ b ^ c, ((a & b) | (b & c) | (a & c)) << 1)
}

/// Three-operand addition mod 2^64 via one 3:2 compression.
#[inline(always)]
#[must_use]
pub const fn add3(a: u64, b: u64, c: u64) -> u64 {
  let (sum, carry) = csa(a, b, c);
  sum.wrapping_add(carry)
}

/// Four-operand addition mod 2^64 via two chained 3:2 compressions.
#[inline(always)]
#[must_use]
pub const fn add4(a: u64, b: u64, c: u64, d: u64) -> u64 {
  let (s0, c0) = csa(a, b, c);
  let (s1, c1) = csa(s0, c0, d);
  s1.wrapping_add(c1)
}

/// Five-operand addition mod 2^64 via three chained 3:2 compressions.
#[inline(always)]
#[must_use]
pub const fn add5(a: u64, b: u64, c: u64, d: u64, e: u64) -> u64 {
  let (s0, c0) = csa(a, b, c);
  let (s1, c1) = csa(s0, d, e);
  let (s2, c2) = csa(s1, c1, c0);
  s2.wrapping_add(c2)
}

/// Rotate right.
#[inline(always)]
#[must_use]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

/// Logical shift right.
#[inline(always)]
#[must_use]
pub const fn shr64(x: u64, n: u32) -> u64 {
  x >> n
}

/// Choose: bits of `y` where `x` is set, bits of `z` where it is not.
#[inline(always)]
#[must_use]
pub const fn ch(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (!x & z)
}

/// Majority of three.
#[inline(always)]
#[must_use]
pub const fn maj(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0 (FIPS 180-4 §4.1.3): rotations 28, 34, 39.
#[inline(always)]
#[must_use]
pub const fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

/// Σ1: rotations 14, 18, 41.
#[inline(always)]
#[must_use]
pub const fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

/// σ0: rotations 1, 8, shift 7.
#[inline(always)]
#[must_use]
pub const fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ shr64(x, 7)
}

/// σ1: rotations 19, 61, shift 6.
#[inline(always)]
#[must_use]
pub const fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ shr64(x, 6)
}
