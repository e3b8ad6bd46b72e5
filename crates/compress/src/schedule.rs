#![allow(clippy::indexing_slicing)] // Fixed-size window, all indices masked to 16

//! Message schedule expansion, eight words per call.
//!
//! The full schedule W[0..80] is never materialized. A 16-word circular window
//! holds exactly the words the FIPS recurrence can still reach
//! (`W[t-16]..W[t-1]`, mod-16 indexing), and each call expands the next batch
//! of eight. For the first two batches the window still contains the raw block
//! words, so expansion is a plain read-out.

use crate::arith::{add4, small_sigma0, small_sigma1};

/// Words expanded per call (one pipeline stage's worth).
pub const EXPAND_WIDTH: usize = 8;

/// Last valid `round_base` (the tenth and final batch covers W[72..80]).
pub const MAX_ROUND_BASE: usize = 72;

/// Expand schedule words `W[round_base .. round_base+8]`.
///
/// `round_base` must be a multiple of 8 in `0..=72`; anything else is a caller
/// bug (debug-asserted, not an error path).
///
/// For `round_base >= 16` each word is computed with the FIPS 180-4 recurrence
/// `W[t] = sigma1(W[t-2]) + W[t-7] + sigma0(W[t-15]) + W[t-16]` and written
/// back into the window immediately, so later words of the batch observe
/// earlier ones (w2 reads w0, w3 reads w1, ..., w7 reads w5 and w0). That
/// read-after-write order is load-bearing: the batch is a sequential cascade,
/// not eight independent computations.
#[must_use]
pub fn expand8(window: &mut [u64; 16], round_base: usize) -> [u64; EXPAND_WIDTH] {
  debug_assert!(round_base % EXPAND_WIDTH == 0 && round_base <= MAX_ROUND_BASE);

  let mut out = [0u64; EXPAND_WIDTH];

  if round_base < 16 {
    // The window still holds the raw block words in this range.
    for (r, w) in out.iter_mut().enumerate() {
      *w = window[(round_base + r) & 15];
    }
    return out;
  }

  for (r, w) in out.iter_mut().enumerate() {
    let t = round_base + r;
    let word = add4(
      small_sigma1(window[(t + 14) & 15]), // W[t-2]
      window[(t + 9) & 15],                // W[t-7]
      small_sigma0(window[(t + 1) & 15]),  // W[t-15]
      window[t & 15],                      // W[t-16]
    );
    window[t & 15] = word;
    *w = word;
  }
  out
}
