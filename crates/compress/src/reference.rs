#![allow(clippy::indexing_slicing)] // Fixed 80-entry constant table, bounded base

//! Non-pipelined SHA-384 block compression: the correctness oracle.
//!
//! Runs the same ten expand/round batches the pipeline spreads across stages,
//! but back-to-back over a single block. Used by the `pipeline` crate's tests
//! and fuzz target to check that pipelining changes nothing.

use crate::arith::add2;
use crate::rounds::{ROUNDS_PER_BANK, apply8};
use crate::schedule::expand8;
use crate::{Block, H0, Hash384, K, State};

/// Batches per block (80 rounds, 8 per batch).
pub const BATCHES: usize = 10;

/// Compress one padded block into `state`, including the Davies-Meyer
/// feed-forward.
pub fn compress(state: &mut State, block: &Block) {
  let mut window = *block;
  let mut work = *state;

  for batch in 0..BATCHES {
    let base = batch * ROUNDS_PER_BANK;
    let words = expand8(&mut window, base);
    let mut kw = [0u64; ROUNDS_PER_BANK];
    for (r, kwr) in kw.iter_mut().enumerate() {
      *kwr = add2(K[base + r], words[r]);
    }
    apply8(&mut work, &kw);
  }

  for (s, w) in state.iter_mut().zip(work) {
    *s = add2(*s, w);
  }
}

/// Digest a padded multi-block message from the SHA-384 initial value.
///
/// Returns `None` for an empty block list (even the empty message pads to one
/// block, so an empty list is a caller mistake, not a message).
#[must_use]
pub fn digest_blocks(blocks: &[Block]) -> Option<Hash384> {
  if blocks.is_empty() {
    return None;
  }
  let mut state = H0;
  for block in blocks {
    compress(&mut state, block);
  }
  let [h0, h1, h2, h3, h4, h5, _, _] = state;
  Some([h0, h1, h2, h3, h4, h5])
}
