//! FIPS 180-4 padding into 1024-bit blocks.
//!
//! The engine itself only accepts pre-padded blocks; this helper builds them
//! from arbitrary byte messages. It is a block builder, not a streaming API:
//! the whole message must be in memory.

use alloc::vec::Vec;

use crate::Block;

/// Block size in bytes (1024 bits).
pub const BLOCK_BYTES: usize = 128;

// Padding fills to this offset within the final block, leaving room for the
// 128-bit big-endian message bit length.
const LENGTH_OFFSET: usize = 112;

/// Pad `msg` per FIPS 180-4 §5.1.2 and split it into big-endian word blocks.
///
/// Appends the `0x80` terminator, zero-fills to 112 mod 128, then the message
/// bit length as a 128-bit big-endian integer. Always yields at least one
/// block; a message of exactly 112 bytes spills into a second.
#[must_use]
pub fn pad_message(msg: &[u8]) -> Vec<Block> {
  let bit_len = (msg.len() as u128) * 8;

  let mut bytes = Vec::with_capacity(msg.len() + 2 * BLOCK_BYTES);
  bytes.extend_from_slice(msg);
  bytes.push(0x80);
  while bytes.len() % BLOCK_BYTES != LENGTH_OFFSET {
    bytes.push(0);
  }
  bytes.extend_from_slice(&bit_len.to_be_bytes());

  bytes
    .chunks_exact(BLOCK_BYTES)
    .map(|chunk| {
      let mut block: Block = [0; 16];
      for (word, raw) in block.iter_mut().zip(chunk.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(raw);
        *word = u64::from_be_bytes(buf);
      }
      block
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_message_pads_to_one_block() {
    let blocks = pad_message(b"");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x8000_0000_0000_0000);
    assert_eq!(blocks[0][15], 0);
  }

  #[test]
  fn abc_pads_to_fips_example_block() {
    let blocks = pad_message(b"abc");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x6162_6380_0000_0000);
    assert_eq!(blocks[0][15], 24); // 3 bytes = 24 bits
  }

  #[test]
  fn block_count_boundaries() {
    // Up to 111 bytes fits one block; 112 spills (no room for the length).
    assert_eq!(pad_message(&[0u8; 111]).len(), 1);
    assert_eq!(pad_message(&[0u8; 112]).len(), 2);
    assert_eq!(pad_message(&[0u8; 127]).len(), 2);
    assert_eq!(pad_message(&[0u8; 128]).len(), 2);
    assert_eq!(pad_message(&[0u8; 239]).len(), 2);
    assert_eq!(pad_message(&[0u8; 240]).len(), 3);
  }

  #[test]
  fn bit_length_lands_in_last_words() {
    let blocks = pad_message(&[0xabu8; 200]);
    let last = blocks.last().unwrap();
    assert_eq!(last[14], 0); // high half of the 128-bit length
    assert_eq!(last[15], 200 * 8);
  }
}
