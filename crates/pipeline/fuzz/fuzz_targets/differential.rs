#![no_main]

use compress::pad::pad_message;
use compress::reference;
use libfuzzer_sys::fuzz_target;
use pipeline::hash_message;

fuzz_target!(|input: &[u8]| {
  let blocks = pad_message(input);

  // Pipelined engine vs the non-pipelined reference.
  let ours = hash_message(&blocks);
  assert_eq!(ours, reference::digest_blocks(&blocks));

  // Both vs the RustCrypto oracle.
  use sha2::Digest as _;
  let ref_out = sha2::Sha384::digest(input);
  let mut expected = [0u64; 6];
  for (word, chunk) in expected.iter_mut().zip(ref_out.chunks_exact(8)) {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(chunk);
    *word = u64::from_be_bytes(buf);
  }
  assert_eq!(ours, Some(expected));
});
