//! SHA-384 block compression primitives.
//!
//! This crate is the stateless half of the engine: everything here is a pure
//! function over fixed-size word arrays. The stateful systolic pipeline lives
//! in the `pipeline` crate and is built entirely from these pieces.
//!
//! # Modules
//!
//! - [`consts`] - FIPS 180-4 round constants and the SHA-384 initial digest.
//! - [`arith`] - Modular 64-bit addition (carry-save for 3-5 operands) and the
//!   SHA-2 bitwise primitives.
//! - [`schedule`] - Message schedule expansion, 8 words per call from a
//!   16-word circular window.
//! - [`rounds`] - The round bank: 8 sequential compression rounds per call.
//! - [`reference`] - Non-pipelined block compressor, the correctness oracle.
//! - [`pad`] - FIPS 180-4 padding into 1024-bit blocks (`alloc` only).
//!
//! All input blocks are big-endian 64-bit words; padding and byte-order
//! conversion are the caller's responsibility (or [`pad::pad_message`]'s).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arith;
pub mod consts;
#[cfg(feature = "alloc")]
pub mod pad;
pub mod reference;
pub mod rounds;
pub mod schedule;

pub use consts::{H0, K};

/// A padded 1024-bit message block: sixteen big-endian 64-bit words.
pub type Block = [u64; 16];

/// Eight 64-bit words: a working state (a..h) or a running digest.
pub type State = [u64; 8];

/// A completed 384-bit digest: the first six words of the final state.
pub type Hash384 = [u64; 6];
