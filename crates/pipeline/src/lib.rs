//! Fully pipelined SHA-384 compression engine.
//!
//! A software rendering of a 10-stage systolic hardware pipeline: each stage
//! performs 8 of the 80 compression rounds, so a block admitted on one tick
//! retires with its digest exactly 10 ticks later, and a full pipeline retires
//! one block per tick. Blocks of *different* messages interleave freely;
//! blocks of *one* message are serialized through continuation digests.
//!
//! # Quick start
//!
//! ```
//! use compress::pad::pad_message;
//! use pipeline::hash_message;
//!
//! let blocks = pad_message(b"abc");
//! let hash = hash_message(&blocks).unwrap();
//! assert_eq!(hash[0], 0xcb00_753f_45a3_5e8b);
//! ```
//!
//! # Tick-level control
//!
//! [`Engine::step`] advances the whole pipeline by one tick, optionally
//! admitting one [`BlockRequest`] and possibly yielding one [`Retirement`]:
//!
//! ```
//! use compress::pad::pad_message;
//! use pipeline::{BlockRequest, Chaining, Engine, MessageId};
//!
//! let block = pad_message(b"abc")[0];
//! let mut engine = Engine::new();
//! engine
//!   .step(Some(BlockRequest {
//!     block,
//!     message: MessageId(1),
//!     chaining: Chaining::Fresh,
//!     last: true,
//!   }))
//!   .unwrap();
//!
//! // Nine idle ticks later the block retires.
//! let retired = (0..9)
//!   .find_map(|_| engine.step(None).unwrap().retired)
//!   .unwrap();
//! assert_eq!(retired.message, MessageId(1));
//! assert!(retired.hash.is_some());
//! ```
//!
//! For workloads of many independent messages, [`ReplicatedEngine`] steps N
//! share-nothing lanes in lockstep.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod engine;
mod error;
mod replicate;

pub use compress::{Block, H0, Hash384, K, State};
pub use engine::{BlockRequest, Chaining, DEPTH, Engine, MessageId, Retirement, TickOutput, hash_message};
pub use error::AdmissionError;
pub use replicate::ReplicatedEngine;
