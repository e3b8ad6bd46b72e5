#![allow(clippy::indexing_slicing)] // Fixed-depth slot array, bounded constant table

//! The 10-stage systolic pipeline.
//!
//! Ten [`StageSlot`]s advance in lockstep, one position per tick. Stage `i`
//! performs rounds `8i .. 8i+8`: it expands the next 8 schedule words from the
//! slot's circular window, pre-sums them with the round constants, and runs the
//! round bank. There is no higher-level state machine - each position is a pure
//! function of the previous tick's upstream slot, and an invalid upstream slot
//! simply propagates a bubble.

use compress::arith::add2;
use compress::rounds::{ROUNDS_PER_BANK, apply8};
use compress::schedule::expand8;
use compress::{Block, H0, Hash384, K, State};

use crate::error::AdmissionError;

/// Pipeline depth: 80 rounds at 8 per stage.
pub const DEPTH: usize = 10;

/// Opaque caller-chosen message tag.
///
/// Every block of one message carries the same id; ids of concurrently
/// in-flight messages must be distinct. Retirements echo the id so interleaved
/// callers can associate outputs, and the admission guard uses it to reject
/// same-message double admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);

/// How an admitted block obtains its digest carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chaining {
  /// First block of a message: start from the SHA-384 initial value.
  Fresh,
  /// Later block: resume from the previous block's continuation digest.
  Continue(State),
}

/// One block admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRequest {
  /// The padded 1024-bit block.
  pub block: Block,
  /// The message this block belongs to.
  pub message: MessageId,
  /// Digest carry source.
  pub chaining: Chaining,
  /// Marks the message's final block; its retirement exposes the 384-bit hash.
  pub last: bool,
}

/// A block leaving the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retirement {
  /// The message the retiring block belongs to.
  pub message: MessageId,
  /// Davies-Meyer feed-forward of carry and working state. Always emitted;
  /// feed it back via [`Chaining::Continue`] for the message's next block.
  pub continuation: State,
  /// The completed 384-bit digest, present only for a final block.
  pub hash: Option<Hash384>,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutput {
  /// The block that retired this tick, if any.
  pub retired: Option<Retirement>,
}

/// One pipeline position. `valid: false` is a bubble.
#[derive(Debug, Clone, Copy)]
struct StageSlot {
  valid: bool,
  last: bool,
  message: MessageId,
  /// Running per-message digest; immutable during traversal.
  carry: State,
  /// Live working variables a..h.
  work: State,
  /// Circular 16-word schedule window.
  window: Block,
}

impl StageSlot {
  const EMPTY: Self = Self {
    valid: false,
    last: false,
    message: MessageId(0),
    carry: [0; 8],
    work: [0; 8],
    window: [0; 16],
  };

  /// Build the pre-stage-0 slot for an admitted block.
  fn admit(request: BlockRequest) -> Self {
    let carry = match request.chaining {
      Chaining::Fresh => H0,
      Chaining::Continue(digest) => digest,
    };
    Self {
      valid: true,
      last: request.last,
      message: request.message,
      carry,
      work: carry,
      window: request.block,
    }
  }
}

/// The pipelined compression engine.
///
/// See the [crate docs](crate) for the tick protocol. Cloning an engine clones
/// its in-flight state; two engines fed identical inputs stay identical.
#[derive(Debug, Clone)]
pub struct Engine {
  slots: [StageSlot; DEPTH],
}

impl Default for Engine {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Engine {
  /// An empty engine: all slots invalid.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      slots: [StageSlot::EMPTY; DEPTH],
    }
  }

  /// Invalidate every slot, discarding in-flight blocks.
  pub fn reset(&mut self) {
    self.slots = [StageSlot::EMPTY; DEPTH];
  }

  /// Number of blocks currently traversing the pipeline.
  #[must_use]
  pub fn in_flight(&self) -> usize {
    self.slots.iter().filter(|slot| slot.valid).count()
  }

  /// True when no block is in flight.
  #[must_use]
  pub fn is_idle(&self) -> bool {
    self.in_flight() == 0
  }

  /// Advance the pipeline by one tick, optionally admitting one block.
  ///
  /// Admission is unconditional once the guard passes - the pipeline never
  /// exerts backpressure. A block admitted on this call retires on the 10th
  /// call counting this one.
  ///
  /// # Errors
  ///
  /// [`AdmissionError::MessageInFlight`] if a valid slot already carries the
  /// request's message id. The engine is left untouched; the tick does not
  /// occur.
  pub fn step(&mut self, input: Option<BlockRequest>) -> Result<TickOutput, AdmissionError> {
    if let Some(request) = &input {
      if self
        .slots
        .iter()
        .any(|slot| slot.valid && slot.message == request.message)
      {
        return Err(AdmissionError::MessageInFlight(request.message));
      }
    }

    // Shift from the tail so each position reads last tick's upstream slot.
    for i in (1..DEPTH).rev() {
      self.slots[i] = Self::advance(&self.slots[i - 1], i);
    }
    self.slots[0] = match input {
      Some(request) => Self::advance(&StageSlot::admit(request), 0),
      None => StageSlot::EMPTY,
    };

    Ok(TickOutput {
      retired: self.retire(),
    })
  }

  /// Run stage `position` on the slot arriving from upstream.
  fn advance(upstream: &StageSlot, position: usize) -> StageSlot {
    if !upstream.valid {
      return StageSlot::EMPTY;
    }

    let mut slot = *upstream;
    let base = position * ROUNDS_PER_BANK;
    let words = expand8(&mut slot.window, base);

    let mut kw = [0u64; ROUNDS_PER_BANK];
    for (r, kwr) in kw.iter_mut().enumerate() {
      *kwr = add2(K[base + r], words[r]);
    }
    apply8(&mut slot.work, &kw);
    slot
  }

  /// Consume the slot completing position 9, if valid.
  fn retire(&mut self) -> Option<Retirement> {
    let slot = &mut self.slots[DEPTH - 1];
    if !slot.valid {
      return None;
    }
    slot.valid = false;

    let mut continuation = slot.carry;
    for (c, w) in continuation.iter_mut().zip(slot.work) {
      *c = add2(*c, w);
    }
    let [h0, h1, h2, h3, h4, h5, _, _] = continuation;
    let hash = slot.last.then_some([h0, h1, h2, h3, h4, h5]);

    Some(Retirement {
      message: slot.message,
      continuation,
      hash,
    })
  }
}

/// Hash a padded multi-block message through a private engine.
///
/// Drives the full chaining protocol: each block waits for its predecessor's
/// continuation digest, so this is a latency (not throughput) path - use
/// [`Engine::step`] directly to keep the pipeline full with independent
/// messages. Returns `None` for an empty block list.
#[must_use]
pub fn hash_message(blocks: &[Block]) -> Option<Hash384> {
  let mut engine = Engine::new();
  let mut chaining = Chaining::Fresh;

  for (index, block) in blocks.iter().enumerate() {
    let last = index + 1 == blocks.len();
    let mut pending = Some(BlockRequest {
      block: *block,
      message: MessageId(0),
      chaining,
      last,
    });

    chaining = loop {
      // Admission cannot fail here: the single message is fully serialized.
      let out = engine.step(pending.take()).ok()?;
      if let Some(retired) = out.retired {
        if last {
          return retired.hash;
        }
        break Chaining::Continue(retired.continuation);
      }
    };
  }

  None
}
