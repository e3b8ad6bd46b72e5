//! N-way engine replication: independent lanes, nothing shared.
//!
//! Replication is for workloads of many *independent* messages - each lane is
//! a complete [`Engine`] and lanes never observe each other, so throughput
//! scales linearly with N and no arbitration or locking exists. Blocks of one
//! message must all go through the same lane (the chaining guard is per-lane).

use crate::engine::{BlockRequest, Engine, TickOutput};
use crate::error::AdmissionError;

/// N share-nothing pipelines stepped in lockstep.
#[derive(Debug, Clone)]
pub struct ReplicatedEngine<const N: usize> {
  lanes: [Engine; N],
}

impl<const N: usize> Default for ReplicatedEngine<N> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> ReplicatedEngine<N> {
  /// N empty lanes.
  #[must_use]
  pub fn new() -> Self {
    Self {
      lanes: core::array::from_fn(|_| Engine::new()),
    }
  }

  /// Number of lanes.
  #[must_use]
  pub const fn lanes(&self) -> usize {
    N
  }

  /// Borrow one lane, `None` past the end.
  #[must_use]
  pub fn lane(&self, index: usize) -> Option<&Engine> {
    self.lanes.get(index)
  }

  /// Mutably borrow one lane, for driving it outside lockstep.
  #[must_use]
  pub fn lane_mut(&mut self, index: usize) -> Option<&mut Engine> {
    self.lanes.get_mut(index)
  }

  /// Reset every lane.
  pub fn reset(&mut self) {
    for lane in &mut self.lanes {
      lane.reset();
    }
  }

  /// Advance every lane by one tick with its own admission channel.
  ///
  /// Results are per-lane: one lane's admission rejection neither ticks that
  /// lane nor affects any other.
  pub fn step(
    &mut self,
    inputs: [Option<BlockRequest>; N],
  ) -> [Result<TickOutput, AdmissionError>; N] {
    let mut results = [Ok(TickOutput::default()); N];
    for ((lane, input), result) in self.lanes.iter_mut().zip(inputs).zip(results.iter_mut()) {
      *result = lane.step(input);
    }
    results
  }
}

#[cfg(test)]
mod tests {
  use compress::pad::pad_message;
  use compress::reference;

  use super::*;
  use crate::engine::{Chaining, MessageId};

  fn request(id: u64, tweak: u64, last: bool) -> BlockRequest {
    let mut block = pad_message(b"abc")[0];
    block[1] = tweak;
    BlockRequest {
      block,
      message: MessageId(id),
      chaining: Chaining::Fresh,
      last,
    }
  }

  #[test]
  fn identical_inputs_yield_identical_lanes() {
    let mut engines: ReplicatedEngine<4> = ReplicatedEngine::new();
    for tick in 0u64..30 {
      let input = (tick % 2 == 0).then(|| request(tick, tick, true));
      let results = engines.step([input; 4]);
      for pair in results.windows(2) {
        assert_eq!(pair[0], pair[1], "lane divergence at tick {tick}");
      }
    }
  }

  #[test]
  fn lanes_are_independent() {
    let mut engines: ReplicatedEngine<3> = ReplicatedEngine::new();

    // Feed only lane 0; lanes 1 and 2 must stay idle and silent.
    let mut outputs = [None, None, None];
    for tick in 0u64..12 {
      let input = (tick == 0).then(|| request(9, 0x5eed, true));
      let results = engines.step([input, None, None]);
      for (lane, result) in results.into_iter().enumerate() {
        if let Some(r) = result.unwrap().retired {
          outputs[lane] = Some(r);
        }
      }
    }

    let mut block = pad_message(b"abc")[0];
    block[1] = 0x5eed;
    assert_eq!(outputs[0].unwrap().hash, reference::digest_blocks(&[block]));
    assert!(outputs[1].is_none());
    assert!(outputs[2].is_none());
    assert!(engines.lane(1).unwrap().is_idle());
    assert!(engines.lane(2).unwrap().is_idle());
  }

  #[test]
  fn rejection_is_per_lane() {
    let mut engines: ReplicatedEngine<2> = ReplicatedEngine::new();
    let _ = engines.step([Some(request(1, 0, true)), Some(request(1, 0, true))]);

    // Lane 0 re-admits id 1 (rejected, no tick); lane 1 idles (ticks).
    let results = engines.step([Some(request(1, 1, true)), None]);
    assert_eq!(
      results[0],
      Err(AdmissionError::MessageInFlight(MessageId(1)))
    );
    assert!(results[1].is_ok());
    assert_eq!(engines.lane(0).unwrap().in_flight(), 1);
  }

  #[test]
  fn lane_access_bounds() {
    let engines: ReplicatedEngine<2> = ReplicatedEngine::new();
    assert_eq!(engines.lanes(), 2);
    assert!(engines.lane(1).is_some());
    assert!(engines.lane(2).is_none());
  }
}
