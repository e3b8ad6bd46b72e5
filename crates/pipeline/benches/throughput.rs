use core::hint::black_box;

use compress::pad::pad_message;
use compress::reference;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pipeline::{BlockRequest, Chaining, Engine, MessageId, hash_message};

fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
  let mut out = vec![0u8; len];
  for b in &mut out {
    state ^= state >> 12;
    state ^= state << 25;
    state ^= state >> 27;
    *b = (state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 56) as u8;
  }
  black_box(&out);
  out
}

/// Latency path: one chained message, pipeline mostly empty.
fn chained_message(c: &mut Criterion) {
  let mut group = c.benchmark_group("pipeline/chained");
  for len in [128usize, 16 * 1024, 256 * 1024] {
    let blocks = pad_message(&pseudo_random_bytes(len, 0x5eed));
    group.throughput(Throughput::Bytes(len as u64));

    group.bench_with_input(BenchmarkId::new("engine", len), &blocks, |b, blocks| {
      b.iter(|| black_box(hash_message(black_box(blocks))))
    });
    group.bench_with_input(BenchmarkId::new("reference", len), &blocks, |b, blocks| {
      b.iter(|| black_box(reference::digest_blocks(black_box(blocks))))
    });

    let data = pseudo_random_bytes(len, 0x5eed);
    group.bench_with_input(BenchmarkId::new("sha2", len), &data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        black_box(sha2::Sha384::digest(black_box(d)))
      })
    });
  }
  group.finish();
}

/// Throughput path: independent single-block messages admitted every tick.
fn saturated_pipeline(c: &mut Criterion) {
  let mut group = c.benchmark_group("pipeline/saturated");
  for count in [64usize, 1024] {
    let blocks: Vec<_> = (0..count)
      .map(|i| pad_message(&pseudo_random_bytes(64, i as u64))[0])
      .collect();
    group.throughput(Throughput::Bytes((count * 128) as u64));

    group.bench_with_input(BenchmarkId::new("engine", count), &blocks, |b, blocks| {
      b.iter(|| {
        let mut engine = Engine::new();
        let mut retired = 0usize;
        for tick in 0..blocks.len() + 10 {
          let input = blocks.get(tick).map(|block| BlockRequest {
            block: *block,
            message: MessageId(tick as u64),
            chaining: Chaining::Fresh,
            last: true,
          });
          if let Ok(out) = engine.step(input) {
            if let Some(r) = out.retired {
              black_box(r.hash);
              retired += 1;
            }
          }
        }
        black_box(retired)
      })
    });
  }
  group.finish();
}

criterion_group!(benches, chained_message, saturated_pipeline);
criterion_main!(benches);
