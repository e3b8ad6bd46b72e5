//! The round bank: eight sequential SHA-2 compression rounds per call.

use crate::State;
use crate::arith::{add2, add4, big_sigma0, big_sigma1, ch, maj};

/// Rounds applied per bank invocation (one pipeline stage's worth).
pub const ROUNDS_PER_BANK: usize = 8;

/// Apply eight compression rounds to `state`.
///
/// `kw[r]` must be the pre-summed `K[t+r] + W[t+r]` for the bank's round span.
/// Each round computes
///
/// ```text
/// t1 = h + Sigma1(e) + Ch(e,f,g) + kw[r]
/// t2 = Sigma0(a) + Maj(a,b,c)
/// (a,b,c,d,e,f,g,h) <- (t1+t2, a, b, c, d+t1, e, f, g)
/// ```
///
/// and the eight applications are strictly sequential: b,c,d,f,g,h are shift
/// promotions of earlier a/e values, so there is nothing to parallelize inside
/// one bank. Pure; no externally visible intermediate state.
pub fn apply8(state: &mut State, kw: &[u64; ROUNDS_PER_BANK]) {
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for &kwr in kw {
    let t1 = add4(h, big_sigma1(e), ch(e, f, g), kwr);
    let t2 = add2(big_sigma0(a), maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = add2(d, t1);
    d = c;
    c = b;
    b = a;
    a = add2(t1, t2);
  }

  *state = [a, b, c, d, e, f, g, h];
}
