use crate::mt19937::*;
use crate::Error;

// How far before `now` recover_seed searches for a candidate timestamp
const LOOKBACK_SECS: u32 = 100_000;

/// Clone an MT19937 PRNG from its observable output alone
///
/// Output the next N random numbers of the source PRNG, recover the twisted
/// state behind each of them, and inject the rebuilt vector into a fresh
/// generator.
///
/// Any window of N consecutive outputs works: the in-place twist advances a
/// sliding window of the raw recurrence, so the capture does not have to
/// start on a twist boundary.
pub fn clone(rng: &mut Mt19937) -> Result<Mt19937, Error> {
    let mut outputs = [0_u32; N];

    for out in outputs.iter_mut() {
        *out = rng.extract_number();
    }

    clone_from_outputs(&outputs)
}

/// Rebuild a generator from N consecutive observed outputs
///
/// A window of any other length is an incomplete (or over-full) state and is
/// rejected before anything is injected.
pub fn clone_from_outputs(outputs: &[u32]) -> Result<Mt19937, Error> {
    if outputs.len() != N {
        return Err(Error::InvalidStateLength);
    }

    let mut state = [0_u32; N];

    for (word, out) in state.iter_mut().zip(outputs.iter()) {
        *word = untemper(*out);
    }

    // the seed is irrelevant, injection replaces the vector wholesale
    let mut cloned = Mt19937::new(0);
    cloned.inject_state(&state)?;

    Ok(cloned)
}

/// Recover an MT19937 seed knowing that it was seeded from a time
/// not too long in the past
///
/// Untempers the observed first output, then walks candidate timestamps up
/// to `now`, seeding just enough state to twist word 0 and comparing it
/// against the untempered word.
///
/// Returns 0 when no candidate in the lookback window matches; a timestamp
/// seed can never be zero, so 0 doubles as the not-found value.
pub fn recover_seed(rand_num: u32, now: u32) -> u32 {
    let untempered = untemper(rand_num);

    let mut state = [0_u32; N];
    for candidate in now - LOOKBACK_SECS..now {
        state[0] = candidate;

        // twisting word 0 only reads words 0, 1 and M
        for i in 1..=M {
            Mt19937::k_distribute(&mut state, i);
        }
        Mt19937::twist_step(&mut state, 0);

        if state[0] == untempered {
            return candidate;
        }
    }

    0
}

/// Recover the raw MT19937 state word behind one observed output
///
/// Inverts the four tempering steps in reverse order. Each forward step is a
/// bijection on 32-bit words, so untempering is total: every output maps
/// back to exactly one state word.
pub fn untemper(rand_num: u32) -> u32 {
    // the final tempering step carries no mask, which is the same as masking
    // with all ones
    let mut inv_z = invert_right(rand_num, L, 0xffff_ffff);

    inv_z = invert_left(inv_z, T, C);
    inv_z = invert_left(inv_z, S, B);

    invert_right(inv_z, U, D)
}

// Invert one step of the form y = x ^ ((x >> shift) & mask)
//
// Bit i of y is x[i] ^ (x[i + shift] & mask[i]): each bit depends only on a
// strictly higher bit of x, and the top `shift` bits carry over unchanged.
// Resolving from bit 31 down therefore always XORs against an
// already-recovered bit.
fn invert_right(y: u32, shift: u32, mask: u32) -> u32 {
    let mut x = 0_u32;

    for i in (0..W).rev() {
        let dep = if i + shift < W {
            (x >> (i + shift)) & 1
        } else {
            0
        };

        let bit = ((y >> i) & 1) ^ (dep & ((mask >> i) & 1));
        x |= bit << i;
    }

    x
}

// Invert one step of the form y = x ^ ((x << shift) & mask)
//
// Mirror image of invert_right: bit i of y is x[i] ^ (x[i - shift] & mask[i]),
// the dependency sits below, so resolution runs from bit 0 up.
fn invert_left(y: u32, shift: u32, mask: u32) -> u32 {
    let mut x = 0_u32;

    for i in 0..W {
        let dep = if i >= shift { (x >> (i - shift)) & 1 } else { 0 };

        let bit = ((y >> i) & 1) ^ (dep & ((mask >> i) & 1));
        x |= bit << i;
    }

    x
}
