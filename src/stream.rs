/// Compare the outputs of two generators in lockstep
///
/// Drives both callables `len` times and returns the index of the first
/// disagreement, or `None` when every output matched.
pub fn first_divergence<A, B>(mut a: A, mut b: B, len: usize) -> Option<usize>
where
    A: FnMut() -> u32,
    B: FnMut() -> u32,
{
    for i in 0..len {
        if a() != b() {
            return Some(i);
        }
    }

    None
}
