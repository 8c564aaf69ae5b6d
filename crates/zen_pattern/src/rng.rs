//! Seeded random stream shared by every stage of a generation run.
//!
//! [`Mulberry32`] keeps one 32-bit state word and mixes it with a fixed sequence of
//! multiply-xor-shift rounds. All arithmetic wraps modulo 2^32, so the produced
//! sequence is identical on every platform and matches other Mulberry32 ports bit for bit.
use rand::RngCore;

/// Increment added to the state word before each mix.
const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor that maps a `u32` into [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 pseudo-random generator.
///
/// Not cryptographic. Each call to [`Mulberry32::next_u32`] advances the state by
/// one step; nothing else can observe or modify the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream positioned at `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1). Never returns exactly 1.0.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_mixed() as f64) / TWO_POW_32
    }

    #[inline]
    fn next_mixed(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_mixed()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_mixed() as u64;
        let lo = self.next_mixed() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_mixed().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Draw one value in [0, 1) from any [`RngCore`].
///
/// Consumes exactly one `next_u32`. For a [`Mulberry32`] this equals
/// [`Mulberry32::next_f64`].
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / TWO_POW_32
}
