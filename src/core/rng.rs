/// State increment for the mulberry32 generator (fixed odd constant)
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// Divisor mapping a 32-bit word into [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;

/// mulberry32 pseudo-random stream
///
/// 32-bit state generator: each draw advances the state by a fixed odd
/// constant with unsigned wraparound, then scrambles it with two rounds of
/// xorshift-multiply using odd multipliers. The stream is a pure function
/// of the seed: the same seed always produces the same draw sequence,
/// bit-for-bit, which is the property the whole mock generator rests on.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the scrambled 32-bit word
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advance the stream and return a draw in [0, 1)
    ///
    /// The division by 2^32 is exact in binary floating point, so the
    /// f64 draw is as reproducible as the underlying word.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }
}
