use std::f64::consts::PI;

use rand::{Rng, RngCore, SeedableRng};

/// Rolling avalanche hash over a seed phrase.
///
/// Folds one UTF-16 code unit of the phrase per round, then doubles as a
/// word source: each `next_word` call avalanches and advances the rolling
/// state, so repeated extraction yields distinct, phrase-determined words.
struct SeedMixer {
    h: u32,
}

impl SeedMixer {
    fn new(phrase: &str) -> Self {
        let mut h = 1779033703u32 ^ phrase.encode_utf16().count() as u32;
        for unit in phrase.encode_utf16() {
            h = (h ^ u32::from(unit)).wrapping_mul(3432918353);
            h = h.rotate_left(13);
        }

        Self { h }
    }

    fn next_word(&mut self) -> u32 {
        let mut h = self.h;
        h = (h ^ (h >> 16)).wrapping_mul(2246822507);
        h = (h ^ (h >> 13)).wrapping_mul(3266489909);
        h ^= h >> 16;
        self.h = h;
        h
    }
}

/// A seeded deterministic generator over four words of state.
///
/// One step produces one `u32` through integer adds, xor-shifts and a
/// rotate; no floating point is involved until a draw is normalized. For a
/// fixed seed phrase the n-th draw is bit-identical across runs and across
/// independently constructed instances, which is what makes a "reseed with
/// the same phrase, get the same network" workflow possible.
///
/// Each instance owns its state exclusively; there is no process-wide
/// default generator. Callers that share an instance across threads must
/// serialize access themselves.
///
/// Implements [`RngCore`] and [`SeedableRng`], so it also drives any
/// `rand_distr` distribution.
#[derive(Debug, Clone)]
pub struct SeededRng {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl SeededRng {
    /// Creates a generator whose stream is fully determined by `phrase`.
    ///
    /// # Arguments
    /// * `phrase` - An arbitrary seed string; identical phrases always
    ///   yield identical streams.
    pub fn from_phrase(phrase: &str) -> Self {
        let mut mixer = SeedMixer::new(phrase);
        let a = mixer.next_word();
        let b = mixer.next_word();
        let c = mixer.next_word();
        let d = mixer.next_word();

        Self { a, b, c, d }
    }

    /// Creates a generator seeded from OS entropy.
    ///
    /// A fallback phrase is formatted from the system generator and routed
    /// through the same hash path as [`SeededRng::from_phrase`].
    pub fn from_entropy() -> Self {
        let phrase = format!("{:016x}", rand::rng().random::<u64>());
        Self::from_phrase(&phrase)
    }

    fn next_word(&mut self) -> u32 {
        let mut t = self.a.wrapping_add(self.b);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21);
        self.d = self.d.wrapping_add(1);
        t = t.wrapping_add(self.d);
        self.c = self.c.wrapping_add(t);
        t
    }

    /// Draws the next value of the stream, uniform on `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_word()) / 4_294_967_296.
    }

    /// Draws a standard normal value via the Box-Muller transform.
    ///
    /// Consumes two consecutive uniform draws. A zero first draw would
    /// send `ln` to negative infinity, so it is resampled until nonzero;
    /// the result is always finite.
    pub fn normal(&mut self) -> f64 {
        let mut x = self.uniform();
        while x == 0. {
            x = self.uniform();
        }
        let y = self.uniform();

        (-2. * x.ln()).sqrt() * (2. * PI * y).cos()
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_word());
        let hi = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let word = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let word = |i: usize| u32::from_le_bytes([seed[i], seed[i + 1], seed[i + 2], seed[i + 3]]);

        Self {
            a: word(0),
            b: word(4),
            c: word(8),
            d: word(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixer_words_differ_between_extractions() {
        let mut mixer = SeedMixer::new("my-seed");
        let a = mixer.next_word();
        let b = mixer.next_word();
        assert_ne!(a, b);
    }

    #[test]
    fn mixer_is_phrase_determined() {
        let a = SeedMixer::new("my-seed").next_word();
        let b = SeedMixer::new("my-seed").next_word();
        assert_eq!(a, b);
    }

    #[test]
    fn same_phrase_same_words() {
        let mut a = SeededRng::from_phrase("my-seed");
        let mut b = SeededRng::from_phrase("my-seed");
        for _ in 0..100 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn next_u64_is_low_word_first() {
        let mut a = SeededRng::from_phrase("words");
        let mut b = SeededRng::from_phrase("words");

        let lo = u64::from(b.next_word());
        let hi = u64::from(b.next_word());
        assert_eq!(a.next_u64(), (hi << 32) | lo);
    }

    #[test]
    fn seed_trait_path_is_reproducible() {
        let mut a = SeededRng::seed_from_u64(42);
        let mut b = SeededRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut a = SeededRng::from_phrase("bytes");
        let mut dst = [0u8; 7];
        a.fill_bytes(&mut dst);

        let mut b = SeededRng::from_phrase("bytes");
        let first = b.next_word().to_le_bytes();
        assert_eq!(&dst[..4], &first);
    }
}
