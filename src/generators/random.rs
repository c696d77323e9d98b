// src/generators/random.rs
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Supplier of uniformly distributed 32-bit values.
pub trait RandomSource {
    /// Return `n` independent values spread over the full `u32` range.
    fn next_uniform(&mut self, n: usize) -> Vec<u32>;

    fn next_u32(&mut self) -> u32 {
        self.next_uniform(1).first().copied().unwrap_or_default()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self, n: usize) -> Vec<u32> {
        (**self).next_uniform(n)
    }
}

// Bytes requested from the OS per fill call
const FILL_CHUNK_BYTES: usize = 256;

/// Operating system CSPRNG, degrading to a clock-seeded PRNG if the OS
/// source ever fails. The primary generator is `OsRng` outside of tests.
pub struct SystemRandom<P: RngCore = OsRng> {
    primary: P,
    fallback: Option<SeededRandom>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self::with_primary(OsRng)
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RngCore> SystemRandom<P> {
    pub fn with_primary(primary: P) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// True once the OS source has failed and draws come from the weaker PRNG.
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    fn fill_from_primary(&mut self, n: usize) -> Result<Vec<u32>, rand_core::Error> {
        let mut values = Vec::with_capacity(n);
        let mut buffer = [0u8; FILL_CHUNK_BYTES];

        while values.len() < n {
            let wanted = (n - values.len()).min(FILL_CHUNK_BYTES / 4);
            let bytes = &mut buffer[..wanted * 4];
            self.primary.try_fill_bytes(bytes)?;
            values.extend(
                bytes
                    .chunks_exact(4)
                    .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])),
            );
        }

        Ok(values)
    }
}

impl<P: RngCore> RandomSource for SystemRandom<P> {
    fn next_uniform(&mut self, n: usize) -> Vec<u32> {
        if let Some(fallback) = self.fallback.as_mut() {
            return fallback.next_uniform(n);
        }

        match self.fill_from_primary(n) {
            Ok(values) => values,
            Err(e) => {
                log::warn!(
                    "OS random source unavailable ({}); falling back to a clock-seeded PRNG, output is NOT cryptographically secure",
                    e
                );
                self.fallback
                    .get_or_insert_with(SeededRandom::from_clock)
                    .next_uniform(n)
            }
        }
    }
}

/// Deterministic ChaCha8 stream. Reproducible for a given seed, which makes it
/// suitable for tests and fixtures only.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // Seed from wall clock and pid; guessable by anyone who knows roughly when it ran
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ ((std::process::id() as u64) << 32))
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self, n: usize) -> Vec<u32> {
        (0..n).map(|_| self.rng.next_u32()).collect()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
pub struct SequenceRandom {
    values: Vec<u32>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, position: 0 }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_uniform(&mut self, n: usize) -> Vec<u32> {
        if self.values.is_empty() {
            return vec![0; n];
        }
        (0..n)
            .map(|_| {
                let value = self.values[self.position % self.values.len()];
                self.position = (self.position + 1) % self.values.len();
                value
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    // Every fill fails, like an OS without a usable entropy source
    struct BrokenRng {
        calls: usize,
    }

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.calls += 1;
            let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            Err(rand_core::Error::from(code))
        }
    }

    #[test]
    fn system_random_returns_requested_count() {
        let mut source = SystemRandom::new();
        for n in [1, 4, 33, 256] {
            assert_eq!(source.next_uniform(n).len(), n);
        }
        assert!(!source.is_degraded());
    }

    #[test]
    fn system_random_fills_large_requests_in_chunks() {
        let mut source = SystemRandom::new();
        let values = source.next_uniform(FILL_CHUNK_BYTES + 3);
        assert_eq!(values.len(), FILL_CHUNK_BYTES + 3);
        assert!(source.next_uniform(0).is_empty());
    }

    #[test]
    fn failing_os_source_degrades_to_fallback() {
        let mut source = SystemRandom::with_primary(BrokenRng { calls: 0 });
        assert!(!source.is_degraded());

        let values = source.next_uniform(12);
        assert_eq!(values.len(), 12);
        assert!(source.is_degraded());
        assert!(values.iter().any(|v| *v != values[0]));

        // Once degraded the primary is not asked again
        assert_eq!(source.next_uniform(5).len(), 5);
        assert_eq!(source.primary.calls, 1);
    }

    #[test]
    fn generator_keeps_working_on_a_degraded_source() {
        use crate::generators::PasswordGenerator;
        use crate::models::GenerationConfig;

        let source = SystemRandom::with_primary(BrokenRng { calls: 0 });
        let mut generator = PasswordGenerator::with_source(source);
        let password = generator.generate(&GenerationConfig::default());
        assert_eq!(password.chars().count(), 16);
        assert!(generator.source().is_degraded());
    }

    #[test]
    fn system_random_is_not_constant() {
        let mut source = SystemRandom::new();
        let values = source.next_uniform(64);
        assert!(values.iter().any(|v| *v != values[0]));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SeededRandom::new(7).next_uniform(16);
        let b = SeededRandom::new(7).next_uniform(16);
        let c = SeededRandom::new(8).next_uniform(16);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sequence_random_cycles() {
        let mut source = SequenceRandom::new(vec![1, 2, 3]);
        assert_eq!(source.next_uniform(5), vec![1, 2, 3, 1, 2]);
        assert_eq!(source.next_u32(), 3);
        assert_eq!(SequenceRandom::new(Vec::new()).next_uniform(2), vec![0, 0]);
    }
}
