// src/generators/random.rs
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Source of randomness for password generation.
///
/// `Secure` reads from the operating system CSPRNG. `Fallback` is a
/// time-seeded PRNG used only when the OS source cannot be read; passwords
/// drawn from it are not suitable for high-value secrets.
pub enum RandomSource {
    Secure(OsRng),
    Fallback(ChaCha8Rng),
}

impl RandomSource {
    /// Probe the OS random source and pick the strongest one available.
    pub fn detect() -> Self {
        let mut probe = [0u8; 16];
        match OsRng.try_fill_bytes(&mut probe) {
            Ok(()) => {
                log::debug!("Using operating system random source");
                RandomSource::Secure(OsRng)
            }
            Err(e) => {
                log::debug!("OS random source unavailable: {}", e);
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        log::warn!(
            "⚠️ Secure random source unavailable, falling back to a non-cryptographic generator"
        );
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seed = nanos ^ ((std::process::id() as u64) << 32);
        RandomSource::Fallback(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, RandomSource::Secure(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            RandomSource::Secure(_) => "os",
            RandomSource::Fallback(_) => "fallback",
        }
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            RandomSource::Secure(rng) => rng.next_u32(),
            RandomSource::Fallback(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            RandomSource::Secure(rng) => rng.next_u64(),
            RandomSource::Fallback(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            RandomSource::Secure(rng) => rng.fill_bytes(dest),
            RandomSource::Fallback(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match self {
            RandomSource::Secure(rng) => rng.try_fill_bytes(dest),
            RandomSource::Fallback(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::testing::{captured, start_capture};
    use log::Level;
    use rand::Rng;

    #[test]
    fn detect_prefers_os_source() {
        // Every supported test platform exposes an OS random source
        let source = RandomSource::detect();
        assert!(source.is_secure());
        assert_eq!(source.name(), "os");
    }

    #[test]
    fn fallback_is_flagged_insecure_and_still_produces_values() {
        let mut source = RandomSource::fallback();
        assert!(!source.is_secure());
        assert_eq!(source.name(), "fallback");

        let draws: Vec<u64> = (0..8).map(|_| source.next_u64()).collect();
        assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
        let index = source.gen_range(0..10usize);
        assert!(index < 10);
    }

    #[test]
    fn fallback_selection_is_logged_as_a_warning() {
        start_capture();
        let source = RandomSource::fallback();
        let records = captured();

        assert!(!source.is_secure());
        assert!(
            records
                .iter()
                .any(|(level, message)| *level == Level::Warn && message.contains("non-cryptographic")),
            "{:?}",
            records
        );
    }
}
