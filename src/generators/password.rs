// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use super::coverage::enforce_coverage;
use super::{CharacterPool, GenerationError, RandomSource, Result};

pub struct PasswordGenerator {
    source: RandomSource,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_source(RandomSource::detect())
    }

    pub fn with_source(source: RandomSource) -> Self {
        PasswordGenerator { source }
    }

    pub fn is_secure(&self) -> bool {
        self.source.is_secure()
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password_with(options, &mut self.source)
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_options(options: &PasswordGenerationOptions) -> Result<()> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(GenerationError::InvalidLength(options.length));
    }
    if options.enabled_categories().is_empty() {
        return Err(GenerationError::NoCategorySelected);
    }
    Ok(())
}

/// Generate a password drawing every random value from `rng`.
///
/// Options are validated and the pool is built before the first draw, so a
/// failed call never consumes randomness.
pub fn generate_password_with<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Result<String> {
    validate_options(options)?;
    let pool = CharacterPool::build(options)?;

    let dist = Uniform::from(0..pool.len());
    let candidate: Vec<char> = (0..options.length)
        .map(|_| pool.as_slice()[dist.sample(rng)])
        .collect();

    let password = enforce_coverage(candidate, options, rng);
    log::debug!("Generated {}-character password from a pool of {}", password.len(), pool.len());

    Ok(password.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{SIMILAR_CHARACTERS, SYMBOLS};
    use crate::generators::coverage::missing_categories;
    use crate::models::CharCategory;
    use rand_chacha::ChaCha8Rng;
    use rand_core::{RngCore, SeedableRng};
    use std::collections::HashSet;

    struct NoDrawRng;

    impl RngCore for NoDrawRng {
        fn next_u32(&mut self) -> u32 {
            panic!("unexpected random draw")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("unexpected random draw")
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("unexpected random draw")
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            panic!("unexpected random draw")
        }
    }

    fn option_grid() -> Vec<PasswordGenerationOptions> {
        let mut grid = Vec::new();
        for mask in 1u8..16 {
            for exclude_similar in [false, true] {
                grid.push(PasswordGenerationOptions {
                    length: 6,
                    include_uppercase: mask & 1 != 0,
                    include_lowercase: mask & 2 != 0,
                    include_numbers: mask & 4 != 0,
                    include_symbols: mask & 8 != 0,
                    exclude_similar,
                });
            }
        }
        grid
    }

    #[test]
    fn length_matches_for_every_valid_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for base in option_grid() {
            for length in MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH {
                let options = PasswordGenerationOptions { length, ..base.clone() };
                let password = generate_password_with(&options, &mut rng).unwrap();
                assert_eq!(password.chars().count(), length);
            }
        }
    }

    #[test]
    fn characters_come_from_enabled_alphabets_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for base in option_grid() {
            let options = PasswordGenerationOptions { length: 24, ..base };
            let pool = CharacterPool::build(&options).unwrap();
            let password = generate_password_with(&options, &mut rng).unwrap();
            assert!(password.chars().all(|c| pool.contains(c)), "{:?} -> {}", options, password);
        }
    }

    #[test]
    fn exclude_similar_removes_confusable_characters() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let options = PasswordGenerationOptions {
            length: 32,
            exclude_similar: true,
            ..PasswordGenerationOptions::default()
        };
        for _ in 0..100 {
            let password = generate_password_with(&options, &mut rng).unwrap();
            assert!(!password.chars().any(|c| SIMILAR_CHARACTERS.contains(c)), "{}", password);
        }
    }

    #[test]
    fn long_passwords_cover_every_enabled_category() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let options = PasswordGenerationOptions { length: 32, ..PasswordGenerationOptions::default() };
        for _ in 0..40 {
            let password: Vec<char> = generate_password_with(&options, &mut rng).unwrap().chars().collect();
            assert!(missing_categories(&password, &options).is_empty());
        }
    }

    #[test]
    fn mixed_alphanumeric_example() {
        let options = PasswordGenerationOptions {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_similar: true,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let password = generate_password_with(&options, &mut rng).unwrap();

        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().any(|c| CharCategory::Uppercase.contains(c, true)));
        assert!(password.chars().any(|c| CharCategory::Lowercase.contains(c, true)));
        assert!(password.chars().any(|c| CharCategory::Number.contains(c, true)));
        assert!(!password.chars().any(|c| SYMBOLS.contains(c)));
        assert!(!password.chars().any(|c| SIMILAR_CHARACTERS.contains(c)));
    }

    #[test]
    fn no_category_fails_without_drawing() {
        let options = PasswordGenerationOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordGenerationOptions::default()
        };
        assert_eq!(
            generate_password_with(&options, &mut NoDrawRng),
            Err(GenerationError::NoCategorySelected)
        );
    }

    #[test]
    fn out_of_range_lengths_fail_without_drawing() {
        for length in [0, 5, 33, 100] {
            let options = PasswordGenerationOptions { length, ..PasswordGenerationOptions::default() };
            assert_eq!(
                generate_password_with(&options, &mut NoDrawRng),
                Err(GenerationError::InvalidLength(length))
            );
        }
    }

    #[test]
    fn length_is_checked_before_categories() {
        let options = PasswordGenerationOptions {
            length: 33,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_similar: false,
        };
        assert_eq!(validate_options(&options), Err(GenerationError::InvalidLength(33)));
    }

    #[test]
    fn repeated_generation_differs() {
        let mut generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions::default();
        let passwords: HashSet<String> = (0..50)
            .map(|_| generator.generate_password(&options).unwrap())
            .collect();
        assert_eq!(passwords.len(), 50);
    }

    #[test]
    fn fallback_source_still_generates_valid_passwords() {
        let mut generator = PasswordGenerator::with_source(RandomSource::fallback());
        assert!(!generator.is_secure());
        let password = generator.generate_password(&PasswordGenerationOptions::default()).unwrap();
        assert_eq!(password.chars().count(), 16);
    }
}
