// src/generators/coverage.rs
//
// Post-generation repair making sure every enabled category shows up in the
// password at least once.
//
// The repair is best effort. Missing categories are computed once up front,
// and each one overwrites a single random position. Two repairs can land on
// the same position, and a repair can overwrite the only character of a
// category that was already present. With the minimum length of 6 and at most
// four categories this is rare but possible; callers must not treat coverage
// as guaranteed.
use rand::Rng;

use crate::models::{CharCategory, PasswordGenerationOptions};

/// How many random positions to try before accepting one that holds a symbol.
pub const MAX_POSITION_ATTEMPTS: usize = 10;

pub fn missing_categories(password: &[char], options: &PasswordGenerationOptions) -> Vec<CharCategory> {
    options
        .enabled_categories()
        .into_iter()
        .filter(|category| {
            !password
                .iter()
                .any(|c| category.contains(*c, options.exclude_similar))
        })
        .collect()
}

pub fn enforce_coverage<R: Rng + ?Sized>(
    mut password: Vec<char>,
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Vec<char> {
    let missing = missing_categories(&password, options);
    if missing.is_empty() || password.is_empty() {
        return password;
    }

    for category in missing {
        let alphabet = category.alphabet(options.exclude_similar).as_bytes();
        let replacement = alphabet[rng.gen_range(0..alphabet.len())] as char;
        let position = pick_position(&password, rng);
        log::debug!("Adding missing {} character at position {}", category, position);
        password[position] = replacement;
    }

    password
}

// Prefer positions that don't hold a symbol so fixing a letter or digit
// doesn't knock out the only symbol.
fn pick_position<R: Rng + ?Sized>(password: &[char], rng: &mut R) -> usize {
    for _ in 0..MAX_POSITION_ATTEMPTS {
        let position = rng.gen_range(0..password.len());
        if !CharCategory::Symbol.contains(password[position], false) {
            return position;
        }
    }
    rng.gen_range(0..password.len())
}
