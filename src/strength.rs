// src/strength.rs
//! Heuristic password strength scoring.
//!
//! The score is a small integer built from length bands, character-class
//! diversity and a couple of pattern penalties. It is a rough guide for the
//! strength meter, not an entropy estimate.

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

// Three-character ascending runs that cost a point
const SEQUENCES: [&str; 31] = [
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn",
    "mno", "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz",
    "123", "234", "345", "456", "567", "678", "789",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Medium,
    Good,
    Excellent,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthTier::Weak,
            4..=5 => StrengthTier::Medium,
            6..=7 => StrengthTier::Good,
            _ => StrengthTier::Excellent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Good => "Good",
            StrengthTier::Excellent => "Excellent",
        }
    }

    pub fn width_percent(self) -> u8 {
        match self {
            StrengthTier::Weak => 25,
            StrengthTier::Medium => 50,
            StrengthTier::Good => 75,
            StrengthTier::Excellent => 100,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Weak => "#f44336",
            StrengthTier::Medium => "#ff9800",
            StrengthTier::Good => "#4CAF50",
            StrengthTier::Excellent => "#2196F3",
        }
    }
}

/// Result of scoring a password. Empty input is `Unscored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Unscored,
    Rated { score: u8, tier: StrengthTier },
}

impl Strength {
    pub fn score(&self) -> Option<u8> {
        match self {
            Strength::Unscored => None,
            Strength::Rated { score, .. } => Some(*score),
        }
    }

    pub fn tier(&self) -> Option<StrengthTier> {
        match self {
            Strength::Unscored => None,
            Strength::Rated { tier, .. } => Some(*tier),
        }
    }

    pub fn label(&self) -> &'static str {
        self.tier().map_or("-", StrengthTier::label)
    }

    pub fn width_percent(&self) -> u8 {
        self.tier().map_or(0, StrengthTier::width_percent)
    }

    pub fn color(&self) -> &'static str {
        self.tier().map_or("#777", StrengthTier::color)
    }
}

pub fn analyze_password_strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::Unscored;
    }

    let score = raw_score(password).clamp(MIN_SCORE, MAX_SCORE) as u8;
    Strength::Rated {
        score,
        tier: StrengthTier::from_score(score),
    }
}

fn raw_score(password: &str) -> i32 {
    let length = password.chars().count();

    let mut score = match length {
        6..=8 => 1,
        9..=12 => 2,
        13..=16 => 3,
        l if l > 16 => 4,
        _ => 0,
    };

    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    score += classes.iter().filter(|present| **present).count() as i32 * 2;

    let lowered = password.to_lowercase();
    if SEQUENCES.iter().any(|run| lowered.contains(run)) {
        score -= 1;
    }
    if has_repeated_run(password, 3) {
        score -= 2;
    }

    if length > 14 {
        score += 1;
    }

    score
}

fn has_repeated_run(password: &str, run: usize) -> bool {
    let mut previous = None;
    let mut count = 0;
    for c in password.chars() {
        if previous == Some(c) {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}
