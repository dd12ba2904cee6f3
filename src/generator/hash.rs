//! Random hash generation over configurable character sets.

use rand::seq::IndexedRandom;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMERIC: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*-_+=";

/// Character classes a hash is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    pub upper: bool,
    pub lower: bool,
    pub numeric: bool,
    pub symbols: bool,
    /// When the set contains letters, force the first character to be one.
    pub start_with_letter: bool,
}

impl Charset {
    pub const ALPHANUMERIC: Self = Self {
        upper: true,
        lower: true,
        numeric: true,
        symbols: false,
        start_with_letter: true,
    };
    pub const ALPHA: Self = Self {
        numeric: false,
        ..Self::ALPHANUMERIC
    };
    pub const NUMERIC: Self = Self {
        upper: false,
        lower: false,
        ..Self::ALPHANUMERIC
    };
    pub const UPPERCASE: Self = Self {
        lower: false,
        numeric: false,
        ..Self::ALPHANUMERIC
    };
    pub const LOWERCASE: Self = Self {
        upper: false,
        numeric: false,
        ..Self::ALPHANUMERIC
    };
    pub const UPPERCASE_NUMERIC: Self = Self {
        lower: false,
        ..Self::ALPHANUMERIC
    };
    pub const LOWERCASE_NUMERIC: Self = Self {
        upper: false,
        ..Self::ALPHANUMERIC
    };
    pub const ALPHA_SYMBOLS: Self = Self {
        symbols: true,
        ..Self::ALPHANUMERIC
    };
    pub const ONLY_SYMBOLS: Self = Self {
        upper: false,
        lower: false,
        numeric: false,
        symbols: true,
        start_with_letter: false,
    };

    /// Looks up a named set, as used by route names and the CLI.
    pub fn by_name(name: &str) -> Option<Self> {
        let set = match name {
            "alpha-numeric" | "alphanumeric" => Self::ALPHANUMERIC,
            "alpha" => Self::ALPHA,
            "numeric" => Self::NUMERIC,
            "uppercase" => Self::UPPERCASE,
            "lowercase" => Self::LOWERCASE,
            "uppercase-numeric" => Self::UPPERCASE_NUMERIC,
            "lowercase-numeric" => Self::LOWERCASE_NUMERIC,
            "alpha-symbols" => Self::ALPHA_SYMBOLS,
            "only-symbols" => Self::ONLY_SYMBOLS,
            _ => return None,
        };
        Some(set)
    }

    fn letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        if self.upper {
            letters.extend(UPPER.chars());
        }
        if self.lower {
            letters.extend(LOWER.chars());
        }
        letters
    }

    /// Every character the set can produce.
    pub fn alphabet(&self) -> Vec<char> {
        let mut all = self.letters();
        if self.numeric {
            all.extend(NUMERIC.chars());
        }
        if self.symbols {
            all.extend(SYMBOLS.chars());
        }
        all
    }
}

/// Generates a random hash of `length` characters from `charset`.
///
/// Returns an empty string if the set is empty.
pub fn generate_hash(length: usize, charset: &Charset) -> String {
    let alphabet = charset.alphabet();
    let letters = charset.letters();

    let mut rng = rand::rng();
    let mut hash = String::with_capacity(length);

    for i in 0..length {
        let pool = if i == 0 && charset.start_with_letter && !letters.is_empty() {
            &letters
        } else {
            &alphabet
        };
        match pool.choose(&mut rng) {
            Some(c) => hash.push(*c),
            None => break,
        }
    }

    hash
}

/// Generates a random hash of `length` characters drawn from `characters`.
///
/// Repeated characters weigh the draw accordingly.
pub fn generate_from(length: usize, characters: &str) -> String {
    let pool: Vec<char> = characters.chars().collect();
    if pool.is_empty() {
        return String::new();
    }

    let mut rng = rand::rng();
    (0..length)
        .filter_map(|_| pool.choose(&mut rng).copied())
        .collect()
}
