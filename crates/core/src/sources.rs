//! Injected time and randomness sources for the submission builder.
//!
//! Production code uses [`SystemClock`] and [`RandomSuffix`]; tests supply
//! fixed implementations so built records are fully deterministic.

use rand::Rng;

use crate::naming::ID_SUFFIX_LENGTH;
use crate::types::EntryDate;

/// Alphabet for id suffixes (base 36, lowercase).
const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Supplies the current calendar day for `dateCreated`.
pub trait Clock {
    fn today(&self) -> EntryDate;
}

/// Supplies the uniqueness suffix appended to generated ids.
pub trait SuffixSource {
    fn next_suffix(&self) -> String;
}

/// UTC wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> EntryDate {
        chrono::Utc::now().date_naive()
    }
}

/// Thread-local RNG producing [`ID_SUFFIX_LENGTH`] base-36 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> String {
        let mut rng = rand::rng();
        (0..ID_SUFFIX_LENGTH)
            .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
            .collect()
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub EntryDate);

impl Clock for FixedClock {
    fn today(&self) -> EntryDate {
        self.0
    }
}

/// A suffix source that always returns the same text.
#[derive(Debug, Clone)]
pub struct FixedSuffix(pub String);

impl SuffixSource for FixedSuffix {
    fn next_suffix(&self) -> String {
        self.0.clone()
    }
}
