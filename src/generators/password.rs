// src/generators/password.rs
use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

pub const CHARS_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const CHARS_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CHARS_DIGITS: &str = "0123456789";
pub const CHARS_SYMBOLS: &str = "!@#$%*()_+-={}[]:;\"'<>,./?|\\~`";

/// Returned by [`PasswordGenerator::validate`] for the first rule a password breaks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("too few of {chars} (min {min}, you have {actual})")]
    TooFew {
        chars: String,
        min: usize,
        actual: usize,
    },

    #[error("too many of {chars} (max {max}, you have {actual})")]
    TooMany {
        chars: String,
        max: usize,
        actual: usize,
    },
}

/// A set of allowed characters with optional usage quotas.
///
/// A `min` or `max` of zero leaves that bound unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSetRule {
    min: usize,
    max: usize,
    chars: Vec<char>,
}

impl CharSetRule {
    /// Build a rule; repeated characters in `chars` are kept once, in first-seen order.
    pub fn new(min: usize, max: usize, chars: &str) -> Self {
        let mut seen = HashSet::new();
        let unique: Vec<char> = chars.chars().filter(|c| seen.insert(*c)).collect();

        Self {
            min,
            max,
            chars: unique,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The character set rendered back into a string, as used in error messages.
    pub fn charset(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    // A rule stops contributing once it reaches a non-zero max or has nothing to draw from
    fn is_exhausted(&self, used: usize) -> bool {
        self.chars.is_empty() || (self.max != 0 && used >= self.max)
    }
}

/// Collects rules before freezing them into a [`PasswordGenerator`].
#[derive(Debug, Clone, Default)]
pub struct PasswordGeneratorBuilder {
    rules: Vec<CharSetRule>,
}

impl PasswordGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule drawing from `chars` with the given quotas.
    pub fn char_set(self, min: usize, max: usize, chars: &str) -> Self {
        self.rule(CharSetRule::new(min, max, chars))
    }

    pub fn rule(mut self, rule: CharSetRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> PasswordGenerator {
        PasswordGenerator::new(self.rules)
    }
}

/// Generates and validates passwords against an ordered list of [`CharSetRule`]s.
///
/// The generator holds no randomness of its own; [`generate_with`](Self::generate_with)
/// takes the RNG from the caller, so one generator can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerator {
    rules: Vec<CharSetRule>,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PasswordGenerator {
    /// Create a generator from `rules`. With no rules, a single unconstrained
    /// rule over lowercase, uppercase, digits and symbols is installed.
    pub fn new(rules: Vec<CharSetRule>) -> Self {
        let rules = if rules.is_empty() {
            let all = format!("{}{}{}{}", CHARS_LOWER, CHARS_UPPER, CHARS_DIGITS, CHARS_SYMBOLS);
            vec![CharSetRule::new(0, 0, &all)]
        } else {
            rules
        };

        Self { rules }
    }

    pub fn builder() -> PasswordGeneratorBuilder {
        PasswordGeneratorBuilder::new()
    }

    pub fn rules(&self) -> &[CharSetRule] {
        &self.rules
    }

    /// Upper bound on the password length the rules allow, or `None` if some
    /// usable rule has no max. Overlapping sets can make the real limit lower.
    pub fn max_length(&self) -> Option<usize> {
        let mut total = 0;
        for rule in self.rules.iter().filter(|r| !r.chars.is_empty()) {
            if rule.max == 0 {
                return None;
            }
            total += rule.min.max(rule.max);
        }
        Some(total)
    }

    /// Generate a password using the thread-local RNG.
    pub fn generate(&self, required_length: usize) -> String {
        self.generate_with(required_length, &mut rand::thread_rng())
    }

    /// Generate a password of `required_length` characters drawing from `rng`.
    ///
    /// Every rule's minimum is placed first, then rules take turns adding one
    /// character each until the length is reached or every rule hits its max.
    /// In the latter case the password comes back shorter than requested.
    pub fn generate_with<R: Rng + ?Sized>(&self, required_length: usize, rng: &mut R) -> String {
        let mut password: Vec<char> = Vec::with_capacity(required_length);
        let mut used = vec![0usize; self.rules.len()];

        for (i, rule) in self.rules.iter().enumerate() {
            while used[i] < rule.min {
                // Prefer characters that keep other rules within their max
                let mut pool = self.candidates(rule, &used);
                if pool.is_empty() {
                    pool = rule.chars.clone();
                }
                match pool.choose(rng) {
                    Some(&c) => {
                        password.push(c);
                        self.record(c, &mut used);
                    }
                    None => {
                        log::debug!(
                            "Character set {:?} is empty, min {} cannot be met",
                            rule.charset(),
                            rule.min
                        );
                        break;
                    }
                }
            }
        }

        while password.len() < required_length {
            let mut added = false;
            for (i, rule) in self.rules.iter().enumerate() {
                if password.len() >= required_length {
                    break;
                }
                if rule.is_exhausted(used[i]) {
                    continue;
                }
                if let Some(&c) = self.candidates(rule, &used).choose(rng) {
                    password.push(c);
                    self.record(c, &mut used);
                    added = true;
                }
            }
            if !added {
                break;
            }
        }

        if password.len() < required_length {
            log::warn!(
                "Character set maxima allow only {} of {} requested characters",
                password.len(),
                required_length
            );
        }

        password.shuffle(rng);
        password.into_iter().collect()
    }

    // Characters of `rule` that would not push any rule past a non-zero max
    fn candidates(&self, rule: &CharSetRule, used: &[usize]) -> Vec<char> {
        rule.chars
            .iter()
            .copied()
            .filter(|&c| {
                self.rules
                    .iter()
                    .zip(used)
                    .all(|(r, &n)| r.max == 0 || n < r.max || !r.contains(c))
            })
            .collect()
    }

    // A character counts towards every rule whose set contains it
    fn record(&self, c: char, used: &mut [usize]) {
        for (rule, n) in self.rules.iter().zip(used.iter_mut()) {
            if rule.contains(c) {
                *n += 1;
            }
        }
    }

    /// Check `password` against every rule in order.
    ///
    /// A character is counted towards each rule whose set contains it, so
    /// overlapping sets share characters.
    pub fn validate(&self, password: &str) -> Result<(), PolicyError> {
        let mut used = vec![0usize; self.rules.len()];
        for c in password.chars() {
            for (i, rule) in self.rules.iter().enumerate() {
                if rule.contains(c) {
                    used[i] += 1;
                }
            }
        }

        for (rule, &actual) in self.rules.iter().zip(used.iter()) {
            if rule.min != 0 && actual < rule.min {
                return Err(PolicyError::TooFew {
                    chars: rule.charset(),
                    min: rule.min,
                    actual,
                });
            }
            if rule.max != 0 && actual > rule.max {
                return Err(PolicyError::TooMany {
                    chars: rule.charset(),
                    max: rule.max,
                    actual,
                });
            }
        }

        Ok(())
    }
}
