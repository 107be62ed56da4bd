use std::sync::Arc;
use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strkit::generators::{CHARS_DIGITS, CHARS_LOWER, CHARS_SYMBOLS, CHARS_UPPER};
use strkit::{password_hash, CharSetRule, PasswordGenerator};

fn configurations() -> Vec<Vec<CharSetRule>> {
    vec![
        vec![],
        vec![CharSetRule::new(0, 0, CHARS_LOWER)],
        vec![
            CharSetRule::new(1, 2, CHARS_SYMBOLS),
            CharSetRule::new(2, 0, CHARS_DIGITS),
            CharSetRule::new(0, 0, CHARS_LOWER),
        ],
        vec![
            CharSetRule::new(2, 5, CHARS_UPPER),
            CharSetRule::new(1, 4, CHARS_DIGITS),
            CharSetRule::new(0, 3, CHARS_SYMBOLS),
        ],
        vec![CharSetRule::new(3, 3, "xyz"), CharSetRule::new(0, 1, "!")],
        vec![
            CharSetRule::new(2, 4, CHARS_LOWER),
            CharSetRule::new(0, 6, "abc123"),
            CharSetRule::new(1, 0, CHARS_DIGITS),
        ],
    ]
}

fn expected_length(rules: &[CharSetRule], required: usize) -> usize {
    if rules.is_empty() || rules.iter().any(|r| r.max() == 0) {
        required
    } else {
        required.min(rules.iter().map(|r| r.max()).sum())
    }
}

#[test]
fn generated_passwords_respect_every_quota() {
    for rules in configurations() {
        let generator = PasswordGenerator::new(rules.clone());
        let minimum: usize = generator.rules().iter().map(|r| r.min()).sum();

        for seed in 0..32u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for required in [minimum, minimum + 1, minimum + 7, 30] {
                let password = generator.generate_with(required, &mut rng);
                assert_eq!(
                    password.chars().count(),
                    expected_length(&rules, required),
                    "length for {:?} at {}",
                    rules,
                    required
                );

                for rule in generator.rules() {
                    let used = password.chars().filter(|c| rule.contains(*c)).count();
                    assert!(rule.min() == 0 || used >= rule.min());
                    assert!(rule.max() == 0 || used <= rule.max());
                }
                assert!(generator.validate(&password).is_ok(), "{:?} rejected", password);
            }
        }
    }
}

#[test]
fn generator_can_be_shared_between_threads() {
    let generator = Arc::new(
        PasswordGenerator::builder()
            .char_set(2, 0, CHARS_UPPER)
            .char_set(2, 0, CHARS_DIGITS)
            .build(),
    );

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (0..50)
                    .map(|_| generator.generate_with(12, &mut rng))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for password in handle.join().unwrap() {
            assert_eq!(password.chars().count(), 12);
            assert!(generator.validate(&password).is_ok());
        }
    }
}

#[test]
fn hash_of_known_input() {
    assert_eq!(password_hash(["test"]), "A94A8FE5CCB19BA61C4C0873D391E987982FBBD3");
}
