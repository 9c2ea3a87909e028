//! Generation properties across many seeded runs.

use std::collections::HashSet;

use keypass::pass::LOOK_ALIKES;
use keypass::{generate, generate_secure, Category, GenerateError, GenerationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn config(length: usize) -> GenerationConfig {
    GenerationConfig {
        length,
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
        exclude_duplicates: false,
        exclude_similar: false,
    }
}

/// Every on/off combination of the four categories with at least one selected.
fn category_combinations() -> Vec<GenerationConfig> {
    (1u8..16)
        .map(|mask| GenerationConfig {
            lowercase: mask & 1 != 0,
            uppercase: mask & 2 != 0,
            digits: mask & 4 != 0,
            symbols: mask & 8 != 0,
            ..config(0)
        })
        .collect()
}

fn allowed(cfg: &GenerationConfig) -> HashSet<char> {
    cfg.selected()
        .into_iter()
        .flat_map(|cat| cat.filtered(cfg.exclude_similar))
        .collect()
}

fn category_of(c: char) -> Category {
    Category::ALL
        .into_iter()
        .find(|cat| cat.alphabet().contains(c))
        .expect("generated char outside every alphabet")
}

#[test]
fn test_length_and_alphabet_with_duplicates_allowed() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    for base in category_combinations() {
        for exclude_similar in [false, true] {
            for length in [4, 7, 16, 64] {
                let cfg = GenerationConfig {
                    length,
                    exclude_similar,
                    ..base
                };
                let allowed = allowed(&cfg);
                let pass = generate(&cfg, &mut rng).unwrap();

                assert_eq!(pass.chars().count(), length);
                assert!(pass.chars().all(|c| allowed.contains(&c)), "{pass}");
            }
        }
    }
}

#[test]
fn test_distinct_when_duplicates_excluded() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for base in category_combinations() {
        let cfg = GenerationConfig {
            exclude_duplicates: true,
            exclude_similar: true,
            ..base
        };
        let distinct = allowed(&cfg).len();

        for length in [4, distinct / 2, distinct] {
            let cfg = GenerationConfig { length, ..cfg };
            let pass = generate(&cfg, &mut rng).unwrap();
            let unique: HashSet<char> = pass.chars().collect();
            assert_eq!(pass.chars().count(), length);
            assert_eq!(unique.len(), length);
        }
    }
}

#[test]
fn test_too_long_without_duplicates() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    for base in category_combinations() {
        let cfg = GenerationConfig {
            exclude_duplicates: true,
            ..base
        };
        let length = allowed(&cfg).len() + 1;
        let err = generate(&GenerationConfig { length, ..cfg }, &mut rng).unwrap_err();
        assert!(matches!(err, GenerateError::NotEnoughUniqueChars));
    }
}

#[test]
fn test_digits_only_unique_limit() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let cfg = GenerationConfig {
        digits: true,
        exclude_duplicates: true,
        exclude_similar: true,
        ..config(8)
    };
    let pass = generate(&cfg, &mut rng).unwrap();
    let mut chars: Vec<char> = pass.chars().collect();
    chars.sort_unstable();
    assert_eq!(chars.into_iter().collect::<String>(), "23456789");

    let err = generate(&GenerationConfig { length: 9, ..cfg }, &mut rng).unwrap_err();
    assert!(matches!(err, GenerateError::NotEnoughUniqueChars));
}

#[test]
fn test_no_charsets() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let err = generate(&config(10), &mut rng).unwrap_err();
    assert!(matches!(err, GenerateError::NoCharsets));
    assert_eq!(err.to_string(), "no character sets selected");
}

#[test]
fn test_every_category_covered() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);

    for base in category_combinations() {
        let selected = base.selected();
        for exclude_duplicates in [false, true] {
            for _ in 0..50 {
                let cfg = GenerationConfig {
                    length: selected.len(),
                    exclude_duplicates,
                    ..base
                };
                let pass = generate(&cfg, &mut rng).unwrap();
                let seen: HashSet<Category> = pass.chars().map(category_of).collect();
                assert_eq!(seen.len(), selected.len(), "{pass}");
            }
        }
    }
}

#[test]
fn test_coverage_is_not_positional() {
    // With one lowercase and many symbols, the lowercase char must not always lead.
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let cfg = GenerationConfig {
        lowercase: true,
        symbols: true,
        ..config(2)
    };

    let mut firsts = HashSet::new();
    for _ in 0..200 {
        let pass = generate(&cfg, &mut rng).unwrap();
        firsts.insert(category_of(pass.chars().next().unwrap()));
    }
    assert_eq!(firsts.len(), 2);
}

#[test]
fn test_lowercase_eight_unique() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let cfg = GenerationConfig {
        lowercase: true,
        exclude_duplicates: true,
        ..config(8)
    };
    let pass = generate(&cfg, &mut rng).unwrap();
    assert_eq!(pass.len(), 8);
    assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
    assert_eq!(pass.chars().collect::<HashSet<_>>().len(), 8);
}

#[test]
fn test_lowercase_without_look_alikes() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let cfg = GenerationConfig {
        lowercase: true,
        exclude_duplicates: true,
        exclude_similar: true,
        ..config(5)
    };

    for _ in 0..100 {
        let pass = generate(&cfg, &mut rng).unwrap();
        assert_eq!(pass.len(), 5);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
        assert!(!pass.contains(['i', 'l', 'o']));
        assert_eq!(pass.chars().collect::<HashSet<_>>().len(), 5);
    }
}

#[test]
fn test_look_alikes_never_appear() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let cfg = GenerationConfig {
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
        exclude_similar: true,
        ..config(64)
    };

    for _ in 0..50 {
        let pass = generate(&cfg, &mut rng).unwrap();
        assert!(!pass.chars().any(|c| LOOK_ALIKES.contains(c)));
    }
}

#[test]
fn test_same_seed_same_password() {
    let cfg = GenerationConfig {
        lowercase: true,
        digits: true,
        ..config(20)
    };
    let a = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(77)).unwrap();
    let b = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_secure_generation() {
    let cfg = GenerationConfig {
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
        exclude_duplicates: true,
        exclude_similar: true,
        ..config(32)
    };
    let a = generate_secure(&cfg).unwrap();
    let b = generate_secure(&cfg).unwrap();
    assert_eq!(a.chars().count(), 32);
    assert_ne!(a, b);
}
