//! Password generation.

use std::collections::HashSet;

use zeroize::Zeroizing;

use super::charset::CharPool;
use super::GenerationConfig;
use crate::error::{GenerateError, Result};
use crate::random::{self, RandomSource};

/// Generate a password for `config`, drawing every character and the final
/// shuffle from `rng`.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let pool = CharPool::build(config);

    if pool.is_empty() {
        log::debug!("rejecting config: no usable character sets");
        return Err(GenerateError::NoCharsets);
    }

    let distinct = pool.distinct_count();
    if config.exclude_duplicates && config.length > distinct {
        log::debug!(
            "rejecting config: length {} exceeds {} unique chars",
            config.length,
            distinct
        );
        return Err(GenerateError::NotEnoughUniqueChars);
    }

    log::debug!(
        "pool: {} groups, {} chars, {} distinct",
        pool.groups.len(),
        pool.all.len(),
        distinct
    );

    assemble(&pool, config.length, config.exclude_duplicates, rng)
}

/// Generate with the operating system CSPRNG.
pub fn generate_secure(config: &GenerationConfig) -> Result<String> {
    generate(config, &mut random::system())
}

fn assemble<R>(pool: &CharPool, length: usize, exclude_duplicates: bool, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    if pool.is_empty() || length == 0 {
        return Ok(String::new());
    }

    let mut out: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));
    let mut used: HashSet<char> = HashSet::new();

    // Coverage: one character per group while there is room.
    for group in &pool.groups {
        if out.len() >= length {
            break;
        }
        let candidates = Zeroizing::new(available(&group.chars, &used, exclude_duplicates));
        if candidates.is_empty() {
            continue;
        }
        let (ch, next) = pick(&candidates, used, rng)?;
        used = next;
        out.push(ch);
    }

    // Fill from the whole pool.
    while out.len() < length {
        let mut candidates = Zeroizing::new(available(&pool.all, &used, exclude_duplicates));
        if candidates.is_empty() {
            candidates = Zeroizing::new(pool.all.clone());
        }
        let (ch, next) = pick(&candidates, used, rng)?;
        used = next;
        out.push(ch);
    }

    random::shuffle(out.as_mut_slice(), rng)?;

    Ok(out.iter().collect())
}

/// Characters of `chars` that may still be drawn.
fn available(chars: &[char], used: &HashSet<char>, exclude_duplicates: bool) -> Vec<char> {
    if exclude_duplicates {
        chars.iter().copied().filter(|c| !used.contains(c)).collect()
    } else {
        chars.to_vec()
    }
}

/// Draw one character uniformly from `candidates` and record it as used.
fn pick<R>(candidates: &[char], mut used: HashSet<char>, rng: &mut R) -> Result<(char, HashSet<char>)>
where
    R: RandomSource + ?Sized,
{
    let ch = candidates[rng.below(candidates.len())?];
    used.insert(ch);
    Ok((ch, used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandomError;
    use crate::pass::Category;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Always draws index zero.
    struct First;

    impl RandomSource for First {
        fn below(&mut self, _bound: usize) -> std::result::Result<usize, RandomError> {
            Ok(0)
        }
    }

    /// Fails on every draw.
    struct Broken;

    impl RandomSource for Broken {
        fn below(&mut self, _bound: usize) -> std::result::Result<usize, RandomError> {
            Err(RandomError::EmptyRange)
        }
    }

    fn lower_only(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
            exclude_duplicates: true,
            exclude_similar: false,
        }
    }

    fn everything(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_duplicates: false,
            exclude_similar: false,
        }
    }

    #[test]
    fn scripted_source_gives_exact_output() {
        // coverage takes 'a', fill takes 'b' then 'c', shuffle with j=0 yields "bca"
        let pass = generate(&lower_only(3), &mut First).unwrap();
        assert_eq!(pass, "bca");
    }

    #[test]
    fn scripted_source_repeats_without_exclusion() {
        let cfg = GenerationConfig {
            exclude_duplicates: false,
            ..lower_only(4)
        };
        assert_eq!(generate(&cfg, &mut First).unwrap(), "aaaa");
    }

    #[test]
    fn coverage_pass_draws_one_per_group() {
        let pass = generate(&everything(4), &mut First).unwrap();
        let mut chars: Vec<char> = pass.chars().collect();
        chars.sort_unstable();
        let mut expected = vec!['a', 'A', '0', '!'];
        expected.sort_unstable();
        assert_eq!(chars, expected);
    }

    #[test]
    fn coverage_stops_at_length() {
        let pass = generate(&everything(2), &mut First).unwrap();
        let mut chars: Vec<char> = pass.chars().collect();
        chars.sort_unstable();
        assert_eq!(chars, vec!['A', 'a']);
    }

    #[test]
    fn zero_length_is_empty_success() {
        assert_eq!(generate(&lower_only(0), &mut First).unwrap(), "");
    }

    #[test]
    fn no_charsets_wins_over_zero_length() {
        let cfg = GenerationConfig {
            lowercase: false,
            ..lower_only(0)
        };
        assert!(matches!(
            generate(&cfg, &mut First),
            Err(GenerateError::NoCharsets)
        ));
    }

    #[test]
    fn random_failure_propagates() {
        let err = generate(&lower_only(8), &mut Broken).unwrap_err();
        assert!(matches!(err, GenerateError::Random(_)));
    }

    #[test]
    fn exhausting_the_pool_exactly() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let pass = generate(&lower_only(26), &mut rng).unwrap();
        let mut chars: Vec<char> = pass.chars().collect();
        chars.sort_unstable();
        assert_eq!(chars, Category::Lowercase.alphabet().chars().collect::<Vec<_>>());
    }

    #[test]
    fn available_skips_used() {
        let used: HashSet<char> = ['b'].into_iter().collect();
        assert_eq!(available(&['a', 'b', 'c'], &used, true), vec!['a', 'c']);
        assert_eq!(available(&['a', 'b', 'c'], &used, false), vec!['a', 'b', 'c']);
    }

    #[test]
    fn pick_records_choice() {
        let (ch, used) = pick(&['x', 'y'], HashSet::new(), &mut First).unwrap();
        assert_eq!(ch, 'x');
        assert!(used.contains(&'x'));
    }
}
