//! Deterministic weak-pattern penalties.

use std::collections::HashSet;

use super::Classes;

const VERY_SHORT: i32 = -35;
const SHORT: i32 = -25;
const SHORT_NUMERIC: i32 = -15;
const SEQUENTIAL: i32 = -20;
const LOW_DIVERSITY: i32 = -10;
const SINGLE_CHAR: i32 = -10;

/// Sum of all penalties that apply to `chars`.
pub(crate) fn total(chars: &[char], classes: Classes) -> i32 {
    let len = chars.len();
    let mut adjustment = 0;

    // Tiers are exclusive: only the harsher one applies below six.
    adjustment += match len {
        0..=5 => VERY_SHORT,
        6..=7 => SHORT,
        _ => 0,
    };

    if len < 10 && classes.only_digits() {
        adjustment += SHORT_NUMERIC;
    }

    if is_sequential(chars) {
        adjustment += SEQUENTIAL;
    }

    let distinct = chars.iter().collect::<HashSet<_>>().len();

    if len >= 4 && (distinct as f64) / (len as f64) < 0.5 {
        adjustment += LOW_DIVERSITY;
    }

    if len >= 3 && distinct == 1 {
        adjustment += SINGLE_CHAR;
    }

    adjustment
}

/// True when every step between neighbours is +1, or every step is -1.
pub(crate) fn is_sequential(chars: &[char]) -> bool {
    if chars.len() < 3 {
        return false;
    }

    let mut ascending = true;
    let mut descending = true;

    for pair in chars.windows(2) {
        let diff = pair[1] as i64 - pair[0] as i64;
        if diff != 1 {
            ascending = false;
        }
        if diff != -1 {
            descending = false;
        }
        if !ascending && !descending {
            return false;
        }
    }

    ascending || descending
}
