//! Fuzzy resolution of free-text app entries
//!
//! Users type things like "vs code" or "chrom"; this module maps them to the
//! canonical names in [crate::aliases::APP_ALIASES]. Anything that doesn't
//! resemble a known alias passes through unchanged, so arbitrary commands and
//! paths still work as app entries.
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::aliases::APP_ALIASES;

/// Minimum similarity ratio an alias key has to clear to count as a match
const MATCH_CUTOFF: f64 = 0.6;

/// A string-similarity function behind a narrow interface
///
/// Scores are normalized to `0.0..=1.0` where `1.0` is an exact match. `None`
/// means the strings bear no resemblance at all. Keeping this a trait lets the
/// matching algorithm be swapped and tested independently of the alias table.
pub trait Matcher {
    fn similarity(&self, candidate: &str, input: &str) -> Option<f64>;
}

/// Default [Matcher], backed by [SkimMatcherV2]
///
/// Skim scores are unbounded, so the ratio is taken against the candidate's
/// self-match score: an exact match is `1.0`, partial matches fall off from
/// there, and inputs with characters the candidate doesn't contain score `None`.
pub struct SkimRatio {
    matcher: SkimMatcherV2,
}

impl Default for SkimRatio {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }
}

impl Matcher for SkimRatio {
    #[allow(clippy::cast_precision_loss)]
    fn similarity(&self, candidate: &str, input: &str) -> Option<f64> {
        let best = self.matcher.fuzzy_match(candidate, candidate)?;

        if best <= 0 {
            return None;
        }

        let score = self.matcher.fuzzy_match(candidate, input)?;

        Some(score as f64 / best as f64)
    }
}

/// Resolve a free-text app entry to a canonical app name
///
/// The input is lowercased and scored against every alias key; the single best
/// key wins if it clears [MATCH_CUTOFF]. No key clearing the cutoff means the
/// original input is returned unchanged (fallback, not an error).
pub fn resolve_app_name(input: &str, matcher: &dyn Matcher) -> String {
    let query = input.to_lowercase();

    let best = APP_ALIASES
        .iter()
        .filter_map(|(key, canonical)| {
            matcher
                .similarity(key, &query)
                .map(|score| (score, *canonical))
        })
        .max_by(|a, b| a.0.total_cmp(&b.0));

    match best {
        Some((score, canonical)) if score >= MATCH_CUTOFF => canonical.to_string(),
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn resolve(input: &str) -> String {
        resolve_app_name(input, &SkimRatio::default())
    }

    #[test]
    fn exact_alias_resolves() {
        assert_eq!(resolve("vs code"), "Visual Studio Code");
        assert_eq!(resolve("discord"), "Discord");
    }

    #[test]
    fn unknown_input_passes_through() {
        assert_eq!(resolve("totally-unknown-xyz"), "totally-unknown-xyz");
    }

    #[test]
    fn all_alias_keys_are_case_insensitive() {
        for (key, canonical) in APP_ALIASES {
            assert_eq!(resolve(&key.to_uppercase()), *canonical, "key: {key}");
        }
    }

    /// [Matcher] scoring a single key with a fixed ratio
    struct KeyedScore {
        key: &'static str,
        score: f64,
    }

    impl Matcher for KeyedScore {
        fn similarity(&self, candidate: &str, _input: &str) -> Option<f64> {
            (candidate == self.key).then_some(self.score)
        }
    }

    #[test]
    fn cutoff_applies_to_any_matcher() {
        let clears = KeyedScore {
            key: "discord",
            score: 0.6,
        };
        let misses = KeyedScore {
            key: "discord",
            score: 0.59,
        };

        assert_eq!(resolve_app_name("whatever", &clears), "Discord");
        assert_eq!(resolve_app_name("whatever", &misses), "whatever");
    }
}
