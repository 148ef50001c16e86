//! Filter strategies
//!
//! The controller only depends on the [`FilterFn`] signature. When the host
//! supplies none, [`default_filter`] is used.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::choice::Choice;

/// Host-supplied predicate: `(options, input_text) -> filtered options`
pub type FilterFn<T> = Box<dyn Fn(&[T], &str) -> Vec<T>>;

/// Case-insensitive substring match against the label, order preserved
pub fn default_filter<T: Choice>(options: &[T], input: &str) -> Vec<T> {
    let needle = input.to_lowercase();
    options
        .iter()
        .filter(|option| option.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Fuzzy (fzf-style) strategy, best match first
///
/// Space-separated terms must all match. Empty input keeps every option in
/// its original order.
pub fn fuzzy_filter<T: Choice>() -> FilterFn<T> {
    let matcher = SkimMatcherV2::default();

    Box::new(move |options: &[T], input: &str| {
        let terms: Vec<&str> = input.split_whitespace().collect();
        if terms.is_empty() {
            return options.to_vec();
        }

        let mut scored: Vec<(usize, i64)> = options
            .iter()
            .enumerate()
            .filter_map(|(idx, option)| {
                let mut total: i64 = 0;
                for term in &terms {
                    total += matcher.fuzzy_match(option.label(), term)?;
                }
                Some((idx, total))
            })
            .collect();

        // Stable sort keeps input order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .map(|(idx, _)| options[idx].clone())
            .collect()
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
