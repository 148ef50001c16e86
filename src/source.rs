//! Option input parsing
//!
//! Accepts either a JSON array (objects with `id`/`label`, or bare strings)
//! or plain text with one label per line.

use std::collections::HashSet;

use serde::Deserialize;

use crate::choice::Item;
use crate::error::PickError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Full { id: u64, label: String },
    Label(String),
}

/// Parse option input into items with unique ids
pub fn parse_options(input: &str) -> Result<Vec<Item>, PickError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PickError::NoOptions);
    }

    let items = if trimmed.starts_with('[') {
        parse_json(trimmed)?
    } else {
        parse_lines(trimmed)
    };

    if items.is_empty() {
        return Err(PickError::NoOptions);
    }

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id) {
            return Err(PickError::InvalidOptions(format!(
                "duplicate option id {}",
                item.id
            )));
        }
    }

    Ok(items)
}

fn parse_json(input: &str) -> Result<Vec<Item>, PickError> {
    let raw: Vec<RawOption> =
        serde_json::from_str(input).map_err(|e| PickError::InvalidOptions(e.to_string()))?;

    // Bare strings get their 1-based position as id
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(i, option)| match option {
            RawOption::Full { id, label } => Item::new(id, label),
            RawOption::Label(label) => Item::new(i as u64 + 1, label),
        })
        .collect())
}

fn parse_lines(input: &str) -> Vec<Item> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| Item::new(i as u64 + 1, line))
        .collect()
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
