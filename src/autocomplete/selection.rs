//! Selected-option bookkeeping

use serde::Serialize;

use crate::choice::Choice;

/// What `on_change` receives: one option, or all of them in multiple mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selection<T> {
    Single(T),
    Multiple(Vec<T>),
}

impl<T> Selection<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Selection::Single(option) => std::slice::from_ref(option),
            Selection::Multiple(options) => options,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Selection::Single(option) => vec![option],
            Selection::Multiple(options) => options,
        }
    }
}

/// Insertion-ordered set of selected options, keyed by id
#[derive(Debug, Clone)]
pub struct SelectedSet<T> {
    items: Vec<T>,
}

impl<T> Default for SelectedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Choice> SelectedSet<T> {
    /// Seed from an initial value; keeps only the first option unless `multiple`
    pub fn from_value(value: Vec<T>, multiple: bool) -> Self {
        let mut set = Self::default();
        for option in value {
            if !multiple && !set.items.is_empty() {
                log::warn!("single-select value has more than one option, keeping the first");
                break;
            }
            if !set.contains(&option) {
                set.items.push(option);
            }
        }
        set
    }

    pub fn contains(&self, option: &T) -> bool {
        self.items.iter().any(|selected| selected.same_choice(option))
    }

    /// Flip membership (multiple) or replace everything (single)
    pub fn toggle(&mut self, option: &T, multiple: bool) {
        if multiple {
            match self.items.iter().position(|s| s.same_choice(option)) {
                Some(pos) => {
                    self.items.remove(pos);
                }
                None => self.items.push(option.clone()),
            }
        } else {
            self.items.clear();
            self.items.push(option.clone());
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current selection in the shape the host expects
    pub fn snapshot(&self, multiple: bool) -> Option<Selection<T>> {
        if multiple {
            Some(Selection::Multiple(self.items.clone()))
        } else {
            self.items.first().cloned().map(Selection::Single)
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
