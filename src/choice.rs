//! Selectable candidates
//!
//! Anything the autocomplete can offer implements [`Choice`]. Identity for
//! selection and highlighting is always the `id`, never the label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable candidate with a stable identifier and a display label
pub trait Choice: Clone + 'static {
    type Id: PartialEq + fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn label(&self) -> &str;

    /// Whether two candidates refer to the same option
    fn same_choice(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// The stock option type: numeric id plus label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub label: String,
}

impl Item {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl Choice for Item {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
