//! Keyboard highlight cursor over the filtered list

/// `None` means nothing is highlighted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightCursor {
    index: Option<usize>,
}

impl HighlightCursor {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Move forward, wrapping from the last row to the first
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Move backward, wrapping from the first row (or no highlight) to the last
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(i) if i > 0 && i <= len => i - 1,
            _ => len - 1,
        });
    }

    /// Highlight `index` if it is within `len`
    pub fn set(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = Some(index);
        }
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
