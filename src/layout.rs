//! Screen regions of the last render
//!
//! The renderer records where the input box and the dropdown landed;
//! [`region_at`] maps a pointer position back onto them.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    /// Dropdown chrome (border, empty-state row)
    List,
    /// A row of the dropdown, as an index into the filtered options
    Row(usize),
}

/// Visible dropdown rows: `area` shows options `offset..offset + area.height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsRegion {
    pub area: Rect,
    pub offset: usize,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub list: Option<Rect>,
    pub rows: Option<RowsRegion>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Which recorded region, if any, contains the given cell
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if let Some(rows) = regions.rows {
        if rows.area.contains(position) {
            let index = rows.offset + (row - rows.area.y) as usize;
            if index < rows.count {
                return Some(Region::Row(index));
            }
        }
    }

    if regions.list.is_some_and(|area| area.contains(position)) {
        return Some(Region::List);
    }

    if regions.input.is_some_and(|area| area.contains(position)) {
        return Some(Region::Input);
    }

    None
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
