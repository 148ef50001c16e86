use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Center a `width` x `height` box inside `bounds`, clamped to fit
pub fn centered_rect(bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    Rect {
        x: bounds.x + (bounds.width - width) / 2,
        y: bounds.y + (bounds.height - height) / 2,
        width,
        height,
    }
}

/// Place a dropdown directly under `anchor`, shrinking it to stay inside `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.bottom();
    let available_height = bounds.bottom().saturating_sub(popup_y);
    let available_width = bounds.right().saturating_sub(anchor.x);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(available_width),
        height: height.min(available_height),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
