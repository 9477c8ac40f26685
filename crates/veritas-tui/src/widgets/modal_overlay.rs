//! Shared modal overlay utilities.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so a modal stands out from the page behind it
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}
