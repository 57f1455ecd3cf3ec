use ratatui::layout::Rect;

use crate::ui::theme::Theme;

/// Height of a row of cells: top border, content, bottom border.
pub const CELL_HEIGHT: u16 = 3;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas of `cells` cells, centred in `area`. Cells that do not fit are
/// clipped to the area, possibly to nothing.
pub fn cell_rects(area: Rect, cells: usize, theme: &Theme) -> Vec<Rect> {
    let row_width = theme.row_width(cells);
    let height = CELL_HEIGHT.min(area.height);
    let x0 = area.x + area.width.saturating_sub(row_width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let step = theme.cell_width.saturating_add(theme.inter_space);
    let cells = u16::try_from(cells).unwrap_or(u16::MAX);

    (0..cells)
        .map(|index| {
            Rect {
                x: x0.saturating_add(index.saturating_mul(step)),
                y,
                width: theme.cell_width,
                height,
            }
            .intersection(area)
        })
        .collect()
}
