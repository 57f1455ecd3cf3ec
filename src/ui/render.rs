use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::Frame;

use crate::config::FieldStyle;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{cell_rects, layout_regions, CELL_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::view::{CellView, PinView};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(
        app.field().len(),
        app.progress(),
        app.field().is_loading(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let row = Rect {
        height: CELL_HEIGHT.min(body.height),
        y: body.y + body.height.saturating_sub(CELL_HEIGHT) / 2,
        ..body
    };
    frame.render_widget(PinRow::new(app.view(), app.theme()), row);

    if let Some(position) = cursor_position(app.view(), app.theme(), row) {
        frame.set_cursor_position(position);
    }

    let message_area = Rect {
        y: row.y + row.height,
        height: body.height.saturating_sub(row.y + row.height - body.y).min(1),
        ..body
    };
    if let Some(message) = status_message(app) {
        let style = Style::default().fg(app.theme().error);
        frame.render_widget(
            Paragraph::new(Line::styled(message, style)).alignment(Alignment::Center),
            message_area,
        );
    }

    frame.render_widget(Footer::widget(footer), footer);
}

fn status_message(app: &App) -> Option<String> {
    if !app.view().error_visible() {
        return None;
    }
    Some(match app.last_error() {
        Some(err) => format!("{}: {}", err.code(), err.kind()),
        None => "input error".to_string(),
    })
}

/// Terminal cursor goes to the middle of the focused cell.
fn cursor_position(view: &PinView, theme: &Theme, row: Rect) -> Option<Position> {
    let index = view.cells().iter().position(|cell| cell.focused)?;
    let rect = *cell_rects(row, view.cells().len(), theme).get(index)?;
    if rect.is_empty() {
        return None;
    }
    Some(Position::new(
        rect.x + rect.width / 2,
        rect.y + rect.height / 2,
    ))
}

/// A row of cells drawn from the view handles.
pub struct PinRow<'a> {
    view: &'a PinView,
    theme: &'a Theme,
}

impl<'a> PinRow<'a> {
    pub fn new(view: &'a PinView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn block(&self, cell: &CellView) -> Block<'static> {
        let color = if cell.focused {
            self.theme.active_border
        } else {
            self.theme.border
        };
        let border_style = if cell.focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        let borders = match self.theme.variant {
            FieldStyle::None => Borders::NONE,
            FieldStyle::Underline => Borders::BOTTOM,
            FieldStyle::Box => Borders::ALL,
        };
        Block::default().borders(borders).border_style(border_style)
    }

    fn content(&self, cell: &CellView) -> Line<'static> {
        let text = Style::default().fg(self.theme.text);
        match (cell.glyph, cell.placeholder_visible, cell.placeholder) {
            (Some(glyph), _, _) => Line::styled(glyph.to_string(), text.add_modifier(Modifier::BOLD)),
            (None, true, Some(placeholder)) => {
                Line::styled(placeholder.to_string(), text.add_modifier(Modifier::DIM))
            }
            _ => Line::raw(" "),
        }
    }
}

impl Widget for PinRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = cell_rects(area, self.view.cells().len(), self.theme);
        for (cell, rect) in self.view.cells().iter().zip(rects) {
            if rect.is_empty() {
                continue;
            }
            // Content sits on the middle line regardless of border variant.
            let middle = Rect {
                y: rect.y + rect.height / 2,
                height: 1.min(rect.height),
                ..rect
            };
            self.block(cell).render(rect, buf);
            Paragraph::new(self.content(cell))
                .alignment(Alignment::Center)
                .render(middle, buf);
        }
    }
}
