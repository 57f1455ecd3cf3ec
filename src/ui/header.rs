use crate::ui::app::Progress;
use crate::ui::theme::{FRAME_BORDER, STATUS_OK, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title line with entry progress.
pub struct Header {
    length: usize,
    progress: Progress,
    loading: bool,
}

impl Header {
    pub fn new(length: usize, progress: Progress, loading: bool) -> Self {
        Self {
            length,
            progress,
            loading,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let status = if self.loading {
            Span::styled("preparing…", text_style.add_modifier(Modifier::DIM))
        } else if self.progress.completed {
            Span::styled("complete", Style::default().fg(STATUS_OK))
        } else {
            Span::styled(
                format!("{}/{}", self.progress.entered, self.length),
                text_style,
            )
        };

        let line = Line::from(vec![
            Span::styled("  Enter code", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", text_style.add_modifier(Modifier::DIM)),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(FRAME_BORDER)),
        )
    }
}
