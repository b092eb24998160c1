//! Detail overlay showing a single testimonial in full.
//!
//! Cards truncate long quotes; this modal is where the whole text lives.
//! Opened from the carousel with the selected item, dismissed with
//! Esc/Enter/q.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Testimonial;
use crate::tui::component::Component;
use crate::tui::Theme;

/// Events emitted by the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    /// User dismissed the overlay
    Closed,
}

/// Modal overlay presenting one testimonial in full.
#[derive(Debug, Clone)]
pub struct DetailOverlay {
    testimonial: Testimonial,
    closed: bool,
}

impl DetailOverlay {
    /// Creates an overlay for the given testimonial.
    #[must_use]
    pub const fn new(testimonial: Testimonial) -> Self {
        Self {
            testimonial,
            closed: false,
        }
    }

    /// Centers a popup rect of the given percentage size within `area`.
    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}

impl Component for DetailOverlay {
    type Event = DetailEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.closed = true;
                Some(DetailEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = Self::centered_rect(70, 70, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Testimonial ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Quote
                Constraint::Length(2), // Author
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let quote = Paragraph::new(format!("\u{201c}{}\u{201d}", self.testimonial.quote))
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true });
        f.render_widget(quote, chunks[0]);

        let author = Paragraph::new(vec![
            Line::from(Span::styled(
                self.testimonial.name.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.testimonial.title.clone(),
                Style::default().fg(theme.text_secondary),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(author, chunks[1]);

        let help = Paragraph::new("Esc/Enter: close")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
