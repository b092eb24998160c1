//! Carousel widget rendering the current page of testimonial cards.
//!
//! Cards are laid out side by side, one column per visible item. Below the
//! cards a navigation row shows one dot per page with the current page
//! emphasized and a `page / pages` counter; the row is omitted entirely
//! when the deck fits on a single page.

use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Testimonial;
use crate::pager::Pager;
use crate::tui::Theme;

/// Carousel page widget.
pub struct DeckWidget;

impl DeckWidget {
    /// Render the visible page of cards plus the navigation row.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        pager: &Pager<Testimonial>,
        selected: usize,
        preview_chars: usize,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(8),    // Cards
                Constraint::Length(2), // Dots + counter
            ])
            .split(area);

        Self::render_cards(f, chunks[0], pager, selected, preview_chars, theme);

        if pager.has_multiple_pages() {
            Self::render_navigation(f, chunks[1], pager, theme);
        }
    }

    /// Render the current page's cards side by side.
    fn render_cards(
        f: &mut Frame,
        area: Rect,
        pager: &Pager<Testimonial>,
        selected: usize,
        preview_chars: usize,
        theme: &Theme,
    ) {
        let visible = pager.visible_slice();
        if visible.is_empty() {
            let empty = Paragraph::new("No testimonials in this deck")
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
            return;
        }

        let constraints: Vec<Constraint> = visible
            .iter()
            .map(|_| Constraint::Ratio(1, visible.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints(constraints)
            .split(area);

        for (idx, (testimonial, column)) in visible.iter().zip(columns.iter()).enumerate() {
            Self::render_card(f, *column, testimonial, idx == selected, preview_chars, theme);
        }
    }

    /// Render a single card.
    fn render_card(
        f: &mut Frame,
        area: Rect,
        testimonial: &Testimonial,
        is_selected: bool,
        preview_chars: usize,
        theme: &Theme,
    ) {
        let border_style = if is_selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.primary)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (preview, truncated) = truncate_quote(&testimonial.quote, preview_chars);

        let mut lines = vec![Line::from(Span::styled(
            format!("\u{201c}{preview}\u{201d}"),
            Style::default().fg(theme.text),
        ))];
        if truncated {
            lines.push(Line::from(Span::styled(
                "Enter: read more",
                Style::default().fg(theme.text_muted),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            testimonial.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            testimonial.title.clone(),
            Style::default().fg(theme.text_secondary),
        )));

        let card = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(card, inner);
    }

    /// Render the dot row and page counter.
    fn render_navigation(f: &mut Frame, area: Rect, pager: &Pager<Testimonial>, theme: &Theme) {
        let mut dots: Vec<Span> = vec![Span::styled("\u{2190} ", Style::default().fg(theme.text_muted))];
        for page in 0..pager.page_count() {
            let dot = if page == pager.current_page() {
                Span::styled(
                    "\u{25cf} ",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("\u{25cb} ", Style::default().fg(theme.text_muted))
            };
            dots.push(dot);
        }
        dots.push(Span::styled("\u{2192}", Style::default().fg(theme.text_muted)));

        let counter = format!("{} / {}", pager.current_page() + 1, pager.page_count());

        let nav = Paragraph::new(vec![
            Line::from(dots),
            Line::from(Span::styled(counter, Style::default().fg(theme.text_secondary))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(nav, area);
    }
}

/// Truncates a quote to a character budget, reporting whether anything was
/// cut. Cuts on a char boundary and appends an ellipsis.
#[must_use]
pub fn truncate_quote(text: &str, max_chars: usize) -> (String, bool) {
    if text.chars().count() <= max_chars {
        return (text.to_string(), false);
    }
    let cut: String = text.chars().take(max_chars).collect();
    (format!("{}...", cut.trim_end()), true)
}
