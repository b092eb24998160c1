//! Terminal user interface: deck viewer state, event loop, and widgets.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod component;
pub mod deck;
pub mod detail;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::flags::{FlagStore, MemoryFlagStore, TomlFlagStore, HINTS_DISMISSED};
use crate::models::{Deck, Testimonial};
use crate::pager::Pager;

// Re-export TUI components
pub use component::Component;
pub use deck::DeckWidget;
pub use detail::DetailOverlay;
pub use theme::Theme;

/// Top-level application state for the deck viewer.
///
/// Owned by the single TUI instance; created on mount, discarded on exit.
pub struct AppState {
    /// Carousel pagination state over the deck's cards
    pub pager: Pager<Testimonial>,
    /// Deck display title, if the file carries one
    pub deck_title: Option<String>,
    /// Selection cursor within the visible page
    pub selected: usize,
    /// Detail overlay, when open
    pub detail: Option<DetailOverlay>,
    /// Active theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Persistent flag store (hint dismissal)
    pub flags: Box<dyn FlagStore>,
    /// Set when the user quits
    pub should_quit: bool,
}

impl AppState {
    /// Builds the viewer state from a loaded deck.
    #[must_use]
    pub fn new(deck: Deck, config: Config, flags: Box<dyn FlagStore>) -> Self {
        let pager = Pager::with_breakpoints(deck.testimonials, config.deck.breakpoint_map());
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            pager,
            deck_title: deck.title,
            selected: 0,
            detail: None,
            theme,
            config,
            flags,
            should_quit: false,
        }
    }

    /// Whether the hint bar should be shown.
    #[must_use]
    pub fn hints_visible(&self) -> bool {
        self.config.ui.show_hints && !self.flags.get_flag(HINTS_DISMISSED)
    }

    /// Handles a viewport resize: repage and keep the cursor in range.
    pub fn on_resize(&mut self, width: u16) {
        self.pager.on_viewport_change(width);
        self.clamp_selected();
    }

    /// Handles a key event. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // An open overlay captures all input until it closes
        if let Some(overlay) = &mut self.detail {
            overlay.handle_input(key);
            if overlay.should_close() {
                self.detail = None;
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return Ok(true);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.pager.paginate(-1);
                self.selected = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.pager.paginate(1);
                self.selected = 0;
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                let visible = self.pager.visible_slice().len();
                if visible > 0 {
                    self.selected = (self.selected + 1) % visible;
                }
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                let visible = self.pager.visible_slice().len();
                if visible > 0 {
                    self.selected = (self.selected + visible - 1) % visible;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let page = (c as usize) - ('1' as usize);
                self.pager.go_to_page(page);
                self.selected = 0;
            }
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('?') => {
                // Toggling off is remembered across runs
                let dismissed = self.flags.get_flag(HINTS_DISMISSED);
                self.flags.set_flag(HINTS_DISMISSED, !dismissed)?;
            }
            _ => {}
        }

        Ok(false)
    }

    /// Opens the detail overlay for the selected card.
    fn open_detail(&mut self) {
        if let Some(testimonial) = self.pager.visible_slice().get(self.selected) {
            self.detail = Some(DetailOverlay::new(testimonial.clone()));
        }
    }

    fn clamp_selected(&mut self) {
        let visible = self.pager.visible_slice().len();
        if visible == 0 {
            self.selected = 0;
        } else if self.selected >= visible {
            self.selected = visible - 1;
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Loads the deck and runs the viewer until the user quits.
pub fn run(deck_path: &Path) -> Result<()> {
    let deck = Deck::load(deck_path)?;
    let config = Config::load().unwrap_or_default();

    let flags: Box<dyn FlagStore> = match TomlFlagStore::open() {
        Ok(store) => Box::new(store),
        Err(_) => Box::new(MemoryFlagStore::default()),
    };

    let mut state = AppState::new(deck, config, flags);

    let mut terminal = setup_terminal()?;
    state.on_resize(terminal.size().map(|size| size.width).unwrap_or(80));

    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if state.handle_key(key)? {
                        break;
                    }
                }
                Event::Resize(width, _) => state.on_resize(width),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let hint_height = if state.hints_visible() { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(2),           // Title bar
            Constraint::Min(10),             // Carousel
            Constraint::Length(hint_height), // Hint bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    DeckWidget::render(
        f,
        chunks[1],
        &state.pager,
        state.selected,
        state.config.deck.preview_chars,
        &state.theme,
    );
    if state.hints_visible() {
        render_hint_bar(f, chunks[2], state);
    }

    if let Some(overlay) = &state.detail {
        overlay.render(f, f.area(), &state.theme);
    }
}

/// Render title bar with deck name and card count
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = state.deck_title.as_deref().unwrap_or(APP_NAME);
    let text = format!(" {} ({} cards)", title, state.pager.len());

    let widget = Paragraph::new(text).style(
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(widget, area);
}

/// Render the key hint bar
fn render_hint_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = " \u{2190}/\u{2192}: page | \u{2191}/\u{2193}: select | 1-9: jump | Enter: detail | ?: hide hints | q: quit";
    let widget = Paragraph::new(hints).style(Style::default().fg(state.theme.text_muted));
    f.render_widget(widget, area);
}
