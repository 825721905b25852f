//! TUI renderer for the interactive form.
//!
//! Owns the terminal for the lifetime of the session. Each iteration draws
//! the screen built from `App`, waits for input no longer than the nearest
//! timer deadline, then lets `App` advance its timers.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};
use walink_runtime::ClipboardWriter;

use crate::app::App;
use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::views::tui::{FormView, LinkPanelView, PreviewView, StatusBarView};

const MAX_POLL: Duration = Duration::from_millis(250);

pub struct TuiRenderer;

impl TuiRenderer {
    /// Run the form until the user quits.
    pub fn run<C: ClipboardWriter>(app: &mut App<C>) -> Result<()> {
        // Nothing to undo if this fails
        Self::install_restore_handler()?;

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        tracing::debug!("tui session started");
        let result = Self::event_loop(&mut terminal, app);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        tracing::debug!("tui session ended");

        result
    }

    /// Restore the terminal on SIGINT/SIGTERM. Can only be installed once
    /// per process.
    fn install_restore_handler() -> Result<()> {
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;
        Ok(())
    }

    fn event_loop<B: Backend, C: ClipboardWriter>(
        terminal: &mut Terminal<B>,
        app: &mut App<C>,
    ) -> Result<()> {
        loop {
            let width = terminal.size()?.width;
            let screen = build_screen_view_model(app, width);
            terminal.draw(|f| render_screen(f, &screen))?;

            let timeout = app.next_wakeup(Instant::now()).min(MAX_POLL);
            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                app.handle_key(key, Instant::now());
            }

            app.on_tick(Instant::now(), Utc::now());

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }
}

/// Draw one frame: title, form column, optional phone preview, status bar.
pub fn render_screen(f: &mut Frame, screen: &TuiScreenViewModel) {
    let [title_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(f.area());

    let title = Paragraph::new(Span::styled(
        screen.title.as_str(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, title_area);

    let (form_column, preview_area) = if screen.preview.visible {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(PreviewView::WIDTH + 2)])
                .areas(body_area);
        (left, Some(right))
    } else {
        (body_area, None)
    };

    let [form_area, link_area] =
        Layout::vertical([Constraint::Length(FormView::HEIGHT), Constraint::Length(4)])
            .areas(form_column);

    let form = FormView::new(&screen.form);
    let cursor = form.cursor(form_area);
    f.render_widget(form, form_area);
    f.render_widget(LinkPanelView::new(&screen.link), link_area);

    if let Some(area) = preview_area {
        f.render_widget(PreviewView::new(&screen.preview), centered_column(area));
    }

    f.render_widget(StatusBarView::new(&screen.status_bar), status_area);

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }
}

fn centered_column(area: Rect) -> Rect {
    let width = PreviewView::WIDTH.min(area.width);
    let height = PreviewView::HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}
