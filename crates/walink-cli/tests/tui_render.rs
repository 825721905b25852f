//! Renders the interactive screen into ratatui's TestBackend and checks
//! what lands in the buffer.

use std::time::Instant;

use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use walink::app::App;
use walink::presentation::presenters::build_screen_view_model;
use walink::presentation::renderers::tui::render_screen;
use walink::presentation::views::tui::FormView;
use walink_runtime::Config;
use walink_testing::RecordingClipboard;

fn wall() -> DateTime<Utc> {
    // 12:30 in the default -03:00 offset
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap()
}

fn app(phone: &str, message: &str) -> App<RecordingClipboard> {
    App::new(&Config::default(), RecordingClipboard::new(), Instant::now(), wall())
        .unwrap()
        .with_input(phone, message)
}

fn render(app: &App<RecordingClipboard>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let screen = build_screen_view_model(app, width);
    terminal.draw(|f| render_screen(f, &screen)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_wide_screen_shows_form_and_preview() {
    let screen = render(&app("11987654321", "Olá"), 120, 30);

    assert!(screen.contains("My Whats Link"));
    assert!(screen.contains("Telefone"));
    assert!(screen.contains("Mensagem"));
    assert!(screen.contains("3/200"));
    assert!(screen.contains("Hoje"));
    assert!(screen.contains("100%"));
    // Once in the input, once in the chat header
    assert_eq!(screen.matches("(11) 98765-4321").count(), 2);
    // Once in the input, once in the bubble
    assert_eq!(screen.matches("Olá").count(), 2);
    assert!(screen.contains("✓✓"));
}

#[test]
fn test_empty_message_has_no_bubble() {
    let screen = render(&app("11987654321", ""), 120, 30);

    assert!(screen.contains("Hoje"));
    assert!(!screen.contains("✓✓"));
    // Only the preview status bar shows the clock
    assert_eq!(screen.matches("12:30").count(), 1);
}

#[test]
fn test_narrow_screen_hides_preview() {
    let screen = render(&app("11987654321", "Olá"), 80, 30);

    assert!(screen.contains("Telefone"));
    assert!(!screen.contains("Hoje"));
    assert_eq!(screen.matches("(11) 98765-4321").count(), 1);
}

#[test]
fn test_placeholder_when_fields_empty() {
    let screen = render(&app("", ""), 120, 30);

    assert!(screen.contains("Preencha o telefone e pressione Enter"));
    assert!(screen.contains("0/200"));
}

#[test]
fn test_submit_shows_link_panel_and_status() {
    let mut app = app("11987654321", "Olá");
    app.handle_key(
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        Instant::now(),
    );

    let screen = render(&app, 120, 30);

    assert!(screen.contains("Link gerado!"));
    assert!(screen.contains("https://wa.me/11987654321?text=Ol%C3%A1"));
    assert!(screen.contains("[Ctrl+Y] copiar"));
}

#[test]
fn test_copy_marks_panel_as_copied() {
    let clipboard = RecordingClipboard::new();
    let now = Instant::now();
    let mut app = App::new(&Config::default(), clipboard.clone(), now, wall())
        .unwrap()
        .with_input("11987654321", "");
    app.submit(now);
    app.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL), now);

    let screen = render(&app, 120, 30);

    assert!(screen.contains("✓ Copiado!"));
    assert!(screen.contains("Link copiado!"));
    assert_eq!(clipboard.last().as_deref(), Some("https://wa.me/11987654321"));
}

#[test]
fn test_invalid_submit_shows_inline_error() {
    let mut app = app("119876543", "");
    app.submit(Instant::now());

    let screen = render(&app, 120, 30);

    assert!(screen.contains("O telefone deve ter 10 ou 11 dígitos"));
    assert!(screen.contains("Corrija os campos destacados"));
    assert!(!screen.contains("Link gerado!"));
}

#[test]
fn test_cursor_sits_after_focused_value() {
    let app = app("11987654321", "");
    let screen = build_screen_view_model(&app, 120);
    let form = FormView::new(&screen.form);

    let cursor = form.cursor(Rect::new(0, 0, 40, FormView::HEIGHT));

    assert_eq!(cursor, Some((16, 1)));
}
