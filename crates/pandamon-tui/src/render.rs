//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects. All payload access goes
//! through the core derivation functions and accessors; nothing in this
//! module reads a nested optional field directly.

use pandamon_core::present;
use pandamon_core::status::{TeamSide, ViewState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

/// Spinner frames for the loading phase.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Height of the top bar.
const TOPBAR_HEIGHT: u16 = 1;

/// Height of the footer.
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOPBAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_topbar(frame, chunks[0]);
    render_card(state, frame, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_topbar(frame: &mut Frame, area: Rect) {
    let topbar = Paragraph::new(Line::from(vec![
        Span::styled(" q to quit ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            " Panda Monitor ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(topbar, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "Built for speed. Monochrome by choice.",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// The status card: status strip, matchup row, details.
fn render_card(state: &AppState, frame: &mut Frame, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .title(" Panda Express discount status ");
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status strip
            Constraint::Length(1),
            Constraint::Length(3), // Matchup: Away | center | Home
            Constraint::Length(1),
            Constraint::Min(3), // Details / notes
        ])
        .split(inner);

    render_status_strip(state, frame, rows[0]);
    render_matchup(state, frame, rows[2]);
    render_details(state, frame, rows[4]);
}

fn render_status_strip(state: &AppState, frame: &mut Frame, area: Rect) {
    let value = if state.status.is_loading() {
        let spinner = SPINNER_FRAMES[state.spinner_frame as usize % SPINNER_FRAMES.len()];
        Span::styled(
            format!("{spinner} Checking…"),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        badge_span(&state.status)
    };

    let strip = Paragraph::new(Line::from(vec![
        Span::styled(" Status  ", Style::default().fg(Color::DarkGray)),
        value,
    ]));
    frame.render_widget(strip, area);
}

fn badge_span(status: &ViewState) -> Span<'static> {
    let badge = status.badge();
    let color = if badge == "YES" {
        Color::Green
    } else {
        Color::Red
    };
    Span::styled(
        format!(" {badge} "),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Matchup row: Away (left) | score or VS (center) | Home (right).
fn render_matchup(state: &AppState, frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let loading = state.status.is_loading();
    let game = state.status.game();

    let away = game.map(|g| &g.away);
    let home = game.map(|g| &g.home);

    render_side_column(frame, cols[0], away, "Away", loading);
    render_center_column(state, frame, cols[1]);
    render_side_column(frame, cols[2], home, "Home", loading);
}

fn render_side_column(
    frame: &mut Frame,
    area: Rect,
    side: Option<&TeamSide>,
    placeholder: &str,
    loading: bool,
) {
    let (logo, name, record) = match side {
        Some(side) => (
            side.logo_abbr(),
            side.name_or(placeholder).to_string(),
            side.record(),
        ),
        None if loading => ("…".to_string(), "…".to_string(), String::new()),
        None => (
            "NA".to_string(),
            placeholder.to_string(),
            "0-0".to_string(),
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("({logo})"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(name),
        Line::from(Span::styled(record, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_center_column(state: &AppState, frame: &mut Frame, area: Rect) {
    let (score, sub_status) = match state.status.game() {
        Some(game) => (
            present::score_line(game),
            game.status.clone().unwrap_or_default(),
        ),
        None if state.status.is_loading() => ("…".to_string(), String::new()),
        None => (present::VS_PLACEHOLDER.to_string(), String::new()),
    };

    let lines = vec![
        Line::from(Span::styled(
            score,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            sub_status,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_details(state: &AppState, frame: &mut Frame, area: Rect) {
    let source = match &state.status {
        ViewState::Loading => "Querying status…".to_string(),
        ViewState::Loaded(data) => present::info_line(data),
        // A failed fetch carries no payload; the fixed fallback applies.
        ViewState::Failed(_) => present::FALLBACK_SOURCE.to_string(),
    };

    let mut lines = vec![Line::from(Span::styled(
        source,
        Style::default().fg(Color::DarkGray),
    ))];

    if !state.status.is_loading()
        && let Some(note) = present::error_note(state.status.error_code())
    {
        lines.push(Line::from(Span::styled(
            format!("Note: {note}"),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        present::FOOTNOTE,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
