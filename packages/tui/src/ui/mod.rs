pub mod book;
pub mod dashboard;
pub mod ideas;
pub mod lifelogs;
pub mod questions;
pub mod status;
pub mod widgets;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::state::{AppState, InputMode, Screen};

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area (flexible)
            Constraint::Length(1), // Status bar (fixed height)
        ])
        .split(frame.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    if !state.session.is_signed_in() {
        render_signed_out(frame, main_area);
        render_status_bar(frame, state, status_area);
        return;
    }

    match state.current_screen {
        Screen::Dashboard => dashboard::render(frame, state, main_area),
        Screen::BookList => book::render_list(frame, state, main_area),
        Screen::BookDetail => book::render_detail(frame, state, main_area),
        Screen::IdeaList => ideas::render_list(frame, state, main_area),
        Screen::IdeaDetail => ideas::render_detail(frame, state, main_area),
        Screen::QuestionList => questions::render(frame, state, main_area),
        Screen::LifelogList => lifelogs::render_list(frame, state, main_area),
        Screen::LifelogDetail => lifelogs::render_detail(frame, state, main_area),
        Screen::Status => status::render(frame, state, main_area),
    }

    if let InputMode::RejectFeedback { buffer, .. } = &state.input_mode {
        render_feedback_prompt(frame, buffer);
    }

    render_status_bar(frame, state, status_area);
}

/// Sign-in gate: identity comes from the environment, not from this client.
fn render_signed_out(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(
        "Signed out.\n\nSet THELIN_USER to your reviewer name and restart.\nPress 'q' to quit.",
    )
    .alignment(Alignment::Center)
    .block(widgets::pane_block("Thelin Orchestrator"));
    frame.render_widget(paragraph, area);
}

fn render_feedback_prompt(frame: &mut Frame, buffer: &str) {
    let area = frame.area();
    let width = area.width.saturating_sub(10).min(60).max(20);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(5) / 2,
        width,
        height: 3,
    };
    frame.render_widget(ratatui::widgets::Clear, popup);
    frame.render_widget(
        Paragraph::new(format!("{buffer}█"))
            .block(widgets::pane_block("Reject feedback  (Enter send · Esc cancel)")),
        popup,
    );
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let connectivity = match state.api_connected {
        Some(true) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        Some(false) => Span::styled(" ● ", Style::default().fg(Color::Red)),
        None => Span::styled(" ● ", Style::default().fg(Color::DarkGray)),
    };
    let mut spans = vec![
        connectivity,
        Span::styled(
            format!(" {} ", state.current_screen.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(notice) = &state.notice {
        spans.push(Span::styled(
            format!("  {notice}"),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            "  d dashboard · b books · i ideas · u questions · l lifelogs · s status · q quit",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
