use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::state::AppState;
use crate::ui::widgets::pane_block;

/// Pipeline stages mirrored from the backend architecture, for orientation
/// only; nothing here executes locally.
const PIPELINE: &[(&str, &str)] = &[
    ("Capture", "lifelog device records and transcribes audio"),
    ("Ingest", "backend pulls new lifelogs on a schedule"),
    ("Classify", "multi-model consensus labels each lifelog"),
    ("Generate", "book additions and business ideas are drafted"),
    ("Review", "this client: approve, reject, answer"),
];

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let connectivity = match state.api_connected {
        Some(true) => Span::styled("connected", Style::default().fg(Color::Green)),
        Some(false) => Span::styled("unreachable", Style::default().fg(Color::Red)),
        None => Span::styled("probing...", Style::default().fg(Color::DarkGray)),
    };

    let mut lines = vec![
        Line::from(vec![Span::raw("Backend: "), connectivity]),
        Line::from(format!(
            "User: {}",
            state.session.user().unwrap_or("(signed out)")
        )),
    ];
    if let Some(health) = &state.health {
        lines.push(Line::from(format!(
            "Health: status={} database={}",
            health.status, health.database
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Pipeline",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (stage, description) in PIPELINE {
        lines.push(Line::from(vec![
            Span::styled(format!("  {stage:<10}"), Style::default().fg(Color::Cyan)),
            Span::raw(*description),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 'r' to probe again",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(pane_block("Status")),
        area,
    );
}
