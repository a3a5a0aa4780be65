use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::state::{AppState, NOT_FOUND};
use crate::ui::widgets::{highlight_style, idea_status_badge, pane_block, placeholder};
use crate::view::Loadable;

const STATUS_KEYS: &str = "1 new · 2 reviewing · 3 approved · 4 in_progress · 5 archived";

pub fn render_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = pane_block("Business Ideas  (Enter open · 1-5 set status · r refresh)");
    if let Some(widget) = placeholder(state.ideas.data()) {
        frame.render_widget(widget.block(block), area);
        return;
    }
    let Some(ideas) = state.ideas.data().as_ready() else {
        return;
    };

    if ideas.is_empty() {
        frame.render_widget(Paragraph::new("No business ideas.").block(block), area);
        return;
    }

    let lines: Vec<Line> = ideas
        .iter()
        .enumerate()
        .map(|(index, idea)| {
            Line::from(vec![
                idea_status_badge(idea.status),
                Span::raw(" "),
                Span::raw(idea.title.clone()),
                Span::styled(
                    format!("  {}", idea.related_ventures.join(", ")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .style(highlight_style(state.selected_idea == Some(index)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = pane_block("Business Idea  (1-5 set status · Esc back)");
    match state.idea_detail.data() {
        Loadable::Error(message) if message == NOT_FOUND => {
            frame.render_widget(
                Paragraph::new("Not Found\n\nPress Esc to go back")
                    .style(Style::default().fg(Color::Red))
                    .block(block),
                area,
            );
            return;
        }
        other => {
            if let Some(widget) = placeholder(other) {
                frame.render_widget(widget.block(block), area);
                return;
            }
        }
    }
    let Some(idea) = state.idea_detail.data().as_ready() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            idea.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Status: "),
            idea_status_badge(idea.status),
            if state.idea_detail.is_mutating() {
                Span::styled("  (updating...)", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            },
        ]),
        Line::from(format!("Ventures: {}", idea.related_ventures.join(", "))),
        Line::from(format!("Created: {}", idea.created_at.format("%Y-%m-%d %H:%M"))),
        Line::from(format!("Lifelog: {}", idea.lifelog_id)),
        Line::from(""),
    ];
    for summary_line in idea.summary.lines() {
        lines.push(Line::from(summary_line.to_string()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        STATUS_KEYS,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
