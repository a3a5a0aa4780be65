use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::state::{AppState, NOT_FOUND};
use crate::ui::widgets::{highlight_style, pane_block, placeholder};
use crate::view::Loadable;

pub fn render_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let filter = if state.classified_only {
        "classified only"
    } else {
        "all"
    };
    let title = format!(
        "Lifelogs — {} · offset {}  (Enter open · n/p page · c filter · r refresh)",
        filter, state.lifelog_offset
    );
    let block = pane_block(&title);
    if let Some(widget) = placeholder(state.lifelogs.data()) {
        frame.render_widget(widget.block(block), area);
        return;
    }
    let Some(lifelogs) = state.lifelogs.data().as_ready() else {
        return;
    };

    if lifelogs.is_empty() {
        frame.render_widget(Paragraph::new("No lifelogs on this page.").block(block), area);
        return;
    }

    let lines: Vec<Line> = lifelogs
        .iter()
        .enumerate()
        .map(|(index, log)| {
            let classification = match (&log.classification, log.confidence) {
                (Some(label), Some(confidence)) => format!("{label} ({confidence:.2})"),
                (Some(label), None) => label.clone(),
                _ => "unclassified".to_string(),
            };
            let preview = log
                .content
                .as_deref()
                .map(|content| content.chars().take(60).collect::<String>())
                .unwrap_or_else(|| "(no transcript)".to_string());
            Line::from(vec![
                Span::styled(
                    log.timestamp.format("%m-%d %H:%M").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(format!("{classification:<20}"), Style::default().fg(Color::Cyan)),
                Span::raw(preview),
            ])
            .style(highlight_style(state.selected_lifelog == Some(index)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = pane_block("Lifelog  (Esc back)");
    match state.lifelog_detail.data() {
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
    let Some(log) = state.lifelog_detail.data().as_ready() else {
        return;
    };

    let mut lines = vec![
        Line::from(format!("Captured: {}", log.timestamp.format("%Y-%m-%d %H:%M:%S"))),
        Line::from(format!(
            "Classification: {}",
            log.classification.clone().unwrap_or_else(|| "unclassified".to_string())
        )),
        Line::from(format!(
            "Confidence: {}",
            log.confidence.map_or("n/a".to_string(), |c| format!("{c:.2}"))
        )),
        Line::from(""),
    ];
    match &log.content {
        Some(content) => {
            for content_line in content.lines() {
                lines.push(Line::from(content_line.to_string()));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "(no transcript)",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
