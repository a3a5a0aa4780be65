use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::state::{AppState, NOT_FOUND};
use crate::ui::widgets::{book_status_badge, highlight_style, pane_block, placeholder};
use crate::view::Loadable;

pub fn render_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = pane_block("Book Additions  (Enter open · a approve · x reject · r refresh)");
    if let Some(widget) = placeholder(state.books.data()) {
        frame.render_widget(widget.block(block), area);
        return;
    }
    let Some(books) = state.books.data().as_ready() else {
        return;
    };

    if books.is_empty() {
        frame.render_widget(Paragraph::new("No book additions.").block(block), area);
        return;
    }

    let lines: Vec<Line> = books
        .iter()
        .enumerate()
        .map(|(index, book)| {
            let chapter = book.chapter.clone().unwrap_or_else(|| "(no chapter)".to_string());
            Line::from(vec![
                book_status_badge(book.status),
                Span::raw(" "),
                Span::raw(chapter),
                Span::styled(
                    format!("  {}", book.created_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .style(highlight_style(state.selected_book == Some(index)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = pane_block("Book Addition  (a approve · x reject · Esc back)");
    match state.book_detail.data() {
        Loadable::Error(message) if message == NOT_FOUND => {
            // Missing entity: back navigation only, no retry.
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
    let Some(book) = state.book_detail.data().as_ready() else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Status: "),
            book_status_badge(book.status),
            if state.book_detail.is_mutating() {
                Span::styled("  (updating...)", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            },
        ]),
        Line::from(format!(
            "Chapter: {}",
            book.chapter.clone().unwrap_or_else(|| "(none)".to_string())
        )),
        Line::from(format!("Created: {}", book.created_at.format("%Y-%m-%d %H:%M"))),
        Line::from(format!("Lifelog: {}", book.lifelog_id)),
        Line::from(""),
    ];
    for content_line in book.content_markdown.lines() {
        lines.push(Line::from(content_line.to_string()));
    }
    if let Some(excerpt) = &book.lifelog_content {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Source excerpt:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for excerpt_line in excerpt.lines() {
            lines.push(Line::from(Span::styled(
                excerpt_line.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
