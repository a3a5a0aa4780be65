//! Small shared rendering helpers: status badges, stat cards, pane frames.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use thelin_client::{BookStatus, IdeaStatus};

use crate::view::Loadable;

/// Badge style for a book addition status. Total over the enum: the UI only
/// ever renders statuses the client decoded.
pub fn book_status_badge(status: BookStatus) -> Span<'static> {
    let style = match status {
        BookStatus::Pending => Style::default().fg(Color::Yellow),
        BookStatus::Review => Style::default().fg(Color::Cyan),
        BookStatus::Approved => Style::default().fg(Color::Green),
        BookStatus::Rejected => Style::default().fg(Color::Red),
    };
    Span::styled(format!("[{status}]"), style)
}

pub fn idea_status_badge(status: IdeaStatus) -> Span<'static> {
    let style = match status {
        IdeaStatus::New => Style::default().fg(Color::Yellow),
        IdeaStatus::Reviewing => Style::default().fg(Color::Cyan),
        IdeaStatus::Approved => Style::default().fg(Color::Green),
        IdeaStatus::InProgress => Style::default().fg(Color::Blue),
        IdeaStatus::Archived => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!("[{status}]"), style)
}

pub fn pane_block(title: &str) -> Block<'_> {
    Block::default().title(title.to_string()).borders(Borders::ALL)
}

/// One dashboard counter: big number over a label.
pub fn stat_card(label: &str, value: String) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(label.to_string()),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center)
}

/// Placeholder paragraph for a pane that is not ready: loading text or the
/// error with a retry hint. Returns None when data is present.
pub fn placeholder<T>(loadable: &Loadable<T>) -> Option<Paragraph<'static>> {
    match loadable {
        Loadable::Loading => Some(
            Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
        ),
        Loadable::Error(message) => Some(
            Paragraph::new(format!("{message}\n\nPress 'r' to retry"))
                .style(Style::default().fg(Color::Red)),
        ),
        Loadable::Ready(_) => None,
    }
}

pub fn highlight_style(selected: bool) -> Style {
    if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}
