use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::state::AppState;
use crate::ui::widgets::{
    book_status_badge, idea_status_badge, pane_block, placeholder, stat_card,
};

/// Render the dashboard screen: a row of stat cards over three panes with
/// recent books, recent ideas, and pending questions.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    if let Some(widget) = placeholder(state.dashboard.data()) {
        frame.render_widget(widget.block(pane_block("Dashboard")), area);
        return;
    }
    let Some(data) = state.dashboard.data().as_ready() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[0]);

    let stats = &data.stats;
    let label_count = |label: &str| stats.classifications.get(label).copied().unwrap_or(0);
    frame.render_widget(
        stat_card("Lifelogs today", stats.lifelogs_today.to_string()),
        cards[0],
    );
    frame.render_widget(stat_card("Book", label_count("book").to_string()), cards[1]);
    frame.render_widget(
        stat_card("Business", label_count("business").to_string()),
        cards[2],
    );
    frame.render_widget(
        stat_card("Pending questions", stats.pending_questions.to_string()),
        cards[3],
    );

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    let books: Vec<Line> = data
        .recent_books
        .iter()
        .map(|book| {
            Line::from(vec![
                book_status_badge(book.status),
                Span::raw(" "),
                Span::raw(book.chapter.clone().unwrap_or_else(|| "(no chapter)".to_string())),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(books).block(pane_block("Recent Book Additions")),
        panes[0],
    );

    let ideas: Vec<Line> = data
        .recent_ideas
        .iter()
        .map(|idea| {
            Line::from(vec![
                idea_status_badge(idea.status),
                Span::raw(" "),
                Span::raw(idea.title.clone()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(ideas).block(pane_block("Recent Business Ideas")),
        panes[1],
    );

    let questions: Vec<Line> = data
        .pending_questions
        .iter()
        .map(|question| Line::from(format!("• {}", question.question)))
        .collect();
    frame.render_widget(
        Paragraph::new(questions).block(pane_block("Pending Questions")),
        panes[2],
    );
}
