use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::state::{AppState, InputMode};
use crate::ui::widgets::{highlight_style, pane_block, placeholder};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = pane_block("Pending Questions  (Enter answer · r refresh)");
    if let Some(widget) = placeholder(state.questions.data()) {
        frame.render_widget(widget.block(block), area);
        return;
    }
    let Some(questions) = state.questions.data().as_ready() else {
        return;
    };

    if questions.is_empty() {
        frame.render_widget(Paragraph::new("No pending questions.").block(block), area);
        return;
    }

    let mut lines = Vec::new();
    for (index, question) in questions.iter().enumerate() {
        lines.push(
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", question.source_type),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(question.question.clone()),
            ])
            .style(highlight_style(state.selected_question == Some(index))),
        );
        if let Some(context) = &question.context {
            lines.push(Line::from(Span::styled(
                format!("    {context}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );

    if let InputMode::AnswerPick {
        prompt,
        options,
        selected,
        ..
    } = &state.input_mode
    {
        render_option_picker(frame, prompt, options, *selected);
    }
}

/// Centered popup listing the answer options captured when the picker
/// opened.
fn render_option_picker(frame: &mut Frame, prompt: &str, options: &[String], selected: usize) {
    let area = frame.area();
    let width = area.width.saturating_sub(10).min(60).max(20);
    let height = (options.len() as u16 + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines = vec![Line::from(Span::styled(
        prompt.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    for (index, option) in options.iter().enumerate() {
        lines.push(
            Line::from(format!("  {option}")).style(highlight_style(index == selected)),
        );
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(pane_block("Answer  (Enter send · Esc cancel)")),
        popup,
    );
}
