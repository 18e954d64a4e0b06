use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::super::{Modal, ModalKind};

const ERROR_PREFIX: &str = "error:";

/// A box of at most 90x22 cells, centered, leaving a 3-cell margin.
fn centered(area: Rect) -> Rect {
    let width = area.width.saturating_sub(6).clamp(20, 90).min(area.width);
    let height = area.height.saturating_sub(6).clamp(8, 22).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub(in crate::tui_shell) fn draw_modal(frame: &mut Frame, modal: &Modal) {
    let outer = centered(frame.area());
    frame.render_widget(Clear, outer);

    let mut keys = vec![Span::styled("Esc", Style::default().fg(Color::Gray))];
    if matches!(modal.kind, ModalKind::TextInput { .. }) {
        keys.push(Span::raw(" "));
        keys.push(Span::styled("Enter", Style::default().fg(Color::Gray)));
    }
    let mut title = vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
    ];
    title.extend(keys);

    let block = Block::default().borders(Borders::ALL).title(Line::from(title));
    let body = block.inner(outer);
    frame.render_widget(block, outer);

    let ModalKind::TextInput { action, prompt } = &modal.kind else {
        draw_body(frame, modal, body);
        return;
    };

    let [text, field] = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(body);
    draw_body(frame, modal, text);

    let answer = Line::from(vec![
        Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
        Span::raw(modal.input.display(action.is_secret())),
    ]);
    frame.render_widget(
        Paragraph::new(answer).block(Block::default().borders(Borders::ALL)),
        field,
    );
    let col = (prompt.chars().count() + modal.input.cursor) as u16;
    frame.set_cursor_position((field.x + 1 + col, field.y + 1));
}

fn draw_body(frame: &mut Frame, modal: &Modal, area: Rect) {
    let red = Style::default().fg(Color::Red);
    let lines: Vec<Line> = modal
        .lines
        .iter()
        .map(|l| {
            if l.starts_with(ERROR_PREFIX) {
                Line::styled(l.as_str(), red)
            } else {
                Line::raw(l.as_str())
            }
        })
        .collect();
    let top = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((top, 0)),
        area,
    );
}
