use ratatui::Frame;
use ratatui::layout::Rect;

use super::*;

const SUGGESTION_ROWS: u16 = 9;

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let suggestion_rows = if app.suggestions.is_empty() {
        0
    } else {
        SUGGESTION_ROWS
    };
    let [header, body, status, suggestions, input] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(suggestion_rows),
            Constraint::Length(3),
        ])
        .areas(frame.area());

    draw_header(frame, app, header);
    app.view().render(
        frame,
        body,
        &RenderCtx {
            user: app.ctx.current_user(),
        },
    );
    draw_status(frame, app, status);
    if suggestion_rows > 0 {
        draw_suggestions(frame, app, suggestions);
    }
    draw_input(frame, app, input);

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
    }
}

/// Brand, the navigation bar for the current sign-in state, who is signed in
/// and which backend is in use.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let user = app.ctx.current_user();
    let here = app.view().route();

    let mut spans = vec![
        Span::styled("Jobly", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
    ];
    for link in nav_links(user.is_some()) {
        let style = match &link {
            NavLink::Go { route, .. } if *route == here => {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            }
            _ => Style::default().fg(Color::Gray),
        };
        spans.push(Span::styled(link.label(), style));
        spans.push(Span::raw("  "));
    }
    spans.push(match user {
        Some(u) => Span::styled(u.username.as_str(), Style::default().fg(Color::Green)),
        None => Span::styled("signed out", Style::default().fg(Color::Red)),
    });
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        app.ctx.client().base_url(),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(cmd) = &app.last_command {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(cmd.as_str()),
        ]));
    }
    if let Some(entry) = &app.status {
        let style = match entry.kind {
            StatusKind::Output => Style::default().fg(Color::White),
            StatusKind::Error => Style::default().fg(Color::Red),
        };
        let stamp = Span::styled(
            format!("{} ", fmt_ts_ui(&entry.at)),
            Style::default().fg(Color::Gray),
        );
        let mut rows = entry.lines.iter().map(|l| Span::styled(l.as_str(), style));
        if let Some(first) = rows.next() {
            lines.push(Line::from(vec![stamp, first]));
        }
        lines.extend(rows.map(Line::from));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Status")),
        area,
    );
}

fn draw_suggestions(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.suggestions.len();
    let selected = app.suggestion_selected.min(total.saturating_sub(1));

    // Scroll so the selected row is always on screen.
    let room = (area.height.saturating_sub(3) as usize).max(1);
    let first = (selected + 1).saturating_sub(room);

    let mut lines = vec![Line::from(Span::styled(
        format!("Suggestions {}/{}", selected + 1, total),
        Style::default().fg(Color::Gray),
    ))];
    lines.extend(
        app.suggestions
            .iter()
            .enumerate()
            .skip(first)
            .take(room)
            .map(|(i, def)| {
                let base = if i == selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{: <18}", def.usage), base.fg(Color::Yellow)),
                    Span::styled(def.help, base.fg(Color::White)),
                ])
            }),
    );

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP | Borders::BOTTOM)),
        area,
    );
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let prompt = app.prompt();
    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(app.input.buf.as_str()),
    ];
    if app.input.buf.is_empty() {
        spans.push(Span::styled(
            input_hint(app),
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP)),
        area,
    );

    if app.modal.is_none() {
        let col = prompt.len() as u16 + 1 + app.input.cursor as u16;
        frame.set_cursor_position((area.x + col, area.y + 1));
    }
}

fn input_hint(app: &App) -> String {
    let enter = match app.mode() {
        UiMode::Home => return "type `help`".to_string(),
        UiMode::Companies => "Enter opens company",
        UiMode::Company | UiMode::Jobs => "Enter applies",
        UiMode::Login => "Enter logs in",
        UiMode::Signup => "Enter signs up",
        UiMode::Profile => "Enter edits",
    };
    let cmds = view_hint_commands(app.mode());
    if cmds.is_empty() {
        enter.to_string()
    } else {
        format!("{}; {}", enter, cmds.join(", "))
    }
}

fn dim_frame(frame: &mut Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
