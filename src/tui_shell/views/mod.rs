use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::pages::{Card, LOADING, LoadState};

mod auth;
mod companies;
mod company;
mod home;
mod jobs;
mod profile;

pub(in crate::tui_shell) use self::auth::{AuthKind, AuthView};
pub(in crate::tui_shell) use self::companies::CompaniesView;
pub(in crate::tui_shell) use self::company::CompanyView;
pub(in crate::tui_shell) use self::home::HomeView;
pub(in crate::tui_shell) use self::jobs::JobsView;
pub(in crate::tui_shell) use self::profile::ProfileView;

/// Draws the loading or error text for `state`; returns false when the
/// caller should draw the loaded content instead.
fn render_load_state<T>(frame: &mut ratatui::Frame, area: Rect, state: &LoadState<T>) -> bool {
    let lines: Vec<Line> = match state {
        LoadState::Loading => vec![Line::from(LOADING)],
        LoadState::Failed(errors) => errors
            .iter()
            .map(|e| Line::styled(e.as_str(), Style::default().fg(Color::Red)))
            .collect(),
        LoadState::Loaded(_) => return false,
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    true
}

fn card_item(card: &Card) -> ListItem<'static> {
    let mut lines = Vec::with_capacity(card.lines.len() + 1);
    for (i, l) in card.lines.iter().enumerate() {
        let style = if i == 0 {
            Style::default().add_modifier(Modifier::BOLD)
        } else if l == "[Applied]" {
            Style::default().fg(Color::Green)
        } else if l == "[Apply]" {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::styled(l.clone(), style));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

/// Cards as a selectable list, or `empty` when there are none.
fn render_cards(
    frame: &mut ratatui::Frame,
    area: Rect,
    cards: &[Card],
    selected: usize,
    empty: &str,
) {
    if cards.is_empty() {
        frame.render_widget(Paragraph::new(empty.to_string()), area);
        return;
    }
    let items: Vec<ListItem> = cards.iter().map(card_item).collect();
    let mut state = ListState::default();
    state.select(Some(selected.min(cards.len() - 1)));
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
