use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::context::UserContext;
use crate::pages::{CompanyList, NO_COMPANIES};
use crate::routes::Route;

use super::super::{RenderCtx, UiMode, View, render_view_chrome};
use super::{clamp_selection, render_cards, render_load_state};

#[derive(Debug)]
pub(in crate::tui_shell) struct CompaniesView {
    pub(in crate::tui_shell) page: CompanyList,
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) updated_at: String,
}

impl CompaniesView {
    pub(in crate::tui_shell) fn new(term: impl Into<String>) -> Self {
        Self {
            page: CompanyList::new(term),
            selected: 0,
            updated_at: String::new(),
        }
    }

    pub(in crate::tui_shell) fn selected_handle(&self) -> Option<String> {
        self.page
            .companies()
            .get(self.selected)
            .map(|c| c.handle.clone())
    }
}

impl View for CompaniesView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Companies
    }

    fn route(&self) -> Route {
        Route::Companies
    }

    fn title(&self) -> &str {
        "Companies"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn is_loading(&self) -> bool {
        self.page.state.is_loading()
    }

    fn load(&mut self, ctx: &UserContext) {
        self.page.load(ctx);
        self.selected = clamp_selection(self.selected, self.page.companies().len());
        self.updated_at = super::super::app::now_ts();
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        self.selected = clamp_selection(self.selected + 1, self.page.companies().len());
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let filter = if self.page.search.name.trim().is_empty() {
            "search: (all)".to_string()
        } else {
            format!("search: {}", self.page.search.name.trim())
        };
        frame.render_widget(
            Paragraph::new(filter).style(Style::default().fg(Color::Gray)),
            parts[0],
        );

        if render_load_state(frame, parts[1], &self.page.state) {
            return;
        }
        render_cards(frame, parts[1], &self.page.cards(), self.selected, NO_COMPANIES);
    }
}
