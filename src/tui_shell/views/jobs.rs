use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::context::UserContext;
use crate::pages::{JobsList, NO_JOBS};
use crate::routes::Route;

use super::super::{RenderCtx, UiMode, View, render_view_chrome};
use super::{clamp_selection, render_cards, render_load_state};

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct JobsView {
    pub(in crate::tui_shell) page: JobsList,
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) updated_at: String,
}

impl JobsView {
    pub(in crate::tui_shell) fn selected_job_id(&self) -> Option<u64> {
        self.page.jobs().get(self.selected).map(|j| j.id)
    }
}

impl View for JobsView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Jobs
    }

    fn route(&self) -> Route {
        Route::Jobs
    }

    fn title(&self) -> &str {
        "Jobs"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn is_loading(&self) -> bool {
        self.page.state.is_loading()
    }

    fn load(&mut self, ctx: &UserContext) {
        self.page.load(ctx);
        self.selected = clamp_selection(self.selected, self.page.jobs().len());
        self.updated_at = super::super::app::now_ts();
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        self.selected = clamp_selection(self.selected + 1, self.page.jobs().len());
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(format!("filters: {}", self.page.search.describe()))
                .style(Style::default().fg(Color::Gray)),
            parts[0],
        );

        if render_load_state(frame, parts[1], &self.page.state) {
            return;
        }
        render_cards(
            frame,
            parts[1],
            &self.page.cards(ctx.user),
            self.selected,
            NO_JOBS,
        );
    }
}
