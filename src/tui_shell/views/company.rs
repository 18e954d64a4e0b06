use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::context::UserContext;
use crate::pages::{CompanyDetail, NO_JOBS};
use crate::routes::Route;

use super::super::{RenderCtx, UiMode, View, render_view_chrome};
use super::{clamp_selection, render_cards, render_load_state};

#[derive(Debug)]
pub(in crate::tui_shell) struct CompanyView {
    pub(in crate::tui_shell) page: CompanyDetail,
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) updated_at: String,
}

impl CompanyView {
    pub(in crate::tui_shell) fn new(handle: impl Into<String>) -> Self {
        Self {
            page: CompanyDetail::new(handle),
            selected: 0,
            updated_at: String::new(),
        }
    }

    pub(in crate::tui_shell) fn selected_job_id(&self) -> Option<u64> {
        self.page.jobs().get(self.selected).map(|j| j.id)
    }
}

impl View for CompanyView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Company
    }

    fn route(&self) -> Route {
        Route::Company(self.page.handle.clone())
    }

    fn title(&self) -> &str {
        self.page
            .company()
            .map(|c| c.name.as_str())
            .unwrap_or("Company")
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
        if render_load_state(frame, inner, &self.page.state) {
            return;
        }
        let Some(company) = self.page.company() else {
            return;
        };

        let mut header = vec![Line::from(company.name.clone())];
        if let Some(desc) = company.description.as_deref() {
            header.push(Line::from(desc.to_string()));
        }
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header.len() as u16 + 1),
                Constraint::Min(0),
            ])
            .split(inner);
        frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), parts[0]);

        render_cards(
            frame,
            parts[1],
            &self.page.job_cards(ctx.user),
            self.selected,
            NO_JOBS,
        );
    }
}
