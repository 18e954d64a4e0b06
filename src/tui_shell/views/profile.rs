use std::any::Any;

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::context::UserContext;
use crate::pages::ProfileForm;
use crate::routes::Route;

use super::super::{RenderCtx, UiMode, View, render_view_chrome};

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ProfileView {
    pub(in crate::tui_shell) form: ProfileForm,
    pub(in crate::tui_shell) updated_at: String,
}

impl View for ProfileView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Profile
    }

    fn route(&self) -> Route {
        Route::Profile
    }

    fn title(&self) -> &str {
        "Profile"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// The form mirrors the current user; errors from the last save survive.
    fn load(&mut self, ctx: &UserContext) {
        if let Some(user) = ctx.current_user() {
            let errors = std::mem::take(&mut self.form.errors);
            self.form = ProfileForm::from_user(user);
            self.form.errors = errors;
        }
        self.updated_at = super::super::app::now_ts();
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let username = ctx.user.map(|u| u.username.as_str()).unwrap_or("");

        let field_count = self.form.lines(username).len() - self.error_lines();
        let mut lines = Vec::new();
        for (i, l) in self.form.lines(username).into_iter().enumerate() {
            let style = if i >= field_count {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            lines.push(Line::styled(l, style));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Enter (or `edit`) to change your details.",
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

impl ProfileView {
    fn error_lines(&self) -> usize {
        if self.form.errors.is_empty() {
            0
        } else {
            self.form.errors.len() + 1
        }
    }
}
