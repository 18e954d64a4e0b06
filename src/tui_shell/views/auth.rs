use std::any::Any;

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::routes::Route;

use super::super::{RenderCtx, UiMode, View, render_view_chrome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum AuthKind {
    Login,
    Signup,
}

/// Landing view for `/login` and `/signup`; the form itself is a wizard.
#[derive(Debug)]
pub(in crate::tui_shell) struct AuthView {
    pub(in crate::tui_shell) kind: AuthKind,
}

impl View for AuthView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        match self.kind {
            AuthKind::Login => UiMode::Login,
            AuthKind::Signup => UiMode::Signup,
        }
    }

    fn route(&self) -> Route {
        match self.kind {
            AuthKind::Login => Route::Login,
            AuthKind::Signup => Route::Signup,
        }
    }

    fn title(&self) -> &str {
        match self.kind {
            AuthKind::Login => "Log In",
            AuthKind::Signup => "Sign Up",
        }
    }

    fn updated_at(&self) -> &str {
        ""
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);
        let gray = Style::default().fg(Color::Gray);
        let lines = if let Some(user) = ctx.user {
            vec![Line::from(format!("Signed in as {}.", user.username))]
        } else {
            match self.kind {
                AuthKind::Login => vec![
                    Line::from("Press Enter to log in."),
                    Line::styled("No account yet? type `signup`.", gray),
                ],
                AuthKind::Signup => vec![
                    Line::from("Press Enter to create an account."),
                    Line::styled(
                        "Username, password, first name, last name and email are required.",
                        gray,
                    ),
                ],
            }
        };
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
