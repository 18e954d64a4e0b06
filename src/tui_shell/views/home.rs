use std::any::Any;

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::pages::home_lines;
use crate::routes::{NavLink, Route, nav_links};

use super::super::{RenderCtx, UiMode, View, render_view_chrome};

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct HomeView;

impl View for HomeView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Home
    }

    fn route(&self) -> Route {
        Route::Home
    }

    fn title(&self) -> &str {
        "Jobly"
    }

    fn updated_at(&self) -> &str {
        ""
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);

        let mut lines: Vec<Line> = home_lines(ctx.user)
            .into_iter()
            .map(Line::from)
            .collect();
        lines.push(Line::from(""));
        for link in nav_links(ctx.user.is_some()) {
            let cmd = match &link {
                NavLink::Go { route, .. } => match route {
                    Route::Home => "home",
                    Route::Companies | Route::Company(_) => "companies",
                    Route::Jobs => "jobs",
                    Route::Login => "login",
                    Route::Signup => "signup",
                    Route::Profile => "profile",
                },
                NavLink::Logout => "logout",
            };
            lines.push(Line::styled(
                format!("  {: <10} type `{}`", link.label(), cmd),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
