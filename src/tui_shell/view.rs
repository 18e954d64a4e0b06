use std::any::Any;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::context::UserContext;
use crate::model::User;
use crate::routes::Route;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx<'a> {
    /// Applied markers and greetings are computed from this on every draw.
    pub(super) user: Option<&'a User>,
}

pub(super) trait View: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn mode(&self) -> super::UiMode;
    fn route(&self) -> Route;
    fn title(&self) -> &str;
    fn updated_at(&self) -> &str;

    fn is_loading(&self) -> bool {
        false
    }
    /// Blocking fetch for the page behind this view.
    fn load(&mut self, _ctx: &UserContext) {}

    fn move_up(&mut self) {}
    fn move_down(&mut self) {}

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    updated_at: &str,
    area: Rect,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if !updated_at.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            super::fmt_ts_ui(updated_at),
            Style::default().fg(Color::Gray),
        ));
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
