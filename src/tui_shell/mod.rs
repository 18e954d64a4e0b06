use anyhow::Result;

use crate::context::UserContext;

mod app;

mod commands;
mod input;
mod modal;
mod suggest;
mod view;
mod views;
mod wizard;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, CommandDef, Modal, ModalKind, TextInputAction, UiMode, fmt_ts_ui};
use view::{RenderCtx, View, render_view_chrome};

pub(crate) fn run(ctx: UserContext, opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(ctx, opts)
}
