use anyhow::Result;

use crate::context::UserContext;
use crate::routes::Route;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    /// First route to open; it still passes through the guard.
    pub start: Route,
}

pub fn run_with_options(ctx: UserContext, opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(ctx, opts)
}
