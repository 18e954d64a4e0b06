use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jobly::api::ApiClient;
use jobly::context::UserContext;
use jobly::model::ClientConfig;
use jobly::routes::{Route, guard};
use jobly::store::SessionStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "jobly")]
#[command(about = "Browse companies and jobs on a Jobly server", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides `jobly remote set`)
    #[arg(long, global = true, env = "JOBLY_BASE_URL")]
    base_url: Option<String>,

    /// Directory for the session token, config and logs
    #[arg(long, global = true, env = "JOBLY_HOME", value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Open the interactive shell at this path (default: /)
    #[arg(long, value_name = "PATH")]
    open: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let state_dir = ClientConfig::default_state_dir(cli.state_dir);
    let store = SessionStore::open(&state_dir);
    let file = store.read_config()?;
    let config = ClientConfig::resolve(cli.base_url, &file, &state_dir);

    match cli.command {
        None => {
            jobly::logging::init_file(&config.state_dir.join("jobly.log"))?;
            let start = match cli.open.as_deref() {
                Some(path) => Route::parse(path)
                    .with_context(|| format!("unknown path {:?}", path))?,
                None => Route::Home,
            };
            let mut ctx = open_context(&config, store)?;
            ctx.restore();
            jobly::tui::run_with_options(ctx, jobly::tui::TuiRunOptions { start })?;
        }
        Some(command) => {
            if cli.open.is_some() {
                anyhow::bail!("`--open` is only supported when running the shell (no subcommand)");
            }
            jobly::logging::init_stderr();
            crate::cli_exec::handle_command(&config, store, command)?
        }
    }

    Ok(())
}

pub(crate) fn open_context(config: &ClientConfig, store: SessionStore) -> Result<UserContext> {
    let client = ApiClient::new(config.base_url.clone())?;
    Ok(UserContext::new(client, store))
}

/// Fails the way the shell would redirect: guarded routes need a user.
pub(crate) fn require_signed_in(ctx: &UserContext, route: Route) -> Result<()> {
    if guard(route.clone(), ctx.is_signed_in()) != route {
        anyhow::bail!("not signed in (run `jobly login`): {} requires a user", route);
    }
    Ok(())
}
