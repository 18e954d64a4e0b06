use anyhow::{Context, Result};

use jobly::api::ApiError;
use jobly::context::UserContext;
use jobly::model::ClientConfig;
use jobly::routes::Route;
use jobly::store::SessionStore;

use crate::cli_runtime::open_context;
use crate::{Commands, ProfileCommands, RemoteCommands, require_signed_in};

mod browse;
mod identity;
mod remote;

pub(crate) fn handle_command(
    config: &ClientConfig,
    store: SessionStore,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Remote { command } => remote::handle_remote_command(config, &store, command),
        Commands::Login(args) => {
            identity::handle_login_command(&mut open_context(config, store)?, args)
        }
        Commands::Signup(args) => {
            identity::handle_signup_command(&mut open_context(config, store)?, args)
        }
        Commands::Logout => {
            identity::handle_logout_command(&mut open_context(config, store)?);
            Ok(())
        }
        Commands::Whoami(args) => {
            identity::handle_whoami_command(&restored_context(config, store)?, args.json)
        }
        Commands::Companies(args) => {
            browse::handle_companies_command(&restored_context(config, store)?, args)
        }
        Commands::Company(args) => {
            browse::handle_company_command(&restored_context(config, store)?, args)
        }
        Commands::Jobs(args) => browse::handle_jobs_command(&restored_context(config, store)?, args),
        Commands::Apply(args) => {
            browse::handle_apply_command(&mut restored_context(config, store)?, args.job_id)
        }
        Commands::Profile { command } => {
            identity::handle_profile_command(&mut restored_context(config, store)?, command)
        }
    }
}

/// A context signed in from the stored token, when there is one.
fn restored_context(config: &ClientConfig, store: SessionStore) -> Result<UserContext> {
    let mut ctx = open_context(config, store)?;
    ctx.restore();
    Ok(ctx)
}

fn api_error(label: &str, err: ApiError) -> anyhow::Error {
    anyhow::anyhow!("{}: {}", label, err.messages().join("; "))
}

fn print_json<T: serde::Serialize>(value: &T, label: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", label))?
    );
    Ok(())
}
