use clap::Subcommand;

use crate::{ProfileCommands, RemoteCommands};

pub(crate) mod browse;
pub(crate) mod identity;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the session token
    Login(identity::LoginArgs),

    /// Create an account and sign in
    Signup(identity::SignupArgs),

    /// Sign out (clear the stored session token)
    Logout,

    /// Show the signed-in user
    Whoami(identity::WhoamiArgs),

    /// List companies
    Companies(browse::CompaniesArgs),

    /// Show a company and its jobs
    Company(browse::CompanyArgs),

    /// List jobs
    Jobs(browse::JobsArgs),

    /// Apply to a job
    Apply(browse::ApplyArgs),

    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Configure or show the backend
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },
}
