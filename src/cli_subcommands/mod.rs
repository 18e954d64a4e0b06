use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// Show your profile
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Update profile fields (unset fields keep their value)
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Current password, required by the backend to confirm changes
        #[arg(long, env = "JOBLY_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured backend
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the backend base URL
    Set {
        #[arg(long)]
        url: String,
    },
}
