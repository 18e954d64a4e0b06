use clap::Args;

#[derive(Args)]
pub(crate) struct CompaniesArgs {
    /// Filter by name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CompanyArgs {
    pub(crate) handle: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct JobsArgs {
    /// Filter by title
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Minimum salary
    #[arg(long)]
    pub(crate) min_salary: Option<String>,
    /// Only jobs offering equity
    #[arg(long)]
    pub(crate) has_equity: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ApplyArgs {
    pub(crate) job_id: u64,
}
