use jobly::api::JobSearch;
use jobly::context::ApplyOutcome;
use jobly::pages::{CompanyDetail, CompanyList, JobsList, LoadState};

use crate::cli_commands::browse::{CompaniesArgs, CompanyArgs, JobsArgs};

use super::*;

fn fail_on_errors<T>(state: &LoadState<T>, label: &str) -> Result<()> {
    if let LoadState::Failed(errors) = state {
        anyhow::bail!("{}: {}", label, errors.join("; "));
    }
    Ok(())
}

pub(super) fn handle_companies_command(ctx: &UserContext, args: CompaniesArgs) -> Result<()> {
    require_signed_in(ctx, Route::Companies)?;
    let mut page = CompanyList::new(args.name.unwrap_or_default());
    page.load(ctx);
    fail_on_errors(&page.state, "list companies")?;
    if args.json {
        print_json(&page.companies(), "companies")?;
    } else {
        for card in page.cards() {
            println!("{}  {}", card.key, card.lines.join(" | "));
        }
        if page.companies().is_empty() {
            println!("{}", jobly::pages::NO_COMPANIES);
        }
    }
    Ok(())
}

pub(super) fn handle_company_command(ctx: &UserContext, args: CompanyArgs) -> Result<()> {
    require_signed_in(ctx, Route::Company(args.handle.clone()))?;
    let mut page = CompanyDetail::new(args.handle);
    page.load(ctx);
    fail_on_errors(&page.state, "get company")?;
    if args.json {
        print_json(
            &serde_json::json!({
                "company": page.company(),
                "jobs": page.jobs(),
            }),
            "company",
        )?;
    } else {
        for line in page.lines(ctx.current_user()) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub(super) fn handle_jobs_command(ctx: &UserContext, args: JobsArgs) -> Result<()> {
    require_signed_in(ctx, Route::Jobs)?;
    let mut page = JobsList::new(JobSearch {
        title: args.title.unwrap_or_default(),
        min_salary: args.min_salary.unwrap_or_default(),
        has_equity: args.has_equity,
    });
    page.load(ctx);
    fail_on_errors(&page.state, "list jobs")?;
    if args.json {
        let rows: Vec<serde_json::Value> = page
            .jobs()
            .iter()
            .map(|job| {
                serde_json::json!({
                    "job": job,
                    "applied": ctx.has_applied(job.id),
                })
            })
            .collect();
        print_json(&rows, "jobs")?;
    } else {
        for card in page.cards(ctx.current_user()) {
            println!("{}  {}", card.key, card.lines.join(" | "));
        }
        if page.jobs().is_empty() {
            println!("{}", jobly::pages::NO_JOBS);
        }
    }
    Ok(())
}

pub(super) fn handle_apply_command(ctx: &mut UserContext, job_id: u64) -> Result<()> {
    require_signed_in(ctx, Route::Jobs)?;
    match ctx
        .apply_to_job(job_id)
        .map_err(|err| api_error("apply", err))?
    {
        ApplyOutcome::Applied => println!("Applied to job {}", job_id),
        ApplyOutcome::AlreadyApplied => println!("Already applied to job {}", job_id),
    }
    Ok(())
}
