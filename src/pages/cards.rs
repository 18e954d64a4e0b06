use crate::model::{Company, Job, User};

/// One rendered list entry. `key` is unique within a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub key: String,
    pub lines: Vec<String>,
}

pub fn company_card(company: &Company) -> Card {
    let mut lines = vec![company.name.clone()];
    if let Some(desc) = company.description.as_deref()
        && !desc.is_empty()
    {
        lines.push(desc.to_string());
    }
    if let Some(logo) = company.logo_url.as_deref() {
        lines.push(format!("Logo: {}", logo));
    }
    Card {
        key: company.handle.clone(),
        lines,
    }
}

/// The applied marker is read from `user` every time a card is built.
pub fn job_card(job: &Job, user: Option<&User>) -> Card {
    let applied = user.is_some_and(|u| u.has_applied(job.id));
    let mut lines = vec![
        job.title.clone(),
        format!(
            "Salary: {}",
            job.salary
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        ),
        format!(
            "Equity: {}",
            job.equity
                .as_deref()
                .filter(|e| !e.is_empty())
                .unwrap_or("None")
        ),
    ];
    if let Some(name) = job.company_name.as_deref() {
        lines.push(format!("Company: {}", name));
    }
    lines.push(if applied { "[Applied]" } else { "[Apply]" }.to_string());
    Card {
        key: job.id.to_string(),
        lines,
    }
}
