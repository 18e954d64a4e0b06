use crate::context::UserContext;
use crate::model::{Company, Job, User};

use super::{Card, LOADING, LoadState, job_card};

#[derive(Clone, Debug)]
pub struct CompanyDetail {
    pub handle: String,
    pub state: LoadState<(Company, Vec<Job>)>,
}

impl CompanyDetail {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            state: LoadState::Loading,
        }
    }

    /// Fetches the company, then its jobs.
    pub fn load(&mut self, ctx: &UserContext) {
        let client = ctx.client();
        let res = client
            .get_company(&self.handle)
            .and_then(|company| Ok((company, client.list_company_jobs(&self.handle)?)));
        self.state = LoadState::from_result(res);
    }

    pub fn company(&self) -> Option<&Company> {
        self.state.loaded().map(|(c, _)| c)
    }

    pub fn jobs(&self) -> &[Job] {
        self.state
            .loaded()
            .map(|(_, jobs)| jobs.as_slice())
            .unwrap_or(&[])
    }

    pub fn job_cards(&self, user: Option<&User>) -> Vec<Card> {
        self.jobs().iter().map(|j| job_card(j, user)).collect()
    }

    pub fn lines(&self, user: Option<&User>) -> Vec<String> {
        let (company, jobs) = match &self.state {
            LoadState::Loading => return vec![LOADING.to_string()],
            LoadState::Failed(errors) => return errors.clone(),
            LoadState::Loaded(v) => v,
        };

        let mut out = vec![company.name.clone()];
        if let Some(desc) = company.description.as_deref() {
            out.push(desc.to_string());
        }
        out.push(String::new());
        out.push(format!("Jobs at {}", company.name));
        if jobs.is_empty() {
            out.push(super::NO_JOBS.to_string());
        }
        for card in self.job_cards(user) {
            out.push(String::new());
            out.extend(card.lines);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_until_company_present() {
        let page = CompanyDetail::new("acme");
        assert_eq!(page.lines(None), vec![LOADING]);
        assert!(page.company().is_none());
        assert!(page.jobs().is_empty());
    }

    #[test]
    fn applied_marker_tracks_user_set() {
        let mut page = CompanyDetail::new("acme");
        page.state = LoadState::Loaded((
            Company {
                handle: "acme".to_string(),
                name: "Acme".to_string(),
                description: Some("Makes things".to_string()),
                num_employees: None,
                logo_url: None,
            },
            vec![Job {
                id: 11,
                title: "Welder".to_string(),
                salary: Some(50_000),
                equity: Some("0.01".to_string()),
                company_handle: Some("acme".to_string()),
                company_name: None,
            }],
        ));

        let mut user: User =
            serde_json::from_value(serde_json::json!({"username": "testuser"})).unwrap();
        assert!(page.lines(Some(&user)).contains(&"[Apply]".to_string()));
        user.applications.insert(11);
        let lines = page.lines(Some(&user));
        assert!(lines.contains(&"[Applied]".to_string()));
        assert_eq!(lines[3], "Jobs at Acme");
    }
}
