use crate::api::CompanySearch;
use crate::context::UserContext;
use crate::model::Company;

use super::{Card, LOADING, LoadState, company_card};

pub const NO_COMPANIES: &str = "No companies found.";

#[derive(Clone, Debug)]
pub struct CompanyList {
    pub search: CompanySearch,
    pub state: LoadState<Vec<Company>>,
}

impl Default for CompanyList {
    fn default() -> Self {
        Self {
            search: CompanySearch::default(),
            state: LoadState::Loading,
        }
    }
}

impl CompanyList {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            search: CompanySearch::new(term),
            state: LoadState::Loading,
        }
    }

    /// Changing the term invalidates the current results.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search.name = term.into();
        self.state = LoadState::Loading;
    }

    pub fn load(&mut self, ctx: &UserContext) {
        self.state = LoadState::from_result(ctx.client().list_companies(&self.search));
    }

    pub fn companies(&self) -> &[Company] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cards(&self) -> Vec<Card> {
        self.companies().iter().map(company_card).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.state {
            LoadState::Loading => vec![LOADING.to_string()],
            LoadState::Failed(errors) => errors.clone(),
            LoadState::Loaded(items) if items.is_empty() => vec![NO_COMPANIES.to_string()],
            LoadState::Loaded(_) => {
                let mut out = Vec::new();
                for card in self.cards() {
                    if !out.is_empty() {
                        out.push(String::new());
                    }
                    out.extend(card.lines);
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(handle: &str) -> Company {
        Company {
            handle: handle.to_string(),
            name: handle.to_uppercase(),
            description: Some(format!("About {}", handle)),
            num_employees: None,
            logo_url: None,
        }
    }

    #[test]
    fn empty_results_render_literal_message() {
        let mut page = CompanyList::default();
        assert_eq!(page.lines(), vec![LOADING]);
        page.state = LoadState::Loaded(Vec::new());
        assert_eq!(page.lines(), vec!["No companies found."]);
    }

    #[test]
    fn one_card_per_company_keyed_by_handle() {
        let mut page = CompanyList::new("a");
        page.state = LoadState::Loaded(vec![company("acme"), company("bauer")]);
        let keys: Vec<String> = page.cards().into_iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["acme", "bauer"]);
        assert_eq!(
            page.lines(),
            vec!["ACME", "About acme", "", "BAUER", "About bauer"]
        );

        page.set_search("b");
        assert!(page.state.is_loading());
        assert!(page.companies().is_empty());
    }
}
