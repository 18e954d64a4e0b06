/// Company search form state. Only a non-blank name is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanySearch {
    pub name: String,
}

impl CompanySearch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push_text(&mut out, "name", &self.name);
        out
    }
}

/// Job search form state.
///
/// `min_salary` holds the raw text typed by the user; it is validated but
/// never coerced, and like every other filter it is only sent when truthy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobSearch {
    pub title: String,
    pub min_salary: String,
    pub has_equity: bool,
}

impl JobSearch {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push_text(&mut out, "title", &self.title);
        push_text(&mut out, "minSalary", &self.min_salary);
        if self.has_equity {
            out.push(("hasEquity", "true".to_string()));
        }
        out
    }

    pub fn validate(&self) -> Result<(), String> {
        let min = self.min_salary.trim();
        if !min.is_empty() && min.parse::<u64>().is_err() {
            return Err(format!("minimum salary must be a whole number, got {:?}", min));
        }
        Ok(())
    }

    /// Short description of the active filters, for headers and logs.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join(" ")
        }
    }
}

fn push_text(out: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    let v = value.trim();
    if !v.is_empty() {
        out.push((key, v.to_string()));
    }
}
