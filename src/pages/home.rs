use crate::model::User;

pub fn home_lines(user: Option<&User>) -> Vec<String> {
    let mut out = vec!["Welcome to Jobly".to_string()];
    match user {
        Some(u) => out.push(format!("Welcome back, {}!", u.username)),
        None => out.push("Please sign in or sign up to continue.".to_string()),
    }
    out
}
