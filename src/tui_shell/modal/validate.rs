use super::super::TextInputAction;

pub(super) fn allow_empty_text_input(action: TextInputAction) -> bool {
    matches!(
        action,
        TextInputAction::ProfileFirstName
            | TextInputAction::ProfileLastName
            | TextInputAction::ProfileEmail
            | TextInputAction::ProfilePassword
            | TextInputAction::JobsTitle
            | TextInputAction::JobsMinSalary
            | TextInputAction::JobsEquity
    )
}

pub(super) fn validate_text_input(action: TextInputAction, raw: &str) -> Result<(), String> {
    match action {
        TextInputAction::JobsMinSalary if !raw.is_empty() => raw
            .parse::<u64>()
            .map(|_| ())
            .map_err(|_| "minimum salary must be a whole number".to_string()),
        TextInputAction::JobsEquity => match raw.to_lowercase().as_str() {
            "" | "y" | "yes" | "n" | "no" => Ok(()),
            _ => Err("answer y or n".to_string()),
        },
        TextInputAction::SignupEmail | TextInputAction::ProfileEmail
            if !raw.is_empty() && !raw.contains('@') =>
        {
            Err("email must contain '@'".to_string())
        }
        _ => Ok(()),
    }
}
