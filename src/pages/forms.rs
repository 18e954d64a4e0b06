use crate::context::UserContext;
use crate::model::{Credentials, ProfileUpdate, SignupData, User};

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// On success the caller navigates home; errors are for display.
    pub fn submit(&self, ctx: &mut UserContext) -> Result<(), Vec<String>> {
        let creds = Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        };
        ctx.login(&creds).map(|_| ()).map_err(|err| err.messages())
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub data: SignupData,
}

impl SignupForm {
    pub fn submit(&self, ctx: &mut UserContext) -> Result<(), Vec<String>> {
        let mut data = self.data.clone();
        data.username = data.username.trim().to_string();
        data.email = data.email.trim().to_string();
        ctx.signup(&data).map(|_| ()).map_err(|err| err.messages())
    }
}

/// Profile editor. `errors` stays visible on the form until the next
/// successful save.
#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub errors: Vec<String>,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            errors: Vec::new(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: Some(self.first_name.trim().to_string()),
            last_name: Some(self.last_name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
        }
    }

    pub fn submit(&mut self, ctx: &mut UserContext) -> bool {
        match ctx.update_profile(&self.to_update()) {
            Ok(user) => {
                *self = Self::from_user(user);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile update failed");
                self.errors = err.messages();
                false
            }
        }
    }

    pub fn lines(&self, username: &str) -> Vec<String> {
        let mut out = vec![
            format!("Username: {}", username),
            format!("First Name: {}", self.first_name),
            format!("Last Name: {}", self.last_name),
            format!("Email: {}", self.email),
        ];
        if !self.errors.is_empty() {
            out.push(String::new());
            out.extend(self.errors.iter().cloned());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_form_prefills_and_sends_partial_update() {
        let user: User = serde_json::from_value(serde_json::json!({
            "username": "testuser",
            "firstName": "Test",
            "lastName": "User",
            "email": "t@example.com"
        }))
        .unwrap();
        let mut form = ProfileForm::from_user(&user);
        assert!(form.password.is_empty());

        let update = form.to_update();
        assert_eq!(update.password, None);
        assert_eq!(update.email.as_deref(), Some("t@example.com"));

        form.password = "secret".to_string();
        assert_eq!(form.to_update().password.as_deref(), Some("secret"));

        form.errors = vec!["bad email".to_string()];
        let lines = form.lines("testuser");
        assert_eq!(lines.last().map(String::as_str), Some("bad email"));
    }
}
