//! Client routes and the signed-in guard.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Companies,
    Company(String),
    Jobs,
    Login,
    Signup,
    Profile,
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return path.starts_with('/').then_some(Route::Home);
        }
        let rest = trimmed.strip_prefix('/')?;
        let parts: Vec<&str> = rest.split('/').collect();
        match parts.as_slice() {
            ["companies"] => Some(Route::Companies),
            ["companies", handle] if !handle.is_empty() => {
                Some(Route::Company((*handle).to_string()))
            }
            ["jobs"] => Some(Route::Jobs),
            ["login"] => Some(Route::Login),
            ["signup"] => Some(Route::Signup),
            ["profile"] => Some(Route::Profile),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Companies => "/companies".to_string(),
            Route::Company(handle) => format!("/companies/{}", handle),
            Route::Jobs => "/jobs".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Profile => "/profile".to_string(),
        }
    }

    pub fn requires_user(&self) -> bool {
        matches!(
            self,
            Route::Companies | Route::Company(_) | Route::Jobs | Route::Profile
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a navigation to `route` actually lands.
pub fn guard(route: Route, user_present: bool) -> Route {
    if route.requires_user() && !user_present {
        Route::Login
    } else {
        route
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavLink {
    Go { label: &'static str, route: Route },
    Logout,
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Go { label, .. } => label,
            NavLink::Logout => "Logout",
        }
    }
}

pub fn nav_links(user_present: bool) -> Vec<NavLink> {
    let go = |label, route| NavLink::Go { label, route };
    if user_present {
        vec![
            go("Home", Route::Home),
            go("Companies", Route::Companies),
            go("Jobs", Route::Jobs),
            go("Profile", Route::Profile),
            NavLink::Logout,
        ]
    } else {
        vec![
            go("Home", Route::Home),
            go("Login", Route::Login),
            go("Sign Up", Route::Signup),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_client_route() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/companies"), Some(Route::Companies));
        assert_eq!(Route::parse("/companies/"), Some(Route::Companies));
        assert_eq!(
            Route::parse("/companies/anderson-arias"),
            Some(Route::Company("anderson-arias".to_string()))
        );
        assert_eq!(Route::parse("/jobs"), Some(Route::Jobs));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/signup"), Some(Route::Signup));
        assert_eq!(Route::parse("/profile"), Some(Route::Profile));
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("/companies/a/b"), None);
        assert_eq!(Route::parse("jobs"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn path_roundtrips_through_parse() {
        for r in [
            Route::Home,
            Route::Companies,
            Route::Company("acme".to_string()),
            Route::Jobs,
            Route::Login,
            Route::Signup,
            Route::Profile,
        ] {
            assert_eq!(Route::parse(&r.path()), Some(r));
        }
    }

    #[test]
    fn guard_redirects_private_routes_without_user() {
        for r in [
            Route::Companies,
            Route::Company("acme".to_string()),
            Route::Jobs,
            Route::Profile,
        ] {
            assert_eq!(guard(r.clone(), false), Route::Login);
            assert_eq!(guard(r.clone(), true), r);
        }
        for r in [Route::Home, Route::Login, Route::Signup] {
            assert_eq!(guard(r.clone(), false), r);
        }
    }

    #[test]
    fn nav_links_follow_session() {
        let labels = |present| {
            nav_links(present)
                .iter()
                .map(|l| l.label())
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(false), vec!["Home", "Login", "Sign Up"]);
        assert_eq!(
            labels(true),
            vec!["Home", "Companies", "Jobs", "Profile", "Logout"]
        );
    }
}
