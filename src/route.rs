//! Navigable routes and their paths.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const PROJECTS_PREFIX: &str = "/projects/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    Project(String),
    SignIn,
    SignUp,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Project(id) => format!("{PROJECTS_PREFIX}{id}"),
            Route::SignIn => "/sign-in".to_string(),
            Route::SignUp => "/sign-up".to_string(),
        }
    }

    /// Routes drawn inside the sidebar/top-bar layout.
    pub fn uses_app_layout(&self) -> bool {
        match self {
            Route::Dashboard | Route::Project(_) => true,
            Route::Landing | Route::SignIn | Route::SignUp => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let path = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        match path {
            "/" => Ok(Route::Landing),
            "/dashboard" => Ok(Route::Dashboard),
            "/sign-in" => Ok(Route::SignIn),
            "/sign-up" => Ok(Route::SignUp),
            _ => match path.strip_prefix(PROJECTS_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Ok(Route::Project(id.to_string()))
                }
                _ => Err(Error::UnknownRoute(raw.to_string())),
            },
        }
    }
}
