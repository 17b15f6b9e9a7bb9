use std::fmt;

use crate::Environment;

/// Account credentials, fixed for the lifetime of the process.
///
/// Empty values are allowed; the registrar decides whether they are valid.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub environment: Environment,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new<U, P>(environment: Environment, username: U, password: P) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            environment,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("environment", &self.environment)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
