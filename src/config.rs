use crate::error::{DeskError, DeskResult};

// Operator credential checked at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password".to_string(),
        }
    }
}

impl Credentials {
    pub fn verify(&self, username: &str, password: &str) -> DeskResult<()> {
        if username == self.username && password == self.password {
            Ok(())
        } else {
            Err(DeskError::AuthenticationFailed)
        }
    }
}

// Front desk configuration options
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub capacity: u32,
    pub credentials: Credentials,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            credentials: Credentials::default(),
        }
    }
}

impl DeskConfig {
    pub fn validate(&self) -> DeskResult<()> {
        if self.capacity == 0 {
            return Err(DeskError::InvalidConfig(
                "capacity must be at least one room".to_string(),
            ));
        }
        if self.credentials.username.is_empty() {
            return Err(DeskError::InvalidConfig(
                "username must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
