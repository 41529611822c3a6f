use std::collections::HashMap;
use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::config::Credential;
use crate::errors::{DbtapError, Result};

/// Access role a request is issued under. The server grants each role a
/// different slice of the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    DbAdmin,
    DataWrite,
    DataRead,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Owner => "owner",
            Role::DbAdmin => "db_admin",
            Role::DataWrite => "data_write",
            Role::DataRead => "data_read",
        })
    }
}

/// Role-to-token lookup handed to the client at construction. Tokens are
/// opaque Basic-auth payloads; the context never inspects them.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    tokens: HashMap<Role, String>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive one token per credential pair by base64-encoding
    /// `username:password`.
    pub fn from_credentials(credentials: &[Credential]) -> Self {
        let mut ctx = Self::new();
        for cred in credentials {
            let token = STANDARD.encode(format!("{}:{}", cred.username, cred.password));
            ctx.tokens.insert(cred.role, token);
        }
        ctx
    }

    /// Register an externally issued token verbatim.
    pub fn token(mut self, role: Role, token: impl Into<String>) -> Self {
        self.tokens.insert(role, token.into());
        self
    }

    pub fn token_for(&self, role: Role) -> Result<&str> {
        self.tokens
            .get(&role)
            .map(String::as_str)
            .ok_or_else(|| DbtapError::AuthError(format!("no token registered for role `{role}`")))
    }
}
