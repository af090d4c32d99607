// ==========================================
// Livestock Manager - access policy
// ==========================================
// A principal may act on an animal when it owns the animal's property
// or is privileged (administrator allowlist)
// ==========================================

use crate::config::ProjectionConfigReader;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Env var with extra privileged emails (comma separated).
pub const ADMIN_EMAILS_ENV: &str = "LIVESTOCK_ADMIN_EMAILS";

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
}

impl Principal {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
        }
    }
}

/// Decides whether a principal bypasses ownership checks.
pub trait AccessPolicy: Send + Sync {
    fn is_privileged(&self, principal: &Principal) -> bool;
}

// ==========================================
// AdminAllowlist
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AdminAllowlist {
    emails: HashSet<String>,
}

impl AdminAllowlist {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Allowlist from the `privileged_emails` config key plus `LIVESTOCK_ADMIN_EMAILS`.
    ///
    /// A config read failure is logged and leaves only the env entries.
    pub fn from_config(config: &dyn ProjectionConfigReader) -> Self {
        let mut emails = match config.get_privileged_emails() {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read privileged emails");
                Vec::new()
            }
        };
        if let Ok(raw) = std::env::var(ADMIN_EMAILS_ENV) {
            emails.extend(raw.split(',').map(str::to_string));
        }
        Self::new(emails)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

impl AccessPolicy for AdminAllowlist {
    fn is_privileged(&self, principal: &Principal) -> bool {
        self.emails.contains(&principal.email.trim().to_lowercase())
    }
}
