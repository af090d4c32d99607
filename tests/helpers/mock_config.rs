// ==========================================
// Mock configuration reader
// ==========================================

use livestock_manager::config::{ProjectionConfigReader, ProjectionRules};
use std::error::Error;

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub rules: ProjectionRules,
    pub privileged_emails: Vec<String>,
    pub locale: String,
    /// Makes every read fail
    pub broken: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            rules: ProjectionRules::default(),
            privileged_emails: vec!["admin@coop.org".to_string()],
            locale: "pt-BR".to_string(),
            broken: false,
        }
    }
}

impl MockConfig {
    pub fn with_rules(rules: ProjectionRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), Box<dyn Error>> {
        if self.broken {
            Err("mock config unavailable".into())
        } else {
            Ok(())
        }
    }
}

impl ProjectionConfigReader for MockConfig {
    fn get_projection_rules(&self) -> Result<ProjectionRules, Box<dyn Error>> {
        self.check()?;
        Ok(self.rules.clone())
    }

    fn get_privileged_emails(&self) -> Result<Vec<String>, Box<dyn Error>> {
        self.check()?;
        Ok(self.privileged_emails.clone())
    }

    fn get_locale(&self) -> Result<String, Box<dyn Error>> {
        self.check()?;
        Ok(self.locale.clone())
    }
}
