//! Deployment environments.

use std::fmt;
use std::str::FromStr;

/// A deployment environment.
///
/// Each variant owns its own directory under the configured root path
/// (`<root>/qa`, `<root>/production`) and its own settings record in
/// the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Environment {
    Qa,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Qa, Environment::Production];

    /// Directory segment under the root path.
    pub fn segment(&self) -> &'static str {
        match self {
            Environment::Qa => "qa",
            Environment::Production => "production",
        }
    }

    /// Upper-case label used in operator-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Qa => "QA",
            Environment::Production => "PRODUCTION",
        }
    }

    /// Build configuration file passed to the build tool (`qa.cfg`).
    pub fn build_config_name(&self) -> String {
        format!("{}.cfg", self.segment())
    }

    /// Production releases must match what QA is currently running.
    pub fn requires_qa_cross_check(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Returned when an environment name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}' (expected 'qa' or 'production')")]
pub struct ParseEnvironmentError(pub String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qa" => Ok(Environment::Qa),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}
