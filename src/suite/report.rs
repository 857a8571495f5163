use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// The check could not run because a fixture it depends on is missing.
    Errored,
}

impl CheckStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CheckStatus::Passed => "PASS",
            CheckStatus::Failed => "FAIL",
            CheckStatus::Errored => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub status: CheckStatus,
    pub message: Option<String>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub base_url: String,
    pub started_at: String,
    pub elapsed_ms: u64,
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn count(&self, status: CheckStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }

    /// Outcomes that did not pass.
    #[must_use]
    pub fn unsuccessful(&self) -> usize {
        self.total().saturating_sub(self.count(CheckStatus::Passed))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.unsuccessful() == 0
    }

    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    #[must_use]
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.outcomes.len().saturating_add(1));
        for outcome in &self.outcomes {
            let mut line = format!(
                "{:<5} {} ({} ms)",
                outcome.status.label(),
                outcome.name,
                outcome.elapsed_ms
            );
            if let Some(message) = outcome.message.as_deref() {
                line.push_str(": ");
                line.push_str(message);
            }
            lines.push(line);
        }
        lines.push(format!(
            "{} passed, {} failed, {} errored in {} ms against {}",
            self.count(CheckStatus::Passed),
            self.count(CheckStatus::Failed),
            self.count(CheckStatus::Errored),
            self.elapsed_ms,
            self.base_url
        ));
        lines
    }

    /// # Errors
    ///
    /// Returns an error when the report cannot be serialized.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
