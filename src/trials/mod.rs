pub mod defs;
pub mod lookup;

use serde::{Serialize, Serializer};

use crate::model::Domain;

/// Where a trial entry points. Trials without a registry identifier get a
/// non-navigating placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialLink {
    Registry(String),
    Placeholder,
}

impl TrialLink {
    pub fn href(&self) -> &str {
        match self {
            TrialLink::Registry(url) => url,
            TrialLink::Placeholder => "#",
        }
    }

    pub fn is_navigable(&self) -> bool {
        matches!(self, TrialLink::Registry(_))
    }
}

impl Serialize for TrialLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.href())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialRef {
    pub name: &'static str,
    pub registry_id: Option<&'static str>,
    pub link: TrialLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialPanel {
    pub domain: Domain,
    pub label: String,
    pub trials: Vec<TrialRef>,
}

impl TrialPanel {
    pub fn heading(&self) -> String {
        format!("{}: {}", self.domain.panel_heading(), self.label)
    }

    pub fn note(&self) -> String {
        format!(
            "This knowledge base represents eligibility criteria patterns extracted from {} major clinical trials in {}. The percentages indicate how frequently each criterion appears across these trials.",
            self.trials.len(),
            self.label.to_lowercase()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/trials/tests.rs"]
mod tests;
