use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::Domain;
use crate::trials::defs::{builtin_registry_ids, builtin_trial_groups};
use crate::trials::{TrialLink, TrialPanel, TrialRef};

pub const REGISTRY_STUDY_URL: &str = "https://clinicaltrials.gov/study/";

static REGISTRY_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| builtin_registry_ids().iter().copied().collect());

/// Trial names for a label, in table order. Unknown labels give an empty list.
pub fn trials_for(domain: Domain, label: &str) -> &'static [&'static str] {
    builtin_trial_groups()
        .iter()
        .find(|g| g.domain == domain && g.label == label)
        .map(|g| g.trials)
        .unwrap_or(&[])
}

pub fn registry_id(trial: &str) -> Option<&'static str> {
    REGISTRY_INDEX.get(trial).copied()
}

pub fn resolve_trial(name: &'static str) -> TrialRef {
    let registry_id = registry_id(name);
    let link = match registry_id {
        Some(id) => TrialLink::Registry(format!("{REGISTRY_STUDY_URL}{id}")),
        None => TrialLink::Placeholder,
    };
    TrialRef {
        name,
        registry_id,
        link,
    }
}

pub fn resolve_trials(domain: Domain, label: &str) -> TrialPanel {
    TrialPanel {
        domain,
        label: label.to_string(),
        trials: trials_for(domain, label)
            .iter()
            .map(|&name| resolve_trial(name))
            .collect(),
    }
}
