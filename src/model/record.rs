use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::Domain;

/// One eligibility term as it appears in a dataset file.
///
/// `condition` is the overloaded source field: it names a disorder in the
/// neurology file and a cancer type in the oncology file. Only the caller knows
/// which, so the raw shape never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    pub term: String,
    #[serde(rename = "cancerType", alias = "disorder")]
    pub condition: String,
    pub category: String,
    #[serde(deserialize_with = "text_or_number")]
    pub trial_percentage: String,
    pub inclusion_exclusion: String,
    pub fhir_resource: String,
    pub standard_code: String,
    pub unstructured: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

/// Disorder or cancer type, tagged by the domain it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Disorder(String),
    CancerType(String),
}

impl Condition {
    pub fn for_domain(domain: Domain, label: String) -> Self {
        match domain {
            Domain::Neurology => Condition::Disorder(label),
            Domain::Oncology => Condition::CancerType(label),
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Condition::Disorder(_) => Domain::Neurology,
            Condition::CancerType(_) => Domain::Oncology,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::Disorder(s) | Condition::CancerType(s) => s,
        }
    }
}

/// Inclusion/exclusion marker. Values outside the two known spellings are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InclusionExclusion {
    Inclusion,
    Exclusion,
    Unrecognized(String),
}

impl InclusionExclusion {
    pub fn from_raw(raw: String) -> Self {
        match raw.as_str() {
            "Inclusion" => InclusionExclusion::Inclusion,
            "Exclusion" => InclusionExclusion::Exclusion,
            _ => InclusionExclusion::Unrecognized(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InclusionExclusion::Inclusion => "Inclusion",
            InclusionExclusion::Exclusion => "Exclusion",
            InclusionExclusion::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, InclusionExclusion::Unrecognized(_))
    }
}

impl Serialize for InclusionExclusion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Domain-independent record shape consumed by every downstream stage.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedRecord {
    pub term: String,
    pub condition: Condition,
    pub category: String,
    pub trial_percentage: String,
    pub inclusion_exclusion: InclusionExclusion,
    pub fhir_resource: String,
    pub standard_code: String,
    pub unstructured: String,
}

impl UnifiedRecord {
    pub fn disorder(&self) -> Option<&str> {
        match &self.condition {
            Condition::Disorder(s) => Some(s),
            Condition::CancerType(_) => None,
        }
    }

    pub fn cancer_type(&self) -> Option<&str> {
        match &self.condition {
            Condition::CancerType(s) => Some(s),
            Condition::Disorder(_) => None,
        }
    }

    /// The condition label if it belongs to `domain`, otherwise absent.
    pub fn condition_for(&self, domain: Domain) -> Option<&str> {
        (self.condition.domain() == domain).then(|| self.condition.label())
    }
}
