pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::{Domain, UnifiedRecord};
use crate::pipeline::stage4_aggregate::{BucketCount, CategoryCount, StatsSummary};
use crate::trials::TrialPanel;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionSummary {
    pub label: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_field: &'static str,
    pub sort_direction: &'static str,
}

/// One table row in the shape of the source records: exactly one of
/// `disorder`/`cancerType` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancer_type: Option<String>,
    pub category: String,
    pub trial_percentage: String,
    pub inclusion_exclusion: String,
    pub fhir_resource: String,
    pub standard_code: String,
    pub unstructured: String,
}

impl RecordRow {
    pub fn from_record(record: &UnifiedRecord) -> Self {
        Self {
            term: record.term.clone(),
            disorder: record.disorder().map(str::to_string),
            cancer_type: record.cancer_type().map(str::to_string),
            category: record.category.clone(),
            trial_percentage: record.trial_percentage.clone(),
            inclusion_exclusion: record.inclusion_exclusion.as_str().to_string(),
            fhir_resource: record.fhir_resource.clone(),
            standard_code: record.standard_code.clone(),
            unstructured: record.unstructured.clone(),
        }
    }

    pub fn condition(&self) -> &str {
        self.disorder
            .as_deref()
            .or(self.cancer_type.as_deref())
            .unwrap_or("")
    }
}

/// Everything one dashboard page shows for a selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub tool: ToolMeta,
    pub domain: Domain,
    pub title: String,
    pub subtitle: String,
    pub badge: &'static str,
    pub dataset_terms: usize,
    pub selection: SelectionSummary,
    pub stats: StatsSummary,
    pub category_distribution: Vec<CategoryCount>,
    pub percentage_histogram: Vec<BucketCount>,
    pub unparseable_percentages: usize,
    pub trials: Option<TrialPanel>,
    pub categories: Vec<String>,
    pub matching_terms: usize,
    #[serde(skip)]
    pub rows: Vec<RecordRow>,
}

/// Whole-number share, as shown on pie slice labels.
pub fn share_percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", count as f64 * 100.0 / total as f64)
}

/// Tabs and line breaks would break TSV rows.
pub fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
