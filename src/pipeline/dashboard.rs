use tracing::{debug, warn};

use crate::model::profile::AggregationProfile;
use crate::model::{Domain, UnifiedRecord};
use crate::pipeline::stage2_filter::{RecordFilter, category_vocabulary, filter_records};
use crate::pipeline::stage3_sort::{SortState, sort_records};
use crate::pipeline::stage4_aggregate::run_stage4;
use crate::report::{DashboardView, RecordRow, SelectionSummary, ToolMeta};
use crate::trials::lookup::resolve_trials;

/// UI selection state. Owned by the caller and passed down on every rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub domain: Domain,
    pub label: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortState,
}

impl Selection {
    /// Selection shown right after switching to `domain`.
    pub fn for_domain(domain: Domain) -> Self {
        Self {
            domain,
            label: Some(domain.default_label().to_string()),
            search: None,
            category: None,
            sort: SortState::default(),
        }
    }

    /// Filter for the table: label, search text and category.
    pub fn table_filter(&self) -> RecordFilter {
        RecordFilter {
            label: self.label.clone(),
            search: self.search.clone(),
            category: self.category.clone(),
        }
    }

    /// Stats cards and charts only follow the label.
    pub fn chart_filter(&self) -> RecordFilter {
        RecordFilter::label_only(self.label.as_deref())
    }
}

pub fn build_dashboard(
    records: &[UnifiedRecord],
    selection: &Selection,
    profile: &AggregationProfile,
) -> DashboardView {
    let domain = selection.domain;
    let categories = category_vocabulary(records);
    if let Some(category) = selection.category.as_deref().filter(|c| !c.is_empty()) {
        if !categories.iter().any(|c| c == category) {
            warn!(category, "category filter matches no category in the dataset");
        }
    }

    let charted = filter_records(records, domain, &selection.chart_filter());
    let stage4 = run_stage4(&charted, profile);

    let tabled = filter_records(records, domain, &selection.table_filter());
    let sorted = sort_records(&tabled, domain, selection.sort);
    debug!(
        charted = charted.len(),
        tabled = sorted.len(),
        "selection applied"
    );

    let label = selection.label.as_deref().filter(|l| !l.is_empty());
    let trials = label.map(|l| resolve_trials(domain, l));

    DashboardView {
        tool: ToolMeta::current(),
        domain,
        title: format!("{} Eligibility Terms", domain.title()),
        subtitle: match label {
            Some(l) => format!("Knowledge base for {l}"),
            None => format!("Knowledge base for all {}", domain.badge().to_lowercase()),
        },
        badge: domain.badge(),
        dataset_terms: records.len(),
        selection: SelectionSummary {
            label: label.map(str::to_string),
            search: selection.search.clone(),
            category: selection.category.clone(),
            sort_field: selection.sort.field.as_str(),
            sort_direction: selection.sort.direction.as_str(),
        },
        stats: stage4.stats,
        category_distribution: stage4.distribution,
        percentage_histogram: stage4.histogram,
        unparseable_percentages: stage4.unparseable_percentages,
        trials,
        categories,
        matching_terms: sorted.len(),
        rows: sorted.into_iter().map(RecordRow::from_record).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/dashboard.rs"]
mod tests;
