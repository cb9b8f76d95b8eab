use crate::model::{Domain, UnifiedRecord};

/// Optional, AND-combined record filters. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub label: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl RecordFilter {
    pub fn label_only(label: Option<&str>) -> Self {
        Self {
            label: label.map(str::to_string),
            ..Self::default()
        }
    }

    fn label(&self) -> Option<&str> {
        non_empty(self.label.as_deref())
    }

    fn search(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

pub fn matches_label(record: &UnifiedRecord, domain: Domain, label: &str) -> bool {
    record.condition_for(domain) == Some(label)
}

/// `needle` must already be lowercased.
pub fn matches_search(record: &UnifiedRecord, needle: &str) -> bool {
    record.term.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
        || record.standard_code.to_lowercase().contains(needle)
}

pub fn filter_records<'a>(
    records: &'a [UnifiedRecord],
    domain: Domain,
    filter: &RecordFilter,
) -> Vec<&'a UnifiedRecord> {
    let label = filter.label();
    let needle = filter.search().map(str::to_lowercase);
    let category = filter.category();

    records
        .iter()
        .filter(|r| label.is_none_or(|l| matches_label(r, domain, l)))
        .filter(|r| needle.as_deref().is_none_or(|n| matches_search(r, n)))
        .filter(|r| category.is_none_or(|c| r.category == c))
        .collect()
}

/// Distinct categories of a dataset, ascending. This is the vocabulary offered
/// by the category filter.
pub fn category_vocabulary(records: &[UnifiedRecord]) -> Vec<String> {
    let mut out: Vec<String> = records.iter().map(|r| r.category.clone()).collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_filter.rs"]
mod tests;
