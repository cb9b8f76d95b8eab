use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::{Domain, UnifiedRecord};

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortField {
    #[default]
    Term,
    /// Disorder for neurology, cancer type for oncology.
    Condition,
    Category,
    TrialPercentage,
    InclusionExclusion,
    FhirResource,
    StandardCode,
    Unstructured,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Term => "term",
            SortField::Condition => "condition",
            SortField::Category => "category",
            SortField::TrialPercentage => "trial-percentage",
            SortField::InclusionExclusion => "inclusion-exclusion",
            SortField::FhirResource => "fhir-resource",
            SortField::StandardCode => "standard-code",
            SortField::Unstructured => "unstructured",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: the active field flips direction, any other field
    /// becomes active in ascending order.
    pub fn select(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Replays a sequence of header clicks from the default state.
    pub fn from_clicks(clicks: &[SortField]) -> Self {
        clicks
            .iter()
            .fold(Self::default(), |state, &field| state.select(field))
    }
}

/// Missing values read as the empty string.
pub fn field_value(record: &UnifiedRecord, field: SortField, domain: Domain) -> &str {
    match field {
        SortField::Term => &record.term,
        SortField::Condition => record.condition_for(domain).unwrap_or(""),
        SortField::Category => &record.category,
        SortField::TrialPercentage => &record.trial_percentage,
        SortField::InclusionExclusion => record.inclusion_exclusion.as_str(),
        SortField::FhirResource => &record.fhir_resource,
        SortField::StandardCode => &record.standard_code,
        SortField::Unstructured => &record.unstructured,
    }
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Compares base letters first (accents and case ignored), then accents,
/// then case with the lowercase form first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

pub fn sort_records<'a>(
    rows: &[&'a UnifiedRecord],
    domain: Domain,
    state: SortState,
) -> Vec<&'a UnifiedRecord> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        let av = field_value(a, state.field, domain);
        let bv = field_value(b, state.field, domain);
        match state.direction {
            SortDirection::Ascending => locale_compare(av, bv),
            SortDirection::Descending => locale_compare(bv, av),
        }
    });
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_sort.rs"]
mod tests;
