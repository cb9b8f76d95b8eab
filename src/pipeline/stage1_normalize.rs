use tracing::{debug, warn};

use crate::model::{Condition, Domain, InclusionExclusion, RawRecord, UnifiedRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeAudit {
    pub n_records: usize,
    pub unrecognized_inclusion: usize,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub records: Vec<UnifiedRecord>,
    pub audit: NormalizeAudit,
}

/// The overloaded source field becomes a disorder for neurology and a cancer
/// type for oncology. Every other field is copied as is.
pub fn normalize_record(raw: RawRecord, domain: Domain) -> UnifiedRecord {
    UnifiedRecord {
        term: raw.term,
        condition: Condition::for_domain(domain, raw.condition),
        category: raw.category,
        trial_percentage: raw.trial_percentage,
        inclusion_exclusion: InclusionExclusion::from_raw(raw.inclusion_exclusion),
        fhir_resource: raw.fhir_resource,
        standard_code: raw.standard_code,
        unstructured: raw.unstructured,
    }
}

pub fn normalize_records(raw: Vec<RawRecord>, domain: Domain) -> Vec<UnifiedRecord> {
    raw.into_iter()
        .map(|r| normalize_record(r, domain))
        .collect()
}

pub fn run_stage1(raw: Vec<RawRecord>, domain: Domain) -> Stage1Output {
    let records = normalize_records(raw, domain);

    let mut audit = NormalizeAudit {
        n_records: records.len(),
        unrecognized_inclusion: 0,
    };
    for (idx, record) in records.iter().enumerate() {
        if !record.inclusion_exclusion.is_recognized() {
            audit.unrecognized_inclusion += 1;
            debug!(
                index = idx,
                term = %record.term,
                value = record.inclusion_exclusion.as_str(),
                "unrecognized inclusion/exclusion value passed through"
            );
        }
    }
    if audit.unrecognized_inclusion > 0 {
        warn!(
            domain = %domain,
            count = audit.unrecognized_inclusion,
            "records carry inclusion/exclusion values other than Inclusion|Exclusion"
        );
    }

    Stage1Output { records, audit }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
