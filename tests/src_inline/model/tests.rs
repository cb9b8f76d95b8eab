use super::*;

#[test]
fn test_raw_record_camel_case_keys() {
    let json = r#"{
        "term": "MMSE score",
        "cancerType": "Alzheimer's Disease",
        "category": "Clinical",
        "trialPercentage": "92%",
        "inclusionExclusion": "Inclusion",
        "fhirResource": "Observation",
        "standardCode": "LOINC 72107-6",
        "unstructured": "MMSE between 20 and 26"
    }"#;
    let raw: RawRecord = serde_json::from_str(json).unwrap();
    assert_eq!(raw.term, "MMSE score");
    assert_eq!(raw.condition, "Alzheimer's Disease");
    assert_eq!(raw.trial_percentage, "92%");
    assert_eq!(raw.standard_code, "LOINC 72107-6");
}

#[test]
fn test_raw_record_disorder_alias_and_defaults() {
    let json = r#"{"term": "Seizure frequency", "disorder": "Epilepsy"}"#;
    let raw: RawRecord = serde_json::from_str(json).unwrap();
    assert_eq!(raw.condition, "Epilepsy");
    assert_eq!(raw.category, "");
    assert_eq!(raw.trial_percentage, "");
}

#[test]
fn test_raw_record_numeric_percentage_kept_as_text() {
    let json = r#"{"term": "Age", "trialPercentage": 0.45}"#;
    let raw: RawRecord = serde_json::from_str(json).unwrap();
    assert_eq!(raw.trial_percentage, "0.45");

    let json = r#"{"term": "Age", "trialPercentage": null}"#;
    let raw: RawRecord = serde_json::from_str(json).unwrap();
    assert_eq!(raw.trial_percentage, "");
}

#[test]
fn test_inclusion_exclusion_passthrough() {
    assert_eq!(
        InclusionExclusion::from_raw("Inclusion".to_string()),
        InclusionExclusion::Inclusion
    );
    assert_eq!(
        InclusionExclusion::from_raw("Exclusion".to_string()),
        InclusionExclusion::Exclusion
    );
    let odd = InclusionExclusion::from_raw("inclusion ".to_string());
    assert!(!odd.is_recognized());
    assert_eq!(odd.as_str(), "inclusion ");
    assert_eq!(serde_json::to_string(&odd).unwrap(), "\"inclusion \"");
}

#[test]
fn test_condition_accessors_are_exclusive() {
    let record = UnifiedRecord {
        term: "EGFR mutation".to_string(),
        condition: Condition::for_domain(Domain::Oncology, "Lung Cancer".to_string()),
        category: "Genetic".to_string(),
        trial_percentage: "60%".to_string(),
        inclusion_exclusion: InclusionExclusion::Inclusion,
        fhir_resource: "Observation".to_string(),
        standard_code: "LOINC 21665-5".to_string(),
        unstructured: String::new(),
    };
    assert_eq!(record.cancer_type(), Some("Lung Cancer"));
    assert_eq!(record.disorder(), None);
    assert_eq!(record.condition_for(Domain::Oncology), Some("Lung Cancer"));
    assert_eq!(record.condition_for(Domain::Neurology), None);
    assert_eq!(record.condition.domain(), Domain::Oncology);
}

#[test]
fn test_domain_vocabulary() {
    assert_eq!(Domain::Neurology.default_label(), "Alzheimer's Disease");
    assert_eq!(Domain::Oncology.default_label(), "Lung Cancer");
    assert_eq!(Domain::Neurology.labels().len(), 6);
    assert_eq!(Domain::Oncology.labels().len(), 4);
    assert_eq!(Domain::Oncology.condition_heading(), "Cancer Type");
}

#[test]
fn test_default_profile() {
    let profile = profile::AggregationProfile::default();
    assert_eq!(profile.top_categories, 6);
    assert_eq!(profile.high_frequency_min, 80.0);
}
