use super::*;
use crate::pipeline::stage3_sort::SortField;
use crate::pipeline::support::{neuro, onco};

fn neuro_set() -> Vec<UnifiedRecord> {
    vec![
        neuro("MMSE score", "Alzheimer's Disease", "Clinical", "92%"),
        neuro("Amyloid PET", "Alzheimer's Disease", "Imaging", "75%"),
        neuro("Age 50-85", "Alzheimer's Disease", "Demographics", "100%"),
        neuro("CDR global", "Alzheimer's Disease", "Clinical", "0.6"),
        neuro("Seizure count", "Epilepsy", "Clinical", "88%"),
    ]
}

#[test]
fn test_default_selection_for_domain() {
    let sel = Selection::for_domain(Domain::Oncology);
    assert_eq!(sel.label.as_deref(), Some("Lung Cancer"));
    assert_eq!(sel.sort, SortState::default());
    assert!(sel.search.is_none());
}

#[test]
fn test_charts_follow_label_only() {
    let data = neuro_set();
    let mut sel = Selection::for_domain(Domain::Neurology);
    sel.search = Some("mmse".to_string());
    let view = build_dashboard(&data, &sel, &AggregationProfile::default());

    assert_eq!(view.dataset_terms, 5);
    assert_eq!(view.stats.total_terms, 4);
    assert_eq!(view.stats.top_category, "Clinical");
    assert_eq!(view.stats.high_frequency_terms, 2);
    let charted: usize = view.category_distribution.iter().map(|c| c.count).sum();
    assert_eq!(charted, 4);

    assert_eq!(view.matching_terms, 1);
    assert_eq!(view.rows[0].term, "MMSE score");
}

#[test]
fn test_rows_sorted_and_shaped() {
    let data = neuro_set();
    let mut sel = Selection::for_domain(Domain::Neurology);
    sel.sort = SortState::from_clicks(&[SortField::TrialPercentage]);
    let view = build_dashboard(&data, &sel, &AggregationProfile::default());

    let pcts: Vec<&str> = view.rows.iter().map(|r| r.trial_percentage.as_str()).collect();
    assert_eq!(pcts, vec!["0.6", "100%", "75%", "92%"]);
    assert!(view.rows.iter().all(|r| r.cancer_type.is_none()));
    assert_eq!(view.selection.sort_field, "trial-percentage");
    assert_eq!(view.selection.sort_direction, "asc");
}

#[test]
fn test_header_and_trials() {
    let data = neuro_set();
    let view = build_dashboard(
        &data,
        &Selection::for_domain(Domain::Neurology),
        &AggregationProfile::default(),
    );
    assert_eq!(view.title, "Neurology Eligibility Terms");
    assert_eq!(view.subtitle, "Knowledge base for Alzheimer's Disease");
    assert_eq!(view.badge, "Neurological Disorders");
    let panel = view.trials.as_ref().unwrap();
    assert_eq!(panel.trials.len(), 12);
    assert_eq!(
        view.categories,
        vec!["Clinical", "Demographics", "Imaging"]
    );
}

#[test]
fn test_unknown_label_gives_empty_results() {
    let data = vec![
        onco("ECOG 0-1", "Lung Cancer", "Clinical", "90%"),
        onco("HER2+", "Breast Cancer", "Genetic", "70%"),
    ];
    let mut sel = Selection::for_domain(Domain::Oncology);
    sel.label = Some("Epilepsy".to_string());
    let view = build_dashboard(&data, &sel, &AggregationProfile::default());

    assert!(view.rows.is_empty());
    assert_eq!(view.stats.total_terms, 0);
    assert_eq!(view.stats.top_category, "N/A");
    assert!(view.category_distribution.is_empty());
    assert!(view.percentage_histogram.is_empty());
    assert!(view.trials.unwrap().trials.is_empty());
}

#[test]
fn test_all_labels_selection() {
    let data = neuro_set();
    let mut sel = Selection::for_domain(Domain::Neurology);
    sel.label = None;
    let view = build_dashboard(&data, &sel, &AggregationProfile::default());
    assert_eq!(view.stats.total_terms, 5);
    assert_eq!(view.matching_terms, 5);
    assert!(view.trials.is_none());
    assert_eq!(view.subtitle, "Knowledge base for all neurological disorders");
}
