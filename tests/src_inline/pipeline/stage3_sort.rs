use super::*;
use crate::pipeline::support::{neuro, onco};

fn terms(rows: &[&UnifiedRecord]) -> Vec<String> {
    rows.iter().map(|r| r.term.clone()).collect()
}

#[test]
fn test_default_state_is_term_ascending() {
    let state = SortState::default();
    assert_eq!(state.field, SortField::Term);
    assert_eq!(state.direction, SortDirection::Ascending);
}

#[test]
fn test_select_toggles_same_field_and_resets_on_new_field() {
    let state = SortState::default().select(SortField::Term);
    assert_eq!(state.direction, SortDirection::Descending);

    let state = state.select(SortField::Category);
    assert_eq!(state.field, SortField::Category);
    assert_eq!(state.direction, SortDirection::Ascending);

    let state = state.select(SortField::Category).select(SortField::Category);
    assert_eq!(state.direction, SortDirection::Ascending);
}

#[test]
fn test_from_clicks_replays_sequence() {
    assert_eq!(SortState::from_clicks(&[]), SortState::default());
    let state = SortState::from_clicks(&[SortField::Category, SortField::Category]);
    assert_eq!(
        state,
        SortState {
            field: SortField::Category,
            direction: SortDirection::Descending,
        }
    );
}

#[test]
fn test_locale_compare_ignores_case_first() {
    assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
    assert_eq!(locale_compare("a", "A"), Ordering::Less);
    assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    assert_eq!(locale_compare("", "x"), Ordering::Less);
}

#[test]
fn test_locale_compare_accents_sort_with_base_letter() {
    assert_eq!(locale_compare("Émile sign", "Zoster"), Ordering::Less);
    assert_eq!(locale_compare("Ménière disease", "Meningitis"), Ordering::Less);
    assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
    assert_eq!(locale_compare("résumé", "Résumé"), Ordering::Less);
}

#[test]
fn test_sort_accented_terms() {
    let data = vec![
        neuro("Meningitis", "ALS", "Clinical", "10%"),
        neuro("Ménière disease", "ALS", "Clinical", "10%"),
        neuro("Zoster", "ALS", "Clinical", "10%"),
        neuro("Émile sign", "ALS", "Clinical", "10%"),
    ];
    let rows: Vec<&UnifiedRecord> = data.iter().collect();

    let asc = sort_records(&rows, Domain::Neurology, SortState::default());
    assert_eq!(
        terms(&asc),
        vec!["Émile sign", "Ménière disease", "Meningitis", "Zoster"]
    );
}

#[test]
fn test_sort_ascending_and_descending() {
    let data = vec![
        neuro("beta", "ALS", "Lab", "10%"),
        neuro("Alpha", "ALS", "Clinical", "20%"),
        neuro("gamma", "ALS", "Imaging", "30%"),
    ];
    let rows: Vec<&UnifiedRecord> = data.iter().collect();

    let asc = sort_records(&rows, Domain::Neurology, SortState::default());
    assert_eq!(terms(&asc), vec!["Alpha", "beta", "gamma"]);

    let desc = sort_records(&rows, Domain::Neurology, SortState::default().select(SortField::Term));
    assert_eq!(terms(&desc), vec!["gamma", "beta", "Alpha"]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let data = vec![
        neuro("first", "ALS", "Lab", "10%"),
        neuro("second", "ALS", "Clinical", "10%"),
        neuro("third", "ALS", "Lab", "10%"),
    ];
    let rows: Vec<&UnifiedRecord> = data.iter().collect();
    let state = SortState::from_clicks(&[SortField::Category]);
    let sorted = sort_records(&rows, Domain::Neurology, state);
    assert_eq!(terms(&sorted), vec!["second", "first", "third"]);

    let desc = sort_records(&rows, Domain::Neurology, state.select(SortField::Category));
    assert_eq!(terms(&desc), vec!["first", "third", "second"]);
}

#[test]
fn test_sort_idempotent() {
    let data = vec![
        neuro("d", "ALS", "Lab", "10%"),
        neuro("B", "ALS", "Lab", "80%"),
        neuro("c", "ALS", "Imaging", "40%"),
        neuro("a", "ALS", "Lab", "100%"),
    ];
    let rows: Vec<&UnifiedRecord> = data.iter().collect();
    for field in [SortField::Term, SortField::Category, SortField::TrialPercentage] {
        for state in [
            SortState::from_clicks(&[field]),
            SortState::from_clicks(&[field, field]),
        ] {
            let once = sort_records(&rows, Domain::Neurology, state);
            let twice = sort_records(&once, Domain::Neurology, state);
            assert_eq!(terms(&once), terms(&twice));
        }
    }
}

#[test]
fn test_double_toggle_restores_order() {
    let data = vec![
        neuro("d", "ALS", "Lab", "10%"),
        neuro("b", "ALS", "Lab", "80%"),
        neuro("c", "ALS", "Imaging", "40%"),
    ];
    let rows: Vec<&UnifiedRecord> = data.iter().collect();
    let state = SortState::from_clicks(&[SortField::Category]);
    let toggled_twice = state.select(SortField::Category).select(SortField::Category);
    assert_eq!(
        terms(&sort_records(&rows, Domain::Neurology, state)),
        terms(&sort_records(&rows, Domain::Neurology, toggled_twice))
    );
}

#[test]
fn test_condition_missing_for_domain_sorts_as_empty() {
    let data = vec![
        onco("x", "Skin Cancer", "Lab", "10%"),
        neuro("y", "ALS", "Lab", "10%"),
        onco("z", "Blood Cancer", "Lab", "10%"),
    ];
    assert_eq!(field_value(&data[1], SortField::Condition, Domain::Oncology), "");

    let rows: Vec<&UnifiedRecord> = data.iter().collect();
    let state = SortState::from_clicks(&[SortField::Condition]);
    let sorted = sort_records(&rows, Domain::Oncology, state);
    assert_eq!(terms(&sorted), vec!["y", "z", "x"]);
}
