use crate::report::{DashboardView, share_percent};

const BAR_WIDTH: usize = 30;

pub fn render_report_text(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", view.title));
    out.push_str(&"=".repeat(view.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", view.subtitle));
    out.push_str(&format!(
        "{} | {} terms in dataset\n\n",
        view.badge, view.dataset_terms
    ));

    out.push_str("1. Key statistics\n");
    out.push_str(&format!("Total terms: {}\n", view.stats.total_terms));
    out.push_str(&format!("Categories: {}\n", view.stats.unique_categories));
    out.push_str(&format!(
        "High frequency (>=80% of trials): {}\n",
        view.stats.high_frequency_terms
    ));
    out.push_str(&format!("Top category: {}\n\n", view.stats.top_category));

    out.push_str("2. Category distribution\n");
    if view.category_distribution.is_empty() {
        out.push_str("(no terms)\n");
    }
    let total = view.stats.total_terms;
    for entry in &view.category_distribution {
        out.push_str(&format!(
            "{} ({}): {}\n",
            entry.category,
            share_percent(entry.count, total),
            entry.count
        ));
    }
    out.push('\n');

    out.push_str("3. Trial frequency distribution\n");
    if view.percentage_histogram.is_empty() {
        out.push_str("(no terms)\n");
    }
    let max = view
        .percentage_histogram
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bucket in &view.percentage_histogram {
        out.push_str(&format!(
            "{:>7} {:>5} {}\n",
            bucket.range.label(),
            bucket.count,
            bar(bucket.count, max)
        ));
    }
    if view.unparseable_percentages > 0 {
        out.push_str(&format!(
            "Note: {} term(s) without a readable percentage are counted in 0-19%.\n",
            view.unparseable_percentages
        ));
    }
    out.push('\n');

    out.push_str("4. Clinical trials analyzed\n");
    match &view.trials {
        Some(panel) => {
            out.push_str(&format!("{}\n", panel.heading()));
            for trial in &panel.trials {
                out.push_str(&format!("- {} <{}>\n", trial.name, trial.link.href()));
            }
            out.push_str(&format!("Note: {}\n\n", panel.note()));
        }
        None => out.push_str("(no label selected)\n\n"),
    }

    out.push_str(&format!(
        "5. Eligibility terms ({} matching)\n",
        view.matching_terms
    ));
    if view.rows.is_empty() {
        out.push_str("No eligibility terms found matching your criteria.\n");
    }
    for row in &view.rows {
        out.push_str(&format!(
            "- {} | {} | {} | {} | {} | {} | {}\n",
            row.term,
            row.condition(),
            row.category,
            row.trial_percentage,
            row.inclusion_exclusion,
            row.fhir_resource,
            row.standard_code
        ));
    }

    out
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "#".repeat(width)
}
