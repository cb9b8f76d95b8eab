use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::KbError;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{DashboardView, tsv_field};
use crate::trials::TrialPanel;

pub const TERMS_FILE: &str = "terms.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";
pub const TRIALS_FILE: &str = "trials.tsv";

pub fn write_reports(view: &DashboardView, out_dir: &Path) -> Result<(), KbError> {
    fs::create_dir_all(out_dir)?;

    write_terms_tsv(view, &out_dir.join(TERMS_FILE))?;

    let json = render_summary_json(view)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;

    write_text(&out_dir.join(REPORT_FILE), &render_report_text(view))?;

    let trials_path = out_dir.join(TRIALS_FILE);
    match &view.trials {
        Some(panel) => write_trials_tsv(panel, &trials_path)?,
        // A panel from an earlier run in the same directory must not survive.
        None => remove_if_present(&trials_path)?,
    }

    info!(
        out_dir = %out_dir.display(),
        rows = view.rows.len(),
        "reports written"
    );
    Ok(())
}

/// Columns follow the dashboard table.
fn write_terms_tsv(view: &DashboardView, path: &Path) -> Result<(), KbError> {
    let mut w = BufWriter::new(File::create(path)?);
    let condition_col = view.domain.condition_heading().to_lowercase().replace(' ', "_");
    let header = [
        "term",
        condition_col.as_str(),
        "category",
        "trial_percentage",
        "inclusion_exclusion",
        "fhir_resource",
        "standard_code",
        "unstructured",
    ]
    .join("\t");
    writeln!(w, "{header}")?;

    for row in &view.rows {
        let fields = [
            row.term.as_str(),
            row.condition(),
            row.category.as_str(),
            row.trial_percentage.as_str(),
            row.inclusion_exclusion.as_str(),
            row.fhir_resource.as_str(),
            row.standard_code.as_str(),
            row.unstructured.as_str(),
        ];
        let line = fields
            .iter()
            .map(|f| tsv_field(f))
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(w, "{line}")?;
    }
    w.flush()?;
    Ok(())
}

fn write_trials_tsv(panel: &TrialPanel, path: &Path) -> Result<(), KbError> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "trial\tregistry_id\thref")?;
    for trial in &panel.trials {
        writeln!(
            w,
            "{}\t{}\t{}",
            tsv_field(trial.name),
            trial.registry_id.unwrap_or(""),
            trial.link.href()
        )?;
    }
    w.flush()?;
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<(), KbError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn write_text(path: &Path, contents: &str) -> Result<(), KbError> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
