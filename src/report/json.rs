use crate::report::{DashboardView, RecordRow};

pub fn render_summary_json(view: &DashboardView) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(view)?;
    out.push('\n');
    Ok(out)
}

pub fn render_rows_json(rows: &[RecordRow]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(rows)?;
    out.push('\n');
    Ok(out)
}
