//! CLI presentation: text report formatters for capture and comparison runs.

use crate::snapshot::Capture;
use crate::summary::{CompareSummary, DiffCategory};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a capture run as human-readable text.
pub fn format_capture_report(capture: &Capture, output_path: &Path) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Snapshot")));
    out.push_str(&format!(
        "  Directory: {}\n",
        capture.snapshot.metadata.directory
    ));
    out.push_str(&format!("  Files hashed: {}\n", capture.files_hashed));
    out.push_str(&format!("  Written to: {}\n", output_path.display()));
    out
}

/// Format a comparison run as human-readable text using comfy-table and
/// styled headings. Non-empty categories are tabulated in stable order;
/// identical trees get the identical message instead.
pub fn format_compare_report(
    directory: &Path,
    info_path: &Path,
    summary: &CompareSummary,
    summary_path: Option<&Path>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Comparison")));
    out.push_str(&format!("  Target directory: {}\n", directory.display()));
    out.push_str(&format!("  Snapshot: {}\n", info_path.display()));
    out.push_str(&format!("  Files hashed: {}\n\n", summary.files_hashed));

    if summary.is_identical() {
        out.push_str("Content is identical.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Category", "Entries"]);
    for category in DiffCategory::ALL {
        let count = summary.entries(category).len();
        if count > 0 {
            table.add_row(vec![category.to_string(), count.to_string()]);
        }
    }
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!("Total: {} difference(s).\n", summary.total()));
    if let Some(path) = summary_path {
        out.push_str(&format!("Summary written to: {}\n", path.display()));
    }
    out
}
