// Markdown report generation.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AnalysisReport;

/// Render a report as markdown.
pub fn render(report: &AnalysisReport) -> String {
    let mut md = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(md, "# Keyword Co-occurrence Report\n");
    let _ = writeln!(
        md,
        "Generated: {}\n",
        report.generated_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    );

    let _ = writeln!(md, "## Parameters\n");
    let _ = writeln!(md, "- alpha (temporal weight): {}", report.alpha);
    let _ = writeln!(md, "- delta (distance threshold): {}\n", report.delta);

    let _ = writeln!(md, "## Keywords\n");
    if report.keywords.is_empty() {
        let _ = writeln!(md, "_No keywords._\n");
    } else {
        let _ = writeln!(md, "| Keyword | Occurrences |");
        let _ = writeln!(md, "|---------|-------------|");
        for k in &report.keywords {
            let _ = writeln!(md, "| {} | {} |", escape_cell(&k.keyword), k.occurrences);
        }
        md.push('\n');
    }

    let _ = writeln!(
        md,
        "## Possible pairs ({})\n\nAll occurrence distances are below delta.\n",
        report.possible.len()
    );
    write_pairs(&mut md, &report.possible, "&");

    let _ = writeln!(
        md,
        "## Impossible pairs ({})\n\nAt least one occurrence distance is at or above delta.\n",
        report.impossible.len()
    );
    write_pairs(&mut md, &report.impossible, "<-->");

    md
}

/// Render and write a report to disk.
pub fn write_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    std::fs::write(path, render(report))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

fn write_pairs(md: &mut String, pairs: &[crate::analysis::KeywordPair], joiner: &str) {
    if pairs.is_empty() {
        md.push_str("None\n\n");
        return;
    }
    for pair in pairs {
        let _ = writeln!(
            md,
            "- {} {joiner} {}",
            escape_cell(&pair.first),
            escape_cell(&pair.second)
        );
    }
    md.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
