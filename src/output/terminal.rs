// Colored terminal output for classification results.
//
// main.rs delegates all result display here.

use colored::Colorize;

use super::AnalysisReport;

/// Display the parameters and per-keyword occurrence counts.
pub fn display_keyword_summary(report: &AnalysisReport) {
    println!(
        "\n{}",
        format!(
            "=== {} keywords (alpha = {}, delta = {}) ===",
            report.keywords.len(),
            report.alpha,
            report.delta
        )
        .bold()
    );

    if report.keywords.is_empty() {
        println!("  No keywords entered.");
        return;
    }

    println!("  {:<32} {:>11}", "Keyword".dimmed(), "Occurrences".dimmed());
    println!("  {}", "-".repeat(44).dimmed());
    for summary in &report.keywords {
        println!(
            "  {:<32} {:>11}",
            super::truncate_chars(&summary.keyword, 29),
            summary.occurrences
        );
    }
}

/// Display the possible and impossible pair lists.
pub fn display_classification(report: &AnalysisReport) {
    println!("\nAnalyzing keyword pair possibilities...\n");

    println!(
        "{}",
        "Possible keyword pairs (all distances less than delta):".bold()
    );
    if report.possible.is_empty() {
        println!(" None");
    } else {
        for pair in &report.possible {
            println!(" - {} & {}", pair.first.green(), pair.second.green());
        }
    }

    println!(
        "\n{}",
        "Impossible keyword pairs (any distance greater than or equal to delta):".bold()
    );
    if report.impossible.is_empty() {
        println!(" None");
    } else {
        for pair in &report.impossible {
            println!(" - {} <--> {}", pair.first.red(), pair.second.red());
        }
    }

    let total = report.possible.len() + report.impossible.len();
    println!(
        "\n  {} pairs: {} possible, {} impossible",
        total,
        report.possible.len().to_string().green(),
        report.impossible.len().to_string().red().bold(),
    );
}
