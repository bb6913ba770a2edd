//! Terminal and JSON rendering of mining results.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::corpus::FrequencyTable;
use crate::elements::SourceElementSet;

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

/// Print the component frequency table, highest counts first.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_frequency_table(
    writer: &mut impl Write,
    table: &FrequencyTable,
    limit: Option<usize>,
) -> std::io::Result<()> {
    let entries = table.entries();
    if entries.is_empty() {
        writeln!(writer, "{}", "No components mined.".yellow())?;
        return Ok(());
    }

    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    let mut out = create_table(vec!["Component", "Count"]);
    for (component, count) in &entries[..shown] {
        out.add_row(vec![Cell::new(component), Cell::new(count)]);
    }
    writeln!(writer, "{out}")?;
    if shown < entries.len() {
        writeln!(
            writer,
            "{}",
            format!("... and {} more components", entries.len() - shown).dimmed()
        )?;
    }
    Ok(())
}

/// Builds the JSON document for a frequency table.
#[must_use]
pub fn frequency_table_json(table: &FrequencyTable) -> serde_json::Value {
    let components: Vec<serde_json::Value> = table
        .entries()
        .iter()
        .map(|(component, count)| {
            serde_json::json!({
                "component": component,
                "count": count,
            })
        })
        .collect();
    serde_json::json!({
        "distinct_components": table.len(),
        "components": components,
    })
}

/// Print the element categories extracted from one file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_elements(
    writer: &mut impl Write,
    title: &str,
    elements: &SourceElementSet,
) -> std::io::Result<()> {
    writeln!(writer, "\n{}", title.bold().underline())?;
    if !elements.parsed {
        writeln!(
            writer,
            "{}",
            "Parse failed; lexical categories only.".yellow()
        )?;
    }
    if let Some(header) = &elements.header {
        writeln!(writer, "{} {}", "Header:".bold(), header)?;
    }

    let counted: [(&str, &[(String, usize)]); 6] = [
        ("import", &elements.imports),
        ("class", &elements.classes),
        ("function", &elements.functions),
        ("variable", &elements.variables),
        ("call", &elements.calls),
        ("string", &elements.strings),
    ];
    let prose: [(&str, &[String]); 2] = [
        ("comment", &elements.comments),
        ("docstring", &elements.docstrings),
    ];

    let mut table = create_table(vec!["Category", "Name", "Count"]);
    for (category, entries) in counted {
        for (name, count) in entries {
            table.add_row(vec![Cell::new(category), Cell::new(name), Cell::new(count)]);
        }
    }
    for (category, entries) in prose {
        for text in entries {
            table.add_row(vec![Cell::new(category), Cell::new(text), Cell::new("")]);
        }
    }
    writeln!(writer, "{table}")?;
    Ok(())
}

/// Create a progress bar over the repository count.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_progress_bar(total_repos: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_repos), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} repos ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("mining...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.tick();
    pb
}
