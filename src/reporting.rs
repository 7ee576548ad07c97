//! Console output for aggregated lint results.
//!
//! Bulk errors print most frequent first. Each entry shows its count, the
//! category, the message and the offending value, followed by the node it
//! was first seen on.

use crate::aggregate::{AggregateReport, CategoryFilter};
use crate::types::{BulkError, Category};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

/// Static fix guidance per category.
fn get_guidance(category: Category) -> &'static str {
    match category {
        Category::Fill => "Apply a shared color style or an approved color variable.",
        Category::Stroke => "Apply a shared color style to the stroke or bind it to a token.",
        Category::Radius => "Use an approved radius value or bind the radius to a token.",
        Category::Effects => "Apply a shared effect style.",
        Category::Text => "Apply a shared text style in an approved font family.",
    }
}

/// Prints the filtered bulk error list and a summary line to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &AggregateReport, filter: &CategoryFilter) -> Result<()> {
    let shown = filter.apply(&report.bulk);
    for (index, bulk) in shown.iter().enumerate() {
        print_bulk(index, bulk);
    }
    print_summary(report, shown.len());
    Ok(())
}

fn print_bulk(index: usize, bulk: &BulkError) {
    let e = &bulk.error;
    let header = format!("[{index}] {} ({}x)", e.message, bulk.count);
    println!("{}", header.red().bold());
    println!("  {} {}: {}", "-->".blue(), e.category.to_string().yellow(), e.value);
    let first = if e.node_name.is_empty() { &e.node_id } else { &e.node_name };
    if bulk.count > 1 {
        println!(
            "   {} first seen on {} and {} more",
            "|".blue(),
            first,
            bulk.count - 1
        );
    } else {
        println!("   {} on {}", "|".blue(), first);
    }
    println!("   {} {} {}", "=".blue(), "FIX:".green(), get_guidance(e.category));
    println!();
}

fn print_summary(report: &AggregateReport, shown: usize) {
    if report.is_clean() {
        println!("{} All errors fixed in the selection.", "OK".green().bold());
        return;
    }

    let total = report.total_errors();
    let nodes = report.nodes.len();
    let hidden = report.bulk.len() - shown;
    let mut line = format!(
        "{} {} {} on {} {}",
        total,
        pluralize("error", total),
        if total == 1 { "remains" } else { "remain" },
        nodes,
        pluralize("layer", nodes)
    );
    if hidden > 0 {
        let _ = write!(line, " ({hidden} filtered out)");
    }
    println!("{} {line}.", "X".red().bold());
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
