//! Output formatting functionality
//!
//! This module renders a [`Report`] as text, JSON or CSV.

use crate::error::{ReadyError, Result};
use crate::models::report::{Report, ReportDocument};
use ansi_term::Colour::{Blue, Cyan, Green};
use ansi_term::Style;

/// Width of the `=` rule between sections
pub const RULE_WIDTH: usize = 65;

fn rule(use_colors: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    if use_colors {
        Style::new().dimmed().paint(rule).to_string()
    } else {
        rule
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        Cyan.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Push a blank line, then the header framed by rules
fn push_section(output: &mut String, header: &str, use_colors: bool) {
    let rule = rule(use_colors);
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&heading(header, use_colors));
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
}

/// Format the report as human-readable text
///
/// Without colors the result is byte-for-byte stable across runs.
pub fn format_report_text(report: &Report, use_colors: bool) -> String {
    let mut output = String::new();

    // Title block
    if use_colors {
        output.push_str(&format!("{}\n", Blue.bold().paint(report.title)));
    } else {
        output.push_str(&format!("{}\n", report.title));
    }
    output.push_str(&rule(use_colors));
    output.push('\n');

    output.push_str(&format!("\n{}\n", heading("🎯 READY FOR GITHUB UPLOAD:", use_colors)));

    let total = report.total_files();
    if use_colors {
        output.push_str(&format!("📊 Total Files Ready: {}\n", Green.bold().paint(total.to_string())));
    } else {
        output.push_str(&format!("📊 Total Files Ready: {}\n", total));
    }
    output.push_str("\n📋 File Breakdown:\n");

    for file in &report.files {
        output.push_str(&format!(
            "   ✅ {:<30}: {:>2} files - {}\n",
            file.description, file.count, file.purpose
        ));
    }

    push_section(&mut output, "🚀 QUICK UPLOAD COMMANDS:", use_colors);
    for (i, command) in report.commands.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, command));
    }

    push_section(&mut output, "🌟 GITHUB FEATURES ENABLED:", use_colors);
    for feature in &report.features {
        output.push_str(&format!("   {}\n", feature));
    }

    push_section(&mut output, "🏆 REPOSITORY HIGHLIGHTS:", use_colors);
    for highlight in &report.highlights {
        output.push_str(&format!(
            "   🌟 {:<25}: {}\n",
            highlight.title, highlight.description
        ));
    }

    push_section(&mut output, "📊 PROJECT STATISTICS:", use_colors);
    for stat in &report.statistics {
        output.push_str(&format!("   📈 {:<20}: {}\n", stat.label, stat.value));
    }

    push_section(&mut output, "🎯 AFTER UPLOAD BENEFITS:", use_colors);
    for benefit in &report.benefits {
        output.push_str(&format!("   {}\n", benefit));
    }

    push_section(&mut output, "🎉 CONGRATULATIONS!", use_colors);
    output.push_str(report.closing.body);
    output.push('\n');

    let [first, second] = report.closing.sign_off;
    output.push_str(&format!("\n{}\n", first));
    output.push_str(&format!("{}\n", second));

    output
}

/// Format the report as pretty-printed JSON
pub fn format_report_json(report: &Report) -> Result<String> {
    let document = ReportDocument::from(report);
    let mut json = serde_json::to_string_pretty(&document)
        .map_err(|e| ReadyError::JsonSerialize { source: e })?;
    json.push('\n');
    Ok(json)
}

/// Format the report as CSV, one row per table entry
pub fn format_report_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["section", "position", "label", "count", "detail"])?;

    let total = report.total_files().to_string();
    writer.write_record(["summary", "", "Total Files Ready", total.as_str(), ""])?;

    for (i, file) in report.files.iter().enumerate() {
        let position = (i + 1).to_string();
        let count = file.count.to_string();
        writer.write_record([
            "files",
            position.as_str(),
            file.description,
            count.as_str(),
            file.purpose,
        ])?;
    }

    let bare_sections: [(&str, &[&str]); 2] = [
        ("commands", &report.commands),
        ("features", &report.features),
    ];
    for (section, rows) in bare_sections {
        for (i, row) in rows.iter().enumerate() {
            let position = (i + 1).to_string();
            writer.write_record([section, position.as_str(), *row, "", ""])?;
        }
    }

    for (i, highlight) in report.highlights.iter().enumerate() {
        let position = (i + 1).to_string();
        writer.write_record([
            "highlights",
            position.as_str(),
            highlight.title,
            "",
            highlight.description,
        ])?;
    }

    for (i, stat) in report.statistics.iter().enumerate() {
        let position = (i + 1).to_string();
        writer.write_record(["statistics", position.as_str(), stat.label, "", stat.value])?;
    }

    for (i, benefit) in report.benefits.iter().enumerate() {
        let position = (i + 1).to_string();
        writer.write_record(["benefits", position.as_str(), *benefit, "", ""])?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        ReadyError::io_error(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })?;

    String::from_utf8(bytes).map_err(|e| ReadyError::CsvSerialize { source: e })
}
