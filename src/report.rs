//! Report rendering for text statistics
//!
//! Shared by `--print`, the Ctrl+Q exit output and the clipboard copy.

use serde_json::{Map, Value};

use crate::metrics::{Language, StatField, TextStats};

/// Output format for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `label: value unit` line per statistic
    #[default]
    Text,
    /// Pretty-printed JSON object keyed by field name
    Json,
}

/// Render `stats` in the requested format, always ending with a newline
pub fn render(stats: &TextStats, format: ReportFormat, language: Language) -> String {
    match format {
        ReportFormat::Text => render_text(stats, language),
        ReportFormat::Json => render_json(stats),
    }
}

fn render_text(stats: &TextStats, language: Language) -> String {
    let mut out = String::new();
    for field in StatField::all() {
        out.push_str(&format!(
            "{}: {} {}\n",
            field.label(language),
            format_count(field.value(stats)),
            field.unit(language)
        ));
    }
    out
}

fn render_json(stats: &TextStats) -> String {
    let map: Map<String, Value> = StatField::all()
        .iter()
        .map(|field| (field.key().to_string(), Value::from(field.value(stats))))
        .collect();
    format!("{:#}\n", Value::Object(map))
}

/// Format a count with `,` between every group of three digits
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
