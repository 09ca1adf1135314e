//! Plain-text console reports
//!
//! Section order and labels are stable; scripts grep these lines.

use std::path::Path;

use serde::Serialize;

use crate::catalog::ModelSpec;
use crate::core::TextStatistics;
use crate::output::format::{
    NumberFormat, format_bytes, format_number, format_percent, format_price,
};
use crate::pricing::CostBreakdown;
use crate::summarize::PostCall;

const RULE_WIDTH: usize = 50;

/// Advice derived from context window utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Recommendation {
    ExceedsContext,
    NearLimit,
    FitsWell,
}

impl Recommendation {
    pub(crate) fn from_utilization(percent: f64) -> Self {
        if percent > 100.0 {
            Recommendation::ExceedsContext
        } else if percent > 80.0 {
            Recommendation::NearLimit
        } else {
            Recommendation::FitsWell
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            Recommendation::ExceedsContext => {
                "⚠️  Warning: Content exceeds context window! Consider chunking the content."
            }
            Recommendation::NearLimit => "⚠️  Warning: Content is close to context window limit!",
            Recommendation::FitsWell => "✅ Content fits well within context window.",
        }
    }
}

fn header(lines: &mut Vec<String>, title: String) {
    lines.push(String::new());
    lines.push(title);
    lines.push("=".repeat(RULE_WIDTH));
}

fn cost_lines(lines: &mut Vec<String>, cost: &CostBreakdown) {
    lines.push(format!("- Input Cost: {}", format_price(cost.input_cost)));
    lines.push(format!("- Output Cost: {}", format_price(cost.output_cost)));
    lines.push(format!(
        "- Cached Input Cost: {}",
        format_price(cost.cached_input_cost)
    ));
    lines.push(format!(
        "- Total Cost ({}): {}",
        cost.basis.label(),
        format_price(cost.total_cost)
    ));
}

/// Pre-call report: analysis, size, cost estimate and recommendation
pub(crate) fn render_analysis_report(
    spec: &ModelSpec,
    stats: &TextStatistics,
    cost: &CostBreakdown,
    number_format: NumberFormat,
) -> String {
    let n = |v: i64| format_number(v, number_format);
    let mut lines = Vec::new();

    header(&mut lines, format!("Analysis for {}:", spec.display_name()));
    lines.push(format!("Model Description: {}", spec.description));
    lines.push(format!("Context Window: {} tokens", n(spec.context_window)));

    lines.push(String::new());
    lines.push("Text Statistics:".to_string());
    lines.push(format!("- Words: {}", n(stats.words())));
    lines.push(format!("- Characters: {}", n(stats.characters())));
    lines.push(format!("- Lines: {}", n(stats.lines())));
    lines.push(format!("- Estimated Pages: {}", stats.estimated_pages()));

    lines.push(String::new());
    lines.push("Token Analysis:".to_string());
    lines.push(format!(
        "- Token Strategy: {}",
        stats.strategy().describe(spec)
    ));
    lines.push(format!("- Estimated Tokens: {}", n(stats.estimated_tokens())));
    lines.push(format!(
        "- Context Window Utilization: {}",
        format_percent(stats.context_utilization())
    ));

    lines.push(String::new());
    lines.push("Size Analysis:".to_string());
    lines.push(format!(
        "- Character Size: {}",
        format_bytes(stats.character_size())
    ));
    lines.push(format!("- Token Size: {}", format_bytes(stats.token_size())));
    lines.push(format!("- Total Size: {}", format_bytes(stats.total_size())));

    lines.push(String::new());
    lines.push("Cost Estimate:".to_string());
    cost_lines(&mut lines, cost);

    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    lines.push(
        Recommendation::from_utilization(stats.context_utilization())
            .message()
            .to_string(),
    );

    lines.join("\n")
}

/// Post-call report: generated text, compression and what the call cost
pub(crate) fn render_summary_report(
    spec: &ModelSpec,
    post: &PostCall,
    output_path: &Path,
    number_format: NumberFormat,
) -> String {
    let n = |v: i64| format_number(v, number_format);
    let mut lines = Vec::new();

    header(&mut lines, format!("Summary for {}:", spec.display_name()));

    lines.push("Output Statistics:".to_string());
    lines.push(format!("- Words: {}", n(post.stats.words())));
    lines.push(format!("- Characters: {}", n(post.stats.characters())));
    lines.push(format!("- Lines: {}", n(post.stats.lines())));
    lines.push(format!(
        "- Estimated Tokens: {}",
        n(post.stats.estimated_tokens())
    ));

    lines.push(String::new());
    lines.push("Compression:".to_string());
    lines.push(format!("- Input Tokens: {}", n(post.compression.input_tokens)));
    lines.push(format!(
        "- Output Tokens: {}",
        n(post.compression.output_tokens)
    ));
    lines.push(format!(
        "- Compression Ratio: {}",
        post.compression.ratio_label()
    ));
    lines.push(format!(
        "- Size Reduction: {}",
        post.compression
            .reduction_percent
            .map_or_else(|| "n/a".to_string(), format_percent)
    ));

    lines.push(String::new());
    lines.push("Call Cost:".to_string());
    cost_lines(&mut lines, &post.cost);

    if let Some((usage, cost)) = &post.reported {
        lines.push(String::new());
        lines.push("Reported Usage:".to_string());
        lines.push(format!("- Prompt Tokens: {}", n(usage.prompt_tokens)));
        lines.push(format!(
            "- Completion Tokens: {}",
            n(usage.completion_tokens)
        ));
        lines.push(format!(
            "- Total Cost ({}): {}",
            cost.basis.label(),
            format_price(cost.total_cost)
        ));
    }

    lines.push(String::new());
    lines.push(format!("Summary has been saved to {}", output_path.display()));

    lines.join("\n")
}

/// Cost for a bare token count
pub(crate) fn render_cost_report(
    spec: &ModelSpec,
    input_tokens: i64,
    output_tokens: Option<i64>,
    cost: &CostBreakdown,
    number_format: NumberFormat,
) -> String {
    let mut lines = Vec::new();

    header(&mut lines, format!("Cost for {}:", spec.display_name()));
    lines.push(format!(
        "- Input Tokens: {}",
        format_number(input_tokens, number_format)
    ));
    if let Some(output_tokens) = output_tokens {
        lines.push(format!(
            "- Output Tokens: {}",
            format_number(output_tokens, number_format)
        ));
    }
    cost_lines(&mut lines, cost);

    lines.join("\n")
}
