//! Summarization run
//!
//! The run is split around the single completion call: `prepare` analyzes the input
//! and prices it before the call, `summarize` performs the call, `finish` analyzes
//! the generated text and accounts for the call afterwards.

mod client;

use crate::catalog::ModelSpec;
use crate::consts::SUMMARY_PLACEHOLDER;
use crate::core::{Compression, TextStatistics, TokenStrategy, analyze_text};
use crate::error::AppError;
use crate::pricing::{CostBreakdown, account_call_cost, estimate_cost};

pub(crate) use client::{Completion, CompletionClient, OpenAiClient, Usage};

pub(crate) fn build_prompt(content: &str) -> String {
    format!(
        "Please provide a concise summary of the following content in markdown format:\n\n\
         {content}\n\n\
         Please format your response in markdown."
    )
}

/// Input analysis and input-only cost estimate
#[derive(Debug, Clone)]
pub(crate) struct PreCall {
    pub(crate) stats: TextStatistics,
    pub(crate) cost: CostBreakdown,
}

pub(crate) fn prepare(
    content: &str,
    spec: &ModelSpec,
    strategy: TokenStrategy,
) -> Result<PreCall, AppError> {
    let stats = analyze_text(content, spec, strategy);
    let cost = estimate_cost(stats.estimated_tokens(), &spec.pricing)?;
    Ok(PreCall { stats, cost })
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub(crate) text: String,
    /// True when the endpoint returned no content and the placeholder was used
    pub(crate) placeholder: bool,
    pub(crate) usage: Option<Usage>,
}

pub(crate) fn summarize(
    client: &dyn CompletionClient,
    model: &str,
    content: &str,
) -> Result<Summary, AppError> {
    let Completion { content, usage } = client.complete(model, &build_prompt(content))?;
    let summary = match content {
        Some(text) if !text.is_empty() => Summary {
            text,
            placeholder: false,
            usage,
        },
        _ => {
            tracing::warn!("completion returned no content, writing placeholder");
            Summary {
                text: SUMMARY_PLACEHOLDER.to_string(),
                placeholder: true,
                usage,
            }
        }
    };
    Ok(summary)
}

/// Output analysis and input+output accounting
#[derive(Debug, Clone)]
pub(crate) struct PostCall {
    pub(crate) stats: TextStatistics,
    pub(crate) compression: Compression,
    pub(crate) cost: CostBreakdown,
    /// Usage reported by the endpoint and its cost, when the endpoint sent it
    pub(crate) reported: Option<(Usage, CostBreakdown)>,
}

pub(crate) fn finish(
    pre: &PreCall,
    summary: &Summary,
    spec: &ModelSpec,
) -> Result<PostCall, AppError> {
    // Same strategy as the input so the ratio compares like with like
    let stats = analyze_text(&summary.text, spec, pre.stats.strategy());
    let input_tokens = pre.stats.estimated_tokens();
    let output_tokens = stats.estimated_tokens();
    let cost = account_call_cost(input_tokens, output_tokens, &spec.pricing)?;
    let reported = match summary.usage {
        Some(usage) => Some((
            usage,
            account_call_cost(usage.prompt_tokens, usage.completion_tokens, &spec.pricing)?,
        )),
        None => None,
    };
    Ok(PostCall {
        stats,
        compression: Compression::new(input_tokens, output_tokens),
        cost,
        reported,
    })
}
