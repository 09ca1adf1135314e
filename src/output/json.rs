use std::path::Path;

use serde_json::{Value, json};

use crate::catalog::{ModelCatalog, ModelSpec};
use crate::core::TextStatistics;
use crate::output::report::Recommendation;
use crate::pricing::CostBreakdown;
use crate::summarize::{PostCall, Summary};

fn to_json_string(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

fn model_json(spec: &ModelSpec) -> Value {
    json!({
        "id": spec.id,
        "name": spec.display_name(),
        "context_window": spec.context_window,
        "tokens_per_word": spec.tokens_per_word,
        "bytes_per_token": spec.bytes_per_token,
        "bytes_per_character": spec.bytes_per_character,
        "description": spec.description,
        "pricing": {
            "input": spec.pricing.input,
            "output": spec.pricing.output,
            "cached_input": spec.pricing.cached_input,
        },
    })
}

fn analysis_value(spec: &ModelSpec, stats: &TextStatistics, cost: &CostBreakdown) -> Value {
    json!({
        "model": spec.id,
        "statistics": stats,
        "cost": cost,
        "recommendation": Recommendation::from_utilization(stats.context_utilization()),
    })
}

pub(crate) fn output_analysis_json(
    spec: &ModelSpec,
    stats: &TextStatistics,
    cost: &CostBreakdown,
) -> String {
    to_json_string(&analysis_value(spec, stats, cost))
}

pub(crate) fn output_summary_json(
    spec: &ModelSpec,
    input: (&TextStatistics, &CostBreakdown),
    summary: &Summary,
    post: &PostCall,
    output_path: &Path,
) -> String {
    let reported = post.reported.as_ref().map(|(usage, cost)| {
        json!({
            "prompt_tokens": usage.prompt_tokens,
            "completion_tokens": usage.completion_tokens,
            "cost": cost,
        })
    });
    let value = json!({
        "input": analysis_value(spec, input.0, input.1),
        "output": {
            "path": output_path.display().to_string(),
            "placeholder": summary.placeholder,
            "statistics": post.stats,
        },
        "compression": post.compression,
        "cost": post.cost,
        "reported_usage": reported,
    });
    to_json_string(&value)
}

pub(crate) fn output_cost_json(
    spec: &ModelSpec,
    input_tokens: i64,
    output_tokens: Option<i64>,
    cost: &CostBreakdown,
) -> String {
    let value = json!({
        "model": spec.id,
        "input_tokens": input_tokens,
        "output_tokens": output_tokens,
        "cost": cost,
    });
    to_json_string(&value)
}

pub(crate) fn output_models_json(catalog: &ModelCatalog) -> String {
    let models: Vec<Value> = catalog.iter().map(model_json).collect();
    to_json_string(&Value::Array(models))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use crate::core::{TokenStrategy, analyze_text};
    use crate::pricing::estimate_cost;

    const CATALOG: &str = r#"{
        "small": {"name":"Small","contextWindow":1000,"tokensPerWord":1.3,"bytesPerToken":4,"bytesPerCharacter":1,"description":"tiny","pricing":{"input":5,"output":15,"cachedInput":2.5}}
    }"#;

    #[test]
    fn analysis_json_fields() {
        let catalog = ModelCatalog::from_json(CATALOG, CatalogSource::Builtin).unwrap();
        let spec = catalog.get("small").unwrap();
        let stats = analyze_text("hello world", spec, TokenStrategy::WordRatio);
        let cost = estimate_cost(stats.estimated_tokens(), &spec.pricing).unwrap();
        let value: Value =
            serde_json::from_str(&output_analysis_json(spec, &stats, &cost)).unwrap();

        assert_eq!(value["model"], "small");
        assert_eq!(value["statistics"]["words"], 2);
        assert_eq!(value["statistics"]["estimated_tokens"], 3);
        assert_eq!(value["statistics"]["strategy"], "word-ratio");
        assert_eq!(value["cost"]["basis"], "input_only");
        assert_eq!(value["recommendation"], "fits_well");
    }

    #[test]
    fn cost_json_omits_nothing() {
        let catalog = ModelCatalog::from_json(CATALOG, CatalogSource::Builtin).unwrap();
        let spec = catalog.get("small").unwrap();
        let cost = estimate_cost(2_000_000, &spec.pricing).unwrap();
        let value: Value =
            serde_json::from_str(&output_cost_json(spec, 2_000_000, None, &cost)).unwrap();
        assert_eq!(value["input_tokens"], 2_000_000);
        assert!(value["output_tokens"].is_null());
        assert_eq!(value["cost"]["input_cost"].as_f64(), Some(10.0));
    }

    #[test]
    fn models_json_lists_catalog() {
        let catalog = ModelCatalog::from_json(CATALOG, CatalogSource::Builtin).unwrap();
        let value: Value = serde_json::from_str(&output_models_json(&catalog)).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], "small");
        assert_eq!(arr[0]["pricing"]["cached_input"].as_f64(), Some(2.5));
    }
}
