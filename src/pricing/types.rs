use serde::{Deserialize, Serialize};

/// Model pricing info (USD per 1M tokens)
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PricingProfile {
    #[serde(default)]
    pub(crate) input: f64,
    #[serde(default)]
    pub(crate) output: f64,
    #[serde(default)]
    pub(crate) cached_input: f64,
}

/// What `CostBreakdown::total_cost` adds up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CostBasis {
    /// Pre-call estimate: total is the input cost alone
    InputOnly,
    /// Post-call accounting: total is input cost plus output cost
    InputPlusOutput,
}

impl CostBasis {
    pub(crate) fn label(self) -> &'static str {
        match self {
            CostBasis::InputOnly => "input only",
            CostBasis::InputPlusOutput => "input + output",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct CostBreakdown {
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    pub(crate) cached_input_cost: f64,
    pub(crate) total_cost: f64,
    pub(crate) basis: CostBasis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_profile_missing_fields_default_to_zero() {
        let p: PricingProfile = serde_json::from_str(r#"{"input": 2.5}"#).unwrap();
        assert_eq!(p.input, 2.5);
        assert_eq!(p.output, 0.0);
        assert_eq!(p.cached_input, 0.0);
    }

    #[test]
    fn pricing_profile_reads_camel_case() {
        let p: PricingProfile =
            serde_json::from_str(r#"{"input": 1.1, "output": 4.4, "cachedInput": 0.55}"#).unwrap();
        assert_eq!(p.cached_input, 0.55);
    }
}
