use crate::consts::TOKENS_PER_PRICE_UNIT;
use crate::error::AppError;

use super::types::{CostBasis, CostBreakdown, PricingProfile};

fn check_tokens(tokens: i64, what: &str) -> Result<f64, AppError> {
    if tokens < 0 {
        return Err(AppError::InvalidArgument(format!(
            "{what} token count must be non-negative, got {tokens}"
        )));
    }
    Ok(tokens as f64 / TOKENS_PER_PRICE_UNIT)
}

/// Pre-call estimate: every price category applied to the same token count.
///
/// `total_cost` is the input cost alone, since nothing has been generated yet.
pub(crate) fn estimate_cost(
    tokens: i64,
    pricing: &PricingProfile,
) -> Result<CostBreakdown, AppError> {
    let millions = check_tokens(tokens, "input")?;
    let input_cost = millions * pricing.input;
    Ok(CostBreakdown {
        input_cost,
        output_cost: millions * pricing.output,
        cached_input_cost: millions * pricing.cached_input,
        total_cost: input_cost,
        basis: CostBasis::InputOnly,
    })
}

/// Post-call accounting: input tokens at input price plus generated tokens at output price.
pub(crate) fn account_call_cost(
    input_tokens: i64,
    output_tokens: i64,
    pricing: &PricingProfile,
) -> Result<CostBreakdown, AppError> {
    let input_millions = check_tokens(input_tokens, "input")?;
    let output_millions = check_tokens(output_tokens, "output")?;
    let input_cost = input_millions * pricing.input;
    let output_cost = output_millions * pricing.output;
    Ok(CostBreakdown {
        input_cost,
        output_cost,
        cached_input_cost: input_millions * pricing.cached_input,
        total_cost: input_cost + output_cost,
        basis: CostBasis::InputPlusOutput,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn o3_mini() -> PricingProfile {
        PricingProfile {
            input: 1.1,
            output: 4.4,
            cached_input: 0.55,
        }
    }

    #[test]
    fn estimate_cost_per_million() {
        let pricing = PricingProfile {
            input: 5.0,
            output: 15.0,
            cached_input: 2.5,
        };
        let cost = estimate_cost(2_000_000, &pricing).unwrap();
        assert_eq!(cost.input_cost, 10.0);
        assert_eq!(cost.output_cost, 30.0);
        assert_eq!(cost.cached_input_cost, 5.0);
        assert_eq!(cost.total_cost, 10.0);
        assert_eq!(cost.basis, CostBasis::InputOnly);
    }

    #[test]
    fn estimate_cost_zero_tokens() {
        let cost = estimate_cost(0, &o3_mini()).unwrap();
        assert_eq!(cost.input_cost, 0.0);
        assert_eq!(cost.output_cost, 0.0);
        assert_eq!(cost.cached_input_cost, 0.0);
        assert_eq!(cost.total_cost, 0.0);
    }

    #[test]
    fn estimate_cost_rejects_negative_tokens() {
        let err = estimate_cost(-1, &o3_mini()).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn estimate_cost_scales_linearly() {
        let pricing = o3_mini();
        for n in [1, 7, 1_234, 987_654, 3_000_001] {
            let single = estimate_cost(n, &pricing).unwrap();
            let double = estimate_cost(2 * n, &pricing).unwrap();
            assert_eq!(double.input_cost, 2.0 * single.input_cost);
            assert_eq!(double.output_cost, 2.0 * single.output_cost);
            assert_eq!(double.cached_input_cost, 2.0 * single.cached_input_cost);
            assert_eq!(double.total_cost, 2.0 * single.total_cost);
        }
    }

    #[test]
    fn account_call_cost_adds_output() {
        let cost = account_call_cost(1_000_000, 100_000, &o3_mini()).unwrap();
        // 1M * $1.10/M + 100K * $4.40/M = $1.10 + $0.44
        assert!((cost.input_cost - 1.1).abs() < 1e-9);
        assert!((cost.output_cost - 0.44).abs() < 1e-9);
        assert!((cost.cached_input_cost - 0.55).abs() < 1e-9);
        assert!((cost.total_cost - 1.54).abs() < 1e-9);
        assert_eq!(cost.basis, CostBasis::InputPlusOutput);
    }

    #[test]
    fn account_call_cost_rejects_negative_output() {
        let err = account_call_cost(10, -3, &o3_mini()).unwrap_err();
        assert!(err.to_string().contains("output token count"));
    }
}
