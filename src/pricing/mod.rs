mod cost;
mod types;

pub(crate) use cost::{account_call_cost, estimate_cost};
pub(crate) use types::{CostBasis, CostBreakdown, PricingProfile};
