mod format;
mod json;
mod report;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::{
    output_analysis_json, output_cost_json, output_models_json, output_summary_json,
};
pub(crate) use report::{render_analysis_report, render_cost_report, render_summary_report};
pub(crate) use table::{ModelTableOptions, render_models_table};
