use comfy_table::Color;

use crate::catalog::ModelCatalog;
use crate::output::format::{
    NumberFormat, create_styled_table, format_compact, format_price, header_cell, right_cell,
    styled_cell,
};

pub(crate) struct ModelTableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
    /// Highlighted row, normally the model selected for this run
    pub(crate) selected: Option<String>,
}

pub(crate) fn render_models_table(catalog: &ModelCatalog, options: &ModelTableOptions) -> String {
    let mut table = create_styled_table();
    let use_color = options.use_color;

    table.set_header(vec![
        header_cell("Model", use_color),
        header_cell("Name", use_color),
        header_cell("Context", use_color),
        header_cell("Tokens/Word", use_color),
        header_cell("Input /1M", use_color),
        header_cell("Output /1M", use_color),
        header_cell("Cached /1M", use_color),
    ]);

    for spec in catalog.iter() {
        let selected = options.selected.as_deref() == Some(spec.id.as_str());
        let id_color = if use_color && selected {
            Some(Color::Green)
        } else {
            None
        };
        table.add_row(vec![
            styled_cell(&spec.id, id_color, selected),
            styled_cell(spec.display_name(), None, false),
            right_cell(
                &format_compact(spec.context_window, options.number_format),
                None,
                false,
            ),
            right_cell(&spec.tokens_per_word.to_string(), None, false),
            right_cell(&format_price(spec.pricing.input), None, false),
            right_cell(&format_price(spec.pricing.output), None, false),
            right_cell(&format_price(spec.pricing.cached_input), None, false),
        ]);
    }

    format!("{table}\n{} models from {}", catalog.len(), catalog.source())
}
