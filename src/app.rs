use std::path::{Path, PathBuf};

use crate::catalog::{ModelCatalog, ModelSpec};
use crate::cli::{Cli, Commands};
use crate::core::{TokenStrategy, analyze_text};
use crate::error::AppError;
use crate::output::{
    ModelTableOptions, NumberFormat, output_analysis_json, output_cost_json, output_models_json,
    output_summary_json, render_analysis_report, render_cost_report, render_models_table,
    render_summary_report,
};
use crate::pricing::{account_call_cost, estimate_cost};
use crate::summarize::{self, OpenAiClient};
use crate::utils::{read_text, write_text};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) catalog: &'a ModelCatalog,
    pub(crate) strategy: TokenStrategy,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn model(&self) -> Result<&ModelSpec, AppError> {
        self.catalog.get(self.cli.model_id())
    }
}

fn handle_analyze(file: &Path, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let spec = ctx.model()?;
    let content = read_text(file)?;
    let stats = analyze_text(&content, spec, ctx.strategy);
    let cost = estimate_cost(stats.estimated_tokens(), &spec.pricing)?;

    if ctx.cli.json {
        println!("{}", output_analysis_json(spec, &stats, &cost));
    } else {
        println!(
            "{}",
            render_analysis_report(spec, &stats, &cost, ctx.number_format)
        );
    }
    Ok(())
}

fn handle_summarize(
    input: &Path,
    output: Option<PathBuf>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    // Configuration problems abort before anything is reported
    let spec = ctx.model()?;
    let client = OpenAiClient::from_env(
        ctx.cli.api_base(),
        ctx.cli.api_key_env(),
        ctx.cli.timeout(),
    )?;
    let output_path = ctx.cli.output_path(output);

    let content = read_text(input)?;
    let pre = summarize::prepare(&content, spec, ctx.strategy)?;
    if !ctx.cli.json {
        println!(
            "{}",
            render_analysis_report(spec, &pre.stats, &pre.cost, ctx.number_format)
        );
    }

    tracing::info!(model = %spec.id, "requesting summary");
    let summary = summarize::summarize(&client, &spec.id, &content)?;
    write_text(&output_path, &summary.text)?;

    let post = summarize::finish(&pre, &summary, spec)?;
    if ctx.cli.json {
        println!(
            "{}",
            output_summary_json(spec, (&pre.stats, &pre.cost), &summary, &post, &output_path)
        );
    } else {
        println!(
            "{}",
            render_summary_report(spec, &post, &output_path, ctx.number_format)
        );
    }
    Ok(())
}

fn handle_cost(
    tokens: i64,
    output_tokens: Option<i64>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let spec = ctx.model()?;
    let cost = match output_tokens {
        Some(output_tokens) => account_call_cost(tokens, output_tokens, &spec.pricing)?,
        None => estimate_cost(tokens, &spec.pricing)?,
    };

    if ctx.cli.json {
        println!("{}", output_cost_json(spec, tokens, output_tokens, &cost));
    } else {
        println!(
            "{}",
            render_cost_report(spec, tokens, output_tokens, &cost, ctx.number_format)
        );
    }
    Ok(())
}

fn handle_models(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        println!("{}", output_models_json(ctx.catalog));
    } else {
        println!(
            "{}",
            render_models_table(
                ctx.catalog,
                &ModelTableOptions {
                    use_color: ctx.cli.use_color(),
                    number_format: ctx.number_format,
                    selected: Some(ctx.cli.model_id().to_string()),
                },
            )
        );
    }
    Ok(())
}

/// Run the parsed command to completion.
pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    let catalog = ModelCatalog::load(cli.catalog.as_deref())?;
    let strategy = cli.token_strategy();
    tracing::debug!(
        catalog = %catalog.source(),
        model = cli.model_id(),
        strategy = strategy.name(),
        "starting"
    );

    let ctx = CommandContext {
        cli: &cli,
        catalog: &catalog,
        strategy,
        number_format,
    };

    match &cli.command {
        Commands::Analyze { file } => handle_analyze(file, &ctx),
        Commands::Summarize { input, output } => handle_summarize(input, output.clone(), &ctx),
        Commands::Cost {
            tokens,
            output_tokens,
        } => handle_cost(*tokens, *output_tokens, &ctx),
        Commands::Models => handle_models(&ctx),
    }
}
