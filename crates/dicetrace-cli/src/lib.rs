pub mod args;
pub mod config;
pub mod output;

pub use args::Cli;

use anyhow::{Context, Result};
use std::io::Read;

use dicetrace_types::{EvaluationReport, Outcome, concat_plain};

pub fn run(cli: Cli) -> Result<()> {
    let defaults = match &cli.config {
        Some(path) => config::DisplayConfig::load(path)?,
        None => config::DisplayConfig::default(),
    };
    let mut ctx = defaults.into_context();
    if let Some(limit) = cli.list_limit {
        ctx.list_preview_limit = limit.0;
    }
    if let Some(limit) = cli.sum_limit {
        ctx.sum_preview_limit = limit.0;
    }
    if let Some(limit) = cli.depth_limit {
        ctx.auto_expansion_depth_limit = limit.0;
    }

    let raw = read_input(&cli.input)?;
    let report: EvaluationReport =
        serde_json::from_str(&raw).context("invalid evaluation report")?;

    match &report.outcome {
        Outcome::Ok { value } => {
            let value = serde_json::to_string(value)?;
            match report.seed {
                Some(seed) => println!("{} (seed {})", value, seed),
                None => println!("{}", value),
            }
        }
        Outcome::Error { kind, message } => {
            println!("evaluation failed ({}): {}", kind, message);
        }
    }

    let Some(appendix) = &report.appendix else {
        return Ok(());
    };
    let fragments = dicetrace_render::render(&appendix.representation, &ctx)
        .context("malformed evaluation trace")?;

    if cli.json {
        println!("{}", serde_json::to_string(&fragments)?);
    } else if output::use_color(cli.no_color) {
        println!("{}", output::concat_styled(&fragments));
    } else {
        println!("{}", concat_plain(&fragments));
    }

    if let Some(stats) = &appendix.statistics {
        println!("evaluated in {} ms", stats.time_consumed_ms);
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}
