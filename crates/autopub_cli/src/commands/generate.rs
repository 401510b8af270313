//! Generate command - Write one workflow per spec.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use autopub_templates::WorkflowGenerator;

use super::RunContext;

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Remove generated workflows of specs no longer in the catalog
    #[arg(long)]
    prune: bool,

    /// Show what would be written without touching any file
    #[arg(long)]
    dry_run: bool,
}

pub fn execute(args: GenerateArgs, ctx: &RunContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    info!("Generating workflows for {} spec(s)", catalog.len());

    let config = ctx
        .generator_config()
        .with_prune(args.prune)
        .with_dry_run(args.dry_run);
    let generator = WorkflowGenerator::new(config);

    let report = generator
        .generate(&catalog)
        .context("Workflow generation failed")?;

    if ctx.quiet {
        return Ok(());
    }

    let verb = if report.dry_run { "Would write" } else { "Wrote" };
    for workflow in &report.workflows {
        println!("{} {}", verb, workflow.path.display());
    }
    for path in &report.pruned {
        let verb = if report.dry_run { "Would remove" } else { "Removed" };
        println!("{} {}", verb, path.display());
    }

    println!();
    println!(
        "✅ {} workflow(s){}",
        report.workflows.len(),
        if report.dry_run { " (dry run)" } else { "" }
    );

    Ok(())
}
