//! Check command - Verify generated workflows match the template.

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use autopub_templates::WorkflowGenerator;

use super::RunContext;

/// Workflows on disk differ from what `generate` would write.
#[derive(Debug, Error)]
#[error("{0} workflow(s) out of date, run `autopub generate`")]
pub struct OutOfDate(pub usize);

pub fn execute(ctx: &RunContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    info!("Checking workflows for {} spec(s)", catalog.len());

    let generator = WorkflowGenerator::new(ctx.generator_config());
    let report = generator
        .check(&catalog)
        .context("Workflow check failed")?;

    if !ctx.quiet {
        for path in &report.up_to_date {
            println!("   ✅ {}", path.display());
        }
    }
    for path in &report.stale {
        println!("   ❌ {} (stale)", path.display());
    }
    for path in &report.missing {
        println!("   ❌ {} (missing)", path.display());
    }
    for path in &report.orphaned {
        println!("   ⚠️  {} (no matching spec)", path.display());
    }

    if report.is_clean() {
        if !ctx.quiet {
            println!();
            println!("✅ All {} workflow(s) up to date", report.up_to_date.len());
        }
        Ok(())
    } else {
        let count = report.stale.len() + report.missing.len() + report.orphaned.len();
        Err(OutOfDate(count).into())
    }
}
