//! Validate command - Report problems in the spec catalog.

use anyhow::Result;
use tracing::info;

use autopub_spec::{SpecError, SpecValidator};

use super::RunContext;

pub fn execute(ctx: &RunContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    info!("Validating {} spec record(s)", catalog.len());

    println!("📋 Validating spec catalog...");
    let result = SpecValidator::validate_catalog(&catalog);

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if result.valid {
        println!("   ✅ {} spec(s) valid", catalog.len());
        Ok(())
    } else {
        println!("   ❌ Spec validation failed:");
        for error in &result.errors {
            println!("      - {}", error);
        }
        Err(SpecError::ValidationFailed(format!("{} error(s)", result.errors.len())).into())
    }
}
