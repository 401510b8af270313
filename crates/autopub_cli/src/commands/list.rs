//! List command - Show specs with their derived fields.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use autopub_spec::NormalizedSpec;

use super::RunContext;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Yaml,
    Json,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
    format: ListFormat,
}

pub fn execute(args: ListArgs, ctx: &RunContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let specs = catalog
        .normalize_all()
        .context("Spec catalog is invalid")?;

    match args.format {
        ListFormat::Table => print!("{}", render_table(&specs)),
        ListFormat::Yaml => print!("{}", serde_yaml::to_string(&specs)?),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&specs)?),
    }

    Ok(())
}

fn render_table(specs: &[NormalizedSpec]) -> String {
    let header = ["SHORTNAME", "STATUS", "SOURCE", "DESTINATION", "TOKEN"];
    let rows: Vec<[&str; 5]> = specs
        .iter()
        .map(|s| {
            [
                s.shortname.as_str(),
                s.publication_status.as_str(),
                s.source.as_str(),
                s.destination.as_str(),
                s.token_name.as_str(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
