//! sheetgrid host: load, edit and export a CSV grid from the command line

mod cli;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{CliArgs, Source};
use sheetgrid::csv::detect_delimiter;
use sheetgrid::{Sheet, SheetConfig};

fn main() -> Result<()> {
    sheetgrid::logging::init();

    let args = CliArgs::parse();
    let run = args
        .into_config(SheetConfig::load())
        .map_err(anyhow::Error::msg)?;

    if run.save_config {
        run.sheet
            .save()
            .map_err(anyhow::Error::msg)
            .context("Failed to save config")?;
    }

    let mut sheet = Sheet::new(run.sheet.clone());
    sheet.on_change(|matrix| {
        tracing::debug!(
            "Sheet changed: {} rows x {} columns",
            matrix.row_count(),
            matrix.column_count()
        );
    });

    match &run.source {
        Source::File(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            if run.detect_delimiter {
                if let Ok(text) = std::str::from_utf8(&bytes) {
                    sheet.config.delimiter = detect_delimiter(text);
                    tracing::info!("Detected delimiter {:?}", sheet.config.delimiter);
                }
            }
            sheet
                .load_bytes(&bytes)
                .with_context(|| format!("Could not parse {}", path.display()))?;
        }
        Source::Placeholder => sheet.load_placeholder("placeholder"),
    }

    if sheet.matrix().is_some_and(|m| m.is_empty()) {
        tracing::warn!("No data to display");
    }

    for op in run.ops {
        let label = format!("{:?}", op);
        match sheet.dispatch(op) {
            Some(cmd) if cmd.data_changed() => tracing::debug!("Applied {}", label),
            _ => tracing::warn!("Operation {} had no effect", label),
        }
    }

    let text = if run.json {
        sheet.export_json().context("Failed to encode JSON")?
    } else {
        sheet.export_text().context("Failed to export CSV")?
    };

    match &run.output {
        Some(path) => {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
