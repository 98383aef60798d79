use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{dispatcher, info};

use fontinspect::cli::{self, Args};
use fontinspect::models::{Inspection, OutputFormat};
use fontinspect::utils::dispatch;
use fontinspect::{Inspector, Resources};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args.to_config();
    let dispatch = dispatch(&config);

    let sources = args.sources().context("Failed to read the font list")?;
    if sources.is_empty() {
        bail!("No fonts given. Pass font files, --batch <FILE> or --family <NAME>.");
    }

    let resources = dispatcher::with_default(&dispatch, || {
        info!(
            "Language: {}, output: {}, {} fonts",
            config.language,
            config.output_format,
            sources.len()
        );
        Resources::load(&config)
    });

    let inspector = Inspector::new(&resources.registry, &resources.localization, config.language.clone())
        .with_dispatch(dispatch);

    let results: Vec<(String, fontinspect::Result<Inspection>)> = sources
        .iter()
        .map(ToString::to_string)
        .zip(inspector.inspect_many(&sources, config.face_index))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output_format {
        OutputFormat::Text => {
            for (i, (font, result)) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                match result {
                    Ok(inspection) => cli::write_text(&mut out, inspection)?,
                    Err(e) => cli::write_failure(&mut out, font, e)?,
                }
            }
        }
        OutputFormat::Json => cli::write_json(&mut out, &results)?,
    }
    out.flush()?;

    let failed = results.iter().filter(|(_, result)| result.is_err()).count();
    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
