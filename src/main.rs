use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sentence_inspector::config::{Args, Config, OutputFormat};
use sentence_inspector::validation::{ValidationResult, validate_document};
use sentence_inspector::{Validator, ValidatorRegistry};

/// One inspected input and its findings
struct Report {
    source: String,
    result: ValidationResult,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Inspect every input; returns whether all of them were clean
fn run(config: &Config) -> Result<bool> {
    let registry = ValidatorRegistry::with_builtin();
    let validators = registry
        .build_all(&config.inspector)
        .context("Failed to initialize validators")?;

    let reports = inspect_inputs(config, &validators)?;

    match config.format {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => print_json(&reports)?,
    }

    Ok(reports.iter().all(|report| report.result.is_valid()))
}

fn inspect_inputs(config: &Config, validators: &[Box<dyn Validator>]) -> Result<Vec<Report>> {
    if config.files.is_empty() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        return Ok(vec![Report {
            source: "<stdin>".to_string(),
            result: validate_document(&content, validators),
        }]);
    }

    config
        .files
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            log::debug!("Inspecting {}", path.display());
            Ok(Report {
                source: path.display().to_string(),
                result: validate_document(&content, validators),
            })
        })
        .collect()
}

fn print_text(reports: &[Report]) {
    for report in reports {
        for error in &report.result.errors {
            println!("{}:{}", report.source, error);
        }
    }
}

fn print_json(reports: &[Report]) -> Result<()> {
    let value: Vec<_> = reports
        .iter()
        .map(|report| {
            serde_json::json!({
                "source": report.source,
                "errors": report.result.errors,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
