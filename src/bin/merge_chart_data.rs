use chart_data::api::{ChartDataRegistry, DatasetConfig, records_from_json_str};
use chart_data::core::ChartCollection;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct CliArgs {
    base: Option<PathBuf>,
    overrides: PathBuf,
    output: Option<PathBuf>,
    description: Option<String>,
    strict: bool,
}

fn main() {
    let _ = chart_data::telemetry::init_tracing("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = DatasetConfig::default();
    if let Some(description) = args.description {
        config = config.with_override_only_description(description);
    }
    let mut registry = ChartDataRegistry::new(config);

    if let Some(base_path) = &args.base {
        let raw = read_file(base_path)?;
        let base = ChartCollection::from_json_str(&raw)
            .map_err(|err| format!("`{}`: {err}", base_path.display()))?;
        registry.publish(base);
    }

    let raw = read_file(&args.overrides)?;
    let overrides = records_from_json_str(&raw)
        .map_err(|err| format!("`{}`: {err}", args.overrides.display()))?;
    registry.apply_overrides(overrides);

    let merged = registry
        .into_collection()
        .ok_or_else(|| "no collection produced".to_owned())?;
    if args.strict {
        merged.validate().map_err(|err| err.to_string())?;
    }

    let mut json = merged.to_json_pretty().map_err(|err| err.to_string())?;
    json.push('\n');
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{json}"),
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut base: Option<PathBuf> = None;
    let mut overrides: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut description: Option<String> = None;
    let mut strict = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --base".to_owned())?;
                base = Some(PathBuf::from(value));
            }
            "--overrides" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --overrides".to_owned())?;
                overrides = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--description" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --description".to_owned())?;
                description = Some(value);
            }
            "--strict" => strict = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin merge_chart_data -- [--base <collection.json>] --overrides <charts.json> [--output <path>] [--description <text>] [--strict]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    let overrides = overrides.ok_or_else(|| "--overrides is required".to_owned())?;
    Ok(CliArgs {
        base,
        overrides,
        output,
        description,
        strict,
    })
}
