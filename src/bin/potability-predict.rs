//! Developer utility to run one prediction without the UI.
//!
//! Usage: `potability-predict [--model PATH] [--defaults] [--importances] [name=value ...]`

use std::path::PathBuf;
use std::process::ExitCode;

use potability::config;
use potability::gateway::{PredictionGateway, SubmitError};
use potability::schema;

const USAGE: &str = "Usage: potability-predict [--model PATH] [--defaults] [--importances] [name=value ...]";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Invalid(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(CliError::Fatal(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

enum CliError {
    Invalid(String),
    Fatal(String),
}

struct Options {
    model: Option<PathBuf>,
    defaults: bool,
    importances: bool,
    pairs: Vec<(String, String)>,
}

fn run() -> Result<(), CliError> {
    let options = parse_args(std::env::args().skip(1).collect()).map_err(CliError::Fatal)?;
    let model_path = match options.model.clone() {
        Some(path) => path,
        None => config::load_or_default()
            .and_then(|cfg| config::resolve_model_path(&cfg))
            .map_err(|err| CliError::Fatal(err.to_string()))?,
    };
    let gateway =
        PredictionGateway::load(&model_path).map_err(|err| CliError::Fatal(err.to_string()))?;
    println!("Model: {}", model_path.display());

    if options.importances {
        println!();
        println!("Feature importances:");
        for bar in gateway.feature_importances() {
            println!("  {:<16} {:.4}", bar.field, bar.value);
        }
    }
    if !options.defaults && options.pairs.is_empty() {
        return Ok(());
    }

    let entries = merge_entries(options.defaults, options.pairs);
    let report = gateway
        .submit(entries.iter().map(|(name, value)| (name.as_str(), value.as_str())))
        .map_err(|err| match err {
            SubmitError::Invalid(err) => CliError::Invalid(err.to_string()),
            SubmitError::Invocation(err) => CliError::Fatal(err.to_string()),
        })?;
    println!();
    println!("Verdict: {}", report.message);
    println!();
    println!("Input values:");
    for row in &report.echo {
        println!("  {:<16} {}", row.field, row.value);
    }
    Ok(())
}

/// Seed with schema defaults when asked; explicit pairs override seeded values.
///
/// A name given twice on the command line is passed through twice so that
/// validation rejects it as a duplicate.
fn merge_entries(defaults: bool, pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    if !defaults {
        return pairs;
    }
    let mut entries: Vec<(String, String)> = schema::FIELDS
        .iter()
        .map(|spec| (spec.name.to_string(), spec.default.to_string()))
        .collect();
    let mut overridden: Vec<String> = Vec::new();
    for (name, value) in pairs {
        if !overridden.contains(&name)
            && let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == name)
        {
            slot.1 = value;
            overridden.push(name);
            continue;
        }
        entries.push((name, value));
    }
    entries
}

fn parse_args(args: Vec<String>) -> Result<Options, String> {
    let mut options = Options {
        model: None,
        defaults: false,
        importances: false,
        pairs: Vec::new(),
    };
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--model" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("--model requires a path\n{USAGE}"))?;
                options.model = Some(PathBuf::from(path));
            }
            "--defaults" => options.defaults = true,
            "--importances" => options.importances = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => {
                let (name, value) = other
                    .split_once('=')
                    .ok_or_else(|| format!("Unexpected argument '{other}'\n{USAGE}"))?;
                options.pairs.push((name.to_string(), value.to_string()));
            }
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn explicit_pairs_replace_defaults_once() {
        let entries = merge_entries(true, pairs(&[("ph", "5")]));
        assert_eq!(entries.len(), schema::FIELD_COUNT);
        assert_eq!(entries[0], ("ph".to_string(), "5".to_string()));
    }

    #[test]
    fn repeated_explicit_pairs_stay_repeated() {
        let entries = merge_entries(true, pairs(&[("ph", "5"), ("ph", "6")]));
        assert_eq!(entries.len(), schema::FIELD_COUNT + 1);
        assert_eq!(entries.iter().filter(|(name, _)| name == "ph").count(), 2);
    }

    #[test]
    fn unknown_names_are_passed_through() {
        let entries = merge_entries(true, pairs(&[("Potability", "1")]));
        assert_eq!(entries.last().unwrap().0, "Potability");
    }
}
