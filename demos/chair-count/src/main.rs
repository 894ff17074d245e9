use std::path::PathBuf;
use std::process::ExitCode;

use chairplan::prelude::*;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
struct Args {
    plan: PathBuf,
    json: bool,
    strict: bool,
}

const USAGE: &str = "usage: chair-count [--json] [--strict] <plan-file>";

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut plan = None;
    let mut json = false;
    let mut strict = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--strict" => strict = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}\n{USAGE}"));
            }
            _ if plan.is_some() => return Err(format!("more than one plan file\n{USAGE}")),
            _ => plan = Some(PathBuf::from(arg)),
        }
    }

    let plan = plan.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { plan, json, strict })
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn run(args: &Args) -> Result<Vec<u8>, ChairplanError> {
    let extractor = ChairDataExtractor::builder()
        .allow_name_delimiters(!args.strict)
        .build();
    let inventory = extractor.extract_from_file(&args.plan)?;
    tracing::info!(rooms = inventory.len(), plan = %args.plan.display(), "inventory ready");

    let report = if args.json {
        JsonCodec.encode(&inventory)?
    } else {
        TextCodec.encode(&inventory)?
    };
    Ok(report)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(report) => {
            print!("{}", String::from_utf8_lossy(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.as_plan_error() {
                Some(plan_err) => eprintln!("error [{}]: {plan_err}", plan_err.kind()),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
