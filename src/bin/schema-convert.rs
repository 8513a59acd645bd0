//! schema-convert CLI
//!
//! Command-line interface for converting extended JSON Schemas.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use schema_convert::{
    check_output, convert, load_definitions, load_schema_auto, load_schema_reader,
    ConvertOptions, Target,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-convert")]
#[command(about = "Convert extended JSON Schema into draft-4 or MongoDB validators")]
#[command(version)]
struct Cli {
    /// Schema source: file path or URL (stdin if omitted or "-")
    input: Option<String>,

    /// Definitions file or URL; repeat to layer, later files win
    #[arg(long = "def", short = 'd', value_name = "FILE")]
    definitions: Vec<String>,

    /// Target dialect: draft4, mongo36, or mongo32
    #[arg(
        long = "type",
        short = 't',
        value_name = "TARGET",
        default_value = "draft4",
        value_parser = parse_target
    )]
    target: Target,

    /// Output file (stdout if not specified)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Do not load the built-in type catalog
    #[arg(long)]
    no_builtins: bool,

    /// Compile draft4 output with a JSON Schema validator before writing
    #[arg(long)]
    check: bool,

    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_target(s: &str) -> Result<Target, String> {
    Target::parse(s).ok_or_else(|| {
        format!(
            "unknown target \"{}\": expected draft4, mongo36, or mongo32",
            s
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("schema_convert={}", level)))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run_convert(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_convert(cli: Cli) -> Result<(), u8> {
    let mut options = ConvertOptions::new(cli.target).builtins(!cli.no_builtins);
    for source in &cli.definitions {
        let definitions = load_definitions(source).map_err(|e| {
            eprintln!("Error loading definitions from {}: {}", source, e);
            e.exit_code() as u8
        })?;
        options = options.with_definitions(definitions);
    }

    let schema = match cli.input.as_deref() {
        None | Some("-") => load_schema_reader(io::stdin().lock()),
        Some(source) => load_schema_auto(source),
    }
    .map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let converted = convert(&schema, &options).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if cli.check {
        if cli.target == Target::Draft4 {
            check_output(&converted).map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?;
        } else {
            tracing::warn!(dialect = %cli.target, "--check only applies to draft4 output");
        }
    }

    let json_output = if cli.pretty {
        serde_json::to_string_pretty(&converted)
    } else {
        serde_json::to_string(&converted)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}
