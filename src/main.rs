use clap::Parser;
use equatable::error::LoadError;
use equatable::json_equals;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Structurally compare two JSON documents and explain the first mismatch.
///
/// Arrays are compared without regard to element order.
#[derive(Parser)]
#[command(name = "equatable", version)]
struct Cli {
    /// Left-hand JSON document
    left: PathBuf,

    /// Right-hand JSON document
    right: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (left, right) = match (read_as_json(&cli.left), read_as_json(&cli.right)) {
        (Ok(left), Ok(right)) => (left, right),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    match json_equals(&left, &right) {
        Ok(()) => {
            println!("equal");
            ExitCode::SUCCESS
        }
        Err(unequal) => {
            debug!(tag = unequal.tag(), "documents differ");
            println!("{}", unequal);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn read_as_json<P: AsRef<Path>>(filename: P) -> Result<Value, LoadError> {
    let path = filename.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
