use std::fmt;
use std::path::PathBuf;

use storage::{BuiltinCatalog, CatalogSource, JsonCatalog, catalog_to_json};

#[derive(Debug, Clone)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { flag } => write!(f, "{flag} cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag });
    }
    Ok(PathBuf::from(value))
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut input = std::env::var("QUIZ_CATALOG").ok().map(PathBuf::from);
        let mut output = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => input = Some(require_path(&mut args, "--catalog")?),
                "--out" => output = Some(require_path(&mut args, "--out")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { input, output })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin export -- [options]");
    eprintln!();
    eprintln!("Writes a catalog as normalized JSON, ready to edit and load with --catalog.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog <path>          Source JSON catalog (default: built-in catalog)");
    eprintln!("  --out <path>              Destination file (default: stdout)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CATALOG");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = match &args.input {
        Some(path) => JsonCatalog::from_path(path.clone()).load()?,
        None => BuiltinCatalog.load()?,
    };
    let json = catalog_to_json(&catalog)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!("Exported {} items to {}", catalog.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
