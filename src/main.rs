//! idsplit CLI - identifier splitting from the shell
//!
//! Splits identifiers given on the command line or read from a file, one
//! per line, printing `identifier: tok1 tok2 ...` per input. Also runs
//! oracle accuracy evaluations and converts frequency artifacts.

use clap::Parser;
use idsplit::{Dictionary, FrequencyTable, Splitter, oracle};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Identifier splitter driven by term frequencies and a dictionary.
///
/// The scored splitter needs a frequency artifact; the pure splitters run
/// with no data files at all.
#[derive(Parser, Debug)]
#[command(name = "idsplit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Identifier(s) to split
    #[arg(required_unless_present_any = ["file", "oracle", "save_frequencies"])]
    identifiers: Vec<String>,

    /// Read identifiers from a file, one per line
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Splitter to run
    #[arg(short = 's', long, default_value = "scored")]
    splitter: SplitterKind,

    /// Drop digit runs instead of emitting them as tokens
    #[arg(long)]
    drop_numbers: bool,

    /// Frequency artifact (.csv, or binary; .pklz/.gz means gzip-wrapped)
    #[arg(long)]
    frequencies: Option<PathBuf>,

    /// Project-specific frequency artifact blended over the global table
    #[arg(long)]
    local_frequencies: Option<PathBuf>,

    /// Dictionary artifact (binary; .pklz/.gz means gzip-wrapped)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Re-save the loaded frequency table as a binary artifact and exit
    #[arg(long)]
    save_frequencies: Option<PathBuf>,

    /// Evaluate accuracy against an oracle file (identifier<TAB>tok1,tok2)
    #[arg(long)]
    oracle: Option<PathBuf>,

    /// Show every oracle case, not just the summary
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum SplitterKind {
    Scored,
    Elementary,
    PureCamel,
    SafeSimple,
    Delimiter,
    Digit,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Artifact conversion mode.
    if let Some(ref out) = args.save_frequencies {
        let table = load_table(args)?;
        table.to_binary_path(out)?;
        println!("Saved {} entries to {}", table.len(), out.display());
        return Ok(ExitCode::SUCCESS);
    }

    // Oracle mode.
    if let Some(ref oracle_path) = args.oracle {
        let splitter = build_splitter(args)?;
        let entries = oracle::load_oracle(oracle_path)?;
        let report = oracle::evaluate(&splitter, &entries);
        if args.verbose {
            report.print_details();
        }
        report.print_summary();
        return Ok(ExitCode::SUCCESS);
    }

    let keep_numbers = !args.drop_numbers;
    let split: Box<dyn Fn(&str) -> Vec<String>> = match args.splitter {
        SplitterKind::Scored => {
            let splitter = build_splitter(args)?;
            Box::new(move |id| splitter.split_with(id, keep_numbers))
        }
        SplitterKind::Elementary => {
            Box::new(move |id| idsplit::elementary_split(id, keep_numbers))
        }
        SplitterKind::PureCamel => Box::new(idsplit::pure_camel_split),
        SplitterKind::SafeSimple => Box::new(idsplit::safe_simple_split),
        SplitterKind::Delimiter => Box::new(idsplit::delimiter_split),
        SplitterKind::Digit => Box::new(idsplit::digit_split),
    };

    if let Some(ref file) = args.file {
        print_splits_from_file(file, &split)?;
    }
    for identifier in &args.identifiers {
        print_split(identifier, &split);
    }
    Ok(ExitCode::SUCCESS)
}

fn load_table(args: &Args) -> Result<FrequencyTable, Box<dyn std::error::Error>> {
    match args.frequencies {
        Some(ref path) => Ok(FrequencyTable::from_path(path)?),
        None => Err("--frequencies is required for this mode".into()),
    }
}

fn build_splitter(args: &Args) -> Result<Splitter, Box<dyn std::error::Error>> {
    let mut splitter = if args.frequencies.is_none() && args.dictionary.is_none() {
        Splitter::from_default_artifacts()?
    } else {
        let table = load_table(args)?;
        let dictionary = match args.dictionary {
            Some(ref path) => Dictionary::from_binary_path(path)?,
            None => Dictionary::builtin(),
        };
        Splitter::new(table, dictionary)
    };
    if let Some(ref path) = args.local_frequencies {
        splitter = splitter.with_local_frequencies(FrequencyTable::from_path(path)?);
    }
    Ok(splitter)
}

fn print_splits_from_file(
    path: &Path,
    split: &dyn Fn(&str) -> Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    for line in contents.lines() {
        let identifier = line.trim();
        if identifier.is_empty() {
            continue;
        }
        print_split(identifier, split);
    }
    Ok(())
}

fn print_split(identifier: &str, split: &dyn Fn(&str) -> Vec<String>) {
    println!("{}: {}", identifier, split(identifier).join(" "));
}
