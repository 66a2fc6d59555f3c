//! Main binary entry point for xwc.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use xwc::errors::ConverterError;
use xwc::styles::Style;
use xwc::{Columns, Config};

#[derive(Parser, Debug)]
#[command(version, about = "word, line, character, and byte count with structured output", long_about = None)]
struct Cli {
    /// Input files; reads standard input when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write the number of lines in each input file
    #[arg(short = 'l', long = "lines")]
    lines: bool,

    /// Write the number of words in each input file
    #[arg(short = 'w', long = "words")]
    words: bool,

    /// Write the number of bytes in each input file.
    /// Cancels any prior usage of the character option.
    #[arg(short = 'c', long = "bytes", overrides_with = "chars")]
    bytes: bool,

    /// Write the number of characters in each input file.
    /// Cancels any prior usage of the byte option.
    #[arg(short = 'm', long = "chars", overrides_with = "bytes")]
    chars: bool,

    /// Write the length of the longest line, including its terminator
    #[arg(short = 'L', long = "max-line-length")]
    max_line_length: bool,

    /// Output style
    #[arg(short, long, value_enum, default_value = "text")]
    style: Style,

    /// Disable indentation in structured output styles
    #[arg(long)]
    compact: bool,

    /// Emit each input verbatim as an XML-wrapped field instead of counting
    #[arg(
        long,
        conflicts_with_all = ["lines", "words", "bytes", "chars", "max_line_length", "style"]
    )]
    convert: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_app() -> Result<(), ConverterError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config {
        inputs: cli.files,
        columns: Columns {
            lines: cli.lines,
            words: cli.words,
            bytes: cli.bytes,
            chars: cli.chars,
            longest: cli.max_line_length,
        },
        style: cli.style,
        pretty: !cli.compact,
        convert: cli.convert,
    };

    xwc::run(config)
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
