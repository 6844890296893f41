//! Absfmt CLI - normalize and check a paper abstract from a file or stdin

#[cfg(feature = "cli")]
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use absfmt::{FormatOptions, Formatter, Lexicon};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "absfmt")]
#[command(version)]
#[command(about = "Absfmt - normalizes and checks academic-paper abstracts", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Collapse all paragraphs into one flat block
    #[arg(long)]
    flatten: bool,

    /// Emit the full outcome (text, diagnostics, sentiment) as JSON
    #[arg(long)]
    json: bool,

    /// Wrap sentiment-bearing words in highlight spans
    #[arg(long)]
    annotate: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Load a word<TAB>score sentiment lexicon instead of the built-in one
    #[cfg(feature = "data-loading")]
    #[arg(long)]
    lexicon: Option<String>,
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, content),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}

#[cfg(feature = "cli")]
fn load_lexicon(cli: &Cli) -> Result<Lexicon, String> {
    #[cfg(feature = "data-loading")]
    if let Some(path) = &cli.lexicon {
        return Lexicon::from_tsv_path(path).map_err(|e| format!("{}: {}", path, e));
    }
    let _ = cli;
    Ok(Lexicon::afinn())
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.input_file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: could not read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let lexicon = match load_lexicon(&cli) {
        Ok(lexicon) => lexicon,
        Err(message) => {
            eprintln!("error: could not load lexicon: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let options = FormatOptions {
        flatten_paragraphs: cli.flatten,
    };
    let formatter = Formatter::with_lexicon(options, lexicon.clone());
    let outcome = formatter.format(&input);

    let rendered = if cli.annotate {
        absfmt::sentiment::annotate(&outcome.html, &lexicon)
    } else {
        outcome.html.clone()
    };

    let payload = if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: could not serialize outcome: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        rendered
    };

    if let Err(e) = write_output(cli.output.as_deref(), &payload) {
        eprintln!("error: could not write output: {}", e);
        return ExitCode::FAILURE;
    }

    // Diagnostics go to stderr so the cleaned text stays pipeable. The tool
    // is advisory: findings never change the exit code.
    if !cli.json {
        for diagnostic in &outcome.diagnostics {
            if cli.no_color {
                eprintln!("{}", diagnostic);
            } else {
                eprintln!("{}{}\x1b[0m", diagnostic.color_code(), diagnostic);
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("absfmt was built without the 'cli' feature");
}
