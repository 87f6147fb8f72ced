//! Layout Codegen CLI
//!
//! Usage:
//!   layout-codegen [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format: html, vue or react
//!   -c, --config <FILE>    Configuration file (TOML format)
//!   -o, --out <FILE>       Write the artifact to a file instead of stdout
//!   --print-filename       Print the suggested export filename and exit
//!   -v, --verbose          Log generation details to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, Level};

use layout_codegen::{export, Config, Format, LayoutDocument};

#[derive(Parser)]
#[command(name = "layout-codegen")]
#[command(about = "Generate HTML, Vue or React source from a page layout document")]
struct Cli {
    /// Layout document in JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format: html, vue or react (default from config, else html)
    #[arg(short, long)]
    format: Option<String>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the artifact to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the suggested export filename and exit
    #[arg(long)]
    print_filename: bool,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    // An omitted format falls back to the configured default; an invalid one is an error
    let format = match &cli.format {
        Some(name) => match name.parse::<Format>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => config.default_format,
    };

    // Read input
    let (source, source_name) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let doc = match LayoutDocument::from_json(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{}", e.format(&source, &source_name));
            std::process::exit(1);
        }
    };
    debug!(name = %doc.name, elements = doc.elements.len(), %format, "loaded document");

    let exported = match export(&doc, format, &config.generator) {
        Ok(exported) => exported,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.print_filename {
        println!("{}", exported.filename);
        return;
    }

    match &cli.out {
        Some(path) => {
            if let Err(e) = fs::write(path, &exported.content) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            debug!(path = %path.display(), bytes = exported.content.len(), "wrote artifact");
        }
        None => print!("{}", exported.content),
    }
}
