//! HTML diff tool CLI.
//!
//! Diffs two HTML files and writes a third in which all differences are
//! surrounded with `<ins>` and `<del>` tags.

use std::fs;
use std::io::{self, Write};

use clap::Parser;
use htmldiff_rs::{diff_html, DiffOptions};

/// HTML diff tool
#[derive(Parser)]
#[command(name = "hdiff")]
#[command(version)]
#[command(about = "Diffs two HTML files into <ins>/<del> annotated output", long_about = None)]
struct Cli {
    /// An HTML input file in its original form
    before_file: String,

    /// An HTML input file, based on the first one but with changes
    after_file: String,

    /// Name of the diffed HTML output file; use - to write to stdout
    diffed_file: String,

    /// Class attribute to add on every <ins> and <del> tag
    #[arg(short = 'c', long)]
    class_name: Option<String>,

    /// Data attribute prefix: the index attribute becomes
    /// data-{prefix}-operation-index
    #[arg(short = 'p', long)]
    data_prefix: Option<String>,

    /// Comma-separated list of atomic tag names (e.g. "head,script,style"),
    /// replacing the default list
    #[arg(short = 't', long)]
    atomic_tags: Option<String>,
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Reads one input file, rejecting unreadable or empty files before the
/// diff is invoked.
fn read_input(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("couldn't read file \"{}\": {}", path, e))?;
    if content.is_empty() {
        return Err(format!("file \"{}\" is empty", path).into());
    }
    Ok(content)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let before = read_input(&cli.before_file)?;
    let after = read_input(&cli.after_file)?;

    let options = DiffOptions {
        class_name: cli.class_name.clone(),
        data_prefix: cli.data_prefix.clone(),
        atomic_tags: cli.atomic_tags.clone(),
    };
    let diffed = diff_html(&before, &after, &options)?;

    if cli.diffed_file == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(diffed.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        fs::write(&cli.diffed_file, &diffed)?;
    }

    Ok(())
}
