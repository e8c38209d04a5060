//! Example: diff two HTML files and print the annotated result.
//!
//! Usage: cargo run --example diff <before.html> <after.html>

use std::env;

use htmldiff_rs::{diff_files, DiffOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <before.html> <after.html>", args[0]);
        std::process::exit(1);
    }

    let diffed = diff_files(&args[1], &args[2], &DiffOptions::default())?;
    println!("{}", diffed);

    Ok(())
}
