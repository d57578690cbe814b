// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `metabean-gen`: regenerate bean boilerplate in place.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, anyhow};
use clap::Parser;
use metabean_codegen::{
    config::{BeanGenConfig, Eol, GenSettings, Indent},
    parse::BeanStyle,
    processor::{Processor, find_files}
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "metabean-gen")]
#[command(about = "Regenerate metabean boilerplate between AUTOGENERATED markers", long_about = None)]
#[command(version)]
struct Cli {
    /// File or directory to process
    path: PathBuf,

    /// Descend into subdirectories
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Indentation: `tab` or a number of spaces
    #[arg(long, default_value = "4", value_parser = Indent::parse)]
    indent: Indent,

    /// Line endings: lf, crlf, cr or system
    #[arg(long, default_value = "lf", value_parser = Eol::parse)]
    eol: Eol,

    /// Field name prefix stripped to form property names
    #[arg(long, default_value = "")]
    prefix: String,

    /// Built-in type profile: std or shared
    #[arg(long, default_value = "std")]
    profile: String,

    /// Ini file merged over the profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// Style for beans that do not name one
    #[arg(long, value_parser = parse_style)]
    style: Option<BeanStyle>,

    /// Verbosity from 0 to 3
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    verbose: u8,

    /// Report changes without writing files
    #[arg(long)]
    no_write: bool
}

fn parse_style(text: &str) -> Result<BeanStyle, String> {
    BeanStyle::parse(text).ok_or_else(|| format!("unknown style `{text}`"))
}

/// Filter directive for the library and this binary at one level.
fn log_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace"
    };
    format!("metabean_codegen={level},metabean_gen={level}")
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn settings(cli: &Cli) -> anyhow::Result<GenSettings> {
    let mut config = BeanGenConfig::profile(&cli.profile)?;
    if let Some(path) = &cli.config {
        let extra = BeanGenConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        config.merge(extra);
    }
    Ok(GenSettings {
        indent: cli.indent,
        eol: cli.eol,
        prefix: cli.prefix.clone(),
        default_style: cli.style,
        config
    })
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let settings = settings(cli)?;
    let files = find_files(&cli.path, cli.recursive)?;
    if files.is_empty() {
        return Err(anyhow!("no Rust files under {}", cli.path.display()));
    }
    info!(files = files.len(), "scanning");

    let summary = Processor::new(settings)
        .write(!cli.no_write)
        .process_all(&files);
    for err in &summary.errors {
        eprintln!("error: {err}");
    }
    let verb = if cli.no_write { "would change" } else { "changed" };
    println!("{} of {} bean files {verb}", summary.changed, summary.processed);
    Ok(summary.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
