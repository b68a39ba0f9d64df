//! orangec: The Orange front-end CLI.
//!
//! Usage:
//!   orangec [options] [file...]
//!
//! Tokenizes and parses each file, printing lexemes, the AST and any
//! diagnostics. Files come from the command line, or from orange.json.

use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use miette::{Context, IntoDiagnostic};
use orange_core::text::LineMap;
use orange_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use orange_options::{parse_config_file, OrangeConfig, CONFIG_FILE_NAME};
use orange_parser::{Parser, ParserOptions, DEFAULT_MAX_DEPTH};
use rayon::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "orangec", about = "orangec - tokenize and parse Orange source files", version)]
struct Cli {
    /// Orange source files to parse.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to orange.json.
    #[arg(short = 'p', long = "project")]
    project: Option<PathBuf>,

    /// Print every lexeme of each file.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed statements of each file.
    #[arg(long)]
    ast: bool,

    /// Maximum expression nesting depth.
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<u32>,

    /// More logging: -v for debug, -vv for trace.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// What one file produced: printed output plus its diagnostics.
struct FileReport {
    name: String,
    line_map: LineMap,
    output: String,
    diagnostics: Vec<Diagnostic>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.project.as_deref())?;
    let files = resolve_input_files(&cli, config.as_ref());
    let use_color = std::io::stderr().is_terminal();

    if files.is_empty() {
        print_diagnostic(&Diagnostic::new(&messages::NO_INPUT_FILES, &[]), None, use_color);
        process::exit(1);
    }

    let options = parser_options(cli.max_depth, config.as_ref().map(|(config, _)| config));
    info!(files = files.len(), max_depth = options.max_depth, "parsing");
    let start = Instant::now();

    let reports = files
        .par_iter()
        .map(|path| process_file(path, &cli, options))
        .collect::<miette::Result<Vec<_>>>()?;

    let mut diagnostics = DiagnosticCollection::new();
    let mut line_maps = HashMap::new();
    for report in reports {
        print!("{}", report.output);
        for diag in report.diagnostics {
            diagnostics.add(diag);
        }
        line_maps.insert(report.name, report.line_map);
    }

    diagnostics.sort();
    for diag in diagnostics.diagnostics() {
        let line_map = diag.file.as_ref().and_then(|file| line_maps.get(file));
        print_diagnostic(diag, line_map, use_color);
    }

    let elapsed = start.elapsed();
    if diagnostics.has_errors() {
        let count = diagnostics.error_count();
        let plural = if count == 1 { "" } else { "s" };
        if use_color {
            eprintln!("\n{}Found {} error{}.{}", RED, count, plural, RESET);
        } else {
            eprintln!("\nFound {} error{}.", count, plural);
        }
        process::exit(1);
    }

    if use_color {
        let plural = if files.len() == 1 { "" } else { "s" };
        eprintln!(
            "{}Parsed {} file{} in {:.2}s.{}",
            GRAY,
            files.len(),
            plural,
            elapsed.as_secs_f64(),
            RESET
        );
    }
    Ok(())
}

/// Install the stderr log subscriber. `-v` flags win over `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load `--project`, or orange.json from the working directory when present.
/// Returns the config and the directory its file paths are relative to.
fn load_config(project: Option<&Path>) -> miette::Result<Option<(OrangeConfig, PathBuf)>> {
    let path = match project {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(None);
            }
            path
        }
    };

    let config = parse_config_file(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read project '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded project file");
    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(Some((config, dir)))
}

fn resolve_input_files(cli: &Cli, config: Option<&(OrangeConfig, PathBuf)>) -> Vec<PathBuf> {
    if !cli.files.is_empty() {
        return cli.files.clone();
    }
    match config {
        Some((config, dir)) => config.resolved_files(dir),
        None => Vec::new(),
    }
}

/// Command-line flags override the project file, which overrides defaults.
fn parser_options(cli_max_depth: Option<u32>, config: Option<&OrangeConfig>) -> ParserOptions {
    let max_depth = cli_max_depth
        .or_else(|| config.and_then(OrangeConfig::max_nesting_depth))
        .unwrap_or(DEFAULT_MAX_DEPTH);
    ParserOptions::default().with_max_depth(max_depth)
}

fn process_file(path: &Path, cli: &Cli, options: ParserOptions) -> miette::Result<FileReport> {
    let name = path.display().to_string();
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read source file '{}'", name))?;
    debug!(file = %name, "parsing file");

    let line_map = LineMap::new(&text);
    let mut output = String::new();
    let mut diagnostics = Vec::new();

    if cli.tokens {
        for lexeme in orange_scanner::Scanner::new(&text) {
            match lexeme {
                Ok(lexeme) => {
                    let at = line_map.line_and_column_of(lexeme.range.pos);
                    let line = format!("{}:{} {:?} {:?}\n", name, at, lexeme.kind, lexeme.text);
                    output.push_str(&line);
                }
                // the parse below reports the same error
                Err(_) => break,
            }
        }
    }

    match Parser::with_options(&text, options).parse_source_unit() {
        Ok(statements) => {
            if cli.ast {
                for statement in &statements {
                    output.push_str(&format!("{:#?}\n", statement));
                }
            }
        }
        Err(err) => diagnostics.push(err.to_diagnostic().in_file(name.clone())),
    }

    Ok(FileReport {
        name,
        line_map,
        output,
        diagnostics,
    })
}

/// `file:line:col: error OR1101: message`
fn format_diagnostic(diag: &Diagnostic, line_map: Option<&LineMap>) -> (String, String) {
    let mut location = String::new();
    if let Some(ref file) = diag.file {
        location.push_str(file);
        match (diag.span, line_map) {
            (Some(span), Some(map)) => {
                location.push_str(&format!(":{}", map.line_and_column_of(span.start)));
            }
            (Some(span), None) => location.push_str(&format!("({})", span.start)),
            _ => {}
        }
        location.push_str(": ");
    }
    (location, diag.to_string())
}

fn print_diagnostic(diag: &Diagnostic, line_map: Option<&LineMap>, use_color: bool) {
    let (location, body) = format_diagnostic(diag, line_map);
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        eprintln!("{}{}{}{}{}{}{}", CYAN, location, RESET, BOLD, color, body, RESET);
    } else {
        eprintln!("{}{}", location, body);
    }
}
