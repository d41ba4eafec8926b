//! nordlys-migrate - NativeBase → Nordlys codemod
//!
//! This is the CLI entry point: it resolves inputs, runs the core engine
//! over them and reports the results.

mod cli;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use nordlys_migrate_core::{
    expand_inputs, migratable_files, migrate_files_parallel, migrate_source, DiagnosticKind, Diagnostics,
    FileReport, MigrationConfig,
};

use clap::Parser;
use cli::Args;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<MigrationConfig> {
    let mut config = match &args.config {
        Some(path) => MigrationConfig::load(Path::new(path)).with_context(|| format!("loading config {}", path))?,
        None => MigrationConfig::default(),
    };
    for source in &args.sources {
        if !config.is_legacy_source(source) {
            config.legacy_sources.push(source.clone());
        }
    }
    Ok(config)
}

fn print_warnings(file: &str, diagnostics: &Diagnostics, quiet: bool) {
    if !quiet && !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render(file));
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let format = OutputFormat::from_str(&args.output)
        .with_context(|| format!("invalid format '{}'. Valid formats: text, json", args.output))?;
    let config = load_config(&args)?;

    // Collect files
    let mut files: Vec<String> = expand_inputs(&args.files);

    // Handle stdin input modes
    let stdin_source = files.is_empty() && args.lang.is_some() && !atty::is(atty::Stream::Stdin);
    let stdin_files = files.is_empty() && args.lang.is_none() && !atty::is(atty::Stream::Stdin);

    if stdin_source {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).context("reading stdin")?;
        let lang = args.lang.as_deref().unwrap_or("tsx");
        let outcome = migrate_source(&source, lang, &config).context("<stdin>")?;
        print_warnings("<stdin>", &outcome.diagnostics, args.quiet);
        print!("{}", outcome.output);
        let code = if args.check && outcome.changed { ExitCode::from(1) } else { ExitCode::SUCCESS };
        return Ok(code);
    }

    if stdin_files {
        // Read file paths from stdin
        let stdin = io::stdin();
        for line in stdin.lock().lines().map_while(|l| l.ok()) {
            let path = line.trim().to_string();
            if !path.is_empty() {
                files.push(path);
            }
        }
    }

    files = migratable_files(files);

    if files.is_empty() {
        eprintln!("Usage: nordlys-migrate <files...> [OPTIONS]");
        eprintln!("   or: cat Card.tsx | nordlys-migrate --lang tsx");
        eprintln!("   or: git ls-files '*.tsx' | nordlys-migrate --check");
        eprintln!("\nUse --help for more information.");
        bail!("no input files");
    }

    let concurrency = args.concurrency.unwrap_or_else(num_cpus::get);
    let dry_run = args.dry_run || args.check;
    let results = migrate_files_parallel(&files, &config, args.lang.as_deref(), Some(concurrency), dry_run);

    // Aggregate after the parallel section
    let mut changed = 0usize;
    let mut failed = 0usize;
    let mut elements = 0usize;
    let mut by_kind: BTreeMap<DiagnosticKind, usize> = BTreeMap::new();
    let mut reports: Vec<FileReport> = Vec::with_capacity(results.len());

    for (path, result) in results {
        match &result {
            Ok(outcome) => {
                if outcome.changed {
                    changed += 1;
                }
                elements += outcome.rewritten_elements;
                for d in outcome.diagnostics.entries() {
                    *by_kind.entry(d.kind).or_default() += 1;
                }
                if format == OutputFormat::Text {
                    print_warnings(&path, &outcome.diagnostics, args.quiet);
                    if outcome.changed && dry_run {
                        println!("would change: {}", path);
                    }
                }
                if args.verbose {
                    let status = match (outcome.changed, dry_run) {
                        (true, true) => "would change",
                        (true, false) => "migrated",
                        (false, _) => "unchanged",
                    };
                    eprintln!("{}: {} ({} elements)", path, status, outcome.rewritten_elements);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("error: {}: {}", path, e);
            }
        }
        reports.push(FileReport::new(path, result));
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports).context("serializing report")?);
    }

    let warnings: usize = by_kind.values().sum();
    let mut summary = format!(
        "{} of {} files {}, {} elements rewritten, {} warnings",
        changed,
        reports.len(),
        if dry_run { "would change" } else { "changed" },
        elements,
        warnings
    );
    if !by_kind.is_empty() {
        let kinds: Vec<String> = by_kind.iter().map(|(kind, n)| format!("{}: {}", kind, n)).collect();
        summary.push_str(&format!(" ({})", kinds.join(", ")));
    }
    if failed > 0 {
        summary.push_str(&format!(", {} failed", failed));
    }
    eprintln!("{}", summary);

    if failed > 0 || (args.check && changed > 0) {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
