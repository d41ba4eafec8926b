//! Parallel file processing using Rayon

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::MigrationConfig;
use crate::migrate::{migrate_file, migrate_source, MigrateError, MigrationOutcome};
use crate::parser::{detect_language, ParseError};

/// Outcome of one file in a batch.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: Option<MigrationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Migrate files in parallel. Changed files are written back unless
/// `dry_run` is set. One failing file never stops the others.
pub fn migrate_files_parallel<P: AsRef<Path> + Sync>(
    files: &[P],
    config: &MigrationConfig,
    lang_override: Option<&str>,
    concurrency: Option<usize>,
    dry_run: bool,
) -> Vec<(String, Result<MigrationOutcome, MigrateError>)> {
    // Configure thread pool
    if let Some(num_threads) = concurrency {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if pool already initialized
    }

    files
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = migrate_one(path, config, lang_override).and_then(|outcome| {
                if outcome.changed && !dry_run {
                    fs::write(path, &outcome.output).map_err(|source| MigrateError::Write {
                        path: path.display().to_string(),
                        source,
                    })?;
                }
                Ok(outcome)
            });
            (path.display().to_string(), result)
        })
        .collect()
}

fn migrate_one(path: &Path, config: &MigrationConfig, lang_override: Option<&str>) -> Result<MigrationOutcome, MigrateError> {
    match lang_override {
        Some(lang) => {
            let source = fs::read_to_string(path).map_err(ParseError::from)?;
            migrate_source(&source, lang, config)
        }
        None => migrate_file(path, config),
    }
}

impl FileReport {
    pub fn new(path: String, result: Result<MigrationOutcome, MigrateError>) -> Self {
        match result {
            Ok(outcome) => FileReport { path, outcome: Some(outcome), error: None },
            Err(e) => FileReport { path, outcome: None, error: Some(e.to_string()) },
        }
    }
}

/// Resolve command-line inputs to file paths.
///
/// A directory stands for every file below it, `node_modules` excluded.
/// Glob patterns are expanded; anything else is taken as a path.
pub fn expand_inputs(inputs: &[String]) -> Vec<String> {
    let mut files = Vec::new();
    for input in inputs {
        let pattern = if Path::new(input).is_dir() {
            format!("{}/**/*", input.trim_end_matches('/'))
        } else if input.contains(['*', '?', '[']) {
            input.clone()
        } else {
            files.push(input.clone());
            continue;
        };
        let entries = match glob::glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("warning: invalid glob pattern '{}': {}", input, e);
                continue;
            }
        };
        files.extend(
            entries
                .flatten()
                .filter(|path| path.is_file() && !path.components().any(|c| c.as_os_str() == "node_modules"))
                .filter_map(|path| path.to_str().map(str::to_string)),
        );
    }
    files
}

/// Files a migration applies to: TSX/TypeScript sources, declaration
/// files excluded.
pub fn migratable_files(files: Vec<String>) -> Vec<String> {
    files
        .into_iter()
        .filter(|f| detect_language(f) != "unknown" && !f.ends_with(".d.ts"))
        .collect()
}
