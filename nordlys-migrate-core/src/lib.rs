//! nordlys-migrate-core: NativeBase → Nordlys codemod engine
//!
//! This library provides:
//! - TreeSitter-based TSX/TypeScript parsing and a read model over JSX
//! - Per-component prop tables and structural rewriters
//! - Generated stylesheets, import relocation and unused-binding pruning
//! - Parallel batch migration

pub mod components;
pub mod config;
pub mod diagnostics;
pub mod edit;
pub mod imports;
pub mod migrate;
pub mod parallel;
pub mod parser;
pub mod props;
pub mod prune;
pub mod render;
pub mod source_utils;
pub mod stylesheet;
pub mod tokens;

pub use components::LegacyComponent;
pub use config::{ConfigError, MigrationConfig, Target};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics};
pub use edit::{apply_edits, Edit, EditError};
pub use migrate::{migrate_file, migrate_source, MigrateError, MigrationOutcome};
pub use parallel::{expand_inputs, migratable_files, migrate_files_parallel, FileReport};
pub use parser::{detect_language, parse_source, ParseError, SUPPORTED_LANGUAGES};
