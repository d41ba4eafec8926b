//! CLI argument parsing using clap

use clap::Parser;

/// Migrate NativeBase component usages to the Nordlys design system
#[derive(Parser, Debug)]
#[command(name = "nordlys-migrate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Rewrite every screen in place
    nordlys-migrate "src/**/*.tsx"

    # CI: fail if any file still needs migrating
    nordlys-migrate "src/**/*.tsx" --check -q

    # Preview without writing, with a JSON report
    nordlys-migrate src/App.tsx --dry-run -o json

    # Rewrite from stdin to stdout
    cat Card.tsx | nordlys-migrate --lang tsx

    # Treat an internal fork as a legacy source too
    nordlys-migrate "app/**/*.tsx" -s @acme/native-base
"#)]
pub struct Args {
    /// Files, directories or glob patterns like "src/**/*.tsx"
    #[arg()]
    pub files: Vec<String>,

    /// Config file (.toml, .yaml, .yml or .json)
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Additional legacy module path (repeatable)
    #[arg(short = 's', long = "source")]
    pub sources: Vec<String>,

    /// Report changes without writing files
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit 1 if any file would change (implies --dry-run)
    #[arg(long = "check")]
    pub check: bool,

    /// Output format: text (default), json
    #[arg(short = 'o', long = "output", default_value = "text")]
    pub output: String,

    /// Language for stdin input (tsx, typescript)
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<String>,

    /// Number of parallel workers
    #[arg(short = 'j', long = "concurrency")]
    pub concurrency: Option<usize>,

    /// Suppress warnings
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Show per-file progress
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
