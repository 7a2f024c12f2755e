//! CLI entry point for dirtext

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use clap::Parser;
use dirtext::{Error, OutputConfig, PathFilter, TreeFormatter, TreeWalker, WalkerConfig};
use tracing::Level;

/// Prints the current directory as a tree. Entries whose path has a segment
/// starting with `.` are skipped, as is anything matched by the root
/// `.gitignore`.
#[derive(Parser, Debug)]
#[command(name = "dirtext")]
#[command(about = "Print the current directory as a tree, respecting .gitignore")]
#[command(version)]
struct Args {}

/// Route library diagnostics to stderr. Only warnings and errors are shown.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(Level::WARN)
        .without_time()
        .with_target(false)
        .init();
}

/// Load the ignore file at the tree root, falling back to an empty filter.
fn load_filter(root: &Path, config: &WalkerConfig) -> PathFilter {
    match PathFilter::load(&root.join(&config.ignore_file)) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!("{}", e);
            PathFilter::default()
        }
    }
}

fn main() {
    let _args = Args::parse();
    init_logging();

    let root = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("dirtext: {}", Error::CurrentDir(e));
        process::exit(1);
    });

    let config = WalkerConfig::default();
    let filter = load_filter(&root, &config);
    let walker = TreeWalker::new(config).with_filter(filter);

    let mut formatter = TreeFormatter::stdout(OutputConfig {
        use_color: std::io::stdout().is_terminal(),
    });

    if let Err(e) = walker.walk(&root, &mut formatter) {
        eprintln!("dirtext: {}", e);
        process::exit(1);
    }
}
