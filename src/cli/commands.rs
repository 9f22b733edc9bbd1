//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagstrip")]
#[command(about = "Remove a wrapper tag from component markup, in place", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files to rewrite (directories are searched for matching extensions)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Wrapper tag to strip (default: AppLayout, or TAGSTRIP_TAG / .tagstrip.toml)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Report what would change without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
