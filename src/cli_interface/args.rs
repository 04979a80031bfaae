use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `javags`.
///
/// The tool takes one or more Java source files; for each class it prompts
/// for the fields to generate accessors for, unless `--all` skips the
/// prompt entirely.
#[derive(Parser, Debug)]
#[clap(
    author,
    version = "0.1.0",
    about = "Generate Java getters/setters with Japanese Javadoc",
    long_about = None,
    name = "javags"
)]
pub struct JavagsArgs {
    /// Java source files to process, in order.
    #[clap(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Select every field of every class without prompting.
    #[clap(long)]
    pub all: bool,

    /// Print the synthesized accessors instead of editing the files.
    #[clap(long = "dry-run")]
    pub dry_run: bool,

    /// Disable colored output.
    #[clap(long = "no-color")]
    pub no_color: bool,
}
