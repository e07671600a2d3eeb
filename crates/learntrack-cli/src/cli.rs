//! Command-line argument definitions.

use clap::Parser;

use learntrack_core::VERSION;

/// LearnTrack - an interactive student and course management console
#[derive(Parser, Debug)]
#[command(name = "learntrack")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: $XDG_CONFIG_HOME/learntrack/config.toml)
    #[arg(long, global = true, env = "LEARNTRACK_CONFIG")]
    pub config: Option<String>,

    /// Force plain output (no tables, colors, or unicode)
    #[arg(long)]
    pub plain: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long)]
    pub ascii: bool,

    /// Skip loading the bundled sample data on startup
    #[arg(long)]
    pub no_sample_data: bool,

    /// Quiet mode (suppress banner and hints)
    #[arg(short, long)]
    pub quiet: bool,
}
