//! LearnTrack CLI - an interactive student and course management console.
//!
//! All state is in memory and discarded at exit. The shell drives the
//! service layer in learntrack-core; see that crate for the business rules.

mod app;
mod cli;
mod config;
mod shell;
mod ui;

use std::path::Path;

use clap::Parser;

use learntrack_core::VERSION;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::ui::{badge, banner, hint, Badge, UiContext};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref().map(Path::new))?;

    let ui = UiContext::from_env(
        cli.plain || config.ui.plain,
        cli.no_color || config.ui.no_color,
        cli.ascii || config.ui.ascii,
    );
    let mut ctx = AppContext::new(ui, cli.quiet);

    if !ctx.quiet {
        println!("{}", banner(&ctx.ui, VERSION));
    }

    if !cli.no_sample_data && config.data.sample_data {
        ctx.load_sample_data()
            .map_err(|e| anyhow::anyhow!("Failed to load sample data: {}", e))?;
        if !ctx.quiet {
            println!("{}", badge(&ctx.ui, Badge::Info, "Sample data loaded"));
        }
    }

    if !ctx.quiet {
        println!(
            "{}",
            hint(&ctx.ui, "Nothing is persisted; all records live in memory")
        );
    }

    shell::run(&mut ctx)?;

    if !ctx.quiet {
        println!("\nThank you for using LearnTrack!");
    }
    Ok(())
}
