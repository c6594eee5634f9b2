mod commands;

use clap::{Parser, Subcommand};
use commands::{compile, init, templates, CompileArgs, InitArgs, TemplatesArgs};

/// Blockpress CLI - page builder tooling
#[derive(Parser, Debug)]
#[command(name = "blockpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter page from the built-in page template
    Init(InitArgs),

    /// Compile page files to CSS
    Compile(CompileArgs),

    /// List the section template palette
    Templates(TemplatesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    }

    match cli.command {
        Command::Init(args) => init(args),
        Command::Compile(args) => compile(args),
        Command::Templates(args) => templates(args),
    }
}
