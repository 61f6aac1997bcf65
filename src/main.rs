//! CLI entry point for rendering noise masks and overlaying image directories

use clap::Parser;
use gaussmask::io::cli::{Cli, Runner};

fn main() -> gaussmask::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    Runner::new(cli).run()
}
