//! CLI entry point for the hole filling tool

use clap::Parser;
use holefill::io::cli::{Cli, HoleFillApp};

fn main() -> holefill::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let mut app = HoleFillApp::new(cli);
    app.run()?;
    Ok(())
}
