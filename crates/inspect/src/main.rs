use clap::Parser;

use sheltra_auth::SessionConfig;
use sheltra_inspect::Cli;

fn main() -> anyhow::Result<()> {
    sheltra_observability::init();

    let cli = Cli::parse();
    let config = SessionConfig::from_env()?;

    let stdout = std::io::stdout();
    sheltra_inspect::run(&cli, &config, &mut stdout.lock())
}
