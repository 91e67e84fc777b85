use anyhow::Result;
use argmine::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("argmine=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
