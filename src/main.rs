use anyhow::Result;
use clap::Parser;
use hisco_classifier::cli::Cli;

fn main() -> Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        filter = filter.add_directive("hisco_classifier=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
