use clap::Parser;
use fractal_dimensions::{CliArgs, PpmFilePresenter, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(&CliArgs::parse(), PpmFilePresenter::new())
}
