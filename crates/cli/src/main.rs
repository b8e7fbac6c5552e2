use clap::Parser;
use iac_composer::{Cli, RunEnv, run};
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout is reserved for tool output and plain outputs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli, &RunEnv::system()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // GitHub workflow command, annotates the run
            println!("::error::{e:#}");
            std::process::exit(1);
        }
    }
}
