mod cli;
mod demo;
mod script;

use std::process::ExitCode;

use bob_common::{IdGenerator, Result};
use bob_config::BobConfig;
use bob_tiling::LayoutTree;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn load_config(args: &Args) -> std::result::Result<BobConfig, bob_common::ConfigError> {
    match &args.config {
        Some(path) => bob_config::toml_loader::load_from_path(path),
        None => bob_config::load_config(),
    }
}

fn run(args: Args, config: &BobConfig) -> Result<String> {
    match args.command {
        Command::Demo { format } => {
            let tree = demo::build()?;
            script::render(&tree, format)
        }
        Command::Replay {
            script: path,
            format,
            seed,
        } => {
            let steps = script::load_script(&path)?;
            let ids = seed.map_or_else(|| config.ids.generator(), IdGenerator::starting_at);
            let mut tree = LayoutTree::with_ids(steps.root, ids);
            let report = script::replay(&mut tree, steps.step);
            tracing::info!(
                "replayed {}: {} applied, {} failed",
                path.display(),
                report.applied,
                report.failed
            );
            script::render(&tree, format)
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first so its log filter can apply; problems are reported once logging is up
    let loaded = load_config(&args);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.filter.clone());
    let directive: Directive = log_directive
        .parse()
        .unwrap_or_else(|_| "bob=info".parse().expect("static directive is valid"));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("bob v{} starting", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &loaded {
        tracing::warn!("config load failed, using defaults: {e}");
    }

    match run(args, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
