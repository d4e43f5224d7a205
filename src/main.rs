use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod classifier;
mod classifiers;
mod config;
mod error;
mod preprocessing;
mod solver;

use solver::Solver;

#[derive(Parser, Debug)]
#[command(name = "solve")]
#[command(about = "Multi-variant CAPTCHA solver")]
#[command(version)]
pub struct Args {
    /// Image files to solve
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing on stderr so report lines on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    if config.images.is_empty() {
        eprintln!("Usage: solve <image1> [image2 ...]");
        eprintln!("Example: solve image1.jpg image2.jpg");
        std::process::exit(1);
    }

    tracing::debug!("Starting captcha-solver v{}", env!("CARGO_PKG_VERSION"));

    // The solver is built on the first existing input so that runs which only
    // hit missing files never load the OCR models.
    let mut solver: Option<Solver> = None;

    for path in &config.images {
        if !path.exists() {
            println!("{} → Error: File not found", path.display());
            continue;
        }

        if solver.is_none() {
            match Solver::new() {
                Ok(s) => solver = Some(s),
                Err(e) => {
                    println!("{} → Error: {}", path.display(), e);
                    continue;
                }
            }
        }
        let Some(solver) = solver.as_ref() else {
            continue;
        };

        match solver.solve(path) {
            Ok(text) => println!("{} → {}", path.display(), text),
            Err(e) => println!("{} → Error: {}", path.display(), e),
        }
    }

    Ok(())
}
