//! Todo API Load Test
//!
//! Runs create/read/update/delete rounds of increasing size against a live
//! backend and appends the timings to per-size CSV files.

mod report;
mod runner;

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_sync::{ApiConfig, HttpApi};

#[derive(Debug, Parser)]
#[command(name = "todo-bench", about = "Time CRUD round trips against the todo API")]
struct Cli {
    /// API root, e.g. http://localhost:1111/api/v1
    #[arg(long, env = "TODO_API_URL")]
    base_url: Option<String>,

    /// Round sizes to run, in order
    #[arg(short, long, num_args = 1.., default_values_t = [10, 50, 100, 500, 1000])]
    iterations: Vec<usize>,

    /// Directory the CSV files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.base_url.map(ApiConfig::new).unwrap_or_default();
    info!(base_url = %config.base_url, "benchmarking");
    let api = HttpApi::new(config);

    let mut rng = rand::thread_rng();
    for &iterations in &cli.iterations {
        let result = runner::run(&api, iterations, Local::now().date_naive(), &mut rng).await;

        let path = report::results_path(&cli.output_dir, iterations);
        report::append_csv(&path, &result)?;
        info!(path = %path.display(), created = result.created, "results saved");

        println!("{}", report::summary(&result));
    }
    Ok(())
}
