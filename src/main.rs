// src/main.rs

use filemerge::errors::Result;
use filemerge::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        if err.is_usage_error() {
            eprintln!("{}", cli::usage());
        }
        eprintln!("filemerge error: {err}");
        std::process::exit(1);
    }
}

async fn run_main() -> Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await?;
    Ok(())
}
