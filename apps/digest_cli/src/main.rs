mod terminal;

use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use digest_core::{load_settings, Views, Workbench};
use shared::domain::ClusterIndex;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalRenderer;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(about = "Cluster a batch of questions and draft an answer for one cluster")]
#[command(group(ArgGroup::new("source").required(true).args(["sample", "file"])))]
struct Args {
    /// Use the service's sample question set.
    #[arg(long)]
    sample: bool,
    /// JSON file holding an array of questions.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Cluster number (as listed, starting at 1) to summarize.
    #[arg(long)]
    summarize: Option<usize>,
    /// Write the suggested answer of the summarized cluster to this file.
    #[arg(long, requires = "summarize")]
    answer_out: Option<PathBuf>,
    /// Print the raw summary result as JSON.
    #[arg(long, requires = "summarize")]
    json: bool,
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }

    let renderer = Arc::new(TerminalRenderer::new(args.answer_out.clone()));
    let workbench = Workbench::from_settings(&settings, Views::from_renderer(renderer))?;

    match &args.file {
        Some(path) => {
            workbench.load_file(Some(path)).await?;
        }
        None => {
            workbench.load_sample().await?;
        }
    }

    let Some(number) = args.summarize else {
        return Ok(());
    };
    let index = number
        .checked_sub(1)
        .map(ClusterIndex)
        .context("cluster numbers start at 1")?;
    if workbench.select_cluster(index).await?.is_none() {
        bail!("cluster {number} does not exist");
    }

    if args.answer_out.is_some() {
        workbench.copy_answer().await?;
    }
    if args.json {
        let snapshot = workbench.snapshot().await;
        println!("{}", serde_json::to_string_pretty(&snapshot.summary)?);
    }

    Ok(())
}
