//! Command-line interface for toolcall-f1.
//!
//! Scores a candidate run's tool-call behaviour against a reference run,
//! writes the summary to `--out` and prints it to stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::config;
use crate::core::Evaluator;
use crate::report::write_summary;

/// toolcall-f1 - Compare tool-call triggering between two inference logs
#[derive(Parser, Debug)]
#[command(name = "toolcall-f1")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Candidate run results (JSONL)
    #[arg(long, env = "TOOLCALL_F1_OURS")]
    pub ours: PathBuf,

    /// Reference run results (JSONL)
    #[arg(long, env = "TOOLCALL_F1_OFFICIAL")]
    pub official: PathBuf,

    /// Path to write the summary JSON
    #[arg(long, env = "TOOLCALL_F1_OUT")]
    pub out: PathBuf,
}

impl Cli {
    /// Execute the evaluation
    pub async fn execute(self) -> Result<()> {
        let config = config::load_config()?;
        if let Some(ref path) = config.config_file {
            info!(config = %path.display(), "Using config file");
        }

        let evaluator = Evaluator::new(config.limits);
        let summary = evaluator.evaluate(&self.ours, &self.official).await?;

        let rendered = write_summary(&self.out, &summary).await?;
        info!(out = %self.out.display(), "Wrote summary");

        println!("{}", rendered);
        Ok(())
    }
}
