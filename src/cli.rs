use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ui-code-eval.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Judge all generated artifacts and produce the comparison report
    Run {
        /// Directory of reference screenshots
        #[arg(long)]
        images_dir: Option<String>,

        /// Directory of generated code artifacts
        #[arg(long)]
        code_dir: Option<String>,

        /// Directory for snapshots and reports
        #[arg(long)]
        results_dir: Option<String>,

        /// Judge model to use
        #[arg(long)]
        judge_model: Option<String>,
    },
    /// Compute pass@k metrics and best/worst samples from a snapshot
    Analyze {
        /// Path to an evaluation snapshot JSON
        #[arg(required = true)]
        snapshot: PathBuf,
    },
    /// Compare the two variants from a snapshot
    Compare {
        /// Path to an evaluation snapshot JSON
        #[arg(required = true)]
        snapshot: PathBuf,
    },
    /// Render the detailed text report from a snapshot
    Report {
        /// Path to an evaluation snapshot JSON
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Where to write the report (printed to stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
