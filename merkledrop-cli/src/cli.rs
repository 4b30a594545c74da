use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "merkledrop")]
#[command(about = "Generate a Merkle commitment root and inclusion proofs from an allocation CSV", long_about = None)]
pub struct MerkledropCli {
    /// Input CSV file with address and allocation columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output JSON file path; the artifact goes to stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON artifact
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,

    /// Log progress and diagnostics
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Log every leaf digest
    #[arg(long, default_value_t = false)]
    pub show_leaves: bool,

    /// Log every node of every tree level
    #[arg(long, default_value_t = false)]
    pub show_tree: bool,
}
