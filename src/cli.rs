use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parceler")]
#[command(about = "Partition file manifests into size-bounded transfer groups", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Resolve a table of directory paths into a flat list of file paths.
    Scan {
        /// Input table (csv or tab-separated) with a header row
        #[arg(long)]
        input: PathBuf,
        /// Column containing the directory paths to walk
        #[arg(long, default_value = "Secondary Path")]
        col: String,
        /// Emit every file instead of only *.fq.gz
        #[arg(long)]
        scan_all: bool,
    },

    /// Build a path,size,hash manifest from a list of file paths.
    Manifest {
        /// File with one path per line; reads stdin when omitted
        #[arg(long)]
        list: Option<PathBuf>,
        /// Write the manifest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Group a manifest into size-bounded parcels, one CSV artifact per
    /// group plus the unsplit full list.
    Group {
        /// Manifest of path,size,hash rows (headerless csv/tsv)
        #[arg(long)]
        results: PathBuf,
        /// Size limit per group, in terabytes (1 TB = 1024^4 bytes)
        #[arg(long, default_value_t = 11.0)]
        limit_tb: f64,
        /// Prefix for output artifacts
        #[arg(long, default_value = "result")]
        prefix: String,
        /// Output JSON summary
        #[arg(long)]
        json: bool,
    },
}
