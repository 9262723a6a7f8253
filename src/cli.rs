use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seedforge")]
#[command(author, version, about = "Release naming and tag inference for tracker uploads")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a release name and print the recognized attributes
    Parse {
        /// Release name or file name
        #[arg(required = true)]
        name: String,
    },

    /// Analyze a directory for season-pack detection
    Analyze {
        /// Directory to analyze
        #[arg(required = true)]
        dir: PathBuf,
    },

    /// Compose the canonical release name of a file or directory
    Name {
        /// File, directory or bare release name
        #[arg(required = true)]
        path: PathBuf,

        /// Saved `mediainfo --Output=JSON` report to use instead of probing
        #[arg(long)]
        report: Option<PathBuf>,

        /// Work from the name alone
        #[arg(long)]
        no_probe: bool,

        /// Release group overriding the one found in the name
        #[arg(short, long)]
        group: Option<String>,

        /// Print the prepared release as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select taxonomy tags for a file or directory
    Tags {
        /// File, directory or bare release name
        #[arg(required = true)]
        path: PathBuf,

        /// Taxonomy JSON (defaults to `taxonomy.path` from the config)
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,

        /// Genre of the release, repeatable
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Saved `mediainfo --Output=JSON` report to use instead of probing
        #[arg(long)]
        report: Option<PathBuf>,

        /// Work from the name alone
        #[arg(long)]
        no_probe: bool,
    },

    /// Compose names for many items in parallel
    Batch {
        /// Files, directories or bare release names
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Work from the names alone
        #[arg(long)]
        no_probe: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },
}
