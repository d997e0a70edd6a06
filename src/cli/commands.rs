use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bloco")]
#[command(version, about = "A local-first personal notepad")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Notebook root (defaults to the nearest directory containing .bloco/)
    #[arg(long, global = true, env = "BLOCO_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Log store activity to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new notebook in the current directory
    Init,

    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Note content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Color tag (rose, amber, lime, sky, indigo, fuchsia, pink, slate)
        #[arg(long)]
        color: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing note
    Edit {
        /// Note ID (full id or unique prefix)
        id: String,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new content from stdin
        #[arg(long)]
        stdin: bool,

        /// New color tag
        #[arg(long)]
        color: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID (full id or unique prefix)
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List notes, most recently updated first
    List {
        /// Only show notes whose title or content contains this text
        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Note ID (full id or unique prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a note as a plain-text file
    Export {
        /// Note ID (full id or unique prefix)
        id: String,

        /// Target directory (defaults to export_dir from config, then the current directory)
        #[arg(long, short = 'o', value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// List the available colors
    Colors,
}
