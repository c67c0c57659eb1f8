use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptpad")]
#[command(about = "Local prompt library for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the prompt file (overrides config and the platform default)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new prompt
    #[command(alias = "n")]
    Create {
        title: String,

        /// Prompt content; read from stdin when omitted
        content: Option<String>,

        /// Group label
        #[arg(short, long, default_value = "")]
        group: String,

        /// Subgroup label (meaningful only within a group)
        #[arg(short, long, default_value = "")]
        subgroup: String,
    },

    /// List prompts, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only prompts in this group
        #[arg(short, long)]
        group: Option<String>,

        /// Only prompts in this subgroup
        #[arg(short, long)]
        subgroup: Option<String>,

        /// Case-insensitive match against title and content
        #[arg(short, long)]
        query: Option<String>,

        /// Also print the constrained Group/Subgroup option lists
        #[arg(long)]
        options: bool,
    },

    /// Print one prompt in full
    #[command(alias = "v")]
    View {
        /// Id prefix or exact title
        selector: String,
    },

    /// Edit a prompt's fields (unset fields keep their value)
    #[command(alias = "e")]
    Edit {
        /// Id prefix or exact title
        selector: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        group: Option<String>,

        #[arg(short, long)]
        subgroup: Option<String>,
    },

    /// Delete a prompt
    #[command(alias = "rm")]
    Delete {
        /// Id prefix or exact title
        selector: String,
    },

    /// Copy a prompt's content to the clipboard
    #[command(alias = "c")]
    Copy {
        /// Id prefix or exact title
        selector: String,
    },

    /// Show the Group/Subgroup classification tree
    Groups,

    /// Merge prompts from an exported file
    Import {
        /// File to merge; its header must match the prompt schema
        path: PathBuf,
    },

    /// Export all prompts to a timestamped file
    Export {
        /// Target directory (default: current directory)
        dir: Option<PathBuf>,
    },

    /// Append one prompt from raw text (or stdin), outside any session
    Capture {
        /// Text to capture; read from stdin when omitted
        text: Option<String>,
    },

    /// Get or set configuration (key: data-file)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
