use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(about = "Local-first colored notes for the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    New {
        /// Title of the note (optional, opens editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the note
        #[arg(required = false)]
        content: Option<String>,

        /// Accent color (palette name like "pink" or a palette hex token)
        #[arg(short, long)]
        color: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Filter by search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search notes (dedicated command)
    Search { term: String },

    /// View one or more notes in full
    #[command(alias = "v")]
    View {
        /// Positions of the notes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Edit a note in the editor
    #[command(alias = "e")]
    Edit {
        /// Position of the note
        position: String,

        /// Change the accent color
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Positions of the notes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Copy a note to the clipboard for sharing
    #[command(alias = "s")]
    Share {
        /// Position of the note
        position: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
