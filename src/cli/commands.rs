//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Personal journaling backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List all entries, newest date first
    List {
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: String,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new entry
    Add {
        /// Entry date (free-form timestamp string; default: now)
        #[arg(short, long)]
        date: Option<String>,

        /// Entry text
        #[arg(short, long)]
        content: Option<String>,

        /// Mood (happy, sad, neutral, excited, calm, stressed)
        #[arg(short, long)]
        mood: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Explicit entry id (normally assigned by the store)
        #[arg(long)]
        id: Option<String>,

        /// Read a JSON entry payload from stdin instead of flags
        #[arg(long, conflicts_with_all = ["date", "content", "mood", "tags", "id"])]
        json_input: bool,

        /// Print the stored entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of an existing entry
    Edit {
        /// Entry id
        id: String,

        /// New date
        #[arg(short, long)]
        date: Option<String>,

        /// New entry text
        #[arg(short, long)]
        content: Option<String>,

        /// New mood (happy, sad, neutral, excited, calm, stressed)
        #[arg(short, long)]
        mood: Option<String>,

        /// Clear the mood
        #[arg(long, conflicts_with = "mood")]
        clear_mood: bool,

        /// Replace the tags (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        /// Read a JSON patch payload from stdin instead of flags
        #[arg(long, conflicts_with_all = ["date", "content", "mood", "clear_mood", "tags", "clear_tags"])]
        json_input: bool,

        /// Print the merged entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an entry (its media files are kept)
    Delete {
        /// Entry id
        id: String,
    },

    /// Store a media file and print its descriptor
    Upload {
        /// File to upload
        file: PathBuf,

        /// Declared MIME type (guessed from the extension when omitted)
        #[arg(long)]
        mime: Option<String>,

        /// Original filename recorded in the descriptor (default: the file's name)
        #[arg(long)]
        name: Option<String>,

        /// Append the descriptor to this entry's media list
        #[arg(long)]
        entry: Option<String>,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Retrieve a stored media file
    Media {
        /// Storage name (or locator) returned by upload
        name: String,

        /// Write the bytes to this path instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show aggregate statistics
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
