//! CLI definitions for element-inspector.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use inspector_protocols::{Point, TemplateKind};

/// element-inspector CLI.
#[derive(Parser)]
#[command(name = "element-inspector")]
#[command(about = "Resolve, describe and build prompts for elements of a DOM snapshot")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.element-inspector/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve the most specific element at a point
    Resolve {
        /// DOM snapshot file (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,

        #[arg(short, long, allow_hyphen_values = true)]
        y: f64,

        /// Extra exclusion selector, added to the configured one, e.g. "#toolbar, .debug"
        #[arg(long)]
        exclude: Option<String>,

        /// Output template (xml, markdown)
        #[arg(short, long)]
        template: Option<TemplateKind>,
    },

    /// Serialize elements picked by id, in the given order
    Serialize {
        /// DOM snapshot file (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Element id (repeatable)
        #[arg(long = "id", required = true)]
        ids: Vec<String>,

        /// Output template (xml, markdown)
        #[arg(short, long)]
        template: Option<TemplateKind>,
    },

    /// Compose a prompt from a goal and a selection
    Compose {
        /// DOM snapshot file (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// What the user wants done
        #[arg(short, long)]
        goal: String,

        /// Select an element by id (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Select the element resolved at "X,Y" (repeatable)
        #[arg(long = "point")]
        points: Vec<Point>,

        /// Page URL (default: config, then the snapshot's URL)
        #[arg(long)]
        url: Option<String>,

        /// Output template (xml, markdown)
        #[arg(short, long)]
        template: Option<TemplateKind>,

        /// Plugin context as "plugin:name=value" (repeatable)
        #[arg(long = "context")]
        contexts: Vec<String>,
    },

    /// Print the parent-frame message for a selection as JSON
    Message {
        /// DOM snapshot file (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Select an element by id (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Emit a prompt message carrying this text instead of a selection message
        #[arg(long)]
        prompt: Option<String>,
    },
}
