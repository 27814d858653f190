use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colorfield_common::Notation;

/// colorfield: convert colors between CSS hex, rgb() and rgba() notations.
#[derive(Parser, Debug)]
#[command(name = "colorfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `colorfield=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-encode a color in another notation.
    Convert {
        value: String,

        /// Notation of the input; detected from its prefix when omitted.
        #[arg(long)]
        from: Option<Notation>,

        /// Target notation; the configured field notation when omitted.
        #[arg(long)]
        to: Option<Notation>,
    },

    /// Validate a color string. Exits with status 1 when invalid.
    Check {
        value: String,

        /// Notation to validate against; detected when omitted.
        #[arg(long)]
        notation: Option<Notation>,
    },

    /// Render a color through every converter.
    Show {
        /// Color to render; the configured initial color when omitted.
        value: Option<String>,

        /// Render an empty field value instead.
        #[arg(long, conflicts_with = "value")]
        empty: bool,
    },

    /// Write a config file. Without overrides the commented template is
    /// written.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,

        /// Field notation to store.
        #[arg(long)]
        notation: Option<Notation>,

        /// Initial field color to store. Any notation.
        #[arg(long)]
        initial_color: Option<String>,

        /// Color shown for an empty field. Any notation.
        #[arg(long)]
        default_color: Option<String>,
    },

    /// Print the effective config and where it came from.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
