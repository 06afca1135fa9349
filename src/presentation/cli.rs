//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --store, --verbose) are inherited by all subcommands
//! - Markup and JSON go to stdout; logs and warnings go to stderr

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// treemenu - hierarchical navigation menus with active-path highlighting
#[derive(Parser, Debug)]
#[command(name = "treemenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./treemenu.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Menu store file, overrides the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a menu as nested HTML for one page
    Render {
        /// Menu name, e.g. main_menu
        menu: String,

        /// Address of the current page
        #[arg(short, long, default_value = "/")]
        path: String,
    },

    /// Print one menu with nested children as JSON
    List {
        /// Menu name
        menu: String,
    },

    /// Print stored items with their subtrees as JSON
    Items {
        /// Only items of this menu
        #[arg(short, long)]
        menu: Option<String>,
    },

    /// List stored menu names with item counts
    Menus {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand {% draw_menu %} tags in a template file
    Template {
        /// Template file
        file: PathBuf,

        /// Address of the current page
        #[arg(short, long, default_value = "/")]
        path: String,
    },

    /// Write the demo menus and routes
    Seed {
        /// Store file to write (default: the configured store)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Also write a treemenu.toml with the demo routes next to the store
        #[arg(long)]
        with_config: bool,
    },

    /// Validate the menu store and report every problem
    Check,
}
