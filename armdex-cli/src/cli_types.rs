//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use armdex_core::Status;

#[derive(Parser)]
#[command(name = "armdex")]
#[command(about = "Browse the Windows ARM app compatibility directory", long_about = None)]
pub(crate) struct Cli {
    /// Catalog document to load (URL, file:// URL or local path)
    #[arg(long, global = true)]
    pub data_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter controls shared by the listing commands.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive substring matched against name and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Compatibility status (e.g., native, emulation, unavailable, unknown)
    #[arg(long)]
    pub status: Option<Status>,

    /// Apply only the last filter given, like the original web listing
    #[arg(long)]
    pub legacy_filters: bool,

    /// Print matching items as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List apps, featured first
    List {
        /// Only apps in this category
        #[arg(short, long)]
        category: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the apps in one category
    Category {
        /// Category name or route segment (e.g., "Web Browsers" or web-browsers)
        name: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show one app by its slug
    Show {
        /// App slug as it appears in /app/<slug> links
        slug: String,

        /// Also print the synthesized page metadata
        #[arg(long)]
        meta: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories and statuses present in the catalog
    Facets,

    /// Report apps whose slugs collide
    Conflicts,

    /// Generate a sitemap for the directory site
    Sitemap {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Site root used for every URL
        #[arg(long)]
        site_url: Option<String>,
    },

    /// Submit a new app for review as a tracker issue
    Submit {
        #[command(flatten)]
        form: SubmitArgs,

        /// Print the issue that would be filed without sending it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Whether the command writes machine-readable output to stdout.
    pub(crate) fn emits_json(&self) -> bool {
        match self {
            Commands::List { filters, .. } | Commands::Category { filters, .. } => filters.json,
            Commands::Show { json, .. } => *json,
            _ => false,
        }
    }
}

#[derive(Args, Clone)]
pub(crate) struct SubmitArgs {
    /// App name
    #[arg(long)]
    pub name: String,

    /// Category
    #[arg(long)]
    pub category: String,

    /// Compatibility status
    #[arg(long)]
    pub status: Status,

    /// Direct download link
    #[arg(long)]
    pub download: Option<String>,

    /// Microsoft Store link
    #[arg(long)]
    pub store: Option<String>,

    /// Short description
    #[arg(long)]
    pub about: Option<String>,

    /// Icon URL
    #[arg(long)]
    pub icon: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Write the current settings to the config file
    Init,

    /// Print the config file path
    Path,
}
