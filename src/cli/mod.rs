//! CLI argument parsing for webptidy.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// webptidy: convert, clean up, and safely delete WebP images in a dataset.
///
/// A dataset is a base data folder with one subfolder per category
/// (default: Belts, Keyboard, Shoes, Watch).
#[derive(Parser, Debug)]
#[command(name = "webptidy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for webptidy.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert WebP images to JPEG.
    ///
    /// Writes a quality-95 RGB JPEG next to every WebP file that does not
    /// already have one. Never overwrites or deletes anything.
    Convert(DatasetArgs),

    /// Convert remaining WebP images, then remove the WebP files.
    ///
    /// A WebP file is removed only once its JPEG sibling exists.
    Cleanup(DatasetArgs),

    /// Safely delete WebP files, moving them to a recovery folder by default.
    ///
    /// Dry-run unless --delete is given. With --delete, files are moved to
    /// `<data_path>/.deleted_webp_<timestamp>/`; add --permanent to unlink them.
    Delete(DeleteArgs),
}

/// Dataset location shared by every command.
#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    /// Path to the data folder (default: ./data).
    pub data_path: Option<PathBuf>,

    /// Categories to operate on (default: the built-in list).
    ///
    /// Passing the flag with no names scans the whole data folder.
    #[arg(short, long, num_args = 0..)]
    pub categories: Option<Vec<String>>,
}

/// Arguments for the `delete` command.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Search category folders recursively.
    #[arg(short, long)]
    pub recursive: bool,

    /// Actually move files to the recovery folder (default: dry-run).
    #[arg(long)]
    pub delete: bool,

    /// Permanently unlink files instead of moving them (requires --delete).
    #[arg(long)]
    pub permanent: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
