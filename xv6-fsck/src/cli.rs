use clap::Parser;
use std::path::PathBuf;

/// Offline consistency checker for xv6 filesystem images
#[derive(Debug, Parser)]
pub struct Cli {
    /// Filesystem image to check
    pub image: PathBuf,
}
