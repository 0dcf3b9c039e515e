use crate::config;
use clap::Parser;

/// Rosterpix - Scrape Serie A player headshots into a zipped image dataset
#[derive(Parser, Debug, Clone)]
#[command(name = "rosterpix")]
#[command(author = "Arthur")]
#[command(version = "0.1.0")]
#[command(about = "Scrape, validate and resize player photos, then pack them as a zip", long_about = None)]
pub struct Args {
    /// Output directory for the per-team image folders
    #[arg(short, long, default_value = config::OUT_DIR)]
    pub out_dir: String,

    /// Path of the final zip archive
    #[arg(long, default_value = config::ARCHIVE_NAME)]
    pub archive: String,

    /// Maximum output width in pixels (wider images are downscaled)
    #[arg(long, default_value_t = config::MAX_WIDTH)]
    pub max_width: u32,

    /// Minimum accepted width/height in pixels (filters out icons)
    #[arg(long, default_value_t = config::MIN_DIMENSION)]
    pub min_dimension: u32,

    /// JPEG quality for re-encoded images (1-100)
    #[arg(long, default_value_t = config::JPEG_QUALITY)]
    pub quality: u8,

    /// Image download timeout in seconds
    #[arg(short = 't', long, default_value_t = config::DOWNLOAD_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Skip the final zip step
    #[arg(long, default_value_t = false)]
    pub no_archive: bool,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
