//! CLI argument parsing via clap.

use aur_talk::app::Request;
use aur_talk::build_info;
use aur_talk::config::{Config, ALL_COMMENTS};
use aur_talk::thread::SectionFilter;
use clap::Parser;

/// Read comments of an AUR package in the terminal.
#[derive(Debug, Parser)]
#[command(name = "aur-talk", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Name of the AUR package.
    #[arg(value_name = "PACKAGE-NAME")]
    pub package: String,

    /// Fetch all comments.
    #[arg(short = 'a', long = "all", conflicts_with = "num_comments")]
    pub all: bool,

    /// Number of latest comments to fetch (default: 10).
    #[arg(
        short = 'n',
        long = "num-comments",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub num_comments: Option<u32>,

    /// Show only the pinned comments.
    #[arg(short = 'p', long = "pinned-only", conflicts_with = "latest_only")]
    pub pinned_only: bool,

    /// Show only the latest comments.
    #[arg(short = 'l', long = "latest-only")]
    pub latest_only: bool,

    /// Wrap output to this many columns (default: 80).
    #[arg(
        short = 'w',
        long = "width",
        value_name = "N",
        value_parser = parse_width,
        conflicts_with = "free_format"
    )]
    pub width: Option<usize>,

    /// Print without any width restriction.
    #[arg(short = 'f', long = "free-format")]
    pub free_format: bool,

    /// Do not emit bold text.
    #[arg(long = "no-bold")]
    pub no_bold: bool,

    /// Do not emit italic text.
    #[arg(long = "no-italic")]
    pub no_italic: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to config file (default: ~/.config/aur-talk/aur-talk.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.display.width = width;
            config.display.free_format = false;
        }
        if self.free_format {
            config.display.free_format = true;
        }
        if self.no_color {
            config.display.color = false;
        }
        if self.no_bold {
            config.display.bold = false;
        }
        if self.no_italic {
            config.display.italic = false;
        }
        if self.all {
            config.fetch.num_comments = ALL_COMMENTS;
        } else if let Some(n) = self.num_comments {
            config.fetch.num_comments = n;
        }
    }

    pub fn filter(&self) -> SectionFilter {
        if self.pinned_only {
            SectionFilter::PinnedOnly
        } else if self.latest_only {
            SectionFilter::LatestOnly
        } else {
            SectionFilter::All
        }
    }

    pub fn request(&self, config: &Config) -> Request {
        Request {
            package: self.package.clone(),
            num_comments: config.fetch.num_comments,
        }
    }
}

fn parse_width(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("width must be at least 1 (use --free-format for unbounded output)".into()),
        Ok(width) => Ok(width),
        Err(e) => Err(e.to_string()),
    }
}
