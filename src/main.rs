//! polybar - DNA replication progress bar
//!
//! Runs a progress bar for a fixed number of steps, one step per interval.
//!
//! ## Usage
//!
//! ```bash
//! polybar
//! polybar --seq ATCGATCG --header PROCESSING --total 50 --interval 100ms
//! polybar --orientation 5-3 --ascii
//! ```
//!
//! The bar is drawn on stderr; stdout is left untouched.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use polybar::glyphs;
use polybar::logging::{debug_log_path, init_file_logging};
use polybar::options::parse_interval;
use polybar::{BarOptions, HeaderMode, ProgressBar, StrandOrientation};

/// polybar - A DNA replication styled progress bar
///
/// Draws a zipper, a template strand, its complement and a growing primer,
/// redrawn in place on stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// DNA sequence (defaults to the first 21 nt of DNA polymerase I)
    #[arg(short = 's', long = "seq", default_value = "")]
    seq: String,

    /// Optional header above the zipper; its length sets the bar width
    #[arg(short = 'H', long = "header", default_value = "")]
    header: String,

    /// Number of steps to reach 100%
    #[arg(short = 'n', long = "total", default_value = "100")]
    total: u64,

    /// Delay between updates (e.g. 50ms, 1s, 250us; bare numbers are milliseconds)
    #[arg(short = 'i', long = "interval", default_value = "50ms", value_parser = parse_interval)]
    interval: Duration,

    /// Strand labels: 3-5 puts 3' on the zipper, 5-3 puts 5' on the zipper
    #[arg(short = 'o', long = "orientation", default_value = "3-5")]
    orientation: StrandOrientation,

    /// Without --header, echo the sequence as the header line
    #[arg(long = "echo-header")]
    echo_header: bool,

    /// Draw with plain ASCII characters
    #[arg(long = "ascii")]
    ascii: bool,

    /// Write logs to this file
    #[arg(long = "log-file", conflicts_with = "debug")]
    log_file: Option<PathBuf>,

    /// Write debug logs to a new file in the temp directory
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Args {
    fn bar_options(&self) -> BarOptions {
        BarOptions::default()
            .orientation(self.orientation)
            .header_mode(if self.echo_header {
                HeaderMode::EchoSequence
            } else {
                HeaderMode::Hidden
            })
            .glyphs(glyphs::select(!self.ascii))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = if args.debug {
        Some((debug_log_path(), "debug"))
    } else {
        args.log_file.clone().map(|path| (path, "info"))
    };
    if let Some((path, level)) = &log_path {
        init_file_logging(path, level)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        if args.debug {
            eprintln!("Debug log: {}", path.display());
        }
    }

    info!(
        total = args.total,
        interval_ms = args.interval.as_millis() as u64,
        "running progress bar"
    );

    let mut bar = ProgressBar::with_options(&args.seq, &args.header, args.bar_options());
    bar.start(args.total);
    for _ in 0..args.total {
        thread::sleep(args.interval);
        bar.update();
    }
    bar.finish();

    info!("done");
    Ok(())
}
