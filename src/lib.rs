//! # polybar - DNA Replication Progress Bar
//!
//! A terminal progress indicator drawn as a replicating double strand:
//! a zipper, the template strand, its complement, and a primer that grows
//! towards the arrow as work completes.
//!
//! ## Architecture
//!
//! - `strand`: Sequence normalization, complement table, padding
//! - `glyphs`: Drawing characters (Unicode or ASCII)
//! - `options`: Display conventions and their text parsing
//! - `frame`: Frames and the writers that put them on screen
//! - `progress`: The `ProgressBar` lifecycle and render algorithm
//! - `logging`: File-only tracing setup for the command-line tool
//!
//! ## Example
//!
//! ```no_run
//! use polybar::ProgressBar;
//!
//! let mut bar = ProgressBar::new("ATCG-NNTA-GCTA", "DNA-SEQUENCING");
//! bar.start(100);
//! for _ in 0..100 {
//!     bar.update();
//! }
//! bar.finish();
//! ```

pub mod frame;
pub mod glyphs;
pub mod logging;
pub mod options;
pub mod progress;
pub mod strand;

pub use frame::{CaptureWriter, Frame, FrameWriter, TerminalWriter};
pub use glyphs::GlyphSet;
pub use options::{BarOptions, HeaderMode, StrandOrientation};
pub use progress::{Phase, ProgressBar};
