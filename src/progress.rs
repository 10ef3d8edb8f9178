//! The DNA replication progress bar.
//!
//! A bar draws five lines (six with a header) and redraws them in place on
//! every progress change:
//!
//! ```text
//! PROCESSING-DATA
//! 3'┬┬┬┬┬┬┬┬┬┬┬┬┬┬┬
//! --ATCG-N
//! --TAGC-N
//! 5'┴┴┴┴┴┴┴┴===>
//! 53.3% (8/15)
//! ```
//!
//! ## Lifecycle
//!
//! - `Uninitialized` after construction: `total` is 0 and nothing is drawn
//! - `Active` after [`ProgressBar::start`]: every mutator redraws
//! - `Done` after [`ProgressBar::finish`]: full bar drawn, blank line emitted
//!
//! Calling `start` again begins a fresh run below the previous one.

use std::io::Stderr;

use tracing::{debug, trace};

use crate::frame::{Frame, FrameWriter, TerminalWriter};
use crate::options::{BarOptions, HeaderMode};
use crate::strand::Strand;

/// Lines drawn for the bar itself, not counting the header.
pub const BAR_LINES: usize = 5;

/// Where a bar is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Built but not started; renders are no-ops
    #[default]
    Uninitialized,
    /// Started; each change redraws in place
    Active,
    /// Finished at 100%
    Done,
}

/// A progress bar drawn as a replicating DNA double strand.
#[derive(Debug)]
pub struct ProgressBar<W: FrameWriter = TerminalWriter<Stderr>> {
    /// Number of cells across, fixed at construction
    width: usize,
    /// Printed above the zipper when non-empty
    header_line: String,
    /// Uppercase template, exactly `width` cells
    top_strand: Strand,
    /// Base pairing of `top_strand`, exactly `width` cells
    complement: Strand,
    completed: u64,
    total: u64,
    options: BarOptions,
    /// Line count of the frame currently on screen (0 before the first frame)
    lines_drawn: usize,
    phase: Phase,
    writer: W,
}

impl ProgressBar {
    /// Creates a bar drawing to stderr with the default display options.
    ///
    /// * `sequence` - template strand; empty or blank means the built-in 21 nt
    /// * `header` - text above the bar; when non-empty its length sets the width
    pub fn new(sequence: &str, header: &str) -> Self {
        Self::with_options(sequence, header, BarOptions::default())
    }

    /// Creates a bar drawing to stderr.
    pub fn with_options(sequence: &str, header: &str, options: BarOptions) -> Self {
        Self::with_writer(sequence, header, options, TerminalWriter::stderr())
    }
}

impl<W: FrameWriter> ProgressBar<W> {
    /// Creates a bar drawing through `writer`.
    pub fn with_writer(sequence: &str, header: &str, options: BarOptions, writer: W) -> Self {
        let mut top_strand = Strand::template(sequence);
        let mut complement = top_strand.complement();

        let (width, header_line) = if header.is_empty() {
            let header_line = match options.header_mode {
                HeaderMode::Hidden => String::new(),
                HeaderMode::EchoSequence => top_strand.as_string(),
            };
            (top_strand.len(), header_line)
        } else {
            let width = header.chars().count();
            top_strand.fit_to(width);
            complement.fit_to(width);
            (width, header.to_string())
        };

        Self {
            width,
            header_line,
            top_strand,
            complement,
            completed: 0,
            total: 0,
            options,
            lines_drawn: 0,
            phase: Phase::Uninitialized,
            writer,
        }
    }

    /// Begins a run of `total` steps and draws the first frame.
    ///
    /// A `total` of 0 leaves the bar blank.
    pub fn start(&mut self, total: u64) {
        debug!(total, width = self.width, "starting progress bar");
        self.total = total;
        self.completed = 0;
        self.lines_drawn = 0;
        self.phase = Phase::Active;
        self.render();
    }

    /// Advances by one step and redraws.
    pub fn update(&mut self) {
        self.completed = self.completed.saturating_add(1);
        self.render();
    }

    /// Jumps to `completed` steps (forwards or backwards) and redraws.
    pub fn set_progress(&mut self, completed: u64) {
        self.completed = completed;
        self.render();
    }

    /// Draws the bar at 100% and moves below it.
    pub fn finish(&mut self) {
        debug!(total = self.total, "finishing progress bar");
        self.completed = self.total;
        self.render();
        if let Err(err) = self.writer.write_blank_line() {
            debug!(%err, "failed to write trailing line");
        }
        self.phase = Phase::Done;
    }

    /// Builds the current frame without drawing it.
    ///
    /// Returns `None` while `total` is 0.
    pub fn frame(&self) -> Option<Frame> {
        if self.total == 0 {
            return None;
        }

        let pos = self.fill_position();
        let glyphs = self.options.glyphs.glyphs();
        let orientation = self.options.orientation;

        let mut lines = Vec::with_capacity(BAR_LINES + 1);
        if !self.header_line.is_empty() {
            lines.push(self.header_line.clone());
        }
        lines.push(format!(
            "{}{}",
            orientation.zipper_label(),
            glyphs.zipper.repeat(self.width)
        ));
        lines.push(format!("{}{}", glyphs.lead_in, self.top_strand.prefix(pos)));
        lines.push(format!("{}{}", glyphs.lead_in, self.complement.prefix(pos)));
        lines.push(format!(
            "{}{}{}",
            orientation.primer_label(),
            glyphs.primer.repeat(pos.min(self.width)),
            glyphs.arrow
        ));
        lines.push(format!(
            "{:.1}% ({}/{})",
            self.percent(),
            self.completed,
            self.total
        ));

        Some(Frame::new(lines))
    }

    /// Draws the current frame over the previous one.
    fn render(&mut self) {
        let Some(frame) = self.frame() else {
            return;
        };

        trace!(
            completed = self.completed,
            total = self.total,
            pos = self.fill_position(),
            "render"
        );
        if let Err(err) = self.writer.write_frame(&frame, self.lines_drawn) {
            debug!(%err, "failed to draw progress frame");
        }
        self.lines_drawn = frame.line_count();
    }

    /// Number of filled cells: `floor(completed * width / total)`, at most `width`.
    pub fn fill_position(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        let pos = u128::from(self.completed) * self.width as u128 / u128::from(self.total);
        pos.min(self.width as u128) as usize
    }

    /// Completion as a percentage, unclamped.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The header line, empty when none is drawn.
    pub fn header(&self) -> &str {
        &self.header_line
    }

    pub fn top_strand(&self) -> String {
        self.top_strand.as_string()
    }

    pub fn complement(&self) -> String {
        self.complement.as_string()
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> BarOptions {
        self.options
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::frame::CaptureWriter;
    use crate::glyphs::GlyphSet;
    use crate::options::StrandOrientation;
    use crate::strand::DEFAULT_SEQUENCE;

    fn capture_bar(sequence: &str, header: &str) -> ProgressBar<CaptureWriter> {
        ProgressBar::with_writer(sequence, header, BarOptions::default(), CaptureWriter::new())
    }

    #[test]
    fn test_new_without_header() {
        let bar = capture_bar("atcg", "");
        assert_eq!(bar.width(), 4);
        assert_eq!(bar.top_strand(), "ATCG");
        assert_eq!(bar.complement(), "TAGC");
        assert_eq!(bar.header(), "");
        assert_eq!(bar.completed(), 0);
        assert_eq!(bar.total(), 0);
        assert_eq!(bar.phase(), Phase::Uninitialized);
    }

    #[test]
    fn test_new_pads_to_header() {
        let bar = capture_bar("AT", "HEADER");
        assert_eq!(bar.width(), 6);
        assert_eq!(bar.top_strand(), "AT----");
        assert_eq!(bar.complement(), "TA----");
    }

    #[test]
    fn test_new_truncates_to_header() {
        let bar = capture_bar("ATCGATCGAT", "HDR");
        assert_eq!(bar.width(), 3);
        assert_eq!(bar.top_strand(), "ATC");
        assert_eq!(bar.complement(), "TAG");
    }

    #[test]
    fn test_new_default_sequence() {
        let bar = capture_bar("", "");
        assert_eq!(bar.width(), 21);
        assert_eq!(bar.top_strand(), DEFAULT_SEQUENCE);
        assert_eq!(bar.header(), "");
    }

    #[test]
    fn test_header_width_counts_characters() {
        let bar = capture_bar("ACGT", "ÉTAPE");
        assert_eq!(bar.width(), 5);
        assert_eq!(bar.top_strand(), "ACGT-");
    }

    #[test]
    fn test_echo_header_mode() {
        let options = BarOptions::default().header_mode(HeaderMode::EchoSequence);
        let bar = ProgressBar::with_writer("acg", "", options, CaptureWriter::new());
        assert_eq!(bar.header(), "ACG");
        assert_eq!(bar.width(), 3);

        // An explicit header wins over echo
        let bar = ProgressBar::with_writer("acg", "HEAD", options, CaptureWriter::new());
        assert_eq!(bar.header(), "HEAD");
    }

    #[test]
    fn test_render_noop_before_start() {
        let mut bar = capture_bar("ACGT", "");
        bar.update();
        bar.set_progress(3);
        assert!(bar.frame().is_none());
        assert_eq!(bar.writer().frame_count(), 0);
    }

    #[test]
    fn test_start_zero_total_draws_nothing() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(0);
        bar.update();
        assert_eq!(bar.writer().frame_count(), 0);
        assert_eq!(bar.fill_position(), 0);
        assert_eq!(bar.percent(), 0.0);
    }

    #[test]
    fn test_first_frame_lines() {
        let mut bar = capture_bar("atcg", "");
        bar.start(4);

        let frame = bar.writer().last_frame().unwrap();
        assert_eq!(
            frame.lines,
            vec!["3'┬┬┬┬", "--", "--", "5'===>", "0.0% (0/4)"]
        );
    }

    #[test]
    fn test_update_scenario() {
        let mut bar = capture_bar("atcg", "");
        bar.start(4);

        let mut positions = Vec::new();
        for _ in 0..4 {
            bar.update();
            positions.push(bar.fill_position());
        }
        assert_eq!(positions, vec![1, 2, 3, 4]);

        let frame = bar.writer().last_frame().unwrap();
        assert_eq!(
            frame.lines,
            vec!["3'┬┬┬┬", "--ATCG", "--TAGC", "5'┴┴┴┴===>", "100.0% (4/4)"]
        );
    }

    #[test]
    fn test_partial_fill_uses_floor() {
        let mut bar = capture_bar("ACGTACGTAC", "");
        bar.start(3);
        bar.update();
        // 1 * 10 / 3 = 3.33 → 3
        assert_eq!(bar.fill_position(), 3);
        let frame = bar.frame().unwrap();
        assert_eq!(frame.lines[1], "--ACG");
        assert_eq!(frame.lines[2], "--TGC");
        assert_eq!(frame.last_line(), Some("33.3% (1/3)"));
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(2);
        bar.set_progress(7);
        assert_eq!(bar.completed(), 7);
        assert_eq!(bar.fill_position(), 4);

        let frame = bar.frame().unwrap();
        assert_eq!(frame.lines[1], "--ACGT");
        assert_eq!(frame.lines[3], "5'┴┴┴┴===>");
        assert_eq!(frame.last_line(), Some("350.0% (7/2)"));
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(u64::MAX);
        bar.set_progress(u64::MAX / 2);
        assert_eq!(bar.fill_position(), 1);
        bar.set_progress(u64::MAX);
        bar.update();
        assert_eq!(bar.completed(), u64::MAX);
        assert_eq!(bar.fill_position(), 4);
    }

    #[test]
    fn test_set_progress_rewinds() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(4);
        bar.set_progress(3);
        assert_eq!(bar.fill_position(), 3);
        bar.set_progress(1);
        assert_eq!(bar.completed(), 1);
        assert_eq!(bar.fill_position(), 1);
        assert_eq!(bar.frame().unwrap().lines[1], "--A");
    }

    #[test]
    fn test_redraw_rewinds_previous_frame() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(4);
        bar.update();
        bar.set_progress(0);

        let rewinds: Vec<usize> = bar.writer().frames().map(|(rewind, _)| rewind).collect();
        assert_eq!(rewinds, vec![0, BAR_LINES, BAR_LINES]);
    }

    #[test]
    fn test_header_adds_a_line() {
        let mut bar = capture_bar("AT", "HEADER");
        bar.start(2);
        bar.update();

        let frames: Vec<(usize, &Frame)> = bar.writer().frames().collect();
        assert_eq!(frames[0].0, 0);
        assert_eq!(frames[1].0, BAR_LINES + 1);
        assert_eq!(frames[1].1.line_count(), BAR_LINES + 1);
        assert_eq!(
            frames[1].1.lines,
            vec!["HEADER", "3'┬┬┬┬┬┬", "--AT-", "--TA-", "5'┴┴┴===>", "50.0% (1/2)"]
        );
    }

    #[test]
    fn test_finish_forces_full_bar() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(10);
        bar.set_progress(3);
        bar.finish();

        assert_eq!(bar.completed(), 10);
        assert_eq!(bar.phase(), Phase::Done);
        assert_eq!(bar.fill_position(), 4);

        let captures = bar.writer().captures();
        assert_eq!(captures.last(), Some(&crate::frame::Capture::BlankLine));
        let frame = bar.writer().last_frame().unwrap();
        assert_eq!(frame.last_line(), Some("100.0% (10/10)"));
    }

    #[test]
    fn test_restart_after_finish() {
        let mut bar = capture_bar("ACGT", "");
        bar.start(2);
        bar.finish();
        bar.start(8);

        assert_eq!(bar.phase(), Phase::Active);
        assert_eq!(bar.completed(), 0);
        let (rewind, frame) = bar.writer().frames().last().unwrap();
        assert_eq!(rewind, 0);
        assert_eq!(frame.last_line(), Some("0.0% (0/8)"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut bar = capture_bar("ACGTAC", "");
        bar.start(6);
        bar.set_progress(2);
        bar.set_progress(2);

        let frames: Vec<&Frame> = bar.writer().frames().map(|(_, f)| f).collect();
        assert_eq!(frames[1], frames[2]);
        assert_eq!(bar.frame().as_ref(), Some(frames[2]));
    }

    #[test]
    fn test_five_prime_top_orientation() {
        let options = BarOptions::default().orientation(StrandOrientation::FivePrimeTop);
        let mut bar = ProgressBar::with_writer("AC", "", options, CaptureWriter::new());
        bar.start(1);
        let frame = bar.frame().unwrap();
        assert!(frame.lines[0].starts_with("5'"));
        assert!(frame.lines[3].starts_with("3'"));
    }

    #[test]
    fn test_ascii_glyphs() {
        let options = BarOptions::default().glyphs(GlyphSet::Ascii);
        let mut bar = ProgressBar::with_writer("ACG", "", options, CaptureWriter::new());
        bar.start(3);
        bar.update();
        let frame = bar.frame().unwrap();
        assert_eq!(frame.lines[0], "3'|||");
        assert_eq!(frame.lines[3], "5'====>");
    }

    /// Writer whose output always fails.
    struct BrokenWriter;

    impl FrameWriter for BrokenWriter {
        fn write_frame(&mut self, _frame: &Frame, _rewind: usize) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn write_blank_line(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_errors_are_ignored() {
        let mut bar = ProgressBar::with_writer("ACGT", "", BarOptions::default(), BrokenWriter);
        bar.start(2);
        bar.update();
        bar.finish();
        assert_eq!(bar.completed(), 2);
        assert_eq!(bar.phase(), Phase::Done);
    }
}
