//! Frame output.
//!
//! A [`Frame`] is the block of lines one render produces. Frames reach the
//! screen through a [`FrameWriter`]:
//! - [`TerminalWriter`] writes to stderr (or any `io::Write`) and moves the
//!   cursor back up over the previous frame with an ANSI escape
//! - [`CaptureWriter`] records frames in memory so they can be inspected
//!   without a terminal

use std::io::{self, Stderr, Write};

use crossterm::{cursor::MoveToPreviousLine, queue};

/// The lines of one drawn frame, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    /// Creates a frame from its lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Returns the number of lines in the frame.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the last line (the percentage line for bar frames).
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Destination for rendered frames.
pub trait FrameWriter {
    /// Writes `frame`, first moving up `rewind` lines to overwrite the
    /// previous frame. `rewind` is 0 for the first frame of a run.
    fn write_frame(&mut self, frame: &Frame, rewind: usize) -> io::Result<()>;

    /// Writes one empty line below the last frame.
    fn write_blank_line(&mut self) -> io::Result<()>;
}

impl<F: FrameWriter + ?Sized> FrameWriter for &mut F {
    fn write_frame(&mut self, frame: &Frame, rewind: usize) -> io::Result<()> {
        (**self).write_frame(frame, rewind)
    }

    fn write_blank_line(&mut self) -> io::Result<()> {
        (**self).write_blank_line()
    }
}

/// Writes frames as plain lines, using "cursor previous line" to redraw in place.
#[derive(Debug)]
pub struct TerminalWriter<W: Write> {
    out: W,
}

impl TerminalWriter<Stderr> {
    /// A writer on the process's diagnostic stream.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying output.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the writer, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameWriter for TerminalWriter<W> {
    fn write_frame(&mut self, frame: &Frame, rewind: usize) -> io::Result<()> {
        if rewind > 0 {
            let rewind = u16::try_from(rewind).unwrap_or(u16::MAX);
            queue!(self.out, MoveToPreviousLine(rewind))?;
        }
        for line in &frame.lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    fn write_blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    Frame { rewind: usize, frame: Frame },
    BlankLine,
}

/// Records every write in memory.
#[derive(Debug, Default)]
pub struct CaptureWriter {
    captures: Vec<Capture>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, oldest first.
    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    /// Recorded frames with their rewind counts, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = (usize, &Frame)> {
        self.captures.iter().filter_map(|capture| match capture {
            Capture::Frame { rewind, frame } => Some((*rewind, frame)),
            Capture::BlankLine => None,
        })
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames().last().map(|(_, frame)| frame)
    }

    /// Number of recorded frames.
    pub fn frame_count(&self) -> usize {
        self.frames().count()
    }

    pub fn clear(&mut self) {
        self.captures.clear();
    }
}

impl FrameWriter for CaptureWriter {
    fn write_frame(&mut self, frame: &Frame, rewind: usize) -> io::Result<()> {
        self.captures.push(Capture::Frame {
            rewind,
            frame: frame.clone(),
        });
        Ok(())
    }

    fn write_blank_line(&mut self) -> io::Result<()> {
        self.captures.push(Capture::BlankLine);
        Ok(())
    }
}
