//! Strand data for the progress bar.
//!
//! This module contains everything about the two sequences the bar draws:
//! - Normalization of the caller's sequence (default fallback, uppercase)
//! - The base-pairing table used to build the complement
//! - Padding/truncation to the negotiated width
//!
//! Strands are stored as `Vec<char>` so that slicing by fill position is
//! always done on character boundaries, whatever the caller passed in.

/// First 21 nt of DNA polymerase I (NCBI: NG_016798.2).
pub const DEFAULT_SEQUENCE: &str = "GCCAGTTTTGGGCTGGTTGGC";

/// Character used to pad strands shorter than the bar width.
pub const PAD_CHAR: char = '-';

/// Returns the base paired with `base`.
///
/// A↔T, G↔C, the strand-end digits 5↔3, gap stays gap.
/// Anything else pairs with 'N'.
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        '5' => '3',
        '3' => '5',
        '-' => '-',
        _ => 'N',
    }
}

/// A strand of the double helix, one entry per drawn cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    bases: Vec<char>,
}

impl Strand {
    /// Builds the template strand from caller input.
    ///
    /// An empty or all-whitespace sequence is replaced by [`DEFAULT_SEQUENCE`].
    /// The result is uppercase.
    pub fn template(sequence: &str) -> Self {
        let sequence = if sequence.trim().is_empty() {
            DEFAULT_SEQUENCE
        } else {
            sequence
        };
        Self {
            bases: sequence.to_uppercase().chars().collect(),
        }
    }

    /// Returns the base-paired strand, cell for cell.
    pub fn complement(&self) -> Self {
        Self {
            bases: self.bases.iter().copied().map(complement_base).collect(),
        }
    }

    /// Pads with [`PAD_CHAR`] or truncates so the strand is exactly `width` long.
    pub fn fit_to(&mut self, width: usize) {
        self.bases.resize(width, PAD_CHAR);
    }

    /// Returns the length of the strand in cells.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Returns true if the strand has no cells.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Returns the first `count` cells as a string.
    ///
    /// `count` past the end yields the whole strand.
    pub fn prefix(&self, count: usize) -> String {
        self.bases[..count.min(self.bases.len())].iter().collect()
    }

    /// Returns the whole strand as a string.
    pub fn as_string(&self) -> String {
        self.bases.iter().collect()
    }
}
