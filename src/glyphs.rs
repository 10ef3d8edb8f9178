/// Drawing characters used by the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub zipper: &'static str,
    pub primer: &'static str,
    pub arrow: &'static str,
    pub lead_in: &'static str,
}

/// Which glyph set to draw with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphSet {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain ASCII, for terminals without box-drawing support
    Ascii,
}

impl GlyphSet {
    pub fn glyphs(self) -> Glyphs {
        match self {
            GlyphSet::Unicode => fancy(),
            GlyphSet::Ascii => ascii(),
        }
    }
}

pub fn select(fancy_requested: bool) -> GlyphSet {
    if fancy_requested {
        GlyphSet::Unicode
    } else {
        GlyphSet::Ascii
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        zipper: "|",
        primer: "=",
        arrow: "===>",
        lead_in: "--",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        zipper: "┬",
        primer: "┴",
        arrow: "===>",
        lead_in: "--",
    }
}
