//! Field tagging tables.
//!
//! Layered structure:
//! - `layout`: byte ranges, marker bytes, and styles (source of truth)
//! - `classify`: header-driven packet classification
//!
//! Tables are static, constructed once, and read-only. Ranges within one
//! table are sorted by start and never overlap, so a lookup resolves to at
//! most one tag without scan-order tie-breaking.

pub mod classify;
pub mod layout;

/// Display style for a tagged byte: 256-color indices plus emphasis flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color index.
    pub color: u8,
    /// Optional background color index.
    pub on: Option<u8>,
    pub underline: bool,
    /// Standout renders as reverse video.
    pub standout: bool,
}

impl Style {
    pub const fn fixed(color: u8) -> Self {
        Style {
            color,
            on: None,
            underline: false,
            standout: false,
        }
    }

    pub const fn on(mut self, background: u8) -> Self {
        self.on = Some(background);
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn standout(mut self) -> Self {
        self.standout = true;
        self
    }
}

/// Semantic label plus display style for one byte's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag {
    pub name: &'static str,
    pub style: Style,
}

/// One table row: the half-open offset range a tag covers.
#[derive(Debug, Clone)]
pub struct FieldEntry {
    pub range: std::ops::Range<usize>,
    pub tag: FieldTag,
}

/// Immutable offset-to-tag table for one packet class.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    entries: &'static [FieldEntry],
}

impl FieldMap {
    pub const fn new(entries: &'static [FieldEntry]) -> Self {
        FieldMap { entries }
    }

    /// Resolve the tag covering `offset`, if any.
    ///
    /// Entries are sorted by range start, so the candidate is the last entry
    /// starting at or before `offset`; it matches only if its range extends
    /// past the offset. Uncovered offsets return `None` and callers fall
    /// back to the default tag.
    pub fn lookup(&self, offset: usize) -> Option<&'static FieldTag> {
        let idx = self
            .entries
            .partition_point(|entry| entry.range.start <= offset);
        if idx == 0 {
            return None;
        }
        let entry = &self.entries[idx - 1];
        if offset < entry.range.end {
            Some(&entry.tag)
        } else {
            None
        }
    }

    pub fn entries(&self) -> &'static [FieldEntry] {
        self.entries
    }
}
