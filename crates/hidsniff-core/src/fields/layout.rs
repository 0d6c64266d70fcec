use super::{FieldEntry, FieldMap, FieldTag, Style};

pub const CLASS_RANGE: std::ops::Range<usize> = 2..4;

pub const IDLE_MARKER: [u8; 2] = [0x04, 0x0b];
pub const INPUT_MARKER: [u8; 2] = [0x01, 0x3c];

/// Fallback for any offset no active table covers.
pub static DEFAULT_TAG: FieldTag = FieldTag {
    name: "unclassified",
    style: Style::fixed(237),
};

static HEADER_ENTRIES: [FieldEntry; 3] = [
    FieldEntry {
        range: 0..2,
        tag: FieldTag {
            name: "version",
            style: Style::fixed(255).standout(),
        },
    },
    FieldEntry {
        range: 2..4,
        tag: FieldTag {
            name: "status",
            style: Style::fixed(255).underline(),
        },
    },
    FieldEntry {
        range: 4..8,
        tag: FieldTag {
            name: "sequence",
            style: Style::fixed(255),
        },
    },
];

static IDLE_ENTRIES: [FieldEntry; 2] = [
    FieldEntry {
        range: 8..12,
        tag: FieldTag {
            name: "idle-reserved",
            style: Style::fixed(233),
        },
    },
    FieldEntry {
        range: 16..64,
        tag: FieldTag {
            name: "idle-reserved",
            style: Style::fixed(233),
        },
    },
];

static INPUT_ENTRIES: [FieldEntry; 17] = [
    FieldEntry {
        range: 8..11,
        tag: FieldTag {
            name: "buttons",
            style: Style::fixed(3),
        },
    },
    FieldEntry {
        range: 11..12,
        tag: FieldTag {
            name: "trigger-left-digital",
            style: Style::fixed(63).on(255).underline().standout(),
        },
    },
    FieldEntry {
        range: 12..13,
        tag: FieldTag {
            name: "trigger-right-digital",
            style: Style::fixed(63).on(255).standout(),
        },
    },
    FieldEntry {
        range: 13..16,
        tag: FieldTag {
            name: "padding",
            style: Style::fixed(233),
        },
    },
    FieldEntry {
        range: 16..18,
        tag: FieldTag {
            name: "pad-left-x",
            style: Style::fixed(27).on(255).underline().standout(),
        },
    },
    FieldEntry {
        range: 18..20,
        tag: FieldTag {
            name: "pad-left-y",
            style: Style::fixed(27).underline(),
        },
    },
    FieldEntry {
        range: 20..22,
        tag: FieldTag {
            name: "pad-right-x",
            style: Style::fixed(36).on(255).standout(),
        },
    },
    FieldEntry {
        range: 22..24,
        tag: FieldTag {
            name: "pad-right-y",
            style: Style::fixed(36),
        },
    },
    FieldEntry {
        range: 24..26,
        tag: FieldTag {
            name: "trigger-left-analog",
            style: Style::fixed(63).underline(),
        },
    },
    FieldEntry {
        range: 26..28,
        tag: FieldTag {
            name: "trigger-right-analog",
            style: Style::fixed(63),
        },
    },
    FieldEntry {
        range: 28..30,
        tag: FieldTag {
            name: "orient-roll-1",
            style: Style::fixed(124),
        },
    },
    FieldEntry {
        range: 30..32,
        tag: FieldTag {
            name: "orient-yaw-1",
            style: Style::fixed(160),
        },
    },
    FieldEntry {
        range: 32..34,
        tag: FieldTag {
            name: "orient-pitch-1",
            style: Style::fixed(196),
        },
    },
    FieldEntry {
        range: 34..36,
        tag: FieldTag {
            name: "orient-roll-2",
            style: Style::fixed(57),
        },
    },
    FieldEntry {
        range: 36..38,
        tag: FieldTag {
            name: "orient-yaw-2",
            style: Style::fixed(93),
        },
    },
    FieldEntry {
        range: 38..40,
        tag: FieldTag {
            name: "orient-pitch-2",
            style: Style::fixed(129),
        },
    },
    FieldEntry {
        range: 48..64,
        tag: FieldTag {
            name: "reserved",
            style: Style::fixed(233),
        },
    },
];

/// Applied to header offsets 0..8 for every packet class.
pub static HEADER_FIELDS: FieldMap = FieldMap::new(&HEADER_ENTRIES);
/// Applied to body offsets of packets classified idle.
pub static IDLE_FIELDS: FieldMap = FieldMap::new(&IDLE_ENTRIES);
/// Applied to body offsets of packets classified input.
pub static INPUT_FIELDS: FieldMap = FieldMap::new(&INPUT_ENTRIES);
