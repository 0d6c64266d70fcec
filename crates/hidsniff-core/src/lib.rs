//! Core library for annotating USB HID capture streams.
//!
//! This crate implements the pipeline used by the CLI: capture sources yield
//! one packet per capdata record, the annotation engine assigns a field tag
//! to every byte via static per-class layout tables, and the render layer
//! writes styled hex tokens or JSON records. Annotation is byte-oriented and
//! side-effect free; all I/O is isolated in `source` modules and the packet
//! writers. Layout conventions (offsets, marker bytes, styles) live in the
//! `fields::layout` module so the engine stays minimal.
//!
//! Invariants:
//! - Ranges within one field table never overlap and are sorted by start.
//! - Annotation emits exactly one tag per input byte, in offset order.
//! - Classification is total: unrecognized headers degrade to default tags,
//!   never to errors.
//!
//! # Examples
//! ```
//! use hidsniff_core::{Packet, annotate};
//!
//! let packet = Packet {
//!     header: [0x01, 0x00, 0x01, 0x3c, 0x00, 0x00, 0x00, 0x02],
//!     body: vec![0xff; 56],
//! };
//! let annotated = annotate(&packet);
//! assert_eq!(annotated.len(), 64);
//! assert_eq!(annotated[8].tag.name, "buttons");
//! ```

use serde::Serialize;

mod annotate;
mod fields;
mod packet;
mod render;
mod source;

pub use annotate::{AnnotateError, AnnotatedByte, annotate, annotate_stream};
pub use fields::classify::{PacketClass, classify};
pub use fields::{FieldTag, Style};
pub use packet::{HEADER_LEN, Packet};
pub use render::{GROUP_WIDTH, HexWriter, JsonWriter, PacketWriter};
pub use source::{LinesSource, PacketSource, SourceError, TsharkSource};

/// One annotated packet in serializable form, one record per capture line.
///
/// # Examples
/// ```
/// use hidsniff_core::{Packet, PacketRecord, annotate, classify};
///
/// let packet = Packet {
///     header: [0x01, 0x00, 0x04, 0x0b, 0x00, 0x00, 0x00, 0x01],
///     body: vec![0x00; 4],
/// };
/// let record = PacketRecord::new(classify(&packet.header), &annotate(&packet));
/// assert_eq!(record.class, "idle");
/// assert_eq!(record.bytes.len(), 12);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PacketRecord {
    /// Packet class name ("idle", "input", "unknown").
    pub class: &'static str,
    /// Per-byte entries in offset order.
    pub bytes: Vec<ByteRecord>,
}

/// One byte of an annotated packet: its hex token and field tag.
///
/// # Examples
/// ```
/// use hidsniff_core::ByteRecord;
///
/// let byte = ByteRecord {
///     value: "ff".to_string(),
///     tag: "buttons",
/// };
/// assert_eq!(byte.value, "ff");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ByteRecord {
    /// Byte value as a two-hex-digit token, as transported on the wire.
    pub value: String,
    /// Semantic tag name for this offset.
    pub tag: &'static str,
}

impl PacketRecord {
    /// Build a record from a classified packet's annotated bytes.
    pub fn new(class: PacketClass, annotated: &[AnnotatedByte]) -> Self {
        PacketRecord {
            class: class.name(),
            bytes: annotated
                .iter()
                .map(|byte| ByteRecord {
                    value: format!("{:02x}", byte.value),
                    tag: byte.tag.name,
                })
                .collect(),
        }
    }
}
