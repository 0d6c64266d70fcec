use thiserror::Error;

use crate::fields::FieldTag;
use crate::fields::classify::{body_fields, classify};
use crate::fields::layout::{DEFAULT_TAG, HEADER_FIELDS};
use crate::packet::{HEADER_LEN, Packet};
use crate::render::PacketWriter;
use crate::source::{PacketSource, SourceError};

/// One byte paired with the tag covering its offset.
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedByte {
    pub value: u8,
    pub tag: &'static FieldTag,
}

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Tag every byte of a packet, in offset order.
///
/// Header offsets resolve through the header table; body offsets resolve
/// through the table for the packet's class, counting absolute offsets from
/// the packet start. Uncovered offsets and unknown-class bodies receive the
/// default tag, so the output always holds one entry per input byte.
pub fn annotate(packet: &Packet) -> Vec<AnnotatedByte> {
    let mut annotated = Vec::with_capacity(HEADER_LEN + packet.body.len());

    for (offset, &value) in packet.header.iter().enumerate() {
        let tag = HEADER_FIELDS.lookup(offset).unwrap_or(&DEFAULT_TAG);
        annotated.push(AnnotatedByte { value, tag });
    }

    let fields = body_fields(classify(&packet.header));
    for (n, &value) in packet.body.iter().enumerate() {
        let tag = fields
            .and_then(|map| map.lookup(HEADER_LEN + n))
            .unwrap_or(&DEFAULT_TAG);
        annotated.push(AnnotatedByte { value, tag });
    }

    annotated
}

/// Pull packets from `source` until it ends, writing each annotation.
pub fn annotate_stream<S, W>(source: &mut S, writer: &mut W) -> Result<(), AnnotateError>
where
    S: PacketSource,
    W: PacketWriter,
{
    while let Some(packet) = source.next_packet()? {
        let annotated = annotate(&packet);
        writer.write_packet(classify(&packet.header), &annotated)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::annotate;
    use crate::packet::Packet;

    fn idle_packet(body_len: usize) -> Packet {
        Packet {
            header: [0x01, 0x00, 0x04, 0x0b, 0x00, 0x00, 0x00, 0x01],
            body: vec![0x00; body_len],
        }
    }

    #[test]
    fn one_tag_per_byte_in_offset_order() {
        let packet = idle_packet(56);
        let annotated = annotate(&packet);
        assert_eq!(annotated.len(), 64);
        for (offset, byte) in annotated.iter().enumerate() {
            let expected = if offset < 8 {
                packet.header[offset]
            } else {
                packet.body[offset - 8]
            };
            assert_eq!(byte.value, expected, "offset {offset}");
        }
    }

    #[test]
    fn idle_body_tags() {
        let annotated = annotate(&idle_packet(56));
        for offset in 8..12 {
            assert_eq!(annotated[offset].tag.name, "idle-reserved", "{offset}");
        }
        for offset in 12..16 {
            assert_eq!(annotated[offset].tag.name, "unclassified", "{offset}");
        }
        for offset in 16..64 {
            assert_eq!(annotated[offset].tag.name, "idle-reserved", "{offset}");
        }
    }

    #[test]
    fn input_buttons_byte() {
        let mut packet = Packet {
            header: [0x01, 0x00, 0x01, 0x3c, 0x00, 0x00, 0x00, 0x02],
            body: vec![0x00; 56],
        };
        packet.body[0] = 0xff;
        let annotated = annotate(&packet);
        assert_eq!(annotated[8].value, 0xff);
        assert_eq!(annotated[8].tag.name, "buttons");
        assert_eq!(annotated[8].tag.style.color, 3);
    }

    #[test]
    fn unknown_body_is_all_default() {
        let packet = Packet {
            header: [0x01, 0x00, 0x99, 0x99, 0x00, 0x00, 0x00, 0x00],
            body: vec![0xaa; 16],
        };
        let annotated = annotate(&packet);
        assert_eq!(annotated[0].tag.name, "version");
        assert_eq!(annotated[2].tag.name, "status");
        assert_eq!(annotated[4].tag.name, "sequence");
        for byte in &annotated[8..] {
            assert_eq!(byte.tag.name, "unclassified");
        }
    }

    #[test]
    fn empty_body_annotates_header_only() {
        let annotated = annotate(&idle_packet(0));
        assert_eq!(annotated.len(), 8);
    }

    #[test]
    fn body_longer_than_mapped_ranges_falls_through() {
        let annotated = annotate(&idle_packet(70));
        assert_eq!(annotated.len(), 78);
        for byte in &annotated[64..] {
            assert_eq!(byte.tag.name, "unclassified");
        }
    }
}
