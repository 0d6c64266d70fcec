use std::io::{self, Write};

use ansi_term::{Colour, Style as AnsiStyle};

use crate::PacketRecord;
use crate::annotate::AnnotatedByte;
use crate::fields::Style;
use crate::fields::classify::PacketClass;

/// Bytes per display group; a separator follows every full group.
pub const GROUP_WIDTH: usize = 4;

/// Sink for annotated packets, one write per packet.
pub trait PacketWriter {
    fn write_packet(
        &mut self,
        class: PacketClass,
        annotated: &[AnnotatedByte],
    ) -> io::Result<()>;
}

/// Writes each byte as a two-hex-digit token, styled per its tag.
///
/// Header and body count as one contiguous stream: a single space follows
/// every 4th byte, and a newline terminates the packet. With `color` off the
/// tokens are written bare, grouping unchanged.
pub struct HexWriter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> HexWriter<W> {
    pub fn new(out: W, color: bool) -> Self {
        HexWriter { out, color }
    }
}

impl<W: Write> PacketWriter for HexWriter<W> {
    fn write_packet(
        &mut self,
        _class: PacketClass,
        annotated: &[AnnotatedByte],
    ) -> io::Result<()> {
        for (n, byte) in annotated.iter().enumerate() {
            let token = format!("{:02x}", byte.value);
            if self.color {
                write!(self.out, "{}", ansi_style(&byte.tag.style).paint(token))?;
            } else {
                self.out.write_all(token.as_bytes())?;
            }
            if (n + 1) % GROUP_WIDTH == 0 {
                self.out.write_all(b" ")?;
            }
        }
        self.out.write_all(b"\n")?;
        // One packet per capture line; keep live output unbuffered.
        self.out.flush()
    }
}

/// Writes one JSON record per packet (tag names only, no styling).
pub struct JsonWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        JsonWriter { out }
    }
}

impl<W: Write> PacketWriter for JsonWriter<W> {
    fn write_packet(
        &mut self,
        class: PacketClass,
        annotated: &[AnnotatedByte],
    ) -> io::Result<()> {
        let record = PacketRecord::new(class, annotated);
        let json = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(self.out, "{json}")?;
        self.out.flush()
    }
}

fn ansi_style(style: &Style) -> AnsiStyle {
    let mut ansi = Colour::Fixed(style.color).normal();
    if let Some(background) = style.on {
        ansi = ansi.on(Colour::Fixed(background));
    }
    if style.underline {
        ansi = ansi.underline();
    }
    if style.standout {
        ansi = ansi.reverse();
    }
    ansi
}

#[cfg(test)]
mod tests {
    use super::{HexWriter, JsonWriter, PacketWriter, ansi_style};
    use crate::annotate::annotate;
    use crate::fields::Style;
    use crate::fields::classify::classify;
    use crate::packet::Packet;

    fn input_packet() -> Packet {
        let mut packet = Packet {
            header: [0x01, 0x00, 0x01, 0x3c, 0x00, 0x00, 0x00, 0x02],
            body: vec![0x00; 56],
        };
        packet.body[0] = 0xff;
        packet
    }

    fn write_hex(packet: &Packet, color: bool) -> String {
        let mut out = Vec::new();
        let mut writer = HexWriter::new(&mut out, color);
        writer
            .write_packet(classify(&packet.header), &annotate(packet))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_output_groups_every_four_bytes() {
        let packet = Packet {
            header: [0x01, 0x00, 0x04, 0x0b, 0x00, 0x00, 0x00, 0x01],
            body: vec![0x00; 4],
        };
        let rendered = write_hex(&packet, false);
        assert_eq!(rendered, "0100040b 00000001 00000000 \n");
    }

    #[test]
    fn plain_output_partial_final_group() {
        let packet = Packet {
            header: [0x01, 0x00, 0x04, 0x0b, 0x00, 0x00, 0x00, 0x01],
            body: vec![0xaa, 0xbb],
        };
        let rendered = write_hex(&packet, false);
        assert_eq!(rendered, "0100040b 00000001 aabb\n");
    }

    #[test]
    fn colored_output_styles_tokens() {
        let rendered = write_hex(&input_packet(), true);
        assert!(rendered.contains('\u{1b}'));
        assert!(rendered.contains("ff"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn ansi_style_maps_all_attributes() {
        let ansi = ansi_style(&Style::fixed(63).on(255).underline().standout());
        let painted = ansi.paint("ff").to_string();
        assert!(painted.contains("38;5;63"));
        assert!(painted.contains("48;5;255"));
        assert!(painted.contains('4'));
        assert!(painted.contains('7'));
    }

    #[test]
    fn json_writer_emits_one_line_per_packet() {
        let packet = input_packet();
        let mut out = Vec::new();
        let mut writer = JsonWriter::new(&mut out);
        writer
            .write_packet(classify(&packet.header), &annotate(&packet))
            .unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(rendered.trim()).unwrap();
        assert_eq!(value["class"], "input");
        assert_eq!(value["bytes"][8]["tag"], "buttons");
    }
}
