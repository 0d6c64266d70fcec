use super::FieldMap;
use super::layout;
use crate::packet::HEADER_LEN;

/// Classification outcome deciding which field table applies to body bytes.
///
/// The set of classes is known to be incomplete; headers that match no
/// marker are `Unknown` and their bodies keep the default tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketClass {
    Idle,
    Input,
    Unknown,
}

impl PacketClass {
    pub fn name(self) -> &'static str {
        match self {
            PacketClass::Idle => "idle",
            PacketClass::Input => "input",
            PacketClass::Unknown => "unknown",
        }
    }
}

/// Classify a packet from the two marker bytes at header offsets 2 and 3.
///
/// Pure and total: every header value maps to a class.
pub fn classify(header: &[u8; HEADER_LEN]) -> PacketClass {
    let marker = [
        header[layout::CLASS_RANGE.start],
        header[layout::CLASS_RANGE.start + 1],
    ];
    if marker == layout::IDLE_MARKER {
        PacketClass::Idle
    } else if marker == layout::INPUT_MARKER {
        PacketClass::Input
    } else {
        PacketClass::Unknown
    }
}

/// Field table for a class's body bytes; `Unknown` has none.
pub fn body_fields(class: PacketClass) -> Option<&'static FieldMap> {
    match class {
        PacketClass::Idle => Some(&layout::IDLE_FIELDS),
        PacketClass::Input => Some(&layout::INPUT_FIELDS),
        PacketClass::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{PacketClass, body_fields, classify};

    #[test]
    fn classify_idle() {
        let header = [0x01, 0x00, 0x04, 0x0b, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(classify(&header), PacketClass::Idle);
    }

    #[test]
    fn classify_input() {
        let header = [0x01, 0x00, 0x01, 0x3c, 0x00, 0x00, 0x00, 0x02];
        assert_eq!(classify(&header), PacketClass::Input);
    }

    #[test]
    fn classify_unknown() {
        let header = [0x01, 0x00, 0x99, 0x99, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(classify(&header), PacketClass::Unknown);
        let swapped = [0x01, 0x00, 0x0b, 0x04, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(classify(&swapped), PacketClass::Unknown);
    }

    #[test]
    fn classify_ignores_other_header_bytes() {
        let a = [0x00, 0x00, 0x01, 0x3c, 0x00, 0x00, 0x00, 0x00];
        let b = [0xff, 0xff, 0x01, 0x3c, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(classify(&a), classify(&b));
    }

    #[test]
    fn unknown_has_no_body_fields() {
        assert!(body_fields(PacketClass::Unknown).is_none());
        assert!(body_fields(PacketClass::Idle).is_some());
        assert!(body_fields(PacketClass::Input).is_some());
    }
}
