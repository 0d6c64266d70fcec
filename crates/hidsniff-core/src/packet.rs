/// Fixed header length shared by every packet class.
pub const HEADER_LEN: usize = 8;

/// One capture record: a fixed-length header and a variable-length body.
///
/// Byte offsets are absolute from the start of the header; the body begins
/// at offset [`HEADER_LEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: [u8; HEADER_LEN],
    pub body: Vec<u8>,
}
