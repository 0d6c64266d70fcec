use super::error::RecordError;
use crate::packet::{HEADER_LEN, Packet};

/// Parse one capdata record line into a packet.
///
/// Tokens are colon-separated with optional surrounding whitespace; the
/// first 8 become the header and the rest the body. Blank lines yield
/// `None` (they carry no packet and are not an error).
///
/// # Errors
/// Returns `RecordError` when a token is not two hex digits or the record
/// holds fewer tokens than the header needs.
pub fn parse_record(line: &str) -> Result<Option<Packet>, RecordError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut bytes = Vec::new();
    for token in line.split(':') {
        bytes.push(parse_byte_token(token.trim())?);
    }
    if bytes.len() < HEADER_LEN {
        return Err(RecordError::TooShort {
            needed: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&bytes[..HEADER_LEN]);
    Ok(Some(Packet {
        header,
        body: bytes[HEADER_LEN..].to_vec(),
    }))
}

/// Decode one two-hex-digit byte token.
pub fn parse_byte_token(token: &str) -> Result<u8, RecordError> {
    if token.len() != 2 {
        return Err(RecordError::InvalidToken {
            token: token.to_string(),
        });
    }
    let decoded = hex::decode(token).map_err(|_| RecordError::InvalidToken {
        token: token.to_string(),
    })?;
    Ok(decoded[0])
}
