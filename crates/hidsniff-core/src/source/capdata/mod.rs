//! Capdata record sources.
//!
//! This module provides `PacketSource` implementations over the text record
//! format produced by `tshark -T fields -e usb.capdata`: one line per
//! packet, colon-separated two-hex-digit byte tokens. `TsharkSource` drives
//! a live tshark child process on a usbmon interface; `LinesSource` replays
//! the same records from any buffered reader.

pub mod error;
pub mod parser;
pub mod reader;

pub use parser::{LinesSource, TsharkSource};
