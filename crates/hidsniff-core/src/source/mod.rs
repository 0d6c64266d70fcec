mod capdata;

pub use capdata::{LinesSource, TsharkSource};

use thiserror::Error;

use crate::packet::Packet;

pub trait PacketSource {
    fn next_packet(&mut self) -> Result<Option<Packet>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("capture error: {0}")]
    Capture(String),
    #[error("record error: {0}")]
    Record(String),
}

impl From<capdata::error::CapdataSourceError> for SourceError {
    fn from(value: capdata::error::CapdataSourceError) -> Self {
        match value {
            capdata::error::CapdataSourceError::Io(err) => SourceError::Io(err),
            capdata::error::CapdataSourceError::Capture { context, message } => {
                SourceError::Capture(format!("{context}: {message}"))
            }
            capdata::error::CapdataSourceError::Record(err) => {
                SourceError::Record(err.to_string())
            }
        }
    }
}
