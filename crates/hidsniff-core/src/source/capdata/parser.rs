use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::packet::Packet;
use crate::source::{PacketSource, SourceError};

use super::error::CapdataSourceError;
use super::reader::parse_record;

/// Live capture source: tshark attached to a usbmon interface.
///
/// Spawns `tshark -l -i usbmon<bus> -T fields -e usb.capdata` filtered to
/// device-to-host traffic and yields one packet per stdout line. The child
/// is killed and reaped when the source is dropped.
pub struct TsharkSource {
    child: Child,
    lines: LinesSource<BufReader<ChildStdout>>,
}

impl TsharkSource {
    pub fn spawn(bus: &str) -> Result<Self, SourceError> {
        Self::spawn_with("tshark", bus)
    }

    pub fn spawn_with(tshark: &str, bus: &str) -> Result<Self, SourceError> {
        let interface = format!("usbmon{bus}");
        let mut child = Command::new(tshark)
            .arg("-l")
            .args(["-i", interface.as_str()])
            .args(["-T", "fields", "-e", "usb.capdata"])
            .args(["-Y", r#"usb.dst == "host""#])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| CapdataSourceError::Capture {
                context: "tshark spawn",
                message: err.to_string(),
            })?;
        let stdout = child.stdout.take().ok_or(CapdataSourceError::Capture {
            context: "tshark spawn",
            message: "stdout pipe missing".to_string(),
        })?;
        Ok(TsharkSource {
            child,
            lines: LinesSource::new(BufReader::new(stdout)),
        })
    }
}

impl PacketSource for TsharkSource {
    fn next_packet(&mut self) -> Result<Option<Packet>, SourceError> {
        self.lines.next_packet()
    }
}

impl Drop for TsharkSource {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Replay source: capdata records from any buffered reader.
pub struct LinesSource<R: BufRead> {
    input: R,
    line: String,
}

impl<R: BufRead> LinesSource<R> {
    pub fn new(input: R) -> Self {
        LinesSource {
            input,
            line: String::new(),
        }
    }
}

impl LinesSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(LinesSource::new(BufReader::new(file)))
    }
}

impl<R: BufRead> PacketSource for LinesSource<R> {
    fn next_packet(&mut self) -> Result<Option<Packet>, SourceError> {
        loop {
            self.line.clear();
            let read = self.input.read_line(&mut self.line)?;
            if read == 0 {
                return Ok(None);
            }
            let parsed = parse_record(&self.line)
                .map_err(CapdataSourceError::from)
                .map_err(SourceError::from)?;
            if let Some(packet) = parsed {
                return Ok(Some(packet));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::LinesSource;
    use crate::source::{PacketSource, SourceError};

    #[test]
    fn yields_packets_and_skips_blank_lines() {
        let input = "01:00:04:0b:00:00:00:01:aa\n\n01:00:01:3c:00:00:00:02\n";
        let mut source = LinesSource::new(Cursor::new(input));

        let first = source.next_packet().unwrap().unwrap();
        assert_eq!(first.body, vec![0xaa]);

        let second = source.next_packet().unwrap().unwrap();
        assert_eq!(second.header[2], 0x01);
        assert!(second.body.is_empty());

        assert!(source.next_packet().unwrap().is_none());
    }

    #[test]
    fn eof_is_not_an_error() {
        let mut source = LinesSource::new(Cursor::new(""));
        assert!(source.next_packet().unwrap().is_none());
        assert!(source.next_packet().unwrap().is_none());
    }

    #[test]
    fn malformed_record_is_a_record_error() {
        let mut source = LinesSource::new(Cursor::new("01:xx:04:0b:00:00:00:01\n"));
        let err = source.next_packet().unwrap_err();
        assert!(matches!(err, SourceError::Record(_)));
    }
}
