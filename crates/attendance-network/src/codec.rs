//! Line framing for query requests.
//!
//! [`RequestCodec`] wraps [`LinesCodec`] and reports the two kinds of bad
//! input a client can send, an oversized line and a line that is not UTF-8,
//! as frames instead of decode errors. `Framed` stops decoding buffered bytes
//! after a decode error, so surfacing them as errors would stall any request
//! already queued behind the bad line.
//!
//! ```text
//! TCP Stream -> RequestCodec -> RequestLine::{Line, TooLong, NotUtf8}
//! String     -> RequestCodec -> TCP Stream (newline terminated)
//! ```

use bytes::BytesMut;
use std::io;
use tokio_util::codec::{Decoder, Encoder, LinesCodec, LinesCodecError};

/// One decoded request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestLine {
    /// A complete line, without its terminator
    Line(String),

    /// Line exceeded the maximum length; its bytes are discarded
    TooLong,

    /// Line was not valid UTF-8; its bytes are discarded
    NotUtf8,
}

/// Newline-delimited codec that never fails on caller input
#[derive(Debug, Clone)]
pub struct RequestCodec {
    lines: LinesCodec,
}

impl RequestCodec {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_line_length),
        }
    }
}

fn classify(
    decoded: Result<Option<String>, LinesCodecError>,
) -> Result<Option<RequestLine>, LinesCodecError> {
    match decoded {
        Ok(line) => Ok(line.map(RequestLine::Line)),
        Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(RequestLine::TooLong)),
        Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
            Ok(Some(RequestLine::NotUtf8))
        }
        Err(e) => Err(e),
    }
}

impl Decoder for RequestCodec {
    type Item = RequestLine;
    type Error = LinesCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<RequestLine>, LinesCodecError> {
        classify(self.lines.decode(src))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<RequestLine>, LinesCodecError> {
        classify(self.lines.decode_eof(src))
    }
}

impl Encoder<String> for RequestCodec {
    type Error = LinesCodecError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), LinesCodecError> {
        self.lines.encode(line, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(codec: &mut RequestCodec, input: &[u8]) -> Vec<RequestLine> {
        let mut buf = BytesMut::from(input);
        let mut out = Vec::new();
        while let Some(line) = codec.decode(&mut buf).unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn test_decode_lines() {
        let mut codec = RequestCodec::new(64);
        let lines = decode_all(&mut codec, b"first\r\nsecond\npartial");
        assert_eq!(
            lines,
            vec![
                RequestLine::Line("first".to_string()),
                RequestLine::Line("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_utf8_line_does_not_stall_next_line() {
        let mut codec = RequestCodec::new(64);
        let lines = decode_all(&mut codec, b"bad \xff\xfe\nstudent S1\n");
        assert_eq!(
            lines,
            vec![
                RequestLine::NotUtf8,
                RequestLine::Line("student S1".to_string()),
            ]
        );
    }

    #[test]
    fn test_oversized_line_is_skipped() {
        let mut codec = RequestCodec::new(8);
        let mut input = vec![b'x'; 20];
        input.extend_from_slice(b"\nshort\n");

        let lines = decode_all(&mut codec, &input);
        assert_eq!(
            lines,
            vec![RequestLine::TooLong, RequestLine::Line("short".to_string())]
        );
    }

    #[test]
    fn test_decode_eof_returns_unterminated_line() {
        let mut codec = RequestCodec::new(64);
        let mut buf = BytesMut::from(&b"person S101"[..]);
        assert_eq!(
            codec.decode_eof(&mut buf).unwrap(),
            Some(RequestLine::Line("person S101".to_string()))
        );
        assert_eq!(codec.decode_eof(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_encode_appends_newline() {
        let mut codec = RequestCodec::new(64);
        let mut buf = BytesMut::new();
        codec.encode("{}".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"{}\n");
    }
}
