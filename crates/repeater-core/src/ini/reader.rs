//! Streaming `key=value` reader.
//!
//! Per physical line (split on `\n`):
//! ```text
//! trim → empty or starts with ';' / '#'  → skip
//!      → no '=' or '=' at index 0        → skip
//!      → key = trim(before '='), value = trim(after first '=')
//! ```
//! Malformed lines are dropped silently; only an I/O failure of the
//! underlying stream is reported.

use std::io::{self, BufRead};

use tracing::debug;

/// One `key=value` pair read from a settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniEntry {
    pub key: String,
    pub value: String,
    /// 1-based physical line number, for diagnostics.
    pub line: usize,
}

impl IniEntry {
    /// Splits one physical line into an entry, or `None` if the line is
    /// blank, a comment, or has no key.
    pub fn from_line(raw: &str, line: usize) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            return None;
        }
        match trimmed.find('=') {
            Some(pos) if pos > 0 => Some(Self {
                key: trimmed[..pos].trim().to_string(),
                value: trimmed[pos + 1..].trim().to_string(),
                line,
            }),
            _ => {
                debug!(line, "skipping line without key: {trimmed:?}");
                None
            }
        }
    }
}

/// Lazy, single-pass iterator over the entries of a settings stream.
///
/// Yields `Err` once if the underlying reader fails, then ends.  Bytes that
/// are not valid UTF-8 are replaced rather than treated as errors.
///
/// ```rust
/// use repeater_core::IniReader;
///
/// let input = "; comment\nCallsign = W1AW\n";
/// let pairs: Vec<_> = IniReader::new(input.as_bytes())
///     .map(|e| e.map(|e| (e.key, e.value)))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(pairs, vec![("Callsign".to_string(), "W1AW".to_string())]);
/// ```
pub struct IniReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl<R: BufRead> IniReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            done: false,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for IniReader<R> {
    type Item = io::Result<IniEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line += 1;
                    let text = String::from_utf8_lossy(&self.buf);
                    if let Some(entry) = IniEntry::from_line(&text, self.line) {
                        return Some(Ok(entry));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Parses an in-memory settings text.
pub fn parse_str(input: &str) -> Vec<IniEntry> {
    input
        .split('\n')
        .enumerate()
        .filter_map(|(i, line)| IniEntry::from_line(line, i + 1))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<R: BufRead>(reader: IniReader<R>) -> Vec<(String, String)> {
        reader
            .map(|e| e.expect("read must succeed"))
            .map(|e| (e.key, e.value))
            .collect()
    }

    fn owned(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_skips_comments_blank_lines_and_empty_keys() {
        // Arrange
        let input = "; comment\n\nfoo = bar \n=nope\nbaz=1\n";

        // Act
        let result = pairs(IniReader::new(input.as_bytes()));

        // Assert
        assert_eq!(result, owned(&[("foo", "bar"), ("baz", "1")]));
    }

    #[test]
    fn test_hash_comments_are_skipped() {
        let input = "# Debug Settings\n   # indented\nDebugMain=1\n";
        assert_eq!(
            pairs(IniReader::new(input.as_bytes())),
            owned(&[("DebugMain", "1")])
        );
    }

    #[test]
    fn test_line_without_separator_is_dropped() {
        let input = "[General]\njust text\nk=v";
        assert_eq!(pairs(IniReader::new(input.as_bytes())), owned(&[("k", "v")]));
    }

    #[test]
    fn test_missing_trailing_newline_is_tolerated() {
        let input = "a=1\nb=2";
        assert_eq!(
            pairs(IniReader::new(input.as_bytes())),
            owned(&[("a", "1"), ("b", "2")])
        );
    }

    #[test]
    fn test_crlf_line_endings_are_trimmed() {
        let input = "a=1\r\n\r\n# c\r\nb = two words \r\n";
        assert_eq!(
            pairs(IniReader::new(input.as_bytes())),
            owned(&[("a", "1"), ("b", "two words")])
        );
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let input = "TailInfo=a=b\n";
        assert_eq!(
            pairs(IniReader::new(input.as_bytes())),
            owned(&[("TailInfo", "a=b")])
        );
    }

    #[test]
    fn test_empty_value_is_yielded() {
        let input = "Callsign=\n";
        assert_eq!(
            pairs(IniReader::new(input.as_bytes())),
            owned(&[("Callsign", "")])
        );
    }

    #[test]
    fn test_whitespace_before_equals_is_not_an_empty_key() {
        // '=' sits at index 2 of the trimmed line "a =1", so this is a pair.
        let input = "  a =1\n";
        assert_eq!(pairs(IniReader::new(input.as_bytes())), owned(&[("a", "1")]));
    }

    #[test]
    fn test_entries_carry_physical_line_numbers() {
        // Arrange
        let input = "; header\n\nfirst=1\nsecond=2\n";

        // Act
        let lines: Vec<usize> = IniReader::new(input.as_bytes())
            .map(|e| e.unwrap().line)
            .collect();

        // Assert
        assert_eq!(lines, vec![3, 4]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let input: &[u8] = b"name=\xffabc\nnext=1\n";
        let result = pairs(IniReader::new(input));
        assert_eq!(result.len(), 2);
        assert_eq!(result[1], ("next".to_string(), "1".to_string()));
    }

    #[test]
    fn test_reader_consumes_whole_stream() {
        let input = "a=1\n\n; end\n";
        let mut reader = IniReader::new(input.as_bytes());
        assert!(reader.next().is_some());
        assert!(reader.next().is_none());
        assert_eq!(reader.lines_read(), 3);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_read_error_is_yielded_once_then_iteration_ends() {
        // Arrange
        struct FailingReader;
        impl io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "flash read failed"))
            }
        }
        let mut reader = IniReader::new(io::BufReader::new(FailingReader));

        // Act / Assert
        assert!(matches!(reader.next(), Some(Err(_))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_parse_str_matches_streaming_reader() {
        let input = "; c\nfoo = bar \n=nope\nbaz=1";
        let from_str: Vec<_> = parse_str(input);
        let streamed: Vec<_> = IniReader::new(input.as_bytes())
            .map(|e| e.unwrap())
            .collect();
        assert_eq!(from_str, streamed);
    }
}
