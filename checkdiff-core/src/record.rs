//! Line splitting and key/value record parsing.

/// A single `(key, value)` pair borrowed from one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// First field of the line.
    pub key: &'a str,
    /// Second field of the line.
    pub value: &'a str,
}

/// Splits `text` into lines and drops the final segment.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The segment after the last
/// line ending is discarded even when it is not empty, so `"a,1\nb,2"`
/// yields a single line and `""` yields none.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                lines.push(&text[start..pos]);
                pos += 1;
            }
            b'\r' => {
                lines.push(&text[start..pos]);
                pos += 1;
                if bytes.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
            }
            _ => {
                pos += 1;
                continue;
            }
        }
        start = pos;
    }

    lines
}

/// Parses the first two `delimiter`-separated fields of `line`.
///
/// Fields beyond the second are ignored. Returns `None` when the line has
/// fewer than two fields.
pub fn parse_record(line: &str, delimiter: char) -> Option<Record<'_>> {
    let mut fields = line.split(delimiter);
    let key = fields.next()?;
    let value = fields.next()?;
    Some(Record { key, value })
}
