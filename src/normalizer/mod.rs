
/// A logical source line: one or more physical lines joined via `...`
/// continuation markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Reconstructed text, continuation markers removed.
    pub text: String,
    /// 1-based number of the first physical line.
    pub number: usize,
}

impl LogicalLine {
    /// True when the line contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// True when the first non-whitespace character is `%`.
    pub fn is_comment(&self) -> bool {
        self.text.trim_start().starts_with('%')
    }
}

/// Continuation marker ending a physical code line.
const CONTINUATION: &str = "...";

/// Reconstruct logical lines from raw source text.
///
/// A physical line whose trailing-whitespace-trimmed form ends with `...`
/// is a continuation: the marker is removed and the next physical line is
/// appended as-is, repeating until a line does not end with the marker.
/// Comment lines never join (a trailing `...` inside a comment is ordinary
/// text) and blank lines are kept as empty logical lines. Each logical
/// line carries the 1-based number of its first physical line.
pub fn normalize_lines(source: &str) -> Vec<LogicalLine> {
    let physical: Vec<&str> = source.lines().collect();
    let mut logical = Vec::with_capacity(physical.len());
    let mut i = 0;

    while i < physical.len() {
        let number = i + 1;
        let first = physical[i];

        let head = first.trim_start();
        if head.is_empty() || head.starts_with('%') {
            logical.push(LogicalLine {
                text: first.to_string(),
                number,
            });
            i += 1;
            continue;
        }

        let mut text = first.to_string();
        loop {
            let trimmed_len = text.trim_end().len();
            if !text[..trimmed_len].ends_with(CONTINUATION) {
                break;
            }
            text.truncate(trimmed_len - CONTINUATION.len());
            i += 1;
            match physical.get(i) {
                Some(next) => text.push_str(next),
                // Unterminated continuation at EOF: keep what we have
                // as ordinary code.
                None => break,
            }
        }

        logical.push(LogicalLine { text, number });
        i += 1;
    }

    logical
}
