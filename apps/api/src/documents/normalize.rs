/// Cleans extracted text into a stable shape for the parsers.
///
/// - CRLF / CR line endings become LF
/// - non-breaking spaces become plain spaces, zero-width characters are dropped
/// - other control characters (except tab) are dropped
/// - trailing whitespace is trimmed from each line
/// - runs of blank lines collapse to a single blank line
/// - leading and trailing blank lines are removed
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let cleaned: String = unified
        .chars()
        .filter_map(|c| match c {
            '\u{00a0}' | '\u{2007}' | '\u{202f}' => Some(' '),
            '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}' => None,
            '\n' | '\t' => Some(c),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();

    let mut out = String::with_capacity(cleaned.len());
    let mut pending_blank = false;
    for line in cleaned.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        pending_blank = false;
        out.push_str(line);
    }
    out
}
