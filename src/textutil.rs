//! Small whitespace helpers shared by the parser, converter and renderer.

/// Collapse every run of whitespace into one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop control characters (C0, DEL and C1) except `\n` and `\t`.
///
/// Remote text must not carry its own terminal escape sequences; only the
/// renderer emits those.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect()
}

/// Collapse runs of consecutive blank lines down to a single blank line.
///
/// Lines containing only whitespace count as blank and are emitted empty.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut previous_blank = false;
    for line in text.split('\n') {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push(if blank { "" } else { line });
        previous_blank = blank;
    }
    out.join("\n")
}
