//! Terminal rendering of a raw unified diff.
//!
//! Only the basic ANSI palette is used. Whether escapes are emitted at all is
//! decided by `colored` (see [`ColorChoice`](crate::ColorChoice)).

use colored::Colorize;

/// Color `+` lines green and `-` lines red; leave everything else as-is.
///
/// Lines may end in `\n` or `\r\n`; every output line ends in `\n`.
pub fn colorize(raw_diff: &str) -> String {
    if raw_diff.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(raw_diff.len() + raw_diff.len() / 4);
    for line in raw_diff.lines() {
        if line.starts_with('+') {
            out.push_str(&line.green().to_string());
        } else if line.starts_with('-') {
            out.push_str(&line.red().to_string());
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
