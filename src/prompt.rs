use std::io::{self, Write};

use crate::app::Verdict;

/// Prompt on stdout and read one line from stdin. Only the line terminator
/// is stripped; the rest of the input is returned verbatim.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// `retry` (or `r`) rejects the displayed candidate, case-insensitively and
/// ignoring surrounding whitespace. Everything else, empty input included,
/// accepts it.
pub fn parse_verdict(input: &str) -> Verdict {
    let token = input.trim();
    if token.eq_ignore_ascii_case("retry") || token.eq_ignore_ascii_case("r") {
        Verdict::Retry
    } else {
        Verdict::Accept
    }
}
