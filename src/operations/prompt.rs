//! Interactive prompting for placeholder values

use crate::template::Prompter;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads placeholder values line by line
///
/// Blocks until a full line is available; there is no timeout.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompt on stdout and read from stdin
    #[must_use]
    #[inline]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    #[inline]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    #[inline]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn prompt(&mut self, name: &str) -> io::Result<String> {
        write!(self.output, "Enter value for '{name}': ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed while waiting for a value for '{name}'"),
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompts_and_strips_line_ending() {
        let mut prompter = TerminalPrompter::new(Cursor::new("Ana\r\n  spaced  \n"), Vec::new());

        assert_eq!(prompter.prompt("name").unwrap(), "Ana");
        assert_eq!(prompter.prompt("title").unwrap(), "  spaced  ");

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(
            shown,
            "Enter value for 'name': Enter value for 'title': "
        );
    }

    #[test]
    fn test_empty_line_is_a_value() {
        let mut prompter = TerminalPrompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.prompt("x").unwrap(), "");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompter = TerminalPrompter::new(Cursor::new("tail"), Vec::new());
        assert_eq!(prompter.prompt("x").unwrap(), "tail");
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut prompter = TerminalPrompter::new(Cursor::new(""), Vec::new());
        let err = prompter.prompt("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
