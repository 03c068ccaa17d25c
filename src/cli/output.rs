//! Output handling for CLI commands

use std::io::{self, IsTerminal, Write};

use super::config::ColorChoice;

/// Output helper: decides styling once and writes rendered lines
pub struct Output {
    color: bool,
}

impl Output {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Resolves the color choice against whether stdout is a terminal
    pub fn detect(choice: ColorChoice) -> Self {
        Self::new(choice.enabled(io::stdout().is_terminal()))
    }

    /// Returns true if output should be styled
    pub fn is_color(&self) -> bool {
        self.color
    }

    /// Writes all lines to stdout in one go
    pub fn lines(&self, lines: &[String]) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_lines(&mut stdout.lock(), lines)
    }

    /// Writes all lines to `writer`, flushing at the end
    pub fn write_lines(&self, writer: &mut impl Write, lines: &[String]) -> io::Result<()> {
        let mut buffer = String::new();
        for line in lines {
            buffer.push_str(line);
            buffer.push('\n');
        }
        writer.write_all(buffer.as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_entry() {
        let output = Output::new(false);
        let mut sink = Vec::new();

        output
            .write_lines(&mut sink, &["└── 1 a".to_string(), "    └── 2 b".to_string()])
            .unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), "└── 1 a\n    └── 2 b\n");
    }

    #[test]
    fn no_lines_writes_nothing() {
        let mut sink = Vec::new();
        Output::new(false).write_lines(&mut sink, &[]).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn forced_choices_ignore_terminal() {
        assert!(Output::detect(ColorChoice::Always).is_color());
        assert!(!Output::detect(ColorChoice::Never).is_color());
    }
}
