//! Operator console
//!
//! Thin wrapper over a line-based reader and a writer so every interactive
//! operation can be driven by scripted input in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented operator console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin / stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label`, then read one line and return it trimmed
    ///
    /// End of input reads as an empty line, which every prompt treats as
    /// "finish" / "cancel".
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("End of console input");
        }
        Ok(line.trim().to_string())
    }

    /// Print a line
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Print pre-rendered text as-is
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_input() {
        let mut console = Console::new(Cursor::new("  a1 \n"), Vec::new());
        let answer = console.prompt("ID: ").unwrap();
        assert_eq!(answer, "a1");
        assert_eq!(console.into_output(), b"ID: ");
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), "");
        assert_eq!(console.prompt("> ").unwrap(), "");
    }

    #[test]
    fn test_say_and_print() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        console.print("raw\n").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "hello\nraw\n");
    }
}
