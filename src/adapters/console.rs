use crate::domain::ports::Console;
use crate::utils::error::{Result, UniversityError};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// `Console` over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl IoConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(UniversityError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = IoConsole::new(Cursor::new("Ann\r\nBob\nCid"), Vec::new());
        assert_eq!(console.read_line("> ").unwrap(), "Ann");
        assert_eq!(console.read_line("> ").unwrap(), "Bob");
        assert_eq!(console.read_line("> ").unwrap(), "Cid");
        assert!(matches!(
            console.read_line("> "),
            Err(UniversityError::InputClosed)
        ));
    }

    #[test]
    fn test_prompt_and_lines_are_written() {
        let mut console = IoConsole::new(Cursor::new("x\n"), Vec::new());
        console.read_line("Enter: ").unwrap();
        console.write_line("done").unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Enter: done\n");
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut console = IoConsole::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.read_line("").unwrap(), "");
    }
}
