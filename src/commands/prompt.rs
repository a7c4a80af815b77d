use std::io::{self, BufRead, Stdin, StdinLock};

/// Abstraction over the source of interactive answers.
pub trait Prompt {
    /// Read one answer without its line terminator; `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>>;
}

/// Prompt that reads answers line by line from any buffered reader.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LinePrompt<StdinLock<'static>> {
    /// Prompt bound to the process stdin.
    pub fn stdin() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock())
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
