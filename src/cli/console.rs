//! Line-oriented prompts over any reader/writer pair.
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line-based input and output used by commands and the interactive shell.
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console bound to the process's stdin and stdout.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read one line without its line terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write(text)?;
        self.read_line()
    }

    /// Ask until the answer is `y` or `n` (any case); `None` at end of input.
    pub fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match answer.trim() {
                "y" | "Y" => return Ok(Some(true)),
                "n" | "N" => return Ok(Some(false)),
                _ => continue,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
