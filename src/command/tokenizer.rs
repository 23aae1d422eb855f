//! Split an interactive command line into the argv-style tokens the CLI parser expects.
//!
//! A line is an optional command word followed by parameter groups:
//! `-x` or `--name`, optionally followed by an argument that is either a
//! double-quoted string, a single-quoted string, or a run of non-whitespace.
//! Quotes around an argument are removed; nothing is unescaped.

/// Tokenize one line of input. Blank input yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    Scanner::new(line).run()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<String>,
}

impl Scanner {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<String> {
        while let Some(c) = self.peek(0) {
            if c.is_whitespace() {
                self.pos += 1;
            } else if let Some(dashes) = self.parameter_prefix() {
                self.parameter(dashes);
            } else if is_word_char(c) {
                let word = self.take_while(is_word_char);
                self.emit(word);
            } else {
                // Not part of any production.
                self.pos += 1;
            }
        }
        self.tokens
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Number of leading dashes when a parameter identifier starts here.
    fn parameter_prefix(&self) -> Option<usize> {
        match (self.peek(0), self.peek(1), self.peek(2)) {
            (Some('-'), Some(c), _) if is_word_char(c) => Some(1),
            (Some('-'), Some('-'), Some(c)) if is_word_char(c) => Some(2),
            _ => None,
        }
    }

    fn parameter(&mut self, dashes: usize) {
        let start = self.pos;
        self.pos += dashes;
        self.take_while(is_word_char);
        let identifier: String = self.chars[start..self.pos].iter().collect();
        self.emit(identifier);

        self.take_while(char::is_whitespace);
        if self.parameter_prefix().is_some() {
            return;
        }
        if let Some(argument) = self.argument() {
            self.emit(argument);
        }
    }

    fn argument(&mut self) -> Option<String> {
        match self.peek(0)? {
            quote @ ('"' | '\'') => {
                if let Some(quoted) = self.quoted(quote) {
                    return Some(quoted);
                }
                Some(self.take_while(|c| !c.is_whitespace()))
            }
            _ => Some(self.take_while(|c| !c.is_whitespace())),
        }
    }

    /// Consume `quote ... quote` and return the interior, or leave the
    /// position untouched when the closing quote is missing.
    fn quoted(&mut self, quote: char) -> Option<String> {
        let open = self.pos;
        let close = self.chars[open + 1..]
            .iter()
            .position(|&c| c == quote)
            .map(|offset| open + 1 + offset)?;
        self.pos = close + 1;
        Some(self.chars[open + 1..close].iter().collect())
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek(0).is_some_and(&predicate) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn emit(&mut self, token: String) {
        if !token.trim().is_empty() {
            self.tokens.push(token);
        }
    }
}
