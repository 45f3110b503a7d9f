//! Shell-style word splitting for a single line of input.

use std::fmt;

/// Errors that can occur while splitting a line into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A single or double quote was opened and never closed.
    UnterminatedQuote,
    /// The line ended right after a backslash, leaving nothing to escape.
    DanglingEscape,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedQuote => write!(f, "unterminated quote"),
            LexError::DanglingEscape => write!(f, "nothing to escape after '\\'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between words, skipping whitespace.
    Between,
    /// Inside an unquoted word.
    Word,
    /// Inside `'...'`; everything is literal.
    SingleQuoted,
    /// Inside `"..."`; backslash escapes only `"` and `\`.
    DoubleQuoted,
}

struct WordSplitter {
    input: Vec<char>,
    pos: usize,
    state: State,
    buffer: String,
    /// True once the current word has any substance. Tracked separately
    /// from the buffer so that `""` still yields an (empty) word.
    in_word: bool,
}

impl WordSplitter {
    fn new(line: &str) -> Self {
        WordSplitter {
            input: line.chars().collect(),
            pos: 0,
            state: State::Between,
            buffer: String::new(),
            in_word: false,
        }
    }

    /// Runs the state machine over the whole line and collects words.
    fn split(mut self) -> Result<Vec<String>, LexError> {
        let mut words = Vec::new();

        while let Some(ch) = self.read_char() {
            match self.state {
                State::Between => self.handle_between(ch)?,
                State::Word => self.handle_word(ch, &mut words)?,
                State::SingleQuoted => self.handle_single_quoted(ch),
                State::DoubleQuoted => self.handle_double_quoted(ch)?,
            }
        }

        // If a quote is still open at the end of the line, the word it was
        // building is unusable.
        if matches!(self.state, State::SingleQuoted | State::DoubleQuoted) {
            return Err(LexError::UnterminatedQuote);
        }
        if self.in_word {
            words.push(self.buffer);
        }

        Ok(words)
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_between(&mut self, ch: char) -> Result<(), LexError> {
        match ch {
            c if c.is_whitespace() => {}
            '\'' => {
                self.state = State::SingleQuoted;
                self.in_word = true;
            }
            '"' => {
                self.state = State::DoubleQuoted;
                self.in_word = true;
            }
            '\\' => {
                let escaped = self.read_char().ok_or(LexError::DanglingEscape)?;
                self.buffer.push(escaped);
                self.state = State::Word;
                self.in_word = true;
            }
            c => {
                self.buffer.push(c);
                self.state = State::Word;
                self.in_word = true;
            }
        }
        Ok(())
    }

    fn handle_word(&mut self, ch: char, words: &mut Vec<String>) -> Result<(), LexError> {
        match ch {
            c if c.is_whitespace() => {
                words.push(std::mem::take(&mut self.buffer));
                self.in_word = false;
                self.state = State::Between;
            }
            '\'' => self.state = State::SingleQuoted,
            '"' => self.state = State::DoubleQuoted,
            '\\' => {
                let escaped = self.read_char().ok_or(LexError::DanglingEscape)?;
                self.buffer.push(escaped);
            }
            c => self.buffer.push(c),
        }
        Ok(())
    }

    fn handle_single_quoted(&mut self, ch: char) {
        match ch {
            '\'' => self.state = State::Word,
            c => self.buffer.push(c),
        }
    }

    fn handle_double_quoted(&mut self, ch: char) -> Result<(), LexError> {
        match ch {
            '"' => self.state = State::Word,
            '\\' => match self.read_char() {
                Some(c @ ('"' | '\\')) => self.buffer.push(c),
                Some(c) => {
                    // Backslash stays literal before anything else, as in sh.
                    self.buffer.push('\\');
                    self.buffer.push(c);
                }
                None => return Err(LexError::UnterminatedQuote),
            },
            c => self.buffer.push(c),
        }
        Ok(())
    }
}

/// Split one line into shell words.
///
/// Whitespace separates words; single quotes keep everything literal;
/// double quotes keep whitespace but allow `\"` and `\\`; outside quotes a
/// backslash escapes whatever follows it. Quoting that is still open at the
/// end of the line is an error, as is a trailing lone backslash.
pub fn split_words(line: &str) -> Result<Vec<String>, LexError> {
    WordSplitter::new(line).split()
}
